//! Builtin reply templates and the default rule order.
//!
//! Templates are minijinja sources rendered with `region`, `land_size`,
//! `soil_type`, `climate` and `season`.

use super::rule::{Reply, Topic, TopicRule};

pub const WELCOME: &str = "welcome";
pub const DEFAULT: &str = "default";

/// `(name, source)` pairs for every builtin template.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        WELCOME,
        "Hello! I'm your AI farming assistant. Based on your details - {{ region }}, \
         {{ land_size }} farm with {{ soil_type }}, {{ climate }} climate for {{ season }} \
         season - I'm ready to help with crop recommendations, farming techniques, pest \
         management, and more. What would you like to know?",
    ),
    (
        "crop_kharif",
        "For Kharif season in {{ region }} with {{ soil_type }}, I recommend: Rice (if water \
         available), Cotton, Sugarcane, or Maize. These crops suit the monsoon period and your \
         soil type. Would you like specific variety recommendations?",
    ),
    (
        "crop_rabi",
        "For Rabi season in {{ region }}, consider: Wheat, Barley, Mustard, Gram (Chickpea), or \
         Peas. These winter crops work well with {{ soil_type }}. Need irrigation and fertilizer \
         guidance?",
    ),
    (
        "crop_zaid",
        "For Zaid season in {{ region }}, try: Fodder crops, Watermelon, Muskmelon, Cucumber, or \
         Fodder Maize. These handle the summer heat well with proper irrigation.",
    ),
    (
        "fertilizer",
        "Based on your {{ soil_type }}, I recommend: NPK fertilizers with balanced ratios, \
         organic compost, and micronutrients like Zinc and Boron. For specific dosage, conduct a \
         soil test first. Would you like organic or chemical fertilizer options?",
    ),
    (
        "pest",
        "Common pests in {{ region }} include: Aphids, Bollworm, and Stem Borer. Integrated Pest \
         Management (IPM) works best - use neem oil, install pheromone traps, and maintain field \
         hygiene. Need specific pest identification help?",
    ),
    (
        "irrigation",
        "For {{ climate }} climate and {{ land_size }} farm, consider: Drip irrigation for water \
         efficiency, sprinkler systems for uniform coverage. Check soil moisture at 6-inch depth \
         before watering. Need water scheduling guidance?",
    ),
    (
        "market",
        "Current market trends in {{ region }}: Check local mandis, use government apps like \
         eNAM for price discovery. Consider value-added processing and direct marketing. Want \
         information about government schemes?",
    ),
    (
        "weather",
        "For {{ climate }} conditions in {{ region }}: Monitor IMD forecasts, plan sowing with \
         rainfall patterns, use weather-based crop advisories. Install weather stations for \
         micro-climate data. Need seasonal planning help?",
    ),
    (
        DEFAULT,
        "I can help you with crop selection, fertilization, pest management, irrigation, market \
         prices, and weather planning for your {{ land_size }} farm in {{ region }}. What \
         specific farming challenge are you facing?",
    ),
];

/// Rules in precedence order. Trigger vocabularies overlap ("water" and
/// "climate" can appear together), so the order decides the reply.
pub fn builtin_rules() -> Vec<TopicRule> {
    vec![
        TopicRule::new(
            Topic::Crop,
            &["crop", "what to grow"],
            Reply::BySeason {
                kharif: "crop_kharif",
                rabi: "crop_rabi",
                otherwise: "crop_zaid",
            },
        ),
        TopicRule::new(
            Topic::Fertilizer,
            &["fertilizer", "nutrients"],
            Reply::Template("fertilizer"),
        ),
        TopicRule::new(Topic::Pest, &["pest", "disease"], Reply::Template("pest")),
        TopicRule::new(
            Topic::Irrigation,
            &["irrigation", "water"],
            Reply::Template("irrigation"),
        ),
        TopicRule::new(Topic::Market, &["price", "market"], Reply::Template("market")),
        TopicRule::new(
            Topic::Weather,
            &["weather", "climate"],
            Reply::Template("weather"),
        ),
    ]
}
