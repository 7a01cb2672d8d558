//! Canned questions offered under the chat input.

use std::sync::OnceLock;

static QUICK_QUESTIONS: OnceLock<Vec<&'static str>> = OnceLock::new();

/// Returns the quick questions in display order.
pub fn quick_questions() -> &'static [&'static str] {
    QUICK_QUESTIONS.get_or_init(|| {
        vec![
            "What crops should I grow?",
            "Fertilizer recommendations",
            "Pest control methods",
            "Irrigation planning",
            "Current market prices",
            "Weather forecast impact",
        ]
    })
}

/// Quick question by 1-based position, as numbered on screen.
pub fn find_quick_question(number: usize) -> Option<&'static str> {
    number
        .checked_sub(1)
        .and_then(|index| quick_questions().get(index))
        .copied()
}
