use super::rule::{Topic, TopicRule};
use super::templates::{BUILTIN_TEMPLATES, DEFAULT, WELCOME, builtin_rules};
use crate::error::{KrishiError, Result};
use crate::farm::FarmContext;
use minijinja::{Environment, Value, context};

/// Maps free text to a canned reply.
///
/// The rule list is evaluated in order and the first rule with a trigger
/// contained in the lowercased input wins. Without a match the default
/// template answers.
pub struct ResponseSelector {
    rules: Vec<TopicRule>,
    default_template: &'static str,
    env: Environment<'static>,
}

impl std::fmt::Debug for ResponseSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseSelector")
            .field("rules", &self.rules)
            .field("default_template", &self.default_template)
            .finish_non_exhaustive()
    }
}

impl ResponseSelector {
    /// The builtin farming rules and templates.
    pub fn builtin() -> Result<Self> {
        Self::with_rules(builtin_rules(), BUILTIN_TEMPLATES, DEFAULT)
    }

    /// Builds a selector from a custom rule list.
    ///
    /// All templates are compiled up front. Fails when a template does not
    /// parse, when a rule or the default refers to an unknown template, or when
    /// a trigger contains uppercase characters (it could never match).
    pub fn with_rules(
        rules: Vec<TopicRule>,
        templates: &[(&'static str, &'static str)],
        default_template: &'static str,
    ) -> Result<Self> {
        let mut env = Environment::new();
        for &(name, source) in templates {
            env.add_template(name, source)?;
        }

        env.get_template(default_template)?;
        for rule in &rules {
            for name in rule.reply.template_names() {
                env.get_template(name)?;
            }
            if let Some(trigger) = rule
                .triggers
                .iter()
                .find(|trigger| trigger.chars().any(char::is_uppercase))
            {
                return Err(KrishiError::config(format!(
                    "trigger '{}' of {} rule is not lowercase",
                    trigger, rule.topic
                )));
            }
        }

        Ok(Self {
            rules,
            default_template,
            env,
        })
    }

    pub fn rules(&self) -> &[TopicRule] {
        &self.rules
    }

    /// The topic that answers `user_text`, or `None` for the default reply.
    pub fn match_topic(&self, user_text: &str) -> Option<Topic> {
        self.matching_rule(&user_text.to_lowercase())
            .map(|rule| rule.topic)
    }

    /// Reply for `user_text` given the captured farming context.
    ///
    /// Always returns a string.
    pub fn respond(&self, user_text: &str, context: &FarmContext) -> String {
        let normalized = user_text.to_lowercase();
        let template = match self.matching_rule(&normalized) {
            Some(rule) => rule.reply.template_for(context.season()),
            None => self.default_template,
        };
        tracing::debug!(template, "selected reply template");
        self.render(template, context)
    }

    /// Greeting that opens every conversation. Empty when the rule set has no
    /// `welcome` template.
    pub fn welcome_message(&self, context: &FarmContext) -> String {
        self.render(WELCOME, context)
    }

    fn matching_rule(&self, normalized: &str) -> Option<&TopicRule> {
        self.rules.iter().find(|rule| rule.matches(normalized))
    }

    fn render(&self, name: &str, farm: &FarmContext) -> String {
        let values = template_values(farm);
        match self
            .env
            .get_template(name)
            .and_then(|template| template.render(&values))
        {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(template = name, error = %err, "failed to render reply template");
                self.env
                    .get_template(name)
                    .map(|template| template.source().to_string())
                    .unwrap_or_default()
            }
        }
    }
}

fn template_values(farm: &FarmContext) -> Value {
    context! {
        region => farm.region().to_string(),
        land_size => farm.land_size().to_string(),
        soil_type => farm.soil_type().to_string(),
        climate => farm.climate().to_string(),
        season => farm.season().to_string(),
    }
}
