//! Topic rules evaluated by the response selector.

use crate::farm::Season;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Farming topics the advisor recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Topic {
    Crop,
    Fertilizer,
    Pest,
    Irrigation,
    Market,
    Weather,
}

/// Which template answers a matched topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// A single template.
    Template(&'static str),
    /// A template chosen by the captured season. Zaid and year-round both
    /// use `otherwise`.
    BySeason {
        kharif: &'static str,
        rabi: &'static str,
        otherwise: &'static str,
    },
}

impl Reply {
    pub fn template_for(&self, season: Season) -> &'static str {
        match *self {
            Self::Template(name) => name,
            Self::BySeason {
                kharif,
                rabi,
                otherwise,
            } => match season {
                Season::Kharif => kharif,
                Season::Rabi => rabi,
                Season::Zaid | Season::YearRound => otherwise,
            },
        }
    }

    /// Every template name this reply can produce.
    pub fn template_names(&self) -> Vec<&'static str> {
        match *self {
            Self::Template(name) => vec![name],
            Self::BySeason {
                kharif,
                rabi,
                otherwise,
            } => vec![kharif, rabi, otherwise],
        }
    }
}

/// One entry of the ordered rule list: trigger substrings and the reply.
///
/// Triggers are matched against the lowercased user text, so they are
/// lowercase themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRule {
    pub topic: Topic,
    pub triggers: Vec<&'static str>,
    pub reply: Reply,
}

impl TopicRule {
    pub fn new(topic: Topic, triggers: &[&'static str], reply: Reply) -> Self {
        Self {
            topic,
            triggers: triggers.to_vec(),
            reply,
        }
    }

    /// True when any trigger occurs in the already-normalized text.
    pub fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|trigger| normalized.contains(trigger))
    }
}
