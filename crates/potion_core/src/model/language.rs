//! Supported narrative/UI languages.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Display language for narratives and localized labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// English. Used when no preference has been stored.
    #[default]
    En,
    /// Russian.
    Ru,
}

impl Language {
    /// Stable wire value (`en` / `ru`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// Parses a stored wire value. Returns `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "en" => Some(Self::En),
            "ru" => Some(Self::Ru),
            _ => None,
        }
    }

    /// Returns the other supported language.
    pub fn toggle(self) -> Self {
        match self {
            Self::En => Self::Ru,
            Self::Ru => Self::En,
        }
    }

    /// Language badge shown on the toggle button.
    pub fn badge(self) -> &'static str {
        match self {
            Self::En => "🌍 EN",
            Self::Ru => "🌍 RU",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
