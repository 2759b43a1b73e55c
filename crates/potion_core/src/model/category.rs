//! Task category model.
//!
//! # Invariants
//! - The category set is closed; wire keys are the lowercase variant names.
//! - Foreign keys that do not match a variant are never coerced into one.

use crate::model::language::Language;
use serde::{Deserialize, Serialize};

/// Glyph used when a foreign category key cannot be resolved.
pub const DEFAULT_CATEGORY_GLYPH: &str = "📝";

/// Fixed set of task categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Work,
    Home,
    Relaxation,
    Social,
    Hobby,
    Sport,
}

impl Category {
    /// All categories in picker order.
    pub const ALL: [Category; 6] = [
        Self::Work,
        Self::Home,
        Self::Relaxation,
        Self::Social,
        Self::Hobby,
        Self::Sport,
    ];

    /// Stable wire key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Home => "home",
            Self::Relaxation => "relaxation",
            Self::Social => "social",
            Self::Hobby => "hobby",
            Self::Sport => "sport",
        }
    }

    /// Parses a wire key. Returns `None` for unknown keys.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "work" => Some(Self::Work),
            "home" => Some(Self::Home),
            "relaxation" => Some(Self::Relaxation),
            "social" => Some(Self::Social),
            "hobby" => Some(Self::Hobby),
            "sport" => Some(Self::Sport),
            _ => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Work => "💼",
            Self::Home => "🏠",
            Self::Relaxation => "🧘",
            Self::Social => "👥",
            Self::Hobby => "🎨",
            Self::Sport => "⚽",
        }
    }

    /// Localized display name used by task lists.
    pub fn display_name(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Work, Language::En) => "Work/Study",
            (Self::Work, Language::Ru) => "Работа/Учеба",
            (Self::Home, Language::En) => "Home/Chores",
            (Self::Home, Language::Ru) => "Дом/Хлопоты",
            (Self::Relaxation, Language::En) => "Relaxation/Meditation",
            (Self::Relaxation, Language::Ru) => "Отдых/Медитация",
            (Self::Social, Language::En) => "Social/Friends",
            (Self::Social, Language::Ru) => "Общение/Друзья",
            (Self::Hobby, Language::En) => "Hobby/Creativity",
            (Self::Hobby, Language::Ru) => "Хобби/Творчество",
            (Self::Sport, Language::En) => "Sport/Activity",
            (Self::Sport, Language::Ru) => "Спорт/Активность",
        }
    }
}

/// Resolves a glyph for a possibly-foreign category key.
pub fn glyph_for_key(key: &str) -> &'static str {
    Category::parse(key).map_or(DEFAULT_CATEGORY_GLYPH, Category::glyph)
}
