//! Mood palette and mood selection snapshot.
//!
//! # Invariants
//! - `MoodSelection::color` is copied from the palette when the mood is
//!   selected and never re-derived afterwards.

use crate::model::language::Language;
use serde::{Deserialize, Serialize};

/// Fixed set of moods a potion can be brewed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodKind {
    Joy,
    Calm,
    Energy,
    Sadness,
    Tiredness,
    Anger,
}

impl MoodKind {
    /// All moods in picker order.
    pub const ALL: [MoodKind; 6] = [
        Self::Joy,
        Self::Calm,
        Self::Energy,
        Self::Sadness,
        Self::Tiredness,
        Self::Anger,
    ];

    /// Stable wire key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Calm => "calm",
            Self::Energy => "energy",
            Self::Sadness => "sadness",
            Self::Tiredness => "tiredness",
            Self::Anger => "anger",
        }
    }

    /// Parses a wire key. Returns `None` for unknown keys.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "joy" => Some(Self::Joy),
            "calm" => Some(Self::Calm),
            "energy" => Some(Self::Energy),
            "sadness" => Some(Self::Sadness),
            "tiredness" => Some(Self::Tiredness),
            "anger" => Some(Self::Anger),
            _ => None,
        }
    }

    /// Palette color as `#rrggbb`.
    pub fn color(self) -> &'static str {
        match self {
            Self::Joy => "#ffb6c1",
            Self::Calm => "#e6e6fa",
            Self::Energy => "#ff69b4",
            Self::Sadness => "#9370db",
            Self::Tiredness => "#d8bfd8",
            Self::Anger => "#ff4500",
        }
    }

    pub fn display_name(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Joy, Language::En) => "Joy",
            (Self::Joy, Language::Ru) => "Радость",
            (Self::Calm, Language::En) => "Calm",
            (Self::Calm, Language::Ru) => "Спокойствие",
            (Self::Energy, Language::En) => "Energy",
            (Self::Energy, Language::Ru) => "Энергия",
            (Self::Sadness, Language::En) => "Sadness",
            (Self::Sadness, Language::Ru) => "Грусть",
            (Self::Tiredness, Language::En) => "Tiredness",
            (Self::Tiredness, Language::Ru) => "Усталость",
            (Self::Anger, Language::En) => "Anger",
            (Self::Anger, Language::Ru) => "Злость",
        }
    }
}

/// Mood picked for the next brew, with its color frozen at selection time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodSelection {
    pub mood: MoodKind,
    /// Serialized hex color, e.g. `#ffb6c1`.
    pub color: String,
}

impl MoodSelection {
    /// Snapshots the palette color of `mood`.
    pub fn new(mood: MoodKind) -> Self {
        Self {
            mood,
            color: mood.color().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MoodKind, MoodSelection};
    use crate::color::parse_hex;

    #[test]
    fn every_palette_color_is_valid_hex() {
        for mood in MoodKind::ALL {
            assert!(parse_hex(mood.color()).is_ok(), "bad color for {mood:?}");
            assert_eq!(MoodKind::parse(mood.as_str()), Some(mood));
        }
    }

    #[test]
    fn selection_copies_palette_color() {
        let selection = MoodSelection::new(MoodKind::Anger);
        assert_eq!(selection.mood, MoodKind::Anger);
        assert_eq!(selection.color, "#ff4500");
    }
}
