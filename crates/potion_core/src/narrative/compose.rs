//! Story assembly.
//!
//! # Invariants
//! - English pluralizes only on `count > 1`, so zero renders as `0 task`.
//! - Russian defaults to two forms: `count == 1` singular, anything else the
//!   plural instrumental. The grammatical variant is opt-in.

use crate::model::category::Category;
use crate::model::language::Language;
use crate::model::mood::MoodKind;
use crate::model::potion::{Potion, PotionRecord};
use crate::narrative::templates::{
    category_clause, conjunction, enhancement_sentence, mood_template, note_sentence,
};
use std::error::Error;
use std::fmt::{Display, Formatter};

const RU_SINGULAR_SUFFIX: &str = "ой задачей";
const RU_PLURAL_SUFFIX: &str = "ыми задачами";

pub type NarrativeResult<T> = Result<T, NarrativeError>;

/// Foreign potion data referenced a key outside the fixed tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrativeError {
    UnknownMood(String),
    UnknownCategory(String),
}

impl Display for NarrativeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMood(key) => write!(f, "unknown mood `{key}`"),
            Self::UnknownCategory(key) => write!(f, "unknown task category `{key}`"),
        }
    }
}

impl Error for NarrativeError {}

/// Russian count agreement strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RussianPlurals {
    /// `1` gets the singular suffix, every other count the plural one.
    #[default]
    Collapsed,
    /// one/few/many selection by last digits (21 agrees like 1, 11 like 5).
    Grammatical,
}

/// Knobs for story composition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NarrativeOptions {
    pub russian_plurals: RussianPlurals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PluralCategory {
    One,
    Few,
    Many,
}

/// Composes the story for a brewed potion with default options.
pub fn compose(potion: &Potion, language: Language) -> String {
    compose_with(potion, language, NarrativeOptions::default())
}

pub fn compose_with(potion: &Potion, language: Language, options: NarrativeOptions) -> String {
    assemble(
        potion.mood.mood,
        &potion.task_categories,
        potion.task_count,
        &potion.diary_note,
        language,
        options,
    )
}

/// Composes the story for foreign potion data.
///
/// # Errors
/// - `UnknownMood` / `UnknownCategory` when a key is outside the fixed tables.
pub fn compose_record(record: &PotionRecord, language: Language) -> NarrativeResult<String> {
    let mood = MoodKind::parse(&record.mood.mood)
        .ok_or_else(|| NarrativeError::UnknownMood(record.mood.mood.clone()))?;
    let categories = record
        .task_categories
        .iter()
        .map(|key| {
            Category::parse(key).ok_or_else(|| NarrativeError::UnknownCategory(key.clone()))
        })
        .collect::<NarrativeResult<Vec<_>>>()?;

    Ok(assemble(
        mood,
        &categories,
        record.task_count,
        &record.diary_note,
        language,
        NarrativeOptions::default(),
    ))
}

/// Composes every record independently; one bad record does not affect others.
pub fn compose_records(
    records: &[PotionRecord],
    language: Language,
) -> Vec<NarrativeResult<String>> {
    records
        .iter()
        .map(|record| compose_record(record, language))
        .collect()
}

fn assemble(
    mood: MoodKind,
    categories: &[Category],
    task_count: usize,
    note: &str,
    language: Language,
    options: NarrativeOptions,
) -> String {
    let mut story = mood_template(mood, language).to_string();

    if !categories.is_empty() {
        let clauses = categories
            .iter()
            .map(|category| category_clause(*category, language))
            .collect::<Vec<_>>()
            .join(conjunction(language));
        story.push_str(&enhancement_sentence(language, &clauses));
    }

    story.push_str(&count_sentence(task_count, language, options));

    if !note.is_empty() {
        story.push_str(&note_sentence(language, note));
    }

    story
}

fn count_sentence(count: usize, language: Language, options: NarrativeOptions) -> String {
    match language {
        Language::En => {
            let plural = if count > 1 { "s" } else { "" };
            format!(" With {count} task{plural} completed, your potion is truly one of a kind.")
        }
        Language::Ru => {
            let suffix = russian_suffix(count, options.russian_plurals);
            format!(" С {count} выполненн{suffix}, ваш эликсир поистине уникален.")
        }
    }
}

fn russian_suffix(count: usize, plurals: RussianPlurals) -> &'static str {
    match plurals {
        RussianPlurals::Collapsed => {
            if count == 1 {
                RU_SINGULAR_SUFFIX
            } else {
                RU_PLURAL_SUFFIX
            }
        }
        RussianPlurals::Grammatical => match russian_plural_category(count) {
            PluralCategory::One => RU_SINGULAR_SUFFIX,
            // Instrumental case: few and many share the same ending.
            PluralCategory::Few | PluralCategory::Many => RU_PLURAL_SUFFIX,
        },
    }
}

fn russian_plural_category(count: usize) -> PluralCategory {
    let last_two = count % 100;
    let last = count % 10;
    if last == 1 && last_two != 11 {
        PluralCategory::One
    } else if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

#[cfg(test)]
mod tests {
    use super::{russian_plural_category, russian_suffix, PluralCategory, RussianPlurals};

    #[test]
    fn collapsed_suffix_has_two_cases() {
        assert_eq!(russian_suffix(1, RussianPlurals::Collapsed), "ой задачей");
        for count in [0, 2, 3, 4, 5, 7, 11, 21] {
            assert_eq!(russian_suffix(count, RussianPlurals::Collapsed), "ыми задачами");
        }
    }

    #[test]
    fn grammatical_categories_follow_last_digits() {
        assert_eq!(russian_plural_category(1), PluralCategory::One);
        assert_eq!(russian_plural_category(21), PluralCategory::One);
        assert_eq!(russian_plural_category(11), PluralCategory::Many);
        assert_eq!(russian_plural_category(3), PluralCategory::Few);
        assert_eq!(russian_plural_category(13), PluralCategory::Many);
        assert_eq!(russian_plural_category(0), PluralCategory::Many);
        assert_eq!(russian_suffix(21, RussianPlurals::Grammatical), "ой задачей");
    }
}
