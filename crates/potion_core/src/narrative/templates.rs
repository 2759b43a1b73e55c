//! Fixed bilingual sentence tables.

use crate::model::category::Category;
use crate::model::language::Language;
use crate::model::mood::MoodKind;

/// Opening sentence for each mood.
pub fn mood_template(mood: MoodKind, language: Language) -> &'static str {
    match (mood, language) {
        (MoodKind::Joy, Language::En) => "A radiant potion that sparkles with pink happiness, capturing the joy of your productive day.",
        (MoodKind::Joy, Language::Ru) => "Сияющий эликсир, искрящийся розовым счастьем, отражает радость твоего дня.",
        (MoodKind::Calm, Language::En) => "A serene lavender elixir that flows like peaceful waters, reflecting your tranquil moments.",
        (MoodKind::Calm, Language::Ru) => "Спокойный лавандовый эликсир течет, как мирная река, даря умиротворение.",
        (MoodKind::Energy, Language::En) => "A vibrant pink potion that bubbles with life and vigor, embodying your dynamic spirit.",
        (MoodKind::Energy, Language::Ru) => "Яркий розовый эликсир пузырится энергией, отражая твой живой дух.",
        (MoodKind::Sadness, Language::En) => "A gentle purple brew that holds your emotions tenderly, like a comforting embrace.",
        (MoodKind::Sadness, Language::Ru) => "Нежный фиолетовый эликсир бережно хранит твои эмоции, словно объятия.",
        (MoodKind::Tiredness, Language::En) => "A soft lavender mixture that whispers of rest and the gentle need for self-care.",
        (MoodKind::Tiredness, Language::Ru) => "Мягкий лавандовый эликсир напоминает о отдыхе и заботе о себе.",
        (MoodKind::Anger, Language::En) => "A fiery red potion that simmers with intensity, transforming rage into powerful determination.",
        (MoodKind::Anger, Language::Ru) => "Огненный красный эликсир кипит страстью и превращает раздражение в решимость.",
    }
}

/// Enhancement clause contributed by a task category.
pub fn category_clause(category: Category, language: Language) -> &'static str {
    match (category, language) {
        (Category::Work, Language::En) => "with hints of determination",
        (Category::Work, Language::Ru) => "с нотками решимости",
        (Category::Home, Language::En) => "infused with warmth and comfort",
        (Category::Home, Language::Ru) => "наполненный теплом и уютом",
        (Category::Relaxation, Language::En) => "carrying whispers of peace",
        (Category::Relaxation, Language::Ru) => "несущий шепот покоя",
        (Category::Social, Language::En) => "bubbling with connection and laughter",
        (Category::Social, Language::Ru) => "пузырящийся общением и смехом",
        (Category::Hobby, Language::En) => "sparkling with creativity",
        (Category::Hobby, Language::Ru) => "искрящийся творчеством",
        (Category::Sport, Language::En) => "pulsing with vitality",
        (Category::Sport, Language::Ru) => "пульсирующий жизненной силой",
    }
}

/// Word joining category clauses.
pub fn conjunction(language: Language) -> &'static str {
    match language {
        Language::En => " and ",
        Language::Ru => " и ",
    }
}

/// Sentence wrapping the joined category clauses.
pub fn enhancement_sentence(language: Language, clauses: &str) -> String {
    match language {
        Language::En => format!(" This magical brew is enhanced {clauses}."),
        Language::Ru => format!(" Этот магический напиток усилен {clauses}."),
    }
}

/// Sentence quoting the diary note verbatim.
pub fn note_sentence(language: Language, note: &str) -> String {
    match language {
        Language::En => {
            format!(" The essence of \"{note}\" adds a personal touch to this unique creation.")
        }
        Language::Ru => {
            format!(" Сущность \"{note}\" добавляет личный оттенок к этому уникальному творению.")
        }
    }
}
