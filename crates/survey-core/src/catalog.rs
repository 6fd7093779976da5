//! Static option catalog
//!
//! Every question with predefined choices draws its options from one of the
//! fixed categories below. Entries are baked in at build time; ids are the
//! stable machine identifiers, labels the human-readable display strings
//! that also end up in the remote spreadsheet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One selectable choice inside a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionEntry {
    /// Stable identifier, unique within its category
    pub id: &'static str,
    /// Display label shown to the respondent
    pub label: &'static str,
}

impl OptionEntry {
    const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

const ROLE: &[OptionEntry] = &[
    OptionEntry::new("business", "Предприниматель / Бизнес"),
    OptionEntry::new("freelance", "Фрилансер / Специалист"),
    OptionEntry::new("creative", "Творческий / Хобби"),
    OptionEntry::new("observer", "Просто наблюдаю"),
];

const GOALS: &[OptionEntry] = &[
    OptionEntry::new("money", "Идеи для заработка"),
    OptionEntry::new("work", "Нейросети для работы"),
    OptionEntry::new("content", "Контент и визуал"),
    OptionEntry::new("fun", "Развлечение и фан"),
];

const CONTENT: &[OptionEntry] = &[
    OptionEntry::new("guides", "Пошаговые гайды"),
    OptionEntry::new("cases", "Кейсы «Было / Стало»"),
    OptionEntry::new("tools", "Подборки инструментов"),
    OptionEntry::new("memes", "Мемы и лёгкий формат"),
];

const TOOLS: &[OptionEntry] = &[
    OptionEntry::new("chatgpt", "ChatGPT / Claude"),
    OptionEntry::new("midjourney", "Midjourney / картинки"),
    OptionEntry::new("video", "Sora / Veo / видео"),
    OptionEntry::new("music", "Suno / Udio (музыка)"),
    OptionEntry::new("beginner", "Ничем не пользуюсь"),
];

const SUNO_REASON: &[OptionEntry] = &[
    OptionEntry::new("expensive", "Дорого / нет подписки"),
    OptionEntry::new("hard", "Сложно / не разбирался"),
    OptionEntry::new("not_needed", "Не нужно, я про визуал"),
    OptionEntry::new("missed", "Пропустил этот гайд"),
];

const MOTIVATION: &[OptionEntry] = &[
    OptionEntry::new("earn", "Зарабатывать с помощью AI"),
    OptionEntry::new("simplify", "Упрощать свою работу"),
    OptionEntry::new("jokes", "Делать приколы для себя"),
    OptionEntry::new("stay_tuned", "Просто быть в теме"),
];

const FORMATS: &[OptionEntry] = &[
    OptionEntry::new("short", "Короткие посты"),
    OptionEntry::new("long", "Лонгриды"),
    OptionEntry::new("video", "Видео / кружочки"),
    OptionEntry::new("checklists", "Чек-листы / PDF"),
];

const COURSES: &[OptionEntry] = &[
    OptionEntry::new("prompting", "Промпт-инжиниринг / Тексты"),
    OptionEntry::new("images", "Генерация изображений"),
    OptionEntry::new("video", "Создание AI-видео"),
    OptionEntry::new("music", "AI-музыка (Suno/Udio)"),
    OptionEntry::new("marketing", "Маркетинг и продажи"),
    OptionEntry::new("coding", "Кодинг с нейросетями"),
];

/// Closed set of question categories
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Role,
    Goals,
    Content,
    Tools,
    SunoReason,
    Motivation,
    Formats,
    Courses,
}

impl Category {
    /// All categories, in question order
    pub const ALL: [Category; 8] = [
        Category::Role,
        Category::Goals,
        Category::Content,
        Category::Tools,
        Category::SunoReason,
        Category::Motivation,
        Category::Formats,
        Category::Courses,
    ];

    /// Catalog key for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Role => "role",
            Category::Goals => "goals",
            Category::Content => "content",
            Category::Tools => "tools",
            Category::SunoReason => "suno",
            Category::Motivation => "motivation",
            Category::Formats => "formats",
            Category::Courses => "courses",
        }
    }

    /// Field name this category occupies in a serialized answer record
    pub fn record_field(&self) -> &'static str {
        match self {
            Category::Role => "role",
            Category::Goals => "goals",
            Category::Content => "preferredContent",
            Category::Tools => "tools",
            Category::SunoReason => "sunoReason",
            Category::Motivation => "motivation",
            Category::Formats => "formats",
            Category::Courses => "courses",
        }
    }

    /// The fixed option list for this category
    pub fn entries(&self) -> &'static [OptionEntry] {
        match self {
            Category::Role => ROLE,
            Category::Goals => GOALS,
            Category::Content => CONTENT,
            Category::Tools => TOOLS,
            Category::SunoReason => SUNO_REASON,
            Category::Motivation => MOTIVATION,
            Category::Formats => FORMATS,
            Category::Courses => COURSES,
        }
    }

    /// Whether `id` is a known option id of this category
    pub fn contains_id(&self, id: &str) -> bool {
        self.entries().iter().any(|e| e.id == id)
    }

    /// Display label for a known id
    pub fn label_for(&self, id: &str) -> Option<&'static str> {
        self.entries().iter().find(|e| e.id == id).map(|e| e.label)
    }

    /// Display label for an id, falling back to the raw id for unknown values
    pub fn label_or_raw<'a>(&self, id: &'a str) -> &'a str {
        self.label_for(id).unwrap_or(id)
    }

    /// Normalize a raw value to an option id.
    ///
    /// Remote rows may carry either ids (written by older clients) or display
    /// labels (written by the label-projected forward). Ids pass through
    /// verbatim, known labels translate back to their id, and anything else
    /// passes through unchanged so data-quality problems stay visible in the
    /// statistics instead of silently disappearing.
    pub fn normalize(&self, value: &str) -> String {
        if self.contains_id(value) {
            return value.to_string();
        }
        match self.entries().iter().find(|e| e.label == value) {
            Some(entry) => entry.id.to_string(),
            None => value.to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
