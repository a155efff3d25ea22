/// Card printing languages as they appear in inventory exports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    German,
    Spanish,
    French,
    Italian,
    Portuguese,
    Japanese,
    Korean,
    Russian,
    ChineseSimplified,
    ChineseTraditional,
}

impl Language {
    /// Returns the full name of the language (e.g., "English", "German")
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "German",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Russian => "Russian",
            Language::ChineseSimplified => "Simplified Chinese",
            Language::ChineseTraditional => "Traditional Chinese",
        }
    }

    /// Returns the short code used on card identities (e.g., "en", "de")
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Russian => "ru",
            Language::ChineseSimplified => "zhs",
            Language::ChineseTraditional => "zht",
        }
    }

    /// Parse a language code (e.g., "en", "de") into a Language
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Parse a full language name (e.g., "English", "German") into a Language
    pub fn from_full_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "chinese" => Some(Language::ChineseSimplified),
            other => Self::all()
                .iter()
                .copied()
                .find(|lang| lang.as_str().eq_ignore_ascii_case(other)),
        }
    }

    /// Parse either a language code or full name into a Language
    pub fn parse(s: &str) -> Option<Self> {
        Self::from_code(s).or_else(|| Self::from_full_name(s))
    }

    /// Returns all supported languages
    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::German,
            Language::Spanish,
            Language::French,
            Language::Italian,
            Language::Portuguese,
            Language::Japanese,
            Language::Korean,
            Language::Russian,
            Language::ChineseSimplified,
            Language::ChineseTraditional,
        ]
    }
}

/// Short code for a language column value; unknown values pass through.
pub fn language_code(value: &str) -> String {
    match Language::parse(value) {
        Some(lang) => lang.code().to_string(),
        None => value.trim().to_lowercase(),
    }
}
