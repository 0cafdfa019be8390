use serde::{Deserialize, Serialize};

use super::language::Language;

/// Bilingual display name, serialized as `{"en": "...", "ar": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LocalizedName {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub ar: String,
}

impl LocalizedName {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// Exact value for a language, possibly empty
    pub fn exact(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }

    /// Value for a language, falling back to the other language when blank
    pub fn get(&self, lang: Language) -> &str {
        let value = self.exact(lang);
        if value.trim().is_empty() {
            self.exact(lang.other())
        } else {
            value
        }
    }

    pub fn set(&mut self, lang: Language, value: String) {
        match lang {
            Language::En => self.en = value,
            Language::Ar => self.ar = value,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.en.trim().is_empty() && !self.ar.trim().is_empty()
    }
}
