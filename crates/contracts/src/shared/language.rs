use serde::{Deserialize, Serialize};

/// UI language of the portal.
///
/// The active language is passed explicitly into every read call, it is
/// never stored inside a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    /// Value for the `Accept-Language` header and the `lang` attribute
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    /// Picks the first supported language from an `Accept-Language` value.
    ///
    /// `"ar-SA,ar;q=0.9,en;q=0.8"` gives `Ar`. Quality weights are ignored,
    /// order wins. Unknown or empty headers give the default (`En`).
    pub fn from_accept_language(header: &str) -> Self {
        header
            .split(',')
            .filter_map(|part| {
                let tag = part.split(';').next()?.trim();
                let primary = tag.split('-').next()?;
                Language::from_code(primary)
            })
            .next()
            .unwrap_or_default()
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }

    /// Value for the document `dir` attribute
    pub fn dir(&self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    /// Name of the language written in that language (for the switcher)
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
