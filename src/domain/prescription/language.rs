//! Target language value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidLanguageError;

/// All available target languages
pub const ALL_LANGUAGES: &[Language] = &[Language::Spanish, Language::English];

/// Language the transcription is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Spanish,
    English,
}

impl Language {
    /// Get the short code for this language
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spanish => "es",
            Self::English => "en",
        }
    }

    /// Title printed at the top of the exported document.
    ///
    /// Kept plain ASCII so it never hits the placeholder substitution.
    pub const fn document_title(&self) -> &'static str {
        match self {
            Self::Spanish => "TRADUCCION RECETA MEDICA (IA)",
            Self::English => "PRESCRIPTION TRANSLATION (AI)",
        }
    }
}

impl FromStr for Language {
    type Err = InvalidLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" | "spanish" | "español" | "espanol" => Ok(Self::Spanish),
            "en" | "english" => Ok(Self::English),
            _ => Err(InvalidLanguageError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
