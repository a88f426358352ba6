//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidLanguageError;
use crate::domain::prescription::Language;

/// Gemini model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// File name of the exported PDF when none is configured
pub const DEFAULT_OUTPUT: &str = "Receta_Traducida.pdf";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub model: Option<String>,
    pub language: Option<String>,
    pub output: Option<String>,
    pub title: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            api_base: None,
            model: Some(DEFAULT_MODEL.to_string()),
            language: Some(Language::default().to_string()),
            output: Some(DEFAULT_OUTPUT.to_string()),
            title: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            api_base: other.api_base.or(self.api_base),
            model: other.model.or(self.model),
            language: other.language.or(self.language),
            output: other.output.or(self.output),
            title: other.title.or(self.title),
        }
    }

    /// Get the API key if one is configured and non-empty
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    /// Get model name, or the default model if not set
    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Parse the configured language. An unset language is the default.
    pub fn parsed_language(&self) -> Result<Language, InvalidLanguageError> {
        match self.language.as_deref() {
            Some(s) => s.parse(),
            None => Ok(Language::default()),
        }
    }

    /// Get language as parsed Language, or default if not set/invalid
    pub fn language_or_default(&self) -> Language {
        self.parsed_language().unwrap_or_default()
    }

    /// Get output path, or the default file name if not set
    pub fn output_or_default(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT)
    }

    /// Get document title, or the language's default title if not set
    pub fn title_or_default(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| self.language_or_default().document_title().to_string())
    }
}
