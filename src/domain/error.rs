//! Domain error types

use thiserror::Error;

/// Error when an uploaded file is not a usable prescription image
#[derive(Debug, Clone, Error)]
pub enum InvalidImageError {
    #[error("Unsupported file extension \"{extension}\". Supported formats: JPG, JPEG, PNG")]
    UnsupportedExtension { extension: String },

    #[error("Unsupported image format. Supported formats: JPG, JPEG, PNG")]
    UnsupportedFormat,

    #[error("Failed to decode image: {0}")]
    DecodeFailed(String),
}

/// Error when an invalid language code is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid language: \"{input}\". Valid languages are: es, en")]
pub struct InvalidLanguageError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),

    #[error(
        "Missing API key. Set GOOGLE_API_KEY or configure via 'rx-scribe config set api_key <key>'"
    )]
    MissingApiKey,
}
