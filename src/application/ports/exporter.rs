//! Document export port interface

use thiserror::Error;

/// Export errors
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Failed to serialize document: {0}")]
    Serialize(String),
}

/// A rendered document ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// Serialized document bytes
    pub bytes: Vec<u8>,
    /// Characters replaced by the placeholder glyph
    pub substitutions: usize,
    /// Number of pages produced
    pub pages: usize,
}

/// Port for rendering text into a printable document
pub trait DocumentExporter: Send + Sync {
    /// Render a title and body text into document bytes.
    ///
    /// Output is deterministic for a given title and text. Characters the
    /// document cannot encode are substituted, never reported as errors.
    fn export(&self, title: &str, text: &str) -> Result<ExportedDocument, ExportError>;
}
