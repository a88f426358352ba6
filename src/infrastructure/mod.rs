//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the Gemini API and PDF output.

pub mod config;
pub mod document;
pub mod recognition;

// Re-export adapters
pub use config::XdgConfigStore;
pub use document::PdfExporter;
pub use recognition::GeminiRecognizer;
