//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod exporter;
pub mod recognizer;

// Re-export common types
pub use config::ConfigStore;
pub use exporter::{DocumentExporter, ExportError, ExportedDocument};
pub use recognizer::{RecognitionError, Recognizer};
