//! RxScribe - AI-powered handwritten prescription transcription CLI
//!
//! This crate sends a photo of a handwritten prescription to Google Gemini,
//! prints the legible transcription, and renders it into a simple PDF.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, layout, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Gemini, PDF, config file)
//! - **CLI**: Command-line interface, argument parsing, and output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
