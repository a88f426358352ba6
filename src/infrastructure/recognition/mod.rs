//! Recognition adapters

mod gemini;

pub use gemini::{GeminiRecognizer, API_BASE_URL};
