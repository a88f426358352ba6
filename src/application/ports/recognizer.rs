//! Recognition port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::prescription::{Instruction, PrescriptionImage};

/// Recognition errors
#[derive(Debug, Clone, Error)]
pub enum RecognitionError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty response from recognition service")]
    EmptyResponse,

    #[error("Request blocked by recognition service: {0}")]
    Blocked(String),

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for prescription recognition
#[async_trait]
pub trait Recognizer: Send + Sync {
    /// Transcribe a prescription image into text.
    ///
    /// # Arguments
    /// * `image` - The decoded prescription photo
    /// * `instruction` - What to extract and which language to answer in
    ///
    /// # Returns
    /// The service's text, unmodified, or an error
    async fn recognize(
        &self,
        image: &PrescriptionImage,
        instruction: &Instruction,
    ) -> Result<String, RecognitionError>;
}
