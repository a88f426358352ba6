//! Translate prescription use case

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::prescription::{Instruction, Language, PrescriptionImage};

use super::ports::{DocumentExporter, ExportError, ExportedDocument, RecognitionError, Recognizer};

/// Errors from the translate use case
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Recognition failed: {0}")]
    Recognition(#[from] RecognitionError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

/// Input parameters for the translate use case
#[derive(Debug, Clone)]
pub struct TranslateInput {
    /// The uploaded prescription photo
    pub image: PrescriptionImage,
    /// Language the transcription should be written in
    pub language: Language,
    /// Title line of the exported document
    pub title: String,
    /// Whether to render the result into a document
    pub enable_export: bool,
}

/// Output from the translate use case
#[derive(Debug, Clone)]
pub struct TranslateOutput {
    /// The transcribed text, as returned by the service
    pub text: String,
    /// The rendered document (if export was enabled)
    pub document: Option<ExportedDocument>,
    /// Image size in human-readable format
    pub image_size: String,
}

/// Callbacks for progress and status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct TranslateCallbacks {
    /// Called when the recognition request is sent
    pub on_recognition_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when the recognition request returns, successfully or not
    pub on_recognition_end: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called once the document has been rendered
    pub on_exported: Option<Box<dyn Fn(&ExportedDocument) + Send + Sync>>,
}

/// One-shot recognize-then-export use case
pub struct TranslatePrescriptionUseCase<R, E>
where
    R: Recognizer,
    E: DocumentExporter,
{
    recognizer: R,
    exporter: E,
}

impl<R, E> TranslatePrescriptionUseCase<R, E>
where
    R: Recognizer,
    E: DocumentExporter,
{
    /// Create a new use case instance
    pub fn new(recognizer: R, exporter: E) -> Self {
        Self {
            recognizer,
            exporter,
        }
    }

    /// Execute the translation workflow.
    ///
    /// A recognition failure ends the workflow before any export happens.
    pub async fn execute(
        &self,
        input: TranslateInput,
        callbacks: TranslateCallbacks,
    ) -> Result<TranslateOutput, TranslateError> {
        let image_size = input.image.human_readable_size();
        let (width, height) = input.image.dimensions();
        debug!(
            mime_type = %input.image.mime_type(),
            width,
            height,
            size = %image_size,
            "prepared prescription image"
        );

        let instruction = Instruction::build(input.language);

        if let Some(ref cb) = callbacks.on_recognition_start {
            cb();
        }

        let result = self.recognizer.recognize(&input.image, &instruction).await;

        if let Some(ref cb) = callbacks.on_recognition_end {
            cb();
        }

        // The image is not needed past this point
        drop(input.image);

        let text = result.map_err(|e| {
            warn!(error = %e, "recognition failed");
            e
        })?;
        info!(chars = text.chars().count(), language = %input.language, "recognition complete");

        let document = if input.enable_export {
            let document = self.exporter.export(&input.title, &text)?;
            info!(
                bytes = document.bytes.len(),
                pages = document.pages,
                substitutions = document.substitutions,
                "document exported"
            );
            if let Some(ref cb) = callbacks.on_exported {
                cb(&document);
            }
            Some(document)
        } else {
            None
        };

        Ok(TranslateOutput {
            text,
            document,
            image_size,
        })
    }
}
