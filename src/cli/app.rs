//! App runners for translate and export modes

use std::env;
use std::path::Path;
use std::process::ExitCode;

use thiserror::Error;
use tokio::io::AsyncReadExt;
use tracing::{debug, warn};

use crate::application::ports::{ConfigStore, DocumentExporter, ExportedDocument};
use crate::application::{TranslateCallbacks, TranslateInput, TranslatePrescriptionUseCase};
use crate::domain::config::AppConfig;
use crate::domain::error::{ConfigError, InvalidImageError};
use crate::domain::prescription::{ImageMimeType, PrescriptionImage};
use crate::infrastructure::{GeminiRecognizer, PdfExporter};

use super::args::{ExportOptions, TranslateOptions};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variables checked for the API key, in order
pub const API_KEY_ENV_VARS: &[&str] = &["GOOGLE_API_KEY", "GEMINI_API_KEY"];

/// Environment variable overriding the Gemini API base URL
pub const API_BASE_ENV_VAR: &str = "GEMINI_API_BASE";

/// Errors while reading the uploaded image
#[derive(Debug, Error)]
pub enum LoadImageError {
    #[error(transparent)]
    Invalid(#[from] InvalidImageError),

    #[error("Failed to read image {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
}

impl LoadImageError {
    /// Exit code matching the kind of failure
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Invalid(_) => EXIT_USAGE_ERROR,
            Self::Read { .. } => EXIT_ERROR,
        }
    }
}

/// Run recognition on one image, print the text and write the PDF
pub async fn run_translate(api_key: String, options: TranslateOptions) -> ExitCode {
    let presenter = Presenter::new();

    let image = match load_image(&options.image).await {
        Ok(image) => image,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(e.exit_code());
        }
    };
    let (width, height) = image.dimensions();
    presenter.info(&format!(
        "Loaded {} image, {}x{} px",
        image.mime_type(),
        width,
        height
    ));

    // Create adapters
    let mut recognizer = GeminiRecognizer::with_model(api_key, &options.model);
    if let Some(ref base) = options.api_base {
        recognizer = recognizer.with_base_url(base);
    }
    let use_case = TranslatePrescriptionUseCase::new(recognizer, PdfExporter::new());

    let input = TranslateInput {
        image,
        language: options.language,
        title: options.title.clone(),
        enable_export: options.export_pdf,
    };

    let spinner = presenter.start_spinner("Analyzing prescription...");
    let start_handle = spinner.clone();
    let end_handle = spinner.clone();
    let export_pdf = options.export_pdf;
    let callbacks = TranslateCallbacks {
        on_recognition_start: Some(Box::new(move || {
            start_handle.set_message("Waiting for Gemini...");
        })),
        on_recognition_end: Some(Box::new(move || {
            if export_pdf {
                end_handle.set_message("Rendering PDF...");
            }
        })),
        on_exported: None,
    };

    match use_case.execute(input, callbacks).await {
        Ok(output) => {
            spinner.success(&format!("Prescription analyzed ({})", output.image_size));
            presenter.output(&output.text);

            match output.document {
                Some(document) => {
                    match write_document(&presenter, &options.output, &document).await {
                        Ok(()) => ExitCode::from(EXIT_SUCCESS),
                        Err(code) => ExitCode::from(code),
                    }
                }
                None => ExitCode::from(EXIT_SUCCESS),
            }
        }
        Err(e) => {
            spinner.fail("Analysis failed");
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Render an existing text file (or stdin) to PDF
pub async fn run_export(options: ExportOptions) -> ExitCode {
    let presenter = Presenter::new();

    let text = match read_text(&options.input).await {
        Ok(text) => text,
        Err(e) => {
            presenter.error(&format!(
                "Failed to read {}: {}",
                options.input.display(),
                e
            ));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let exporter = PdfExporter::new();
    let document = match exporter.export(&options.title, &text) {
        Ok(document) => document,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match write_document(&presenter, &options.output, &document).await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(code) => ExitCode::from(code),
    }
}

/// Read and validate the image. The extension is checked before the file
/// is opened; the content must then decode as JPEG or PNG.
pub async fn load_image(path: &Path) -> Result<PrescriptionImage, LoadImageError> {
    let declared = ImageMimeType::from_path(path)?;

    let data = tokio::fs::read(path)
        .await
        .map_err(|source| LoadImageError::Read {
            path: path.display().to_string(),
            source,
        })?;

    let image = PrescriptionImage::decode(data)?;
    if image.mime_type() != declared {
        debug!(
            declared = %declared,
            detected = %image.mime_type(),
            "image extension does not match its content"
        );
    }

    Ok(image)
}

async fn read_text(path: &Path) -> std::io::Result<String> {
    let bytes = if path == Path::new("-") {
        let mut buf = Vec::new();
        tokio::io::stdin().read_to_end(&mut buf).await?;
        buf
    } else {
        tokio::fs::read(path).await?
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

async fn write_document(
    presenter: &Presenter,
    path: &Path,
    document: &ExportedDocument,
) -> Result<(), u8> {
    if let Err(e) = tokio::fs::write(path, &document.bytes).await {
        presenter.error(&format!("Failed to write {}: {}", path.display(), e));
        return Err(EXIT_ERROR);
    }

    if document.substitutions > 0 {
        presenter.warn(&presenter.format_substitution_warning(document.substitutions));
    }
    presenter.success(&presenter.format_export_summary(
        &path.to_string_lossy(),
        document.pages,
        document.bytes.len(),
    ));
    Ok(())
}

/// Get the API key from the merged config, or fail before any image handling
pub fn require_api_key(config: &AppConfig) -> Result<String, ConfigError> {
    config
        .api_key()
        .map(str::to_string)
        .ok_or(ConfigError::MissingApiKey)
}

/// Config values supplied by the environment
pub fn env_config() -> AppConfig {
    let api_key = API_KEY_ENV_VARS
        .iter()
        .find_map(|name| env::var(name).ok().filter(|v| !v.trim().is_empty()));

    AppConfig {
        api_key,
        api_base: env::var(API_BASE_ENV_VAR).ok().filter(|v| !v.is_empty()),
        ..Default::default()
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = store.load_or_empty().await;

    // Merge: defaults < file < env < cli
    let config = AppConfig::defaults()
        .merge(file_config)
        .merge(env_config())
        .merge(cli_config);

    if let Err(e) = config.parsed_language() {
        warn!(
            error = %e,
            fallback = %config.language_or_default(),
            "ignoring configured language"
        );
    }
    config
}
