//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::domain::prescription::Language;

/// RxScribe - turn handwritten prescriptions into clear text and PDF
#[derive(Parser, Debug)]
#[command(name = "rx-scribe")]
#[command(version)]
#[command(about = "AI-powered handwritten prescription transcription using Google Gemini")]
#[command(long_about = None)]
#[command(after_help = r#"Environment Variables:
  GOOGLE_API_KEY    Gemini API key (GEMINI_API_KEY is also accepted)
  GEMINI_API_BASE   Override the Gemini API base URL
  RUST_LOG          Log filter, e.g. rx_scribe=debug"#)]
pub struct Cli {
    /// Prescription photo (JPG, JPEG or PNG)
    #[arg(value_name = "IMAGE")]
    pub image: Option<PathBuf>,

    /// Where to write the PDF [default: Receta_Traducida.pdf]
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Language of the transcription
    #[arg(short = 'l', long, value_name = "LANG")]
    pub language: Option<LanguageArg>,

    /// Gemini model to use
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Title line of the PDF
    #[arg(short = 't', long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Print the transcription only, without writing a PDF
    #[arg(long, conflicts_with = "output")]
    pub no_pdf: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Render a text file to PDF without calling the recognition service
    Export(ExportArgs),
}

/// Arguments of the export subcommand
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Text file to render ("-" reads stdin)
    #[arg(value_name = "TEXT_FILE")]
    pub input: PathBuf,

    /// Where to write the PDF [default: Receta_Traducida.pdf]
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Language whose default title is used
    #[arg(short = 'l', long, value_name = "LANG")]
    pub language: Option<LanguageArg>,

    /// Title line of the PDF
    #[arg(short = 't', long, value_name = "TITLE")]
    pub title: Option<String>,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Language argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    #[value(alias = "spanish")]
    Es,
    #[value(alias = "english")]
    En,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Es => Language::Spanish,
            LanguageArg::En => Language::English,
        }
    }
}

/// Parsed translate options (default mode)
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    pub image: PathBuf,
    pub output: PathBuf,
    pub language: Language,
    pub title: String,
    pub model: String,
    pub api_base: Option<String>,
    pub export_pdf: bool,
}

/// Parsed export options
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub title: String,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key", "api_base", "model", "language", "output", "title",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
