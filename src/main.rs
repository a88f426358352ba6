//! RxScribe CLI entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use rx_scribe::cli::{
    app::{
        load_merged_config, require_api_key, run_export, run_translate, EXIT_ERROR,
        EXIT_USAGE_ERROR,
    },
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    init_logging,
    presenter::Presenter,
    ExportOptions, TranslateOptions,
};
use rx_scribe::domain::config::AppConfig;
use rx_scribe::domain::error::ConfigError;
use rx_scribe::domain::prescription::Language;
use rx_scribe::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();
    let store = XdgConfigStore::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                let code = match e {
                    ConfigError::ValidationError { .. } => EXIT_USAGE_ERROR,
                    _ => EXIT_ERROR,
                };
                return ExitCode::from(code);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Export(args)) => {
            let cli_config = AppConfig {
                language: args.language.map(|l| Language::from(l).to_string()),
                title: args.title.clone(),
                ..Default::default()
            };
            let config = load_merged_config(&store, cli_config).await;

            let options = ExportOptions {
                input: args.input,
                output: args
                    .output
                    .unwrap_or_else(|| PathBuf::from(config.output_or_default())),
                title: config.title_or_default(),
            };
            return run_export(options).await;
        }
        None => {}
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        api_base: None,
        model: cli.model.clone(),
        language: cli.language.map(|l| Language::from(l).to_string()),
        output: cli.output.as_ref().map(|p| p.to_string_lossy().into_owned()),
        title: cli.title.clone(),
    };

    // Merge config
    let config = load_merged_config(&store, cli_config).await;

    // The key is checked before the image is looked at
    let api_key = match require_api_key(&config) {
        Ok(key) => key,
        Err(e) => {
            presenter.warn(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let Some(image) = cli.image else {
        presenter.error("No prescription image given. Run 'rx-scribe --help' for usage.");
        return ExitCode::from(EXIT_USAGE_ERROR);
    };

    let options = TranslateOptions {
        image,
        output: PathBuf::from(config.output_or_default()),
        language: config.language_or_default(),
        title: config.title_or_default(),
        model: config.model_or_default().to_string(),
        api_base: config.api_base.clone(),
        export_pdf: !cli.no_pdf,
    };

    run_translate(api_key, options).await
}
