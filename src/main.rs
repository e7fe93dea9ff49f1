//! Revoice CLI entry point

use std::process::ExitCode;

use clap::Parser;

use revoice::cli::{
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    load_merged_config, run_screen,
    Presenter, ScreenOptions, EXIT_ERROR, EXIT_USAGE_ERROR,
};
use revoice::domain::config::AppConfig;
use revoice::domain::error::ConfigError;
use revoice::infrastructure::{storage, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
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

    // Build CLI config from args
    let cli_config = AppConfig {
        storage_dir: cli
            .storage_dir
            .as_ref()
            .map(|p| p.to_string_lossy().to_string()),
        input_device: cli.device.clone(),
        notify: if cli.notify { Some(true) } else { None },
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let options = ScreenOptions {
        storage_dir: config
            .storage_dir_path()
            .unwrap_or_else(storage::default_storage_dir),
        input_device: config.input_device.clone(),
        notify: config.notify_or_default(),
    };

    run_screen(options).await
}
