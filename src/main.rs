//! gitcms CLI entry point

use std::process::ExitCode;

use clap::Parser;

use gitcms::cli::{
    app::{load_merged_config, run_command, EXIT_ERROR, EXIT_SUCCESS},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use gitcms::domain::config::AppConfig;
use gitcms::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Config commands only touch the local config file
    let command = match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::from(EXIT_SUCCESS);
        }
        command => command,
    };

    // Build CLI config from the global flags
    let cli_config = AppConfig {
        token: cli.token,
        owner: cli.owner,
        repo: cli.repo,
        branch: cli.branch,
        content_path: cli.content_path,
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    run_command(command, &config).await
}
