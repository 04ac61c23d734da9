#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use github_activity_app::{Config, run};
use github_activity_github::GitHubEventsClient;

#[derive(Parser)]
#[command(name = "github-activity", version, arg_required_else_help = true)]
#[command(about = "Fetch and display a GitHub user's recent public activity", long_about = None)]
#[command(after_help = "Examples:
    github-activity kamranahmedse
    github-activity torvalds 5
    github-activity microsoft 20")]
struct Cli {
    /// GitHub username to fetch activity for
    username: String,

    /// Maximum number of events to display (default: 10)
    #[arg(allow_negative_numbers = true)]
    max_events: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            println!("{}", Cli::command().render_help());
            return ExitCode::SUCCESS;
        }
        Err(e) => e.exit(),
    };

    match display_activity(&cli).await {
        Ok(displayed) => {
            log::debug!("Displayed {displayed} events for '{}'", cli.username);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn display_activity(cli: &Cli) -> anyhow::Result<usize> {
    let config = Config::from_env()?;
    let provider = GitHubEventsClient::new(config.timeout)?.with_base_url(config.api_url);
    let mut stdout = std::io::stdout();

    let displayed = run(
        &provider,
        &cli.username,
        cli.max_events.as_deref(),
        &mut stdout,
    )
    .await?;

    Ok(displayed)
}
