use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{load_settings, HttpKataClient, KataApi};
use shared::{
    domain::KataId,
    protocol::{Kata, KataSummary, Submission, SubmissionResult},
};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kata", about = "Command-line client for the kata exercise platform")]
struct Args {
    /// Base URL of the kata server, e.g. http://127.0.0.1:8000
    #[arg(long, global = true)]
    server_url: Option<String>,
    /// TOML file with client settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available katas
    List,
    /// Show a kata's description and starter code
    Show { kata_id: String },
    /// Submit a solution read from a file, or stdin when no file is given
    Submit {
        kata_id: String,
        #[arg(long, short)]
        file: Option<PathBuf>,
    },
}

fn format_list(katas: &[KataSummary]) -> String {
    if katas.is_empty() {
        return "No katas available".to_string();
    }
    katas
        .iter()
        .map(|kata| format!("{:<24} {}", kata.id, kata.title))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_kata(kata: &Kata) -> String {
    format!(
        "{}\n\n{}\n\n--- starter code ---\n{}",
        kata.title, kata.description, kata.starter_code
    )
}

fn format_result(result: &SubmissionResult) -> String {
    let headline = result.headline();
    if result.message.is_empty() {
        headline
    } else {
        format!("{headline}\n{}", result.message)
    }
}

async fn read_code(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read solution file {}", path.display())),
        None => {
            let mut code = String::new();
            tokio::io::stdin()
                .read_to_string(&mut code)
                .await
                .context("failed to read solution from stdin")?;
            Ok(code)
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let settings = load_settings(args.config.as_deref())
        .context("failed to load client settings")?
        .with_server_url(args.server_url);
    let client = HttpKataClient::from_settings(&settings)?;
    tracing::debug!(server_url = %client.base_url(), "kata client ready");

    match args.command {
        Command::List => {
            let katas = client.list_katas().await.context("Failed to load katas")?;
            println!("{}", format_list(&katas));
            Ok(ExitCode::SUCCESS)
        }
        Command::Show { kata_id } => {
            let kata = client
                .fetch_kata(&KataId::from(kata_id))
                .await
                .context("Failed to load kata")?;
            println!("{}", format_kata(&kata));
            Ok(ExitCode::SUCCESS)
        }
        Command::Submit { kata_id, file } => {
            let code = read_code(file).await?;
            let submission = Submission::new(KataId::from(kata_id), &code)?;
            let result = match client.submit_solution(&submission).await {
                Ok(result) => result,
                Err(err) => {
                    tracing::warn!("submission failed: {err}");
                    SubmissionResult::submit_failed()
                }
            };
            println!("{}", format_result(&result));
            Ok(if result.status.is_pass() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Args::parse()).await
}
