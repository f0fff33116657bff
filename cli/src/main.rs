//! CLI for the pull request lister.
//!
//! Lists the open pull requests of one repository that carry a required set
//! of labels and prints them as JSON, one record per matching pull request,
//! for the application generation pipeline to consume.

use clap::Parser;
use pr_lister::{GithubLister, PullRequestSource};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Pull Request Lister - list open pull requests matching a set of required labels.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// API host URL, for GitHub Enterprise; defaults to github.com.
    #[arg(long)]
    url: Option<String>,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN")]
    token: String,

    /// Repository owner (user or organization).
    #[arg(long)]
    owner: String,

    /// Repository name.
    #[arg(long)]
    repo: String,

    /// Label a pull request must carry; repeat for multiple labels.
    #[arg(long = "label")]
    labels: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Listing failed");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Runs the listing and renders the matches as pretty-printed JSON.
async fn run(args: Args) -> Result<String, Box<dyn std::error::Error>> {
    let lister = GithubLister::new(args.url, args.token, args.owner, args.repo, args.labels)?;
    let pull_requests = lister.list().await?;
    Ok(serde_json::to_string_pretty(&pull_requests)?)
}
