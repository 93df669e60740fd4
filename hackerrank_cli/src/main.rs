mod commands;
mod output;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use hackerrank_lib::{HackerRankRepo, HackerRankSvcConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "hackerrank")]
#[command(about = "Look up tests, candidates and reports on HackerRank for Work")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Service root URL (defaults to HACKERRANK_SVC)
    #[arg(long, global = true)]
    svc: Option<String>,

    /// Account API key (defaults to API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every test visible to the account
    Tests,
    /// Collect a candidate's attempts across tests
    Candidate(commands::candidate::CandidateArgs),
    /// Print the PDF report link for a candidate on a test
    Report(commands::report::ReportArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hackerrank=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::from_arg(&cli.output);

    let config = HackerRankSvcConfig::from_env_with(cli.api_key.clone(), cli.svc.clone())
        .map_err(|e| anyhow!("No configuration given: {}", e))?;
    tracing::debug!(svc = %config.svc, "using service");
    let repo = HackerRankRepo::new(&config)?;

    match &cli.command {
        Commands::Tests => commands::tests::run(&repo, &format).await?,
        Commands::Candidate(args) => commands::candidate::run(args, &repo, &format).await?,
        Commands::Report(args) => commands::report::run(args, &repo, &format).await?,
    }

    Ok(())
}
