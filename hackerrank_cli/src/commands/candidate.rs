//! The `candidate` subcommand: resolve one candidate across the catalog.

use anyhow::{bail, Result};
use clap::Args;
use hackerrank_lib::{CandidateEmail, HackerRankRepo, Test, TestId};

use crate::output::{
    print_candidate_csv, print_candidate_markdown, print_candidate_table, print_json, OutputFormat,
};

#[derive(Args)]
pub struct CandidateArgs {
    /// Candidate email address
    #[arg(long)]
    pub email: String,

    /// Only search these test ids (repeatable). Defaults to the whole catalog
    #[arg(long = "test-id")]
    pub test_ids: Vec<String>,
}

pub async fn run(args: &CandidateArgs, repo: &HackerRankRepo, format: &OutputFormat) -> Result<()> {
    let email = CandidateEmail::parse(args.email.as_str())?;
    let wanted = args
        .test_ids
        .iter()
        .map(|id| TestId::parse(id.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

    let catalog = repo.list_all_tests().await?;
    let tests = select_tests(catalog, &wanted);
    if tests.is_empty() {
        bail!("none of the requested test ids are in the catalog");
    }

    eprintln!("Searching {} tests for {}", tests.len(), email);
    let candidate = repo.find_candidate(&tests, &email).await?;

    match format {
        OutputFormat::Table => print_candidate_table(&candidate),
        OutputFormat::Json => print_json(&candidate)?,
        OutputFormat::Csv => print_candidate_csv(&candidate)?,
        OutputFormat::Markdown => print_candidate_markdown(&candidate),
    }

    Ok(())
}

/// Keeps the catalog entries whose id is in `wanted`, in catalog order. An
/// empty `wanted` keeps everything.
fn select_tests(catalog: Vec<Test>, wanted: &[TestId]) -> Vec<Test> {
    if wanted.is_empty() {
        return catalog;
    }
    catalog
        .into_iter()
        .filter(|t| wanted.contains(&t.test_id))
        .collect()
}
