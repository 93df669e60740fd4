//! The `tests` subcommand: list the account's test catalog.

use anyhow::Result;
use hackerrank_lib::HackerRankRepo;

use crate::output::{print_json, print_tests_csv, print_tests_markdown, print_tests_table, OutputFormat};

pub async fn run(repo: &HackerRankRepo, format: &OutputFormat) -> Result<()> {
    let tests = repo.list_all_tests().await?;

    eprintln!("{} tests", tests.len());

    match format {
        OutputFormat::Table => print_tests_table(&tests),
        OutputFormat::Json => print_json(&tests)?,
        OutputFormat::Csv => print_tests_csv(&tests)?,
        OutputFormat::Markdown => print_tests_markdown(&tests),
    }

    Ok(())
}
