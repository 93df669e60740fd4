//! The `report` subcommand: resolve a candidate's PDF report link.

use anyhow::Result;
use clap::Args;
use hackerrank_lib::{CandidateId, HackerRankRepo, TestId};
use serde::Serialize;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct ReportArgs {
    /// Test id, e.g. 261751
    #[arg(long)]
    pub test_id: String,

    /// Candidate id, e.g. 73868318
    #[arg(long)]
    pub candidate_id: String,
}

#[derive(Serialize)]
struct ReportLink<'a> {
    test_id: &'a TestId,
    candidate_id: &'a CandidateId,
    url: &'a str,
}

pub async fn run(args: &ReportArgs, repo: &HackerRankRepo, format: &OutputFormat) -> Result<()> {
    let test_id = TestId::parse(args.test_id.as_str())?;
    let candidate_id = CandidateId::parse(args.candidate_id.as_str())?;

    let url = repo.pdf_report_by(&test_id, &candidate_id).await?;

    match format {
        OutputFormat::Json => print_json(&ReportLink {
            test_id: &test_id,
            candidate_id: &candidate_id,
            url: url.as_str(),
        })?,
        _ => println!("{}", url),
    }

    Ok(())
}
