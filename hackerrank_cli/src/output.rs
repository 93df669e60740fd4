use anyhow::{Context, Result};
use hackerrank_lib::{Candidate, Test};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown values fall back to a table.
    pub fn from_arg(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct TestRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
}

#[derive(Tabled, Serialize)]
struct RecordRow {
    #[tabled(rename = "Candidate")]
    #[serde(rename = "Candidate")]
    candidate_id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    full_name: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
    #[tabled(rename = "Test ID")]
    #[serde(rename = "Test ID")]
    test_id: String,
    #[tabled(rename = "Test")]
    #[serde(rename = "Test")]
    test_name: String,
    #[tabled(rename = "Attempted")]
    #[serde(rename = "Attempted")]
    attempted: String,
    #[tabled(rename = "Score")]
    #[serde(rename = "Score")]
    score: String,
    #[tabled(rename = "Plagiarism")]
    #[serde(rename = "Plagiarism")]
    plagiarism: String,
}

// -- Row builders --

fn build_test_rows(tests: &[Test]) -> Vec<TestRow> {
    tests
        .iter()
        .map(|t| TestRow {
            id: t.test_id.to_string(),
            name: t.test_name.to_string(),
        })
        .collect()
}

fn build_record_rows(candidate: &Candidate) -> Vec<RecordRow> {
    candidate
        .records()
        .iter()
        .map(|r| RecordRow {
            candidate_id: candidate.id().to_string(),
            full_name: candidate.full_name().to_string(),
            email: candidate.email().to_string(),
            test_id: r.test_id.to_string(),
            test_name: r.test_name.to_string(),
            attempted: r.attempt_time.value().format("%Y-%m-%d %H:%M UTC").to_string(),
            score: format_score(r.score.value()),
            plagiarism: r.plagiarism_status.to_string(),
        })
        .collect()
}

// -- Table output --

pub fn print_tests_table(tests: &[Test]) {
    println!("{}", Table::new(build_test_rows(tests)));
}

pub fn print_candidate_table(candidate: &Candidate) {
    println!("{}", Table::new(build_record_rows(candidate)));
}

// -- Markdown output --

pub fn print_tests_markdown(tests: &[Test]) {
    let mut table = Table::new(build_test_rows(tests));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_candidate_markdown(candidate: &Candidate) {
    let mut table = Table::new(build_record_rows(candidate));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_tests_csv(tests: &[Test]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_test_rows(tests) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_candidate_csv(candidate: &Candidate) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_record_rows(candidate) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    println!("{}", render_json(data)?);
    Ok(())
}

fn render_json<T: serde::Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).context("Failed to serialize to JSON")
}

/// Whole scores print without decimals; fractional ones keep two.
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.2}", score)
    }
}
