//! Repository operations against the HackerRank API: test catalog, candidate
//! search, multi-test resolution and report links.

use hackerrank_api::types::{CandidateAttempt, TestSummary};
use hackerrank_api::{CandidateSearchQuery, Client, ReportQuery, TestsQuery};

use crate::config::HackerRankSvcConfig;
use crate::error::HackerRankError;
use crate::model::{Candidate, Test, TestRecord};
use crate::resolver::resolve_candidate;
use crate::types::{
    AttemptTime, CandidateEmail, CandidateId, FullName, PlagiarismStatus, ReportUrl, TestId,
    TestName, TestScore,
};
use crate::validation::{required, ValidationError};

/// Entry point for every lookup. Holds one HTTP client for the configured
/// service and account.
pub struct HackerRankRepo {
    client: Client,
}

impl HackerRankRepo {
    pub fn new(config: &HackerRankSvcConfig) -> Result<Self, HackerRankError> {
        let client = Client::new(config.svc.as_str(), config.key.as_str())?;
        Ok(Self { client })
    }

    /// Lists the tests visible to the account, in the order the API returns
    /// them. Entries without a valid id or name are dropped. The returned
    /// list is never empty.
    pub async fn list_all_tests(&self) -> Result<Vec<Test>, HackerRankError> {
        let resp = self.client.get_tests(&TestsQuery::default()).await?;
        let Some(summaries) = resp.data else {
            tracing::warn!("test listing has no data field");
            return Err(HackerRankError::no_required_data());
        };

        let tests: Vec<Test> = summaries
            .into_iter()
            .filter_map(|summary| match test_from_summary(&summary) {
                Ok(test) => Some(test),
                Err(e) => {
                    tracing::warn!(
                        id = summary.id.as_deref().unwrap_or("<none>"),
                        "dropping test entry: {}",
                        e
                    );
                    None
                }
            })
            .collect();

        if tests.is_empty() {
            return Err(HackerRankError::no_test_found());
        }
        tracing::debug!("listed {} tests", tests.len());
        Ok(tests)
    }

    /// Looks `email` up on a single test.
    pub async fn find_candidate_on_test(
        &self,
        email: &CandidateEmail,
        test: &Test,
    ) -> Result<Candidate, HackerRankError> {
        let query = CandidateSearchQuery::default().with_search(email.as_str());
        let attempts = self
            .client
            .search_candidates(test.test_id.as_str(), &query)
            .await?
            .into_records();

        if attempts.is_empty() {
            return Err(HackerRankError::no_candidate_found(&test.test_id, email));
        }

        candidate_from_attempts(email, test, &attempts).map_err(|e| {
            tracing::warn!(
                test_id = %test.test_id,
                "unusable candidate data: {}",
                e
            );
            HackerRankError::no_candidate_found(&test.test_id, email)
        })
    }

    /// Looks `email` up on every test, one after the other, and merges the
    /// matches into one candidate. See [`resolve_candidate`] for the merge
    /// rules.
    pub async fn find_candidate(
        &self,
        tests: &[Test],
        email: &CandidateEmail,
    ) -> Result<Candidate, HackerRankError> {
        resolve_candidate(tests, email, |test| self.find_candidate_on_test(email, test)).await
    }

    /// Fetches the download link of a candidate's PDF report for one test.
    pub async fn pdf_report_by(
        &self,
        test_id: &TestId,
        candidate_id: &CandidateId,
    ) -> Result<ReportUrl, HackerRankError> {
        let body = self
            .client
            .get_pdf_report_url(test_id.as_str(), candidate_id.as_str(), &ReportQuery::default())
            .await?;

        ReportUrl::parse(decode_report_body(&body)).map_err(|e| {
            tracing::warn!(test_id = %test_id, candidate_id = %candidate_id, "no report url: {}", e);
            HackerRankError::no_pdf_url(test_id, candidate_id)
        })
    }
}

fn test_from_summary(summary: &TestSummary) -> Result<Test, ValidationError> {
    let test_id = TestId::parse(required(summary.id.clone(), TestId::FIELD)?)?;
    let test_name = TestName::parse(required(summary.name.clone(), TestName::FIELD)?)?;
    Ok(Test::new(test_id, test_name))
}

fn record_from_attempt(test: &Test, attempt: &CandidateAttempt) -> Result<TestRecord, ValidationError> {
    let attempt_time =
        AttemptTime::parse(required(attempt.attempt_endtime.as_deref(), "attempt end time")?)?;
    let score = TestScore::parse(required(attempt.score, "score")?)?;
    let plagiarism_status = PlagiarismStatus::from(attempt.plagiarism_status.unwrap_or(false));
    Ok(TestRecord::for_test(test, plagiarism_status, attempt_time, score))
}

/// Builds the per-test candidate. Identity comes from the first attempt; the
/// email is the one searched for. Every attempt becomes a record, in order.
fn candidate_from_attempts(
    email: &CandidateEmail,
    test: &Test,
    attempts: &[CandidateAttempt],
) -> Result<Candidate, ValidationError> {
    let head = attempts.first().ok_or(ValidationError::NoRecords)?;
    let id = CandidateId::parse(required(head.id.clone(), CandidateId::FIELD)?)?;
    let full_name = FullName::parse(required(head.full_name.clone(), FullName::FIELD)?)?;
    let records = attempts
        .iter()
        .map(|attempt| record_from_attempt(test, attempt))
        .collect::<Result<Vec<_>, _>>()?;
    Candidate::new(id, full_name, email.clone(), records)
}

/// The report endpoint answers with a bare URL, or with the URL as a JSON
/// string literal depending on content negotiation.
fn decode_report_body(body: &str) -> String {
    serde_json::from_str::<String>(body).unwrap_or_else(|_| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::test;

    fn attempt(id: Option<&str>, name: Option<&str>, score: Option<f64>, end: Option<&str>, flagged: Option<bool>) -> CandidateAttempt {
        CandidateAttempt {
            id: id.map(str::to_string),
            full_name: name.map(str::to_string),
            score,
            attempt_endtime: end.map(str::to_string),
            plagiarism_status: flagged,
        }
    }

    fn summary(id: Option<&str>, name: Option<&str>) -> TestSummary {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap()
    }

    fn email() -> CandidateEmail {
        CandidateEmail::new_unchecked("candidatea@mailservice.com")
    }

    #[test]
    fn summary_with_id_and_name() {
        let t = test_from_summary(&summary(Some("799685"), Some("Test 1"))).unwrap();
        assert_eq!(t, test("799685", "Test 1"));
    }

    #[test]
    fn summary_missing_or_empty_fields() {
        assert_eq!(
            test_from_summary(&summary(None, Some("Test 1"))),
            Err(ValidationError::Missing { field: "test id" })
        );
        assert_eq!(
            test_from_summary(&summary(Some("1"), Some(""))),
            Err(ValidationError::Empty { field: "test name" })
        );
    }

    #[test]
    fn candidate_from_two_attempts() {
        let t = test("754562", "Test 1");
        let attempts = vec![
            attempt(Some("18119687"), Some("John Doe"), Some(99.0), Some("2020-05-02T13:07:46+0000"), Some(true)),
            attempt(Some("18119687"), Some("John Doe"), Some(137.0), Some("2020-06-04T13:07:46+0000"), Some(false)),
        ];

        let c = candidate_from_attempts(&email(), &t, &attempts).unwrap();
        assert_eq!(c.id().as_str(), "18119687");
        assert_eq!(c.full_name().as_str(), "John Doe");
        assert_eq!(c.records().len(), 2);
        assert_eq!(c.records()[0].plagiarism_status, PlagiarismStatus::Suspected);
        assert_eq!(c.records()[0].score.value(), 99.0);
        assert_eq!(c.records()[1].plagiarism_status, PlagiarismStatus::Clean);
        assert_eq!(c.records()[1].test_name.as_str(), "Test 1");
    }

    #[test]
    fn identity_from_first_attempt_only() {
        let t = test("754562", "Test 1");
        let attempts = vec![
            attempt(Some("1"), Some("First"), Some(1.0), Some("2020-05-02T13:07:46Z"), None),
            attempt(Some("2"), Some("Second"), Some(2.0), Some("2020-05-03T13:07:46Z"), None),
        ];

        let c = candidate_from_attempts(&email(), &t, &attempts).unwrap();
        assert_eq!(c.id().as_str(), "1");
        assert_eq!(c.full_name().as_str(), "First");
        assert_eq!(c.records()[1].plagiarism_status, PlagiarismStatus::Clean);
    }

    #[test]
    fn invalid_identity_fails() {
        let t = test("754562", "Test 1");
        let attempts = vec![attempt(Some(""), Some("John Doe"), Some(1.0), Some("2020-05-02T13:07:46Z"), None)];
        assert!(candidate_from_attempts(&email(), &t, &attempts).is_err());
    }

    #[test]
    fn invalid_attempt_time_fails() {
        let t = test("754562", "Test 1");
        let attempts = vec![attempt(Some("1"), Some("John Doe"), Some(1.0), Some("not a date"), None)];
        assert_eq!(
            candidate_from_attempts(&email(), &t, &attempts).unwrap_err(),
            ValidationError::InvalidTimestamp("not a date".to_string())
        );
    }

    #[test]
    fn missing_score_fails() {
        let t = test("754562", "Test 1");
        let attempts = vec![attempt(Some("1"), Some("John Doe"), None, Some("2020-05-02T13:07:46Z"), None)];
        assert_eq!(
            candidate_from_attempts(&email(), &t, &attempts).unwrap_err(),
            ValidationError::Missing { field: "score" }
        );
    }

    #[test]
    fn no_attempts_fails() {
        let t = test("754562", "Test 1");
        assert_eq!(
            candidate_from_attempts(&email(), &t, &[]).unwrap_err(),
            ValidationError::NoRecords
        );
    }

    #[test]
    fn report_body_bare_or_json() {
        assert_eq!(decode_report_body("https://a.example/x?y=1"), "https://a.example/x?y=1");
        assert_eq!(decode_report_body("\"https://a.example/x?y=1\""), "https://a.example/x?y=1");
        assert_eq!(decode_report_body("https://a.example/x\n"), "https://a.example/x");
        assert_eq!(decode_report_body(""), "");
    }
}
