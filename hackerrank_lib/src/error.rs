//! Error taxonomy for repository operations.

use crate::types::{CandidateEmail, CandidateId, TestId};

/// Failure of a repository operation. Each variant carries a readable message.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HackerRankError {
    /// The HTTP call itself failed: connection, timeout, non-2xx, or an
    /// undecodable body. Never retried.
    #[error("NetworkError: {msg}")]
    Network { msg: String },
    /// The test catalog held no usable test.
    #[error("ListTestsError: {msg}")]
    ListTests { msg: String },
    /// No attempt matched a test/email pair, or no test matched at all.
    #[error("FindCandidateError: {msg}")]
    FindCandidate { msg: String },
    /// The report endpoint did not answer with a usable URL.
    #[error("ReportError: {msg}")]
    Report { msg: String },
}

impl HackerRankError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network { msg: msg.into() }
    }

    pub fn no_test_found() -> Self {
        Self::ListTests {
            msg: "Failed to find any test when listing all tests.".to_string(),
        }
    }

    pub fn no_required_data() -> Self {
        Self::ListTests {
            msg: "Neither test ID nor test name is available".to_string(),
        }
    }

    pub fn no_candidate_found(test_id: &TestId, email: &CandidateEmail) -> Self {
        Self::FindCandidate {
            msg: format!(
                "Failed to find any candidate with test ID: [{}] and email: [{}]",
                test_id, email
            ),
        }
    }

    /// Terminal failure of a multi-test lookup, naming every test tried.
    pub fn no_final_candidate_found(test_ids: &[&TestId], email: &CandidateEmail) -> Self {
        let ids = serde_json::Value::from(
            test_ids.iter().map(|id| id.as_str()).collect::<Vec<_>>(),
        );
        Self::FindCandidate {
            msg: format!(
                "Failed to find any candidate with all test Ids: [{}] and email: [{}]",
                ids, email
            ),
        }
    }

    pub fn no_pdf_url(test_id: &TestId, candidate_id: &CandidateId) -> Self {
        Self::Report {
            msg: format!(
                "Failed to find any PDF url with test ID: [{}] and candidate ID: [{}]",
                test_id, candidate_id
            ),
        }
    }

    /// Variant tag, for converting into a protocol-level response.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Network { .. } => "NetworkError",
            Self::ListTests { .. } => "ListTestsError",
            Self::FindCandidate { .. } => "FindCandidateError",
            Self::Report { .. } => "ReportError",
        }
    }

    pub fn msg(&self) -> &str {
        match self {
            Self::Network { msg }
            | Self::ListTests { msg }
            | Self::FindCandidate { msg }
            | Self::Report { msg } => msg,
        }
    }
}

impl From<hackerrank_api::Error> for HackerRankError {
    fn from(e: hackerrank_api::Error) -> Self {
        Self::network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> CandidateEmail {
        CandidateEmail::new_unchecked("candidatea@mailservice.com")
    }

    #[test]
    fn no_candidate_found_message() {
        let err = HackerRankError::no_candidate_found(&TestId::new_unchecked("754562"), &email());
        assert_eq!(err.tag(), "FindCandidateError");
        assert_eq!(
            err.msg(),
            "Failed to find any candidate with test ID: [754562] and email: [candidatea@mailservice.com]"
        );
    }

    #[test]
    fn no_final_candidate_found_lists_every_test() {
        let a = TestId::new_unchecked("261732");
        let b = TestId::new_unchecked("not-the-id");
        let err = HackerRankError::no_final_candidate_found(&[&a, &b], &email());
        assert_eq!(
            err.msg(),
            r#"Failed to find any candidate with all test Ids: [["261732","not-the-id"]] and email: [candidatea@mailservice.com]"#
        );
    }

    #[test]
    fn list_tests_messages() {
        assert_eq!(HackerRankError::no_test_found().tag(), "ListTestsError");
        assert_eq!(
            HackerRankError::no_test_found().msg(),
            "Failed to find any test when listing all tests."
        );
        assert_eq!(
            HackerRankError::no_required_data().msg(),
            "Neither test ID nor test name is available"
        );
    }

    #[test]
    fn no_pdf_url_message() {
        let err = HackerRankError::no_pdf_url(
            &TestId::new_unchecked("261751"),
            &CandidateId::new_unchecked("73868318"),
        );
        assert_eq!(err.tag(), "ReportError");
        assert!(err.msg().contains("[261751]"));
        assert!(err.msg().contains("[73868318]"));
    }

    #[test]
    fn api_errors_become_network_errors() {
        let err: HackerRankError = hackerrank_api::Error::HttpStatus {
            status: 500,
            body: "boom".to_string(),
        }
        .into();
        assert_eq!(err.tag(), "NetworkError");
        assert_eq!(err.msg(), "Request failed with status 500: boom");
        assert_eq!(err.to_string(), "NetworkError: Request failed with status 500: boom");
    }
}
