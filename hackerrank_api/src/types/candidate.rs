//! Candidate attempt records returned by the per-test candidate search.

use serde::{Deserialize, Serialize};

use super::lenient;

/// One attempt by one candidate on one test.
///
/// A missing or mistyped value reads as `None`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CandidateAttempt {
    /// Candidate id, sent as a string.
    #[serde(default, deserialize_with = "lenient::field")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "lenient::field")]
    pub full_name: Option<String>,

    /// Total score for the attempt.
    #[serde(default, deserialize_with = "lenient::field")]
    pub score: Option<f64>,

    /// End of the attempt, e.g. `2020-05-02T13:07:46+0000`.
    #[serde(default, deserialize_with = "lenient::field")]
    pub attempt_endtime: Option<String>,

    /// `true` when the platform flagged the attempt for plagiarism.
    #[serde(default, deserialize_with = "lenient::field")]
    pub plagiarism_status: Option<bool>,
}
