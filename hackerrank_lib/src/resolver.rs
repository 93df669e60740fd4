//! Resolution of one candidate across many tests.

use std::future::Future;

use crate::error::HackerRankError;
use crate::model::{Candidate, Test};
use crate::types::CandidateEmail;

/// Looks `email` up on every test in `tests` and merges the matches.
///
/// Tests are searched one at a time, in the order given. A failed lookup is
/// logged and skipped. Each successful lookup is merged with
/// [`Candidate::merge_newer`], so the last matching test contributes the
/// identity and the first records. The call fails only when no test matched.
pub async fn resolve_candidate<'a, F, Fut>(
    tests: &'a [Test],
    email: &CandidateEmail,
    mut search: F,
) -> Result<Candidate, HackerRankError>
where
    F: FnMut(&'a Test) -> Fut,
    Fut: Future<Output = Result<Candidate, HackerRankError>>,
{
    let mut resolved: Option<Candidate> = None;

    for test in tests {
        match search(test).await {
            Ok(found) => {
                tracing::debug!(
                    test_id = %test.test_id,
                    records = found.records().len(),
                    "candidate found on test"
                );
                resolved = Some(match resolved.take() {
                    Some(acc) => acc.merge_newer(found),
                    None => found,
                });
            }
            Err(e) => {
                tracing::warn!(
                    test_id = %test.test_id,
                    email = %email,
                    error = %e,
                    "candidate lookup failed, skipping test"
                );
            }
        }
    }

    match resolved {
        Some(candidate) => {
            tracing::info!(
                email = %email,
                tests = tests.len(),
                records = candidate.records().len(),
                "candidate resolved"
            );
            Ok(candidate)
        }
        None => {
            let ids: Vec<_> = tests.iter().map(|t| &t.test_id).collect();
            Err(HackerRankError::no_final_candidate_found(&ids, email))
        }
    }
}
