//! Domain records: tests, attempts and the resolved candidate.

use serde::{Deserialize, Serialize};

use crate::types::{
    AttemptTime, CandidateEmail, CandidateId, FullName, PlagiarismStatus, TestId, TestName,
    TestScore,
};
use crate::validation::ValidationError;

/// One test from the account's catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Test {
    pub test_id: TestId,
    pub test_name: TestName,
}

impl Test {
    pub fn new(test_id: TestId, test_name: TestName) -> Self {
        Self { test_id, test_name }
    }
}

/// One attempt by one candidate on one test.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    pub test_id: TestId,
    pub test_name: TestName,
    pub plagiarism_status: PlagiarismStatus,
    pub attempt_time: AttemptTime,
    pub score: TestScore,
}

impl TestRecord {
    /// Builds a record for `test`, copying its id and name.
    pub fn for_test(
        test: &Test,
        plagiarism_status: PlagiarismStatus,
        attempt_time: AttemptTime,
        score: TestScore,
    ) -> Self {
        Self {
            test_id: test.test_id.clone(),
            test_name: test.test_name.clone(),
            plagiarism_status,
            attempt_time,
            score,
        }
    }
}

/// A candidate together with every attempt found for them.
///
/// `records` is never empty: [`Candidate::new`] refuses an empty list, and
/// merging only ever adds records.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Candidate {
    id: CandidateId,
    full_name: FullName,
    email: CandidateEmail,
    records: Vec<TestRecord>,
}

impl Candidate {
    pub fn new(
        id: CandidateId,
        full_name: FullName,
        email: CandidateEmail,
        records: Vec<TestRecord>,
    ) -> Result<Self, ValidationError> {
        if records.is_empty() {
            return Err(ValidationError::NoRecords);
        }
        Ok(Self {
            id,
            full_name,
            email,
            records,
        })
    }

    pub fn id(&self) -> &CandidateId {
        &self.id
    }

    pub fn full_name(&self) -> &FullName {
        &self.full_name
    }

    pub fn email(&self) -> &CandidateEmail {
        &self.email
    }

    /// Attempts in merge order. Never empty.
    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TestRecord> {
        self.records
    }

    /// Folds a later match into this one.
    ///
    /// Identity (id, name, email) comes from `newer`. Its records are placed
    /// in front of the ones already accumulated, so across a whole run the
    /// last test that matched is listed first.
    pub fn merge_newer(self, newer: Candidate) -> Candidate {
        let mut records = newer.records;
        records.extend(self.records);
        Candidate {
            id: newer.id,
            full_name: newer.full_name,
            email: newer.email,
            records,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn test(id: &str, name: &str) -> Test {
        Test::new(TestId::new_unchecked(id), TestName::new_unchecked(name))
    }

    pub fn record(test: &Test, score: f64, flagged: bool, at: &str) -> TestRecord {
        TestRecord::for_test(
            test,
            PlagiarismStatus::from(flagged),
            AttemptTime::parse(at).unwrap(),
            TestScore::new_unchecked(score),
        )
    }

    pub fn candidate(id: &str, name: &str, records: Vec<TestRecord>) -> Candidate {
        Candidate::new(
            CandidateId::new_unchecked(id),
            FullName::new_unchecked(name),
            CandidateEmail::new_unchecked("candidatea@mailservice.com"),
            records,
        )
        .unwrap()
    }
}
