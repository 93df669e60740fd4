//! Library layer for the HackerRank candidate lookup: validated value types,
//! the error taxonomy, configuration, and the repository operations built on
//! the raw `hackerrank_api` client.
//!
//! The central operation is [`HackerRankRepo::find_candidate`], which walks a
//! list of tests one at a time and merges every per-test match into a single
//! [`Candidate`].

pub mod config;
pub mod error;
pub mod model;
pub mod repo;
pub mod resolver;
pub mod types;
pub mod validation;

pub use hackerrank_api;

pub use config::{ConfigError, HackerRankSvcConfig};
pub use error::HackerRankError;
pub use model::{Candidate, Test, TestRecord};
pub use repo::HackerRankRepo;
pub use resolver::resolve_candidate;
pub use types::{
    ApiKey, AttemptTime, CandidateEmail, CandidateId, FullName, HackerRankSvc, PlagiarismStatus,
    ReportUrl, TestId, TestName, TestScore,
};
pub use validation::ValidationError;
