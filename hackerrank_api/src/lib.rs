//! Thin HTTP client for the HackerRank for Work v3 REST API.
//!
//! Only the three endpoints the candidate lookup needs are covered: the test
//! catalog, the per-test candidate search and the PDF report link.

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{
    CandidateSearchQuery, Paginated, Query, QueryCommon, ReportFormat, ReportQuery, TestsQuery,
};
