mod lenient;

mod meta;
pub use self::meta::ListResponse;

pub use self::test::TestSummary;

mod candidate;
pub use self::candidate::CandidateAttempt;
