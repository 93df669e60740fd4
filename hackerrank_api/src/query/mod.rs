mod common;
pub use self::common::{Paginated, Query, QueryCommon};

mod catalog;
pub use self::catalog::TestsQuery;

mod candidate;
pub use self::candidate::CandidateSearchQuery;

mod report;
pub use self::report::{ReportFormat, ReportQuery};
