//! Query builder for the `/tests` catalog endpoint.

use url::Url;

use super::common::{Paginated, Query, QueryCommon};

/// Default page size for the catalog. One page is assumed to hold every test.
pub const DEFAULT_TESTS_LIMIT: u32 = 100;

/// Query for listing the tests visible to the account.
#[derive(Clone, Copy, Debug)]
pub struct TestsQuery {
    pub common: QueryCommon,
}

impl Default for TestsQuery {
    fn default() -> Self {
        Self {
            common: QueryCommon::with_limit(DEFAULT_TESTS_LIMIT),
        }
    }
}

impl Query for TestsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}

impl Paginated for TestsQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}
