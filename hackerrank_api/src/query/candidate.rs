//! Query builder for the per-test candidate search endpoint.

use url::Url;

use super::common::{Paginated, Query, QueryCommon};

/// Default page size for a candidate search.
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Query for searching the candidates of one test by a free-text term
/// (in practice, the candidate's email).
#[derive(Clone, Debug)]
pub struct CandidateSearchQuery {
    pub common: QueryCommon,
    pub search: Option<String>,
}

impl Default for CandidateSearchQuery {
    fn default() -> Self {
        Self {
            common: QueryCommon::with_limit(DEFAULT_SEARCH_LIMIT),
            search: None,
        }
    }
}

impl CandidateSearchQuery {
    /// Filters by a search term, typically an email address.
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
}

impl Query for CandidateSearchQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search);
        }
        self.common.add_to_url(&url)
    }
}

impl Paginated for CandidateSearchQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{CandidateSearchQuery, Paginated, Query};

    #[test]
    fn test_candidate_search_query() {
        let url = Url::parse("https://example.com/x/api/v3/tests/754562/candidates/search").unwrap();

        insta::assert_snapshot!(
            CandidateSearchQuery::default()
                .with_search("candidatea@mailservice.com")
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/x/api/v3/tests/754562/candidates/search?search=candidatea%40mailservice.com&limit=10&offset=0"
        );

        insta::assert_snapshot!(
            CandidateSearchQuery::default()
                .with_limit(25)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/x/api/v3/tests/754562/candidates/search?limit=25&offset=0"
        );
    }
}
