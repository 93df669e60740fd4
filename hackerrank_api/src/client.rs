//! HTTP client for the HackerRank for Work v3 API.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{CandidateSearchQuery, Query, ReportQuery, TestsQuery},
    types::{CandidateAttempt, ListResponse, TestSummary},
    Error,
};

/// Request timeout for every API call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("hackerrank_api/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the HackerRank for Work v3 API.
///
/// Every request carries `Authorization: Bearer <token>` and
/// `Accept: application/json`. A single `reqwest::Client` is shared by all
/// calls made through one instance.
pub struct Client {
    http: reqwest::Client,
    /// Service root, e.g. `https://www.hackerrank.com`.
    base_api_url: String,
    bearer_token: String,
}

impl Client {
    /// Creates a client for the given service root and bearer token.
    pub fn new(base_url: &str, bearer_token: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed(e.to_string())
            })?;
        Ok(Self {
            http,
            base_api_url: base_url.to_string(),
            bearer_token: bearer_token.to_string(),
        })
    }

    /// Returns the service root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, segments: &[&str], query: Option<&impl Query>) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid service URL {}: {}", self.base_api_url, e);
            Error::RequestFailed(format!("invalid service URL: {}", e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Service URL cannot be a base: {}", self.base_api_url);
                Error::RequestFailed("service URL cannot be a base".to_string())
            })?
            .pop_if_empty()
            .extend(["x", "api", "v3"])
            .extend(segments);
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get_body<Q>(&self, segments: &[&str], query: Option<&Q>) -> Result<String, Error>
    where
        Q: Query,
    {
        let url = self.get_url(segments, query)?;
        tracing::debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.bearer_token))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed(e.to_string())
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }

    async fn get<T, Q>(&self, segments: &[&str], query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let body = self.get_body(segments, query).await?;
        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed(format!("failed to parse response: {}", e))
        })
    }

    /// Fetches one page of the test catalog.
    pub async fn get_tests(&self, query: &TestsQuery) -> Result<ListResponse<TestSummary>, Error> {
        self.get::<ListResponse<TestSummary>, TestsQuery>(&["tests"], Some(query))
            .await
    }

    /// Searches the candidates of one test.
    pub async fn search_candidates(
        &self,
        test_id: &str,
        query: &CandidateSearchQuery,
    ) -> Result<ListResponse<CandidateAttempt>, Error> {
        self.get::<ListResponse<CandidateAttempt>, CandidateSearchQuery>(
            &["tests", test_id, "candidates", "search"],
            Some(query),
        )
        .await
    }

    /// Fetches the PDF report link of one candidate on one test.
    ///
    /// Returns the raw response body; the API answers with the bare URL.
    pub async fn get_pdf_report_url(
        &self,
        test_id: &str,
        candidate_id: &str,
        query: &ReportQuery,
    ) -> Result<String, Error> {
        self.get_body(&["tests", test_id, "candidates", candidate_id, "pdf"], Some(query))
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_url_appends_api_prefix_and_segments() {
        let client = Client::new("https://example.com", "token").unwrap();
        let url = client
            .get_url(&["tests", "754562"], None::<&TestsQuery>)
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/x/api/v3/tests/754562");
    }

    #[test]
    fn get_url_handles_trailing_slash() {
        let client = Client::new("https://example.com/", "token").unwrap();
        let url = client
            .get_url(&["tests"], Some(&TestsQuery::default()))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/x/api/v3/tests?limit=100&offset=0"
        );
    }

    #[test]
    fn get_url_escapes_segments() {
        let client = Client::new("https://example.com", "token").unwrap();
        let url = client
            .get_url(&["tests", "a/b"], None::<&TestsQuery>)
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/x/api/v3/tests/a%2Fb");
    }

    #[test]
    fn get_url_rejects_invalid_base() {
        let client = Client::new("not a url", "token").unwrap();
        let result = client.get_url(&["tests"], None::<&TestsQuery>);
        assert!(matches!(result, Err(Error::RequestFailed(_))));
    }

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_cuts_long_bodies() {
        let body = "x".repeat(2500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert_eq!(truncated.len(), 2000 + "...[truncated]".len());
    }
}
