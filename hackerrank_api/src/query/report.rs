//! Query builder for the candidate PDF report endpoint.

use url::Url;

use super::common::Query;

/// Shape of the report the API should return.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// A signed download link instead of the PDF bytes.
    #[default]
    Url,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Url => write!(f, "url"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ReportQuery {
    pub format: ReportFormat,
}

impl Query for ReportQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("format", &self.format.to_string());
        url
    }
}
