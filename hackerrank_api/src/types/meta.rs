use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::lenient;

/// Envelope shared by the list and search endpoints.
///
/// `data` is optional so a body without it can be told apart from an empty
/// page. Entries are decoded one by one, so a malformed entry never fails the
/// page. The paging links are informational only; callers never follow them.
#[derive(Serialize, Deserialize, Debug)]
#[serde(bound(deserialize = "T: DeserializeOwned + Default"))]
pub struct ListResponse<T> {
    #[serde(default, deserialize_with = "lenient::records")]
    pub data: Option<Vec<T>>,
    pub page_total: Option<i64>,
    pub offset: Option<i64>,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub first: Option<String>,
    pub last: Option<String>,
    pub total: Option<i64>,
}

impl<T> ListResponse<T> {
    /// Returns the records, treating a missing `data` field as no records.
    pub fn into_records(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}
