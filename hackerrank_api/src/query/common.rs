//! Shared query infrastructure: the [`Query`] and [`Paginated`] traits and [`QueryCommon`] fields.

use url::Url;

/// Trait implemented by all query builders.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Builder methods shared by the offset/limit paginated endpoints.
pub trait Paginated: Query {
    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the number of records to skip.
    fn with_offset(mut self, offset: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().offset = offset;
        self
    }

    /// Sets the maximum number of records returned.
    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = limit;
        self
    }
}

/// Offset/limit pagination fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryCommon {
    /// Records to skip. Defaults to 0.
    pub offset: u32,
    /// Records per page.
    pub limit: u32,
}

impl QueryCommon {
    pub fn with_limit(limit: u32) -> Self {
        Self { offset: 0, limit }
    }

    /// Appends `limit` and `offset` to the URL, in that order.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("limit", &self.limit.to_string())
            .append_pair("offset", &self.offset.to_string());
        url
    }
}
