use std::fmt::Display;

pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_RANGE: i64 = 2;

/// Inputs to [`Paginator::compute`](super::Paginator::compute).
///
/// Numbers are signed on purpose: hosts usually forward whatever the query string held,
/// and out-of-range values are clamped during compute rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub total_rows: i64,
    pub limit: i64,
    /// `None` means "last page".
    pub page: Option<i64>,
    pub range: i64,
    pub hash: Option<String>,
    /// Extra query parameters echoed into every link, in insertion order.
    pub params: Vec<(String, String)>,
}

impl PageRequest {
    pub fn new(total_rows: i64) -> Self {
        Self {
            total_rows,
            limit: DEFAULT_LIMIT,
            page: None,
            range: DEFAULT_RANGE,
            hash: None,
            params: Vec::new(),
        }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_page(mut self, page: Option<i64>) -> Self {
        self.page = page;
        self
    }

    pub fn with_range(mut self, range: i64) -> Self {
        self.range = range;
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    pub fn with_params<K, V, I>(mut self, params: I) -> Self
    where
        K: Into<String>,
        V: Display,
        I: IntoIterator<Item = (K, V)>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.to_string())));
        self
    }
}
