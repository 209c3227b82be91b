//! Search parameter bundles and their query-string form.

use serde::Serialize;

use crate::error::{FreesoundError, Result};

/// First page of results.
pub const DEFAULT_PAGE: u32 = 1;

/// Results per page when the caller does not say otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// Fields requested by the advanced search, to keep responses small.
pub const SEARCH_FIELDS: &str = "id,name,username,description,tags,preview-hq-mp3,duration";

/// Plain text search: query and paging only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSearch {
    pub query: String,
    pub page: u32,
    pub page_size: u32,
}

impl TextSearch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_common(&self.query, self.page, self.page_size)
    }
}

/// Text search with filtering, sorting, grouping and field weights.
///
/// ```
/// use freesound_dl::freesound::SearchParams;
///
/// let params = SearchParams::new("piano")
///     .filter("duration:[0 TO 30]")
///     .sort("score");
/// assert_eq!(params.page, 1);
/// assert_eq!(params.page_size, 15);
/// assert!(!params.group_by_pack);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    /// Provider filter syntax, e.g. `type:wav duration:[10 TO 60]`
    pub filter: Option<String>,
    /// Provider sort key, e.g. `score` or `downloads_desc`
    pub sort: Option<String>,
    pub page: u32,
    pub page_size: u32,
    pub group_by_pack: bool,
    /// Provider field-weight syntax, e.g. `tag:4,description:3`
    pub weights: Option<String>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filter: None,
            sort: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            group_by_pack: false,
            weights: None,
        }
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn group_by_pack(mut self, group_by_pack: bool) -> Self {
        self.group_by_pack = group_by_pack;
        self
    }

    pub fn weights(mut self, weights: impl Into<String>) -> Self {
        self.weights = Some(weights.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_common(&self.query, self.page, self.page_size)
    }

    /// Query-string view sent on the wire.
    pub(crate) fn to_query(&self) -> AdvancedQuery<'_> {
        AdvancedQuery {
            query: &self.query,
            page: self.page,
            page_size: self.page_size,
            fields: SEARCH_FIELDS,
            filter: self.filter.as_deref(),
            sort: self.sort.as_deref(),
            group_by_pack: if self.group_by_pack { "1" } else { "0" },
            weights: self.weights.as_deref(),
        }
    }
}

/// Absent options are skipped entirely rather than sent empty.
#[derive(Debug, Serialize)]
pub(crate) struct AdvancedQuery<'a> {
    query: &'a str,
    page: u32,
    page_size: u32,
    fields: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<&'a str>,
    group_by_pack: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    weights: Option<&'a str>,
}

fn validate_common(query: &str, page: u32, page_size: u32) -> Result<()> {
    if query.trim().is_empty() {
        return Err(FreesoundError::InvalidArgument(
            "search query must not be empty".to_string(),
        ));
    }
    if page == 0 {
        return Err(FreesoundError::InvalidArgument(
            "page must be at least 1".to_string(),
        ));
    }
    if page_size == 0 {
        return Err(FreesoundError::InvalidArgument(
            "page size must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Renders `query` the way reqwest puts it on the URL and decodes it back.
    fn query_pairs<Q: Serialize + ?Sized>(query: &Q) -> Vec<(String, String)> {
        let request = reqwest::Client::new()
            .get("http://localhost/search/text/")
            .query(query)
            .build()
            .unwrap();
        request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn keys(pairs: &[(String, String)]) -> Vec<&str> {
        pairs.iter().map(|(k, _)| k.as_str()).collect()
    }

    fn value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_text_search_defaults() {
        let search = TextSearch::new("piano");
        assert_eq!(search.page, 1);
        assert_eq!(search.page_size, 15);

        let pairs = query_pairs(&search);
        assert_eq!(keys(&pairs), vec!["query", "page", "page_size"]);
        assert_eq!(value(&pairs, "query"), Some("piano"));
        assert_eq!(value(&pairs, "page"), Some("1"));
        assert_eq!(value(&pairs, "page_size"), Some("15"));
    }

    #[test]
    fn test_advanced_query_omits_absent_options() {
        let params = SearchParams::new("piano");
        let pairs = query_pairs(&params.to_query());

        assert_eq!(
            keys(&pairs),
            vec!["query", "page", "page_size", "fields", "group_by_pack"]
        );
        assert_eq!(value(&pairs, "fields"), Some(SEARCH_FIELDS));
        assert_eq!(value(&pairs, "group_by_pack"), Some("0"));
    }

    #[test]
    fn test_advanced_query_includes_supplied_options_verbatim() {
        let params = SearchParams::new("guitar")
            .filter("type:wav duration:[10 TO 60]")
            .sort("downloads_desc")
            .page(2)
            .page_size(20)
            .group_by_pack(true)
            .weights("tag:4,description:3");
        let pairs = query_pairs(&params.to_query());

        assert_eq!(value(&pairs, "query"), Some("guitar"));
        assert_eq!(value(&pairs, "filter"), Some("type:wav duration:[10 TO 60]"));
        assert_eq!(value(&pairs, "sort"), Some("downloads_desc"));
        assert_eq!(value(&pairs, "page"), Some("2"));
        assert_eq!(value(&pairs, "page_size"), Some("20"));
        assert_eq!(value(&pairs, "group_by_pack"), Some("1"));
        assert_eq!(value(&pairs, "weights"), Some("tag:4,description:3"));
    }

    #[test]
    fn test_advanced_query_sort_only() {
        let params = SearchParams::new("rain").sort("score");
        let pairs = query_pairs(&params.to_query());

        assert_eq!(value(&pairs, "sort"), Some("score"));
        assert_eq!(value(&pairs, "filter"), None);
        assert_eq!(value(&pairs, "weights"), None);
    }

    #[test]
    fn test_validate_rejects_empty_query() {
        assert!(matches!(
            SearchParams::new("  ").validate(),
            Err(FreesoundError::InvalidArgument(_))
        ));
        assert!(matches!(
            TextSearch::new("").validate(),
            Err(FreesoundError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_paging() {
        assert!(SearchParams::new("piano").page(0).validate().is_err());
        assert!(SearchParams::new("piano").page_size(0).validate().is_err());
        assert!(TextSearch::new("piano").page(0).validate().is_err());
        assert!(TextSearch::new("piano").page_size(0).validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(SearchParams::new("piano").validate().is_ok());
        assert!(TextSearch::new("piano").validate().is_ok());
    }
}
