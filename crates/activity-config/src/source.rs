use url::form_urlencoded;

/// Name of the query parameter carrying the config URL.
pub const SOURCE_PARAM: &str = "src";

/// Extract the config URL from a page's query string (`?src=...`).
///
/// The leading `?` is optional. Returns `None` when the parameter is
/// absent or empty.
pub fn config_url_from_query(search: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == SOURCE_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.trim().is_empty())
}
