use url::Url;

/// Query parameters that only carry tracking state and are removed during
/// normalization. A parameter is dropped when its name contains one of these
/// tokens.
const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "fbclid",
    "gclid",
];

/// Path extensions that point at non-document resources the crawler should
/// never fetch.
const SKIP_EXTENSIONS: &[&str] = &[
    "pdf", "jpg", "jpeg", "png", "gif", "css", "js", "xml", "zip", "doc", "docx", "xls", "xlsx",
    "ppt", "pptx",
];

/// Normalizes a discovered link relative to the page it was found on.
///
/// Resolution and filtering, in order:
///
/// 1. Resolve `href` against `base` (or parse it as absolute when no base is
///    given); unparseable hrefs are dropped
/// 2. Drop anything that is not http or https
/// 3. Drop links whose path extension is in the non-document set
/// 4. Strip the fragment
/// 5. Remove tracking query parameters; when every parameter was a tracking
///    parameter, remove the query string entirely
///
/// Deterministic, no network I/O, no state.
///
/// # Examples
///
/// ```
/// use petrel::url::normalize_link;
/// use url::Url;
///
/// let base = Url::parse("https://a.com").unwrap();
/// let link = normalize_link("/x", Some(&base)).unwrap();
/// assert_eq!(link.as_str(), "https://a.com/x");
///
/// assert!(normalize_link("ftp://a.com", None).is_none());
/// ```
pub fn normalize_link(href: &str, base: Option<&Url>) -> Option<Url> {
    let mut url = match base {
        Some(base) => base.join(href).ok()?,
        None => Url::parse(href).ok()?,
    };

    if url.scheme() != "http" && url.scheme() != "https" {
        tracing::debug!("Skipping non-HTTP URL: {}", url);
        return None;
    }

    if let Some(ext) = path_extension(url.path()) {
        if SKIP_EXTENSIONS.contains(&ext.as_str()) {
            tracing::debug!("Skipping non-document URL: {}", url);
            return None;
        }
    }

    url.set_fragment(None);

    if url.query().is_some() {
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(name, _)| !is_tracking_param(name))
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();

        if kept.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(kept);
        }
    }

    Some(url)
}

/// Returns the lowercased extension of the final path segment, if any.
fn path_extension(path: &str) -> Option<String> {
    let segment = path.rsplit('/').next()?;
    let (_, ext) = segment.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

fn is_tracking_param(name: &str) -> bool {
    let lowered = name.to_ascii_lowercase();
    TRACKING_PARAMS.iter().any(|param| lowered.contains(param))
}
