use url::Url;

/// Extracts the domain (host, plus port when one is present) from a URL.
///
/// The port is included so that two servers on the same host are treated as
/// distinct domains for rate limiting and robots decisions.
pub fn extract_domain(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host.to_string()),
    }
}

/// Checks whether two URLs belong to the same domain.
pub fn is_same_domain(a: &Url, b: &Url) -> bool {
    match (extract_domain(a), extract_domain(b)) {
        (Some(da), Some(db)) => da == db,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_domain() {
        let url = Url::parse("https://example.com/page").unwrap();
        assert_eq!(extract_domain(&url).as_deref(), Some("example.com"));
    }

    #[test]
    fn test_extract_domain_keeps_explicit_port() {
        let url = Url::parse("http://127.0.0.1:8080/page").unwrap();
        assert_eq!(extract_domain(&url).as_deref(), Some("127.0.0.1:8080"));
    }

    #[test]
    fn test_default_port_is_omitted() {
        let url = Url::parse("https://example.com:443/page").unwrap();
        assert_eq!(extract_domain(&url).as_deref(), Some("example.com"));
    }

    #[test]
    fn test_is_same_domain() {
        let a = Url::parse("https://example.com/a").unwrap();
        let b = Url::parse("https://example.com/b?q=1").unwrap();
        let c = Url::parse("https://other.com/a").unwrap();

        assert!(is_same_domain(&a, &b));
        assert!(!is_same_domain(&a, &c));
    }
}
