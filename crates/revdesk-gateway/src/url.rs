//! URL construction helpers.
//!
//! Pure functions that join the configured base with a descriptor's opaque
//! path and ordered query parameters.

use revdesk_core::QueryParams;
use url::Url;

use crate::error::GatewayError;

/// Parse `origin + base_path` into the base URL every call hangs off.
pub fn build_base_url(origin: &str, base_path: &str) -> Result<Url, GatewayError> {
    let raw = format!(
        "{}/{}",
        origin.trim().trim_end_matches('/'),
        base_path.trim().trim_matches('/')
    );
    Url::parse(&raw).map_err(|source| GatewayError::InvalidBaseUrl { url: raw, source })
}

/// Append a descriptor path and its query to the base URL.
///
/// The path is taken as-is (already-encoded segments stay encoded); query
/// pairs are encoded and kept in descriptor order.
pub fn build_request_url(base: &Url, path: &str, query: &QueryParams) -> Url {
    let mut url = base.clone();

    let base_path = url.path().trim_end_matches('/').to_string();
    if path.is_empty() {
        url.set_path(&format!("{base_path}/"));
    } else if path.starts_with('/') {
        url.set_path(&format!("{base_path}{path}"));
    } else {
        url.set_path(&format!("{base_path}/{path}"));
    }

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query.iter() {
            pairs.append_pair(key, value);
        }
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        build_base_url("http://127.0.0.1:8000", "/api").unwrap()
    }

    #[test]
    fn test_build_base_url() {
        assert_eq!(base().as_str(), "http://127.0.0.1:8000/api");
        assert_eq!(
            build_base_url("https://x.example/", "api/").unwrap().as_str(),
            "https://x.example/api"
        );
        assert_eq!(
            build_base_url("https://x.example", "").unwrap().as_str(),
            "https://x.example/"
        );
    }

    #[test]
    fn test_build_base_url_rejects_garbage() {
        assert!(matches!(
            build_base_url("not a url", "/api"),
            Err(GatewayError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_request_url_keeps_trailing_slash() {
        let url = build_request_url(&base(), "/config/", &QueryParams::new());
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/api/config/");
    }

    #[test]
    fn test_request_url_without_leading_slash() {
        let url = build_request_url(&base(), "system/info", &QueryParams::new());
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/api/system/info");
    }

    #[test]
    fn test_request_url_on_root_base() {
        let root = build_base_url("https://x.example", "").unwrap();
        let url = build_request_url(&root, "/statistics", &QueryParams::new());
        assert_eq!(url.as_str(), "https://x.example/statistics");
    }

    #[test]
    fn test_request_url_query_order_and_encoding() {
        let query = QueryParams::new()
            .with("page", 2)
            .with("search", "fix bug & test")
            .with("page_size", 20);
        let url = build_request_url(&base(), "/webhook/reviews/", &query);
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/api/webhook/reviews/?page=2&search=fix+bug+%26+test&page_size=20"
        );
    }

    #[test]
    fn test_request_url_keeps_encoded_segments() {
        let url = build_request_url(&base(), "/webhook/projects/group%2Fapp", &QueryParams::new());
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/api/webhook/projects/group%2Fapp"
        );
    }
}
