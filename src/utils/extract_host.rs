//! Host and brand extraction from HTTP requests.

use axum::http::{HeaderMap, Uri, header};

/// Returns the raw request host, port included.
///
/// Reads the `Host` header and falls back to the URI authority (HTTP/2
/// requests carry the host in `:authority`). Returns `None` when neither is
/// present or the header is not valid UTF-8.
pub fn request_host(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| uri.authority().map(|a| a.as_str().to_string()))
}

/// Strips a trailing `:port` from a host.
///
/// IPv6 literals keep their brackets (`[::1]:8080` becomes `[::1]`).
pub fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        match host.find(']') {
            Some(end_bracket) => &host[..=end_bracket],
            None => host,
        }
    } else {
        host.split(':').next().unwrap_or(host)
    }
}

/// Derives the brand (subdomain) from a host: the text before the first `.`.
///
/// The port is stripped first. A host without a dot is its own brand.
///
/// # Examples
///
/// ```
/// use dal_links::utils::extract_host::brand_from_host;
///
/// assert_eq!(brand_from_host("radd.dal.io"), "radd");
/// assert_eq!(brand_from_host("radd.dal.io:3000"), "radd");
/// assert_eq!(brand_from_host("localhost"), "localhost");
/// ```
pub fn brand_from_host(host: &str) -> &str {
    let host = strip_port(host);
    host.split('.').next().unwrap_or(host)
}
