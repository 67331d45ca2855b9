//! URL validation and reference resolution
//!
//! Validation is purely syntactic: no network I/O happens here. A
//! [`ValidatedUrl`] only ever holds an `http` or `https` URL, and carries
//! the derived base URL (`scheme://host[:port]`, no path) used to resolve
//! relative references found in the page.

use url::Url;

use crate::error::{Error, Result};

/// A parsed URL guaranteed to use an http(s) scheme
#[derive(Debug, Clone)]
pub struct ValidatedUrl {
    url: Url,
    base_url: String,
}

impl ValidatedUrl {
    /// Parse and validate a raw user-supplied URL string.
    ///
    /// Fails with [`Error::InvalidUrl`] when the string does not parse as a
    /// URL or the scheme is anything other than `http` or `https` (`ftp:`,
    /// `file:`, `javascript:`, scheme-less strings, and so on).
    pub fn parse(raw: &str) -> Result<Self> {
        let url = Url::parse(raw).map_err(|e| Error::InvalidUrl(format!("{raw}: {e}")))?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::InvalidUrl(format!(
                    "{raw}: unsupported scheme '{other}'"
                )));
            }
        }

        let host = url
            .host_str()
            .ok_or_else(|| Error::InvalidUrl(format!("{raw}: missing host")))?;

        // An explicit non-default port stays part of the base URL.
        let base_url = match url.port() {
            Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
            None => format!("{}://{}", url.scheme(), host),
        };

        Ok(Self { url, base_url })
    }

    /// The full validated URL as a string
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// The derived `scheme://host[:port]` base, used to resolve relative
    /// references
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Resolve a (possibly relative) reference picked out of the page against
/// the base URL.
///
/// `//host/path` inherits `https:`, `/path` is anchored to the base,
/// anything without a scheme gets `base_url/` prepended, and values already
/// starting with `http` pass through unchanged.
pub fn resolve_url(value: &str, base_url: &str) -> String {
    if let Some(rest) = value.strip_prefix("//") {
        format!("https://{rest}")
    } else if value.starts_with('/') {
        format!("{base_url}{value}")
    } else if value.starts_with("http") {
        value.to_string()
    } else {
        format!("{base_url}/{value}")
    }
}
