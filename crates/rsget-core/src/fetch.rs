//! HTTP fetching.
//!
//! Uses the curl crate (libcurl) to perform one GET per call and return the
//! raw response body. Redirect and TLS policy are left to libcurl defaults;
//! only the timeouts are configured. No retry, no internal parallelism.

use std::time::Duration;

/// Default connect timeout for [`CurlTransport`], in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 15;
/// Default whole-request timeout for [`CurlTransport`], in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Request method. GET is the default; HEAD fetches headers only and
/// yields an empty body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Head,
}

/// A validated request: URL plus optional method and headers.
///
/// Construction rejects an empty URL before any I/O happens; everything
/// else the transport may still refuse at request time (bad scheme,
/// unresolvable host) and that surfaces as [`FetchError::Curl`].
#[derive(Debug, Clone)]
pub struct RequestSpec {
    url: String,
    method: Method,
    headers: Vec<(String, String)>,
}

impl RequestSpec {
    /// Creates a spec for `url`. Fails with [`FetchError::InvalidSpec`] if
    /// the URL is empty or whitespace-only.
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(FetchError::InvalidSpec(
                "url must be a non-empty string".to_string(),
            ));
        }
        Ok(RequestSpec {
            url,
            method: Method::Get,
            headers: Vec::new(),
        })
    }

    /// Sets the request method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Adds a request header (e.g. `("Accept", "text/html")`).
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// Error returned by a fetch: contract violation, transport failure, or a
/// non-2xx HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request spec was malformed; detected before any I/O.
    #[error("invalid request: {0}")]
    InvalidSpec(String),
    /// libcurl reported an error (DNS, connection refused, timeout, TLS).
    #[error("transport: {0}")]
    Curl(#[from] curl::Error),
    /// The server answered with a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
}

/// The HTTP collaborator seam. The batch runner only sees this trait, so
/// tests can substitute a scripted transport.
pub trait Transport: Send + Sync {
    /// Performs exactly one request and returns the raw body bytes.
    /// Never panics across this boundary; every failure becomes a
    /// [`FetchError`].
    fn get(&self, spec: &RequestSpec) -> Result<Vec<u8>, FetchError>;
}

/// Default [`Transport`] backed by `curl::easy::Easy`.
///
/// One blocking request per call; the calling thread suspends at the
/// network boundary. Follows redirects (up to 10).
#[derive(Debug, Clone, Copy)]
pub struct CurlTransport {
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl CurlTransport {
    pub fn new(connect_timeout: Duration, request_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            request_timeout,
        }
    }

    /// Builds a transport from the loaded configuration.
    pub fn from_config(cfg: &crate::config::RsgetConfig) -> Self {
        Self::new(
            Duration::from_secs(cfg.connect_timeout_secs),
            Duration::from_secs(cfg.request_timeout_secs),
        )
    }
}

impl Transport for CurlTransport {
    fn get(&self, spec: &RequestSpec) -> Result<Vec<u8>, FetchError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(spec.url())?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.request_timeout)?;
        if spec.method() == Method::Head {
            easy.nobody(true)?;
        }

        let mut list = curl::easy::List::new();
        for (k, v) in spec.headers() {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        if !spec.headers().is_empty() {
            easy.http_headers(list)?;
        }

        let mut body: Vec<u8> = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_spec_rejects_empty_url() {
        let err = RequestSpec::new("").unwrap_err();
        assert!(matches!(err, FetchError::InvalidSpec(_)));
        let err = RequestSpec::new("   ").unwrap_err();
        assert!(matches!(err, FetchError::InvalidSpec(_)));
    }

    #[test]
    fn request_spec_defaults_to_get() {
        let spec = RequestSpec::new("https://example.com/").unwrap();
        assert_eq!(spec.method(), Method::Get);
        assert!(spec.headers().is_empty());
        assert_eq!(spec.url(), "https://example.com/");
    }

    #[test]
    fn request_spec_builder_accumulates() {
        let spec = RequestSpec::new("https://example.com/x")
            .unwrap()
            .with_method(Method::Head)
            .with_header("Accept", "text/html")
            .with_header("X-Token", "abc");
        assert_eq!(spec.method(), Method::Head);
        assert_eq!(spec.headers().len(), 2);
        assert_eq!(spec.headers()[0].0, "Accept");
        assert_eq!(spec.headers()[1].1, "abc");
    }
}
