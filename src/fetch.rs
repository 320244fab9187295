//! Bounded page fetching.
//!
//! The only I/O in the crate. Every fetch is bounded by the configured
//! timeout and byte cap so a slow or hostile server cannot hold memory
//! or latency hostage. Cancellation is cooperative: dropping the future
//! aborts the request.

use tracing::debug;
use url::Url;

use crate::error::{Error, FetchReason, Result};
use crate::options::Options;

/// Fetch a page and return its body decoded to UTF-8.
///
/// # Errors
///
/// Returns `Error::Fetch` classified as `Network` (bad URL, DNS, TLS,
/// connection), `Timeout`, `HttpStatus` (non-2xx), or `TooLarge` (body
/// over `Options::max_response_bytes`).
pub async fn fetch_page(url: &str, opts: &Options) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| Error::Fetch {
        reason: FetchReason::Network,
        detail: format!("invalid URL {url}: {e}"),
    })?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::Fetch {
            reason: FetchReason::Network,
            detail: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    let client = reqwest::Client::builder()
        .timeout(opts.fetch_timeout)
        .user_agent(&opts.user_agent)
        .build()
        .map_err(|e| Error::Fetch {
            reason: FetchReason::Network,
            detail: format!("client construction failed: {e}"),
        })?;

    debug!(url = %parsed, "fetching page");
    let response = client
        .get(parsed.clone())
        .send()
        .await
        .map_err(|e| classify(&e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Fetch {
            reason: FetchReason::HttpStatus,
            detail: format!("server answered {status}"),
        });
    }

    let cap = opts.max_response_bytes;
    if let Some(declared) = response.content_length() {
        if declared > cap as u64 {
            return Err(Error::Fetch {
                reason: FetchReason::TooLarge,
                detail: format!("declared length {declared} exceeds cap {cap}"),
            });
        }
    }

    // Enforce the cap while streaming; Content-Length can lie or be absent
    let mut body: Vec<u8> = Vec::new();
    let mut response = response;
    while let Some(chunk) = response.chunk().await.map_err(|e| classify(&e))? {
        if body.len() + chunk.len() > cap {
            return Err(Error::Fetch {
                reason: FetchReason::TooLarge,
                detail: format!("body exceeded cap of {cap} bytes"),
            });
        }
        body.extend_from_slice(&chunk);
    }

    debug!(url = %parsed, bytes = body.len(), "fetched page");
    let encoding = crate::encoding::detect_html_encoding(&body);
    Ok(crate::encoding::decode_lossy(&body, encoding))
}

fn classify(e: &reqwest::Error) -> Error {
    let reason = if e.is_timeout() {
        FetchReason::Timeout
    } else {
        FetchReason::Network
    };
    Error::Fetch {
        reason,
        detail: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

    use super::*;

    #[tokio::test]
    async fn invalid_url_is_a_network_error() {
        let err = fetch_page("not a url", &Options::default())
            .await
            .expect_err("must fail");
        assert!(matches!(
            err,
            Error::Fetch {
                reason: FetchReason::Network,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn non_http_scheme_rejected() {
        let err = fetch_page("ftp://example.com/jobs", &Options::default())
            .await
            .expect_err("must fail");
        assert!(matches!(
            err,
            Error::Fetch {
                reason: FetchReason::Network,
                ..
            }
        ));
    }
}
