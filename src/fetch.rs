//! Page fetching
//!
//! A single bounded GET per extraction call: fixed timeout, identifying
//! user agent, and a streaming body cap so a hostile or misconfigured site
//! cannot feed us an unbounded document. No retries and no caching; a
//! failure here is terminal for the whole pipeline.

use std::time::Duration;

use futures::StreamExt;
use tracing::{debug, instrument};

use crate::error::FetchError;
use crate::url::ValidatedUrl;

/// Identifying user agent, so target sites can allow or block the bot
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; BrandkitBot/1.0; +https://brandkit.dev)";

/// Hard wall-clock limit for the whole request, body included
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Body size cap (5 MB)
pub const MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

/// A successfully fetched page body together with the URL that produced it
#[derive(Debug)]
pub struct FetchedPage {
    /// Raw markup text of the response body
    pub html: String,
    /// The validated URL the body came from
    pub url: ValidatedUrl,
}

/// Fetch the page at `url`, returning its body as text.
///
/// Transport errors, timeouts, non-success statuses, and bodies over
/// [`MAX_BODY_BYTES`] all surface as [`FetchError`]; the pipeline wraps
/// them uniformly.
#[instrument(skip(url), fields(url = url.as_str()))]
pub async fn fetch_page(url: ValidatedUrl) -> Result<FetchedPage, FetchError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()?;

    let response = client.get(url.as_str()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    // Stream with a size cap rather than trusting Content-Length.
    let mut stream = response.bytes_stream();
    let mut buf: Vec<u8> = Vec::with_capacity(64 * 1024);
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if buf.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(FetchError::BodyTooLarge(MAX_BODY_BYTES));
        }
        buf.extend_from_slice(&chunk);
    }

    let html = String::from_utf8_lossy(&buf).into_owned();
    debug!(bytes = html.len(), status = status.as_u16(), "fetched page");

    Ok(FetchedPage { html, url })
}
