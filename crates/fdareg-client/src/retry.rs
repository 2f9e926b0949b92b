//! Retry logic with exponential backoff for openFDA HTTP calls.
//!
//! Retries only on transport errors (connection failures, timeouts).
//! HTTP status errors and deserialization failures are returned to the
//! caller without retry.

use std::time::Duration;

/// Base delay between retries (doubles each attempt: 200ms, 400ms, 800ms).
const BASE_DELAY_MS: u64 = 200;

/// Send an HTTP request, retrying transport failures with backoff.
///
/// The closure `f` is called up to `max_retries + 1` times. Only
/// [`reqwest::Error`] transport failures trigger a retry; the caller
/// inspects the response status.
pub(crate) async fn retry_send<F, Fut>(
    max_retries: u32,
    f: F,
) -> Result<reqwest::Response, reqwest::Error>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    for attempt in 0..max_retries {
        match f().await {
            Ok(resp) => return Ok(resp),
            Err(e) => {
                let delay = Duration::from_millis(BASE_DELAY_MS * 2u64.pow(attempt.min(16)));
                tracing::warn!(
                    attempt = attempt + 1,
                    max_retries,
                    "openFDA request failed, retrying in {delay:?}: {e}"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
    f().await
}
