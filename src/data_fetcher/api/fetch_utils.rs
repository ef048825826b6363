//! Generic HTTP fetching with retry logic and error classification

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::retry;
use crate::error::AppError;

/// Fetches `url` and decodes the JSON body into `T`.
///
/// Failures that [`AppError::is_retryable`] accepts (timeouts, connection
/// failures, 429 and 5xx responses) are retried with exponential backoff,
/// honouring `Retry-After` when the server sends one. Other failures are
/// mapped to specific [`AppError`] variants and returned at once.
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let mut attempt = 0u32;
    let mut backoff = Duration::from_millis(retry::BASE_DELAY_MS);
    let response = loop {
        let (err, retry_after) = match client.get(url).send().await {
            Ok(resp) if resp.status().is_success() => break resp,
            Ok(resp) => {
                let status = resp.status();
                let retry_after = resp
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|h| h.to_str().ok())
                    .and_then(|s| s.trim().parse::<u64>().ok())
                    .map(Duration::from_secs);
                let reason = status.canonical_reason().unwrap_or("Unknown error");
                (status_error(status.as_u16(), reason, url), retry_after)
            }
            Err(e) => (request_error(e, url), None),
        };

        if err.is_retryable() && attempt < retry::MAX_ATTEMPTS {
            let wait = retry_after.unwrap_or(backoff);
            warn!(
                "{} Retrying in {:?} (attempt {}/{})",
                err,
                wait,
                attempt + 1,
                retry::MAX_ATTEMPTS
            );
            tokio::time::sleep(wait).await;
            attempt += 1;
            backoff = backoff.saturating_mul(2);
            continue;
        }

        error!("Request failed for URL {}: {}", url, err);
        return Err(err);
    };

    debug!("Response status: {}", response.status());

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );
            Err(parse_failure(&response_text, &e, url))
        }
    }
}

/// Maps a transport-level failure to the matching error variant.
fn request_error(err: reqwest::Error, url: &str) -> AppError {
    if err.is_timeout() {
        AppError::network_timeout(url)
    } else if err.is_connect() {
        AppError::network_connection(url, err.to_string())
    } else {
        AppError::ApiFetch(err)
    }
}

/// Maps a non-success HTTP status to the matching error variant.
pub(super) fn status_error(status_code: u16, reason: &str, url: &str) -> AppError {
    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// Distinguishes an empty body, a body that is not JSON at all, and valid
/// JSON with an unexpected shape.
pub(super) fn parse_failure(response_text: &str, err: &serde_json::Error, url: &str) -> AppError {
    let trimmed = response_text.trim_start();
    if trimmed.is_empty() {
        AppError::api_no_data("Response body is empty", url)
    } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') && trimmed != "null" {
        AppError::api_malformed_json("Response is not valid JSON", url)
    } else {
        AppError::api_unexpected_structure(err.to_string(), url)
    }
}
