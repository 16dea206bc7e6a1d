//! Blocking JSON POST with retry, shared by the HTTP adapters

use crate::ModelError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Default timeout for model requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of attempts per request
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Build a blocking client with the given timeout
pub(crate) fn build_client(timeout_secs: u64) -> Result<reqwest::blocking::Client, ModelError> {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(ModelError::from)
}

/// POST `body` as JSON to `url` and decode the JSON response
///
/// Transport failures and non-404 error statuses are retried with exponential
/// backoff (1s, 2s, 4s, ...). A 404 is reported as `ModelNotAvailable(model)`
/// without retrying.
pub(crate) fn post_json<Req, Resp>(
    client: &reqwest::blocking::Client,
    url: &str,
    body: &Req,
    max_retries: u32,
    model: &str,
) -> Result<Resp, ModelError>
where
    Req: Serialize,
    Resp: DeserializeOwned,
{
    let mut attempts = 0;
    let mut last_error = None;

    while attempts < max_retries {
        match client.post(url).json(body).send() {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    return response.json::<Resp>().map_err(|e| {
                        ModelError::InvalidResponse(format!("Failed to parse response: {}", e))
                    });
                } else if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(ModelError::ModelNotAvailable(model.to_string()));
                }
                let error_text = response
                    .text()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                last_error = Some(ModelError::Communication(format!(
                    "HTTP {}: {}",
                    status, error_text
                )));
            }
            Err(e) => {
                last_error = Some(ModelError::Communication(format!("Request failed: {}", e)));
            }
        }

        attempts += 1;
        if attempts < max_retries {
            let delay = Duration::from_secs(2u64.pow(attempts - 1));
            debug!("Retrying {} in {:?} (attempt {})", url, delay, attempts + 1);
            thread::sleep(delay);
        }
    }

    Err(last_error
        .unwrap_or_else(|| ModelError::Communication("Max retries exceeded".to_string())))
}
