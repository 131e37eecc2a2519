//! HTTP client construction and JSON download with retries.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use depviz_resolver::fetcher::FetchError;
use depviz_util::errors::DepvizError;

const MAX_RETRIES: u32 = 3;
const BASE_DELAY_MS: u64 = 100;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("depviz/", env!("CARGO_PKG_VERSION"));

/// Build the shared reqwest client for index requests.
pub fn build_client() -> miette::Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| {
            DepvizError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}

/// True for HTTP statuses worth another attempt.
fn should_retry(status: reqwest::StatusCode) -> bool {
    status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS
}

/// GET a JSON document, retrying transient failures with exponential
/// backoff.
///
/// Returns `Ok(None)` for 404 (the package does not exist in this index);
/// other non-success statuses are errors. Timeouts, connect errors, 5xx,
/// and 429 are retried up to [`MAX_RETRIES`] times before failing.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
) -> Result<Option<T>, FetchError> {
    let mut last_err = String::new();
    let mut delay = BASE_DELAY_MS;

    for attempt in 0..=MAX_RETRIES {
        if attempt > 0 {
            tracing::debug!(url, attempt, delay_ms = delay, "retrying index request");
            tokio::time::sleep(Duration::from_millis(delay)).await;
            delay *= 2;
        }

        match client.get(url).send().await {
            Ok(resp) => {
                let status = resp.status();
                if status == reqwest::StatusCode::NOT_FOUND {
                    return Ok(None);
                }
                if should_retry(status) {
                    last_err = format!("HTTP {status} from {url}");
                    continue;
                }
                if !status.is_success() {
                    return Err(FetchError::Http {
                        status: status.as_u16(),
                    });
                }
                return match resp.json::<T>().await {
                    Ok(doc) => Ok(Some(doc)),
                    Err(e) => Err(FetchError::Decode {
                        message: e.to_string(),
                    }),
                };
            }
            Err(e) if e.is_timeout() || e.is_connect() => {
                last_err = e.to_string();
                continue;
            }
            Err(e) => {
                return Err(FetchError::Network {
                    message: e.to_string(),
                });
            }
        }
    }

    Err(FetchError::Network {
        message: format!("gave up after {MAX_RETRIES} retries: {last_err}"),
    })
}
