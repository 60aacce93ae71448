//! RGS HTTP Client - Rate-limited REST API Client
//!
//! Wraps reqwest with timeouts, bounded retries, and session forwarding
//! for all interactions with the hosted remote game server.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Configuration for the RGS HTTP client.
#[derive(Debug, Clone)]
pub struct RgsClientConfig {
  /// Base URL for the RGS, scheme included.
  pub base_url: String,
  /// Request timeout.
  pub timeout: Duration,
  /// Maximum retries on transient errors.
  pub max_retries: u32,
  /// Base delay between retries (exponential backoff).
  pub retry_base_delay: Duration,
}

impl Default for RgsClientConfig {
  fn default() -> Self {
    Self {
      base_url: "http://localhost:4000".to_string(),
      timeout: Duration::from_secs(10),
      max_retries: 3,
      retry_base_delay: Duration::from_millis(200),
    }
  }
}

/// HTTP client for the RGS bet-placement API.
///
/// Session issuance belongs to the platform SDK; this client only forwards
/// an already-issued opaque token (RGS_SESSION_ID) on every request.
pub struct RgsClient {
  /// Underlying HTTP client.
  http: Client,
  /// Client configuration.
  config: RgsClientConfig,
  /// Opaque session token forwarded as a header, when present.
  session_id: Option<String>,
}

impl RgsClient {
  /// Create a new RGS client.
  pub fn new(config: RgsClientConfig) -> Result<Self> {
    let http = Client::builder()
      .timeout(config.timeout)
      .pool_max_idle_per_host(5)
      .build()
      .context("Failed to build HTTP client")?;

    Ok(Self {
      http,
      config,
      session_id: session_from_env(),
    })
  }

  /// Execute a POST request with JSON body and retry handling.
  pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
    let url = format!("{}{}", self.config.base_url, path);
    let payload = serde_json::to_string(body).context("Failed to serialize request body")?;
    let request = self
      .http
      .post(&url)
      .header("Content-Type", "application/json")
      .body(payload);
    self.execute_with_retry(request, "POST", path).await
  }

  /// Execute request with session forwarding and bounded retries.
  ///
  /// Transport errors and server-side 5xx responses are retried with
  /// exponential backoff; any other non-success status surfaces the
  /// response body unmodified to the caller.
  async fn execute_with_retry(
    &self,
    request: RequestBuilder,
    method: &str,
    path: &str,
  ) -> Result<Response> {
    let mut last_error = None;

    for attempt in 0..=self.config.max_retries {
      if attempt > 0 {
        let delay = self.config.retry_base_delay * 2u32.pow(attempt - 1);
        debug!(attempt, delay_ms = delay.as_millis(), "Retrying request");
        sleep(delay).await;
      }

      let mut req = request
        .try_clone()
        .context("Failed to clone request")?;

      if let Some(session) = &self.session_id {
        req = req.header("X-Session-Id", session);
      }

      match req.send().await {
        Ok(response) => match response.status() {
          status if status.is_success() => return Ok(response),
          StatusCode::TOO_MANY_REQUESTS => {
            warn!("Rate limited by RGS, backing off");
            sleep(Duration::from_secs(2)).await;
            last_error = Some(anyhow::anyhow!("Rate limited"));
            continue;
          }
          status if status.is_server_error() => {
            warn!(status = %status, "Server error, retrying");
            last_error = Some(anyhow::anyhow!("Server error: {status}"));
            continue;
          }
          status => {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
              "RGS error {status} on {method} {path}: {body}"
            ));
          }
        },
        Err(e) => {
          warn!(error = %e, attempt, "Request failed");
          last_error = Some(e.into());
          continue;
        }
      }
    }

    Err(last_error.unwrap_or_else(|| anyhow::anyhow!("Max retries exceeded")))
  }

  /// Check if the RGS is reachable.
  pub async fn health_check(&self) -> bool {
    self.http.get(&self.config.base_url).send().await.is_ok()
  }
}

/// Read the opaque session token issued by the platform, if any.
fn session_from_env() -> Option<String> {
  std::env::var("RGS_SESSION_ID").ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config_points_at_local_rgs() {
    let config = RgsClientConfig::default();
    assert_eq!(config.base_url, "http://localhost:4000");
    assert_eq!(config.max_retries, 3);
  }

  #[test]
  fn test_client_builds_with_defaults() {
    let client = RgsClient::new(RgsClientConfig::default());
    assert!(client.is_ok());
  }
}
