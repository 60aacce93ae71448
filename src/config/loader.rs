//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, applying environment variable overrides
//! (RGS_URL, RGS_PROTOCOL), validating all parameters, and providing clear
//! error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::{AppConfig, OutcomeSourceKind, Protocol};

/// Load and validate configuration from a TOML file.
///
/// Environment variables take precedence over file values:
/// - `RGS_URL` - endpoint host, optionally with a `http://`/`https://` scheme
/// - `RGS_PROTOCOL` - `http` or `https`
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let mut config: AppConfig = toml::from_str(&content)
    .with_context(|| "Failed to parse config.toml")?;

  apply_overrides(&mut config, |key| std::env::var(key).ok());
  validate_config(&config)?;

  info!(
    endpoint = %config.rgs.endpoint(),
    environment = ?config.client.environment,
    outcome_source = ?config.outcome.source,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Apply environment overrides from an arbitrary variable lookup.
///
/// Split out from `std::env` so tests can inject variables without
/// mutating process state.
fn apply_overrides(config: &mut AppConfig, var: impl Fn(&str) -> Option<String>) {
  if let Some(url) = var("RGS_URL") {
    match url.split_once("://") {
      Some(("http", host)) => {
        config.rgs.protocol = Protocol::Http;
        config.rgs.base_url = host.to_string();
      }
      Some(("https", host)) => {
        config.rgs.protocol = Protocol::Https;
        config.rgs.base_url = host.to_string();
      }
      Some((scheme, _)) => {
        warn!(scheme, "Ignoring RGS_URL with unsupported scheme");
      }
      None => config.rgs.base_url = url,
    }
  }

  if let Some(protocol) = var("RGS_PROTOCOL") {
    match protocol.as_str() {
      "http" => config.rgs.protocol = Protocol::Http,
      "https" => config.rgs.protocol = Protocol::Https,
      other => warn!(protocol = other, "Ignoring unknown RGS_PROTOCOL value"),
    }
  }
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Non-empty identity and endpoint fields
/// - Sensible transport limits
/// - A usable outcome source selection
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.client.name.is_empty(),
    "Client name must not be empty"
  );

  anyhow::ensure!(
    !config.rgs.base_url.is_empty(),
    "RGS base_url must not be empty"
  );
  anyhow::ensure!(
    !config.rgs.base_url.contains("://"),
    "RGS base_url must not carry a scheme (use protocol), got {}",
    config.rgs.base_url
  );
  anyhow::ensure!(
    config.rgs.timeout_ms > 0,
    "RGS timeout_ms must be positive"
  );
  anyhow::ensure!(
    config.rgs.max_retries <= 10,
    "RGS max_retries must be at most 10, got {}",
    config.rgs.max_retries
  );

  anyhow::ensure!(
    config.outcome.fixed_multiplier.is_finite() && config.outcome.fixed_multiplier >= 1.0,
    "Fixed multiplier must be a finite value >= 1, got {}",
    config.outcome.fixed_multiplier
  );
  if config.outcome.source == OutcomeSourceKind::Lookup {
    anyhow::ensure!(
      config.outcome.lookup_table_path.is_some(),
      "Lookup outcome source requires lookup_table_path"
    );
    anyhow::ensure!(
      config.outcome.lookup_index.is_some(),
      "Lookup outcome source requires lookup_index"
    );
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::Environment;

  const MINIMAL: &str = r#"
    [client]
    name = "crash-client"

    [rgs]

    [outcome]
  "#;

  fn minimal_config() -> AppConfig {
    toml::from_str(MINIMAL).unwrap()
  }

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn test_minimal_config_defaults() {
    let config = minimal_config();
    assert_eq!(config.client.environment, Environment::Dev);
    assert_eq!(config.rgs.endpoint(), "http://localhost:4000");
    assert_eq!(config.outcome.source, OutcomeSourceKind::Fixed);
    assert!(validate_config(&config).is_ok());
  }

  #[test]
  fn test_rgs_url_override_with_scheme() {
    let mut config = minimal_config();
    apply_overrides(&mut config, |key| match key {
      "RGS_URL" => Some("https://rgs.example.com:8443".to_string()),
      _ => None,
    });
    assert_eq!(config.rgs.protocol, Protocol::Https);
    assert_eq!(config.rgs.base_url, "rgs.example.com:8443");
    assert_eq!(config.rgs.endpoint(), "https://rgs.example.com:8443");
  }

  #[test]
  fn test_rgs_url_override_without_scheme() {
    let mut config = minimal_config();
    apply_overrides(&mut config, |key| match key {
      "RGS_URL" => Some("rgs.internal:4000".to_string()),
      "RGS_PROTOCOL" => Some("https".to_string()),
      _ => None,
    });
    assert_eq!(config.rgs.base_url, "rgs.internal:4000");
    assert_eq!(config.rgs.protocol, Protocol::Https);
  }

  #[test]
  fn test_unsupported_scheme_ignored() {
    let mut config = minimal_config();
    apply_overrides(&mut config, |key| match key {
      "RGS_URL" => Some("ftp://rgs.example.com".to_string()),
      _ => None,
    });
    assert_eq!(config.rgs.base_url, "localhost:4000");
    assert_eq!(config.rgs.protocol, Protocol::Http);
  }

  #[test]
  fn test_lookup_source_requires_table_and_index() {
    let mut config = minimal_config();
    config.outcome.source = OutcomeSourceKind::Lookup;
    assert!(validate_config(&config).is_err());

    config.outcome.lookup_table_path = Some("lookup.json".to_string());
    config.outcome.lookup_index = Some(3);
    assert!(validate_config(&config).is_ok());
  }

  #[test]
  fn test_sub_unit_fixed_multiplier_rejected() {
    let mut config = minimal_config();
    config.outcome.fixed_multiplier = 0.5;
    assert!(validate_config(&config).is_err());
  }
}
