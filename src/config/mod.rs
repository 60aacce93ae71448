//! Configuration Module - TOML-based Client Configuration
//!
//! Loads and validates configuration from `config.toml` with environment
//! variable overrides (RGS_URL, RGS_PROTOCOL). The RGS endpoint and the
//! outcome source selection are externalized here - nothing is hardcoded
//! in the domain layer.

pub mod loader;

use serde::Deserialize;

/// Top-level client configuration.
///
/// Loaded from `config.toml` at startup. All fields are validated
/// before the client plays its first round.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// Client identity and runtime environment.
  pub client: ClientConfig,
  /// RGS endpoint and transport parameters.
  pub rgs: RgsEndpointConfig,
  /// Outcome source selection.
  pub outcome: OutcomeConfig,
}

/// Runtime environment the client operates in.
///
/// In `dev` the bet-placement call is skipped entirely and rounds play
/// without server registration - explicitly a non-production shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
  /// Local development: no bet registration with the RGS.
  Dev,
  /// Production: every round starts with a registered bet.
  Production,
}

/// Wire protocol selecting the remote endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
  Http,
  Https,
}

impl std::fmt::Display for Protocol {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Http => write!(f, "http"),
      Self::Https => write!(f, "https"),
    }
  }
}

/// Client identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
  /// Human-readable client name.
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Runtime environment.
  #[serde(default = "default_environment")]
  pub environment: Environment,
}

/// RGS endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RgsEndpointConfig {
  /// Host and port of the RGS, without a scheme.
  #[serde(default = "default_base_url")]
  pub base_url: String,
  /// Protocol selecting the endpoint.
  #[serde(default = "default_protocol")]
  pub protocol: Protocol,
  /// Request timeout in milliseconds.
  #[serde(default = "default_timeout_ms")]
  pub timeout_ms: u64,
  /// Maximum retries on transient transport errors.
  #[serde(default = "default_max_retries")]
  pub max_retries: u32,
  /// Base delay between retries in milliseconds (exponential backoff).
  #[serde(default = "default_retry_base_delay_ms")]
  pub retry_base_delay_ms: u64,
}

impl RgsEndpointConfig {
  /// Full endpoint URL assembled from protocol and host.
  pub fn endpoint(&self) -> String {
    format!("{}://{}", self.protocol, self.base_url)
  }
}

/// Which crash multiplier source backs round resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeSourceKind {
  /// Fixed development placeholder multiplier.
  Fixed,
  /// Multiplier resolved from the math engine's exported lookup table.
  Lookup,
}

/// Outcome source configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OutcomeConfig {
  /// Selected source.
  #[serde(default = "default_outcome_source")]
  pub source: OutcomeSourceKind,
  /// Placeholder multiplier for the fixed source.
  #[serde(default = "default_fixed_multiplier")]
  pub fixed_multiplier: f64,
  /// Path to the exported lookup table JSON (required for `lookup`).
  pub lookup_table_path: Option<String>,
  /// Externally selected table index (required for `lookup`).
  pub lookup_index: Option<usize>,
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}

fn default_environment() -> Environment {
  Environment::Dev
}

fn default_base_url() -> String {
  "localhost:4000".to_string()
}

fn default_protocol() -> Protocol {
  Protocol::Http
}

fn default_timeout_ms() -> u64 {
  10_000
}

fn default_max_retries() -> u32 {
  3
}

fn default_retry_base_delay_ms() -> u64 {
  200
}

fn default_outcome_source() -> OutcomeSourceKind {
  OutcomeSourceKind::Fixed
}

fn default_fixed_multiplier() -> f64 {
  // Development stand-in for the resolved round; matches the fixed source.
  2.37
}
