//! # Razorpay Configuration
//!
//! Configuration management for the Razorpay integration.
//! All secrets are loaded from environment variables.

use pay_core::PaymentError;
use std::time::Duration;
use tracing::warn;

/// Production API endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://api.razorpay.com";

/// Upper bound on a single gateway request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Razorpay API configuration
#[derive(Clone)]
pub struct RazorpayConfig {
    /// Public key ID (rzp_test_... or rzp_live_...), safe to hand to browsers
    pub key_id: String,

    /// Key secret: API password and payment signature key
    pub key_secret: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// Request timeout for gateway calls
    pub timeout: Duration,
}

impl RazorpayConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `RAZORPAY_KEY_SECRET`
    ///
    /// Optional:
    /// - `RAZORPAY_KEY_ID` (empty when unset)
    /// - `RAZORPAY_API_BASE_URL`
    /// - `GATEWAY_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PaymentError> {
        let key_secret = lookup("RAZORPAY_KEY_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                PaymentError::Configuration("RAZORPAY_KEY_SECRET not set".to_string())
            })?;

        let timeout_secs = match lookup("GATEWAY_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                PaymentError::Configuration(format!(
                    "GATEWAY_TIMEOUT_SECS is not a number: {}",
                    raw
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            key_id: lookup("RAZORPAY_KEY_ID").unwrap_or_default(),
            key_secret,
            api_base_url: lookup("RAZORPAY_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        };

        if config.key_id.is_empty() {
            warn!("RAZORPAY_KEY_ID not set; order creation will fail authentication");
        } else if config.key_mode() == "unknown" {
            warn!("RAZORPAY_KEY_ID does not start with rzp_test_ or rzp_live_");
        }

        Ok(config)
    }

    /// Create config with explicit values (for testing)
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.key_id.starts_with("rzp_test_")
    }

    /// Check if using live keys
    pub fn is_live_mode(&self) -> bool {
        self.key_id.starts_with("rzp_live_")
    }

    /// Key mode for startup logs: `test`, `live` or `unknown`
    pub fn key_mode(&self) -> &'static str {
        if self.is_test_mode() {
            "test"
        } else if self.is_live_mode() {
            "live"
        } else {
            "unknown"
        }
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder: set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for RazorpayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RazorpayConfig")
            .field("key_id", &self.key_id)
            .field("key_secret", &"***")
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
