//! # Application State
//!
//! Shared state for the Axum application.
//! Everything here is read-only after startup; clones are cheap.

use anyhow::Context;
use pay_core::{BoxedPaymentGateway, IdentityRegistry, OrderService};
use pay_razorpay::{RazorpayConfig, RazorpayGateway, SignatureVerifier};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Directory of static frontend assets
    pub public_dir: PathBuf,
    /// Explicit allow-list file, if configured
    pub identities_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load from environment variables (`.env` is loaded by `main`)
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            public_dir: lookup("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            identities_file: lookup("IDENTITIES_FILE").map(PathBuf::from),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid socket address {}:{}", self.host, self.port))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Identities allowed to create orders
    pub identities: Arc<IdentityRegistry>,
    /// Order service backed by the payment gateway
    pub orders: OrderService,
    /// Checkout signature verifier
    pub verifier: SignatureVerifier,
    /// Public gateway key ID (empty when unset)
    pub key_id: String,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState with the Razorpay gateway
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let identities = load_identity_registry(&config)?;

        let razorpay_config = RazorpayConfig::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to load Razorpay config: {}", e))?;

        let verifier = SignatureVerifier::new(&razorpay_config.key_secret)
            .map_err(|e| anyhow::anyhow!("Failed to initialize signature verifier: {}", e))?;

        let key_id = razorpay_config.key_id.clone();
        tracing::info!("Razorpay key mode: {}", razorpay_config.key_mode());

        let gateway = RazorpayGateway::new(razorpay_config)
            .map_err(|e| anyhow::anyhow!("Failed to initialize Razorpay: {}", e))?;

        Ok(Self::from_parts(
            config,
            identities,
            Arc::new(gateway) as BoxedPaymentGateway,
            verifier,
            key_id,
        ))
    }

    /// Assemble state from already-built parts
    pub fn from_parts(
        config: AppConfig,
        identities: IdentityRegistry,
        gateway: BoxedPaymentGateway,
        verifier: SignatureVerifier,
        key_id: impl Into<String>,
    ) -> Self {
        Self {
            identities: Arc::new(identities),
            orders: OrderService::new(gateway),
            verifier,
            key_id: key_id.into(),
            config,
        }
    }
}

/// Load the identity allow-list from config/identities.toml
fn load_identity_registry(config: &AppConfig) -> anyhow::Result<IdentityRegistry> {
    // An explicitly configured file must exist
    if let Some(path) = &config.identities_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return parse_identities(&content, &path.display().to_string());
    }

    let config_paths = [
        "config/identities.toml",
        "../config/identities.toml",
        "../../config/identities.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            return parse_identities(&content, path);
        }
    }

    tracing::warn!("No identities file found, using built-in allowed identity");
    Ok(IdentityRegistry::default())
}

fn parse_identities(content: &str, path: &str) -> anyhow::Result<IdentityRegistry> {
    let registry = IdentityRegistry::from_toml(content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
    tracing::info!("Loaded {} allowed identities from {}", registry.len(), path);
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::from_vars(|_| None);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert!(config.identities_file.is_none());
        assert!(!config.is_production());
    }

    #[test]
    fn test_app_config_overrides() {
        let config = AppConfig::from_vars(|key| match key {
            "PORT" => Some("8081".to_string()),
            "ENVIRONMENT" => Some("production".to_string()),
            "IDENTITIES_FILE" => Some("/etc/feegate/identities.toml".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 8081);
        assert!(config.is_production());
        assert_eq!(
            config.identities_file,
            Some(PathBuf::from("/etc/feegate/identities.toml"))
        );
    }

    #[test]
    fn test_unparseable_port_falls_back() {
        let config = AppConfig::from_vars(|key| (key == "PORT").then(|| "http".to_string()));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "test".to_string(),
            public_dir: PathBuf::from("public"),
            identities_file: None,
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_socket_addr_invalid_host() {
        let config = AppConfig::from_vars(|key| (key == "HOST").then(|| "not a host".to_string()));
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_missing_explicit_identities_file_is_an_error() {
        let config = AppConfig::from_vars(|key| {
            (key == "IDENTITIES_FILE").then(|| "/nonexistent/identities.toml".to_string())
        });
        assert!(load_identity_registry(&config).is_err());
    }

    #[test]
    fn test_explicit_identities_file_is_loaded() {
        let dir = std::env::temp_dir().join(format!("feegate-identities-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("identities.toml");
        std::fs::write(
            &path,
            r#"
[[identities]]
institute = "School of Design"
rollno = "22des101"

[[identities]]
institute = "Institute of Technology"
rollno = "23bec202"
"#,
        )
        .unwrap();

        let file = path.to_string_lossy().into_owned();
        let config = AppConfig::from_vars(|key| (key == "IDENTITIES_FILE").then(|| file.clone()));
        let registry = load_identity_registry(&config).unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(registry.len(), 2);
        assert!(registry
            .validate(Some("22DES101"), Some("school of design"))
            .is_ok());
        assert!(registry
            .validate(Some("22des101"), Some("Institute of Technology"))
            .is_err());
    }
}
