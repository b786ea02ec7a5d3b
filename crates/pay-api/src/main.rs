//! # feegate
//!
//! Fee payment backend: identity-gated Razorpay orders and checkout
//! signature verification.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export RAZORPAY_KEY_ID=rzp_test_...
//! export RAZORPAY_KEY_SECRET=...
//!
//! # Run the server
//! feegate
//! ```

use pay_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first so it can set RUST_LOG and LOG_FORMAT
    dotenvy::dotenv().ok();
    init_logging();

    // Print banner
    print_banner();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Allowed identities: {}", state.identities.len());
    info!("Payment gateway: {}", state.orders.provider_name());
    info!("Static files: {}", state.config.public_dir.display());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("Server listening on http://{}", addr);

    if !is_prod {
        info!("Config: GET http://{}/config", addr);
        info!("Create order: POST http://{}/create-order", addr);
        info!("Verify payment: POST http://{}/verify-payment", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}

/// `RUST_LOG` filters, `LOG_FORMAT=json` switches to structured output
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    if json_logs(|key| std::env::var(key).ok()) {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }
}

fn json_logs(lookup: impl Fn(&str) -> Option<String>) -> bool {
    lookup("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json"))
}

fn print_banner() {
    println!(
        r#"
  feegate
  ━━━━━━━━━━━━━━━━━━━━━━━
  Fee payment backend
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn dotenv_vars(content: &str) -> HashMap<String, String> {
        dotenvy::from_read_iter(content.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_json_logs_from_dotenv_file() {
        let vars = dotenv_vars("RAZORPAY_KEY_SECRET=s3cret\nLOG_FORMAT=json\n");
        assert!(json_logs(|key| vars.get(key).cloned()));
    }

    #[test]
    fn test_text_logs_by_default() {
        assert!(!json_logs(|_| None));

        let vars = dotenv_vars("LOG_FORMAT=pretty\n");
        assert!(!json_logs(|key| vars.get(key).cloned()));
    }
}
