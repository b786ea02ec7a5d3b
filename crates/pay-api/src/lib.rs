//! # pay-api
//!
//! HTTP API layer for feegate.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Order creation gated by the identity allow-list
//! - Checkout signature verification
//! - Static frontend serving
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/config` | Public gateway key |
//! | POST | `/create-order` | Create order |
//! | POST | `/verify-payment` | Verify payment signature |
//! | GET | `/trigger-cron-j4k8s9p2q1` | Scheduler ping |
//! | GET | `/health` | Health check |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
