//! # pay-razorpay
//!
//! Razorpay payment gateway for feegate.
//!
//! This crate provides:
//!
//! 1. **RazorpayGateway** - Orders API client
//!    - Fixed-body order creation with HTTP basic auth
//!    - Bounded request timeout
//!    - Implements `pay_core::PaymentGateway`
//!
//! 2. **SignatureVerifier** - Checkout signature verification
//!    - HMAC-SHA256 over `order_id|payment_id`
//!    - Constant-time comparison
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_razorpay::{RazorpayConfig, RazorpayGateway, SignatureVerifier};
//!
//! let config = RazorpayConfig::from_env()?;
//! let verifier = SignatureVerifier::new(&config.key_secret)?;
//! let gateway = RazorpayGateway::new(config)?;
//!
//! // Create an order
//! let order = gateway.create_order(&OrderRequest::fixed()).await?;
//!
//! // Later, when the browser reports the payment
//! let check = verifier.verify(Some(&order_id), Some(&payment_id), Some(&signature));
//! ```

pub mod config;
pub mod orders;
pub mod signature;

// Re-exports
pub use config::RazorpayConfig;
pub use orders::RazorpayGateway;
pub use signature::{SignatureCheck, SignatureVerifier};
