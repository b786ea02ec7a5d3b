//! # pay-core
//!
//! Core types and traits for the feegate payment backend.
//!
//! This crate provides:
//! - `IdentityRegistry` for gating who may create an order
//! - `OrderService`, `OrderRequest`, and `OrderHandle` for the fixed-price order flow
//! - `PaymentGateway` trait for implementing payment providers
//! - `Currency` and `Price` for amounts in minor units
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{IdentityRegistry, OrderService};
//!
//! let identities = IdentityRegistry::default();
//! let service = OrderService::new(gateway);
//!
//! // Gate the caller, then place the order
//! let identity = identities.validate(Some("23bec202"), Some("Institute of Technology"))?;
//! let handle = service.create_order(&identity).await?;
//!
//! // Hand handle.order_id to the client-side checkout
//! ```

pub mod error;
pub mod gateway;
pub mod identity;
pub mod money;
pub mod order;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use identity::{AllowedIdentity, IdentityRegistry, VerifiedIdentity};
pub use money::{Currency, Price};
pub use order::{GatewayOrder, OrderHandle, OrderRequest, OrderService, ORDER_PRICE, ORDER_RECEIPT};
