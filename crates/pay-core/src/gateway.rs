//! # Payment Gateway Trait
//!
//! Seam between the order service and the provider that actually holds the
//! money. The Razorpay client in `pay-razorpay` implements it; tests plug in
//! in-process doubles.
//!
//! ```text
//! ┌──────────────┐   OrderRequest    ┌──────────────────────────┐
//! │ OrderService │ ────────────────▶ │ PaymentGateway (trait)   │
//! └──────────────┘ ◀──────────────── │  ├── create_order()      │
//!                    GatewayOrder    │  └── provider_name()     │
//!                                    └──────────────────────────┘
//!                                                 ▲
//!                                      ┌──────────┴─────────┐
//!                                      │  RazorpayGateway   │
//!                                      └────────────────────┘
//! ```

use crate::error::PaymentResult;
use crate::order::{GatewayOrder, OrderRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for payment gateway implementations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order in the gateway's system.
    ///
    /// Every call creates a new order; the gateway does not deduplicate.
    async fn create_order(&self, request: &OrderRequest) -> PaymentResult<GatewayOrder>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
