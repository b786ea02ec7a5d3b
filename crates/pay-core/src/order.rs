//! # Order Types
//!
//! Order request/response types and the order service.
//! The price is fixed here, server-side; nothing a client sends reaches it.

use crate::error::PaymentResult;
use crate::gateway::BoxedPaymentGateway;
use crate::identity::VerifiedIdentity;
use crate::money::{Currency, Price};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Fee charged for every order (₹173,400)
pub const ORDER_PRICE: Price = Price::from_major(173_400, Currency::INR);

/// Receipt label attached to every order
pub const ORDER_RECEIPT: &str = "receipt#1";

/// Order creation request sent to the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Amount in smallest currency unit
    pub amount: i64,
    /// Currency
    pub currency: Currency,
    /// Merchant receipt label
    pub receipt: String,
}

impl OrderRequest {
    /// The one order this service ever places
    pub fn fixed() -> Self {
        Self {
            amount: ORDER_PRICE.amount,
            currency: ORDER_PRICE.currency,
            receipt: ORDER_RECEIPT.to_string(),
        }
    }

    pub fn price(&self) -> Price {
        Price::from_minor(self.amount, self.currency)
    }
}

/// An order as created by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayOrder {
    /// Gateway-issued order ID
    pub id: String,
    /// Amount the gateway recorded
    pub amount: i64,
    /// Currency
    pub currency: Currency,
    /// Receipt label echoed back
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    /// Gateway status (e.g. "created")
    #[serde(default)]
    pub status: String,
}

/// What the client needs to open the gateway's checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderHandle {
    /// Gateway-issued order ID
    pub order_id: String,
    /// Amount requested, in smallest currency unit
    pub amount: i64,
}

/// Creates orders for verified identities
#[derive(Clone)]
pub struct OrderService {
    gateway: BoxedPaymentGateway,
}

impl OrderService {
    pub fn new(gateway: BoxedPaymentGateway) -> Self {
        Self { gateway }
    }

    /// Name of the gateway orders are placed with
    pub fn provider_name(&self) -> &'static str {
        self.gateway.provider_name()
    }

    /// Create an order at the fixed price.
    ///
    /// Not idempotent: each call creates a distinct order at the gateway.
    #[instrument(skip(self, identity), fields(rollno = %identity.rollno()))]
    pub async fn create_order(&self, identity: &VerifiedIdentity) -> PaymentResult<OrderHandle> {
        let request = OrderRequest::fixed();

        info!(
            "Creating {} order: amount={}, receipt={}",
            self.gateway.provider_name(),
            request.price().display(),
            request.receipt
        );

        let order = self.gateway.create_order(&request).await?;

        info!("Created order: id={}, status={}", order.id, order.status);

        Ok(OrderHandle {
            order_id: order.id,
            amount: request.amount,
        })
    }
}
