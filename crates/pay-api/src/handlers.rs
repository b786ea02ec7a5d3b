//! # Request Handlers
//!
//! Axum request handlers for the payment API.
//! Handlers only marshal JSON and map outcomes to status codes; the
//! decisions live in `pay-core` and `pay-razorpay`.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, FixedOffset, Utc};
use pay_core::PaymentError;
use pay_razorpay::SignatureCheck;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, info, instrument, warn};

/// Secret path pinged by the external uptime monitor.
///
/// The path is only hard to guess; it is not authenticated, so the handler
/// must never do anything privileged.
pub const CRON_TRIGGER_PATH: &str = "/trigger-cron-j4k8s9p2q1";

/// India Standard Time, UTC+05:30
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

// =============================================================================
// Request/Response Types
// =============================================================================

/// Gateway config handed to the browser
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    /// Public key ID (no secret here)
    pub key: String,
}

/// Create order request.
///
/// There is deliberately no amount field; extra fields are ignored.
#[derive(Debug, Default)]
pub struct CreateOrderRequest {
    pub rollno: Option<String>,
    pub institute: Option<String>,
}

impl CreateOrderRequest {
    fn from_body(body: &Value) -> Self {
        Self {
            rollno: text_field(body, "rollno"),
            institute: text_field(body, "institute"),
        }
    }
}

/// Create order response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order_id: String,
    pub amount: i64,
}

/// Fields the checkout hands back after payment
#[derive(Debug, Default)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: Option<String>,
    pub razorpay_payment_id: Option<String>,
    pub razorpay_signature: Option<String>,
}

impl VerifyPaymentRequest {
    fn from_body(body: &Value) -> Self {
        Self {
            razorpay_order_id: text_field(body, "razorpay_order_id"),
            razorpay_payment_id: text_field(body, "razorpay_payment_id"),
            razorpay_signature: text_field(body, "razorpay_signature"),
        }
    }
}

/// Verify payment response
#[derive(Debug, Serialize)]
pub struct VerifyPaymentResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl VerifyPaymentResponse {
    fn verified() -> Self {
        Self {
            status: "ok",
            message: "Payment verified",
        }
    }

    fn invalid_signature() -> Self {
        Self {
            status: "error",
            message: "Invalid signature",
        }
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Body of a JSON request, or `Null` when it could not be read.
///
/// Fields are pulled out one by one so a badly typed value only affects
/// its own field.
fn json_body(payload: Result<Json<Value>, JsonRejection>, endpoint: &str) -> Value {
    payload.map(|Json(body)| body).unwrap_or_else(|rejection| {
        warn!("Unreadable {} body: {}", endpoint, rejection);
        Value::Null
    })
}

/// A string field; other non-null values keep their JSON text and so can
/// never match an identity or a signature.
fn text_field(body: &Value, name: &str) -> Option<String> {
    match body.get(name)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Client-visible message for an order failure; gateway causes stay in the logs
fn order_error_to_response(err: PaymentError) -> (StatusCode, Json<ErrorResponse>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    match err {
        PaymentError::MissingFields | PaymentError::IdentityMismatch => {
            (status, Json(ErrorResponse::new(err.to_string())))
        }
        other => {
            error!("Order creation failed: {}", other);
            (status, Json(ErrorResponse::new("Order creation failed")))
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "feegate",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Public gateway key for the browser checkout
pub async fn config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        key: state.key_id.clone(),
    })
}

/// Create an order for an allowed identity
#[instrument(skip(state, payload))]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreateOrderResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request = CreateOrderRequest::from_body(&json_body(payload, "create-order"));

    let identity = state
        .identities
        .validate(request.rollno.as_deref(), request.institute.as_deref())
        .map_err(|e| {
            info!("Identity rejected: {}", e);
            order_error_to_response(e)
        })?;

    let handle = state
        .orders
        .create_order(&identity)
        .await
        .map_err(order_error_to_response)?;

    Ok(Json(CreateOrderResponse {
        order_id: handle.order_id,
        amount: handle.amount,
    }))
}

/// Verify the checkout signature for a completed payment
#[instrument(skip(state, payload))]
pub async fn verify_payment(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let request = VerifyPaymentRequest::from_body(&json_body(payload, "verify-payment"));

    let check = state.verifier.verify(
        request.razorpay_order_id.as_deref(),
        request.razorpay_payment_id.as_deref(),
        request.razorpay_signature.as_deref(),
    );

    match check {
        SignatureCheck::Verified => {
            info!(
                "Payment verified: order={:?}, payment={:?}",
                request.razorpay_order_id, request.razorpay_payment_id
            );
            (StatusCode::OK, Json(VerifyPaymentResponse::verified())).into_response()
        }
        SignatureCheck::Rejected => {
            warn!(
                "Invalid payment signature: order={:?}, payment={:?}",
                request.razorpay_order_id, request.razorpay_payment_id
            );
            (
                StatusCode::BAD_REQUEST,
                Json(VerifyPaymentResponse::invalid_signature()),
            )
                .into_response()
        }
        SignatureCheck::MissingFields => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Missing payment fields")),
        )
            .into_response(),
    }
}

/// Keep-alive ping from the external scheduler
pub async fn trigger_cron() -> impl IntoResponse {
    info!("Cron job triggered at: {}", india_time(Utc::now()));
    (StatusCode::OK, "Scheduled task executed successfully.")
}

/// Format a timestamp the way operators in India read it
fn india_time(now: DateTime<Utc>) -> String {
    match FixedOffset::east_opt(IST_OFFSET_SECS) {
        Some(ist) => now
            .with_timezone(&ist)
            .format("%d/%m/%Y, %-I:%M:%S %P")
            .to_string(),
        None => now.to_rfc3339(),
    }
}
