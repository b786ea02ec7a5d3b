//! # Payment Signature Verification
//!
//! After checkout the client receives `razorpay_order_id`,
//! `razorpay_payment_id` and `razorpay_signature`. The signature is
//! `hex(HMAC-SHA256(key_secret, order_id + "|" + payment_id))`, so recomputing
//! it locally proves the gateway attested the payment without a callback.

use hmac::{Hmac, Mac};
use pay_core::{PaymentError, PaymentResult};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Outcome of checking a client-submitted payment signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureCheck {
    /// Signature matches the recomputed digest
    Verified,
    /// Signature does not match
    Rejected,
    /// One of the three fields was absent or empty; nothing was computed
    MissingFields,
}

/// Verifies payment signatures against the shared key secret
#[derive(Clone)]
pub struct SignatureVerifier {
    mac: HmacSha256,
}

impl SignatureVerifier {
    /// Key the verifier with the gateway's key secret
    pub fn new(secret: &str) -> PaymentResult<Self> {
        if secret.is_empty() {
            return Err(PaymentError::Configuration(
                "Payment signature secret is empty".to_string(),
            ));
        }

        let mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|e| PaymentError::Configuration(format!("Invalid HMAC key: {}", e)))?;

        Ok(Self { mac })
    }

    /// Compute the lowercase hex signature for an order/payment pair
    pub fn sign(&self, order_id: &str, payment_id: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(order_id.as_bytes());
        mac.update(b"|");
        mac.update(payment_id.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Check a client-submitted signature.
    ///
    /// Accepts only an exact match of the lowercase hex digest.
    pub fn verify(
        &self,
        order_id: Option<&str>,
        payment_id: Option<&str>,
        signature: Option<&str>,
    ) -> SignatureCheck {
        let (Some(order_id), Some(payment_id), Some(signature)) =
            (present(order_id), present(payment_id), present(signature))
        else {
            return SignatureCheck::MissingFields;
        };

        let expected = self.sign(order_id, payment_id);

        if constant_time_compare(signature, &expected) {
            SignatureCheck::Verified
        } else {
            SignatureCheck::Rejected
        }
    }
}

impl std::fmt::Debug for SignatureVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureVerifier").finish_non_exhaustive()
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0, |acc, (x, y)| acc | (x ^ y))
        == 0
}
