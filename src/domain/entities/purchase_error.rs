use thiserror::Error;

use super::platform::Platform;

/// Failure reported by the native SDK for a purchase or info request.
///
/// These are delivered to the listener, not returned as errors from the
/// bridge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "{} (domain: {}, code: {})",
    .message.as_deref().unwrap_or("unknown error"),
    .domain,
    .code
)]
pub struct PurchaseError {
    pub message: Option<String>,
    pub code: i64,
    pub domain: String,
}

impl PurchaseError {
    /// Whether this error is the platform's way of saying the user backed out
    /// of the purchase.
    pub fn is_user_cancellation(&self, platform: Platform) -> bool {
        let (domain, code) = platform.cancellation_sentinel();
        self.domain == domain && self.code == code
    }
}
