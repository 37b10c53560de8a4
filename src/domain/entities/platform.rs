use std::fmt;

use serde::{Deserialize, Serialize};

/// Mobile platform the native RevenueCat SDK is running on. Selects the
/// wrapper adapter and the user-cancellation sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Android,
    Ios,
}

impl Platform {
    /// Error (domain, code) pair the native SDK reports when the user
    /// dismisses the purchase sheet.
    pub fn cancellation_sentinel(&self) -> (&'static str, i64) {
        match self {
            // Google Play BillingResponse.USER_CANCELED.
            Platform::Android => ("1", 1),
            // SKErrorPaymentCancelled.
            Platform::Ios => ("SKErrorDomain", 2),
        }
    }

    /// Whether purchases may carry a list of SKUs being upgraded or
    /// cross-graded from.
    pub fn supports_upgrade_skus(&self) -> bool {
        matches!(self, Platform::Android)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Android => write!(f, "Android"),
            Platform::Ios => write!(f, "iOS"),
        }
    }
}
