use thiserror::Error;

use crate::domain::entities::platform::Platform;

#[derive(Debug, Error)]
pub enum PurchasesError {
    /// A payload delivered by the native layer did not match the expected
    /// schema.
    #[error("Failed to decode {payload} payload: {source}")]
    Decode {
        payload: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Upgrade SKUs are not supported on {0}.")]
    UpgradeSkusUnsupported(Platform),

    /// A purchase was requested before `initialize()` set up the native SDK.
    #[error("Purchases bridge has not been initialized.")]
    NotInitialized,

    #[error("Unknown native callback '{0}'.")]
    UnknownCallback(String),

    /// The host-provided native bridge failed to deliver a call.
    #[error("Native call '{method}' failed: {reason}")]
    NativeCall { method: &'static str, reason: String },

    #[error("Missing RevenueCat API key.")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for PurchasesError {
    fn from(e: figment::Error) -> Self {
        PurchasesError::Config(Box::new(e))
    }
}
