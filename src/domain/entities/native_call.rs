use serde::Serialize;

use super::product_type::ProductType;

/// Outbound call to the native RevenueCat wrapper.
///
/// Serializes to a JSON object tagged by `"method"`, e.g.
/// `{"method":"getProducts","productIdentifiers":["monthly"]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "method", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum NativeCall {
    Setup {
        /// Name the native layer uses to address callbacks back to the host.
        callback_target: String,
        api_key: String,
        /// `None` lets RevenueCat generate an anonymous user ID.
        app_user_id: Option<String>,
    },
    GetProducts {
        product_identifiers: Vec<String>,
    },
    MakePurchase {
        product_identifier: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        upgrade_skus: Option<Vec<String>>,
        product_type: ProductType,
    },
}

impl NativeCall {
    pub fn method(&self) -> &'static str {
        match self {
            NativeCall::Setup { .. } => "setup",
            NativeCall::GetProducts { .. } => "getProducts",
            NativeCall::MakePurchase { .. } => "makePurchase",
        }
    }
}
