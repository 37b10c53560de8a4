use serde::{Deserialize, Serialize};

/// Store product type passed along with a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProductType {
    /// Auto-renewing subscription.
    #[default]
    #[serde(rename = "subs")]
    Subscription,
    /// One-time (consumable or non-consumable) product.
    #[serde(rename = "inapp")]
    InApp,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Subscription => "subs",
            ProductType::InApp => "inapp",
        }
    }
}
