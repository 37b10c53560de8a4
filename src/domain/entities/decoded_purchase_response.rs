use super::{purchase_error::PurchaseError, purchaser_info::PurchaserInfo};

/// Decoded purchase-or-info callback. Any combination of the three parts may
/// be present; routing decides which listener callback fires.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecodedPurchaseResponse {
    pub product_identifier: Option<String>,
    pub purchaser_info: Option<PurchaserInfo>,
    pub error: Option<PurchaseError>,
}
