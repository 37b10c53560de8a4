use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{serde_as, TimestampSeconds};

/// Payload the native wrapper sends after a purchase attempt, and whenever
/// purchaser info is refreshed.
///
/// The native side serializes every field even when it carries nothing, so
/// an "absent" error usually arrives as an object with a null message, and an
/// "absent" purchaser info as an object with null lists.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReceivePurchaserInfoModel {
    pub(crate) product_identifier: Option<String>,
    pub(crate) purchaser_info: Option<PurchaserInfoModel>,
    pub(crate) error: Option<ErrorModel>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PurchaserInfoModel {
    /// Identifiers of subscriptions that are currently active. Null when the
    /// payload carries no purchaser info.
    pub(crate) active_subscriptions: Option<Vec<String>>,
    /// Identifiers of every product the user has ever purchased.
    pub(crate) all_purchased_product_identifiers: Option<Vec<String>>,
    /// Latest expiration across all subscriptions, in seconds since the
    /// Epoch.
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub(crate) latest_expiration_date: Option<DateTime<Utc>>,
    /// Product identifiers, parallel to `all_expiration_date_values`.
    pub(crate) all_expiration_date_keys: Option<Vec<String>>,
    /// Expiration times in seconds since the Epoch, parallel to
    /// `all_expiration_date_keys`.
    #[serde_as(as = "Option<Vec<TimestampSeconds<i64>>>")]
    pub(crate) all_expiration_date_values: Option<Vec<DateTime<Utc>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorModel {
    /// Null when no error occurred.
    pub(crate) message: Option<String>,
    #[serde(default)]
    pub(crate) code: i64,
    pub(crate) domain: Option<String>,
}
