use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};

/// Current subscription status of the user.
///
/// Use it to decide which entitlements to unlock, typically by checking
/// `active_subscriptions` or `latest_expiration_date`. All times are UTC;
/// compare them against `Utc::now()`.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaserInfo {
    pub active_subscriptions: BTreeSet<String>,
    pub all_purchased_product_identifiers: BTreeSet<String>,
    pub latest_expiration_date: DateTime<Utc>,
    /// Expiration time per product identifier.
    pub all_expiration_dates: HashMap<String, DateTime<Utc>>,
}

impl PurchaserInfo {
    pub fn is_subscription_active(&self, product_identifier: &str) -> bool {
        self.active_subscriptions.contains(product_identifier)
    }

    pub fn expiration_date(&self, product_identifier: &str) -> Option<DateTime<Utc>> {
        self.all_expiration_dates.get(product_identifier).copied()
    }
}
