/// Which listener callback a purchase-or-info payload was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseRoute {
    /// `purchase_completed` with `user_canceled = true`.
    UserCanceled,
    /// `purchase_completed` with a vendor error.
    Failed,
    /// `purchase_completed` for a successful purchase.
    Completed,
    /// `purchaser_info_received`.
    PurchaserInfoUpdated,
    /// Nothing usable in the payload; no callback fired.
    Unrouted,
}
