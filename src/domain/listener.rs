use crate::domain::entities::{
    product::Product, purchase_error::PurchaseError, purchaser_info::PurchaserInfo,
};

/// Receives purchase events routed by the bridge.
pub trait PurchasesListener {
    /// Products requested during `initialize()` were fetched from the store.
    fn products_received(&mut self, products: Vec<Product>);

    /// A purchase finished. When `user_canceled` is true the identifier,
    /// error and purchaser info are all `None`.
    fn purchase_completed(
        &mut self,
        product_identifier: Option<String>,
        error: Option<PurchaseError>,
        purchaser_info: Option<PurchaserInfo>,
        user_canceled: bool,
    );

    /// Purchaser info changed outside of a purchase (e.g. a renewal or a
    /// restore).
    fn purchaser_info_received(&mut self, purchaser_info: PurchaserInfo);
}
