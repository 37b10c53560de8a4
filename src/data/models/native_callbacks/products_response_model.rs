use serde::{Deserialize, Serialize};

/// Payload the native wrapper sends once products requested with
/// `getProducts` have been fetched from the store.
#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct ProductsResponseModel {
    pub(crate) products: Vec<ProductModel>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductModel {
    /// Localized product title.
    pub(crate) title: String,
    /// Store SKU.
    pub(crate) identifier: String,
    /// Localized product description.
    pub(crate) description: String,
    /// Price in the store's local currency.
    pub(crate) price: f64,
    /// Price formatted for display, including the currency symbol.
    pub(crate) price_string: String,
}
