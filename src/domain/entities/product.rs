/// A store product as reported by the native SDK.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub title: String,
    pub identifier: String,
    pub description: String,
    pub price: f64,
    /// Price formatted in the user's locale and currency (e.g. "$4.99").
    pub price_string: String,
}
