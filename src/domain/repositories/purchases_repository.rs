use crate::{
    domain::entities::{decoded_purchase_response::DecodedPurchaseResponse, product::Product},
    errors::PurchasesError,
};

pub trait PurchasesRepository {
    /// Decodes a `{"products": [...]}` callback payload.
    fn decode_products(&self, payload: &str) -> Result<Vec<Product>, PurchasesError>;

    /// Decodes a purchase-or-info callback payload. Parts that the native
    /// layer left empty come back as `None`.
    fn decode_purchase_response(
        &self,
        payload: &str,
    ) -> Result<DecodedPurchaseResponse, PurchasesError>;
}
