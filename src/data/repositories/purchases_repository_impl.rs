use tracing::warn;

use crate::{
    data::{
        datasources::native_callback_datasource::{
            NativeCallbackDatasource, NativeCallbackDatasourceImpl,
        },
        models::native_callbacks::{
            products_response_model::ProductModel,
            purchaser_info_response_model::{ErrorModel, PurchaserInfoModel},
        },
    },
    domain::{
        entities::{
            decoded_purchase_response::DecodedPurchaseResponse, product::Product,
            purchase_error::PurchaseError, purchaser_info::PurchaserInfo,
        },
        repositories::purchases_repository::PurchasesRepository,
    },
    errors::PurchasesError,
};

pub(crate) struct PurchasesRepositoryImpl<A: NativeCallbackDatasource> {
    native_callback_datasource: A,
}

impl<A: NativeCallbackDatasource> PurchasesRepository for PurchasesRepositoryImpl<A> {
    fn decode_products(&self, payload: &str) -> Result<Vec<Product>, PurchasesError> {
        let response = self.native_callback_datasource.parse_products(payload)?;
        Ok(response
            .products
            .into_iter()
            .map(Product::from_model)
            .collect())
    }

    fn decode_purchase_response(
        &self,
        payload: &str,
    ) -> Result<DecodedPurchaseResponse, PurchasesError> {
        let response = self
            .native_callback_datasource
            .parse_purchaser_info(payload)?;
        Ok(DecodedPurchaseResponse {
            product_identifier: response.product_identifier.filter(|id| !id.is_empty()),
            purchaser_info: response.purchaser_info.and_then(PurchaserInfo::from_model),
            error: response.error.and_then(PurchaseError::from_model),
        })
    }
}

impl PurchasesRepositoryImpl<NativeCallbackDatasourceImpl> {
    pub(crate) fn new() -> Self {
        Self {
            native_callback_datasource: NativeCallbackDatasourceImpl::new(),
        }
    }
}

impl Product {
    fn from_model(m: ProductModel) -> Self {
        Product {
            title: m.title,
            identifier: m.identifier,
            description: m.description,
            price: m.price,
            price_string: m.price_string,
        }
    }
}

impl PurchaserInfo {
    /// Returns `None` when the native layer sent an empty placeholder instead
    /// of real purchaser info.
    fn from_model(m: PurchaserInfoModel) -> Option<Self> {
        let active_subscriptions = m.active_subscriptions?;
        let keys = m.all_expiration_date_keys.unwrap_or_default();
        let values = m.all_expiration_date_values.unwrap_or_default();
        if keys.len() != values.len() {
            warn!(
                keys = keys.len(),
                values = values.len(),
                "expiration date keys and values differ in length, ignoring unpaired entries"
            );
        }
        Some(PurchaserInfo {
            active_subscriptions: active_subscriptions.into_iter().collect(),
            all_purchased_product_identifiers: m
                .all_purchased_product_identifiers
                .unwrap_or_default()
                .into_iter()
                .collect(),
            // The Epoch when the user never had a subscription.
            latest_expiration_date: m.latest_expiration_date.unwrap_or_default(),
            all_expiration_dates: keys.into_iter().zip(values).collect(),
        })
    }
}

impl PurchaseError {
    /// Returns `None` when the native layer sent an empty placeholder error.
    fn from_model(m: ErrorModel) -> Option<Self> {
        Some(PurchaseError {
            message: Some(m.message?),
            code: m.code,
            domain: m.domain.unwrap_or_default(),
        })
    }
}
