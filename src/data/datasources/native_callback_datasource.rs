use crate::{
    data::models::native_callbacks::{
        products_response_model::ProductsResponseModel,
        purchaser_info_response_model::ReceivePurchaserInfoModel,
    },
    errors::PurchasesError,
};

pub(crate) trait NativeCallbackDatasource {
    /// Parse the payload delivered to the `_receiveProducts` callback.
    ///
    /// body:
    ///   The raw JSON string sent by the native wrapper.
    fn parse_products(&self, body: &str) -> Result<ProductsResponseModel, PurchasesError>;

    /// Parse the payload delivered to the `_receivePurchaserInfo` callback.
    ///
    /// body:
    ///   The raw JSON string sent by the native wrapper.
    fn parse_purchaser_info(&self, body: &str)
        -> Result<ReceivePurchaserInfoModel, PurchasesError>;
}

pub(crate) struct NativeCallbackDatasourceImpl;

impl NativeCallbackDatasource for NativeCallbackDatasourceImpl {
    fn parse_products(&self, body: &str) -> Result<ProductsResponseModel, PurchasesError> {
        serde_json::from_str(body).map_err(|source| PurchasesError::Decode {
            payload: "products",
            source,
        })
    }

    fn parse_purchaser_info(
        &self,
        body: &str,
    ) -> Result<ReceivePurchaserInfoModel, PurchasesError> {
        serde_json::from_str(body).map_err(|source| PurchasesError::Decode {
            payload: "purchaser info",
            source,
        })
    }
}

impl NativeCallbackDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn products_survive_decode_and_reencode() {
        let payload = json!({
            "products": [
                {
                    "title": "Monthly Premium",
                    "identifier": "premium_monthly",
                    "description": "Unlock everything, billed monthly.",
                    "price": 4.99,
                    "priceString": "$4.99",
                },
                {
                    "title": "Gems ×100",
                    "identifier": "gems_100",
                    "description": "",
                    "price": 0.0,
                    "priceString": "Free",
                },
            ]
        });
        let model = NativeCallbackDatasourceImpl::new()
            .parse_products(&payload.to_string())
            .unwrap();
        assert_eq!(serde_json::to_value(&model).unwrap(), payload);
    }

    #[test]
    fn products_with_missing_field_fail_to_decode() {
        let payload = json!({
            "products": [{"title": "a", "identifier": "b", "description": "c", "price": 1.0}]
        })
        .to_string();
        let err = NativeCallbackDatasourceImpl::new()
            .parse_products(&payload)
            .unwrap_err();
        assert!(matches!(err, PurchasesError::Decode { payload: "products", .. }));
    }

    #[test]
    fn products_with_wrong_type_fail_to_decode() {
        let payload = json!({
            "products": [{
                "title": "a",
                "identifier": "b",
                "description": "c",
                "price": "1.00",
                "priceString": "$1.00",
            }]
        })
        .to_string();
        assert!(NativeCallbackDatasourceImpl::new()
            .parse_products(&payload)
            .is_err());
    }

    #[test]
    fn products_key_is_required() {
        assert!(NativeCallbackDatasourceImpl::new()
            .parse_products("{}")
            .is_err());
    }

    #[test]
    fn purchaser_info_fields_are_optional() {
        let model = NativeCallbackDatasourceImpl::new()
            .parse_purchaser_info("{}")
            .unwrap();
        assert!(model.product_identifier.is_none());
        assert!(model.purchaser_info.is_none());
        assert!(model.error.is_none());
    }

    #[test]
    fn purchaser_info_timestamps_decode_as_utc_seconds() {
        let payload = json!({
            "productIdentifier": null,
            "purchaserInfo": {
                "activeSubscriptions": ["premium_monthly"],
                "allPurchasedProductIdentifiers": ["premium_monthly"],
                "latestExpirationDate": 0,
                "allExpirationDateKeys": ["premium_monthly"],
                "allExpirationDateValues": [1_700_000_000i64],
            },
            "error": {"message": null, "code": 0, "domain": null},
        });
        let model = NativeCallbackDatasourceImpl::new()
            .parse_purchaser_info(&payload.to_string())
            .unwrap();
        let info = model.purchaser_info.unwrap();
        assert_eq!(
            info.latest_expiration_date.unwrap().to_rfc3339(),
            "1970-01-01T00:00:00+00:00"
        );
        assert_eq!(
            info.all_expiration_date_values.unwrap()[0].timestamp(),
            1_700_000_000
        );
        assert!(model.error.unwrap().message.is_none());
    }

    #[test]
    fn purchaser_info_rejects_malformed_json() {
        let err = NativeCallbackDatasourceImpl::new()
            .parse_purchaser_info("{\"productIdentifier\":")
            .unwrap_err();
        assert!(matches!(
            err,
            PurchasesError::Decode {
                payload: "purchaser info",
                ..
            }
        ));
    }

    #[test]
    fn purchaser_info_rejects_non_numeric_expiration() {
        let payload = json!({
            "purchaserInfo": {
                "activeSubscriptions": [],
                "latestExpirationDate": "soon",
            }
        });
        assert!(NativeCallbackDatasourceImpl::new()
            .parse_purchaser_info(&payload.to_string())
            .is_err());
    }
}
