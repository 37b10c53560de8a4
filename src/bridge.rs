use tracing::{debug, warn};

use crate::{
    config::PurchasesConfig,
    data::{
        datasources::purchases_wrapper_datasource::{
            wrapper_for_platform, PurchasesWrapperDatasource,
        },
        repositories::purchases_repository_impl::PurchasesRepositoryImpl,
    },
    domain::{
        entities::{
            decoded_purchase_response::DecodedPurchaseResponse, product_type::ProductType,
            purchase_route::PurchaseRoute,
        },
        listener::PurchasesListener,
        repositories::{native_bridge::NativeBridge, purchases_repository::PurchasesRepository},
    },
    errors::PurchasesError,
};

/// Callback name the native wrapper uses to deliver fetched products.
pub const RECEIVE_PRODUCTS_CALLBACK: &str = "_receiveProducts";
/// Callback name the native wrapper uses to deliver purchase results and
/// purchaser info updates.
pub const RECEIVE_PURCHASER_INFO_CALLBACK: &str = "_receivePurchaserInfo";

/// Connects the host to the native RevenueCat SDK.
///
/// Requests go out through the platform wrapper and return immediately.
/// The host feeds the JSON payloads the native layer sends back into
/// [`on_products_decoded`](Self::on_products_decoded) and
/// [`on_purchase_or_info_decoded`](Self::on_purchase_or_info_decoded) (or
/// [`on_native_message`](Self::on_native_message)), which route them to the
/// listener.
pub struct PurchasesBridge<L: PurchasesListener> {
    config: PurchasesConfig,
    wrapper: Box<dyn PurchasesWrapperDatasource>,
    repository: Box<dyn PurchasesRepository>,
    listener: L,
    initialized: bool,
}

impl<L: PurchasesListener> PurchasesBridge<L> {
    pub fn new<B: NativeBridge + 'static>(
        config: PurchasesConfig,
        native: B,
        listener: L,
    ) -> Self {
        Self {
            wrapper: wrapper_for_platform(config.platform, native),
            repository: Box::new(PurchasesRepositoryImpl::new()),
            config,
            listener,
            initialized: false,
        }
    }

    /// Sets up the native SDK and requests the configured products. Products
    /// arrive later through `products_received`.
    pub fn initialize(&mut self) -> Result<(), PurchasesError> {
        debug!(
            platform = %self.config.platform,
            anonymous = self.config.app_user_id.is_none(),
            products = self.config.product_identifiers.len(),
            "initializing purchases"
        );
        self.wrapper.setup(
            &self.config.callback_target,
            &self.config.api_key,
            self.config.app_user_id.as_deref(),
        )?;
        self.initialized = true;
        self.wrapper.get_products(&self.config.product_identifiers)
    }

    /// Starts a purchase. The outcome arrives later through
    /// `purchase_completed`.
    ///
    /// upgrade_skus:
    ///   SKUs being upgraded or cross-graded from. Android only; must be
    ///   `None` (or empty) on iOS.
    pub fn request_purchase(
        &self,
        product_identifier: &str,
        upgrade_skus: Option<&[String]>,
        product_type: ProductType,
    ) -> Result<(), PurchasesError> {
        if !self.initialized {
            return Err(PurchasesError::NotInitialized);
        }
        debug!(
            product_identifier,
            product_type = product_type.as_str(),
            "requesting purchase"
        );
        self.wrapper
            .make_purchase(product_identifier, upgrade_skus, product_type)
    }

    pub fn on_products_decoded(&mut self, payload: &str) -> Result<(), PurchasesError> {
        let products = self.repository.decode_products(payload).inspect_err(|e| {
            warn!(error = %e, "dropping products callback");
        })?;
        debug!(count = products.len(), "products received");
        self.listener.products_received(products);
        Ok(())
    }

    pub fn on_purchase_or_info_decoded(
        &mut self,
        payload: &str,
    ) -> Result<PurchaseRoute, PurchasesError> {
        let response = self
            .repository
            .decode_purchase_response(payload)
            .inspect_err(|e| {
                warn!(error = %e, "dropping purchaser info callback");
            })?;
        let route = self.route(response);
        debug!(?route, "purchaser info callback routed");
        Ok(route)
    }

    /// Dispatches a native callback by the method name the native wrapper
    /// addressed it to.
    pub fn on_native_message(
        &mut self,
        method: &str,
        payload: &str,
    ) -> Result<(), PurchasesError> {
        match method {
            RECEIVE_PRODUCTS_CALLBACK => self.on_products_decoded(payload),
            RECEIVE_PURCHASER_INFO_CALLBACK => {
                self.on_purchase_or_info_decoded(payload).map(|_| ())
            }
            other => Err(PurchasesError::UnknownCallback(other.to_string())),
        }
    }

    fn route(&mut self, response: DecodedPurchaseResponse) -> PurchaseRoute {
        let platform = self.wrapper.platform();
        let DecodedPurchaseResponse {
            product_identifier,
            purchaser_info,
            error,
        } = response;

        if let Some(error) = error {
            if error.is_user_cancellation(platform) {
                self.listener.purchase_completed(None, None, None, true);
                PurchaseRoute::UserCanceled
            } else {
                self.listener
                    .purchase_completed(product_identifier, Some(error), purchaser_info, false);
                PurchaseRoute::Failed
            }
        } else if let Some(product_identifier) = product_identifier {
            self.listener
                .purchase_completed(Some(product_identifier), None, purchaser_info, false);
            PurchaseRoute::Completed
        } else if let Some(purchaser_info) = purchaser_info {
            self.listener.purchaser_info_received(purchaser_info);
            PurchaseRoute::PurchaserInfoUpdated
        } else {
            PurchaseRoute::Unrouted
        }
    }

    pub fn config(&self) -> &PurchasesConfig {
        &self.config
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }
}
