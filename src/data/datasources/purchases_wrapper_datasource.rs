use tracing::debug;

use crate::{
    domain::{
        entities::{native_call::NativeCall, platform::Platform, product_type::ProductType},
        repositories::native_bridge::NativeBridge,
    },
    errors::PurchasesError,
};

/// Calls exposed by the platform's native RevenueCat wrapper. All calls are
/// fire-and-forget; results come back through the native callbacks.
pub(crate) trait PurchasesWrapperDatasource {
    fn platform(&self) -> Platform;

    fn setup(
        &self,
        callback_target: &str,
        api_key: &str,
        app_user_id: Option<&str>,
    ) -> Result<(), PurchasesError>;

    fn get_products(&self, product_identifiers: &[String]) -> Result<(), PurchasesError>;

    /// upgrade_skus:
    ///   SKUs the purchase upgrades or cross-grades from. Only supported on
    ///   Android.
    fn make_purchase(
        &self,
        product_identifier: &str,
        upgrade_skus: Option<&[String]>,
        product_type: ProductType,
    ) -> Result<(), PurchasesError>;
}

pub(crate) struct AndroidPurchasesWrapper<B: NativeBridge> {
    bridge: B,
}

pub(crate) struct IosPurchasesWrapper<B: NativeBridge> {
    bridge: B,
}

impl<B: NativeBridge> PurchasesWrapperDatasource for AndroidPurchasesWrapper<B> {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn setup(
        &self,
        callback_target: &str,
        api_key: &str,
        app_user_id: Option<&str>,
    ) -> Result<(), PurchasesError> {
        send(&self.bridge, setup_call(callback_target, api_key, app_user_id))
    }

    fn get_products(&self, product_identifiers: &[String]) -> Result<(), PurchasesError> {
        send(&self.bridge, get_products_call(product_identifiers))
    }

    fn make_purchase(
        &self,
        product_identifier: &str,
        upgrade_skus: Option<&[String]>,
        product_type: ProductType,
    ) -> Result<(), PurchasesError> {
        let call = make_purchase_call(
            self.platform(),
            product_identifier,
            upgrade_skus,
            product_type,
        )?;
        send(&self.bridge, call)
    }
}

impl<B: NativeBridge> PurchasesWrapperDatasource for IosPurchasesWrapper<B> {
    fn platform(&self) -> Platform {
        Platform::Ios
    }

    fn setup(
        &self,
        callback_target: &str,
        api_key: &str,
        app_user_id: Option<&str>,
    ) -> Result<(), PurchasesError> {
        send(&self.bridge, setup_call(callback_target, api_key, app_user_id))
    }

    fn get_products(&self, product_identifiers: &[String]) -> Result<(), PurchasesError> {
        send(&self.bridge, get_products_call(product_identifiers))
    }

    fn make_purchase(
        &self,
        product_identifier: &str,
        upgrade_skus: Option<&[String]>,
        product_type: ProductType,
    ) -> Result<(), PurchasesError> {
        let call = make_purchase_call(
            self.platform(),
            product_identifier,
            upgrade_skus,
            product_type,
        )?;
        send(&self.bridge, call)
    }
}

impl<B: NativeBridge> AndroidPurchasesWrapper<B> {
    pub(crate) fn new(bridge: B) -> Self {
        Self { bridge }
    }
}

impl<B: NativeBridge> IosPurchasesWrapper<B> {
    pub(crate) fn new(bridge: B) -> Self {
        Self { bridge }
    }
}

/// Selects the wrapper adapter for the platform the host is running on.
pub(crate) fn wrapper_for_platform<B: NativeBridge + 'static>(
    platform: Platform,
    bridge: B,
) -> Box<dyn PurchasesWrapperDatasource> {
    match platform {
        Platform::Android => Box::new(AndroidPurchasesWrapper::new(bridge)),
        Platform::Ios => Box::new(IosPurchasesWrapper::new(bridge)),
    }
}

fn setup_call(callback_target: &str, api_key: &str, app_user_id: Option<&str>) -> NativeCall {
    NativeCall::Setup {
        callback_target: callback_target.to_string(),
        api_key: api_key.to_string(),
        app_user_id: app_user_id.map(str::to_string),
    }
}

fn get_products_call(product_identifiers: &[String]) -> NativeCall {
    NativeCall::GetProducts {
        product_identifiers: product_identifiers.to_vec(),
    }
}

fn make_purchase_call(
    platform: Platform,
    product_identifier: &str,
    upgrade_skus: Option<&[String]>,
    product_type: ProductType,
) -> Result<NativeCall, PurchasesError> {
    let upgrade_skus = match upgrade_skus {
        Some(skus) if platform.supports_upgrade_skus() => Some(skus.to_vec()),
        // StoreKit has no notion of replacing an existing SKU on purchase.
        Some(skus) if !skus.is_empty() => {
            return Err(PurchasesError::UpgradeSkusUnsupported(platform))
        }
        _ => None,
    };
    Ok(NativeCall::MakePurchase {
        product_identifier: product_identifier.to_string(),
        upgrade_skus,
        product_type,
    })
}

fn send<B: NativeBridge>(bridge: &B, call: NativeCall) -> Result<(), PurchasesError> {
    debug!(method = call.method(), "sending native call");
    bridge.send(call)
}
