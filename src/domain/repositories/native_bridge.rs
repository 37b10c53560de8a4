use crate::{domain::entities::native_call::NativeCall, errors::PurchasesError};

/// Transport to the platform's native RevenueCat wrapper, provided by the
/// host.
///
/// Calls are fire-and-forget: results come back later as JSON payloads
/// which the host feeds into
/// [`PurchasesBridge`](crate::bridge::PurchasesBridge). An `Err` means the
/// call could not be handed to the native layer at all.
pub trait NativeBridge {
    fn send(&self, call: NativeCall) -> Result<(), PurchasesError>;
}

impl<B: NativeBridge + ?Sized> NativeBridge for Box<B> {
    fn send(&self, call: NativeCall) -> Result<(), PurchasesError> {
        (**self).send(call)
    }
}

impl<B: NativeBridge + ?Sized> NativeBridge for std::rc::Rc<B> {
    fn send(&self, call: NativeCall) -> Result<(), PurchasesError> {
        (**self).send(call)
    }
}
