//! Collaborator interfaces the engine is wired to at construction time.

use crate::{
    compose::target::RenderTarget,
    foundation::core::{DeviceClass, ViewportSize},
};

/// Per-frame progress listener installed by an engine.
pub type ProgressCallback = Box<dyn FnMut(f64)>;

/// Opaque token returned by [`ProgressSource::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionHandle(pub u64);

/// Publisher of the normalized pin progress, typically once per display refresh.
///
/// Values are nominally in `[0, 1]` and may run slightly past 1 on overscroll.
/// After `unsubscribe` returns, the callback must never be invoked again.
pub trait ProgressSource {
    /// Register `callback` for every subsequent progress value.
    fn subscribe(&self, callback: ProgressCallback) -> SubscriptionHandle;
    /// Remove the listener behind `handle`. Unknown handles are ignored.
    fn unsubscribe(&self, handle: SubscriptionHandle);
}

/// Viewport geometry, queried exactly once at setup.
pub trait ViewportProvider {
    /// Current viewport extents.
    fn viewport_size(&self) -> ViewportSize;
    /// Coarse device classification.
    fn device_class(&self) -> DeviceClass;
}

/// Splits headline text into ordered, individually addressable word targets.
///
/// An empty result is valid; the text fade then has nothing to drive.
pub trait TextSegmenter {
    /// One target per word of `source`, in reading order.
    fn segment(&mut self, source: &str) -> Vec<Box<dyn RenderTarget>>;
}
