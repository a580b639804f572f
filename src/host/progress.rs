use std::{cell::RefCell, rc::Rc};

use crate::{
    config::model::PinConfig,
    engine::ports::{ProgressCallback, ProgressSource, SubscriptionHandle},
    foundation::core::ViewportSize,
    foundation::error::{ChoreoError, ChoreoResult},
};

type Listener = Rc<RefCell<ProgressCallback>>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionHandle, Listener)>,
}

/// Progress source driven by explicit [`ManualProgressSource::publish`] calls.
///
/// Clones share one listener list. A listener removed while a publish is in flight is
/// not called for the remainder of that publish.
#[derive(Clone, Default)]
pub struct ManualProgressSource {
    inner: Rc<RefCell<Listeners>>,
}

impl ManualProgressSource {
    /// Source with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    fn is_subscribed(&self, handle: SubscriptionHandle) -> bool {
        self.inner
            .borrow()
            .entries
            .iter()
            .any(|(h, _)| *h == handle)
    }

    /// Deliver `progress` to every current listener, in subscription order.
    pub fn publish(&self, progress: f64) {
        let listeners: Vec<(SubscriptionHandle, Listener)> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(h, l)| (*h, Rc::clone(l)))
            .collect();

        for (handle, listener) in listeners {
            if !self.is_subscribed(handle) {
                continue;
            }
            match listener.try_borrow_mut() {
                Ok(mut cb) => (*cb)(progress),
                Err(_) => tracing::warn!(?handle, "skipping re-entrant publish"),
            }
        }
    }
}

impl ProgressSource for ManualProgressSource {
    fn subscribe(&self, callback: ProgressCallback) -> SubscriptionHandle {
        let mut inner = self.inner.borrow_mut();
        let handle = SubscriptionHandle(inner.next_id);
        inner.next_id += 1;
        inner.entries.push((handle, Rc::new(RefCell::new(callback))));
        handle
    }

    fn unsubscribe(&self, handle: SubscriptionHandle) {
        self.inner.borrow_mut().entries.retain(|(h, _)| *h != handle);
    }
}

impl std::fmt::Debug for ManualProgressSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualProgressSource")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Maps a scroll offset onto a pinned region and republishes it as progress.
///
/// The region starts at `trigger_top` and spans `pin.length_viewports` viewport heights.
/// Published progress is floored at 0 and capped at `1 + pin.overscroll`.
#[derive(Clone, Debug)]
pub struct ScrollPin {
    start: f64,
    length: f64,
    max_progress: f64,
    source: ManualProgressSource,
}

impl ScrollPin {
    /// Pin starting at scroll offset `trigger_top`, sized from `viewport.height`.
    pub fn new(trigger_top: f64, viewport: ViewportSize, pin: &PinConfig) -> ChoreoResult<Self> {
        viewport.validate()?;
        if !trigger_top.is_finite() {
            return Err(ChoreoError::validation("pin trigger_top must be finite"));
        }
        let length = pin.length_viewports * viewport.height;
        if !length.is_finite() || length <= 0.0 {
            return Err(ChoreoError::validation("pin length must be finite and > 0"));
        }
        Ok(Self {
            start: trigger_top,
            length,
            max_progress: 1.0 + pin.overscroll.max(0.0),
            source: ManualProgressSource::new(),
        })
    }

    /// Pin length in scroll units.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Progress for `scroll_offset`, without publishing it.
    pub fn progress_at(&self, scroll_offset: f64) -> f64 {
        ((scroll_offset - self.start) / self.length).clamp(0.0, self.max_progress)
    }

    /// Publish the progress for `scroll_offset`. Non-finite offsets are ignored.
    pub fn scroll_to(&self, scroll_offset: f64) {
        if !scroll_offset.is_finite() {
            return;
        }
        self.source.publish(self.progress_at(scroll_offset));
    }

    /// The inner source listeners are registered on.
    pub fn source(&self) -> &ManualProgressSource {
        &self.source
    }
}

impl ProgressSource for ScrollPin {
    fn subscribe(&self, callback: ProgressCallback) -> SubscriptionHandle {
        self.source.subscribe(callback)
    }

    fn unsubscribe(&self, handle: SubscriptionHandle) {
        self.source.unsubscribe(handle);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/progress.rs"]
mod tests;
