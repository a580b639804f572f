use std::{cell::RefCell, rc::Rc};

use crate::compose::target::{RenderTarget, TargetState};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Recorded {
    last: Option<TargetState>,
    applied: u64,
}

/// Render target that remembers the last state it received.
///
/// Clones share the same record, so a host can hand one clone to the engine and keep
/// another to inspect (headless previews, tests).
#[derive(Clone, Debug, Default)]
pub struct RecordingTarget {
    inner: Rc<RefCell<Recorded>>,
}

impl RecordingTarget {
    /// Target with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently applied state.
    pub fn last(&self) -> Option<TargetState> {
        self.inner.borrow().last
    }

    /// Number of `apply_state` calls received so far.
    pub fn applied(&self) -> u64 {
        self.inner.borrow().applied
    }

    /// A shared clone boxed for [`crate::RenderTargets`] or a segmenter.
    pub fn boxed(&self) -> Box<dyn RenderTarget> {
        Box::new(self.clone())
    }
}

impl RenderTarget for RecordingTarget {
    fn apply_state(&mut self, state: &TargetState) {
        let mut rec = self.inner.borrow_mut();
        rec.last = Some(*state);
        rec.applied += 1;
    }
}
