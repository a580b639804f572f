use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::{
    compose::{
        composer::{Choreography, FrameComposer, FrameSnapshot},
        target::RenderTargets,
    },
    config::model::ChoreoConfig,
    engine::ports::{ProgressSource, SubscriptionHandle, TextSegmenter, ViewportProvider},
    foundation::error::{ChoreoError, ChoreoResult},
};

/// Lifecycle of an [`Engine`]. Transitions only move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    /// Constructed; collaborators held, nothing subscribed.
    Uninitialized,
    /// Subscribed and composing frames.
    Active,
    /// Unsubscribed and released. Terminal.
    Disposed,
}

/// Host collaborators injected at construction.
pub struct EngineParts {
    /// Source of per-frame progress values.
    pub progress: Rc<dyn ProgressSource>,
    /// Measured once at setup.
    pub viewport: Box<dyn ViewportProvider>,
    /// Splits the headline into word targets at setup.
    pub segmenter: Box<dyn TextSegmenter>,
    /// Element, cover and container targets.
    pub targets: RenderTargets,
}

struct Pending {
    viewport: Box<dyn ViewportProvider>,
    segmenter: Box<dyn TextSegmenter>,
    targets: RenderTargets,
}

struct Active {
    composer: Rc<RefCell<FrameComposer>>,
    live: Rc<Cell<bool>>,
    subscription: SubscriptionHandle,
}

/// Scroll choreography engine bound to one progress source.
///
/// ```text
/// Uninitialized --setup()--> Active --dispose()--> Disposed
/// ```
///
/// `setup` measures the viewport and segments the headline once, puts every target in
/// its initial state and subscribes. Each published progress value is composed into
/// all targets synchronously inside the source's callback. `dispose` severs the
/// subscription and drops the targets; it is safe from any state and on repeat calls.
pub struct Engine {
    config: ChoreoConfig,
    state: EngineState,
    progress: Rc<dyn ProgressSource>,
    pending: Option<Pending>,
    active: Option<Active>,
}

impl Engine {
    /// Validate `config` and hold on to the collaborators until [`Engine::setup`].
    pub fn new(config: ChoreoConfig, parts: EngineParts) -> ChoreoResult<Self> {
        config.validate()?;
        let EngineParts {
            progress,
            viewport,
            segmenter,
            targets,
        } = parts;
        Ok(Self {
            config,
            state: EngineState::Uninitialized,
            progress,
            pending: Some(Pending {
                viewport,
                segmenter,
                targets,
            }),
            active: None,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Configuration the engine was built with.
    pub fn config(&self) -> &ChoreoConfig {
        &self.config
    }

    /// Build the static tables, apply initial target states and subscribe.
    ///
    /// Fails with [`ChoreoError::Lifecycle`] unless the engine is uninitialized. A setup
    /// that fails on host data (viewport, target counts) releases the collaborators and
    /// leaves the engine disposed.
    #[tracing::instrument(skip(self))]
    pub fn setup(&mut self) -> ChoreoResult<()> {
        match self.state {
            EngineState::Uninitialized => {}
            EngineState::Active => {
                return Err(ChoreoError::lifecycle("setup called on an active engine"));
            }
            EngineState::Disposed => {
                return Err(ChoreoError::lifecycle("setup called on a disposed engine"));
            }
        }
        let Some(pending) = self.pending.take() else {
            return Err(ChoreoError::lifecycle("engine collaborators already consumed"));
        };

        let composer = match Self::build_composer(&self.config, pending) {
            Ok(c) => c,
            Err(e) => {
                self.state = EngineState::Disposed;
                return Err(e);
            }
        };
        let live = composer.live_flag();
        let composer = Rc::new(RefCell::new(composer));

        let weak = Rc::downgrade(&composer);
        let subscription = self.progress.subscribe(Box::new(move |progress| {
            let Some(composer) = weak.upgrade() else {
                return;
            };
            match composer.try_borrow_mut() {
                Ok(mut c) => c.compose(progress),
                Err(_) => tracing::warn!(progress, "dropping re-entrant progress delivery"),
            }
        }));

        self.active = Some(Active {
            composer,
            live,
            subscription,
        });
        self.state = EngineState::Active;
        tracing::debug!(?subscription, "engine active");
        Ok(())
    }

    fn build_composer(cfg: &ChoreoConfig, pending: Pending) -> ChoreoResult<FrameComposer> {
        let Pending {
            viewport,
            mut segmenter,
            targets,
        } = pending;

        let size = viewport.viewport_size();
        let device = viewport.device_class();
        let words = segmenter.segment(&cfg.headline);
        tracing::debug!(
            width = size.width,
            height = size.height,
            ?device,
            words = words.len(),
            "measured host"
        );

        let choreo = Choreography::new(cfg, size, device, words.len())?;
        let mut composer = FrameComposer::new(choreo, targets, words)?;
        composer.apply_initial();
        Ok(composer)
    }

    /// Evaluate a frame without pushing it to targets. `None` unless active.
    pub fn snapshot(&self, progress: f64) -> Option<FrameSnapshot> {
        let active = self.active.as_ref()?;
        let composer = active.composer.try_borrow().ok()?;
        Some(composer.choreography().snapshot(progress))
    }

    /// Unsubscribe and release targets and tables. No-op unless active.
    ///
    /// Called from inside a target's `apply_state`, the rest of the frame in flight is
    /// skipped as well.
    pub fn dispose(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        active.live.set(false);
        self.progress.unsubscribe(active.subscription);
        drop(active.composer);
        self.state = EngineState::Disposed;
        tracing::debug!(subscription = ?active.subscription, "engine disposed");
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/lifecycle.rs"]
mod tests;
