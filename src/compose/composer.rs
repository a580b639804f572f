use std::{cell::Cell, rc::Rc};

use crate::{
    compose::target::{RenderTarget, RenderTargets, TargetState},
    config::model::ChoreoConfig,
    foundation::core::{DeviceClass, ElementState, ViewportSize},
    foundation::error::{ChoreoError, ChoreoResult},
    params::table::ParameterTable,
    stage::{
        container::{ContainerStage, ContainerState},
        cover::{CoverStage, CoverState},
        swarm::SwarmStage,
        text::{TextStage, WordState},
    },
};

#[derive(Clone, Debug, serde::Serialize)]
/// Every target's state for one progress value.
pub struct FrameSnapshot {
    /// Progress the frame was evaluated at.
    pub progress: f64,
    /// Swarm element states, ordered by element index.
    pub elements: Vec<ElementState>,
    /// Cover state.
    pub cover: CoverState,
    /// Container state.
    pub container: ContainerState,
    /// Word opacities, ordered by word index.
    pub words: Vec<WordState>,
}

#[derive(Clone, Debug, serde::Serialize)]
/// The four stage interpolators plus the static tables they read.
///
/// Immutable after construction; safe to share across threads for sampling.
pub struct Choreography {
    /// Swarm scatter stage.
    pub swarm: SwarmStage,
    /// Cover reveal stage.
    pub cover: CoverStage,
    /// Container deform stage.
    pub container: ContainerStage,
    /// Headline fade stage.
    pub text: TextStage,
    table: ParameterTable,
    word_count: usize,
}

impl Choreography {
    /// Validate `cfg` and build the parameter table for `viewport` and `device`.
    pub fn new(
        cfg: &ChoreoConfig,
        viewport: ViewportSize,
        device: DeviceClass,
        word_count: usize,
    ) -> ChoreoResult<Self> {
        cfg.validate()?;
        let table = ParameterTable::build(cfg, viewport, device)?;
        Ok(Self {
            swarm: SwarmStage::new(&cfg.swarm, device),
            cover: CoverStage::from(&cfg.cover),
            container: ContainerStage::from(&cfg.container),
            text: TextStage::from(&cfg.text),
            table,
            word_count,
        })
    }

    /// Static per-element parameters.
    pub fn table(&self) -> &ParameterTable {
        &self.table
    }

    /// Number of headline words the text stage drives.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Evaluate every stage at `progress` without touching any render target.
    pub fn snapshot(&self, progress: f64) -> FrameSnapshot {
        FrameSnapshot {
            progress,
            elements: self
                .table
                .elements()
                .iter()
                .map(|e| self.swarm.compute(progress, e))
                .collect(),
            cover: self.cover.compute(progress),
            container: self.container.compute(progress),
            words: (0..self.word_count)
                .map(|i| self.text.compute(progress, i))
                .collect(),
        }
    }
}

/// Applies a [`Choreography`] to render targets once per published progress value.
pub struct FrameComposer {
    choreo: Choreography,
    targets: RenderTargets,
    words: Vec<Box<dyn RenderTarget>>,
    live: Rc<Cell<bool>>,
}

impl FrameComposer {
    /// Bind `choreo` to its targets. Element and word target counts must match the
    /// choreography's table and word count.
    pub fn new(
        choreo: Choreography,
        targets: RenderTargets,
        words: Vec<Box<dyn RenderTarget>>,
    ) -> ChoreoResult<Self> {
        if targets.elements.len() != choreo.table.len() {
            return Err(ChoreoError::validation(format!(
                "expected {} element render targets, got {}",
                choreo.table.len(),
                targets.elements.len()
            )));
        }
        if words.len() != choreo.word_count {
            return Err(ChoreoError::validation(format!(
                "expected {} word render targets, got {}",
                choreo.word_count,
                words.len()
            )));
        }
        Ok(Self {
            choreo,
            targets,
            words,
            live: Rc::new(Cell::new(true)),
        })
    }

    /// The evaluated stages and static tables.
    pub fn choreography(&self) -> &Choreography {
        &self.choreo
    }

    /// Shared switch checked before every target write. Clearing it stops the frame
    /// in flight and every later one.
    pub(crate) fn live_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.live)
    }

    /// Put every target in its pre-scroll state: elements at start, cover at its zero
    /// state, words fully visible. The container is left as the host laid it out.
    pub fn apply_initial(&mut self) {
        let c = &self.choreo;
        for (params, target) in c.table.elements().iter().zip(&mut self.targets.elements) {
            target.apply_state(&TargetState::Element(params.start));
        }
        self.targets
            .cover
            .apply_state(&TargetState::Cover(c.cover.zero_state()));
        for word in &mut self.words {
            word.apply_state(&TargetState::Word(WordState::VISIBLE));
        }
    }

    /// Evaluate all four stages from the same `progress` and push the results.
    ///
    /// Non-finite progress is dropped: no target is touched for that delivery. Once the
    /// live flag is cleared, remaining writes of the frame are skipped.
    pub fn compose(&mut self, progress: f64) {
        if !progress.is_finite() {
            tracing::warn!(progress, "ignoring non-finite progress");
            return;
        }
        tracing::trace!(progress, "compose frame");

        let c = &self.choreo;
        let live = &self.live;
        for (params, target) in c.table.elements().iter().zip(&mut self.targets.elements) {
            if !live.get() {
                return;
            }
            let state = c.swarm.compute(progress, params);
            target.apply_state(&TargetState::Element(state));
        }

        if !live.get() {
            return;
        }
        self.targets
            .cover
            .apply_state(&TargetState::Cover(c.cover.compute(progress)));
        if !live.get() {
            return;
        }
        self.targets
            .container
            .apply_state(&TargetState::Container(c.container.compute(progress)));

        for (i, word) in self.words.iter_mut().enumerate() {
            if !live.get() {
                return;
            }
            word.apply_state(&TargetState::Word(c.text.compute(progress, i)));
        }
    }
}

impl std::fmt::Debug for FrameComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameComposer")
            .field("elements", &self.targets.elements.len())
            .field("words", &self.words.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composer.rs"]
mod tests;
