use crate::{
    foundation::core::ElementState,
    stage::{container::ContainerState, cover::CoverState, text::WordState},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Presentation update handed to a [`RenderTarget`].
pub enum TargetState {
    /// Swarm element placement.
    Element(ElementState),
    /// Cover depth/scale; x/y stay at the origin.
    Cover(CoverState),
    /// Container scale and bottom-corner radius.
    Container(ContainerState),
    /// Headline word opacity.
    Word(WordState),
}

/// Host-side presentation surface (DOM node, canvas layer, native view, test double).
///
/// Updates are last-write-wins and idempotent. The engine never reads a target back.
pub trait RenderTarget {
    /// Replace the target's presentation with `state`.
    fn apply_state(&mut self, state: &TargetState);
}

impl<F> RenderTarget for F
where
    F: FnMut(&TargetState),
{
    fn apply_state(&mut self, state: &TargetState) {
        self(state)
    }
}

/// Targets that exist independently of text segmentation.
pub struct RenderTargets {
    /// One target per swarm element, ordered by element index.
    pub elements: Vec<Box<dyn RenderTarget>>,
    /// Full-bleed cover.
    pub cover: Box<dyn RenderTarget>,
    /// Pinned container.
    pub container: Box<dyn RenderTarget>,
}

impl std::fmt::Debug for RenderTargets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderTargets")
            .field("elements", &self.elements.len())
            .finish_non_exhaustive()
    }
}
