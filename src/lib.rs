//! spotlyte is a scroll-progress driven animation choreography engine.
//!
//! A host pins a viewport region while the page scrolls and publishes a normalized
//! progress value once per frame. spotlyte turns that single scalar into presentation
//! state for a fixed set of targets, through four independent stages:
//!
//! - **Swarm**: staggered scatter-out of N elements from behind the viewer.
//! - **Cover**: a full-bleed cover zooming in over the swarm.
//! - **Container**: the pinned container shrinking and rounding its bottom corners.
//! - **Text**: the headline fading out word by word.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: [`ChoreoConfig`] (serde/JSON, defaults to the reference choreography)
//! 2. **Setup**: [`Engine::setup`] measures the viewport once and builds the
//!    [`ParameterTable`], segments the headline, applies initial states and subscribes.
//! 3. **Compose**: every published progress runs [`FrameComposer::compose`], which
//!    evaluates all stages from the same snapshot and pushes [`TargetState`]s to
//!    [`RenderTarget`]s.
//! 4. **Dispose**: [`Engine::dispose`] severs the subscription and drops targets.
//!
//! The design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure stages**: every output is a function of progress and static parameters, so
//!   redundant or regressing deliveries simply re-render the matching frame.
//! - **No IO**: the engine never scrolls, measures layout, or reads targets back; hosts
//!   provide those through [`ProgressSource`], [`ViewportProvider`] and [`TextSegmenter`].
//! - **Overshoot is kept**: swarm, cover depth and container windows are not clamped
//!   above; only the text fade clamps to `[0, 1]`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod compose;
mod config;
mod engine;
mod foundation;
mod host;
mod params;
mod stage;

pub use compose::composer::{Choreography, FrameComposer, FrameSnapshot};
pub use compose::sample::{SampleOpts, progress_range, sample_frames};
pub use compose::target::{RenderTarget, RenderTargets, TargetState};
pub use config::model::{
    ChoreoConfig, ContainerConfig, CoverConfig, PinConfig, REFERENCE_DIRECTIONS, SwarmConfig,
    TextConfig,
};
pub use engine::lifecycle::{Engine, EngineParts, EngineState};
pub use engine::ports::{
    ProgressCallback, ProgressSource, SubscriptionHandle, TextSegmenter, ViewportProvider,
};
pub use foundation::core::{DeviceClass, ElementState, PerDevice, Vec2, ViewportSize};
pub use foundation::error::{ChoreoError, ChoreoResult};
pub use foundation::math::{Lerp, clamp01, ramp, ramp_over};
pub use host::progress::{ManualProgressSource, ScrollPin};
pub use host::recording::RecordingTarget;
pub use host::text::WhitespaceSegmenter;
pub use host::viewport::FixedViewport;
pub use params::table::{ElementParams, ParameterTable};
pub use stage::container::{ContainerStage, ContainerState, TransformOrigin};
pub use stage::cover::{CoverStage, CoverState};
pub use stage::swarm::SwarmStage;
pub use stage::text::{TextStage, WordState};
