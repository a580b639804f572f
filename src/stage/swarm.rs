use crate::{
    config::model::SwarmConfig,
    foundation::core::{DeviceClass, ElementState},
    foundation::math::{Lerp, ramp},
    params::table::ElementParams,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Staggered scatter-out of the swarm elements.
///
/// Position and depth follow the delay-adjusted local progress, while scale grows
/// `scale_multiplier` times faster, so an element pops to full size before it arrives.
/// Neither channel is clamped above: past local progress 1 the blend keeps
/// extrapolating beyond the end state.
pub struct SwarmStage {
    /// Progress offset between consecutive elements.
    pub stagger_step: f64,
    /// Rate applied to delay-adjusted progress.
    pub rate: f64,
    /// Scale channel speed-up for the device class the stage was built for.
    pub scale_multiplier: f64,
}

impl SwarmStage {
    /// Resolve the per-device scale multiplier for `device`.
    pub fn new(cfg: &SwarmConfig, device: DeviceClass) -> Self {
        Self {
            stagger_step: cfg.stagger_step,
            rate: cfg.rate,
            scale_multiplier: cfg.scale_multiplier.get(device),
        }
    }

    /// Progress the element at `index` waits before moving.
    pub fn stagger_delay(&self, index: usize) -> f64 {
        index as f64 * self.stagger_step
    }

    /// `max(0, (progress - delay) * rate)`, unclamped above.
    pub fn local_progress(&self, progress: f64, index: usize) -> f64 {
        ramp(progress, self.stagger_delay(index), self.rate)
    }

    /// Element state at `progress`: x/y/z blended at local progress, scale at
    /// `local * scale_multiplier`.
    pub fn compute(&self, progress: f64, element: &ElementParams) -> ElementState {
        let local = self.local_progress(progress, element.index);
        let scale_local = local * self.scale_multiplier;

        let mut state = ElementState::lerp(&element.start, &element.end, local);
        state.scale = f64::lerp(&element.start.scale, &element.end.scale, scale_local);
        state
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/swarm.rs"]
mod tests;
