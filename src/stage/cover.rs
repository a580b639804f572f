use crate::{config::model::CoverConfig, foundation::math::ramp};

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Depth and scale of the full-bleed cover. Its x/y position stays at the origin.
pub struct CoverState {
    /// Depth, positive towards the viewer.
    pub z: f64,
    /// Uniform scale, at most 1.
    pub scale: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Full-bleed cover zooming in from behind the swarm.
pub struct CoverStage {
    /// Global progress where the reveal begins.
    pub start: f64,
    /// Rate applied to `progress - start`.
    pub rate: f64,
    /// Depth at zero local progress.
    pub start_depth: f64,
    /// Depth travelled per unit of local progress.
    pub depth_span: f64,
    /// Scale growth per unit of local progress.
    pub scale_rate: f64,
}

impl From<&CoverConfig> for CoverStage {
    fn from(cfg: &CoverConfig) -> Self {
        Self {
            start: cfg.start,
            rate: cfg.rate,
            start_depth: cfg.start_depth,
            depth_span: cfg.depth_span,
            scale_rate: cfg.scale_rate,
        }
    }
}

impl CoverStage {
    /// `max(0, (progress - start) * rate)`.
    pub fn local_progress(&self, progress: f64) -> f64 {
        ramp(progress, self.start, self.rate)
    }

    /// Depth keeps moving past zero once local progress exceeds 1; scale saturates at 1.
    pub fn compute(&self, progress: f64) -> CoverState {
        let local = self.local_progress(progress);
        CoverState {
            z: self.start_depth + self.depth_span * local,
            scale: (local * self.scale_rate).min(1.0),
        }
    }

    /// State applied at setup, before the first published frame.
    pub fn zero_state(&self) -> CoverState {
        CoverState {
            z: self.start_depth,
            scale: 0.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/cover.rs"]
mod tests;
