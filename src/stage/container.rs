use crate::{config::model::ContainerConfig, foundation::math::ramp_over};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Pivot for the container scale.
pub enum TransformOrigin {
    /// Top edge, horizontally centered.
    #[default]
    TopCenter,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Uniform scale plus the radius shared by both bottom corners.
pub struct ContainerState {
    /// Uniform scale about `origin`.
    pub scale: f64,
    /// Radius of both bottom corners.
    pub bottom_radius: f64,
    /// Pivot the scale is applied around.
    pub origin: TransformOrigin,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Shrinks the pinned container and rounds its bottom corners near the end of the pin.
///
/// Both windows are floored at zero but open above: with overscrolled progress the
/// container keeps shrinking and rounding.
pub struct ContainerStage {
    /// See [`ContainerConfig::scale_start`].
    pub scale_start: f64,
    /// See [`ContainerConfig::scale_span`].
    pub scale_span: f64,
    /// See [`ContainerConfig::max_shrink`].
    pub max_shrink: f64,
    /// See [`ContainerConfig::radius_start`].
    pub radius_start: f64,
    /// See [`ContainerConfig::radius_span`].
    pub radius_span: f64,
    /// See [`ContainerConfig::max_radius`].
    pub max_radius: f64,
}

impl From<&ContainerConfig> for ContainerStage {
    fn from(cfg: &ContainerConfig) -> Self {
        Self {
            scale_start: cfg.scale_start,
            scale_span: cfg.scale_span,
            max_shrink: cfg.max_shrink,
            radius_start: cfg.radius_start,
            radius_span: cfg.radius_span,
            max_radius: cfg.max_radius,
        }
    }
}

impl ContainerStage {
    /// `scale = 1 - shrink * max_shrink`, `bottom_radius = round * max_radius`.
    pub fn compute(&self, progress: f64) -> ContainerState {
        let shrink = ramp_over(progress, self.scale_start, self.scale_span);
        let round = ramp_over(progress, self.radius_start, self.radius_span);
        ContainerState {
            scale: 1.0 - shrink * self.max_shrink,
            bottom_radius: round * self.max_radius,
            origin: TransformOrigin::TopCenter,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/container.rs"]
mod tests;
