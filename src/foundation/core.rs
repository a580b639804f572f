use crate::foundation::error::{ChoreoError, ChoreoResult};

pub use kurbo::Vec2;

/// Viewport dimensions in the render target's native length unit.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportSize {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl ViewportSize {
    /// Validated constructor; both extents must be finite and `> 0`.
    pub fn new(width: f64, height: f64) -> ChoreoResult<Self> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    /// Check that both extents are finite and positive.
    pub fn validate(self) -> ChoreoResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(ChoreoError::validation("viewport width/height must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ChoreoError::validation("viewport width/height must be > 0"));
        }
        Ok(())
    }
}

/// Coarse device classification, queried once at setup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// Narrow viewports (phones, small tablets).
    Compact,
    /// Everything at or above the breakpoint.
    #[default]
    Standard,
}

impl DeviceClass {
    /// Classify by viewport width: strictly below `breakpoint` is compact.
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Self::Compact
        } else {
            Self::Standard
        }
    }
}

/// Per-device pair of values, e.g. multipliers that differ for compact screens.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PerDevice<T> {
    /// Value for [`DeviceClass::Compact`].
    pub compact: T,
    /// Value for [`DeviceClass::Standard`].
    pub standard: T,
}

impl<T: Copy> PerDevice<T> {
    /// Pick the value for `class`.
    pub fn get(&self, class: DeviceClass) -> T {
        match class {
            DeviceClass::Compact => self.compact,
            DeviceClass::Standard => self.standard,
        }
    }
}

/// 3D placement of a single swarm element (or any element-like target).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementState {
    /// Horizontal offset from the element's resting position.
    pub x: f64,
    /// Vertical offset from the element's resting position.
    pub y: f64,
    /// Depth, positive towards the viewer.
    pub z: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl ElementState {
    /// Build a state from its four channels.
    pub fn new(x: f64, y: f64, z: f64, scale: f64) -> Self {
        Self { x, y, z, scale }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
