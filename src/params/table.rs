use crate::{
    config::model::ChoreoConfig,
    foundation::core::{DeviceClass, ElementState, Vec2, ViewportSize},
    foundation::error::{ChoreoError, ChoreoResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Static parameters of one swarm element.
pub struct ElementParams {
    /// Stable 0-based ordinal; drives stagger delay and scatter direction.
    pub index: usize,
    /// State at zero local progress.
    pub start: ElementState,
    /// State at unit local progress.
    pub end: ElementState,
    /// Scatter direction the end state was derived from.
    pub direction: Vec2,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Per-element start/end states, built once at setup from viewport geometry.
///
/// The table is never recomputed while an engine is active; a resized viewport keeps
/// the scatter extents measured at setup.
pub struct ParameterTable {
    viewport: ViewportSize,
    device: DeviceClass,
    elements: Vec<ElementParams>,
}

impl ParameterTable {
    /// Build the table for `cfg.element_count` elements.
    pub fn build(
        cfg: &ChoreoConfig,
        viewport: ViewportSize,
        device: DeviceClass,
    ) -> ChoreoResult<Self> {
        viewport.validate()?;
        if cfg.element_count > cfg.swarm.directions.len() {
            return Err(ChoreoError::validation(format!(
                "element_count {} exceeds the {} configured scatter directions",
                cfg.element_count,
                cfg.swarm.directions.len()
            )));
        }

        let scatter = cfg.swarm.scatter_multiplier.get(device);
        let start = ElementState::new(0.0, 0.0, cfg.swarm.start_depth, 0.0);
        let elements = cfg.swarm.directions[..cfg.element_count]
            .iter()
            .enumerate()
            .map(|(index, &direction)| ElementParams {
                index,
                start,
                end: ElementState::new(
                    direction.x * viewport.width * scatter,
                    direction.y * viewport.height * scatter,
                    cfg.swarm.end_depth,
                    1.0,
                ),
                direction,
            })
            .collect();

        Ok(Self {
            viewport,
            device,
            elements,
        })
    }

    /// Viewport measured at setup.
    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Device class reported at setup.
    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// Element parameters, ordered by element index.
    pub fn elements(&self) -> &[ElementParams] {
        &self.elements
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// `true` when the table holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/table.rs"]
mod tests;
