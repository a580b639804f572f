use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::{
    core::{PerDevice, Vec2},
    error::{ChoreoError, ChoreoResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Constructor-time configuration for a choreography engine.
///
/// Every field defaults to the reference spotlight choreography, so an empty JSON object
/// (`{}`) is a valid configuration. Use [`ChoreoConfig::validate`] (or
/// [`crate::Engine::new`], which calls it) before evaluating frames.
pub struct ChoreoConfig {
    /// Number of swarm elements; must not exceed the direction table length.
    pub element_count: usize,
    /// Source text handed to the text segmenter at setup.
    pub headline: String,
    /// Viewport width below which the device is classified as compact.
    pub compact_breakpoint: f64,
    /// Swarm stage parameters.
    pub swarm: SwarmConfig,
    /// Cover reveal stage parameters.
    pub cover: CoverConfig,
    /// Container deform stage parameters.
    pub container: ContainerConfig,
    /// Text fade stage parameters.
    pub text: TextConfig,
    /// Pin region used by scroll-driven progress sources.
    pub pin: PinConfig,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Swarm (scatter-out) parameters.
pub struct SwarmConfig {
    /// Progress offset between consecutive elements.
    pub stagger_step: f64,
    /// Rate applied to delay-adjusted progress for position and depth.
    pub rate: f64,
    /// Depth every element starts at.
    pub start_depth: f64,
    /// Depth every element ends at.
    pub end_depth: f64,
    /// Extra growth rate for the scale channel.
    pub scale_multiplier: PerDevice<f64>,
    /// Multiplier applied to `direction * viewport` to get the end offset.
    pub scatter_multiplier: PerDevice<f64>,
    /// Scatter direction per element, indexed by element index.
    pub directions: Vec<Vec2>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Full-bleed cover reveal parameters.
pub struct CoverConfig {
    /// Global progress where the reveal begins.
    pub start: f64,
    /// Rate applied to `progress - start`.
    pub rate: f64,
    /// Depth of the cover at zero local progress.
    pub start_depth: f64,
    /// Depth travelled per unit of local progress.
    pub depth_span: f64,
    /// Rate of the (clamped) scale channel relative to local progress.
    pub scale_rate: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Container scale and bottom-corner radius parameters.
pub struct ContainerConfig {
    /// Global progress where the shrink begins.
    pub scale_start: f64,
    /// Progress window over which the shrink reaches `max_shrink`.
    pub scale_span: f64,
    /// Fractional shrink reached at the end of the window.
    pub max_shrink: f64,
    /// Global progress where the corner rounding begins.
    pub radius_start: f64,
    /// Progress window over which the radius reaches `max_radius`.
    pub radius_span: f64,
    /// Radius reached at the end of the window.
    pub max_radius: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Staggered per-word fade parameters.
pub struct TextConfig {
    /// Global progress where the first word starts fading.
    pub start: f64,
    /// Fade duration per word, in progress units.
    pub span: f64,
    /// Progress offset between consecutive words.
    pub word_stagger: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Pinned scroll region geometry.
pub struct PinConfig {
    /// Pin length as a multiple of the viewport height.
    pub length_viewports: f64,
    /// How far past 1.0 the published progress may run.
    pub overscroll: f64,
}

/// Hand-tuned scatter directions of the reference choreography.
pub const REFERENCE_DIRECTIONS: [(f64, f64); 20] = [
    (1.3, 0.7),
    (-1.5, 1.0),
    (1.1, -1.3),
    (-1.7, -0.8),
    (0.8, 1.5),
    (-1.0, -1.4),
    (1.6, 0.3),
    (-0.7, 1.7),
    (1.2, -1.6),
    (-1.4, 0.9),
    (1.8, -0.5),
    (-1.1, -1.8),
    (0.9, 1.8),
    (-1.9, 0.4),
    (1.0, -1.9),
    (-0.8, 1.9),
    (1.7, -1.0),
    (-1.3, -1.2),
    (0.7, 2.0),
    (1.25, -0.2),
];

impl Default for ChoreoConfig {
    fn default() -> Self {
        Self {
            element_count: REFERENCE_DIRECTIONS.len(),
            headline: "AV SPECIALIST AND VIDEOGRAPHER".to_string(),
            compact_breakpoint: 1000.0,
            swarm: SwarmConfig::default(),
            cover: CoverConfig::default(),
            container: ContainerConfig::default(),
            text: TextConfig::default(),
            pin: PinConfig::default(),
        }
    }
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            stagger_step: 0.03,
            rate: 4.0,
            start_depth: -1000.0,
            end_depth: 2000.0,
            scale_multiplier: PerDevice {
                compact: 4.0,
                standard: 2.0,
            },
            scatter_multiplier: PerDevice {
                compact: 2.5,
                standard: 0.5,
            },
            directions: REFERENCE_DIRECTIONS
                .iter()
                .map(|&(x, y)| Vec2::new(x, y))
                .collect(),
        }
    }
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            start: 0.7,
            rate: 4.0,
            start_depth: -1000.0,
            depth_span: 1000.0,
            scale_rate: 2.0,
        }
    }
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            scale_start: 0.9,
            scale_span: 0.15,
            max_shrink: 0.1,
            radius_start: 0.8,
            radius_span: 0.4,
            max_radius: 50.0,
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            start: 0.55,
            span: 0.15,
            word_stagger: 0.05,
        }
    }
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            length_viewports: 10.0,
            overscroll: 0.05,
        }
    }
}

impl ChoreoConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ChoreoResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ChoreoError::serde(format!("parse choreography config JSON: {e}")))
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(s: &str) -> ChoreoResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| ChoreoError::serde(format!("parse choreography config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> ChoreoResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ChoreoError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check internal consistency of every stage's parameters.
    pub fn validate(&self) -> ChoreoResult<()> {
        if self.element_count == 0 {
            return Err(ChoreoError::validation("element_count must be > 0"));
        }
        if self.element_count > self.swarm.directions.len() {
            return Err(ChoreoError::validation(format!(
                "element_count {} exceeds the {} configured scatter directions",
                self.element_count,
                self.swarm.directions.len()
            )));
        }
        for (i, d) in self.swarm.directions.iter().enumerate() {
            if !d.x.is_finite() || !d.y.is_finite() {
                return Err(ChoreoError::validation(format!(
                    "swarm.directions[{i}] must be finite"
                )));
            }
        }

        finite("compact_breakpoint", self.compact_breakpoint)?;
        non_negative("swarm.stagger_step", self.swarm.stagger_step)?;
        positive("swarm.rate", self.swarm.rate)?;
        finite("swarm.start_depth", self.swarm.start_depth)?;
        finite("swarm.end_depth", self.swarm.end_depth)?;
        positive("swarm.scale_multiplier.compact", self.swarm.scale_multiplier.compact)?;
        positive(
            "swarm.scale_multiplier.standard",
            self.swarm.scale_multiplier.standard,
        )?;
        finite(
            "swarm.scatter_multiplier.compact",
            self.swarm.scatter_multiplier.compact,
        )?;
        finite(
            "swarm.scatter_multiplier.standard",
            self.swarm.scatter_multiplier.standard,
        )?;

        finite("cover.start", self.cover.start)?;
        positive("cover.rate", self.cover.rate)?;
        finite("cover.start_depth", self.cover.start_depth)?;
        finite("cover.depth_span", self.cover.depth_span)?;
        positive("cover.scale_rate", self.cover.scale_rate)?;

        finite("container.scale_start", self.container.scale_start)?;
        positive("container.scale_span", self.container.scale_span)?;
        finite("container.max_shrink", self.container.max_shrink)?;
        finite("container.radius_start", self.container.radius_start)?;
        positive("container.radius_span", self.container.radius_span)?;
        non_negative("container.max_radius", self.container.max_radius)?;

        finite("text.start", self.text.start)?;
        positive("text.span", self.text.span)?;
        non_negative("text.word_stagger", self.text.word_stagger)?;

        positive("pin.length_viewports", self.pin.length_viewports)?;
        non_negative("pin.overscroll", self.pin.overscroll)?;
        Ok(())
    }
}

fn finite(name: &str, v: f64) -> ChoreoResult<()> {
    if !v.is_finite() {
        return Err(ChoreoError::validation(format!("{name} must be finite")));
    }
    Ok(())
}

fn positive(name: &str, v: f64) -> ChoreoResult<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(ChoreoError::validation(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

fn non_negative(name: &str, v: f64) -> ChoreoResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(ChoreoError::validation(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
