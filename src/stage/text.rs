use crate::{config::model::TextConfig, foundation::math::clamp01};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Opacity of one headline word.
pub struct WordState {
    /// In `[0, 1]`.
    pub opacity: f64,
}

impl WordState {
    /// Fully visible; applied to every word at setup.
    pub const VISIBLE: Self = Self { opacity: 1.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Word-by-word fade-out of the headline.
///
/// The only stage whose local progress is clamped on both ends, so opacity always
/// stays in `[0, 1]`.
pub struct TextStage {
    /// Global progress where the first word starts fading.
    pub start: f64,
    /// Fade duration per word.
    pub span: f64,
    /// Progress offset between consecutive words.
    pub word_stagger: f64,
}

impl From<&TextConfig> for TextStage {
    fn from(cfg: &TextConfig) -> Self {
        Self {
            start: cfg.start,
            span: cfg.span,
            word_stagger: cfg.word_stagger,
        }
    }
}

impl TextStage {
    /// Fade progress of word `word_index`, clamped to `[0, 1]`.
    pub fn local_progress(&self, progress: f64, word_index: usize) -> f64 {
        let delay = word_index as f64 * self.word_stagger;
        clamp01((progress - (self.start + delay)) / self.span)
    }

    /// `opacity = 1 - local_progress`.
    pub fn compute(&self, progress: f64, word_index: usize) -> WordState {
        WordState {
            opacity: 1.0 - self.local_progress(progress, word_index),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/text.rs"]
mod tests;
