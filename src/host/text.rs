use std::{cell::RefCell, rc::Rc};

use crate::{
    compose::target::RenderTarget, engine::ports::TextSegmenter, host::recording::RecordingTarget,
};

/// Segments on Unicode whitespace and backs each word with a [`RecordingTarget`].
///
/// Clones share the produced words, so the host can inspect them after handing the
/// segmenter to an engine.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceSegmenter {
    words: Rc<RefCell<Vec<(String, RecordingTarget)>>>,
}

impl WhitespaceSegmenter {
    /// Segmenter with no words yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Words from the most recent `segment` call, in reading order.
    pub fn words(&self) -> Vec<(String, RecordingTarget)> {
        self.words.borrow().clone()
    }
}

impl TextSegmenter for WhitespaceSegmenter {
    fn segment(&mut self, source: &str) -> Vec<Box<dyn RenderTarget>> {
        let words: Vec<(String, RecordingTarget)> = source
            .split_whitespace()
            .map(|w| (w.to_string(), RecordingTarget::new()))
            .collect();
        let targets = words.iter().map(|(_, t)| t.boxed()).collect();
        *self.words.borrow_mut() = words;
        targets
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/text.rs"]
mod tests;
