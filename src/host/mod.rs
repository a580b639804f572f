//! In-process host collaborators: a manually driven progress source, a scroll pin,
//! a fixed viewport, a whitespace segmenter, and recording render targets.

pub(crate) mod progress;
pub(crate) mod recording;
pub(crate) mod text;
pub(crate) mod viewport;
