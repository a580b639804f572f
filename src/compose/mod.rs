pub(crate) mod composer;
pub(crate) mod sample;
pub(crate) mod target;
