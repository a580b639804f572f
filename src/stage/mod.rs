pub(crate) mod container;
pub(crate) mod cover;
pub(crate) mod swarm;
pub(crate) mod text;
