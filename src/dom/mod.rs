pub(crate) mod events;
pub(crate) mod kind;
pub(crate) mod node;
pub(crate) mod opts;
pub(crate) mod tasks;
pub(crate) mod tree;
