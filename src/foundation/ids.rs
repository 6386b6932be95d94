use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Identity assigned to a node by the document builder.
pub struct NodeId(pub i32);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Page that owns a node; event markers are scoped by it.
pub struct PageId(pub i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Non-owning reference to a node stored in a [`crate::DomTree`].
///
/// The generation makes a handle to a destroyed node resolve to nothing, even
/// after its slot has been reused.
pub struct NodeHandle {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Position of a component inside a node's composition.
pub enum ComponentSlot {
    /// The stable root handed to the renderer.
    Root,
    /// A wrapper of the given kind.
    Wrapper(crate::compose::component::WrapperKind),
    /// The node-kind specific leaf.
    Leaf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Stable identity of a component: each slot exists at most once per node.
pub struct ComponentId {
    /// Owning node.
    pub node: NodeId,
    /// Slot inside that node.
    pub slot: ComponentSlot,
}

impl ComponentId {
    pub(crate) const fn new(node: NodeId, slot: ComponentSlot) -> Self {
        Self { node, slot }
    }
}
