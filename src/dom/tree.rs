use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::animation::builder::KeyframeMap;
use crate::compose::chain::{ChainSnapshot, FLEX_PARENT_TAGS, FlexParent};
use crate::compose::component::{RootComponent, UpdateType};
use crate::dom::events::{EventDispatcher, EventMarker};
use crate::dom::kind::{NodeKind, kind_for_tag};
use crate::dom::node::{DomNode, NodeCtx, TransitionDirection};
use crate::dom::opts::TreeOpts;
use crate::dom::tasks::{UiTask, UiTaskQueue};
use crate::foundation::arena::Arena;
use crate::foundation::core::{Dimension, DimensionOffset, DimensionUnit};
use crate::foundation::error::{DomError, DomResult};
use crate::foundation::ids::{NodeHandle, NodeId, PageId};
use crate::style::props::{Display, PositionType};
use crate::style::theme::ThemeStore;
use crate::style::value::ValueParser;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Interaction signal raised by the input pipeline.
pub enum Interaction {
    /// Pressed or released.
    Active(bool),
    /// Focus gained or lost.
    Focus(bool),
    /// Checked or unchecked.
    Checked(bool),
    /// Disabled or enabled.
    Disabled(bool),
    /// Waiting started or finished.
    Waiting(bool),
}

/// Arena-owned DOM nodes plus the UI task queue that resolves interaction
/// signals.
pub struct DomTree {
    nodes: Arena<DomNode>,
    ids: BTreeMap<NodeId, NodeHandle>,
    root: Option<NodeHandle>,
    tasks: Option<UiTaskQueue>,
    theme: Option<Arc<dyn ThemeStore>>,
    dispatcher: Option<Arc<dyn EventDispatcher>>,
    opts: TreeOpts,
}

impl std::fmt::Debug for DomTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomTree")
            .field("nodes", &self.nodes.len())
            .field("root", &self.root)
            .field("pending_tasks", &self.pending_tasks())
            .field("opts", &self.opts)
            .finish()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new(TreeOpts::default())
    }
}

macro_rules! with_node {
    ($tree:expr, $handle:expr, |$node:ident, $ctx:ident| $body:expr) => {{
        let $ctx = NodeCtx {
            parser: ValueParser::new($tree.theme.as_deref()),
            opts: $tree.opts,
        };
        let $node = $tree
            .nodes
            .get_mut($handle)
            .ok_or_else(|| DomError::validation(format!("stale node handle {:?}", $handle)))?;
        $body
    }};
}

impl DomTree {
    /// Empty tree.
    pub fn new(opts: TreeOpts) -> Self {
        Self {
            nodes: Arena::default(),
            ids: BTreeMap::new(),
            root: None,
            tasks: opts.deferred_tasks.then(UiTaskQueue::default),
            theme: None,
            dispatcher: None,
            opts,
        }
    }

    /// Resolve symbolic values through `theme`.
    pub fn with_theme(mut self, theme: Arc<dyn ThemeStore>) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Register event markers with `dispatcher`.
    pub fn with_dispatcher(mut self, dispatcher: Arc<dyn EventDispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Tree configuration.
    pub fn opts(&self) -> &TreeOpts {
        &self.opts
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// No live nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Create a node with the built-in kind for `tag`.
    pub fn create_node(&mut self, id: NodeId, tag: &str) -> DomResult<NodeHandle> {
        self.create_node_with_kind(id, tag, kind_for_tag(tag))
    }

    /// Create a node with a caller supplied kind.
    #[tracing::instrument(skip(self, kind))]
    pub fn create_node_with_kind(
        &mut self,
        id: NodeId,
        tag: &str,
        kind: Box<dyn NodeKind>,
    ) -> DomResult<NodeHandle> {
        if self.ids.contains_key(&id) {
            return Err(DomError::validation(format!("node {} already exists", id.0)));
        }
        let handle = self.nodes.insert(DomNode::new(id, tag, kind));
        self.ids.insert(id, handle);
        Ok(handle)
    }

    /// Handle of the live node with `id`.
    pub fn find(&self, id: NodeId) -> Option<NodeHandle> {
        self.ids.get(&id).copied()
    }

    /// Live node behind `handle`.
    pub fn node(&self, handle: NodeHandle) -> Option<&DomNode> {
        self.nodes.get(handle)
    }

    /// Document root, once set.
    pub fn root(&self) -> Option<NodeHandle> {
        self.root
    }

    /// Root component of `handle`.
    pub fn root_component(&self, handle: NodeHandle) -> Option<&RootComponent> {
        Some(self.nodes.get(handle)?.composition().root())
    }

    /// Chain view of `handle`.
    pub fn chain_snapshot(&self, handle: NodeHandle) -> Option<ChainSnapshot> {
        Some(self.nodes.get(handle)?.composition().snapshot())
    }

    /// Consume the pending root update of `handle`.
    pub fn take_root_update(&mut self, handle: NodeHandle) -> Option<UpdateType> {
        let root = self.nodes.get_mut(handle)?.composition_mut().root_mut();
        if !root.needs_update {
            return None;
        }
        root.needs_update = false;
        Some(root.update_type)
    }

    /// Make `handle` the document root and compose it.
    #[tracing::instrument(skip(self))]
    pub fn set_root(&mut self, handle: NodeHandle) -> DomResult<()> {
        with_node!(self, handle, |node, ctx| {
            node.is_root = true;
            node.mounted = true;
            node.generate_component_node(UpdateType::All, &ctx);
        });
        self.root = Some(handle);
        Ok(())
    }

    /// Apply attributes in order. Mounted nodes are recomposed.
    #[tracing::instrument(skip(self, attrs), fields(count = attrs.len()))]
    pub fn set_attrs<K: AsRef<str>, V: AsRef<str>>(
        &mut self,
        handle: NodeHandle,
        attrs: &[(K, V)],
    ) -> DomResult<()> {
        with_node!(self, handle, |node, ctx| {
            node.set_attrs(attrs, &ctx);
            if node.mounted {
                node.generate_component_node(UpdateType::All, &ctx);
            }
        });
        Ok(())
    }

    /// Apply styles in order; pseudo-class keys are only cached.
    #[tracing::instrument(skip(self, styles), fields(count = styles.len()))]
    pub fn set_styles<K: AsRef<str>, V: AsRef<str>>(
        &mut self,
        handle: NodeHandle,
        styles: &[(K, V)],
    ) -> DomResult<()> {
        with_node!(self, handle, |node, ctx| {
            node.set_styles(styles, &ctx);
            if node.mounted {
                node.generate_component_node(UpdateType::Style, &ctx);
            }
        });
        Ok(())
    }

    /// Bind events and register their markers with the dispatcher.
    #[tracing::instrument(skip(self, names))]
    pub fn add_events<S: AsRef<str>>(
        &mut self,
        handle: NodeHandle,
        page: PageId,
        names: &[S],
    ) -> DomResult<Vec<EventMarker>> {
        let changes = with_node!(self, handle, |node, ctx| {
            let changes = node.add_events(page, names);
            if node.mounted {
                node.generate_component_node(UpdateType::All, &ctx);
            }
            changes
        });
        if let Some(dispatcher) = &self.dispatcher {
            for marker in &changes.replaced {
                dispatcher.release(marker);
            }
            for marker in &changes.bound {
                dispatcher.register(marker);
            }
        }
        Ok(changes.bound)
    }

    /// Build the keyframe animation. Returns `false` when nothing was built.
    #[tracing::instrument(skip(self, frames))]
    pub fn set_animation_style(
        &mut self,
        handle: NodeHandle,
        frames: &[KeyframeMap],
    ) -> DomResult<bool> {
        Ok(with_node!(self, handle, |node, ctx| {
            let built = node.set_animation_style(frames, &ctx);
            if built && node.mounted {
                node.compose(UpdateType::All, &ctx);
            }
            built
        }))
    }

    /// Build a page enter or exit transition.
    #[tracing::instrument(skip(self, frames))]
    pub fn set_transition_style(
        &mut self,
        handle: NodeHandle,
        direction: TransitionDirection,
        frames: &[KeyframeMap],
    ) -> DomResult<bool> {
        Ok(with_node!(self, handle, |node, ctx| {
            let built = node.set_transition_style(frames, direction, &ctx);
            if node.mounted {
                node.compose(UpdateType::All, &ctx);
            }
            built
        }))
    }

    /// Build the shared transition tracks.
    #[tracing::instrument(skip(self, frames))]
    pub fn set_shared_transition_style(
        &mut self,
        handle: NodeHandle,
        frames: &[KeyframeMap],
    ) -> DomResult<bool> {
        Ok(with_node!(self, handle, |node, ctx| {
            let built = node.set_shared_transition_style(frames, &ctx);
            if node.mounted {
                node.compose(UpdateType::All, &ctx);
            }
            built
        }))
    }

    /// Mount `child` under `parent` at `slot` (appended when out of range or
    /// `None`), composing the child first.
    #[tracing::instrument(skip(self))]
    pub fn mount(
        &mut self,
        child: NodeHandle,
        parent: NodeHandle,
        slot: Option<usize>,
    ) -> DomResult<()> {
        if child == parent {
            return Err(DomError::validation("a node cannot be its own parent"));
        }
        let parent_node = self
            .nodes
            .get(parent)
            .ok_or_else(|| DomError::validation(format!("stale parent handle {parent:?}")))?;
        let flex_parent = FLEX_PARENT_TAGS
            .contains(&parent_node.tag())
            .then(|| FlexParent {
                column: parent_node.kind().flex_column(),
            });
        let child_id = self
            .nodes
            .get(child)
            .ok_or_else(|| DomError::validation(format!("stale child handle {child:?}")))?
            .id();
        let duplicate = parent_node
            .children()
            .iter()
            .filter_map(|h| self.nodes.get(*h))
            .any(|n| n.id() == child_id);
        if duplicate {
            tracing::warn!(node = child_id.0, "node is already a child of its parent");
            return Ok(());
        }

        let fixed = with_node!(self, child, |node, ctx| {
            if node.parent.is_some() {
                return Err(DomError::validation(format!(
                    "node {} is already mounted",
                    child_id.0
                )));
            }
            node.flex_parent = flex_parent;
            node.parent = Some(parent);
            node.mounted = true;
            node.generate_component_node(UpdateType::All, &ctx);
            node.style().position.kind == PositionType::Fixed
        });

        let parent_hidden = with_node!(self, parent, |node, ctx| {
            let at = slot.unwrap_or(usize::MAX).min(node.children.len());
            node.children.insert(at, child);
            if node.mounted {
                node.compose(UpdateType::All, &ctx);
            }
            node.style().display == Display::None
        });

        if !fixed && parent_hidden {
            with_node!(self, child, |node, ctx| {
                node.generate_component_node(UpdateType::All, &ctx);
            });
        }
        Ok(())
    }

    /// Detach `child` from `parent` without destroying it.
    #[tracing::instrument(skip(self))]
    pub fn remove_child(&mut self, parent: NodeHandle, child: NodeHandle) -> DomResult<()> {
        with_node!(self, parent, |node, ctx| {
            let before = node.children.len();
            node.children.retain(|h| *h != child);
            if node.children.len() == before {
                return Err(DomError::validation(format!(
                    "{child:?} is not a child of {parent:?}"
                )));
            }
            if node.mounted {
                node.compose(UpdateType::All, &ctx);
            }
        });
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = None;
            node.flex_parent = None;
        }
        let mut stack = vec![child];
        while let Some(h) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(h) {
                node.mounted = false;
                stack.extend(node.children.iter().copied());
            }
        }
        Ok(())
    }

    /// Destroy `handle` and its subtree, releasing every event marker.
    ///
    /// Pending tasks for destroyed nodes become no-ops.
    #[tracing::instrument(skip(self))]
    pub fn destroy(&mut self, handle: NodeHandle) -> DomResult<()> {
        let parent = self
            .nodes
            .get(handle)
            .ok_or_else(|| DomError::validation(format!("stale node handle {handle:?}")))?
            .parent();
        if let Some(parent) = parent {
            self.remove_child(parent, handle)?;
        }

        let mut stack = vec![handle];
        let mut released = 0usize;
        while let Some(h) = stack.pop() {
            let Some(mut node) = self.nodes.remove(h) else {
                continue;
            };
            stack.extend(node.children.iter().copied());
            self.ids.remove(&node.id());
            let markers = node.take_markers();
            released += markers.len();
            if let Some(dispatcher) = &self.dispatcher {
                for marker in &markers {
                    dispatcher.release(marker);
                }
            }
        }
        if self.root == Some(handle) {
            self.root = None;
        }
        tracing::debug!(released, "destroyed subtree");
        Ok(())
    }

    /// Apply an interaction signal. The flag changes now; when the node
    /// declares pseudo-class styles a resolution task is queued.
    ///
    /// A disabled change on a mounted node without pseudo-class styles
    /// recomposes at once so the root's disabled status stays current.
    #[tracing::instrument(skip(self))]
    pub fn interact(&mut self, handle: NodeHandle, interaction: Interaction) -> DomResult<()> {
        let status = with_node!(self, handle, |node, ctx| {
            let state = &mut node.state;
            match interaction {
                Interaction::Active(v) => state.active = v,
                Interaction::Focus(v) => state.focus = v,
                Interaction::Checked(v) => state.checked = v,
                Interaction::Disabled(v) => state.disabled = v,
                Interaction::Waiting(v) => state.waiting = v,
            }
            if node.pseudo().has_pseudo() {
                Some(node.state.status())
            } else {
                if matches!(interaction, Interaction::Disabled(_)) && node.mounted {
                    node.compose(UpdateType::Style, &ctx);
                }
                None
            }
        });
        let Some(status) = status else {
            return Ok(());
        };
        match &mut self.tasks {
            Some(queue) => queue.post(UiTask {
                node: handle,
                status,
            }),
            None => tracing::debug!(?interaction, "no task queue, resolution skipped"),
        }
        Ok(())
    }

    /// Pressed state changed.
    pub fn on_active(&mut self, handle: NodeHandle, active: bool) -> DomResult<()> {
        self.interact(handle, Interaction::Active(active))
    }

    /// Focus changed.
    pub fn on_focus(&mut self, handle: NodeHandle, focus: bool) -> DomResult<()> {
        self.interact(handle, Interaction::Focus(focus))
    }

    /// Checked state changed.
    pub fn on_checked(&mut self, handle: NodeHandle, checked: bool) -> DomResult<()> {
        self.interact(handle, Interaction::Checked(checked))
    }

    /// Disabled state changed.
    pub fn set_disabled(&mut self, handle: NodeHandle, disabled: bool) -> DomResult<()> {
        self.interact(handle, Interaction::Disabled(disabled))
    }

    /// Waiting state changed.
    pub fn set_waiting(&mut self, handle: NodeHandle, waiting: bool) -> DomResult<()> {
        self.interact(handle, Interaction::Waiting(waiting))
    }

    /// Queued resolution tasks.
    pub fn pending_tasks(&self) -> usize {
        self.tasks.as_ref().map_or(0, UiTaskQueue::len)
    }

    /// Run queued tasks in post order; returns how many reached a live node.
    #[tracing::instrument(skip(self))]
    pub fn flush_tasks(&mut self) -> usize {
        let ctx = NodeCtx {
            parser: ValueParser::new(self.theme.as_deref()),
            opts: self.opts,
        };
        let Some(queue) = &mut self.tasks else {
            return 0;
        };
        let mut ran = 0;
        while let Some(task) = queue.next() {
            let Some(node) = self.nodes.get_mut(task.node) else {
                tracing::debug!(handle = ?task.node, "task target is gone");
                continue;
            };
            node.resolve_backend(task.status, &ctx);
            ran += 1;
        }
        ran
    }

    /// Resolve `handle` and every descendant synchronously.
    #[tracing::instrument(skip(self))]
    pub fn update_style_with_children(&mut self, handle: NodeHandle) -> DomResult<()> {
        if !self.nodes.contains(handle) {
            return Err(DomError::validation(format!("stale node handle {handle:?}")));
        }
        let ctx = NodeCtx {
            parser: ValueParser::new(self.theme.as_deref()),
            opts: self.opts,
        };
        let mut stack = vec![handle];
        while let Some(h) = stack.pop() {
            let Some(node) = self.nodes.get_mut(h) else {
                continue;
            };
            let status = node.state.status();
            node.resolve_backend(status, &ctx);
            stack.extend(node.children.iter().rev().copied());
        }
        Ok(())
    }

    /// Invoke a node method with JSON `args`.
    ///
    /// `focus` takes `[{"focus": bool}]`, `scrollBy` takes
    /// `[{"dx": n, "dy": n, "smooth": bool}]`; other names go to the node kind.
    /// Malformed arguments are logged and ignored.
    #[tracing::instrument(skip(self))]
    pub fn call_method(&mut self, handle: NodeHandle, method: &str, args: &str) -> DomResult<()> {
        let args: Value = match serde_json::from_str(args) {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!(%err, "method arguments are not JSON");
                Value::Null
            }
        };
        let node = self
            .nodes
            .get_mut(handle)
            .ok_or_else(|| DomError::validation(format!("stale node handle {handle:?}")))?;
        let id = node.id();
        let first = args.as_array().filter(|a| a.len() == 1).map(|a| &a[0]);

        match method {
            "focus" => {
                let Some(focusable) = node.composition_mut().wrappers_mut().focusable.as_mut()
                else {
                    tracing::error!(node = id.0, "focus called on a non-focusable node");
                    return Ok(());
                };
                let focus = first
                    .and_then(|v| v.get("focus"))
                    .and_then(Value::as_bool)
                    .unwrap_or(true);
                focusable.props.focus_requested = focus;
            }
            "scrollBy" => {
                let Some(arg) = first else {
                    tracing::warn!("scrollBy expects one argument object");
                    return Ok(());
                };
                let Some(scroll) = node.composition_mut().wrappers_mut().scroll.as_mut() else {
                    tracing::debug!("scrollBy on a node without a scroll wrapper");
                    return Ok(());
                };
                let dx = arg.get("dx").and_then(Value::as_f64).unwrap_or(0.0);
                let dy = arg.get("dy").and_then(Value::as_f64).unwrap_or(0.0);
                let (px, py) = scroll
                    .props
                    .pending_scroll
                    .and_then(|o| Some((o.x.as_px()?, o.y.as_px()?)))
                    .unwrap_or((0.0, 0.0));
                scroll.props.pending_scroll = Some(DimensionOffset::new(
                    Dimension::new(px + dx, DimensionUnit::Px),
                    Dimension::new(py + dy, DimensionUnit::Px),
                ));
            }
            _ => {
                if !node.kind_mut().call_method(method, &args) {
                    tracing::trace!(method, "unsupported method");
                }
            }
        }
        Ok(())
    }

    /// Live nodes in storage order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeHandle, &DomNode)> + '_ {
        self.nodes.iter()
    }

    /// Live node handles with their document ids, in id order.
    pub fn handles(&self) -> impl Iterator<Item = (NodeId, NodeHandle)> + '_ {
        self.ids.iter().map(|(id, h)| (*id, *h))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/tree.rs"]
mod tests;
