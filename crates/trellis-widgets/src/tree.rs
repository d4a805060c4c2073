// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The widget tree

use bitflags::bitflags;
use log::{debug, trace, warn};
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use std::any::Any;
use std::fmt;
use trellis::config::Config;
use trellis::geom::{Rect, Size};

use crate::{Bin, Error, Frame, Grid, Leaf, List, Result, Stack, Viewport};

new_key_type! {
    /// Widget identifier
    ///
    /// Identifiers are allocated by [`Tree`] and stay valid until the widget
    /// is removed with [`Tree::remove`]. An identifier from one tree is
    /// meaningless in another.
    pub struct WidgetId;
}

/// Child list, as returned by [`Container::children`]
pub(crate) type Children = SmallVec<[WidgetId; 8]>;

/// Child rects, as returned by [`Container::child_rects`]
pub(crate) type Placed = SmallVec<[(WidgetId, Rect); 8]>;

bitflags! {
    /// Node state
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub(crate) struct NodeFlags: u8 {
        /// The cached minimum size is stale
        const NEEDS_CLAIM = 1 << 0;
    }
}

/// Layout rules of a container kind
///
/// Implementations only deal with their own metadata: the [`Tree`] walks the
/// hierarchy, keeps min-size caches and parent links.
pub(crate) trait Container {
    /// Children, in draw order
    fn children(&self) -> Children;

    /// Forget `child` along with its metadata
    ///
    /// Returns false if `child` was not found.
    fn remove_child(&mut self, child: WidgetId) -> bool;

    /// Calculate the minimum size, given children's minimum sizes
    fn min_size(&self, min_of: &dyn Fn(WidgetId) -> Size) -> Size;

    /// Calculate the rect of each child, given the container's rect
    fn child_rects(&self, rect: Rect, min_of: &dyn Fn(WidgetId) -> Size) -> Placed;
}

/// Widget data, by kind
///
/// The set of containers is closed; applications extend the tree through
/// [`Leaf`] widgets.
#[derive(Debug)]
pub enum WidgetKind {
    /// An application-supplied widget without children
    Leaf(Box<dyn Leaf>),
    /// Single-child container
    Bin(Bin),
    /// Single-child container with edge decorations
    Frame(Frame),
    /// Overlapping children
    Stack(Stack),
    /// Row ([`Tree::add_hbox`]) or column ([`Tree::add_vbox`]) of children
    List(List),
    /// Children arranged in cells
    Grid(Grid),
    /// Single child, panned and clipped
    Viewport(Viewport),
}

impl WidgetKind {
    /// Name of this kind
    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Leaf(_) => "Leaf",
            WidgetKind::Bin(_) => "Bin",
            WidgetKind::Frame(_) => "Frame",
            WidgetKind::Stack(_) => "Stack",
            WidgetKind::List(list) => list.name(),
            WidgetKind::Grid(_) => "Grid",
            WidgetKind::Viewport(_) => "Viewport",
        }
    }

    pub(crate) fn container(&self) -> Option<&dyn Container> {
        Some(match self {
            WidgetKind::Leaf(_) => return None,
            WidgetKind::Bin(bin) => bin,
            WidgetKind::Frame(frame) => frame,
            WidgetKind::Stack(stack) => stack,
            WidgetKind::List(list) => list,
            WidgetKind::Grid(grid) => grid,
            WidgetKind::Viewport(viewport) => viewport,
        })
    }

    pub(crate) fn container_mut(&mut self) -> Option<&mut dyn Container> {
        Some(match self {
            WidgetKind::Leaf(_) => return None,
            WidgetKind::Bin(bin) => bin,
            WidgetKind::Frame(frame) => frame,
            WidgetKind::Stack(stack) => stack,
            WidgetKind::List(list) => list,
            WidgetKind::Grid(grid) => grid,
            WidgetKind::Viewport(viewport) => viewport,
        })
    }

    pub(crate) fn children(&self) -> Children {
        self.container()
            .map(|c| c.children())
            .unwrap_or_default()
    }

    /// Access single-child data of a [`Bin`] or [`Frame`]
    pub fn as_bin(&self) -> Option<&Bin> {
        match self {
            WidgetKind::Bin(bin) => Some(bin),
            WidgetKind::Frame(frame) => Some(&frame.bin),
            _ => None,
        }
    }

    pub(crate) fn as_bin_mut(&mut self) -> Option<&mut Bin> {
        match self {
            WidgetKind::Bin(bin) => Some(bin),
            WidgetKind::Frame(frame) => Some(&mut frame.bin),
            _ => None,
        }
    }
}

macro_rules! impl_as {
    ($($variant:ident: $T:ty, $get:ident, $get_mut:ident;)*) => {
        impl WidgetKind {
            $(
                #[doc = concat!("Access data of a [`", stringify!($T), "`]")]
                pub fn $get(&self) -> Option<&$T> {
                    match self {
                        WidgetKind::$variant(data) => Some(data),
                        _ => None,
                    }
                }

                pub(crate) fn $get_mut(&mut self) -> Option<&mut $T> {
                    match self {
                        WidgetKind::$variant(data) => Some(data),
                        _ => None,
                    }
                }
            )*
        }
    };
}

impl_as! {
    Frame: Frame, as_frame, as_frame_mut;
    Stack: Stack, as_stack, as_stack_mut;
    List: List, as_list, as_list_mut;
    Grid: Grid, as_grid, as_grid_mut;
    Viewport: Viewport, as_viewport, as_viewport_mut;
}

/// Arena entry
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) parent: Option<WidgetId>,
    /// Result of the last claim; valid unless `NEEDS_CLAIM` is set
    pub(crate) min_size: Size,
    /// None until first resized, and again after detaching
    pub(crate) rect: Option<Rect>,
    pub(crate) flags: NodeFlags,
    pub(crate) kind: WidgetKind,
}

impl Node {
    fn new(kind: WidgetKind) -> Self {
        Node {
            parent: None,
            min_size: Size::ZERO,
            rect: None,
            flags: NodeFlags::NEEDS_CLAIM,
            kind,
        }
    }
}

fn min_of(nodes: &SlotMap<WidgetId, Node>, id: WidgetId) -> Size {
    nodes.get(id).map(|node| node.min_size).unwrap_or_default()
}

/// A tree of widgets
///
/// All widgets live in this arena and are addressed by [`WidgetId`]. Each
/// widget has at most one parent. Widgets without a parent are *top-level*;
/// one of these may be designated the [root](Tree::set_root).
///
/// Layout happens in two passes: [`Tree::claim`] computes minimum sizes
/// bottom-up (cached per widget) while [`Tree::resize`] assigns rects
/// top-down. Every mutation (adding or removing children, changing padding,
/// placement or leaf content) marks the affected widget and its ancestors
/// stale, then re-runs both passes from the top-level ancestor, reusing that
/// ancestor's current rect. Top-level widgets which have never been resized
/// are only claimed.
#[derive(Debug, Default)]
pub struct Tree {
    nodes: SlotMap<WidgetId, Node>,
    root: Option<WidgetId>,
    config: Config,
}

impl Tree {
    /// Construct an empty tree with default configuration
    pub fn new() -> Self {
        Tree::default()
    }

    /// Construct an empty tree
    ///
    /// Containers created through this tree adopt defaults from `config`.
    pub fn with_config(config: Config) -> Self {
        Tree {
            nodes: SlotMap::with_key(),
            root: None,
            config,
        }
    }

    /// Access configuration
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of widgets in the tree
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree has no widgets
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn insert_node(&mut self, kind: WidgetKind) -> WidgetId {
        let name = kind.name();
        let id = self.nodes.insert(Node::new(kind));
        debug!("Tree: new {name} {id:?}");
        id
    }

    /// Add a leaf widget
    ///
    /// The new widget is top-level.
    pub fn add_leaf<L: Leaf>(&mut self, leaf: L) -> WidgetId {
        self.insert_node(WidgetKind::Leaf(Box::new(leaf)))
    }

    pub(crate) fn node(&self, id: WidgetId) -> Result<&Node> {
        self.nodes.get(id).ok_or(Error::NotFound(id))
    }

    pub(crate) fn node_mut(&mut self, id: WidgetId) -> Result<&mut Node> {
        self.nodes.get_mut(id).ok_or(Error::NotFound(id))
    }

    /// Access kind-specific data, failing with [`Error::WrongKind`]
    pub(crate) fn data<T>(
        &self,
        id: WidgetId,
        expected: &'static str,
        get: impl FnOnce(&WidgetKind) -> Option<&T>,
    ) -> Result<&T> {
        let kind = &self.node(id)?.kind;
        get(kind).ok_or(Error::WrongKind {
            id,
            expected,
            found: kind.name(),
        })
    }

    /// Mutably access kind-specific data, failing with [`Error::WrongKind`]
    pub(crate) fn data_mut<T>(
        &mut self,
        id: WidgetId,
        expected: &'static str,
        get: impl FnOnce(&mut WidgetKind) -> Option<&mut T>,
    ) -> Result<&mut T> {
        let node = self.node_mut(id)?;
        let found = node.kind.name();
        get(&mut node.kind).ok_or(Error::WrongKind {
            id,
            expected,
            found,
        })
    }

    /// True if `id` refers to a widget of this tree
    #[inline]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Access widget data
    pub fn kind(&self, id: WidgetId) -> Result<&WidgetKind> {
        Ok(&self.node(id)?.kind)
    }

    /// Get the parent of a widget
    pub fn parent(&self, id: WidgetId) -> Result<Option<WidgetId>> {
        Ok(self.node(id)?.parent)
    }

    /// Get the children of a widget, in draw order
    pub fn children(&self, id: WidgetId) -> Result<Vec<WidgetId>> {
        Ok(self.node(id)?.kind.children().into_vec())
    }

    /// Get the rect assigned by the last resize pass
    ///
    /// This is `None` before the widget is first resized and after it is
    /// detached. The child of a [`Viewport`] has a rect in the viewport's
    /// child space.
    pub fn rect(&self, id: WidgetId) -> Result<Option<Rect>> {
        Ok(self.node(id)?.rect)
    }

    /// Get the minimum size found by the last claim pass
    ///
    /// This may be stale; use [`Tree::claim`] for an up-to-date value.
    pub fn min_size(&self, id: WidgetId) -> Result<Size> {
        Ok(self.node(id)?.min_size)
    }

    /// True if `ancestor` is `id` or one of its ancestors
    pub fn is_ancestor_of(&self, ancestor: WidgetId, id: WidgetId) -> bool {
        let mut cursor = Some(id);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self.nodes.get(id).and_then(|node| node.parent);
        }
        false
    }

    /// Get the root widget
    #[inline]
    pub fn root(&self) -> Option<WidgetId> {
        self.root
    }

    /// Designate the root widget
    ///
    /// If `id` has a parent it is detached first. A previous root keeps its
    /// place in the arena but loses its geometry.
    pub fn set_root(&mut self, id: WidgetId) -> Result<()> {
        self.node(id)?;
        if let Some(parent) = self.unlink(id) {
            self.commit([parent]);
        }
        if let Some(old) = self.root.replace(id) {
            if old != id {
                self.clear_rects(old);
            }
        }
        debug!("Tree: root is {id:?}");
        Ok(())
    }

    /// Lay out the root widget within `rect`
    ///
    /// Typically called when the window is resized.
    pub fn resize_root(&mut self, rect: Rect) -> Result<()> {
        let root = self.root.ok_or(Error::NoRoot)?;
        self.claim_node(root);
        self.resize_node(root, rect);
        trace!("Tree::resize_root:{}", self.hierarchy(root));
        Ok(())
    }

    /// Get the minimum size of a widget
    ///
    /// Stale cached values (of this widget and of its descendants) are
    /// recomputed.
    pub fn claim(&mut self, id: WidgetId) -> Result<Size> {
        self.node(id)?;
        Ok(self.claim_node(id))
    }

    /// Assign a rect to a widget and lay out its descendants
    ///
    /// Stale minimum sizes are recomputed first. `rect` is not required to
    /// be at least the claimed size; children then get degenerate boxes.
    pub fn resize(&mut self, id: WidgetId, rect: Rect) -> Result<()> {
        self.node(id)?;
        self.resize_node(id, rect);
        Ok(())
    }

    fn claim_node(&mut self, id: WidgetId) -> Size {
        let Some(node) = self.nodes.get(id) else {
            return Size::ZERO;
        };
        if !node.flags.contains(NodeFlags::NEEDS_CLAIM) {
            return node.min_size;
        }
        for child in node.kind.children() {
            self.claim_node(child);
        }

        let min = if let WidgetKind::Leaf(leaf) = &mut self.nodes[id].kind {
            leaf.claim()
        } else {
            let nodes = &self.nodes;
            nodes[id]
                .kind
                .container()
                .map(|c| c.min_size(&|child| min_of(nodes, child)))
                .unwrap_or_default()
        };
        if min.is_degenerate() {
            warn!("Tree::claim: {id:?} claims negative size {min:?}");
        }

        let node = &mut self.nodes[id];
        node.min_size = min;
        node.flags.remove(NodeFlags::NEEDS_CLAIM);
        trace!("Tree::claim: {} {id:?} => {min:?}", node.kind.name());
        min
    }

    fn resize_node(&mut self, id: WidgetId, rect: Rect) {
        self.claim_node(id);
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        node.rect = Some(rect);
        if let WidgetKind::Leaf(leaf) = &mut node.kind {
            leaf.resize(rect);
            return;
        }

        let placed = {
            let nodes = &self.nodes;
            nodes[id]
                .kind
                .container()
                .map(|c| c.child_rects(rect, &|child| min_of(nodes, child)))
                .unwrap_or_default()
        };
        for (child, child_rect) in placed {
            self.resize_node(child, child_rect);
        }

        if matches!(self.nodes[id].kind, WidgetKind::Viewport(_)) {
            self.settle_viewport(id);
        }
    }

    fn clear_rects(&mut self, id: WidgetId) {
        let mut stack: Children = SmallVec::from_elem(id, 1);
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(id) {
                node.rect = None;
                stack.extend(node.kind.children());
            }
        }
    }

    /// Check that `child` may be attached to `parent`
    pub(crate) fn check_attach(&self, child: WidgetId, parent: WidgetId) -> Result<()> {
        self.node(child)?;
        self.node(parent)?;
        if self.is_ancestor_of(child, parent) {
            return Err(Error::WouldCycle { child, parent });
        }
        Ok(())
    }

    /// Check that `child` is attached to `parent`
    pub(crate) fn check_child(&self, parent: WidgetId, child: WidgetId) -> Result<()> {
        self.node(parent)?;
        if self.node(child)?.parent != Some(parent) {
            return Err(Error::NoSuchChild { parent, child });
        }
        Ok(())
    }

    /// Remove `child` from its parent, returning the former parent
    ///
    /// The parent's metadata for `child` is dropped and the detached subtree
    /// loses its geometry. Does not update layout.
    pub(crate) fn unlink(&mut self, child: WidgetId) -> Option<WidgetId> {
        let parent = self.nodes.get_mut(child)?.parent.take()?;
        if let Some(container) = self
            .nodes
            .get_mut(parent)
            .and_then(|node| node.kind.container_mut())
        {
            if !container.remove_child(child) {
                warn!("Tree::unlink: {child:?} missing from parent {parent:?}");
            }
        }
        self.clear_rects(child);
        debug!("Tree: detached {child:?} from {parent:?}");
        Some(parent)
    }

    /// Record `parent` as the parent of `child`
    ///
    /// The parent's metadata must already include `child`.
    pub(crate) fn link(&mut self, child: WidgetId, parent: WidgetId) {
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent);
        }
        if self.root == Some(child) {
            debug!("Tree: root {child:?} attached to {parent:?}; tree has no root");
            self.root = None;
        }
        debug!("Tree: attached {child:?} to {parent:?}");
    }

    /// Mark `id` and its ancestors stale, returning the top-level ancestor
    fn invalidate(&mut self, id: WidgetId) -> Option<WidgetId> {
        let mut top = None;
        let mut cursor = Some(id);
        while let Some(id) = cursor {
            let Some(node) = self.nodes.get_mut(id) else {
                break;
            };
            node.flags.insert(NodeFlags::NEEDS_CLAIM);
            top = Some(id);
            cursor = node.parent;
        }
        top
    }

    /// Re-run claim and resize passes after modifying `touched` widgets
    ///
    /// Each affected top-level widget is laid out once.
    pub(crate) fn commit(&mut self, touched: impl IntoIterator<Item = WidgetId>) {
        let mut tops: SmallVec<[WidgetId; 2]> = SmallVec::new();
        for id in touched {
            if let Some(top) = self.invalidate(id) {
                if !tops.contains(&top) {
                    tops.push(top);
                }
            }
        }

        for top in tops {
            self.claim_node(top);
            if let Some(rect) = self.nodes[top].rect {
                self.resize_node(top, rect);
            }
            trace!("Tree: layout updated:{}", self.hierarchy(top));
        }
    }

    /// Mark a widget stale and update layout
    ///
    /// Call after changing anything affecting the minimum size of `id`
    /// without going through this tree's API.
    pub fn repack(&mut self, id: WidgetId) -> Result<()> {
        self.node(id)?;
        self.commit([id]);
        Ok(())
    }

    /// Attach `child` to `parent` using default metadata
    ///
    /// This is [`BinMut::add`](crate::BinMut::add) for a [`Bin`] or
    /// [`Frame`], [`StackMut::add`](crate::StackMut::add) for a [`Stack`],
    /// [`BoxMut::add`](crate::BoxMut::add) (not expanding) for boxes and
    /// [`ViewportMut::set_child`](crate::ViewportMut::set_child) for a
    /// [`Viewport`]. Grids need a cell; use [`GridMut::add`](crate::GridMut::add).
    ///
    /// If `child` already has a parent it is detached first.
    pub fn attach(&mut self, child: WidgetId, parent: WidgetId) -> Result<()> {
        match &self.node(parent)?.kind {
            WidgetKind::Bin(_) | WidgetKind::Frame(_) => self.bin_mut(parent)?.add(child, None),
            WidgetKind::Stack(_) => self.stack_mut(parent)?.add(child, None),
            WidgetKind::List(_) => self.box_mut(parent)?.add(child, false, None),
            WidgetKind::Viewport(_) => self.viewport_mut(parent)?.set_child(child),
            kind => Err(Error::WrongKind {
                id: parent,
                expected: "Bin, Frame, Stack, HBox, VBox or Viewport",
                found: kind.name(),
            }),
        }
    }

    /// Detach `child` from its parent and update layout
    ///
    /// The detached subtree loses its geometry. Does nothing if `child` has
    /// no parent.
    pub fn detach(&mut self, child: WidgetId) -> Result<()> {
        self.node(child)?;
        if let Some(parent) = self.unlink(child) {
            self.commit([parent]);
        }
        Ok(())
    }

    /// Remove a widget and all its descendants from the tree
    pub fn remove(&mut self, id: WidgetId) -> Result<()> {
        self.detach(id)?;
        if self.root == Some(id) {
            self.root = None;
        }
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.remove(id) {
                stack.extend(node.kind.children());
            }
        }
        debug!("Tree: removed {id:?}");
        Ok(())
    }

    /// Access a leaf widget of type `L`
    pub fn leaf<L: Leaf>(&self, id: WidgetId) -> Result<&L> {
        let expected = std::any::type_name::<L>();
        self.data(id, expected, |kind| match kind {
            WidgetKind::Leaf(leaf) => {
                let leaf: &dyn Any = &**leaf;
                leaf.downcast_ref::<L>()
            }
            _ => None,
        })
    }

    /// Modify a leaf widget of type `L` and update layout
    pub fn update_leaf<L: Leaf, R>(
        &mut self,
        id: WidgetId,
        f: impl FnOnce(&mut L) -> R,
    ) -> Result<R> {
        let expected = std::any::type_name::<L>();
        let leaf = self.data_mut(id, expected, |kind| match kind {
            WidgetKind::Leaf(leaf) => {
                let leaf: &mut dyn Any = &mut **leaf;
                leaf.downcast_mut::<L>()
            }
            _ => None,
        })?;
        let result = f(leaf);
        self.commit([id]);
        Ok(result)
    }

    /// Display the hierarchy under `id`
    ///
    /// One line per widget: kind, identifier and current rect, indented by
    /// depth. Unknown identifiers display nothing.
    pub fn hierarchy(&self, id: WidgetId) -> Hierarchy<'_> {
        Hierarchy {
            tree: self,
            id,
            depth: 0,
        }
    }
}

/// Widget hierarchy dump; see [`Tree::hierarchy`]
pub struct Hierarchy<'a> {
    tree: &'a Tree,
    id: WidgetId,
    depth: usize,
}

impl<'a> fmt::Display for Hierarchy<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let Some(node) = self.tree.nodes.get(self.id) else {
            return Ok(());
        };
        let name = match &node.kind {
            WidgetKind::Leaf(leaf) => leaf.name(),
            kind => kind.name(),
        };
        write!(f, "\n{}{} {:?}", "| ".repeat(self.depth), name, self.id)?;
        match node.rect {
            Some(rect) => write!(f, "\tpos={:?}\tsize={:?}", rect.pos, rect.size)?,
            None => write!(f, "\t(no rect)")?,
        }

        for child in node.kind.children() {
            Hierarchy {
                tree: self.tree,
                id: child,
                depth: self.depth + 1,
            }
            .fmt(f)?;
        }
        Ok(())
    }
}
