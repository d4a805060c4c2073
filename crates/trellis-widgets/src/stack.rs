// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Stack: overlapping children

use trellis::geom::{Rect, Size};
use trellis::layout::{Placement, RulesSetter, RulesSolver, StackSetter, StackSolver};

use crate::tree::{Children, Container, Placed};
use crate::{Error, Padding, Placements, Result, Tree, WidgetId, WidgetKind};

/// A container whose children overlap
///
/// Every child is placed in the stack's rect shrunk by padding, each using
/// its own placement. Children are kept in draw order: later children are
/// drawn over earlier ones.
#[derive(Clone, Debug)]
pub struct Stack {
    pub(crate) padding: Padding,
    pub(crate) placements: Placements<WidgetId>,
    children: Vec<WidgetId>,
}

impl Stack {
    /// Children, in draw order
    #[inline]
    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    /// Number of children
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if there are no children
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Padding on each side of the shared box
    #[inline]
    pub fn padding(&self) -> i32 {
        self.padding.get()
    }

    /// Placement of children
    pub fn placements(&self) -> &Placements<WidgetId> {
        &self.placements
    }

    /// Length once `child` is taken out (if present)
    fn len_without(&self, child: WidgetId) -> usize {
        self.children.iter().filter(|c| **c != child).count()
    }
}

impl Container for Stack {
    fn children(&self) -> Children {
        self.children.iter().copied().collect()
    }

    fn remove_child(&mut self, child: WidgetId) -> bool {
        let len = self.children.len();
        self.children.retain(|c| *c != child);
        self.placements.unset(&child);
        self.children.len() != len
    }

    fn min_size(&self, min_of: &dyn Fn(WidgetId) -> Size) -> Size {
        let mut solver = StackSolver::new(self.padding.get());
        for child in &self.children {
            solver.for_child((), min_of(*child));
        }
        solver.finish()
    }

    fn child_rects(&self, rect: Rect, min_of: &dyn Fn(WidgetId) -> Size) -> Placed {
        let mut setter = StackSetter::new(rect, self.padding.get());
        self.children
            .iter()
            .map(|child| {
                let placement = self.placements.get(child);
                (*child, placement.place(min_of(*child), setter.child_rect(())))
            })
            .collect()
    }
}

/// Mutable access to a [`Stack`]
///
/// Each method updates layout on success. Methods taking a child which has
/// another parent detach it from that parent first.
pub struct StackMut<'a> {
    tree: &'a mut Tree,
    id: WidgetId,
}

impl Tree {
    /// Add an empty [`Stack`]
    pub fn add_stack(&mut self) -> WidgetId {
        let stack = Stack {
            padding: Padding::new(self.config().padding),
            placements: Placements::new(self.config().placement),
            children: vec![],
        };
        self.insert_node(WidgetKind::Stack(stack))
    }

    /// Access a [`Stack`]
    pub fn stack(&self, id: WidgetId) -> Result<&Stack> {
        self.data(id, "Stack", WidgetKind::as_stack)
    }

    /// Mutably access a [`Stack`]
    pub fn stack_mut(&mut self, id: WidgetId) -> Result<StackMut<'_>> {
        self.data_mut(id, "Stack", WidgetKind::as_stack_mut)?;
        Ok(StackMut { tree: self, id })
    }
}

impl<'a> StackMut<'a> {
    /// The stack's identifier
    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    fn data(&mut self) -> Result<&mut Stack> {
        self.tree.data_mut(self.id, "Stack", WidgetKind::as_stack_mut)
    }

    /// Insert `child` at `index`
    ///
    /// `index` may equal the number of children (excluding `child` itself
    /// when it is already in this stack).
    pub fn insert(
        &mut self,
        child: WidgetId,
        index: usize,
        placement: Option<Placement>,
    ) -> Result<()> {
        let id = self.id;
        self.tree.check_attach(child, id)?;
        let len = self.data()?.len_without(child);
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        let old_parent = self.tree.unlink(child);
        let stack = self.data()?;
        stack.children.insert(index, child);
        stack.placements.assign(child, placement);
        self.tree.link(child, id);
        self.tree.commit(old_parent.into_iter().chain([id]));
        Ok(())
    }

    /// Add `child` on top; equivalent to [`Self::add_back`]
    #[inline]
    pub fn add(&mut self, child: WidgetId, placement: Option<Placement>) -> Result<()> {
        self.add_back(child, placement)
    }

    /// Add `child` below all other children
    pub fn add_front(&mut self, child: WidgetId, placement: Option<Placement>) -> Result<()> {
        self.insert(child, 0, placement)
    }

    /// Add `child` above all other children
    pub fn add_back(&mut self, child: WidgetId, placement: Option<Placement>) -> Result<()> {
        let len = self.data()?.len_without(child);
        self.insert(child, len, placement)
    }

    /// Replace the child at `index` with `child`, returning the old child
    ///
    /// The new child inherits the old child's placement override.
    pub fn replace(&mut self, index: usize, child: WidgetId) -> Result<WidgetId> {
        let id = self.id;
        self.tree.check_attach(child, id)?;
        let stack = self.data()?;
        let len = stack.children.len();
        let old = *stack
            .children
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        if old == child {
            return Ok(old);
        }
        let placement = stack.placements.get_override(&old);
        let index = match stack.children.iter().position(|c| *c == child) {
            Some(pos) if pos < index => index - 1,
            _ => index,
        };

        self.tree.unlink(old);
        let old_parent = self.tree.unlink(child);
        let stack = self.data()?;
        stack.children.insert(index, child);
        stack.placements.assign(child, placement);
        self.tree.link(child, id);
        self.tree.commit(old_parent.into_iter().chain([id]));
        Ok(old)
    }

    /// Detach `child`
    pub fn remove(&mut self, child: WidgetId) -> Result<()> {
        self.tree.check_child(self.id, child)?;
        self.tree.unlink(child);
        self.tree.commit([self.id]);
        Ok(())
    }

    /// Detach all children
    pub fn clear(&mut self) -> Result<()> {
        let children = self.data()?.children.clone();
        for child in children {
            self.tree.unlink(child);
        }
        self.data()?.placements.clear();
        self.tree.commit([self.id]);
        Ok(())
    }
}
