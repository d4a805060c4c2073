// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Boxes: rows and columns of children

use trellis::dir::Direction;
use trellis::geom::{Rect, Size};
use trellis::layout::{Placement, RowChild, RowSetter, RowSolver, RulesSetter, RulesSolver};

use crate::tree::{Children, Container, Placed};
use crate::{Error, Padding, Placements, Result, Tree, WidgetId, WidgetKind};

/// A row (HBox) or column (VBox) of children
///
/// Children get their minimum size along the packing direction, plus an
/// equal share of any leftover space for those marked *expand*. Padding
/// separates children from each other and from the edges. Across the
/// packing direction each child gets the full extent, less padding.
///
/// Rows are packed left-to-right, columns top-to-bottom.
#[derive(Clone, Debug)]
pub struct List {
    direction: Direction,
    pub(crate) padding: Padding,
    pub(crate) placements: Placements<WidgetId>,
    // (child, expand)
    children: Vec<(WidgetId, bool)>,
}

impl List {
    pub(crate) fn name(&self) -> &'static str {
        match self.direction {
            Direction::Right => "HBox",
            Direction::Down => "VBox",
        }
    }

    /// Packing direction
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterate over children, in order
    pub fn children(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.children.iter().map(|(child, _)| *child)
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

    /// Whether `child` expands into leftover space
    ///
    /// False if `child` is not in this box.
    pub fn is_expand(&self, child: WidgetId) -> bool {
        self.children.iter().any(|(c, expand)| *c == child && *expand)
    }

    /// Padding around and between children
    #[inline]
    pub fn padding(&self) -> i32 {
        self.padding.get()
    }

    /// Placement of children
    pub fn placements(&self) -> &Placements<WidgetId> {
        &self.placements
    }

    fn position(&self, child: WidgetId) -> Option<usize> {
        self.children.iter().position(|(c, _)| *c == child)
    }

    fn len_without(&self, child: WidgetId) -> usize {
        self.len() - usize::from(self.position(child).is_some())
    }
}

impl Container for List {
    fn children(&self) -> Children {
        List::children(self).collect()
    }

    fn remove_child(&mut self, child: WidgetId) -> bool {
        match self.position(child) {
            Some(index) => {
                self.children.remove(index);
                self.placements.unset(&child);
                true
            }
            None => false,
        }
    }

    fn min_size(&self, min_of: &dyn Fn(WidgetId) -> Size) -> Size {
        let mut solver = RowSolver::new(self.direction, self.padding.get());
        for (child, _) in &self.children {
            solver.for_child((), min_of(*child));
        }
        solver.finish()
    }

    fn child_rects(&self, rect: Rect, min_of: &dyn Fn(WidgetId) -> Size) -> Placed {
        let rows: Vec<RowChild> = self
            .children
            .iter()
            .map(|(child, expand)| RowChild::new(min_of(*child), *expand))
            .collect();
        let mut setter = RowSetter::new(rect, (self.direction, self.padding.get()), &rows);
        self.children
            .iter()
            .zip(&rows)
            .enumerate()
            .map(|(index, ((child, _), row))| {
                let placement = self.placements.get(child);
                (*child, placement.place(row.min, setter.child_rect(index)))
            })
            .collect()
    }
}

/// Mutable access to a box ([`List`])
///
/// Each method updates layout on success. Methods taking a child which has
/// another parent detach it from that parent first.
pub struct BoxMut<'a> {
    tree: &'a mut Tree,
    id: WidgetId,
}

impl Tree {
    fn add_list(&mut self, direction: Direction) -> WidgetId {
        let list = List {
            direction,
            padding: Padding::new(self.config().padding),
            placements: Placements::new(self.config().placement),
            children: vec![],
        };
        self.insert_node(WidgetKind::List(list))
    }

    /// Add an empty horizontal box (children packed left-to-right)
    pub fn add_hbox(&mut self) -> WidgetId {
        self.add_list(Direction::Right)
    }

    /// Add an empty vertical box (children packed top-to-bottom)
    pub fn add_vbox(&mut self) -> WidgetId {
        self.add_list(Direction::Down)
    }

    /// Access a box
    pub fn list(&self, id: WidgetId) -> Result<&List> {
        self.data(id, "HBox or VBox", WidgetKind::as_list)
    }

    /// Mutably access a box
    pub fn box_mut(&mut self, id: WidgetId) -> Result<BoxMut<'_>> {
        self.data_mut(id, "HBox or VBox", WidgetKind::as_list_mut)?;
        Ok(BoxMut { tree: self, id })
    }
}

impl<'a> BoxMut<'a> {
    /// The box's identifier
    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    fn data(&mut self) -> Result<&mut List> {
        self.tree.data_mut(self.id, "HBox or VBox", WidgetKind::as_list_mut)
    }

    /// Insert `child` at `index`
    ///
    /// `index` may equal the number of children (excluding `child` itself
    /// when it is already in this box).
    pub fn insert(
        &mut self,
        child: WidgetId,
        index: usize,
        expand: bool,
        placement: Option<Placement>,
    ) -> Result<()> {
        let id = self.id;
        self.tree.check_attach(child, id)?;
        let len = self.data()?.len_without(child);
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        let old_parent = self.tree.unlink(child);
        let list = self.data()?;
        list.children.insert(index, (child, expand));
        list.placements.assign(child, placement);
        self.tree.link(child, id);
        self.tree.commit(old_parent.into_iter().chain([id]));
        Ok(())
    }

    /// Append `child`; equivalent to [`Self::add_back`]
    #[inline]
    pub fn add(&mut self, child: WidgetId, expand: bool, placement: Option<Placement>) -> Result<()> {
        self.add_back(child, expand, placement)
    }

    /// Add `child` first (left or top)
    pub fn add_front(
        &mut self,
        child: WidgetId,
        expand: bool,
        placement: Option<Placement>,
    ) -> Result<()> {
        self.insert(child, 0, expand, placement)
    }

    /// Add `child` last (right or bottom)
    pub fn add_back(
        &mut self,
        child: WidgetId,
        expand: bool,
        placement: Option<Placement>,
    ) -> Result<()> {
        let len = self.data()?.len_without(child);
        self.insert(child, len, expand, placement)
    }

    /// Replace the child at `index` with `child`, returning the old child
    ///
    /// The new child does not expand and uses the default placement.
    pub fn replace(&mut self, index: usize, child: WidgetId) -> Result<WidgetId> {
        let id = self.id;
        self.tree.check_attach(child, id)?;
        let list = self.data()?;
        let len = list.len();
        let old = list
            .children
            .get(index)
            .map(|(c, _)| *c)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        if old == child {
            return Ok(old);
        }
        let index = match list.position(child) {
            Some(pos) if pos < index => index - 1,
            _ => index,
        };

        self.tree.unlink(old);
        let old_parent = self.tree.unlink(child);
        self.data()?.children.insert(index, (child, false));
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
        let children: Vec<WidgetId> = self.data()?.children().collect();
        for child in children {
            self.tree.unlink(child);
        }
        self.data()?.placements.clear();
        self.tree.commit([self.id]);
        Ok(())
    }

    /// Set whether `child` expands into leftover space
    pub fn set_expand(&mut self, child: WidgetId, expand: bool) -> Result<()> {
        let parent = self.id;
        let list = self.data()?;
        let index = list
            .position(child)
            .ok_or(Error::NoSuchChild { parent, child })?;
        list.children[index].1 = expand;
        self.tree.commit([parent]);
        Ok(())
    }
}
