// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Bin: a single-child container

use trellis::geom::{Rect, Size};
use trellis::layout::{Placement, RulesSetter, RulesSolver, StackSetter, StackSolver};

use crate::tree::{Children, Container, Placed};
use crate::{Padding, Placements, Result, Slot, Tree, WidgetId, WidgetKind};

/// A container with at most one child
///
/// The child is placed within the bin's rect, shrunk by padding. Adding a
/// child to an occupied bin replaces the previous one.
#[derive(Clone, Debug)]
pub struct Bin {
    pub(crate) padding: Padding,
    pub(crate) placements: Placements<WidgetId>,
    pub(crate) slot: Slot,
}

impl Bin {
    pub(crate) fn new(padding: i32, placement: Placement) -> Self {
        Bin {
            padding: Padding::new(padding),
            placements: Placements::new(placement),
            slot: Slot::default(),
        }
    }

    /// The child, if any
    #[inline]
    pub fn child(&self) -> Option<WidgetId> {
        self.slot.get()
    }

    /// Padding on each side of the child
    #[inline]
    pub fn padding(&self) -> i32 {
        self.padding.get()
    }

    /// Placement of the child
    pub fn placements(&self) -> &Placements<WidgetId> {
        &self.placements
    }
}

impl Container for Bin {
    fn children(&self) -> Children {
        self.slot.get().into_iter().collect()
    }

    fn remove_child(&mut self, child: WidgetId) -> bool {
        let removed = self.slot.remove(child);
        if removed {
            self.placements.unset(&child);
        }
        removed
    }

    fn min_size(&self, min_of: &dyn Fn(WidgetId) -> Size) -> Size {
        let mut solver = StackSolver::new(self.padding.get());
        if let Some(child) = self.slot.get() {
            solver.for_child((), min_of(child));
        }
        solver.finish()
    }

    fn child_rects(&self, rect: Rect, min_of: &dyn Fn(WidgetId) -> Size) -> Placed {
        let mut setter = StackSetter::new(rect, self.padding.get());
        self.slot
            .get()
            .map(|child| {
                let placement = self.placements.get(&child);
                (child, placement.place(min_of(child), setter.child_rect(())))
            })
            .into_iter()
            .collect()
    }
}

/// Mutable access to a [`Bin`] (or the bin part of a [`crate::Frame`])
///
/// Each method updates layout on success.
pub struct BinMut<'a> {
    tree: &'a mut Tree,
    id: WidgetId,
}

impl Tree {
    /// Add an empty [`Bin`]
    ///
    /// Padding and placement are taken from the tree's configuration.
    pub fn add_bin(&mut self) -> WidgetId {
        let bin = Bin::new(self.config().padding, self.config().placement);
        self.insert_node(WidgetKind::Bin(bin))
    }

    /// Access a [`Bin`] or [`crate::Frame`]
    pub fn bin(&self, id: WidgetId) -> Result<&Bin> {
        self.data(id, "Bin or Frame", WidgetKind::as_bin)
    }

    /// Mutably access a [`Bin`] or [`crate::Frame`]
    pub fn bin_mut(&mut self, id: WidgetId) -> Result<BinMut<'_>> {
        self.data_mut(id, "Bin or Frame", WidgetKind::as_bin_mut)?;
        Ok(BinMut { tree: self, id })
    }
}

impl<'a> BinMut<'a> {
    /// The bin's identifier
    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    fn data(&mut self) -> Result<&mut Bin> {
        self.tree.data_mut(self.id, "Bin or Frame", WidgetKind::as_bin_mut)
    }

    /// Set the child, replacing (detaching) any existing child
    ///
    /// `placement` overrides the bin's default placement for this child.
    /// If `child` has another parent it is detached first.
    pub fn add(&mut self, child: WidgetId, placement: Option<Placement>) -> Result<()> {
        let id = self.id;
        self.tree.check_attach(child, id)?;
        let old_parent = self.tree.unlink(child);
        if let Some(previous) = self.data()?.slot.get() {
            self.tree.unlink(previous);
        }

        let bin = self.data()?;
        bin.slot.set(child);
        bin.placements.assign(child, placement);
        self.tree.link(child, id);
        self.tree.commit(old_parent.into_iter().chain([id]));
        Ok(())
    }

    /// Detach the child, if any, returning it
    pub fn clear(&mut self) -> Result<Option<WidgetId>> {
        let child = self.data()?.slot.get();
        if let Some(child) = child {
            self.tree.unlink(child);
            self.tree.commit([self.id]);
        }
        Ok(child)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;

    #[test]
    fn claim_with_padding() {
        let mut tree = Tree::new();
        let bin = tree.add_bin();
        tree.set_padding(bin, 4).unwrap();
        assert_eq!(tree.claim(bin), Ok(Size(8, 8)));

        let spacer = tree.add_spacer(Size(10, 6));
        tree.bin_mut(bin).unwrap().add(spacer, None).unwrap();
        assert_eq!(tree.claim(bin), Ok(Size(18, 14)));
    }

    #[test]
    fn replace_not_stack() {
        let mut tree = Tree::new();
        let bin = tree.add_bin();
        let a = tree.add_spacer(Size(5, 5));
        let b = tree.add_spacer(Size(7, 7));
        tree.bin_mut(bin).unwrap().add(a, Some(Placement::Center)).unwrap();
        tree.bin_mut(bin).unwrap().add(b, None).unwrap();

        assert_eq!(tree.children(bin), Ok(vec![b]));
        assert_eq!(tree.parent(a), Ok(None));
        assert_eq!(tree.child_placement(bin, b), Ok(Placement::Fill));
        assert_eq!(tree.claim(bin), Ok(Size(7, 7)));
    }

    #[test]
    fn places_child_in_padded_rect() {
        let mut tree = Tree::new();
        let bin = tree.add_bin();
        let spacer = tree.add_spacer(Size(10, 10));
        tree.set_padding(bin, 5).unwrap();
        tree.bin_mut(bin).unwrap().add(spacer, Some(Placement::TopRight)).unwrap();
        tree.resize(bin, Rect::from_dimensions(0, 0, 100, 50)).unwrap();
        assert_eq!(tree.rect(spacer), Ok(Some(Rect::from_dimensions(85, 35, 10, 10))));

        tree.unset_child_placement(bin, spacer).unwrap();
        tree.resize(bin, Rect::from_dimensions(0, 0, 100, 50)).unwrap();
        assert_eq!(tree.rect(spacer), Ok(Some(Rect::from_dimensions(5, 5, 90, 40))));
    }

    #[test]
    fn clear_detaches() {
        let mut tree = Tree::new();
        let bin = tree.add_bin();
        let spacer = tree.add_spacer(Size(1, 1));
        assert_eq!(tree.bin_mut(bin).unwrap().clear(), Ok(None));
        tree.attach(spacer, bin).unwrap();
        assert_eq!(tree.bin_mut(bin).unwrap().clear(), Ok(Some(spacer)));
        assert_eq!(tree.bin(bin).map(|b| b.child()), Ok(None));
        assert_eq!(tree.parent(spacer), Ok(None));
    }

    #[test]
    fn wrong_kind() {
        let mut tree = Tree::new();
        let stack = tree.add_stack();
        assert!(matches!(
            tree.bin_mut(stack),
            Err(Error::WrongKind { found: "Stack", .. })
        ));
    }
}
