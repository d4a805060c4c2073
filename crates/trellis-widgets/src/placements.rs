// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Placement capability

use linear_map::LinearMap;
use trellis::layout::Placement;

use crate::{Error, Result, Tree, WidgetId, WidgetKind};

/// Per-child placement overrides with a container-wide default
///
/// Keys are child identifiers, except for grids which key overrides by cell.
#[derive(Clone, Debug)]
pub struct Placements<K: Eq> {
    default: Placement,
    overrides: LinearMap<K, Placement>,
}

impl<K: Eq> Placements<K> {
    /// Construct with a default placement and no overrides
    pub fn new(default: Placement) -> Self {
        Placements {
            default,
            overrides: LinearMap::new(),
        }
    }

    /// The container-wide default
    #[inline]
    pub fn default_placement(&self) -> Placement {
        self.default
    }

    /// Set the container-wide default
    #[inline]
    pub fn set_default(&mut self, placement: Placement) {
        self.default = placement;
    }

    /// The effective placement for `key`: its override, else the default
    pub fn get(&self, key: &K) -> Placement {
        self.overrides.get(key).copied().unwrap_or(self.default)
    }

    /// The override for `key`, if any
    pub fn get_override(&self, key: &K) -> Option<Placement> {
        self.overrides.get(key).copied()
    }

    /// Set an override for `key`
    pub fn set(&mut self, key: K, placement: Placement) {
        self.overrides.insert(key, placement);
    }

    /// Set an override for `key` if `placement` is given, else remove it
    pub fn assign(&mut self, key: K, placement: Option<Placement>) {
        match placement {
            Some(placement) => self.set(key, placement),
            None => {
                self.unset(&key);
            }
        }
    }

    /// Remove the override for `key`, returning it
    pub fn unset(&mut self, key: &K) -> Option<Placement> {
        self.overrides.remove(key)
    }

    /// Remove all overrides
    pub fn clear(&mut self) {
        self.overrides.clear();
    }
}

impl<K: Eq> Default for Placements<K> {
    fn default() -> Self {
        Placements::new(Placement::default())
    }
}

fn no_placements(id: WidgetId, kind: &WidgetKind) -> Error {
    Error::WrongKind {
        id,
        expected: "Bin, Frame, Stack, HBox, VBox or Grid",
        found: kind.name(),
    }
}

/// Access child-keyed placements (all containers except grids and viewports)
fn child_placements_mut(kind: &mut WidgetKind) -> Option<&mut Placements<WidgetId>> {
    match kind {
        WidgetKind::Bin(bin) => Some(&mut bin.placements),
        WidgetKind::Frame(frame) => Some(&mut frame.bin.placements),
        WidgetKind::Stack(stack) => Some(&mut stack.placements),
        WidgetKind::List(list) => Some(&mut list.placements),
        _ => None,
    }
}

impl Tree {
    /// Get the default placement of a container
    pub fn placement(&self, id: WidgetId) -> Result<Placement> {
        match &self.node(id)?.kind {
            WidgetKind::Bin(bin) => Ok(bin.placements.default_placement()),
            WidgetKind::Frame(frame) => Ok(frame.bin.placements.default_placement()),
            WidgetKind::Stack(stack) => Ok(stack.placements.default_placement()),
            WidgetKind::List(list) => Ok(list.placements.default_placement()),
            WidgetKind::Grid(grid) => Ok(grid.placements.default_placement()),
            kind => Err(no_placements(id, kind)),
        }
    }

    /// Set the default placement of a container and update layout
    ///
    /// Children with an override are not affected.
    pub fn set_placement(&mut self, id: WidgetId, placement: Placement) -> Result<()> {
        let node = self.node_mut(id)?;
        if let WidgetKind::Grid(grid) = &mut node.kind {
            grid.placements.set_default(placement);
        } else {
            let found = node.kind.name();
            child_placements_mut(&mut node.kind)
                .ok_or(Error::WrongKind {
                    id,
                    expected: "Bin, Frame, Stack, HBox, VBox or Grid",
                    found,
                })?
                .set_default(placement);
        }
        self.commit([id]);
        Ok(())
    }

    /// Get the effective placement of `child` within `parent`
    pub fn child_placement(&self, parent: WidgetId, child: WidgetId) -> Result<Placement> {
        self.check_child(parent, child)?;
        match &self.node(parent)?.kind {
            WidgetKind::Bin(bin) => Ok(bin.placements.get(&child)),
            WidgetKind::Frame(frame) => Ok(frame.bin.placements.get(&child)),
            WidgetKind::Stack(stack) => Ok(stack.placements.get(&child)),
            WidgetKind::List(list) => Ok(list.placements.get(&child)),
            WidgetKind::Grid(grid) => grid
                .cell_of(child)
                .map(|cell| grid.placements.get(&cell))
                .ok_or(Error::NoSuchChild { parent, child }),
            kind => Err(no_placements(parent, kind)),
        }
    }

    /// Override the placement of `child` within `parent` and update layout
    ///
    /// For grids the override belongs to the child's cell.
    pub fn set_child_placement(
        &mut self,
        parent: WidgetId,
        child: WidgetId,
        placement: Placement,
    ) -> Result<()> {
        self.assign_child_placement(parent, child, Some(placement))
    }

    /// Remove any placement override of `child` within `parent` and update
    /// layout
    pub fn unset_child_placement(&mut self, parent: WidgetId, child: WidgetId) -> Result<()> {
        self.assign_child_placement(parent, child, None)
    }

    fn assign_child_placement(
        &mut self,
        parent: WidgetId,
        child: WidgetId,
        placement: Option<Placement>,
    ) -> Result<()> {
        self.check_child(parent, child)?;
        let node = self.node_mut(parent)?;
        if let WidgetKind::Grid(grid) = &mut node.kind {
            let cell = grid
                .cell_of(child)
                .ok_or(Error::NoSuchChild { parent, child })?;
            grid.placements.assign(cell, placement);
        } else {
            let found = node.kind.name();
            child_placements_mut(&mut node.kind)
                .ok_or(Error::WrongKind {
                    id: parent,
                    expected: "Bin, Frame, Stack, HBox, VBox or Grid",
                    found,
                })?
                .assign(child, placement);
        }
        self.commit([parent]);
        Ok(())
    }
}
