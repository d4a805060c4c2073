// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Leaf widgets

use std::any::Any;
use std::fmt;
use trellis::geom::{Rect, Size};

use crate::{Result, Tree, WidgetId};

/// A widget without children
///
/// Applications supply leaves (labels, images, buttons, ...) through this
/// trait; containers are provided by this crate. A leaf is stored in a
/// [`Tree`] via [`Tree::add_leaf`] and mutated via [`Tree::update_leaf`],
/// which also schedules a new layout pass.
pub trait Leaf: Any + fmt::Debug {
    /// Report the minimum size
    ///
    /// Called during the claim pass whenever the cached value is stale.
    fn claim(&mut self) -> Size;

    /// Notification of a new rect
    ///
    /// The rect is not necessarily at least the claimed size: a parent given
    /// too little space passes that shortage on.
    fn resize(&mut self, rect: Rect) {
        let _ = rect;
    }

    /// Name used in hierarchy dumps
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// An empty leaf with a configurable minimum size
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Spacer {
    min: Size,
}

impl Spacer {
    /// Construct with a minimum size
    #[inline]
    pub fn new(min: Size) -> Self {
        Spacer { min }
    }

    /// Get the minimum size
    #[inline]
    pub fn min_size(&self) -> Size {
        self.min
    }

    /// Set the minimum size
    ///
    /// Changes have no effect on layout unless made through
    /// [`Tree::update_leaf`] or followed by [`Tree::repack`].
    #[inline]
    pub fn set_min_size(&mut self, min: Size) {
        self.min = min;
    }
}

impl Leaf for Spacer {
    fn claim(&mut self) -> Size {
        self.min
    }

    fn name(&self) -> &'static str {
        "Spacer"
    }
}

impl Tree {
    /// Add a [`Spacer`] with the given minimum size
    pub fn add_spacer(&mut self, min: Size) -> WidgetId {
        self.add_leaf(Spacer::new(min))
    }

    /// Change the minimum size of a [`Spacer`] and update layout
    pub fn set_spacer_size(&mut self, id: WidgetId, min: Size) -> Result<()> {
        self.update_leaf(id, |spacer: &mut Spacer| spacer.set_min_size(min))
    }
}
