// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Padding capability

use log::warn;

use crate::{Error, Result, Tree, WidgetId, WidgetKind};

/// Padding around (and between) children, in pixels
///
/// Never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Padding(i32);

impl Padding {
    /// Construct
    ///
    /// A negative value is replaced with zero.
    pub fn new(padding: i32) -> Self {
        if padding < 0 {
            warn!("Padding::new: negative padding {padding} replaced with 0");
        }
        Padding(padding.max(0))
    }

    /// Get the value
    #[inline]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl Tree {
    /// Get the padding of a container
    pub fn padding(&self, id: WidgetId) -> Result<i32> {
        match &self.node(id)?.kind {
            WidgetKind::Bin(bin) => Ok(bin.padding.get()),
            WidgetKind::Frame(frame) => Ok(frame.bin.padding.get()),
            WidgetKind::Stack(stack) => Ok(stack.padding.get()),
            WidgetKind::List(list) => Ok(list.padding.get()),
            WidgetKind::Grid(grid) => Ok(grid.spec.padding),
            kind => Err(no_padding(id, kind)),
        }
    }

    /// Set the padding of a container and update layout
    ///
    /// A negative value is replaced with zero.
    pub fn set_padding(&mut self, id: WidgetId, padding: i32) -> Result<()> {
        let padding = Padding::new(padding);
        match &mut self.node_mut(id)?.kind {
            WidgetKind::Bin(bin) => bin.padding = padding,
            WidgetKind::Frame(frame) => frame.bin.padding = padding,
            WidgetKind::Stack(stack) => stack.padding = padding,
            WidgetKind::List(list) => list.padding = padding,
            WidgetKind::Grid(grid) => grid.spec.padding = padding.get(),
            kind => return Err(no_padding(id, kind)),
        }
        self.commit([id]);
        Ok(())
    }
}

fn no_padding(id: WidgetId, kind: &WidgetKind) -> Error {
    Error::WrongKind {
        id,
        expected: "Bin, Frame, Stack, HBox, VBox or Grid",
        found: kind.name(),
    }
}
