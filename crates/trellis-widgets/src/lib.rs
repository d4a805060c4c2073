// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Trellis widget tree
//!
//! Widgets live in a [`Tree`] and are addressed by [`WidgetId`]. Leaves are
//! supplied by the application via the [`Leaf`] trait; this crate provides
//! the containers:
//!
//! -   [`Bin`]: at most one child, inset by padding
//! -   [`Frame`]: a bin with edge and corner decorations
//! -   [`Stack`]: overlapping children
//! -   [`List`]: a row ([`Tree::add_hbox`]) or column ([`Tree::add_vbox`])
//! -   [`Grid`]: children in cells of expanding or fixed rows and columns
//! -   [`Viewport`]: a panning window onto a larger child
//!
//! Containers are modified through typed views such as [`Tree::stack_mut`];
//! padding and placement of any container are set through [`Tree`] directly.
//! Every modification updates layout before returning.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod bin;
mod error;
mod frame;
mod grid;
mod leaf;
mod list;
mod padding;
mod placements;
mod slot;
mod stack;
mod tree;
mod viewport;

pub use bin::{Bin, BinMut};
pub use error::{Error, Result};
pub use frame::{Corner, Decoration, Edge, Frame, FrameMut};
pub use grid::{Grid, GridMut};
pub use leaf::{Leaf, Spacer};
pub use list::{BoxMut, List};
pub use padding::Padding;
pub use placements::Placements;
pub use slot::Slot;
pub use stack::{Stack, StackMut};
pub use tree::{Hierarchy, Tree, WidgetId, WidgetKind};
pub use viewport::{Viewport, ViewportMut, ViewportRef};
