// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Trellis: a retained-mode widget layout engine
//!
//! This, the main Trellis crate, is merely a wrapper over other crates:
//!
//! -   [`trellis_core`] provides geometry, layout solvers and configuration
//! -   [`trellis_widgets`] provides the widget tree and containers
//!
//! All items from [`trellis_core`] are directly re-exported from this crate
//! (e.g. [`trellis::geom::Rect`](crate::geom::Rect)); the widget crate is
//! re-exported as a sub-module (e.g. [`trellis::widgets::Tree`](crate::widgets::Tree)).
//!
//! The [easy-cast](https://docs.rs/easy-cast/0.5/easy_cast) library is re-exported as `trellis::cast`.
//!
//! ## Example
//!
//! ```
//! use trellis::prelude::*;
//!
//! let mut tree = Tree::new();
//! let hbox = tree.add_hbox();
//! let a = tree.add_spacer(Size(30, 10));
//! let b = tree.add_spacer(Size(20, 10));
//! tree.box_mut(hbox)?.add(a, false, None)?;
//! tree.box_mut(hbox)?.add(b, true, None)?;
//! tree.set_root(hbox)?;
//! tree.resize_root(Rect::from_size(Size(200, 10)))?;
//!
//! assert_eq!(tree.rect(b)?, Some(Rect::from_dimensions(30, 0, 170, 10)));
//! # Ok::<(), trellis::widgets::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod prelude;

pub use trellis_core::*;

pub extern crate trellis_widgets as widgets;
