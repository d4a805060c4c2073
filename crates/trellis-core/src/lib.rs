// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Trellis layout core
//!
//! Geometry types, packing solvers and configuration. This crate knows
//! nothing about widget trees: its solvers map child minimum sizes to a
//! container minimum size (claim) and a container rect to child boxes
//! (resize). See the `trellis-widgets` crate for the widget tree.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub extern crate easy_cast as cast;

mod error;

pub mod config;
pub mod dir;
pub mod geom;
pub mod layout;

pub use error::ConfigError;
