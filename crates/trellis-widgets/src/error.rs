// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Error types

use thiserror::Error;
use trellis::ConfigError;
use trellis::layout::GridCellInfo;

use crate::WidgetId;

/// Widget tree errors
///
/// A mutation which fails with one of these has not modified the tree.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum Error {
    /// Invalid configuration value
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The identifier does not refer to a widget of this tree
    #[error("unknown widget: {0:?}")]
    NotFound(WidgetId),
    /// The widget does not support this operation
    #[error("widget {id:?} is a {found}, expected {expected}")]
    WrongKind {
        id: WidgetId,
        expected: &'static str,
        found: &'static str,
    },
    /// Attaching `child` to `parent` would make a widget its own ancestor
    #[error("cannot attach {child:?} to its own descendant {parent:?}")]
    WouldCycle { child: WidgetId, parent: WidgetId },
    /// Child index out of range
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// The widget is not a child of the given container
    #[error("{child:?} is not a child of {parent:?}")]
    NoSuchChild { parent: WidgetId, child: WidgetId },
    /// No widget occupies the grid cell
    #[error("grid cell ({}, {}) is empty", .0.row, .0.col)]
    EmptyCell(GridCellInfo),
    /// The operation needs a rect, but the widget has not been resized yet
    #[error("widget {0:?} has not been laid out")]
    NotLaidOut(WidgetId),
    /// The tree has no root widget
    #[error("the tree has no root widget")]
    NoRoot,
}

/// Result type with [`Error`] as the default error
pub type Result<T, E = Error> = std::result::Result<T, E>;
