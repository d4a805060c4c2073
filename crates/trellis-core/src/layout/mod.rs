// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Layout solvers
//!
//! Size units are pixels (`i32`); geometry is y-up (see [`crate::geom`]).
//!
//! Layout happens in two passes. The *claim* pass runs bottom-up: every
//! widget reports its minimum size, containers aggregating those of their
//! children. The *resize* pass runs top-down: a container receives its rect,
//! divides it into one box per child, places each child within its box and
//! recurses.
//!
//! ## Data types
//!
//! [`Placement`] decides where a child sits within its box: stretched over
//! it ([`Placement::Fill`]) or at minimum size against one of nine anchors.
//!
//! [`Extent`] is the fixed-or-expand sizing policy of grid rows and columns.
//!
//! ## Layout engines
//!
//! The [`RulesSolver`] and [`RulesSetter`] traits define interfaces for
//! layout engines:
//!
//! -   [`StackSolver`] and [`StackSetter`] give every child the same box;
//!     these serve single-child containers and stacks
//! -   [`RowSolver`] and [`RowSetter`] set out a row or column of children,
//!     optionally letting some children expand to fill leftover space
//! -   [`GridSolver`] and [`GridSetter`] set out children assigned to grid
//!     cells; the underlying algorithm is exposed as [`GridSpec::min_size`]
//!     and [`GridSpec::cell_rects`]

mod grid_solver;
mod placement;
mod row_solver;
mod size_types;
mod sizer;
mod stack_solver;

pub use grid_solver::{GridCellInfo, GridDimensions, GridRects, GridSetter, GridSolver, GridSpec};
pub use placement::Placement;
pub use row_solver::{RowChild, RowSetter, RowSolver};
pub use size_types::{Extent, Shares};
pub use sizer::{RulesSetter, RulesSolver};
pub use stack_solver::{StackSetter, StackSolver};
