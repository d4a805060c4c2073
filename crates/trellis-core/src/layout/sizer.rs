// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Layout solver traits

use crate::geom::{Rect, Size};

/// A minimum-size solver for layouts (the claim pass)
///
/// A solver is constructed by the container, fed the minimum size of each
/// child via [`RulesSolver::for_child`], then consumed by
/// [`RulesSolver::finish`] to yield the container's own minimum size
/// (padding included).
pub trait RulesSolver {
    /// Type required by [`RulesSolver::for_child`] (see implementation documentation)
    type ChildInfo;

    /// Called once for each child. For most layouts the order is important.
    fn for_child(&mut self, child_info: Self::ChildInfo, min: Size);

    /// Called at the end to output the minimum size
    fn finish(self) -> Size;
}

/// Resolves child boxes within a parent rect (the resize pass)
///
/// The boxes returned are those allocated by the packing algorithm. The
/// container still applies each child's [`Placement`](super::Placement)
/// before resizing the child.
pub trait RulesSetter {
    /// Type required by [`RulesSetter::child_rect`] (see implementation documentation)
    type ChildInfo;

    /// Called once for each child. The order is unimportant.
    fn child_rect(&mut self, child_info: Self::ChildInfo) -> Rect;
}
