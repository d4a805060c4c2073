// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Overlay solvers (single child and stacks)

use super::{RulesSetter, RulesSolver};
use crate::geom::{Rect, Size};

/// [`RulesSolver`] for layouts where every child occupies the same box
///
/// Used by single-child containers as well as stacks: the minimum size is
/// the component-wise maximum of the children plus padding on each side.
/// With no children, the padding alone is claimed.
pub struct StackSolver {
    padding: i32,
    max: Size,
}

impl StackSolver {
    /// Construct.
    ///
    /// - `padding`: padding on each side of the shared box
    pub fn new(padding: i32) -> Self {
        StackSolver {
            padding,
            max: Size::ZERO,
        }
    }
}

impl RulesSolver for StackSolver {
    type ChildInfo = ();

    fn for_child(&mut self, _: (), min: Size) {
        self.max = self.max.max(min);
    }

    fn finish(self) -> Size {
        self.max + Size(2 * self.padding, 2 * self.padding)
    }
}

/// [`RulesSetter`] for layouts where every child occupies the same box
pub struct StackSetter {
    crect: Rect,
}

impl StackSetter {
    /// Construct.
    ///
    /// - `rect`: the container's rect
    /// - `padding`: padding on each side of the shared box
    pub fn new(rect: Rect, padding: i32) -> Self {
        StackSetter {
            crect: rect.shrink(padding),
        }
    }
}

impl RulesSetter for StackSetter {
    type ChildInfo = ();

    fn child_rect(&mut self, _: ()) -> Rect {
        self.crect
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn claim_is_max_plus_padding() {
        let mut solver = StackSolver::new(3);
        solver.for_child((), Size(10, 40));
        solver.for_child((), Size(30, 20));
        assert_eq!(solver.finish(), Size(36, 46));
        assert_eq!(StackSolver::new(3).finish(), Size(6, 6));
    }

    #[test]
    fn shared_box() {
        let mut setter = StackSetter::new(Rect::from_dimensions(0, 0, 20, 20), 2);
        assert_eq!(setter.child_rect(()), Rect::from_dimensions(2, 2, 16, 16));
    }
}
