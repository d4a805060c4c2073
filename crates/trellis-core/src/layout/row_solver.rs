// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Row / column solver

use log::debug;
use smallvec::SmallVec;

use super::{RulesSetter, RulesSolver, Shares};
use crate::cast::Conv;
use crate::dir::Directional;
use crate::geom::{Coord, Rect, Size};

/// Per-child input to [`RowSetter`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowChild {
    /// The child's claimed minimum size
    pub min: Size,
    /// Whether the child's slot grows to share leftover space
    pub expand: bool,
}

impl RowChild {
    /// Construct
    #[inline]
    pub fn new(min: Size, expand: bool) -> Self {
        RowChild { min, expand }
    }
}

/// A [`RulesSolver`] for rows (and, without loss of generality, for columns).
///
/// The primary axis is the packing direction (width of a row, height of a
/// column):
///
/// -   `min_primary = Σ child_primary + padding × (len + 1)`
/// -   `min_secondary = max(child_secondary) + 2 × padding`
///
/// An empty row still reserves its outer padding.
pub struct RowSolver<D: Directional> {
    direction: D,
    padding: i32,
    len: i32,
    primary: i32,
    secondary: i32,
}

impl<D: Directional> RowSolver<D> {
    /// Construct.
    ///
    /// Argument order is consistent with other [`RulesSolver`]s.
    ///
    /// - `direction`: packing direction
    /// - `padding`: padding around and between children
    pub fn new(direction: D, padding: i32) -> Self {
        RowSolver {
            direction,
            padding,
            len: 0,
            primary: 0,
            secondary: 0,
        }
    }
}

impl<D: Directional> RulesSolver for RowSolver<D> {
    type ChildInfo = ();

    fn for_child(&mut self, _: (), min: Size) {
        self.len += 1;
        self.primary += min.extract(self.direction);
        self.secondary = self.secondary.max(min.extract(self.direction.flipped()));
    }

    fn finish(self) -> Size {
        let mut size = Size::ZERO;
        let primary = self.primary + self.padding * (self.len + 1);
        let secondary = self.secondary + 2 * self.padding;
        size.set_component(self.direction, primary);
        size.set_component(self.direction.flipped(), secondary);
        size
    }
}

/// A [`RulesSetter`] for rows (and, without loss of generality, for columns).
///
/// Slots are laid out from the padded leading edge: left-to-right for rows,
/// top-to-bottom for columns. Every slot spans the full secondary extent
/// (less padding). Fixed children get exactly their minimum primary extent;
/// each expandable child gets its minimum plus an equal share of
///
/// `leftover = rect_primary − Σ child_primary − padding × (len + 1)`.
///
/// Negative leftover (children do not fit) yields overlapping or negative
/// slots; this is tolerated.
pub struct RowSetter<D: Directional> {
    direction: D,
    // (offset along primary axis, primary length) per child
    slots: SmallVec<[(i32, i32); 16]>,
    // secondary axis: (start coordinate, length)
    cross: (i32, i32),
}

impl<D: Directional> RowSetter<D> {
    /// Construct
    ///
    /// Argument order is consistent with other [`RulesSetter`]s.
    ///
    /// -   `rect`: the [`Rect`] within which to position children
    /// -   `(direction, padding)`: packing direction and padding
    /// -   `children`: minimum size and expand flag of each child, in order
    pub fn new(rect: Rect, (direction, padding): (D, i32), children: &[RowChild]) -> Self {
        let len = i32::conv(children.len());
        let total_min: i32 = children.iter().map(|c| c.min.extract(direction)).sum();
        let leftover = rect.size.extract(direction) - total_min - padding * (len + 1);
        let num_expand = children.iter().filter(|c| c.expand).count();
        if leftover < 0 {
            debug!(
                "RowSetter: children do not fit (leftover {leftover}) in {:?}",
                rect.size
            );
        }
        let mut shares = Shares::new(leftover, num_expand);

        let mut slots = SmallVec::with_capacity(children.len());
        let horizontal = direction.is_horizontal();
        let mut cursor = match horizontal {
            true => rect.left() + padding,
            false => rect.top() - padding,
        };
        for child in children {
            let mut length = child.min.extract(direction);
            if child.expand {
                length += shares.next().unwrap_or(0);
            }
            if horizontal {
                slots.push((cursor, length));
                cursor += length + padding;
            } else {
                cursor -= length;
                slots.push((cursor, length));
                cursor -= padding;
            }
        }

        let cross_len = rect.size.extract(direction.flipped()) - 2 * padding;
        let cross = match horizontal {
            true => (rect.top() - padding - cross_len, cross_len),
            false => (rect.left() + padding, cross_len),
        };

        RowSetter {
            direction,
            slots,
            cross,
        }
    }
}

impl<D: Directional> RulesSetter for RowSetter<D> {
    type ChildInfo = usize;

    fn child_rect(&mut self, index: usize) -> Rect {
        let (pos, len) = self.slots[index];
        let (cross_pos, cross_len) = self.cross;
        if self.direction.is_horizontal() {
            Rect::new(Coord(pos, cross_pos), Size(len, cross_len))
        } else {
            Rect::new(Coord(cross_pos, pos), Size(cross_len, len))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dir::{Down, Right};

    fn solve<D: Directional>(dir: D, padding: i32, mins: &[Size]) -> Size {
        let mut solver = RowSolver::new(dir, padding);
        for min in mins {
            solver.for_child((), *min);
        }
        solver.finish()
    }

    #[test]
    fn claim_sums_primary() {
        let mins = [Size(20, 5), Size(30, 15), Size(40, 10)];
        assert_eq!(solve(Right, 5, &mins), Size(110, 25));
        assert_eq!(solve(Down, 5, &mins.map(Size::transpose)), Size(25, 110));
    }

    #[test]
    fn empty_row_reserves_padding() {
        assert_eq!(solve(Right, 4, &[]), Size(4, 8));
        assert_eq!(solve(Down, 4, &[]), Size(8, 4));
    }

    #[test]
    fn expand_takes_leftover() {
        let children = [
            RowChild::new(Size(30, 10), false),
            RowChild::new(Size(20, 10), true),
            RowChild::new(Size(30, 10), false),
        ];
        let rect = Rect::from_dimensions(0, 0, 200, 10);
        let mut setter = RowSetter::new(rect, (Right, 0), &children);
        assert_eq!(setter.child_rect(0), Rect::from_dimensions(0, 0, 30, 10));
        assert_eq!(setter.child_rect(1), Rect::from_dimensions(30, 0, 140, 10));
        assert_eq!(setter.child_rect(2), Rect::from_dimensions(170, 0, 30, 10));
    }

    #[test]
    fn column_runs_top_down() {
        let children = [
            RowChild::new(Size(10, 20), false),
            RowChild::new(Size(10, 30), false),
        ];
        let rect = Rect::from_dimensions(0, 0, 50, 100);
        let mut setter = RowSetter::new(rect, (Down, 5), &children);
        assert_eq!(setter.child_rect(0), Rect::from_dimensions(5, 75, 40, 20));
        assert_eq!(setter.child_rect(1), Rect::from_dimensions(5, 40, 40, 30));
    }

    #[test]
    fn remainder_spread_over_expanders() {
        let children = [
            RowChild::new(Size(0, 0), true),
            RowChild::new(Size(0, 0), true),
            RowChild::new(Size(0, 0), true),
        ];
        let rect = Rect::from_dimensions(0, 0, 10, 1);
        let mut setter = RowSetter::new(rect, (Right, 0), &children);
        let widths: Vec<i32> = (0..3).map(|i| setter.child_rect(i).width()).collect();
        assert_eq!(widths, vec![4, 3, 3]);
        assert_eq!(setter.child_rect(2).right(), 10);
    }

    #[test]
    fn overfull_row_is_tolerated() {
        let children = [
            RowChild::new(Size(50, 10), false),
            RowChild::new(Size(10, 10), true),
        ];
        let rect = Rect::from_dimensions(0, 0, 40, 10);
        let mut setter = RowSetter::new(rect, (Right, 0), &children);
        assert_eq!(setter.child_rect(1).width(), -10);
    }
}
