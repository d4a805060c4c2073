// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Geometry data types
//!
//! [`Coord`], [`Size`] and [`Offset`] are all 2D integer (`i32`) types,
//! representing positions, sizes and panning deltas respectively.
//!
//! All types use a **y-up** convention: the origin is at the bottom-left and
//! `top == bottom + height`. A [`Rect`] is stored as its bottom-left corner
//! plus a size and exposes nine named anchor points.

use crate::cast::*;
use crate::dir::Directional;
use std::cmp::{Ordering, PartialOrd};

macro_rules! impl_common {
    ($T:ty) => {
        impl $T {
            /// The constant `(0, 0)`
            pub const ZERO: Self = Self(0, 0);

            /// Return the minimum, componentwise
            #[inline]
            #[must_use = "method does not modify self but returns a new value"]
            pub fn min(self, other: Self) -> Self {
                Self(self.0.min(other.0), self.1.min(other.1))
            }

            /// Return the maximum, componentwise
            #[inline]
            #[must_use = "method does not modify self but returns a new value"]
            pub fn max(self, other: Self) -> Self {
                Self(self.0.max(other.0), self.1.max(other.1))
            }

            /// Return the transpose (swap x and y values)
            #[inline]
            #[must_use = "method does not modify self but returns a new value"]
            pub fn transpose(self) -> Self {
                Self(self.1, self.0)
            }

            /// Extract one component, based on a direction
            ///
            /// This merely extracts the horizontal or vertical component.
            #[inline]
            pub fn extract<D: Directional>(self, dir: D) -> i32 {
                match dir.is_vertical() {
                    false => self.0,
                    true => self.1,
                }
            }

            /// Set one component of self, based on a direction
            #[inline]
            pub fn set_component<D: Directional>(&mut self, dir: D, value: i32) {
                match dir.is_vertical() {
                    false => self.0 = value,
                    true => self.1 = value,
                }
            }
        }

        impl PartialOrd for $T {
            fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
                if self == rhs {
                    Some(Ordering::Equal)
                } else if self.0 <= rhs.0 && self.1 <= rhs.1 {
                    Some(Ordering::Less)
                } else if self.0 >= rhs.0 && self.1 >= rhs.1 {
                    Some(Ordering::Greater)
                } else {
                    None
                }
            }

            #[inline]
            fn le(&self, rhs: &Self) -> bool {
                self.0 <= rhs.0 && self.1 <= rhs.1
            }

            #[inline]
            fn ge(&self, rhs: &Self) -> bool {
                self.0 >= rhs.0 && self.1 >= rhs.1
            }
        }

        impl From<(i32, i32)> for $T {
            #[inline]
            fn from(v: (i32, i32)) -> Self {
                Self(v.0, v.1)
            }
        }

        impl From<$T> for (i32, i32) {
            #[inline]
            fn from(v: $T) -> Self {
                (v.0, v.1)
            }
        }
    };
}

/// A 2D coordinate, also known as a point
///
/// A coordinate (or point) is an absolute position. One cannot add a point to
/// a point. The difference between two points is an [`Offset`].
///
/// `Coord` implements [`PartialOrd`] such that the comparison must be true of
/// all components. `Coord` does not implement [`Ord`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Coord(pub i32, pub i32);

impl_common!(Coord);

impl Coord {
    /// Construct
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self(x, y)
    }
}

impl std::ops::Sub for Coord {
    type Output = Offset;

    #[inline]
    fn sub(self, other: Self) -> Offset {
        Offset(self.0 - other.0, self.1 - other.1)
    }
}

impl std::ops::Add<Offset> for Coord {
    type Output = Self;

    #[inline]
    fn add(self, other: Offset) -> Self {
        Coord(self.0 + other.0, self.1 + other.1)
    }
}
impl std::ops::AddAssign<Offset> for Coord {
    #[inline]
    fn add_assign(&mut self, rhs: Offset) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}
impl std::ops::Sub<Offset> for Coord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Offset) -> Self {
        Coord(self.0 - other.0, self.1 - other.1)
    }
}
impl std::ops::SubAssign<Offset> for Coord {
    #[inline]
    fn sub_assign(&mut self, rhs: Offset) {
        self.0 -= rhs.0;
        self.1 -= rhs.1;
    }
}

impl std::ops::Add<Size> for Coord {
    type Output = Self;

    #[inline]
    fn add(self, other: Size) -> Self {
        Coord(self.0 + other.0, self.1 + other.1)
    }
}

/// A 2D size, also known as an extent
///
/// A `Size` is expected to be non-negative; [`Size::new`] checks this, but
/// only in debug mode (similar to overflow checks on integers). Layout passes
/// may still produce negative sizes in degenerate cases (content which does
/// not fit); these are tolerated rather than treated as errors.
///
/// Subtraction is defined to be saturating subtraction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Size(pub i32, pub i32);

impl_common!(Size);

impl Size {
    /// Construct
    ///
    /// In debug mode, this asserts that components are non-negative.
    #[inline]
    pub fn new(w: i32, h: i32) -> Self {
        debug_assert!(w >= 0 && h >= 0, "Size::new({w}, {h}): negative value");
        Self(w, h)
    }

    /// Construct, using the same value on all axes
    #[inline]
    pub fn splat(n: i32) -> Self {
        debug_assert!(n >= 0, "Size::splat({n}): negative value");
        Self(n, n)
    }

    /// Width
    #[inline]
    pub fn width(self) -> i32 {
        self.0
    }

    /// Height
    #[inline]
    pub fn height(self) -> i32 {
        self.1
    }

    /// True if either component is negative
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.0 < 0 || self.1 < 0
    }
}

impl std::ops::Add for Size {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Size(self.0 + other.0, self.1 + other.1)
    }
}
impl std::ops::AddAssign for Size {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}

/// Subtract a `Size` from a `Size`
///
/// This is saturating subtraction: `Size::ZERO - Size::splat(6) == Size::ZERO`.
impl std::ops::Sub for Size {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Size(self.0 - rhs.0, self.1 - rhs.1).max(Size::ZERO)
    }
}

impl std::ops::Mul<i32> for Size {
    type Output = Self;

    #[inline]
    fn mul(self, x: i32) -> Self {
        debug_assert!(x >= 0);
        Size(self.0 * x, self.1 * x)
    }
}
impl std::ops::Div<i32> for Size {
    type Output = Self;

    #[inline]
    fn div(self, x: i32) -> Self {
        debug_assert!(x > 0);
        Size(self.0 / x, self.1 / x)
    }
}

/// A `(x, y)` offset, also known as a **vector**
///
/// This is a relative position. It can be added to or subtracted from a
/// [`Coord`], and it can be added to or subtracted from itself. It can be
/// negative. A viewport's panning vector is an `Offset`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Offset(pub i32, pub i32);

impl_common!(Offset);

impl Offset {
    /// Construct
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self(x, y)
    }

    /// Construct, using the same value on all axes
    #[inline]
    pub const fn splat(n: i32) -> Self {
        Self(n, n)
    }
}

impl std::ops::Neg for Offset {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Offset(-self.0, -self.1)
    }
}

impl std::ops::Add for Offset {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Offset(self.0 + other.0, self.1 + other.1)
    }
}
impl std::ops::AddAssign for Offset {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}

impl std::ops::Sub for Offset {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Offset(self.0 - other.0, self.1 - other.1)
    }
}
impl std::ops::SubAssign for Offset {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
        self.1 -= rhs.1;
    }
}

impl std::ops::Mul<i32> for Offset {
    type Output = Self;

    #[inline]
    fn mul(self, x: i32) -> Self {
        Offset(self.0 * x, self.1 * x)
    }
}

impl Conv<Coord> for Offset {
    #[inline]
    fn try_conv(v: Coord) -> Result<Self> {
        Ok(Self(v.0, v.1))
    }
}

impl Conv<Size> for Offset {
    #[inline]
    fn try_conv(v: Size) -> Result<Self> {
        Ok(Self(v.0, v.1))
    }
}

/// Convert an [`Offset`] into a [`Coord`]
impl Conv<Offset> for Coord {
    #[inline]
    fn try_conv(v: Offset) -> Result<Self> {
        Ok(Self(v.0, v.1))
    }
}

macro_rules! anchors {
    ($($(#[$doc:meta])* $get:ident / $set:ident: ($x:ident, $y:ident);)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $get(&self) -> Coord {
                Coord(self.$x(), self.$y())
            }

            /// Move the rect (keeping its size) so that this anchor lies at `c`
            #[inline]
            pub fn $set(&mut self, c: Coord) {
                let here = self.$get();
                self.pos += c - here;
            }
        )*
    };
}

/// An axis-aligned rectangular region
///
/// The region is defined by its bottom-left corner `pos` and an extent
/// `size` (y-up). It is empty unless `size` is positive on both axes.
///
/// Anchor setters move the rect while keeping its size fixed. This is what
/// placement relies on: once a child's size is known, setting any one anchor
/// determines all others.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub pos: Coord,
    pub size: Size,
}

impl Rect {
    /// The empty rect (all fields zero)
    pub const ZERO: Self = Self::new(Coord::ZERO, Size::ZERO);

    /// Construct from a bottom-left [`Coord`] and [`Size`]
    #[inline]
    pub const fn new(pos: Coord, size: Size) -> Self {
        Rect { pos, size }
    }

    /// Construct a rect of the given size at the origin
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Rect::new(Coord::ZERO, size)
    }

    /// Construct from `left`, `bottom`, `width`, `height`
    #[inline]
    pub const fn from_dimensions(left: i32, bottom: i32, width: i32, height: i32) -> Self {
        Rect::new(Coord(left, bottom), Size(width, height))
    }

    /// Width
    #[inline]
    pub fn width(&self) -> i32 {
        self.size.0
    }

    /// Height
    #[inline]
    pub fn height(&self) -> i32 {
        self.size.1
    }

    /// Left edge (minimum x)
    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.0
    }

    /// Right edge (maximum x)
    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.0 + self.size.0
    }

    /// Bottom edge (minimum y)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.1
    }

    /// Top edge (maximum y)
    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.1 + self.size.1
    }

    /// Horizontal center
    ///
    /// Rounds towards the left edge when the width is odd.
    #[inline]
    pub fn center_x(&self) -> i32 {
        self.pos.0 + self.size.0 / 2
    }

    /// Vertical center
    ///
    /// Rounds towards the bottom edge when the height is odd.
    #[inline]
    pub fn center_y(&self) -> i32 {
        self.pos.1 + self.size.1 / 2
    }

    anchors! {
        /// The top-left corner
        top_left / set_top_left: (left, top);
        /// The middle of the top edge
        top_center / set_top_center: (center_x, top);
        /// The top-right corner
        top_right / set_top_right: (right, top);
        /// The middle of the left edge
        center_left / set_center_left: (left, center_y);
        /// The geometric center
        center / set_center: (center_x, center_y);
        /// The middle of the right edge
        center_right / set_center_right: (right, center_y);
        /// The bottom-left corner (equal to `pos`)
        bottom_left / set_bottom_left: (left, bottom);
        /// The middle of the bottom edge
        bottom_center / set_bottom_center: (center_x, bottom);
        /// The bottom-right corner
        bottom_right / set_bottom_right: (right, bottom);
    }

    /// Check whether the given coordinate is contained within this rect
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.0 >= self.left() && c.0 < self.right() && c.1 >= self.bottom() && c.1 < self.top()
    }

    /// Check whether `other` lies entirely within this rect
    ///
    /// Edges may coincide.
    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.bottom() >= self.bottom()
            && other.top() <= self.top()
    }

    /// Shrink self in all directions by the given `n`
    ///
    /// The size saturates at zero if `2 * n` exceeds either dimension.
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn shrink(&self, n: i32) -> Rect {
        let pos = self.pos + Offset::splat(n);
        let size = self.size - Size(n + n, n + n);
        Rect { pos, size }
    }

    /// Expand self in all directions by the given `n`
    ///
    /// In debug mode this asserts that `n` is non-negative.
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn expand(&self, n: i32) -> Rect {
        debug_assert!(n >= 0);
        let pos = self.pos - Offset::splat(n);
        let size = self.size + Size(n + n, n + n);
        Rect { pos, size }
    }
}

impl From<Size> for Rect {
    #[inline]
    fn from(size: Size) -> Self {
        Rect::from_size(size)
    }
}

impl std::ops::Add<Offset> for Rect {
    type Output = Self;

    #[inline]
    fn add(self, offset: Offset) -> Self {
        Rect::new(self.pos + offset, self.size)
    }
}
impl std::ops::AddAssign<Offset> for Rect {
    #[inline]
    fn add_assign(&mut self, offset: Offset) {
        self.pos += offset;
    }
}

impl std::ops::Sub<Offset> for Rect {
    type Output = Self;

    #[inline]
    fn sub(self, offset: Offset) -> Self {
        Rect::new(self.pos - offset, self.size)
    }
}
