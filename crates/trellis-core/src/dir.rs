// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Direction types

use std::fmt;

/// Trait over directional types
///
/// This trait has a variable implementation, [`Direction`], and two fixed
/// implementations, [`Right`] and [`Down`].
///
/// Using a generic `<D: Directional>` allows compile-time substitution of
/// direction information when parametrised with fixed implementations.
pub trait Directional: Copy + Sized + fmt::Debug + 'static {
    /// Direction flipped over diagonal (i.e. Down ↔ Right)
    type Flipped: Directional;

    /// Flip over diagonal (i.e. Down ↔ Right)
    #[must_use = "method does not modify self but returns a new value"]
    fn flipped(self) -> Self::Flipped;

    /// Convert to the [`Direction`] enum
    #[must_use = "method does not modify self but returns a new value"]
    fn as_direction(self) -> Direction;

    /// Down
    #[inline]
    fn is_vertical(self) -> bool {
        self.as_direction() == Direction::Down
    }

    /// Right
    #[inline]
    fn is_horizontal(self) -> bool {
        self.as_direction() == Direction::Right
    }
}

macro_rules! fixed {
    ($d:ident, $df:ident) => {
        /// Zero-sized instantiation of [`Directional`]
        #[derive(Copy, Clone, Default, Debug)]
        pub struct $d;
        impl Directional for $d {
            type Flipped = $df;
            #[inline]
            fn flipped(self) -> Self::Flipped {
                $df
            }
            #[inline]
            fn as_direction(self) -> Direction {
                Direction::$d
            }
        }
    };
}
fixed!(Right, Down);
fixed!(Down, Right);

/// Packing directions
///
/// Rows are packed left-to-right ([`Direction::Right`]); columns are packed
/// top-to-bottom ([`Direction::Down`]). Since geometry is y-up, packing
/// downwards means *decreasing* y.
///
/// A default direction is provided, though somewhat arbitrary: `Right`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Direction {
    #[default]
    Right = 0,
    Down = 1,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", match self {
            Direction::Right => "Right",
            Direction::Down => "Down",
        })
    }
}

impl Directional for Direction {
    type Flipped = Self;

    fn flipped(self) -> Self::Flipped {
        match self {
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Right,
        }
    }

    #[inline]
    fn as_direction(self) -> Direction {
        self
    }
}
