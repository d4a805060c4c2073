// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Child placement within an allocated box

use crate::ConfigError;
use crate::geom::{Rect, Size};
use std::fmt;
use std::str::FromStr;

/// How a child is positioned within the box its parent allocates to it
///
/// The parent's packing algorithm decides the *box*; the placement decides
/// which part of that box the child occupies:
///
/// -   [`Placement::Fill`] stretches the child over the whole box
/// -   every other variant keeps the child at its minimum size and aligns
///     the child's named anchor with the box's anchor of the same name
///
/// Placements may also be parsed from their snake-case keys:
/// ```
/// # use trellis_core::layout::Placement;
/// let p: Placement = "bottom_center".parse().unwrap();
/// assert_eq!(p, Placement::BottomCenter);
/// assert!("middle".parse::<Placement>().is_err());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Placement {
    /// Stretch to the full box
    #[default]
    Fill,
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Placement {
    /// All placements, in key order
    pub const ALL: [Placement; 10] = [
        Placement::Fill,
        Placement::TopLeft,
        Placement::TopCenter,
        Placement::TopRight,
        Placement::CenterLeft,
        Placement::Center,
        Placement::CenterRight,
        Placement::BottomLeft,
        Placement::BottomCenter,
        Placement::BottomRight,
    ];

    /// The key used when parsing / printing
    pub fn key(self) -> &'static str {
        match self {
            Placement::Fill => "fill",
            Placement::TopLeft => "top_left",
            Placement::TopCenter => "top_center",
            Placement::TopRight => "top_right",
            Placement::CenterLeft => "center_left",
            Placement::Center => "center",
            Placement::CenterRight => "center_right",
            Placement::BottomLeft => "bottom_left",
            Placement::BottomCenter => "bottom_center",
            Placement::BottomRight => "bottom_right",
        }
    }

    /// Compute the rect of a child with minimum size `min` inside `bounds`
    ///
    /// This does not resize the child: the caller must still pass the result
    /// on to the child.
    pub fn place(self, min: Size, bounds: Rect) -> Rect {
        let mut rect = Rect::new(bounds.pos, min);
        match self {
            Placement::Fill => return bounds,
            Placement::TopLeft => rect.set_top_left(bounds.top_left()),
            Placement::TopCenter => rect.set_top_center(bounds.top_center()),
            Placement::TopRight => rect.set_top_right(bounds.top_right()),
            Placement::CenterLeft => rect.set_center_left(bounds.center_left()),
            Placement::Center => rect.set_center(bounds.center()),
            Placement::CenterRight => rect.set_center_right(bounds.center_right()),
            Placement::BottomLeft => rect.set_bottom_left(bounds.bottom_left()),
            Placement::BottomCenter => rect.set_bottom_center(bounds.bottom_center()),
            Placement::BottomRight => rect.set_bottom_right(bounds.bottom_right()),
        }
        rect
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Placement {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Placement::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| ConfigError::UnknownPlacement(s.to_string()))
    }
}

impl TryFrom<String> for Placement {
    type Error = ConfigError;

    #[inline]
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Placement> for String {
    #[inline]
    fn from(p: Placement) -> String {
        p.key().to_string()
    }
}
