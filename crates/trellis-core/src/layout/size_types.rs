// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Types used by size rules

use crate::ConfigError;
use crate::cast::Conv;
use std::fmt;
use std::str::FromStr;

/// Row height / column width policy of a grid
///
/// Parsed from either a non-negative integer or the token `expand`:
/// ```
/// # use trellis_core::layout::Extent;
/// assert_eq!("12".parse(), Ok(Extent::Fixed(12)));
/// assert_eq!("expand".parse(), Ok(Extent::Expand));
/// assert!("-1".parse::<Extent>().is_err());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Extent {
    /// At least this many pixels
    ///
    /// The row/column still grows to fit its largest cell. Use `Fixed(0)` for
    /// "as small as the content allows".
    Fixed(i32),
    /// Share leftover space evenly with the other expandable rows/columns
    #[default]
    Expand,
}

impl Extent {
    /// True for [`Extent::Expand`]
    #[inline]
    pub fn is_expand(self) -> bool {
        self == Extent::Expand
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Extent::Fixed(n) => write!(f, "{n}"),
            Extent::Expand => f.write_str("expand"),
        }
    }
}

impl FromStr for Extent {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "expand" {
            return Ok(Extent::Expand);
        }
        match s.parse::<i32>() {
            Ok(n) if n >= 0 => Ok(Extent::Fixed(n)),
            _ => Err(ConfigError::UnknownExtent(s.to_string())),
        }
    }
}

impl TryFrom<String> for Extent {
    type Error = ConfigError;

    #[inline]
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Extent> for String {
    #[inline]
    fn from(e: Extent) -> String {
        e.to_string()
    }
}

/// A negative size is replaced with zero
impl From<i32> for Extent {
    fn from(n: i32) -> Self {
        if n < 0 {
            log::warn!("Extent: negative fixed size {n} replaced with 0");
        }
        Extent::Fixed(n.max(0))
    }
}

/// Equal shares of `total` over `n` parts
///
/// Yields `n` values summing exactly to `total`. Each value is
/// `total.div_euclid(n)`, with the first `total.rem_euclid(n)` values one
/// larger. `total` may be negative (degenerate: content does not fit).
#[derive(Clone, Debug)]
pub struct Shares {
    base: i32,
    extra: usize,
    index: usize,
    len: usize,
}

impl Shares {
    /// Split `total` into `n` shares
    pub fn new(total: i32, n: usize) -> Self {
        if n == 0 {
            return Shares {
                base: 0,
                extra: 0,
                index: 0,
                len: 0,
            };
        }
        let d = i32::conv(n);
        Shares {
            base: total.div_euclid(d),
            extra: usize::conv(total.rem_euclid(d)),
            index: 0,
            len: n,
        }
    }

    /// The smallest share
    #[inline]
    pub fn base(&self) -> i32 {
        self.base
    }
}

impl Iterator for Shares {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.index >= self.len {
            return None;
        }
        let share = self.base + i32::from(self.index < self.extra);
        self.index += 1;
        Some(share)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Shares {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn shares_sum_exactly() {
        for total in [-7, -1, 0, 1, 10, 11, 199] {
            for n in 1..5 {
                let v: Vec<i32> = Shares::new(total, n).collect();
                assert_eq!(v.len(), n);
                assert_eq!(v.iter().sum::<i32>(), total, "{total} / {n}");
                let (lo, hi) = (v.iter().min().unwrap(), v.iter().max().unwrap());
                assert!(hi - lo <= 1);
            }
        }
        assert_eq!(Shares::new(10, 0).count(), 0);
    }

    #[test]
    fn parse_extent() {
        assert_eq!(
            "wide".parse::<Extent>(),
            Err(ConfigError::UnknownExtent("wide".into()))
        );
        assert_eq!(Extent::Fixed(3).to_string(), "3");
        assert_eq!(Extent::from(7), Extent::Fixed(7));
        assert_eq!(Extent::from(-5), Extent::Fixed(0));
    }
}
