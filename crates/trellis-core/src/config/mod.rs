// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Layout configuration
//!
//! [`Config`] holds the defaults adopted by containers when they are created
//! through a widget tree. With the `serde` feature it may be read from / written
//! to JSON or TOML (see [`Format`]).

mod format;

pub use format::{Format, FormatError};

use crate::layout::{Extent, Placement};

/// Layout defaults
///
/// Any field missing from a serialised config takes its default value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Padding of newly created containers
    pub padding: i32,
    /// Default child placement of newly created containers
    pub placement: Placement,
    /// Default row height of newly created grids
    pub row_height: Extent,
    /// Default column width of newly created grids
    pub col_width: Extent,
    /// Viewport panning speed, in pixels per unit direction per second
    pub sensitivity: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            padding: 0,
            placement: Placement::Fill,
            row_height: Extent::Expand,
            col_width: Extent::Expand,
            sensitivity: 3.0,
        }
    }
}

#[cfg(all(test, feature = "json", feature = "toml"))]
mod test {
    use super::*;

    #[test]
    fn json_partial() {
        let config: Config = Format::Json
            .read_str(r#"{ "padding": 4, "placement": "center", "col_width": "12" }"#)
            .unwrap();
        assert_eq!(config.padding, 4);
        assert_eq!(config.placement, Placement::Center);
        assert_eq!(config.col_width, Extent::Fixed(12));
        assert_eq!(config.row_height, Extent::Expand);
    }

    #[test]
    fn json_bad_placement() {
        let result: Result<Config, _> = Format::Json.read_str(r#"{ "placement": "middle" }"#);
        assert!(matches!(result, Err(FormatError::Json(_))));
    }

    #[test]
    fn toml_round_trip() {
        let config = Config {
            padding: 2,
            placement: Placement::TopRight,
            row_height: Extent::Fixed(0),
            col_width: Extent::Expand,
            sensitivity: 1.5,
        };
        let text = Format::Toml.write_string(&config).unwrap();
        let back: Config = Format::Toml.read_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
