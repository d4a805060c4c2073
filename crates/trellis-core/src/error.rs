// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Configuration errors

use thiserror::Error;

/// Invalid layout configuration
///
/// These errors are reported immediately to the caller. Whatever operation
/// produced them has not committed any geometry or metadata.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A placement key other than `fill` or one of the nine anchors
    #[error("unknown placement: {0:?}")]
    UnknownPlacement(String),
    /// A row height / column width which is neither a non-negative integer
    /// nor `expand`
    #[error("illegal row height / col width: {0:?}")]
    UnknownExtent(String),
    /// An edge orientation other than `top`, `bottom`, `left` or `right`
    #[error("unknown edge orientation: {0:?}")]
    UnknownEdge(String),
    /// A corner orientation other than `top left`, `top right`,
    /// `bottom left` or `bottom right`
    #[error("unknown corner orientation: {0:?}")]
    UnknownCorner(String),
    /// A frame's corner decoration was set before its edge decoration
    #[error("Frame::set_corner cannot be called until Frame::set_edge has been")]
    CornerBeforeEdge,
}
