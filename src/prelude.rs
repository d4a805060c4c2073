// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Trellis prelude
//!
//! This module allows convenient importation of common unambiguous items:
//! ```
//! use trellis::prelude::*;
//! ```

#[doc(no_inline)]
pub use trellis_core::config::Config;
#[doc(no_inline)]
pub use trellis_core::geom::{Coord, Offset, Rect, Size};
#[doc(no_inline)]
pub use trellis_core::layout::{Extent, Placement};
#[doc(no_inline)]
pub use trellis_core::ConfigError;
#[doc(no_inline)]
pub use trellis_widgets::{Leaf, Spacer, Tree, WidgetId, WidgetKind};
