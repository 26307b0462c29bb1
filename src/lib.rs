// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

pub mod display;
pub mod error;
pub mod grid;
pub mod layout;
mod tiling;

pub use display::GridDisplay;
pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use layout::{ColumnMajor, Layout, Order, RowMajor};
