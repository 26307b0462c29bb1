// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("Coordinate ({row}, {col}) is out of bounds for a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Flat index {index} is out of bounds for storage of length {len}")]
    FlatOutOfBounds { index: usize, len: usize },

    #[error("Block size {size} is invalid for a {rows}x{cols} grid")]
    InvalidBlockSize { size: usize, rows: usize, cols: usize },

    #[error("Block operation attempted before tiling was enabled")]
    TilingDisabled,

    #[error("Block ({block_row}, {block_col}) is out of bounds for {block_rows}x{block_cols} tiles")]
    BlockOutOfBounds {
        block_row: usize,
        block_col: usize,
        block_rows: usize,
        block_cols: usize,
    },

    #[error("Block must be {expected}x{expected}, got {rows}x{cols}")]
    BlockShape {
        expected: usize,
        rows: usize,
        cols: usize,
    },

    #[error("A {rows}x{cols} grid has more elements than fit in memory")]
    ShapeOverflow { rows: usize, cols: usize },

    #[error("Buffer of length {actual} cannot back a grid of {expected} elements")]
    BufferLength { expected: usize, actual: usize },
}

pub type GridResult<T = ()> = Result<T, GridError>;
