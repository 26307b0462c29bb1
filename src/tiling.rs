// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Square block tiling of a [`Grid`].
//!
//! With a block size `b` enabled, a `rows`x`cols` grid is treated as a
//! `(rows / b)`x`(cols / b)` array of tiles. Tile `(I, J)` covers rows `I*b..(I+1)*b` and
//! columns `J*b..(J+1)*b`. Tiles are addressed logically through the grid's layout, so
//! row-major and column-major grids agree on what a tile contains.

use itertools::iproduct;
use tracing::{debug, trace};

use crate::error::GridError::*;
use crate::error::GridResult;
use crate::grid::Grid;
use crate::layout::Layout;

impl<T, L: Layout> Grid<T, L> {
    /// The current block size, or [`None`] if tiling is not enabled
    pub fn block_size(&self) -> Option<usize> {
        self.block_size
    }

    /// Number of tile rows, if tiling is enabled
    pub fn block_rows(&self) -> Option<usize> {
        Some(self.rows / self.block_size?)
    }

    /// Number of tile columns, if tiling is enabled
    pub fn block_cols(&self) -> Option<usize> {
        Some(self.cols / self.block_size?)
    }

    /// Partition the grid into `size`x`size` tiles.
    ///
    /// Fails unless `size > 1`, `size <= min(rows, cols)`, and `size` evenly divides both
    /// dimensions. There are no ragged edge tiles.
    pub fn enable_tiling(&mut self, size: usize) -> GridResult {
        let valid = size > 1
            && size <= self.rows.min(self.cols)
            && self.rows % size == 0
            && self.cols % size == 0;

        if !valid {
            return Err(InvalidBlockSize {
                size,
                rows: self.rows,
                cols: self.cols,
            });
        }

        debug!(size, rows = self.rows, cols = self.cols, "enabled tiling");
        self.block_size = Some(size);
        Ok(())
    }

    pub fn disable_tiling(&mut self) {
        if self.block_size.take().is_some() {
            debug!("disabled tiling");
        }
    }

    /// Check that tiling is enabled and the tile index is in range, returning the block size
    fn check_tile(&self, block_row: usize, block_col: usize) -> GridResult<usize> {
        let size = self.block_size.ok_or(TilingDisabled)?;
        let (block_rows, block_cols) = (self.rows / size, self.cols / size);

        if block_row >= block_rows || block_col >= block_cols {
            return Err(BlockOutOfBounds {
                block_row,
                block_col,
                block_rows,
                block_cols,
            });
        }

        Ok(size)
    }

    /// [`Grid::check_tile`], plus the shape of the companion block grid
    fn check_block(
        &self,
        block_row: usize,
        block_col: usize,
        other_rows: usize,
        other_cols: usize,
    ) -> GridResult<usize> {
        let size = self.check_tile(block_row, block_col)?;

        if other_rows != size || other_cols != size {
            return Err(BlockShape {
                expected: size,
                rows: other_rows,
                cols: other_cols,
            });
        }

        Ok(size)
    }

    /// Storage offset of element `(i, j)` within tile `(block_row, block_col)`
    #[inline]
    fn tile_offset(
        &self,
        size: usize,
        block_row: usize,
        block_col: usize,
        i: usize,
        j: usize,
    ) -> usize {
        L::index(
            block_row * size + i,
            block_col * size + j,
            self.rows,
            self.cols,
        )
    }
}

impl<T: Clone, L: Layout> Grid<T, L> {
    /// Copy tile `(block_row, block_col)` into `block`, which must be exactly
    /// `block_size`x`block_size`. The source grid is not modified.
    pub fn get_block(&self, block_row: usize, block_col: usize, block: &mut Self) -> GridResult {
        let size = self.check_block(block_row, block_col, block.rows, block.cols)?;
        trace!(block_row, block_col, size, "get block");

        for (i, j) in iproduct!(0..size, 0..size) {
            let src = self.tile_offset(size, block_row, block_col, i, j);
            block.data[L::index(i, j, size, size)].clone_from(&self.data[src]);
        }
        Ok(())
    }

    /// Overwrite tile `(block_row, block_col)` with the contents of `block`, which must be
    /// exactly `block_size`x`block_size`. Elements outside the tile are untouched.
    pub fn set_block(&mut self, block_row: usize, block_col: usize, block: &Self) -> GridResult {
        let size = self.check_block(block_row, block_col, block.rows, block.cols)?;
        trace!(block_row, block_col, size, "set block");

        for (i, j) in iproduct!(0..size, 0..size) {
            let dst = self.tile_offset(size, block_row, block_col, i, j);
            self.data[dst].clone_from(&block.data[L::index(i, j, size, size)]);
        }
        Ok(())
    }

    /// Extract tile `(block_row, block_col)` into a newly allocated grid
    pub fn block(&self, block_row: usize, block_col: usize) -> GridResult<Self> {
        let size = self.check_tile(block_row, block_col)?;

        let data = (0..size * size)
            .map(|k| {
                let (i, j) = L::coords(k, size, size);
                self.data[self.tile_offset(size, block_row, block_col, i, j)].clone()
            })
            .collect();
        Grid::from_vec(size, size, data)
    }
}
