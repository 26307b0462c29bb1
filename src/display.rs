// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Display, Formatter};

use funty::Integral;

use crate::grid::Grid;
use crate::layout::Layout;

/// Label shown in place of an integer type's maximum value by [`GridDisplay::with_max_sentinel`]
pub const MAX_SENTINEL_LABEL: &str = "12345";

/// Tab-separated text rendering of a [`Grid`], one line per row.
///
/// When tiling is enabled the output is prefixed with the block size, tile rows are separated
/// by a line of `-` cells and tile columns by a `|` cell.
pub struct GridDisplay<'a, T, L: Layout> {
    grid: &'a Grid<T, L>,
    sentinel: Option<(T, String)>,
}

impl<T, L: Layout> Grid<T, L> {
    pub fn display(&self) -> GridDisplay<'_, T, L> {
        GridDisplay {
            grid: self,
            sentinel: None,
        }
    }
}

impl<'a, T, L: Layout> GridDisplay<'a, T, L> {
    /// Render any element equal to `value` as `label` instead
    pub fn with_sentinel(mut self, value: T, label: impl Into<String>) -> Self {
        self.sentinel = Some((value, label.into()));
        self
    }
}

impl<'a, T: Integral, L: Layout> GridDisplay<'a, T, L> {
    /// Render `T::MAX` as [`MAX_SENTINEL_LABEL`], for grids that use it as "unreachable"
    pub fn with_max_sentinel(self) -> Self {
        self.with_sentinel(T::MAX, MAX_SENTINEL_LABEL)
    }
}

impl<'a, T: Display + PartialEq, L: Layout> Display for GridDisplay<'a, T, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let g = self.grid;
        let size = g.block_size().unwrap_or(0);
        let tiled = size > 1;

        if tiled {
            writeln!(f, "Block size: {size}")?;
        }

        for row in 0..g.rows() {
            if tiled && row > 0 && row % size == 0 {
                let width = g.cols() + g.cols() / size - 1;
                writeln!(f, "{}", "-\t".repeat(width))?;
            }

            for col in 0..g.cols() {
                if tiled && col > 0 && col % size == 0 {
                    write!(f, "|\t")?;
                }

                let value = &g[(row, col)];
                match &self.sentinel {
                    Some((s, label)) if value == s => write!(f, "{label}\t")?,
                    _ => write!(f, "{value}\t")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display + PartialEq, L: Layout> Display for Grid<T, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.display().fmt(f)
    }
}
