// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::Debug;

use strum::{Display, VariantArray};

/// The physical order of elements in a grid's backing store
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display, VariantArray)]
pub enum Order {
    /// Consecutive elements of a row are adjacent in storage
    RowMajor,

    /// Consecutive elements of a column are adjacent in storage
    ColumnMajor,
}

/// A stateless mapping from logical coordinates to a flat storage offset.
///
/// Layouts are selected at the type level, so every call to [`Layout::index`] is
/// resolved statically and inlines to plain arithmetic.
/// No bounds checking happens here; that is the caller's job.
pub trait Layout: Copy + Clone + Debug + Default + PartialEq + Eq + 'static {
    const ORDER: Order;

    fn index(row: usize, col: usize, rows: usize, cols: usize) -> usize;

    /// The inverse of [`Layout::index`]
    fn coords(offset: usize, rows: usize, cols: usize) -> (usize, usize);
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RowMajor;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnMajor;

impl Layout for RowMajor {
    const ORDER: Order = Order::RowMajor;

    #[inline(always)]
    fn index(row: usize, col: usize, _rows: usize, cols: usize) -> usize {
        row * cols + col
    }

    #[inline(always)]
    fn coords(offset: usize, _rows: usize, cols: usize) -> (usize, usize) {
        (offset / cols, offset % cols)
    }
}

impl Layout for ColumnMajor {
    const ORDER: Order = Order::ColumnMajor;

    #[inline(always)]
    fn index(row: usize, col: usize, rows: usize, _cols: usize) -> usize {
        col * rows + row
    }

    #[inline(always)]
    fn coords(offset: usize, rows: usize, _cols: usize) -> (usize, usize) {
        (offset % rows, offset / rows)
    }
}
