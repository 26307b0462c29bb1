// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use itertools::iproduct;

use crate::error::GridError::*;
use crate::error::GridResult;
use crate::layout::{Layout, Order, RowMajor};

/// A dense two-dimensional grid backed by a single contiguous buffer.
///
/// A Grid has several guarantees:
/// * the backing store always holds exactly `rows * cols` elements
/// * coordinate access is translated to a storage offset by the layout `L`
/// * if tiling is enabled, the block size is greater than 1 and evenly divides both dimensions
///
/// Cloning a grid deep-copies its storage, and [`Clone::clone_from`] serves as assignment.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T, L: Layout = RowMajor> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<T>,
    pub(crate) block_size: Option<usize>,
    layout: PhantomData<L>,
}

impl<T, L: Layout> Default for Grid<T, L> {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
            block_size: None,
            layout: PhantomData,
        }
    }
}

/// Element count of a `rows`x`cols` grid
fn area(rows: usize, cols: usize) -> GridResult<usize> {
    rows.checked_mul(cols).ok_or(ShapeOverflow { rows, cols })
}

impl<T: Clone, L: Layout> Grid<T, L> {
    /// Create a `rows`x`cols` grid with every element set to `value`.
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        let len = area(rows, cols).unwrap_or_else(|e| panic!("{e}"));
        Self {
            rows,
            cols,
            data: vec![value; len],
            block_size: None,
            layout: PhantomData,
        }
    }

    /// Create a `rows`x`cols` grid with every element set to `T::default()`
    pub fn new(rows: usize, cols: usize) -> Self
    where
        T: Default,
    {
        Self::filled(rows, cols, T::default())
    }
}

impl<T, L: Layout> Grid<T, L> {
    /// Adopt a flat buffer that is already in this grid's physical storage order
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> GridResult<Self> {
        let expected = area(rows, cols)?;
        if data.len() != expected {
            return Err(BufferLength {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            rows,
            cols,
            data,
            block_size: None,
            layout: PhantomData,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements, `rows * cols`
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn order(&self) -> Order {
        L::ORDER
    }

    /// The backing store in physical order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn offset(&self, row: usize, col: usize) -> GridResult<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(L::index(row, col, self.rows, self.cols))
    }

    fn flat_offset(&self, index: usize) -> GridResult<usize> {
        if index >= self.data.len() {
            return Err(FlatOutOfBounds {
                index,
                len: self.data.len(),
            });
        }
        Ok(index)
    }

    pub fn at(&self, row: usize, col: usize) -> GridResult<&T> {
        let i = self.offset(row, col)?;
        Ok(&self.data[i])
    }

    pub fn at_mut(&mut self, row: usize, col: usize) -> GridResult<&mut T> {
        let i = self.offset(row, col)?;
        Ok(&mut self.data[i])
    }

    /// Access the backing store directly by offset.
    ///
    /// This bypasses the layout: for a column-major grid, `at_flat(1)` is `(1, 0)`, not `(0, 1)`.
    pub fn at_flat(&self, index: usize) -> GridResult<&T> {
        let i = self.flat_offset(index)?;
        Ok(&self.data[i])
    }

    /// Mutable form of [`Grid::at_flat`], with the same caveat about physical order
    pub fn at_flat_mut(&mut self, index: usize) -> GridResult<&mut T> {
        let i = self.flat_offset(index)?;
        Ok(&mut self.data[i])
    }

    /// Overwrite every element in storage order with successive values from `generator`
    pub fn fill_with<F: FnMut() -> T>(&mut self, generator: F) {
        self.data.fill_with(generator);
    }

    /// Exchange the entire state of two grids without copying any elements
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Iterate over every coordinate in logical row-major order, regardless of layout
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> {
        iproduct!(0..self.rows, 0..self.cols)
    }
}

impl<T, L: Layout> Index<(usize, usize)> for Grid<T, L> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.at(row, col).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T, L: Layout> IndexMut<(usize, usize)> for Grid<T, L> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.at_mut(row, col).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T, L: Layout> Index<usize> for Grid<T, L> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.at_flat(index).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T, L: Layout> IndexMut<usize> for Grid<T, L> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.at_flat_mut(index).unwrap_or_else(|e| panic!("{e}"))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GridError;
    use crate::layout::ColumnMajor;

    use super::*;

    #[test]
    fn construct_filled() {
        let g: Grid<f64> = Grid::filled(3, 4, 5.0);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.len(), 12);
        assert!(g.coords().all(|(r, c)| g[(r, c)] == 5.0));
    }

    #[test]
    fn default_is_empty() {
        let g: Grid<i32> = Grid::default();
        assert_eq!((g.rows(), g.cols()), (0, 0));
        assert!(g.is_empty());
        assert_eq!(g.block_size(), None);

        let g: Grid<i32> = Grid::new(0, 5);
        assert!(g.is_empty());
        assert_eq!(g.coords().count(), 0);
    }

    #[test]
    fn bounds() {
        let mut g: Grid<i32> = Grid::new(2, 3);
        assert_eq!(
            g.at(2, 0),
            Err(GridError::OutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            })
        );
        assert!(g.at(0, 3).is_err());
        assert!(g.at_mut(0, 3).is_err());
        assert_eq!(
            g.at_flat(6),
            Err(GridError::FlatOutOfBounds { index: 6, len: 6 })
        );
        assert!(g.at_flat(5).is_ok());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_panics() {
        let g: Grid<i32> = Grid::new(2, 3);
        let _ = g[(0, 3)];
    }

    #[test]
    fn flat_access_ignores_layout() {
        let mut g: Grid<i32, ColumnMajor> = Grid::new(2, 3);
        g[(0, 1)] = 7;
        assert_eq!(g[2], 7);
        g[1] = 9;
        assert_eq!(g[(1, 0)], 9);
        assert_eq!(g.order(), Order::ColumnMajor);
    }

    #[test]
    fn from_vec_length() {
        let g: Grid<i32> = Grid::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(g[(1, 0)], 3);

        let e = Grid::<i32>::from_vec(2, 2, vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            e,
            GridError::BufferLength {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn oversized_shape() {
        let rows = usize::MAX / 2 + 1;
        assert_eq!(
            Grid::<u8>::from_vec(rows, 2, Vec::new()),
            Err(GridError::ShapeOverflow { rows, cols: 2 })
        );
    }

    #[test]
    #[should_panic(expected = "more elements than fit")]
    fn filled_oversized_shape() {
        let _ = Grid::<u8>::filled(usize::MAX, 3, 0);
    }

    #[test]
    fn fill_with_generator() {
        let mut g: Grid<u32> = Grid::new(2, 2);
        let mut n = 0;
        g.fill_with(|| {
            n += 1;
            n
        });
        assert_eq!(g.as_slice(), [1, 2, 3, 4]);
    }

    #[test]
    fn swap_exchanges_everything() {
        let mut a: Grid<i32> = Grid::filled(4, 4, 1);
        a.enable_tiling(2).unwrap();
        let mut b: Grid<i32> = Grid::filled(3, 5, 2);

        a.swap(&mut b);
        assert_eq!((a.rows(), a.cols(), a.block_size()), (3, 5, None));
        assert_eq!((b.rows(), b.cols(), b.block_size()), (4, 4, Some(2)));
        assert_eq!(a[(0, 0)], 2);
        assert_eq!(b[(0, 0)], 1);
    }

    #[test]
    fn assignment_does_not_alias() {
        let mut src: Grid<i32> = Grid::filled(3, 3, 4);
        src.enable_tiling(3).unwrap();
        let mut dst: Grid<i32> = Grid::new(1, 7);

        dst.clone_from(&src);
        assert_eq!(dst, src);
        assert_eq!(dst.block_size(), Some(3));

        src[(1, 1)] = 0;
        assert_eq!(dst[(1, 1)], 4);
    }
}
