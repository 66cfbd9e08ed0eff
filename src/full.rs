//! Owning dense 2-D storage.
//!
//! `FullStorage` is the reference scheme for general matrices: a contiguous
//! buffer in row- or column-major order, with logical row/column indices
//! starting at a configurable base. All view-producing operations are
//! zero-copy; the buffer is only touched by `resize`, `fill`, and element
//! writes.

use std::marker::PhantomData;

use crate::array::{ArrayView, ArrayViewMut};
use crate::full_view::{FullStorageView, FullStorageViewMut};
use crate::index::{FortranIndex, Index, IndexBase};
use crate::order::{ColMajor, StorageOrder};
use crate::types::UpLo;

/// Owning dense storage for an `num_rows x num_cols` matrix.
///
/// The layout is fixed at the type level (`O`), the default index base by
/// `B`. The buffer is always exactly `num_rows * num_cols` elements; the
/// leading dimension equals the major extent.
#[derive(Debug, Clone)]
pub struct FullStorage<T, O: StorageOrder = ColMajor, B: IndexBase = FortranIndex> {
    data: Vec<T>,
    num_rows: usize,
    num_cols: usize,
    first_row: Index,
    first_col: Index,
    _order: PhantomData<O>,
    _base: PhantomData<B>,
}

impl<T: Clone + Default, O: StorageOrder, B: IndexBase> FullStorage<T, O, B> {
    /// Create storage with default-valued elements.
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self::with_value(num_rows, num_cols, T::default())
    }
}

impl<T: Clone, O: StorageOrder, B: IndexBase> FullStorage<T, O, B> {
    /// Create storage filled with `value`.
    pub fn with_value(num_rows: usize, num_cols: usize, value: T) -> Self {
        Self::new_with_base(num_rows, num_cols, B::FIRST_INDEX, B::FIRST_INDEX, value)
    }

    /// Create storage with an explicit index base.
    pub fn new_with_base(
        num_rows: usize,
        num_cols: usize,
        first_row: Index,
        first_col: Index,
        value: T,
    ) -> Self {
        Self {
            data: vec![value; num_rows * num_cols],
            num_rows,
            num_cols,
            first_row,
            first_col,
            _order: PhantomData,
            _base: PhantomData,
        }
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) {
        for x in self.data.iter_mut() {
            *x = value.clone();
        }
    }

    /// Set the elements of one triangle (diagonal included) to `value`.
    ///
    /// The triangle predicate is measured in offsets from the index base,
    /// so cell `(first_row + k, first_col + k)` is always on the diagonal.
    pub fn fill_triangle(&mut self, uplo: UpLo, value: T) {
        for c in 0..self.num_cols {
            for r in 0..self.num_rows {
                if uplo.contains(r, c) {
                    let pos = self.position0(r, c);
                    self.data[pos] = value.clone();
                }
            }
        }
    }

    /// Change extents and/or index base.
    ///
    /// Elements whose logical `(row, col)` lies in the intersection of the
    /// old and new index rectangles keep their values; all other cells are
    /// set to `value`. Returns `true` iff the buffer was reallocated (the
    /// requested extents differ from the current ones).
    pub fn resize(
        &mut self,
        num_rows: usize,
        num_cols: usize,
        first_row: Index,
        first_col: Index,
        value: T,
    ) -> bool {
        let same_extents = num_rows == self.num_rows && num_cols == self.num_cols;
        if same_extents && first_row == self.first_row && first_col == self.first_col {
            return false;
        }

        // Logical overlap of the old and new index rectangles.
        let row_lo = self.first_row.max(first_row);
        let row_hi = (self.first_row + self.num_rows as Index - 1)
            .min(first_row + num_rows as Index - 1);
        let col_lo = self.first_col.max(first_col);
        let col_hi = (self.first_col + self.num_cols as Index - 1)
            .min(first_col + num_cols as Index - 1);

        let mut saved: Vec<T> = Vec::new();
        if row_lo <= row_hi && col_lo <= col_hi {
            saved.reserve(((row_hi - row_lo + 1) * (col_hi - col_lo + 1)) as usize);
            let mut col = col_lo;
            while col <= col_hi {
                let mut row = row_lo;
                while row <= row_hi {
                    saved.push(self.at(row, col).clone());
                    row += 1;
                }
                col += 1;
            }
        }

        let reallocated = !same_extents;
        if reallocated {
            self.data = vec![value; num_rows * num_cols];
            self.num_rows = num_rows;
            self.num_cols = num_cols;
        } else {
            self.fill(value);
        }
        self.first_row = first_row;
        self.first_col = first_col;

        if row_lo <= row_hi && col_lo <= col_hi {
            let mut it = saved.into_iter();
            let mut col = col_lo;
            while col <= col_hi {
                let mut row = row_lo;
                while row <= row_hi {
                    *self.at_mut(row, col) = it.next().unwrap();
                    row += 1;
                }
                col += 1;
            }
        }
        reallocated
    }

    /// Ensure capacity for `num_rows * num_cols` elements without changing
    /// the logical extents or any element value. Returns `true` iff the
    /// buffer grew.
    pub fn reserve(&mut self, num_rows: usize, num_cols: usize) -> bool {
        let needed = num_rows * num_cols;
        if needed <= self.data.capacity() {
            return false;
        }
        self.data.reserve_exact(needed - self.data.len());
        true
    }
}

impl<T, O: StorageOrder, B: IndexBase> FullStorage<T, O, B> {
    /// Number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns.
    #[inline]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Logical index of the first row.
    #[inline]
    pub fn first_row(&self) -> Index {
        self.first_row
    }

    /// Logical index of the last row.
    #[inline]
    pub fn last_row(&self) -> Index {
        self.first_row + self.num_rows as Index - 1
    }

    /// Logical index of the first column.
    #[inline]
    pub fn first_col(&self) -> Index {
        self.first_col
    }

    /// Logical index of the last column.
    #[inline]
    pub fn last_col(&self) -> Index {
        self.first_col + self.num_cols as Index - 1
    }

    /// Stride between consecutive columns (column-major) or rows
    /// (row-major). Owning storage is unpadded, so this equals the major
    /// extent.
    #[inline]
    pub fn leading_dimension(&self) -> usize {
        if O::IS_COL_MAJOR {
            self.num_rows
        } else {
            self.num_cols
        }
    }

    /// Buffer distance between vertically adjacent elements.
    #[inline]
    pub fn stride_row(&self) -> isize {
        if O::IS_COL_MAJOR {
            1
        } else {
            self.num_cols as isize
        }
    }

    /// Buffer distance between horizontally adjacent elements.
    #[inline]
    pub fn stride_col(&self) -> isize {
        if O::IS_COL_MAJOR {
            self.num_rows as isize
        } else {
            1
        }
    }

    /// Buffer position of the cell at 0-based offsets `(r, c)`.
    #[inline]
    fn position0(&self, r: usize, c: usize) -> usize {
        if O::IS_COL_MAJOR {
            c * self.num_rows + r
        } else {
            r * self.num_cols + c
        }
    }

    #[inline]
    fn position(&self, row: Index, col: Index) -> usize {
        assert!(
            row >= self.first_row && row <= self.last_row(),
            "row index out of range"
        );
        assert!(
            col >= self.first_col && col <= self.last_col(),
            "column index out of range"
        );
        self.position0((row - self.first_row) as usize, (col - self.first_col) as usize)
    }

    /// Element at logical position `(row, col)`.
    #[inline]
    pub fn at(&self, row: Index, col: Index) -> &T {
        &self.data[self.position(row, col)]
    }

    /// Mutable element at logical position `(row, col)`.
    #[inline]
    pub fn at_mut(&mut self, row: Index, col: Index) -> &mut T {
        let pos = self.position(row, col);
        &mut self.data[pos]
    }

    /// Element access without bounds checking.
    ///
    /// # Safety
    /// `(row, col)` must lie inside the logical index rectangle.
    #[inline]
    pub unsafe fn at_unchecked(&self, row: Index, col: Index) -> &T {
        let r = (row - self.first_row) as usize;
        let c = (col - self.first_col) as usize;
        let pos = self.position0(r, c);
        unsafe { self.data.get_unchecked(pos) }
    }

    /// Mutable element access without bounds checking.
    ///
    /// # Safety
    /// `(row, col)` must lie inside the logical index rectangle.
    #[inline]
    pub unsafe fn at_unchecked_mut(&mut self, row: Index, col: Index) -> &mut T {
        let r = (row - self.first_row) as usize;
        let c = (col - self.first_col) as usize;
        let pos = self.position0(r, c);
        unsafe { self.data.get_unchecked_mut(pos) }
    }

    /// Re-anchor the logical origin. No data moves.
    #[inline]
    pub fn change_index_base(&mut self, first_row: Index, first_col: Index) {
        self.first_row = first_row;
        self.first_col = first_col;
    }

    /// The backing buffer, in storage order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// The backing buffer, mutable.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Pointer to the first buffer element.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Mutable pointer to the first buffer element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    /// The whole buffer as a 1-D view (elements in storage order).
    pub fn array_view(&self, first_view_index: Index) -> ArrayView<'_, T, B> {
        unsafe { ArrayView::new_unchecked(&self.data, 0, self.data.len(), 1, first_view_index) }
    }

    /// Mutable counterpart of [`FullStorage::array_view`].
    pub fn array_view_mut(&mut self, first_view_index: Index) -> ArrayViewMut<'_, T, B> {
        let len = self.data.len();
        unsafe { ArrayViewMut::new_unchecked(&mut self.data, 0, len, 1, first_view_index) }
    }

    /// View of the whole storage.
    pub fn view_full(&self) -> FullStorageView<'_, T, O, B> {
        FullStorageView::from_parts(
            &self.data,
            0,
            self.num_rows,
            self.num_cols,
            self.stride_row(),
            self.stride_col(),
            self.first_row,
            self.first_col,
        )
    }

    /// Mutable view of the whole storage.
    pub fn view_full_mut(&mut self) -> FullStorageViewMut<'_, T, O, B> {
        let (nr, nc) = (self.num_rows, self.num_cols);
        let (sr, sc) = (self.stride_row(), self.stride_col());
        let (fr, fc) = (self.first_row, self.first_col);
        FullStorageViewMut::from_parts(&mut self.data, 0, nr, nc, sr, sc, fr, fc)
    }

    /// View of the rectangular block `[from_row, to_row] x [from_col,
    /// to_col]` (inclusive), re-anchored at the default index base.
    pub fn view(
        &self,
        from_row: Index,
        from_col: Index,
        to_row: Index,
        to_col: Index,
    ) -> FullStorageView<'_, T, O, B> {
        self.view_strided(
            from_row,
            from_col,
            to_row,
            to_col,
            1,
            1,
            B::FIRST_INDEX,
            B::FIRST_INDEX,
        )
    }

    /// Strided rectangular sub-view with an explicit index base.
    ///
    /// Every `stride_row`-th row and `stride_col`-th column of the block is
    /// part of the view. `from <= to` and strides `>= 1` are required.
    #[allow(clippy::too_many_arguments)]
    pub fn view_strided(
        &self,
        from_row: Index,
        from_col: Index,
        to_row: Index,
        to_col: Index,
        stride_row: isize,
        stride_col: isize,
        first_view_row: Index,
        first_view_col: Index,
    ) -> FullStorageView<'_, T, O, B> {
        let g = self.subblock(from_row, from_col, to_row, to_col, stride_row, stride_col);
        FullStorageView::from_parts(
            &self.data,
            g.offset,
            g.num_rows,
            g.num_cols,
            g.stride_row,
            g.stride_col,
            first_view_row,
            first_view_col,
        )
    }

    /// Mutable counterpart of [`FullStorage::view`].
    pub fn view_mut(
        &mut self,
        from_row: Index,
        from_col: Index,
        to_row: Index,
        to_col: Index,
    ) -> FullStorageViewMut<'_, T, O, B> {
        self.view_strided_mut(
            from_row,
            from_col,
            to_row,
            to_col,
            1,
            1,
            B::FIRST_INDEX,
            B::FIRST_INDEX,
        )
    }

    /// Mutable counterpart of [`FullStorage::view_strided`].
    #[allow(clippy::too_many_arguments)]
    pub fn view_strided_mut(
        &mut self,
        from_row: Index,
        from_col: Index,
        to_row: Index,
        to_col: Index,
        stride_row: isize,
        stride_col: isize,
        first_view_row: Index,
        first_view_col: Index,
    ) -> FullStorageViewMut<'_, T, O, B> {
        let g = self.subblock(from_row, from_col, to_row, to_col, stride_row, stride_col);
        FullStorageViewMut::from_parts(
            &mut self.data,
            g.offset,
            g.num_rows,
            g.num_cols,
            g.stride_row,
            g.stride_col,
            first_view_row,
            first_view_col,
        )
    }

    fn subblock(
        &self,
        from_row: Index,
        from_col: Index,
        to_row: Index,
        to_col: Index,
        stride_row: isize,
        stride_col: isize,
    ) -> SubBlock {
        assert!(from_row <= to_row && from_col <= to_col, "empty view range");
        assert!(stride_row >= 1 && stride_col >= 1, "view stride must be >= 1");
        let offset = self.position(from_row, from_col);
        // Anchor of the far corner must also be in range.
        let _ = self.position(to_row, to_col);
        SubBlock {
            offset,
            num_rows: ((to_row - from_row) / stride_row as Index) as usize + 1,
            num_cols: ((to_col - from_col) / stride_col as Index) as usize + 1,
            stride_row: self.stride_row() * stride_row,
            stride_col: self.stride_col() * stride_col,
        }
    }

    /// 1-D view of one row.
    pub fn view_row(&self, row: Index, first_view_index: Index) -> ArrayView<'_, T, B> {
        let offset = self.position(row, self.first_col);
        unsafe {
            ArrayView::new_unchecked(
                &self.data,
                offset,
                self.num_cols,
                self.stride_col(),
                first_view_index,
            )
        }
    }

    /// 1-D view of part of a row, every `stride`-th column of
    /// `[first_col, last_col]`.
    pub fn view_row_part(
        &self,
        row: Index,
        first_col: Index,
        last_col: Index,
        stride: isize,
        first_view_index: Index,
    ) -> ArrayView<'_, T, B> {
        assert!(stride >= 1, "view stride must be >= 1");
        assert!(first_col <= last_col, "empty view range");
        let offset = self.position(row, first_col);
        let _ = self.position(row, last_col);
        let length = ((last_col - first_col) / stride as Index) as usize + 1;
        unsafe {
            ArrayView::new_unchecked(
                &self.data,
                offset,
                length,
                self.stride_col() * stride,
                first_view_index,
            )
        }
    }

    /// Mutable 1-D view of one row.
    pub fn view_row_mut(&mut self, row: Index, first_view_index: Index) -> ArrayViewMut<'_, T, B> {
        let offset = self.position(row, self.first_col);
        let (len, stride) = (self.num_cols, self.stride_col());
        unsafe { ArrayViewMut::new_unchecked(&mut self.data, offset, len, stride, first_view_index) }
    }

    /// 1-D view of one column.
    pub fn view_col(&self, col: Index, first_view_index: Index) -> ArrayView<'_, T, B> {
        let offset = self.position(self.first_row, col);
        unsafe {
            ArrayView::new_unchecked(
                &self.data,
                offset,
                self.num_rows,
                self.stride_row(),
                first_view_index,
            )
        }
    }

    /// 1-D view of part of a column, every `stride`-th row of
    /// `[first_row, last_row]`.
    pub fn view_col_part(
        &self,
        first_row: Index,
        last_row: Index,
        stride: isize,
        col: Index,
        first_view_index: Index,
    ) -> ArrayView<'_, T, B> {
        assert!(stride >= 1, "view stride must be >= 1");
        assert!(first_row <= last_row, "empty view range");
        let offset = self.position(first_row, col);
        let _ = self.position(last_row, col);
        let length = ((last_row - first_row) / stride as Index) as usize + 1;
        unsafe {
            ArrayView::new_unchecked(
                &self.data,
                offset,
                length,
                self.stride_row() * stride,
                first_view_index,
            )
        }
    }

    /// Mutable 1-D view of one column.
    pub fn view_col_mut(&mut self, col: Index, first_view_index: Index) -> ArrayViewMut<'_, T, B> {
        let offset = self.position(self.first_row, col);
        let (len, stride) = (self.num_rows, self.stride_row());
        unsafe { ArrayViewMut::new_unchecked(&mut self.data, offset, len, stride, first_view_index) }
    }

    /// 1-D view of the `d`-th diagonal: `d = 0` is the main diagonal,
    /// `d > 0` super-diagonals, `d < 0` sub-diagonals.
    pub fn view_diag(&self, d: Index, first_view_index: Index) -> ArrayView<'_, T, B> {
        let (offset, length) = self.diag_span(d);
        unsafe {
            ArrayView::new_unchecked(
                &self.data,
                offset,
                length,
                self.stride_row() + self.stride_col(),
                first_view_index,
            )
        }
    }

    /// Mutable counterpart of [`FullStorage::view_diag`].
    pub fn view_diag_mut(&mut self, d: Index, first_view_index: Index) -> ArrayViewMut<'_, T, B> {
        let (offset, length) = self.diag_span(d);
        let stride = self.stride_row() + self.stride_col();
        unsafe {
            ArrayViewMut::new_unchecked(&mut self.data, offset, length, stride, first_view_index)
        }
    }

    fn diag_span(&self, d: Index) -> (usize, usize) {
        assert!(
            d > -(self.num_rows as Index) && d < self.num_cols as Index,
            "diagonal out of range"
        );
        if d >= 0 {
            let offset = self.position0(0, d as usize);
            let length = self.num_rows.min(self.num_cols - d as usize);
            (offset, length)
        } else {
            let offset = self.position0((-d) as usize, 0);
            let length = (self.num_rows - (-d) as usize).min(self.num_cols);
            (offset, length)
        }
    }

    /// 1-D view of the `d`-th anti-diagonal: `d = 0` passes through the
    /// top-right corner, `d > 0` shifts down/left toward the bottom-left
    /// corner, `d < 0` climbs off the top.
    pub fn view_anti_diag(&self, d: Index, first_view_index: Index) -> ArrayView<'_, T, B> {
        let (offset, length) = self.anti_diag_span(d);
        unsafe {
            ArrayView::new_unchecked(
                &self.data,
                offset,
                length,
                self.stride_row() - self.stride_col(),
                first_view_index,
            )
        }
    }

    /// Mutable counterpart of [`FullStorage::view_anti_diag`].
    pub fn view_anti_diag_mut(
        &mut self,
        d: Index,
        first_view_index: Index,
    ) -> ArrayViewMut<'_, T, B> {
        let (offset, length) = self.anti_diag_span(d);
        let stride = self.stride_row() - self.stride_col();
        unsafe {
            ArrayViewMut::new_unchecked(&mut self.data, offset, length, stride, first_view_index)
        }
    }

    fn anti_diag_span(&self, d: Index) -> (usize, usize) {
        // Anti-diagonal d holds the 0-based cells with r + c = num_cols - 1 + d.
        let s = self.num_cols as Index - 1 + d;
        assert!(
            s >= 0 && s <= self.num_rows as Index + self.num_cols as Index - 2,
            "anti-diagonal out of range"
        );
        let r0 = d.max(0) as usize;
        let r1 = (self.num_rows as Index - 1).min(s) as usize;
        let c0 = (s as usize) - r0;
        (self.position0(r0, c0), r1 - r0 + 1)
    }
}

#[derive(Debug)]
struct SubBlock {
    offset: usize,
    num_rows: usize,
    num_cols: usize,
    stride_row: isize,
    stride_col: isize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::CIndex;
    use crate::order::RowMajor;

    #[test]
    fn test_colmajor_buffer_order() {
        let mut a: FullStorage<i32> = FullStorage::with_value(2, 3, 0);
        *a.at_mut(1, 1) = 11;
        *a.at_mut(2, 1) = 21;
        *a.at_mut(1, 2) = 12;
        assert_eq!(&a.data()[..3], &[11, 21, 12]);
        assert_eq!(a.leading_dimension(), 2);
    }

    #[test]
    fn test_rowmajor_buffer_order() {
        let mut a: FullStorage<i32, RowMajor, CIndex> = FullStorage::with_value(2, 3, 0);
        *a.at_mut(0, 0) = 11;
        *a.at_mut(0, 1) = 12;
        *a.at_mut(1, 0) = 21;
        assert_eq!(&a.data()[..4], &[11, 12, 0, 21]);
        assert_eq!(a.leading_dimension(), 3);
    }

    #[test]
    fn test_diag_span() {
        let a: FullStorage<f64, ColMajor, CIndex> = FullStorage::with_value(3, 4, 0.0);
        let d = a.view_diag(1, 0);
        assert_eq!(d.length(), 3);
        assert_eq!(d.stride(), 4); // ld + 1
        let sub = a.view_diag(-2, 0);
        assert_eq!(sub.length(), 1);
    }

    #[test]
    fn test_anti_diag_span() {
        let mut a: FullStorage<i32, ColMajor, CIndex> = FullStorage::with_value(3, 3, 0);
        for r in 0..3 {
            for c in 0..3 {
                *a.at_mut(r, c) = (r * 10 + c) as i32;
            }
        }
        // Main anti-diagonal: (0,2), (1,1), (2,0).
        let ad = a.view_anti_diag(0, 0);
        assert_eq!(ad.length(), 3);
        assert_eq!(*ad.at(0), 2);
        assert_eq!(*ad.at(1), 11);
        assert_eq!(*ad.at(2), 20);
    }
}
