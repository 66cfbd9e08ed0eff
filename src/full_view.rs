//! Non-owning dense 2-D views.
//!
//! A view holds a borrowed buffer plus geometry: extents, row/column
//! strides, and an index base. Nothing is copied when a view is created,
//! and dropping one releases only the descriptor. The main use is
//! presenting externally owned memory (a LAPACK caller's FORTRAN array, a
//! sub-block of an owning storage) as a first-class storage scheme.

use std::marker::PhantomData;

use crate::array::{ArrayView, ArrayViewMut};
use crate::index::{FortranIndex, Index, IndexBase};
use crate::order::{ColMajor, StorageOrder};
use crate::types::UpLo;
use crate::{Result, StorageError};

/// A read-only dense view.
#[derive(Debug)]
pub struct FullStorageView<'a, T, O: StorageOrder = ColMajor, B: IndexBase = FortranIndex> {
    data: &'a [T],
    offset: usize,
    num_rows: usize,
    num_cols: usize,
    stride_row: isize,
    stride_col: isize,
    first_row: Index,
    first_col: Index,
    _order: PhantomData<O>,
    _base: PhantomData<B>,
}

/// A mutable dense view.
#[derive(Debug)]
pub struct FullStorageViewMut<'a, T, O: StorageOrder = ColMajor, B: IndexBase = FortranIndex> {
    data: &'a mut [T],
    offset: usize,
    num_rows: usize,
    num_cols: usize,
    stride_row: isize,
    stride_col: isize,
    first_row: Index,
    first_col: Index,
    _order: PhantomData<O>,
    _base: PhantomData<B>,
}

/// Required buffer span for a leading-dimension layout.
fn required_len<O: StorageOrder>(num_rows: usize, num_cols: usize, ld: usize) -> usize {
    if num_rows == 0 || num_cols == 0 {
        return 0;
    }
    if O::IS_COL_MAJOR {
        (num_cols - 1) * ld + num_rows
    } else {
        (num_rows - 1) * ld + num_cols
    }
}

fn validate_geometry<O: StorageOrder>(
    data_len: usize,
    num_rows: usize,
    num_cols: usize,
    ld: usize,
) -> Result<()> {
    let min_ld = if O::IS_COL_MAJOR { num_rows } else { num_cols };
    if ld < min_ld.max(1) {
        return Err(StorageError::LeadingDimensionTooSmall {
            ld,
            min: min_ld.max(1),
        });
    }
    let required = required_len::<O>(num_rows, num_cols, ld);
    if required > data_len {
        return Err(StorageError::BufferTooSmall {
            required,
            actual: data_len,
        });
    }
    Ok(())
}

macro_rules! impl_full_view_common {
    () => {
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

        /// Buffer distance between vertically adjacent elements.
        #[inline]
        pub fn stride_row(&self) -> isize {
            self.stride_row
        }

        /// Buffer distance between horizontally adjacent elements.
        #[inline]
        pub fn stride_col(&self) -> isize {
            self.stride_col
        }

        /// The major stride: distance between consecutive columns
        /// (column-major) or rows (row-major).
        #[inline]
        pub fn leading_dimension(&self) -> usize {
            if O::IS_COL_MAJOR {
                self.stride_col.unsigned_abs()
            } else {
                self.stride_row.unsigned_abs()
            }
        }

        /// Re-anchor the logical origin. No data moves.
        #[inline]
        pub fn change_index_base(&mut self, first_row: Index, first_col: Index) {
            self.first_row = first_row;
            self.first_col = first_col;
        }

        /// Buffer position of the cell at 0-based offsets `(r, c)`.
        #[inline]
        fn position0(&self, r: usize, c: usize) -> usize {
            (self.offset as isize + r as isize * self.stride_row + c as isize * self.stride_col)
                as usize
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

        /// Element access without bounds checking.
        ///
        /// # Safety
        /// `(row, col)` must lie inside the logical index rectangle.
        #[inline]
        pub unsafe fn at_unchecked(&self, row: Index, col: Index) -> &T {
            let pos = self.position0(
                (row - self.first_row) as usize,
                (col - self.first_col) as usize,
            );
            unsafe { self.data.get_unchecked(pos) }
        }

        /// Pointer to the logical `(first_row, first_col)` element.
        #[inline]
        pub fn as_ptr(&self) -> *const T {
            unsafe { self.data.as_ptr().add(self.offset) }
        }

        fn subblock(
            &self,
            from_row: Index,
            from_col: Index,
            to_row: Index,
            to_col: Index,
            stride_row: isize,
            stride_col: isize,
        ) -> (usize, usize, usize, isize, isize) {
            assert!(from_row <= to_row && from_col <= to_col, "empty view range");
            assert!(
                stride_row >= 1 && stride_col >= 1,
                "view stride must be >= 1"
            );
            let offset = self.position(from_row, from_col);
            let _ = self.position(to_row, to_col);
            (
                offset,
                ((to_row - from_row) / stride_row as Index) as usize + 1,
                ((to_col - from_col) / stride_col as Index) as usize + 1,
                self.stride_row * stride_row,
                self.stride_col * stride_col,
            )
        }

        fn diag_span(&self, d: Index) -> (usize, usize) {
            assert!(
                d > -(self.num_rows as Index) && d < self.num_cols as Index,
                "diagonal out of range"
            );
            if d >= 0 {
                (
                    self.position0(0, d as usize),
                    self.num_rows.min(self.num_cols - d as usize),
                )
            } else {
                (
                    self.position0((-d) as usize, 0),
                    (self.num_rows - (-d) as usize).min(self.num_cols),
                )
            }
        }

        fn anti_diag_span(&self, d: Index) -> (usize, usize) {
            let s = self.num_cols as Index - 1 + d;
            assert!(
                s >= 0 && s <= self.num_rows as Index + self.num_cols as Index - 2,
                "anti-diagonal out of range"
            );
            let r0 = d.max(0) as usize;
            let r1 = (self.num_rows as Index - 1).min(s) as usize;
            (self.position0(r0, (s as usize) - r0), r1 - r0 + 1)
        }

        fn row_span(&self, row: Index) -> (usize, usize, isize) {
            let offset = self.position(row, self.first_col);
            (offset, self.num_cols, self.stride_col)
        }

        fn col_span(&self, col: Index) -> (usize, usize, isize) {
            let offset = self.position(self.first_row, col);
            (offset, self.num_rows, self.stride_row)
        }
    };
}

// ============================================================================
// FullStorageView
// ============================================================================

impl<'a, T, O: StorageOrder, B: IndexBase> FullStorageView<'a, T, O, B> {
    /// Wrap a buffer laid out with the given leading dimension.
    ///
    /// # Errors
    /// Fails if `leading_dimension` is below the minor extent or the buffer
    /// cannot hold the geometry.
    pub fn new(
        data: &'a [T],
        num_rows: usize,
        num_cols: usize,
        leading_dimension: usize,
        first_row: Index,
        first_col: Index,
    ) -> Result<Self> {
        validate_geometry::<O>(data.len(), num_rows, num_cols, leading_dimension)?;
        let (stride_row, stride_col) = if O::IS_COL_MAJOR {
            (1, leading_dimension as isize)
        } else {
            (leading_dimension as isize, 1)
        };
        Ok(Self {
            data,
            offset: 0,
            num_rows,
            num_cols,
            stride_row,
            stride_col,
            first_row,
            first_col,
            _order: PhantomData,
            _base: PhantomData,
        })
    }

    /// Construct from explicit geometry without validation.
    ///
    /// # Safety
    /// Every cell of the logical rectangle must map inside `data`.
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn new_unchecked(
        data: &'a [T],
        offset: usize,
        num_rows: usize,
        num_cols: usize,
        stride_row: isize,
        stride_col: isize,
        first_row: Index,
        first_col: Index,
    ) -> Self {
        Self::from_parts(
            data, offset, num_rows, num_cols, stride_row, stride_col, first_row, first_col,
        )
    }

    /// Wrap a raw pointer in native (FORTRAN-style) convention.
    ///
    /// # Safety
    /// `ptr` must be valid for reads of the full leading-dimension span for
    /// the lifetime `'a`, and the memory must not be mutated through
    /// another handle while the view lives. `leading_dimension` must be at
    /// least the minor extent.
    pub unsafe fn from_raw_parts(
        ptr: *const T,
        num_rows: usize,
        num_cols: usize,
        leading_dimension: usize,
        first_row: Index,
        first_col: Index,
    ) -> Self {
        let len = required_len::<O>(num_rows, num_cols, leading_dimension);
        let data = unsafe { std::slice::from_raw_parts(ptr, len) };
        let (stride_row, stride_col) = if O::IS_COL_MAJOR {
            (1, leading_dimension as isize)
        } else {
            (leading_dimension as isize, 1)
        };
        Self::from_parts(data, 0, num_rows, num_cols, stride_row, stride_col, first_row, first_col)
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        data: &'a [T],
        offset: usize,
        num_rows: usize,
        num_cols: usize,
        stride_row: isize,
        stride_col: isize,
        first_row: Index,
        first_col: Index,
    ) -> Self {
        Self {
            data,
            offset,
            num_rows,
            num_cols,
            stride_row,
            stride_col,
            first_row,
            first_col,
            _order: PhantomData,
            _base: PhantomData,
        }
    }

    impl_full_view_common!();

    /// Strided rectangular sub-view with an explicit index base.
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
    ) -> FullStorageView<'a, T, O, B> {
        let (offset, nr, nc, sr, sc) =
            self.subblock(from_row, from_col, to_row, to_col, stride_row, stride_col);
        FullStorageView::from_parts(self.data, offset, nr, nc, sr, sc, first_view_row, first_view_col)
    }

    /// Sub-view of the rectangular block (inclusive bounds), re-anchored
    /// at the default index base.
    pub fn view(
        &self,
        from_row: Index,
        from_col: Index,
        to_row: Index,
        to_col: Index,
    ) -> FullStorageView<'a, T, O, B> {
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

    /// 1-D view of one row.
    pub fn view_row(&self, row: Index, first_view_index: Index) -> ArrayView<'a, T, B> {
        let (offset, length, stride) = self.row_span(row);
        unsafe { ArrayView::new_unchecked(self.data, offset, length, stride, first_view_index) }
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
    ) -> ArrayView<'a, T, B> {
        assert!(stride >= 1, "view stride must be >= 1");
        assert!(first_col <= last_col, "empty view range");
        let offset = self.position(row, first_col);
        let _ = self.position(row, last_col);
        let length = ((last_col - first_col) / stride as Index) as usize + 1;
        unsafe {
            ArrayView::new_unchecked(
                self.data,
                offset,
                length,
                self.stride_col * stride,
                first_view_index,
            )
        }
    }

    /// 1-D view of one column.
    pub fn view_col(&self, col: Index, first_view_index: Index) -> ArrayView<'a, T, B> {
        let (offset, length, stride) = self.col_span(col);
        unsafe { ArrayView::new_unchecked(self.data, offset, length, stride, first_view_index) }
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
    ) -> ArrayView<'a, T, B> {
        assert!(stride >= 1, "view stride must be >= 1");
        assert!(first_row <= last_row, "empty view range");
        let offset = self.position(first_row, col);
        let _ = self.position(last_row, col);
        let length = ((last_row - first_row) / stride as Index) as usize + 1;
        unsafe {
            ArrayView::new_unchecked(
                self.data,
                offset,
                length,
                self.stride_row * stride,
                first_view_index,
            )
        }
    }

    /// 1-D view of the `d`-th diagonal (`d > 0` super, `d < 0` sub).
    pub fn view_diag(&self, d: Index, first_view_index: Index) -> ArrayView<'a, T, B> {
        let (offset, length) = self.diag_span(d);
        unsafe {
            ArrayView::new_unchecked(
                self.data,
                offset,
                length,
                self.stride_row + self.stride_col,
                first_view_index,
            )
        }
    }

    /// 1-D view of the `d`-th anti-diagonal.
    pub fn view_anti_diag(&self, d: Index, first_view_index: Index) -> ArrayView<'a, T, B> {
        let (offset, length) = self.anti_diag_span(d);
        unsafe {
            ArrayView::new_unchecked(
                self.data,
                offset,
                length,
                self.stride_row - self.stride_col,
                first_view_index,
            )
        }
    }
}

// ============================================================================
// FullStorageViewMut
// ============================================================================

impl<'a, T, O: StorageOrder, B: IndexBase> FullStorageViewMut<'a, T, O, B> {
    /// Wrap a mutable buffer laid out with the given leading dimension.
    ///
    /// # Errors
    /// Fails if `leading_dimension` is below the minor extent or the buffer
    /// cannot hold the geometry.
    pub fn new(
        data: &'a mut [T],
        num_rows: usize,
        num_cols: usize,
        leading_dimension: usize,
        first_row: Index,
        first_col: Index,
    ) -> Result<Self> {
        validate_geometry::<O>(data.len(), num_rows, num_cols, leading_dimension)?;
        let (stride_row, stride_col) = if O::IS_COL_MAJOR {
            (1, leading_dimension as isize)
        } else {
            (leading_dimension as isize, 1)
        };
        Ok(Self {
            data,
            offset: 0,
            num_rows,
            num_cols,
            stride_row,
            stride_col,
            first_row,
            first_col,
            _order: PhantomData,
            _base: PhantomData,
        })
    }

    /// Construct from explicit geometry without validation.
    ///
    /// # Safety
    /// Every cell of the logical rectangle must map inside `data`.
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn new_unchecked(
        data: &'a mut [T],
        offset: usize,
        num_rows: usize,
        num_cols: usize,
        stride_row: isize,
        stride_col: isize,
        first_row: Index,
        first_col: Index,
    ) -> Self {
        Self::from_parts(
            data, offset, num_rows, num_cols, stride_row, stride_col, first_row, first_col,
        )
    }

    /// Wrap a raw pointer in native (FORTRAN-style) convention.
    ///
    /// # Safety
    /// `ptr` must be valid for reads and writes of the full
    /// leading-dimension span for the lifetime `'a`, with no other handle
    /// accessing that memory while the view lives. `leading_dimension`
    /// must be at least the minor extent.
    pub unsafe fn from_raw_parts(
        ptr: *mut T,
        num_rows: usize,
        num_cols: usize,
        leading_dimension: usize,
        first_row: Index,
        first_col: Index,
    ) -> Self {
        let len = required_len::<O>(num_rows, num_cols, leading_dimension);
        let data = unsafe { std::slice::from_raw_parts_mut(ptr, len) };
        let (stride_row, stride_col) = if O::IS_COL_MAJOR {
            (1, leading_dimension as isize)
        } else {
            (leading_dimension as isize, 1)
        };
        Self::from_parts(data, 0, num_rows, num_cols, stride_row, stride_col, first_row, first_col)
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        data: &'a mut [T],
        offset: usize,
        num_rows: usize,
        num_cols: usize,
        stride_row: isize,
        stride_col: isize,
        first_row: Index,
        first_col: Index,
    ) -> Self {
        Self {
            data,
            offset,
            num_rows,
            num_cols,
            stride_row,
            stride_col,
            first_row,
            first_col,
            _order: PhantomData,
            _base: PhantomData,
        }
    }

    impl_full_view_common!();

    /// Mutable element at logical position `(row, col)`.
    #[inline]
    pub fn at_mut(&mut self, row: Index, col: Index) -> &mut T {
        let pos = self.position(row, col);
        &mut self.data[pos]
    }

    /// Mutable element access without bounds checking.
    ///
    /// # Safety
    /// `(row, col)` must lie inside the logical index rectangle.
    #[inline]
    pub unsafe fn at_unchecked_mut(&mut self, row: Index, col: Index) -> &mut T {
        let pos = self.position0(
            (row - self.first_row) as usize,
            (col - self.first_col) as usize,
        );
        unsafe { self.data.get_unchecked_mut(pos) }
    }

    /// Mutable pointer to the logical `(first_row, first_col)` element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        unsafe { self.data.as_mut_ptr().add(self.offset) }
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for r in 0..self.num_rows {
            for c in 0..self.num_cols {
                let pos = self.position0(r, c);
                self.data[pos] = value.clone();
            }
        }
    }

    /// Set the elements of one triangle (diagonal included) to `value`.
    pub fn fill_triangle(&mut self, uplo: UpLo, value: T)
    where
        T: Clone,
    {
        for r in 0..self.num_rows {
            for c in 0..self.num_cols {
                if uplo.contains(r, c) {
                    let pos = self.position0(r, c);
                    self.data[pos] = value.clone();
                }
            }
        }
    }

    /// Views cannot reallocate: succeeds (returning `false`) iff the
    /// requested extents already match, re-anchoring the index base.
    ///
    /// # Panics
    /// Panics if the extents differ from the view's.
    pub fn resize(
        &mut self,
        num_rows: usize,
        num_cols: usize,
        first_row: Index,
        first_col: Index,
    ) -> bool {
        assert!(
            num_rows == self.num_rows && num_cols == self.num_cols,
            "cannot resize a non-owning view"
        );
        self.change_index_base(first_row, first_col);
        false
    }

    /// Views carry no capacity of their own: succeeds (returning `false`)
    /// iff the requested extents already fit the view's geometry.
    ///
    /// # Panics
    /// Panics if the extents exceed the view's.
    pub fn reserve(&self, num_rows: usize, num_cols: usize) -> bool {
        assert!(
            num_rows <= self.num_rows && num_cols <= self.num_cols,
            "cannot grow a non-owning view"
        );
        false
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> FullStorageView<'_, T, O, B> {
        FullStorageView::from_parts(
            self.data,
            self.offset,
            self.num_rows,
            self.num_cols,
            self.stride_row,
            self.stride_col,
            self.first_row,
            self.first_col,
        )
    }

    /// Mutable strided rectangular sub-view with an explicit index base.
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
        let (offset, nr, nc, sr, sc) =
            self.subblock(from_row, from_col, to_row, to_col, stride_row, stride_col);
        FullStorageViewMut::from_parts(
            self.data,
            offset,
            nr,
            nc,
            sr,
            sc,
            first_view_row,
            first_view_col,
        )
    }

    /// Mutable sub-view of the rectangular block (inclusive bounds).
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

    /// Mutable 1-D view of one row.
    pub fn view_row_mut(&mut self, row: Index, first_view_index: Index) -> ArrayViewMut<'_, T, B> {
        let (offset, length, stride) = self.row_span(row);
        unsafe { ArrayViewMut::new_unchecked(self.data, offset, length, stride, first_view_index) }
    }

    /// Mutable 1-D view of one column.
    pub fn view_col_mut(&mut self, col: Index, first_view_index: Index) -> ArrayViewMut<'_, T, B> {
        let (offset, length, stride) = self.col_span(col);
        unsafe { ArrayViewMut::new_unchecked(self.data, offset, length, stride, first_view_index) }
    }

    /// Mutable 1-D view of the `d`-th diagonal.
    pub fn view_diag_mut(&mut self, d: Index, first_view_index: Index) -> ArrayViewMut<'_, T, B> {
        let (offset, length) = self.diag_span(d);
        let stride = self.stride_row + self.stride_col;
        unsafe { ArrayViewMut::new_unchecked(self.data, offset, length, stride, first_view_index) }
    }

    /// Mutable 1-D view of the `d`-th anti-diagonal.
    pub fn view_anti_diag_mut(
        &mut self,
        d: Index,
        first_view_index: Index,
    ) -> ArrayViewMut<'_, T, B> {
        let (offset, length) = self.anti_diag_span(d);
        let stride = self.stride_row - self.stride_col;
        unsafe { ArrayViewMut::new_unchecked(self.data, offset, length, stride, first_view_index) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::CIndex;

    #[test]
    fn test_wrap_fortran_buffer() {
        // 3x2 col-major with ld = 4 (one padding row).
        let buf = [1.0, 2.0, 3.0, -1.0, 4.0, 5.0, 6.0];
        let v: FullStorageView<'_, f64> = FullStorageView::new(&buf, 3, 2, 4, 1, 1).unwrap();
        assert_eq!(*v.at(1, 1), 1.0);
        assert_eq!(*v.at(3, 1), 3.0);
        assert_eq!(*v.at(1, 2), 4.0);
        assert_eq!(*v.at(3, 2), 6.0);
        assert_eq!(v.leading_dimension(), 4);
    }

    #[test]
    fn test_rejects_small_ld() {
        let buf = [0.0f64; 8];
        let r: Result<FullStorageView<'_, f64>> = FullStorageView::new(&buf, 3, 2, 2, 1, 1);
        assert!(r.is_err());
    }

    #[test]
    fn test_subview_strides() {
        let buf: Vec<i32> = (0..20).collect();
        // 4x5 col-major, ld = 4, 0-based.
        let v: FullStorageView<'_, i32, ColMajor, CIndex> =
            FullStorageView::new(&buf, 4, 5, 4, 0, 0).unwrap();
        // Every second row and column of the full block.
        let s = v.view_strided(0, 0, 3, 4, 2, 2, 0, 0);
        assert_eq!(s.num_rows(), 2);
        assert_eq!(s.num_cols(), 3);
        assert_eq!(*s.at(0, 0), 0);
        assert_eq!(*s.at(1, 0), 2);
        assert_eq!(*s.at(0, 1), 8);
        assert_eq!(*s.at(1, 2), 18);
    }

    #[test]
    fn test_mut_view_writes_through() {
        let mut buf = [0.0f64; 6];
        {
            let mut v: FullStorageViewMut<'_, f64> =
                FullStorageViewMut::new(&mut buf, 2, 3, 2, 1, 1).unwrap();
            *v.at_mut(2, 3) = 9.0;
            v.fill_triangle(UpLo::Lower, 1.0);
        }
        // (2,3) is strictly upper, untouched by the lower fill.
        assert_eq!(buf[5], 9.0);
        assert_eq!(buf[0], 1.0); // (1,1)
        assert_eq!(buf[2], 0.0); // (1,2) strictly upper
    }
}
