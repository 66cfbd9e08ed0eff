//! Non-owning banded views.
//!
//! Same packed-diagonal indexing contract as [`BandStorage`], over a
//! borrowed buffer with an explicit leading dimension (which may exceed
//! `num_sub + num_super + 1` when the view was carved out of a wider
//! band). Construction never allocates; the view's lifetime is tied to the
//! borrowed buffer.
//!
//! [`BandStorage`]: crate::band::BandStorage

use std::marker::PhantomData;

use crate::array::{ArrayView, ArrayViewMut};
use crate::band::diag_span;
use crate::index::{FortranIndex, Index, IndexBase};
use crate::order::{ColMajor, StorageOrder};
use crate::{Result, StorageError};

/// A read-only banded view.
#[derive(Debug)]
pub struct BandStorageView<'a, T, O: StorageOrder = ColMajor, B: IndexBase = FortranIndex> {
    data: &'a [T],
    num_rows: usize,
    num_cols: usize,
    num_sub: usize,
    num_super: usize,
    leading_dimension: usize,
    first_index: Index,
    _order: PhantomData<O>,
    _base: PhantomData<B>,
}

/// A mutable banded view.
#[derive(Debug)]
pub struct BandStorageViewMut<'a, T, O: StorageOrder = ColMajor, B: IndexBase = FortranIndex> {
    data: &'a mut [T],
    num_rows: usize,
    num_cols: usize,
    num_sub: usize,
    num_super: usize,
    leading_dimension: usize,
    first_index: Index,
    _order: PhantomData<O>,
    _base: PhantomData<B>,
}

fn validate_band<O: StorageOrder>(
    data_len: usize,
    num_rows: usize,
    num_cols: usize,
    num_sub: usize,
    num_super: usize,
    ld: usize,
) -> Result<()> {
    let width = num_sub + num_super + 1;
    if ld < width {
        return Err(StorageError::LeadingDimensionTooSmall { ld, min: width });
    }
    let minor = if O::IS_COL_MAJOR { num_cols } else { num_rows };
    if minor == 0 {
        return Ok(());
    }
    let required = (minor - 1) * ld + width;
    if required > data_len {
        return Err(StorageError::BufferTooSmall {
            required,
            actual: data_len,
        });
    }
    Ok(())
}

/// Geometry of a `view_diags` sub-band: buffer offset, extents, band
/// widths. Ranges that exclude the main diagonal shift the row/column
/// origin so the extreme requested diagonal becomes the sub-view's main
/// diagonal.
#[allow(clippy::too_many_arguments)]
fn diags_subband(
    num_rows: usize,
    num_cols: usize,
    num_sub: usize,
    num_super: usize,
    ld: usize,
    col_major: bool,
    from_diag: Index,
    to_diag: Index,
) -> (usize, usize, usize, usize, usize) {
    assert!(from_diag <= to_diag, "empty diagonal range");
    assert!(
        from_diag >= -(num_sub as Index) && to_diag <= num_super as Index,
        "diagonal range outside the stored band"
    );
    let shift_col = from_diag.max(0) as usize;
    let shift_row = (-to_diag).max(0) as usize;
    let new_sub = (-(from_diag - shift_col as Index + shift_row as Index)) as usize;
    let new_super = (to_diag - shift_col as Index + shift_row as Index) as usize;
    let offset = if col_major {
        shift_col * ld + (num_super - new_super) + shift_row - shift_col
    } else {
        shift_row * ld + (num_sub - new_sub) + shift_col - shift_row
    };
    (
        offset,
        num_rows - shift_row,
        num_cols - shift_col,
        new_sub,
        new_super,
    )
}

macro_rules! impl_band_view_common {
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

        /// Number of stored sub-diagonals.
        #[inline]
        pub fn num_sub_diags(&self) -> usize {
            self.num_sub
        }

        /// Number of stored super-diagonals.
        #[inline]
        pub fn num_super_diags(&self) -> usize {
            self.num_super
        }

        /// The order of the matrix. Square matrices only.
        #[inline]
        pub fn dim(&self) -> usize {
            assert!(self.num_rows == self.num_cols, "dim() requires a square matrix");
            self.num_rows
        }

        /// Logical index of the first row/column.
        #[inline]
        pub fn first_index(&self) -> Index {
            self.first_index
        }

        /// Logical index of the last row or column, whichever is larger.
        #[inline]
        pub fn last_index(&self) -> Index {
            self.first_index + self.num_rows.max(self.num_cols) as Index - 1
        }

        /// Logical index of the first row.
        #[inline]
        pub fn first_row(&self) -> Index {
            self.first_index
        }

        /// Logical index of the last row.
        #[inline]
        pub fn last_row(&self) -> Index {
            self.first_index + self.num_rows as Index - 1
        }

        /// Logical index of the first column.
        #[inline]
        pub fn first_col(&self) -> Index {
            self.first_index
        }

        /// Logical index of the last column.
        #[inline]
        pub fn last_col(&self) -> Index {
            self.first_index + self.num_cols as Index - 1
        }

        /// Stride between consecutive packed columns (column-major) or
        /// rows (row-major).
        #[inline]
        pub fn leading_dimension(&self) -> usize {
            self.leading_dimension
        }

        /// Packed position of the cell at 0-based offsets `(r, c)`.
        #[inline]
        fn position0(&self, r: usize, c: usize) -> usize {
            let ld = self.leading_dimension;
            if O::IS_COL_MAJOR {
                c * ld + (self.num_super as isize + r as isize - c as isize) as usize
            } else {
                r * ld + (self.num_sub as isize + c as isize - r as isize) as usize
            }
        }

        #[inline]
        fn position(&self, row: Index, col: Index) -> usize {
            assert!(
                row >= self.first_row() && row <= self.last_row(),
                "row index out of range"
            );
            assert!(
                col >= self.first_col() && col <= self.last_col(),
                "column index out of range"
            );
            let d = col - row;
            assert!(
                d >= -(self.num_sub as Index) && d <= self.num_super as Index,
                "index outside the stored band"
            );
            self.position0(
                (row - self.first_index) as usize,
                (col - self.first_index) as usize,
            )
        }

        /// Element at logical position `(row, col)`. Must be in-band.
        #[inline]
        pub fn at(&self, row: Index, col: Index) -> &T {
            &self.data[self.position(row, col)]
        }

        /// Element access without bounds or band checking.
        ///
        /// # Safety
        /// `(row, col)` must lie inside the logical rectangle and the band.
        #[inline]
        pub unsafe fn at_unchecked(&self, row: Index, col: Index) -> &T {
            let pos = self.position0(
                (row - self.first_index) as usize,
                (col - self.first_index) as usize,
            );
            unsafe { self.data.get_unchecked(pos) }
        }

        /// Re-anchor the logical origin. No data moves.
        #[inline]
        pub fn change_index_base(&mut self, first_index: Index) {
            self.first_index = first_index;
        }

        /// Pointer to the first packed element.
        #[inline]
        pub fn as_ptr(&self) -> *const T {
            self.data.as_ptr()
        }

        /// In-band column range (0-based) of row `r`.
        #[inline]
        fn row_band0(&self, r: usize) -> (usize, usize) {
            let c0 = r.saturating_sub(self.num_sub);
            let c1 = (r + self.num_super).min(self.num_cols.saturating_sub(1));
            (c0, c1)
        }

        /// In-band row range (0-based) of column `c`.
        #[inline]
        fn col_band0(&self, c: usize) -> (usize, usize) {
            let r0 = c.saturating_sub(self.num_super);
            let r1 = (c + self.num_sub).min(self.num_rows.saturating_sub(1));
            (r0, r1)
        }

        #[inline]
        fn row_view_stride(&self) -> isize {
            if O::IS_COL_MAJOR {
                self.leading_dimension as isize - 1
            } else {
                1
            }
        }

        #[inline]
        fn col_view_stride(&self) -> isize {
            if O::IS_COL_MAJOR {
                1
            } else {
                self.leading_dimension as isize - 1
            }
        }

        fn checked_row_offset(&self, row: Index) -> usize {
            assert!(
                row >= self.first_row() && row <= self.last_row(),
                "row index out of range"
            );
            (row - self.first_index) as usize
        }

        fn checked_col_offset(&self, col: Index) -> usize {
            assert!(
                col >= self.first_col() && col <= self.last_col(),
                "column index out of range"
            );
            (col - self.first_index) as usize
        }
    };
}

// ============================================================================
// BandStorageView
// ============================================================================

impl<'a, T, O: StorageOrder, B: IndexBase> BandStorageView<'a, T, O, B> {
    /// Wrap a packed buffer.
    ///
    /// # Errors
    /// Fails if `leading_dimension < num_sub + num_super + 1` or the
    /// buffer cannot hold the geometry.
    pub fn new(
        data: &'a [T],
        num_rows: usize,
        num_cols: usize,
        num_sub: usize,
        num_super: usize,
        leading_dimension: usize,
        first_index: Index,
    ) -> Result<Self> {
        validate_band::<O>(data.len(), num_rows, num_cols, num_sub, num_super, leading_dimension)?;
        Ok(Self::from_parts(
            data,
            num_rows,
            num_cols,
            num_sub,
            num_super,
            leading_dimension,
            first_index,
        ))
    }

    /// Construct without validation.
    ///
    /// # Safety
    /// Every in-band cell must map inside `data`.
    pub unsafe fn new_unchecked(
        data: &'a [T],
        num_rows: usize,
        num_cols: usize,
        num_sub: usize,
        num_super: usize,
        leading_dimension: usize,
        first_index: Index,
    ) -> Self {
        Self::from_parts(data, num_rows, num_cols, num_sub, num_super, leading_dimension, first_index)
    }

    /// Wrap a raw pointer in native banded (FORTRAN `gb`) convention.
    ///
    /// # Safety
    /// `ptr` must be valid for reads of the full packed span for the
    /// lifetime `'a`, and the memory must not be mutated through another
    /// handle while the view lives.
    pub unsafe fn from_raw_parts(
        ptr: *const T,
        num_rows: usize,
        num_cols: usize,
        num_sub: usize,
        num_super: usize,
        leading_dimension: usize,
        first_index: Index,
    ) -> Self {
        let minor = if O::IS_COL_MAJOR { num_cols } else { num_rows };
        let len = if minor == 0 {
            0
        } else {
            (minor - 1) * leading_dimension + num_sub + num_super + 1
        };
        let data = unsafe { std::slice::from_raw_parts(ptr, len) };
        Self::from_parts(data, num_rows, num_cols, num_sub, num_super, leading_dimension, first_index)
    }

    pub(crate) fn from_parts(
        data: &'a [T],
        num_rows: usize,
        num_cols: usize,
        num_sub: usize,
        num_super: usize,
        leading_dimension: usize,
        first_index: Index,
    ) -> Self {
        Self {
            data,
            num_rows,
            num_cols,
            num_sub,
            num_super,
            leading_dimension,
            first_index,
            _order: PhantomData,
            _base: PhantomData,
        }
    }

    impl_band_view_common!();

    /// View exposing exactly the diagonals in `[from_diag, to_diag]`
    /// (inclusive; negative = sub-diagonals, 0 = main).
    ///
    /// When the range excludes the main diagonal, the sub-view's
    /// row/column origin shifts so that the extreme requested diagonal
    /// becomes its main diagonal; the index base is re-anchored at the
    /// trimmed corner.
    pub fn view_diags(&self, from_diag: Index, to_diag: Index) -> BandStorageView<'a, T, O, B> {
        let (offset, nr, nc, sub, sup) = diags_subband(
            self.num_rows,
            self.num_cols,
            self.num_sub,
            self.num_super,
            self.leading_dimension,
            O::IS_COL_MAJOR,
            from_diag,
            to_diag,
        );
        BandStorageView::from_parts(
            &self.data[offset..],
            nr,
            nc,
            sub,
            sup,
            self.leading_dimension,
            self.first_index,
        )
    }

    /// 1-D view of the `d`-th stored diagonal.
    pub fn view_diag(&self, d: Index, first_view_index: Index) -> ArrayView<'a, T, B> {
        let (offset, length) = diag_span(
            self.num_rows,
            self.num_cols,
            self.num_sub,
            self.num_super,
            self.leading_dimension,
            O::IS_COL_MAJOR,
            d,
        );
        unsafe {
            ArrayView::new_unchecked(
                self.data,
                offset,
                length,
                self.leading_dimension as isize,
                first_view_index,
            )
        }
    }

    /// 1-D view of the in-band portion of one row.
    pub fn view_row(&self, row: Index, first_view_index: Index) -> ArrayView<'a, T, B> {
        let r = self.checked_row_offset(row);
        let (c0, c1) = self.row_band0(r);
        let length = if self.num_cols == 0 || c0 > c1 { 0 } else { c1 + 1 - c0 };
        let offset = if length == 0 { 0 } else { self.position0(r, c0) };
        unsafe {
            ArrayView::new_unchecked(self.data, offset, length, self.row_view_stride(), first_view_index)
        }
    }

    /// 1-D view of every `stride`-th in-band element of a row, columns
    /// `[first_col, last_col]`. The caller must have intersected the
    /// range with the band.
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
                self.row_view_stride() * stride,
                first_view_index,
            )
        }
    }

    /// 1-D view of the in-band portion of one column.
    pub fn view_col(&self, col: Index, first_view_index: Index) -> ArrayView<'a, T, B> {
        let c = self.checked_col_offset(col);
        let (r0, r1) = self.col_band0(c);
        let length = if self.num_rows == 0 || r0 > r1 { 0 } else { r1 + 1 - r0 };
        let offset = if length == 0 { 0 } else { self.position0(r0, c) };
        unsafe {
            ArrayView::new_unchecked(self.data, offset, length, self.col_view_stride(), first_view_index)
        }
    }

    /// 1-D view of every `stride`-th in-band element of a column, rows
    /// `[first_row, last_row]`. The caller must have intersected the
    /// range with the band.
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
                self.col_view_stride() * stride,
                first_view_index,
            )
        }
    }
}

// ============================================================================
// BandStorageViewMut
// ============================================================================

impl<'a, T, O: StorageOrder, B: IndexBase> BandStorageViewMut<'a, T, O, B> {
    /// Wrap a mutable packed buffer.
    ///
    /// # Errors
    /// Fails if `leading_dimension < num_sub + num_super + 1` or the
    /// buffer cannot hold the geometry.
    pub fn new(
        data: &'a mut [T],
        num_rows: usize,
        num_cols: usize,
        num_sub: usize,
        num_super: usize,
        leading_dimension: usize,
        first_index: Index,
    ) -> Result<Self> {
        validate_band::<O>(data.len(), num_rows, num_cols, num_sub, num_super, leading_dimension)?;
        Ok(Self::from_parts(
            data,
            num_rows,
            num_cols,
            num_sub,
            num_super,
            leading_dimension,
            first_index,
        ))
    }

    /// Construct without validation.
    ///
    /// # Safety
    /// Every in-band cell must map inside `data`.
    pub unsafe fn new_unchecked(
        data: &'a mut [T],
        num_rows: usize,
        num_cols: usize,
        num_sub: usize,
        num_super: usize,
        leading_dimension: usize,
        first_index: Index,
    ) -> Self {
        Self::from_parts(data, num_rows, num_cols, num_sub, num_super, leading_dimension, first_index)
    }

    /// Wrap a raw pointer in native banded (FORTRAN `gb`) convention.
    ///
    /// # Safety
    /// `ptr` must be valid for reads and writes of the full packed span
    /// for the lifetime `'a`, with no other handle accessing that memory
    /// while the view lives.
    pub unsafe fn from_raw_parts(
        ptr: *mut T,
        num_rows: usize,
        num_cols: usize,
        num_sub: usize,
        num_super: usize,
        leading_dimension: usize,
        first_index: Index,
    ) -> Self {
        let minor = if O::IS_COL_MAJOR { num_cols } else { num_rows };
        let len = if minor == 0 {
            0
        } else {
            (minor - 1) * leading_dimension + num_sub + num_super + 1
        };
        let data = unsafe { std::slice::from_raw_parts_mut(ptr, len) };
        Self::from_parts(data, num_rows, num_cols, num_sub, num_super, leading_dimension, first_index)
    }

    pub(crate) fn from_parts(
        data: &'a mut [T],
        num_rows: usize,
        num_cols: usize,
        num_sub: usize,
        num_super: usize,
        leading_dimension: usize,
        first_index: Index,
    ) -> Self {
        Self {
            data,
            num_rows,
            num_cols,
            num_sub,
            num_super,
            leading_dimension,
            first_index,
            _order: PhantomData,
            _base: PhantomData,
        }
    }

    impl_band_view_common!();

    /// Mutable element at logical position `(row, col)`. Must be in-band.
    #[inline]
    pub fn at_mut(&mut self, row: Index, col: Index) -> &mut T {
        let pos = self.position(row, col);
        &mut self.data[pos]
    }

    /// Mutable element access without bounds or band checking.
    ///
    /// # Safety
    /// `(row, col)` must lie inside the logical rectangle and the band.
    #[inline]
    pub unsafe fn at_unchecked_mut(&mut self, row: Index, col: Index) -> &mut T {
        let pos = self.position0(
            (row - self.first_index) as usize,
            (col - self.first_index) as usize,
        );
        unsafe { self.data.get_unchecked_mut(pos) }
    }

    /// Mutable pointer to the first packed element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Set every in-band element to `value`. Packing padding is left
    /// alone.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for c in 0..self.num_cols {
            let (r0, r1) = self.col_band0(c);
            if self.num_rows == 0 {
                continue;
            }
            for r in r0..=r1 {
                let pos = self.position0(r, c);
                self.data[pos] = value.clone();
            }
        }
    }

    /// Views cannot reallocate: succeeds (returning `false`) iff the
    /// requested geometry already matches, re-anchoring the index base.
    ///
    /// # Panics
    /// Panics if extents or band widths differ from the view's.
    pub fn resize(
        &mut self,
        num_rows: usize,
        num_cols: usize,
        num_sub: usize,
        num_super: usize,
        first_index: Index,
    ) -> bool {
        assert!(
            num_rows == self.num_rows
                && num_cols == self.num_cols
                && num_sub == self.num_sub
                && num_super == self.num_super,
            "cannot resize a non-owning view"
        );
        self.change_index_base(first_index);
        false
    }

    /// Views carry no capacity of their own: succeeds (returning `false`)
    /// iff the requested geometry already fits the view's.
    ///
    /// # Panics
    /// Panics if extents or band widths exceed the view's.
    pub fn reserve(
        &self,
        num_rows: usize,
        num_cols: usize,
        num_sub: usize,
        num_super: usize,
    ) -> bool {
        assert!(
            num_rows <= self.num_rows
                && num_cols <= self.num_cols
                && num_sub <= self.num_sub
                && num_super <= self.num_super,
            "cannot grow a non-owning view"
        );
        false
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> BandStorageView<'_, T, O, B> {
        BandStorageView::from_parts(
            self.data,
            self.num_rows,
            self.num_cols,
            self.num_sub,
            self.num_super,
            self.leading_dimension,
            self.first_index,
        )
    }

    /// Mutable view exposing exactly the diagonals in
    /// `[from_diag, to_diag]`, reborrowing from `self`.
    pub fn view_diags_mut(
        &mut self,
        from_diag: Index,
        to_diag: Index,
    ) -> BandStorageViewMut<'_, T, O, B> {
        let (offset, nr, nc, sub, sup) = diags_subband(
            self.num_rows,
            self.num_cols,
            self.num_sub,
            self.num_super,
            self.leading_dimension,
            O::IS_COL_MAJOR,
            from_diag,
            to_diag,
        );
        BandStorageViewMut::from_parts(
            &mut self.data[offset..],
            nr,
            nc,
            sub,
            sup,
            self.leading_dimension,
            self.first_index,
        )
    }

    /// Consuming variant of [`BandStorageViewMut::view_diags_mut`],
    /// keeping the original borrow's lifetime.
    pub fn into_view_diags(self, from_diag: Index, to_diag: Index) -> BandStorageViewMut<'a, T, O, B> {
        let (offset, nr, nc, sub, sup) = diags_subband(
            self.num_rows,
            self.num_cols,
            self.num_sub,
            self.num_super,
            self.leading_dimension,
            O::IS_COL_MAJOR,
            from_diag,
            to_diag,
        );
        BandStorageViewMut::from_parts(
            &mut self.data[offset..],
            nr,
            nc,
            sub,
            sup,
            self.leading_dimension,
            self.first_index,
        )
    }

    /// Mutable 1-D view of the `d`-th stored diagonal.
    pub fn view_diag_mut(&mut self, d: Index, first_view_index: Index) -> ArrayViewMut<'_, T, B> {
        let (offset, length) = diag_span(
            self.num_rows,
            self.num_cols,
            self.num_sub,
            self.num_super,
            self.leading_dimension,
            O::IS_COL_MAJOR,
            d,
        );
        let stride = self.leading_dimension as isize;
        unsafe { ArrayViewMut::new_unchecked(self.data, offset, length, stride, first_view_index) }
    }

    /// Mutable 1-D view of the in-band portion of one row.
    pub fn view_row_mut(&mut self, row: Index, first_view_index: Index) -> ArrayViewMut<'_, T, B> {
        let r = self.checked_row_offset(row);
        let (c0, c1) = self.row_band0(r);
        let length = if self.num_cols == 0 || c0 > c1 { 0 } else { c1 + 1 - c0 };
        let offset = if length == 0 { 0 } else { self.position0(r, c0) };
        let stride = self.row_view_stride();
        unsafe { ArrayViewMut::new_unchecked(self.data, offset, length, stride, first_view_index) }
    }

    /// Mutable 1-D view of every `stride`-th in-band element of a row.
    /// The caller must have intersected the range with the band.
    pub fn view_row_part_mut(
        &mut self,
        row: Index,
        first_col: Index,
        last_col: Index,
        stride: isize,
        first_view_index: Index,
    ) -> ArrayViewMut<'_, T, B> {
        assert!(stride >= 1, "view stride must be >= 1");
        assert!(first_col <= last_col, "empty view range");
        let offset = self.position(row, first_col);
        let _ = self.position(row, last_col);
        let length = ((last_col - first_col) / stride as Index) as usize + 1;
        let view_stride = self.row_view_stride() * stride;
        unsafe {
            ArrayViewMut::new_unchecked(self.data, offset, length, view_stride, first_view_index)
        }
    }

    /// Mutable 1-D view of the in-band portion of one column.
    pub fn view_col_mut(&mut self, col: Index, first_view_index: Index) -> ArrayViewMut<'_, T, B> {
        let c = self.checked_col_offset(col);
        let (r0, r1) = self.col_band0(c);
        let length = if self.num_rows == 0 || r0 > r1 { 0 } else { r1 + 1 - r0 };
        let offset = if length == 0 { 0 } else { self.position0(r0, c) };
        let stride = self.col_view_stride();
        unsafe { ArrayViewMut::new_unchecked(self.data, offset, length, stride, first_view_index) }
    }

    /// Mutable 1-D view of every `stride`-th in-band element of a column.
    /// The caller must have intersected the range with the band.
    pub fn view_col_part_mut(
        &mut self,
        first_row: Index,
        last_row: Index,
        stride: isize,
        col: Index,
        first_view_index: Index,
    ) -> ArrayViewMut<'_, T, B> {
        assert!(stride >= 1, "view stride must be >= 1");
        assert!(first_row <= last_row, "empty view range");
        let offset = self.position(first_row, col);
        let _ = self.position(last_row, col);
        let length = ((last_row - first_row) / stride as Index) as usize + 1;
        let view_stride = self.col_view_stride() * stride;
        unsafe {
            ArrayViewMut::new_unchecked(self.data, offset, length, view_stride, first_view_index)
        }
    }
}
