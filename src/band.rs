//! Owning banded storage.
//!
//! A banded matrix stores only the diagonals within `num_sub_diags` below
//! and `num_super_diags` above the main diagonal, packed in the
//! BLAS/LAPACK `gb` convention: column-major, element `(i, j)` lives at
//! packed row `num_super_diags + i - j` of column `j` (row-major is the
//! mirror image). Elements outside the band are implicitly zero and not
//! addressable.

use std::marker::PhantomData;

use crate::array::{ArrayView, ArrayViewMut};
use crate::band_view::{BandStorageView, BandStorageViewMut};
use crate::index::{FortranIndex, Index, IndexBase};
use crate::order::{ColMajor, StorageOrder};

/// Owning packed-diagonal storage.
///
/// Rows and columns share one index base (`first_index`), matching the
/// convention of the banded LAPACK routines this layout feeds.
#[derive(Debug, Clone)]
pub struct BandStorage<T, O: StorageOrder = ColMajor, B: IndexBase = FortranIndex> {
    data: Vec<T>,
    num_rows: usize,
    num_cols: usize,
    num_sub: usize,
    num_super: usize,
    first_index: Index,
    _order: PhantomData<O>,
    _base: PhantomData<B>,
}

impl<T: Clone + Default, O: StorageOrder, B: IndexBase> BandStorage<T, O, B> {
    /// Create storage with default-valued elements.
    pub fn new(num_rows: usize, num_cols: usize, num_sub: usize, num_super: usize) -> Self {
        Self::with_value(num_rows, num_cols, num_sub, num_super, T::default())
    }
}

impl<T: Clone, O: StorageOrder, B: IndexBase> BandStorage<T, O, B> {
    /// Create storage filled with `value` (in-band and packing padding).
    pub fn with_value(
        num_rows: usize,
        num_cols: usize,
        num_sub: usize,
        num_super: usize,
        value: T,
    ) -> Self {
        Self::new_with_base(num_rows, num_cols, num_sub, num_super, B::FIRST_INDEX, value)
    }

    /// Create storage with an explicit index base.
    pub fn new_with_base(
        num_rows: usize,
        num_cols: usize,
        num_sub: usize,
        num_super: usize,
        first_index: Index,
        value: T,
    ) -> Self {
        let ld = num_sub + num_super + 1;
        let minor = if O::IS_COL_MAJOR { num_cols } else { num_rows };
        Self {
            data: vec![value; ld * minor],
            num_rows,
            num_cols,
            num_sub,
            num_super,
            first_index,
            _order: PhantomData,
            _base: PhantomData,
        }
    }

    /// Set every in-band element to `value`. Packing padding (the unused
    /// corners of the packed buffer) is left alone.
    pub fn fill(&mut self, value: T) {
        if self.num_rows == 0 {
            return;
        }
        for c in 0..self.num_cols {
            let (r0, r1) = self.col_band0(c);
            for r in r0..=r1 {
                let pos = self.position0(r, c);
                self.data[pos] = value.clone();
            }
        }
    }

    /// Change extents, band widths, and/or index base.
    ///
    /// Elements whose logical `(row, col)` lies in the intersection of the
    /// old and new index rectangles *and* inside both the old and the new
    /// band keep their values; all other in-band cells are set to `value`.
    /// Returns `true` iff the buffer was reallocated.
    pub fn resize(
        &mut self,
        num_rows: usize,
        num_cols: usize,
        num_sub: usize,
        num_super: usize,
        first_index: Index,
        value: T,
    ) -> bool {
        let same_geometry = num_rows == self.num_rows
            && num_cols == self.num_cols
            && num_sub == self.num_sub
            && num_super == self.num_super;
        if same_geometry && first_index == self.first_index {
            return false;
        }

        let old = self.clone_geometry();
        let reallocated = !same_geometry;

        let row_lo = old.first_index.max(first_index);
        let row_hi = (old.first_index + old.num_rows as Index - 1)
            .min(first_index + num_rows as Index - 1);
        let col_lo = old.first_index.max(first_index);
        let col_hi = (old.first_index + old.num_cols as Index - 1)
            .min(first_index + num_cols as Index - 1);

        let mut saved: Vec<(Index, Index, T)> = Vec::new();
        let mut row = row_lo;
        while row <= row_hi {
            let mut col = col_lo;
            while col <= col_hi {
                let d_old = col - row;
                let r_new = row - first_index;
                let c_new = col - first_index;
                let d_new = c_new - r_new;
                let in_old = d_old >= -(old.num_sub as Index) && d_old <= old.num_super as Index;
                let in_new = d_new >= -(num_sub as Index) && d_new <= num_super as Index;
                if in_old && in_new {
                    saved.push((row, col, self.at(row, col).clone()));
                }
                col += 1;
            }
            row += 1;
        }

        let ld = num_sub + num_super + 1;
        let minor = if O::IS_COL_MAJOR { num_cols } else { num_rows };
        if reallocated {
            self.data = vec![value.clone(); ld * minor];
            self.num_rows = num_rows;
            self.num_cols = num_cols;
            self.num_sub = num_sub;
            self.num_super = num_super;
        } else {
            self.fill(value);
        }
        self.first_index = first_index;

        for (row, col, v) in saved {
            *self.at_mut(row, col) = v;
        }
        reallocated
    }

    /// Ensure capacity for the given geometry without changing the logical
    /// extents or any element value. Returns `true` iff the buffer grew.
    pub fn reserve(
        &mut self,
        num_rows: usize,
        num_cols: usize,
        num_sub: usize,
        num_super: usize,
    ) -> bool {
        let ld = num_sub + num_super + 1;
        let minor = if O::IS_COL_MAJOR { num_cols } else { num_rows };
        let needed = ld * minor;
        if needed <= self.data.capacity() {
            return false;
        }
        self.data.reserve_exact(needed - self.data.len());
        true
    }

    fn clone_geometry(&self) -> GeometrySnapshot {
        GeometrySnapshot {
            num_rows: self.num_rows,
            num_cols: self.num_cols,
            num_sub: self.num_sub,
            num_super: self.num_super,
            first_index: self.first_index,
        }
    }
}

struct GeometrySnapshot {
    num_rows: usize,
    num_cols: usize,
    num_sub: usize,
    num_super: usize,
    first_index: Index,
}

impl<T, O: StorageOrder, B: IndexBase> BandStorage<T, O, B> {
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

    /// Stride between consecutive packed columns (column-major) or rows
    /// (row-major). Owning storage is unpadded: `num_sub + num_super + 1`.
    #[inline]
    pub fn leading_dimension(&self) -> usize {
        self.num_sub + self.num_super + 1
    }

    /// Packed position of the cell at 0-based offsets `(r, c)`.
    #[inline]
    fn position0(&self, r: usize, c: usize) -> usize {
        let ld = self.leading_dimension();
        if O::IS_COL_MAJOR {
            (c * ld) as usize + (self.num_super as isize + r as isize - c as isize) as usize
        } else {
            (r * ld) as usize + (self.num_sub as isize + c as isize - r as isize) as usize
        }
    }

    /// In-band row range (0-based) of packed column `c`.
    #[inline]
    fn col_band0(&self, c: usize) -> (usize, usize) {
        let r0 = c.saturating_sub(self.num_super);
        let r1 = (c + self.num_sub).min(self.num_rows.saturating_sub(1));
        (r0, r1)
    }

    /// In-band column range (0-based) of row `r`.
    #[inline]
    fn row_band0(&self, r: usize) -> (usize, usize) {
        let c0 = r.saturating_sub(self.num_sub);
        let c1 = (r + self.num_super).min(self.num_cols.saturating_sub(1));
        (c0, c1)
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

    /// Mutable element at logical position `(row, col)`. Must be in-band.
    #[inline]
    pub fn at_mut(&mut self, row: Index, col: Index) -> &mut T {
        let pos = self.position(row, col);
        &mut self.data[pos]
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

    /// Re-anchor the logical origin. No data moves.
    #[inline]
    pub fn change_index_base(&mut self, first_index: Index) {
        self.first_index = first_index;
    }

    /// The packed backing buffer.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// The packed backing buffer, mutable.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Pointer to the first packed element.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Mutable pointer to the first packed element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    /// The whole packed buffer as a 1-D view (includes packing padding).
    pub fn array_view(&self, first_view_index: Index) -> ArrayView<'_, T, B> {
        unsafe { ArrayView::new_unchecked(&self.data, 0, self.data.len(), 1, first_view_index) }
    }

    /// View of the whole band.
    pub fn view_full(&self) -> BandStorageView<'_, T, O, B> {
        BandStorageView::from_parts(
            &self.data,
            self.num_rows,
            self.num_cols,
            self.num_sub,
            self.num_super,
            self.leading_dimension(),
            self.first_index,
        )
    }

    /// Mutable view of the whole band.
    pub fn view_full_mut(&mut self) -> BandStorageViewMut<'_, T, O, B> {
        let (nr, nc) = (self.num_rows, self.num_cols);
        let (sub, sup) = (self.num_sub, self.num_super);
        let (ld, fi) = (self.leading_dimension(), self.first_index);
        BandStorageViewMut::from_parts(&mut self.data, nr, nc, sub, sup, ld, fi)
    }

    /// View exposing exactly the diagonals in `[from_diag, to_diag]`.
    ///
    /// See [`BandStorageView::view_diags`] for the re-anchoring rules.
    pub fn view_diags(&self, from_diag: Index, to_diag: Index) -> BandStorageView<'_, T, O, B> {
        self.view_full().view_diags(from_diag, to_diag)
    }

    /// Mutable counterpart of [`BandStorage::view_diags`].
    pub fn view_diags_mut(
        &mut self,
        from_diag: Index,
        to_diag: Index,
    ) -> BandStorageViewMut<'_, T, O, B> {
        self.view_full_mut().into_view_diags(from_diag, to_diag)
    }

    /// 1-D view of the `d`-th stored diagonal.
    pub fn view_diag(&self, d: Index, first_view_index: Index) -> ArrayView<'_, T, B> {
        let (offset, length) = diag_span(
            self.num_rows,
            self.num_cols,
            self.num_sub,
            self.num_super,
            self.leading_dimension(),
            O::IS_COL_MAJOR,
            d,
        );
        unsafe {
            ArrayView::new_unchecked(
                &self.data,
                offset,
                length,
                self.leading_dimension() as isize,
                first_view_index,
            )
        }
    }

    /// Mutable 1-D view of the `d`-th stored diagonal.
    pub fn view_diag_mut(&mut self, d: Index, first_view_index: Index) -> ArrayViewMut<'_, T, B> {
        let ld = self.leading_dimension();
        let (offset, length) = diag_span(
            self.num_rows,
            self.num_cols,
            self.num_sub,
            self.num_super,
            ld,
            O::IS_COL_MAJOR,
            d,
        );
        unsafe {
            ArrayViewMut::new_unchecked(&mut self.data, offset, length, ld as isize, first_view_index)
        }
    }

    /// 1-D view of the in-band portion of one row.
    ///
    /// The view's index base is `first_view_index`; its length is however
    /// many columns of `row` fall inside the band.
    pub fn view_row(&self, row: Index, first_view_index: Index) -> ArrayView<'_, T, B> {
        let r = self.checked_row_offset(row);
        let (c0, c1) = self.row_band0(r);
        let length = if self.num_cols == 0 || c0 > c1 { 0 } else { c1 + 1 - c0 };
        let offset = if length == 0 { 0 } else { self.position0(r, c0) };
        let stride = if O::IS_COL_MAJOR {
            self.leading_dimension() as isize - 1
        } else {
            1
        };
        unsafe { ArrayView::new_unchecked(&self.data, offset, length, stride, first_view_index) }
    }

    /// Mutable 1-D view of the in-band portion of one row.
    pub fn view_row_mut(&mut self, row: Index, first_view_index: Index) -> ArrayViewMut<'_, T, B> {
        let r = self.checked_row_offset(row);
        let (c0, c1) = self.row_band0(r);
        let length = if self.num_cols == 0 || c0 > c1 { 0 } else { c1 + 1 - c0 };
        let offset = if length == 0 { 0 } else { self.position0(r, c0) };
        let stride = if O::IS_COL_MAJOR {
            self.leading_dimension() as isize - 1
        } else {
            1
        };
        unsafe {
            ArrayViewMut::new_unchecked(&mut self.data, offset, length, stride, first_view_index)
        }
    }

    /// 1-D view of every `stride`-th in-band element of a row, columns
    /// `[first_col, last_col]`. The caller must have intersected the range
    /// with the band.
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
        let base_stride = if O::IS_COL_MAJOR {
            self.leading_dimension() as isize - 1
        } else {
            1
        };
        unsafe {
            ArrayView::new_unchecked(
                &self.data,
                offset,
                length,
                base_stride * stride,
                first_view_index,
            )
        }
    }

    /// 1-D view of the in-band portion of one column.
    pub fn view_col(&self, col: Index, first_view_index: Index) -> ArrayView<'_, T, B> {
        let c = self.checked_col_offset(col);
        let (r0, r1) = self.col_band0(c);
        let length = if self.num_rows == 0 || r0 > r1 { 0 } else { r1 + 1 - r0 };
        let offset = if length == 0 { 0 } else { self.position0(r0, c) };
        let stride = if O::IS_COL_MAJOR {
            1
        } else {
            self.leading_dimension() as isize - 1
        };
        unsafe { ArrayView::new_unchecked(&self.data, offset, length, stride, first_view_index) }
    }

    /// Mutable 1-D view of the in-band portion of one column.
    pub fn view_col_mut(&mut self, col: Index, first_view_index: Index) -> ArrayViewMut<'_, T, B> {
        let c = self.checked_col_offset(col);
        let (r0, r1) = self.col_band0(c);
        let length = if self.num_rows == 0 || r0 > r1 { 0 } else { r1 + 1 - r0 };
        let offset = if length == 0 { 0 } else { self.position0(r0, c) };
        let stride = if O::IS_COL_MAJOR {
            1
        } else {
            self.leading_dimension() as isize - 1
        };
        unsafe {
            ArrayViewMut::new_unchecked(&mut self.data, offset, length, stride, first_view_index)
        }
    }

    /// 1-D view of every `stride`-th in-band element of a column, rows
    /// `[first_row, last_row]`. The caller must have intersected the range
    /// with the band.
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
        let base_stride = if O::IS_COL_MAJOR {
            1
        } else {
            self.leading_dimension() as isize - 1
        };
        unsafe {
            ArrayView::new_unchecked(
                &self.data,
                offset,
                length,
                base_stride * stride,
                first_view_index,
            )
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
}

/// Packed offset and length of diagonal `d`.
pub(crate) fn diag_span(
    num_rows: usize,
    num_cols: usize,
    num_sub: usize,
    num_super: usize,
    ld: usize,
    col_major: bool,
    d: Index,
) -> (usize, usize) {
    assert!(
        d >= -(num_sub as Index) && d <= num_super as Index,
        "diagonal outside the stored band"
    );
    let (r0, c0) = if d >= 0 { (0usize, d as usize) } else { ((-d) as usize, 0usize) };
    let length = if d >= 0 {
        num_rows.min(num_cols.saturating_sub(d as usize))
    } else {
        num_rows.saturating_sub((-d) as usize).min(num_cols)
    };
    let offset = if col_major {
        c0 * ld + (num_super as isize + r0 as isize - c0 as isize) as usize
    } else {
        r0 * ld + (num_sub as isize + c0 as isize - r0 as isize) as usize
    };
    (offset, length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::CIndex;

    #[test]
    fn test_packed_position_colmajor() {
        // 4x4, one sub- and two super-diagonals: ld = 4.
        let mut a: BandStorage<i32, ColMajor, CIndex> = BandStorage::with_value(4, 4, 1, 2, 0);
        *a.at_mut(2, 1) = 21; // sub-diagonal
        *a.at_mut(1, 3) = 13; // second super-diagonal
        assert_eq!(a.data()[1 * 4 + 2 + 2 - 1], 21);
        assert_eq!(a.data()[3 * 4 + 2 + 1 - 3], 13);
    }

    #[test]
    fn test_fill_touches_only_band() {
        let mut a: BandStorage<i32, ColMajor, CIndex> = BandStorage::with_value(4, 4, 1, 1, -9);
        a.fill(5);
        // Packed corner cells stay at the construction value.
        // Column 0 has no super-diagonal entry: packed row 0 unused.
        assert_eq!(a.data()[0], -9);
        // Column 3 has no sub-diagonal entry: packed row 2 unused.
        assert_eq!(a.data()[3 * 3 + 2], -9);
        assert_eq!(*a.at(0, 0), 5);
        assert_eq!(*a.at(3, 2), 5);
    }

    #[test]
    fn test_row_and_col_views_clip_to_band() {
        let mut a: BandStorage<i32, ColMajor, CIndex> = BandStorage::with_value(5, 5, 1, 2, 0);
        for r in 0..5isize {
            for c in 0..5isize {
                if (c - r) >= -1 && (c - r) <= 2 {
                    *a.at_mut(r, c) = (r * 10 + c) as i32;
                }
            }
        }
        let row2 = a.view_row(2, 0);
        // Row 2 spans columns 1..=4.
        assert_eq!(row2.length(), 4);
        assert_eq!(*row2.at(0), 21);
        assert_eq!(*row2.at(3), 24);

        let col0 = a.view_col(0, 0);
        // Column 0 spans rows 0..=1.
        assert_eq!(col0.length(), 2);
        assert_eq!(*col0.at(1), 10);
    }

    #[test]
    fn test_resize_wider_band_preserves() {
        let mut a: BandStorage<i32, ColMajor, CIndex> = BandStorage::with_value(4, 4, 0, 1, 0);
        *a.at_mut(1, 2) = 12;
        *a.at_mut(2, 2) = 22;
        let realloc = a.resize(4, 4, 1, 1, 0, -1);
        assert!(realloc);
        assert_eq!(*a.at(1, 2), 12);
        assert_eq!(*a.at(2, 2), 22);
        // Newly exposed sub-diagonal cells carry the fill value.
        assert_eq!(*a.at(2, 1), -1);
    }

    #[test]
    fn test_diag_view() {
        let mut a: BandStorage<i32, ColMajor, CIndex> = BandStorage::with_value(4, 4, 1, 1, 0);
        for k in 0..3isize {
            *a.at_mut(k + 1, k) = 100 + k as i32;
        }
        let sub = a.view_diag(-1, 0);
        assert_eq!(sub.length(), 3);
        assert_eq!(sub.stride(), 3); // = ld
        assert_eq!(*sub.at(0), 100);
        assert_eq!(*sub.at(2), 102);
    }
}
