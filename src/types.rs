//! Runtime layout descriptors shared by the storage schemes and the
//! dispatch layer.
//!
//! These are the currency of the BLAS-facing API: a storage scheme's
//! type-level order collapses to a [`Layout`] value at the dispatch
//! boundary, and triangular/transpose/diagonal flags mirror the
//! corresponding BLAS enumerations.

/// Memory layout of a 2-D scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Row-major (C-style): rows are contiguous.
    RowMajor,
    /// Column-major (Fortran-style): columns are contiguous.
    ColMajor,
}

impl Layout {
    /// The layout with the roles of rows and columns swapped.
    #[inline]
    pub fn transposed(self) -> Layout {
        match self {
            Layout::RowMajor => Layout::ColMajor,
            Layout::ColMajor => Layout::RowMajor,
        }
    }
}

/// Which triangular part of a matrix an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpLo {
    /// The upper triangle, diagonal included (`row <= col`).
    Upper,
    /// The lower triangle, diagonal included (`row >= col`).
    Lower,
}

impl UpLo {
    /// The opposite triangle.
    #[inline]
    pub fn flipped(self) -> UpLo {
        match self {
            UpLo::Upper => UpLo::Lower,
            UpLo::Lower => UpLo::Upper,
        }
    }

    /// Whether the cell at the given 0-based offsets belongs to this
    /// triangle (diagonal included).
    #[inline]
    pub fn contains(self, row: usize, col: usize) -> bool {
        match self {
            UpLo::Upper => row <= col,
            UpLo::Lower => row >= col,
        }
    }
}

/// Transposition applied to an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trans {
    /// Use the operand as stored.
    NoTrans,
    /// Use the transpose.
    Trans,
    /// Use the element-wise conjugate (no transposition).
    Conj,
    /// Use the conjugate transpose.
    ConjTrans,
}

impl Trans {
    /// Whether the operand's row/column roles are swapped.
    #[inline]
    pub fn is_transposed(self) -> bool {
        matches!(self, Trans::Trans | Trans::ConjTrans)
    }

    /// Whether elements are conjugated.
    #[inline]
    pub fn is_conjugated(self) -> bool {
        matches!(self, Trans::Conj | Trans::ConjTrans)
    }
}

/// Whether the diagonal participates in a triangular operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diag {
    /// Diagonal elements are part of the operation.
    NonUnit,
    /// Diagonal elements are implicitly unit and are skipped.
    Unit,
}

// ============================================================================
// CBLAS conversions
// ============================================================================

#[cfg(feature = "cblas")]
impl Layout {
    pub(crate) fn to_cblas(self) -> cblas_sys::CBLAS_LAYOUT {
        match self {
            Layout::RowMajor => cblas_sys::CBLAS_LAYOUT::CblasRowMajor,
            Layout::ColMajor => cblas_sys::CBLAS_LAYOUT::CblasColMajor,
        }
    }
}

#[cfg(feature = "cblas")]
impl UpLo {
    pub(crate) fn to_cblas(self) -> cblas_sys::CBLAS_UPLO {
        match self {
            UpLo::Upper => cblas_sys::CBLAS_UPLO::CblasUpper,
            UpLo::Lower => cblas_sys::CBLAS_UPLO::CblasLower,
        }
    }
}
