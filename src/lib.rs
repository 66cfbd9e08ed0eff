//! Storage schemes and zero-copy views for dense and banded matrices.
//!
//! This crate provides the memory-layout layer of a linear-algebra stack:
//! typed descriptions of how a logical 2-D index space maps onto a flat
//! buffer, with flexible index bases (0-based, 1-based, or arbitrary) so
//! that both C-style and FORTRAN-style conventions can be represented
//! without copying data.
//!
//! # Core Types
//!
//! - [`Array`] / [`ArrayView`] / [`ArrayViewMut`]: 1-D strided storage with
//!   owning, read-only-view, and mutable-view variants
//! - [`FullStorage`] / [`FullStorageView`] / [`FullStorageViewMut`]: dense
//!   2-D storage (row- or column-major, fixed at the type level) and
//!   zero-copy views over externally owned memory
//! - [`BandStorage`] / [`BandStorageView`] / [`BandStorageViewMut`]: packed
//!   diagonal storage for banded matrices, as used by banded BLAS/LAPACK
//!   routines
//!
//! The index-base and storage-order policies are type-level markers
//! ([`FortranIndex`] / [`CIndex`], [`ColMajor`] / [`RowMajor`]), so a
//! storage scheme's layout is part of its type and costs nothing at
//! runtime.
//!
//! # Interop
//!
//! - [`blas`]: dispatch layer translating a layout + index description into
//!   the calling convention of the selected backend (generic fallback, or
//!   native CBLAS behind the `cblas` feature)
//! - [`lapack`]: C-ABI entry points matching the reference LAPACK calling
//!   convention (argument order, 1-based indexing, error codes), wrapping
//!   caller buffers as views without copies
//!
//! # Example
//!
//! ```rust
//! use stridemat::{FullStorage, UpLo};
//!
//! // 4x4 column-major storage with FORTRAN-style 1-based indices.
//! let mut a: FullStorage<f64> = FullStorage::with_value(4, 4, 0.0);
//! a.fill_triangle(UpLo::Upper, 1.0);
//!
//! assert_eq!(*a.at(1, 1), 1.0);
//! assert_eq!(*a.at(1, 4), 1.0);
//! assert_eq!(*a.at(4, 1), 0.0);
//! ```
//!
//! # Contract
//!
//! The storage layer has no recoverable errors: out-of-range logical
//! indices and invalid view geometry are programming errors, caught by
//! `assert!` in the safe API and undefined behavior in the `unsafe
//! ..._unchecked` variants. [`StorageError`] is produced only by the
//! validated view constructors, which check a requested geometry against
//! the length of the supplied buffer.

mod array;
mod band;
mod band_view;
mod full;
mod full_view;
mod index;
mod order;
mod random;
mod types;

pub mod blas;
pub mod lapack;

// ============================================================================
// Storage schemes
// ============================================================================
pub use array::{Array, ArrayView, ArrayViewMut};
pub use band::BandStorage;
pub use band_view::{BandStorageView, BandStorageViewMut};
pub use full::FullStorage;
pub use full_view::{FullStorageView, FullStorageViewMut};

// ============================================================================
// Layout and index policies
// ============================================================================
pub use index::{CIndex, FortranIndex, Index, IndexBase};
pub use order::{ColMajor, RowMajor, StorageOrder};
pub use types::{Diag, Layout, Trans, UpLo};

// ============================================================================
// Random fill helpers
// ============================================================================
pub use random::{fill_random, fill_random_array, fill_random_band, fill_random_triangle};

// ============================================================================
// Error types
// ============================================================================

/// Errors produced by the validated view constructors.
///
/// Everything else in the storage layer treats contract violations as
/// programming errors (assertions), not recoverable conditions.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The supplied buffer cannot hold the requested geometry.
    #[error("buffer too small: geometry needs {required} elements, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },

    /// Leading dimension below the minimum for the requested extents.
    #[error("leading dimension {ld} below minimum {min}")]
    LeadingDimensionTooSmall { ld: usize, min: usize },

    /// A view stride must be non-zero.
    #[error("invalid stride 0")]
    ZeroStride,

    /// Integer overflow while computing an element offset.
    #[error("offset overflow while computing element position")]
    OffsetOverflow,
}

/// Result type for view construction.
pub type Result<T> = std::result::Result<T, StorageError>;
