//! Type-level storage order.
//!
//! Whether a 2-D scheme is row- or column-major is part of its type, so the
//! element-position arithmetic is resolved at compile time and a scheme can
//! only be handed to a kernel expecting the layout it actually has. The
//! marker collapses to a runtime [`Layout`] value at the dispatch boundary.

use crate::types::Layout;

/// Type-level marker fixing the memory layout of a 2-D storage scheme.
pub trait StorageOrder: Copy + Default + 'static {
    /// The runtime layout descriptor this marker stands for.
    const LAYOUT: Layout;

    /// True for column-major layouts.
    const IS_COL_MAJOR: bool = matches!(Self::LAYOUT, Layout::ColMajor);
}

/// Column-major (Fortran-style) layout. The default, matching native
/// BLAS/LAPACK conventions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColMajor;

/// Row-major (C-style) layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMajor;

impl StorageOrder for ColMajor {
    const LAYOUT: Layout = Layout::ColMajor;
}

impl StorageOrder for RowMajor {
    const LAYOUT: Layout = Layout::RowMajor;
}
