//! Triangular block copy.
//!
//! `B := op(A)` restricted to one triangle of the `m x n` destination:
//! `op` is the identity, transpose, conjugate, or conjugate transpose,
//! and [`Diag::Unit`] leaves the diagonal alone (it is implicitly unit in
//! the destination's consumer). Cells outside the selected triangle are
//! never read from `A` nor written to `B`.
//!
//! The host version is generic; when a device backend is configured (the
//! `device` feature), the same operation is declared for host/device and
//! device/device buffer pairs through [`TrcopyDevice`], with the opaque
//! buffer handle owned by the implementing backend.

use num_complex::ComplexFloat;

use crate::types::{Diag, Layout, Trans, UpLo};

/// Copy one triangle of `op(A)` into the `m x n` matrix `B`.
///
/// - `uplo` selects the destination triangle (`Upper`: `row <= col`).
/// - For `Trans::NoTrans` / `Trans::Conj` the source `A` is `m x n`; for
///   `Trans::Trans` / `Trans::ConjTrans` it is `n x m` and read
///   transposed.
/// - `Diag::Unit` skips the diagonal.
///
/// Both matrices use the same `layout` with their own leading dimensions.
#[allow(clippy::too_many_arguments)]
pub fn trcopy<T: ComplexFloat>(
    layout: Layout,
    uplo: UpLo,
    trans: Trans,
    diag: Diag,
    m: usize,
    n: usize,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) {
    let idx = |i: usize, j: usize, ld: usize| -> usize {
        match layout {
            Layout::ColMajor => i + j * ld,
            Layout::RowMajor => i * ld + j,
        }
    };
    let conjugate = trans.is_conjugated();
    for j in 0..n {
        for i in 0..m {
            if !uplo.contains(i, j) {
                continue;
            }
            if matches!(diag, Diag::Unit) && i == j {
                continue;
            }
            let src = if trans.is_transposed() {
                a[idx(j, i, lda)]
            } else {
                a[idx(i, j, lda)]
            };
            b[idx(i, j, ldb)] = if conjugate { src.conj() } else { src };
        }
    }
}

/// Triangular copies against a device backend.
///
/// The three directions mirror the host [`trcopy`]; `DeviceBuf` /
/// `DeviceBufMut` are whatever handle the backend uses for device-resident
/// matrices. Every copy is synchronous from the caller's perspective: the
/// call returns only when `B` holds the result.
#[cfg(feature = "device")]
pub trait TrcopyDevice<T> {
    /// Read-only device-resident buffer handle.
    type DeviceBuf;
    /// Mutable device-resident buffer handle.
    type DeviceBufMut;

    /// Host to device: `B(device) := op(A)`.
    #[allow(clippy::too_many_arguments)]
    fn trcopy_to_device(
        &self,
        layout: Layout,
        uplo: UpLo,
        trans: Trans,
        diag: Diag,
        m: usize,
        n: usize,
        a: &[T],
        lda: usize,
        b: &mut Self::DeviceBufMut,
        ldb: usize,
    );

    /// Device to host: `B := op(A(device))`.
    #[allow(clippy::too_many_arguments)]
    fn trcopy_from_device(
        &self,
        layout: Layout,
        uplo: UpLo,
        trans: Trans,
        diag: Diag,
        m: usize,
        n: usize,
        a: &Self::DeviceBuf,
        lda: usize,
        b: &mut [T],
        ldb: usize,
    );

    /// Device to device: `B(device) := op(A(device))`.
    #[allow(clippy::too_many_arguments)]
    fn trcopy_on_device(
        &self,
        layout: Layout,
        uplo: UpLo,
        trans: Trans,
        diag: Diag,
        m: usize,
        n: usize,
        a: &Self::DeviceBuf,
        lda: usize,
        b: &mut Self::DeviceBufMut,
        ldb: usize,
    );
}
