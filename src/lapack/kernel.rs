//! Schur-form kernel injection.
//!
//! The C shim validates arguments and wraps buffers; the eigenvalue work
//! itself is delegated to a registered kernel, so any implementation (a
//! native LAPACK build, a pure-Rust solver) can be plugged in at runtime
//! without recompiling.

use std::sync::RwLock;

use crate::array::ArrayViewMut;
use crate::full_view::FullStorageViewMut;

/// Which condition numbers the caller asked for (`SENSE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    /// `'N'`: none.
    None,
    /// `'E'`: for the average of the selected eigenvalues.
    Eigenvalues,
    /// `'V'`: for the selected right invariant subspace.
    InvariantSubspace,
    /// `'B'`: both.
    Both,
}

impl Sense {
    pub(crate) fn from_flag(flag: u8) -> Option<Sense> {
        match flag {
            b'N' => Some(Sense::None),
            b'E' => Some(Sense::Eigenvalues),
            b'V' => Some(Sense::InvariantSubspace),
            b'B' => Some(Sense::Both),
            _ => None,
        }
    }

    /// Whether eigenvalue condition numbers are computed.
    pub fn wants_eigenvalue_condition(self) -> bool {
        matches!(self, Sense::Eigenvalues | Sense::Both)
    }

    /// Whether subspace condition numbers are computed.
    pub fn wants_subspace_condition(self) -> bool {
        matches!(self, Sense::InvariantSubspace | Sense::Both)
    }
}

/// Everything a Schur kernel receives from the shim.
///
/// All matrix/vector arguments are zero-copy views over the caller's
/// buffers, 1-based and column-major as LAPACK hands them over. `bwork`
/// is the internal representation of the selection workspace; the shim
/// copies it back into the caller's `LOGICAL` array after the kernel
/// returns.
pub struct DgeesxTask<'a, 'b> {
    /// Compute Schur vectors (`JOBVS = 'V'`).
    pub compute_vs: bool,
    /// Order selected eigenvalues to the top left (`SORT = 'S'`).
    pub sort: bool,
    /// Requested condition numbers.
    pub sense: Sense,
    /// On entry the `n x n` input matrix; on exit its real Schur form.
    pub a: FullStorageViewMut<'a, f64>,
    /// Real parts of the computed eigenvalues.
    pub wr: ArrayViewMut<'a, f64>,
    /// Imaginary parts of the computed eigenvalues.
    pub wi: ArrayViewMut<'a, f64>,
    /// Schur vector matrix, present iff `compute_vs`.
    pub vs: Option<FullStorageViewMut<'a, f64>>,
    /// Eigenvalue selection predicate, already adapted from the C
    /// callback. Only consulted when `sort` is set.
    pub select: &'b mut dyn FnMut(f64, f64) -> bool,
    /// Floating-point workspace (`LWORK` elements).
    pub work: &'a mut [f64],
    /// Integer workspace (`LIWORK` elements).
    pub iwork: &'a mut [i32],
    /// Selection workspace, one flag per eigenvalue.
    pub bwork: &'a mut Vec<bool>,
}

/// What a Schur kernel reports back.
pub struct DgeesxOutcome {
    /// Number of selected eigenvalues (0 when not sorting).
    pub sdim: usize,
    /// Reciprocal condition number for the selected eigenvalue average.
    pub rcond_e: f64,
    /// Reciprocal condition number for the selected invariant subspace.
    pub rcond_v: f64,
    /// LAPACK-style completion code: 0 on success, > 0 on convergence or
    /// reordering failure.
    pub info: i32,
}

/// A pluggable Schur-form implementation.
pub type DgeesxKernel = fn(DgeesxTask<'_, '_>) -> DgeesxOutcome;

static DGEESX_KERNEL: RwLock<Option<DgeesxKernel>> = RwLock::new(None);

/// Install the Schur kernel used by [`dgeesx_`]. Replaces any previously
/// registered kernel.
///
/// [`dgeesx_`]: crate::lapack::dgeesx_
pub fn register_dgeesx_kernel(kernel: DgeesxKernel) {
    *DGEESX_KERNEL.write().unwrap() = Some(kernel);
}

pub(crate) fn registered_dgeesx_kernel() -> Option<DgeesxKernel> {
    *DGEESX_KERNEL.read().unwrap()
}
