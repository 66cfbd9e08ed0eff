//! `dgeesx` entry point.
//!
//! Real Schur decomposition with eigenvalue ordering and condition
//! estimates, exposed with the reference LAPACK ABI. The validation pass
//! reproduces the reference argument checks in order and by error code,
//! so a `LWORK = -1` / `LIWORK = -1` workspace query, an invalid-argument
//! call, and a successful call are all indistinguishable from the
//! routine this shim replaces.

use libc::{c_char, c_double, c_int};

use super::kernel::{registered_dgeesx_kernel, DgeesxTask, Sense};
use crate::array::ArrayViewMut;
use crate::full_view::FullStorageViewMut;

/// C eigenvalue-selection callback: receives the addresses of the real
/// and imaginary parts, returns non-zero to select.
pub type SelectCallback = unsafe extern "C" fn(*const c_double, *const c_double) -> c_int;

/// Adapts the pointer-based C callback to a by-value predicate.
struct SelectFunction {
    select: SelectCallback,
}

impl SelectFunction {
    fn call(&self, re: f64, im: f64) -> bool {
        unsafe { (self.select)(&raw const re, &raw const im) != 0 }
    }
}

/// Minimal and recommended float workspace, and integer workspace, for
/// the given order and sense.
fn workspace_sizes(n: usize, sense: Sense) -> (usize, usize, usize) {
    let minwrk = (2 * n).max(1);
    let lwrk = if sense == Sense::None {
        minwrk
    } else {
        minwrk.max(n + (n * n) / 2)
    };
    let liwrk = if sense.wants_subspace_condition() {
        ((n * n) / 4).max(1)
    } else {
        1
    };
    (minwrk, lwrk, liwrk)
}

/// Drop-in replacement for LAPACK's `DGEESX`.
///
/// Computes the real Schur form `A = Z T Z^T` of a general `N x N`
/// matrix, optionally ordering selected eigenvalues to the top left and
/// estimating condition numbers, by delegating to the kernel installed
/// with [`register_dgeesx_kernel`]. Argument order, 1-based column-major
/// buffer conventions, error codes, and the `LWORK == -1` / `LIWORK ==
/// -1` workspace query all match the reference routine.
///
/// With no kernel registered, a compute call fails with `*INFO = N + 3`
/// (validation and workspace queries still behave normally; the
/// reference routine uses positive `INFO` values up to `N + 2`).
///
/// # Safety
/// All pointers must satisfy the reference LAPACK contract: scalar
/// in-parameters readable, `A`/`WR`/`WI`/`VS`/`WORK`/`IWORK`/`BWORK`
/// valid for their documented extents, no aliasing between output
/// buffers.
///
/// [`register_dgeesx_kernel`]: crate::lapack::register_dgeesx_kernel
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn dgeesx_(
    jobvs: *const c_char,
    sort: *const c_char,
    select: Option<SelectCallback>,
    sense: *const c_char,
    n: *const c_int,
    a: *mut c_double,
    lda: *const c_int,
    sdim: *mut c_int,
    wr: *mut c_double,
    wi: *mut c_double,
    vs: *mut c_double,
    ldvs: *const c_int,
    rconde: *mut c_double,
    rcondv: *mut c_double,
    work: *mut c_double,
    lwork: *const c_int,
    iwork: *mut c_int,
    liwork: *const c_int,
    bwork: *mut c_int,
    info: *mut c_int,
) {
    let jobvs = unsafe { *jobvs } as u8;
    let sort_flag = unsafe { *sort } as u8;
    let sense_flag = unsafe { *sense } as u8;
    let n_in = unsafe { *n };
    let lda_in = unsafe { *lda };
    let ldvs_in = unsafe { *ldvs };
    let lwork_in = unsafe { *lwork };
    let liwork_in = unsafe { *liwork };

    //  Test the input parameters, in the reference order and with the
    //  reference error codes.
    unsafe { *info = 0 };
    let lquery = lwork_in == -1 || liwork_in == -1;
    let want_vs = jobvs == b'V';
    let want_st = sort_flag == b'S';
    let sense_kind = Sense::from_flag(sense_flag);

    if !want_vs && jobvs != b'N' {
        unsafe { *info = 1 };
    } else if !want_st && sort_flag != b'N' {
        unsafe { *info = 2 };
    } else if sense_kind.is_none() || (!want_st && sense_kind != Some(Sense::None)) {
        unsafe { *info = 4 };
    } else if n_in < 0 {
        unsafe { *info = 5 };
    } else if lda_in < n_in.max(1) {
        unsafe { *info = 7 };
    } else if ldvs_in < 1 || (want_vs && ldvs_in < n_in) {
        unsafe { *info = 12 };
    }

    if unsafe { *info } != 0 {
        unsafe { *info = -*info };
        return;
    }

    let n_us = n_in as usize;
    let sense_kind = sense_kind.unwrap();
    let (minwrk, lwrk, liwrk) = workspace_sizes(n_us, sense_kind);

    if lwork_in < minwrk as c_int && !lquery {
        unsafe { *info = -16 };
        return;
    }
    if liwork_in < 1 && !lquery {
        unsafe { *info = -18 };
        return;
    }

    //  Workspace query: report sizes, touch nothing else.
    if lquery {
        unsafe {
            *work = lwrk as c_double;
            *iwork = liwrk as c_int;
        }
        return;
    }

    if n_us == 0 {
        unsafe {
            *sdim = 0;
            *work = 1.0;
        }
        return;
    }

    let Some(kernel) = registered_dgeesx_kernel() else {
        unsafe { *info = n_in + 3 };
        return;
    };

    //  Wrap the caller's buffers as 1-based column-major views (no
    //  copies) and adapt the selection callback.
    let a_view =
        unsafe { FullStorageViewMut::<f64>::from_raw_parts(a, n_us, n_us, lda_in as usize, 1, 1) };
    let wr_view = unsafe { ArrayViewMut::<f64>::from_raw_parts(wr, n_us, 1, 1) };
    let wi_view = unsafe { ArrayViewMut::<f64>::from_raw_parts(wi, n_us, 1, 1) };
    let vs_view = if want_vs {
        Some(unsafe {
            FullStorageViewMut::<f64>::from_raw_parts(vs, n_us, n_us, ldvs_in as usize, 1, 1)
        })
    } else {
        None
    };
    let work_slice = unsafe { std::slice::from_raw_parts_mut(work, lwork_in.max(1) as usize) };
    let iwork_slice = unsafe { std::slice::from_raw_parts_mut(iwork, liwork_in.max(1) as usize) };

    let adapter = select.map(|f| SelectFunction { select: f });
    let mut select_fn = move |re: f64, im: f64| -> bool {
        match &adapter {
            Some(s) => s.call(re, im),
            None => false,
        }
    };

    let mut bwork_internal = vec![false; n_us];
    let outcome = kernel(DgeesxTask {
        compute_vs: want_vs,
        sort: want_st,
        sense: sense_kind,
        a: a_view,
        wr: wr_view,
        wi: wi_view,
        vs: vs_view,
        select: &mut select_fn,
        work: work_slice,
        iwork: iwork_slice,
        bwork: &mut bwork_internal,
    });

    //  Copy results and internal auxiliary arrays back into the caller's
    //  layout.
    unsafe {
        *sdim = outcome.sdim as c_int;
        if sense_kind.wants_eigenvalue_condition() {
            *rconde = outcome.rcond_e;
        }
        if sense_kind.wants_subspace_condition() {
            *rcondv = outcome.rcond_v;
        }
        *work = lwrk as c_double;
        if want_st {
            for (i, flag) in bwork_internal.iter().enumerate() {
                *bwork.add(i) = c_int::from(*flag);
            }
        }
        *info = outcome.info;
    }
}
