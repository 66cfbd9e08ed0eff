//! Argument validation, workspace queries, and missing-kernel behavior of
//! the `dgeesx` shim.
//!
//! Kept separate from the stub-kernel tests: kernel registration is
//! process-global, and these tests rely on no kernel being installed.

use libc::{c_char, c_double, c_int};
use stridemat::lapack::dgeesx_;

unsafe extern "C" fn never_select(_re: *const c_double, _im: *const c_double) -> c_int {
    0
}

struct Workspace {
    a: Vec<f64>,
    wr: Vec<f64>,
    wi: Vec<f64>,
    vs: Vec<f64>,
    work: Vec<f64>,
    iwork: Vec<c_int>,
    bwork: Vec<c_int>,
    sdim: c_int,
    rconde: f64,
    rcondv: f64,
}

impl Workspace {
    fn for_order(n: usize) -> Self {
        let n2 = (n * n).max(1);
        Workspace {
            a: vec![7.5; n2],
            wr: vec![7.5; n.max(1)],
            wi: vec![7.5; n.max(1)],
            vs: vec![7.5; n2],
            work: vec![7.5; (4 * n * n).max(4)],
            iwork: vec![-3; (n * n).max(4)],
            bwork: vec![-3; n.max(1)],
            sdim: -1,
            rconde: 7.5,
            rcondv: 7.5,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn call(
    jobvs: u8,
    sort: u8,
    sense: u8,
    n: c_int,
    lda: c_int,
    ldvs: c_int,
    lwork: c_int,
    liwork: c_int,
    ws: &mut Workspace,
) -> c_int {
    let jobvs = jobvs as c_char;
    let sort = sort as c_char;
    let sense = sense as c_char;
    let mut info: c_int = 12345;
    unsafe {
        dgeesx_(
            &jobvs,
            &sort,
            Some(never_select),
            &sense,
            &n,
            ws.a.as_mut_ptr(),
            &lda,
            &mut ws.sdim,
            ws.wr.as_mut_ptr(),
            ws.wi.as_mut_ptr(),
            ws.vs.as_mut_ptr(),
            &ldvs,
            &mut ws.rconde,
            &mut ws.rcondv,
            ws.work.as_mut_ptr(),
            &lwork,
            ws.iwork.as_mut_ptr(),
            &liwork,
            ws.bwork.as_mut_ptr(),
            &mut info,
        );
    }
    info
}

#[test]
fn test_invalid_jobvs_reports_minus_one_and_touches_nothing() {
    let mut ws = Workspace::for_order(3);
    let info = call(b'X', b'N', b'N', 3, 3, 3, 64, 4, &mut ws);
    assert_eq!(info, -1);
    assert!(ws.a.iter().all(|&x| x == 7.5));
    assert!(ws.wr.iter().all(|&x| x == 7.5));
    assert!(ws.work.iter().all(|&x| x == 7.5));
    assert_eq!(ws.sdim, -1);
}

#[test]
fn test_invalid_sort_reports_minus_two() {
    let mut ws = Workspace::for_order(3);
    assert_eq!(call(b'N', b'Q', b'N', 3, 3, 3, 64, 4, &mut ws), -2);
}

#[test]
fn test_invalid_sense_reports_minus_four() {
    let mut ws = Workspace::for_order(3);
    assert_eq!(call(b'N', b'N', b'Q', 3, 3, 3, 64, 4, &mut ws), -4);
}

#[test]
fn test_sense_without_sort_reports_minus_four() {
    // SENSE != 'N' requires SORT = 'S'.
    let mut ws = Workspace::for_order(3);
    assert_eq!(call(b'N', b'N', b'E', 3, 3, 3, 64, 4, &mut ws), -4);
}

#[test]
fn test_negative_order_reports_minus_five() {
    let mut ws = Workspace::for_order(3);
    assert_eq!(call(b'N', b'N', b'N', -1, 3, 3, 64, 4, &mut ws), -5);
}

#[test]
fn test_small_lda_reports_minus_seven() {
    let mut ws = Workspace::for_order(3);
    assert_eq!(call(b'N', b'N', b'N', 3, 2, 3, 64, 4, &mut ws), -7);
}

#[test]
fn test_small_ldvs_reports_minus_twelve() {
    let mut ws = Workspace::for_order(3);
    assert_eq!(call(b'N', b'N', b'N', 3, 3, 0, 64, 4, &mut ws), -12);
    // With Schur vectors requested, LDVS must reach N.
    let mut ws = Workspace::for_order(3);
    assert_eq!(call(b'V', b'N', b'N', 3, 3, 2, 64, 4, &mut ws), -12);
}

#[test]
fn test_first_violation_wins() {
    // Both JOBVS and N are invalid; the earlier check decides the code.
    let mut ws = Workspace::for_order(3);
    assert_eq!(call(b'X', b'N', b'N', -1, 3, 3, 64, 4, &mut ws), -1);
}

#[test]
fn test_insufficient_lwork_reports_minus_sixteen() {
    let mut ws = Workspace::for_order(4);
    // minwrk = 2n = 8.
    assert_eq!(call(b'N', b'N', b'N', 4, 4, 4, 7, 4, &mut ws), -16);
}

#[test]
fn test_insufficient_liwork_reports_minus_eighteen() {
    let mut ws = Workspace::for_order(4);
    assert_eq!(call(b'N', b'N', b'N', 4, 4, 4, 64, 0, &mut ws), -18);
}

#[test]
fn test_workspace_query_reports_sizes_without_computing() {
    let mut ws = Workspace::for_order(3);
    let info = call(b'N', b'N', b'N', 3, 3, 3, -1, 4, &mut ws);
    assert_eq!(info, 0);
    assert_eq!(ws.work[0], 6.0); // 2n
    assert_eq!(ws.iwork[0], 1);
    assert!(ws.a.iter().all(|&x| x == 7.5));
    assert!(ws.wr.iter().all(|&x| x == 7.5));
    assert!(ws.wi.iter().all(|&x| x == 7.5));
    assert!(ws.vs.iter().all(|&x| x == 7.5));
}

#[test]
fn test_workspace_query_with_condition_estimates() {
    let mut ws = Workspace::for_order(3);
    let info = call(b'V', b'S', b'B', 3, 3, 3, -1, -1, &mut ws);
    assert_eq!(info, 0);
    // max(2n, n + n^2/2) = max(6, 7) = 7.
    assert_eq!(ws.work[0], 7.0);
    // n^2/4 = 2.
    assert_eq!(ws.iwork[0], 2);
}

#[test]
fn test_query_ignores_small_lwork() {
    // LIWORK = -1 makes it a query even though LWORK is too small.
    let mut ws = Workspace::for_order(4);
    let info = call(b'N', b'N', b'N', 4, 4, 4, 1, -1, &mut ws);
    assert_eq!(info, 0);
}

#[test]
fn test_compute_without_kernel_reports_n_plus_three() {
    let mut ws = Workspace::for_order(2);
    let info = call(b'N', b'N', b'N', 2, 2, 2, 64, 4, &mut ws);
    assert_eq!(info, 5);
    // Validation and the error path leave the data untouched.
    assert!(ws.a.iter().all(|&x| x == 7.5));
}

#[test]
fn test_zero_order_quick_return() {
    let mut ws = Workspace::for_order(0);
    let info = call(b'N', b'N', b'N', 0, 1, 1, 4, 4, &mut ws);
    assert_eq!(info, 0);
    assert_eq!(ws.sdim, 0);
    assert_eq!(ws.work[0], 1.0);
}
