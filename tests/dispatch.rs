//! Integration tests for the BLAS dispatch layer against storage schemes.

use approx::assert_relative_eq;
use num_complex::Complex64;
use stridemat::blas::{hemv, trcopy, ActiveBackend, BackendConfig};
use stridemat::{CIndex, ColMajor, Diag, FullStorage, Layout, Trans, UpLo};

#[test]
fn test_active_backend_is_generic_without_features() {
    #[cfg(not(feature = "cblas"))]
    assert_eq!(ActiveBackend::NAME, "generic");
    #[cfg(feature = "cblas")]
    assert_eq!(ActiveBackend::NAME, "cblas");
}

#[test]
fn test_hemv_over_full_storage() {
    // Hermitian 4x4 with only the upper triangle stored meaningfully.
    let n = 4usize;
    let mut a: FullStorage<Complex64, ColMajor, CIndex> =
        FullStorage::with_value(n, n, Complex64::new(0.0, 0.0));
    let c = Complex64::new;
    let upper = [
        [c(2.0, 0.0), c(1.0, 1.0), c(0.0, -2.0), c(3.0, 0.5)],
        [c(0.0, 0.0), c(4.0, 0.0), c(1.0, -1.0), c(0.0, 1.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(6.0, 0.0), c(2.0, 2.0)],
        [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(8.0, 0.0)],
    ];
    for i in 0..n {
        for j in i..n {
            *a.at_mut(i as isize, j as isize) = upper[i][j];
        }
    }

    // Dense reference product.
    let full = |i: usize, j: usize| -> Complex64 {
        if i <= j {
            upper[i][j]
        } else {
            upper[j][i].conj()
        }
    };
    let x: Vec<Complex64> = (0..n).map(|k| c(k as f64 + 1.0, -(k as f64))).collect();
    let mut expect = vec![c(0.0, 0.0); n];
    for i in 0..n {
        for j in 0..n {
            expect[i] += full(i, j) * x[j];
        }
    }

    let mut y = vec![c(0.0, 0.0); n];
    hemv(
        Layout::ColMajor,
        UpLo::Upper,
        n,
        c(1.0, 0.0),
        a.data(),
        a.leading_dimension(),
        &x,
        1,
        c(0.0, 0.0),
        &mut y,
        1,
    );
    for i in 0..n {
        assert_relative_eq!(y[i].re, expect[i].re, epsilon = 1e-12);
        assert_relative_eq!(y[i].im, expect[i].im, epsilon = 1e-12);
    }
}

#[test]
fn test_hemv_lower_equals_upper() {
    // The same Hermitian matrix stored in either triangle gives the same
    // product.
    let n = 3usize;
    let c = Complex64::new;
    let dense = [
        [c(1.0, 0.0), c(2.0, 1.0), c(0.0, -1.0)],
        [c(2.0, -1.0), c(3.0, 0.0), c(1.0, 2.0)],
        [c(0.0, 1.0), c(1.0, -2.0), c(5.0, 0.0)],
    ];
    let mut upper = vec![c(0.0, 0.0); n * n];
    let mut lower = vec![c(0.0, 0.0); n * n];
    for i in 0..n {
        for j in 0..n {
            if i <= j {
                upper[i + j * n] = dense[i][j];
            }
            if i >= j {
                lower[i + j * n] = dense[i][j];
            }
        }
    }
    let x = [c(1.0, 1.0), c(0.0, -2.0), c(3.0, 0.0)];

    let mut y_u = [c(0.0, 0.0); 3];
    let mut y_l = [c(0.0, 0.0); 3];
    hemv(Layout::ColMajor, UpLo::Upper, n, c(1.0, 0.0), &upper, n, &x, 1, c(0.0, 0.0), &mut y_u, 1);
    hemv(Layout::ColMajor, UpLo::Lower, n, c(1.0, 0.0), &lower, n, &x, 1, c(0.0, 0.0), &mut y_l, 1);
    for i in 0..n {
        assert_relative_eq!(y_u[i].re, y_l[i].re, epsilon = 1e-12);
        assert_relative_eq!(y_u[i].im, y_l[i].im, epsilon = 1e-12);
    }
}

#[test]
fn test_trcopy_between_storages() {
    let m = 3usize;
    let mut src: FullStorage<f64, ColMajor, CIndex> = FullStorage::with_value(m, m, 0.0);
    for r in 0..m {
        for c in 0..m {
            *src.at_mut(r as isize, c as isize) = (r * 10 + c) as f64;
        }
    }
    let mut dst: FullStorage<f64, ColMajor, CIndex> = FullStorage::with_value(m, m, -1.0);
    let ld = src.leading_dimension();
    let ldb = dst.leading_dimension();
    trcopy(
        Layout::ColMajor,
        UpLo::Upper,
        Trans::NoTrans,
        Diag::NonUnit,
        m,
        m,
        src.data(),
        ld,
        dst.data_mut(),
        ldb,
    );
    assert_eq!(*dst.at(0, 2), 2.0);
    assert_eq!(*dst.at(1, 1), 11.0);
    // Strictly lower cells untouched.
    assert_eq!(*dst.at(2, 0), -1.0);
}

#[test]
fn test_trcopy_transpose_swaps_triangles() {
    let m = 3usize;
    let a: Vec<f64> = (0..9).map(f64::from).collect();
    let mut b = vec![0.0f64; 9];
    trcopy(
        Layout::ColMajor,
        UpLo::Lower,
        Trans::Trans,
        Diag::NonUnit,
        m,
        m,
        &a,
        m,
        &mut b,
        m,
    );
    // B(i,j) = A(j,i) for i >= j: the source's upper triangle lands in the
    // destination's lower one.
    for i in 0..m {
        for j in 0..m {
            let expect = if i >= j { a[j + i * m] } else { 0.0 };
            assert_eq!(b[i + j * m], expect);
        }
    }
}
