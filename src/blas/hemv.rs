//! Hermitian matrix-vector product dispatch.
//!
//! `y := alpha * A * x + beta * y` where `A` is an `n x n` Hermitian
//! matrix of which only the `uplo` triangle is stored. The unstored
//! triangle is the conjugate transpose of the stored one, and the
//! imaginary parts of the diagonal are assumed zero, per the BLAS `hemv`
//! contract.
//!
//! Dispatch is per element type: `Complex<f32>` / `Complex<f64>` route to
//! `cblas_chemv` / `cblas_zhemv` when the `cblas` feature is on; every
//! other scalar (and every scalar without the feature) runs the generic
//! fallback. For real scalars the conjugations are identities and the
//! routine degenerates to `symv`.

use num_complex::{Complex, ComplexFloat};
use num_traits::{One, Zero};

use crate::types::{Layout, UpLo};

/// Scalar-level dispatch for the Hermitian matrix-vector product.
pub trait HemvScalar: ComplexFloat {
    /// Backend-selected `hemv` kernel for this scalar type.
    #[allow(clippy::too_many_arguments)]
    fn hemv(
        layout: Layout,
        uplo: UpLo,
        n: usize,
        alpha: Self,
        a: &[Self],
        lda: usize,
        x: &[Self],
        incx: isize,
        beta: Self,
        y: &mut [Self],
        incy: isize,
    );
}

/// Hermitian matrix-vector product: `y := alpha * A * x + beta * y`.
///
/// - `a`: the `uplo` triangle of an `n x n` matrix with leading dimension
///   `lda` in the given `layout`
/// - `incx` / `incy`: vector increments, non-zero, negative meaning the
///   vector is stored reversed (BLAS convention)
///
/// Quick-returns when `n == 0` or `alpha == 0 && beta == 1`.
#[allow(clippy::too_many_arguments)]
pub fn hemv<T: HemvScalar>(
    layout: Layout,
    uplo: UpLo,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) {
    assert!(incx != 0 && incy != 0, "vector increments must be non-zero");
    assert!(lda >= n.max(1), "leading dimension below matrix order");
    T::hemv(layout, uplo, n, alpha, a, lda, x, incx, beta, y, incy)
}

/// Generic fallback, any layout, any triangle, any increments.
#[allow(clippy::too_many_arguments)]
fn hemv_generic<T: ComplexFloat>(
    layout: Layout,
    uplo: UpLo,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) {
    if n == 0 || (alpha.is_zero() && beta.is_one()) {
        return;
    }

    // BLAS increment convention: negative increments walk the vector
    // backwards from its far end.
    let xi = |k: usize| -> usize {
        if incx > 0 {
            k * incx as usize
        } else {
            (n - 1 - k) * (-incx) as usize
        }
    };
    let yi = |k: usize| -> usize {
        if incy > 0 {
            k * incy as usize
        } else {
            (n - 1 - k) * (-incy) as usize
        }
    };

    let stored = |i: usize, j: usize| -> T {
        match layout {
            Layout::ColMajor => a[i + j * lda],
            Layout::RowMajor => a[i * lda + j],
        }
    };
    // A(i, j) reconstructed from the stored triangle.
    let fetch = |i: usize, j: usize| -> T {
        if uplo.contains(i, j) {
            stored(i, j)
        } else {
            stored(j, i).conj()
        }
    };

    let two = T::one() + T::one();
    for i in 0..n {
        let mut sum = T::zero();
        for j in 0..n {
            let aij = if i == j {
                // Diagonal imaginary parts are assumed zero.
                let d = stored(i, i);
                (d + d.conj()) / two
            } else {
                fetch(i, j)
            };
            sum = sum + aij * x[xi(j)];
        }
        let yk = yi(i);
        y[yk] = if beta.is_zero() {
            alpha * sum
        } else {
            alpha * sum + beta * y[yk]
        };
    }
}

impl HemvScalar for f32 {
    fn hemv(
        layout: Layout,
        uplo: UpLo,
        n: usize,
        alpha: f32,
        a: &[f32],
        lda: usize,
        x: &[f32],
        incx: isize,
        beta: f32,
        y: &mut [f32],
        incy: isize,
    ) {
        hemv_generic(layout, uplo, n, alpha, a, lda, x, incx, beta, y, incy)
    }
}

impl HemvScalar for f64 {
    fn hemv(
        layout: Layout,
        uplo: UpLo,
        n: usize,
        alpha: f64,
        a: &[f64],
        lda: usize,
        x: &[f64],
        incx: isize,
        beta: f64,
        y: &mut [f64],
        incy: isize,
    ) {
        hemv_generic(layout, uplo, n, alpha, a, lda, x, incx, beta, y, incy)
    }
}

impl HemvScalar for Complex<f32> {
    fn hemv(
        layout: Layout,
        uplo: UpLo,
        n: usize,
        alpha: Complex<f32>,
        a: &[Complex<f32>],
        lda: usize,
        x: &[Complex<f32>],
        incx: isize,
        beta: Complex<f32>,
        y: &mut [Complex<f32>],
        incy: isize,
    ) {
        #[cfg(feature = "cblas")]
        unsafe {
            cblas_sys::cblas_chemv(
                layout.to_cblas(),
                uplo.to_cblas(),
                n as i32,
                (&alpha) as *const _ as *const _,
                a.as_ptr() as *const _,
                lda as i32,
                x.as_ptr() as *const _,
                incx as i32,
                (&beta) as *const _ as *const _,
                y.as_mut_ptr() as *mut _,
                incy as i32,
            );
        }
        #[cfg(not(feature = "cblas"))]
        hemv_generic(layout, uplo, n, alpha, a, lda, x, incx, beta, y, incy);
    }
}

impl HemvScalar for Complex<f64> {
    fn hemv(
        layout: Layout,
        uplo: UpLo,
        n: usize,
        alpha: Complex<f64>,
        a: &[Complex<f64>],
        lda: usize,
        x: &[Complex<f64>],
        incx: isize,
        beta: Complex<f64>,
        y: &mut [Complex<f64>],
        incy: isize,
    ) {
        #[cfg(feature = "cblas")]
        unsafe {
            cblas_sys::cblas_zhemv(
                layout.to_cblas(),
                uplo.to_cblas(),
                n as i32,
                (&alpha) as *const _ as *const _,
                a.as_ptr() as *const _,
                lda as i32,
                x.as_ptr() as *const _,
                incx as i32,
                (&beta) as *const _ as *const _,
                y.as_mut_ptr() as *mut _,
                incy as i32,
            );
        }
        #[cfg(not(feature = "cblas"))]
        hemv_generic(layout, uplo, n, alpha, a, lda, x, incx, beta, y, incy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    // Dense 3x3 Hermitian reference:
    //   [ 2      1+i    3-2i ]
    //   [ 1-i    5      -i   ]
    //   [ 3+2i   i      1    ]
    fn dense() -> [[Complex64; 3]; 3] {
        let c = Complex64::new;
        [
            [c(2.0, 0.0), c(1.0, 1.0), c(3.0, -2.0)],
            [c(1.0, -1.0), c(5.0, 0.0), c(0.0, -1.0)],
            [c(3.0, 2.0), c(0.0, 1.0), c(1.0, 0.0)],
        ]
    }

    fn reference_product(x: &[Complex64; 3]) -> [Complex64; 3] {
        let a = dense();
        let mut y = [Complex64::new(0.0, 0.0); 3];
        for i in 0..3 {
            for j in 0..3 {
                y[i] += a[i][j] * x[j];
            }
        }
        y
    }

    fn assert_close(a: Complex64, b: Complex64) {
        assert!((a - b).norm() < 1e-12, "{a} != {b}");
    }

    #[test]
    fn test_upper_colmajor_matches_dense() {
        let c = Complex64::new;
        // Upper triangle in col-major order; strict lower entries are junk.
        let junk = c(99.0, 99.0);
        let a = [
            c(2.0, 0.0), junk, junk,
            c(1.0, 1.0), c(5.0, 0.0), junk,
            c(3.0, -2.0), c(0.0, -1.0), c(1.0, 0.0),
        ];
        let x = [c(1.0, 0.0), c(0.0, 1.0), c(2.0, -1.0)];
        let expect = reference_product(&x);

        let mut y = [c(0.0, 0.0); 3];
        hemv(
            Layout::ColMajor,
            UpLo::Upper,
            3,
            c(1.0, 0.0),
            &a,
            3,
            &x,
            1,
            c(0.0, 0.0),
            &mut y,
            1,
        );
        for i in 0..3 {
            assert_close(y[i], expect[i]);
        }
    }

    #[test]
    fn test_lower_rowmajor_matches_dense() {
        let c = Complex64::new;
        let junk = c(-7.0, 3.0);
        // Lower triangle in row-major order.
        let a = [
            c(2.0, 0.0), junk, junk,
            c(1.0, -1.0), c(5.0, 0.0), junk,
            c(3.0, 2.0), c(0.0, 1.0), c(1.0, 0.0),
        ];
        let x = [c(0.5, 0.5), c(-1.0, 0.0), c(0.0, 2.0)];
        let expect = reference_product(&x);

        let mut y = [c(1.0, 1.0); 3];
        hemv(
            Layout::RowMajor,
            UpLo::Lower,
            3,
            c(1.0, 0.0),
            &a,
            3,
            &x,
            1,
            c(0.0, 0.0),
            &mut y,
            1,
        );
        for i in 0..3 {
            assert_close(y[i], expect[i]);
        }
    }

    #[test]
    fn test_alpha_beta_and_strides() {
        let c = Complex64::new;
        let junk = c(0.0, 42.0);
        let a = [
            c(2.0, 0.0), junk, junk,
            c(1.0, 1.0), c(5.0, 0.0), junk,
            c(3.0, -2.0), c(0.0, -1.0), c(1.0, 0.0),
        ];
        let x_logical = [c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0)];
        // x strided by 2 with padding entries in between.
        let x = [x_logical[0], junk, x_logical[1], junk, x_logical[2]];
        let expect = reference_product(&x_logical);

        let alpha = c(2.0, 0.0);
        let beta = c(0.0, 1.0);
        let y0 = c(1.0, -1.0);
        let mut y = [y0, junk, y0, junk, y0];
        hemv(
            Layout::ColMajor,
            UpLo::Upper,
            3,
            alpha,
            &a,
            3,
            &x,
            2,
            beta,
            &mut y,
            2,
        );
        for i in 0..3 {
            assert_close(y[2 * i], alpha * expect[i] + beta * y0);
            // Padding untouched.
        }
        assert_close(y[1], junk);
    }

    #[test]
    fn test_negative_increment() {
        let c = Complex64::new;
        let junk = c(9.0, 9.0);
        let a = [
            c(2.0, 0.0), junk, junk,
            c(1.0, 1.0), c(5.0, 0.0), junk,
            c(3.0, -2.0), c(0.0, -1.0), c(1.0, 0.0),
        ];
        let x_logical = [c(1.0, 1.0), c(-2.0, 0.0), c(0.0, 3.0)];
        // incx = -1: logical x_k lives at x[n - 1 - k].
        let x = [x_logical[2], x_logical[1], x_logical[0]];
        let expect = reference_product(&x_logical);

        let mut y = [c(0.0, 0.0); 3];
        hemv(
            Layout::ColMajor,
            UpLo::Upper,
            3,
            c(1.0, 0.0),
            &a,
            3,
            &x,
            -1,
            c(0.0, 0.0),
            &mut y,
            1,
        );
        for i in 0..3 {
            assert_close(y[i], expect[i]);
        }
    }

    #[test]
    fn test_real_symv_degenerate() {
        // For f64 the routine is a plain symmetric product.
        let a = [4.0, 0.0, 1.0, 3.0]; // 2x2 upper col-major: [[4, 1], [1, 3]]
        let x = [2.0, -1.0];
        let mut y = [0.0, 0.0];
        hemv(Layout::ColMajor, UpLo::Upper, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1);
        assert_eq!(y, [7.0, -1.0]);
    }
}
