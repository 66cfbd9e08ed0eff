//! Random fill for test data generation.
//!
//! Free functions filling a storage scheme (or one triangle of it) with
//! pseudo-random values. Not seeded or reproducible in the public
//! contract; use your own `Rng` plumbing when determinism matters.

use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::array::Array;
use crate::band::BandStorage;
use crate::full::FullStorage;
use crate::index::IndexBase;
use crate::order::StorageOrder;
use crate::types::UpLo;

/// Fill every element with a random value.
pub fn fill_random<T, O, B>(storage: &mut FullStorage<T, O, B>)
where
    O: StorageOrder,
    B: IndexBase,
    Standard: Distribution<T>,
{
    let mut rng = rand::thread_rng();
    for x in storage.data_mut().iter_mut() {
        *x = rng.r#gen();
    }
}

/// Fill one triangle (diagonal included) with random values; the other
/// triangle is left alone.
pub fn fill_random_triangle<T, O, B>(uplo: UpLo, storage: &mut FullStorage<T, O, B>)
where
    O: StorageOrder,
    B: IndexBase,
    Standard: Distribution<T>,
{
    let mut rng = rand::thread_rng();
    let (fr, fc) = (storage.first_row(), storage.first_col());
    for r in 0..storage.num_rows() {
        for c in 0..storage.num_cols() {
            if uplo.contains(r, c) {
                *storage.at_mut(fr + r as isize, fc + c as isize) = rng.r#gen();
            }
        }
    }
}

/// Fill every in-band element with a random value.
pub fn fill_random_band<T, O, B>(storage: &mut BandStorage<T, O, B>)
where
    O: StorageOrder,
    B: IndexBase,
    Standard: Distribution<T>,
{
    let mut rng = rand::thread_rng();
    let fi = storage.first_index();
    let (sub, sup) = (storage.num_sub_diags() as isize, storage.num_super_diags() as isize);
    for r in 0..storage.num_rows() as isize {
        for c in 0..storage.num_cols() as isize {
            let d = c - r;
            if d >= -sub && d <= sup {
                *storage.at_mut(fi + r, fi + c) = rng.r#gen();
            }
        }
    }
}

/// Fill every element of an owning array with a random value.
pub fn fill_random_array<T, B>(array: &mut Array<T, B>)
where
    B: IndexBase,
    Standard: Distribution<T>,
{
    let mut rng = rand::thread_rng();
    for x in array.data_mut().iter_mut() {
        *x = rng.r#gen();
    }
}
