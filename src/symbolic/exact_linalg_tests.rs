use ndarray::{array, Array2};
use num::{BigInt, BigRational};
use num_traits::{One, Zero};

use super::{
    rational_determinant, rational_inverse, surd_determinant, surd_identity, surd_inverse,
    surd_matmul, surd_matvec,
};
use crate::symbolic::surd::Surd;

fn rat(p: i64, q: i64) -> BigRational {
    BigRational::new(BigInt::from(p), BigInt::from(q))
}

#[test]
fn test_exact_linalg_rational_determinant() {
    let mat = array![[rat(1, 1), rat(2, 1)], [rat(3, 1), rat(4, 1)]];
    assert_eq!(rational_determinant(&mat), rat(-2, 1));

    let mat = array![
        [rat(1, 2), rat(0, 1), rat(1, 1)],
        [rat(0, 1), rat(1, 3), rat(0, 1)],
        [rat(1, 1), rat(0, 1), rat(1, 1)]
    ];
    // (1/2)(1/3)(1) + ... = (1/3)·(1/2 - 1) = -1/6.
    assert_eq!(rational_determinant(&mat), rat(-1, 6));

    // A singular matrix requiring a row swap on the way.
    let mat = array![
        [rat(0, 1), rat(1, 1), rat(1, 1)],
        [rat(1, 1), rat(0, 1), rat(1, 1)],
        [rat(1, 1), rat(1, 1), rat(2, 1)]
    ];
    assert!(rational_determinant(&mat).is_zero());
}

#[test]
fn test_exact_linalg_rational_inverse_round_trip() {
    let mat = array![
        [rat(2, 1), rat(1, 1), rat(0, 1)],
        [rat(0, 1), rat(1, 3), rat(4, 1)],
        [rat(1, 1), rat(0, 1), rat(1, 2)]
    ];
    let inv = rational_inverse(&mat).unwrap();
    let dim = mat.nrows();
    let product = Array2::from_shape_fn((dim, dim), |(r, c)| {
        (0..dim).fold(BigRational::zero(), |acc, k| {
            acc + &mat[(r, k)] * &inv[(k, c)]
        })
    });
    for r in 0..dim {
        for c in 0..dim {
            if r == c {
                assert!(product[(r, c)].is_one());
            } else {
                assert!(product[(r, c)].is_zero());
            }
        }
    }
}

#[test]
fn test_exact_linalg_rational_inverse_singular() {
    let mat = array![[rat(1, 1), rat(2, 1)], [rat(2, 1), rat(4, 1)]];
    assert!(rational_inverse(&mat).is_none());
}

#[test]
fn test_exact_linalg_surd_inverse_mixed_radicals() {
    // Rows scaled by different radicals: diag(√2, √3/π)·[[1, 2], [3, 4]].
    let r2 = Surd::sqrt_integer(2);
    let r3pi = &Surd::sqrt_integer(3) * &Surd::pi_sqrt_pow(-2);
    let mat = array![
        [r2.clone(), &r2 * &Surd::integer(2)],
        [&r3pi * &Surd::integer(3), &r3pi * &Surd::integer(4)]
    ];
    let inv = surd_inverse(&mat).unwrap();
    assert_eq!(surd_matmul(&mat, &inv), surd_identity(2));
    assert_eq!(surd_matmul(&inv, &mat), surd_identity(2));

    let det = surd_determinant(&mat).unwrap();
    // det = √2·(√3/π)·(4 - 6) = -2√6/π.
    assert_eq!(
        det,
        &(&Surd::integer(-2) * &Surd::sqrt_integer(6)) * &Surd::pi_sqrt_pow(-2)
    );
}

#[test]
fn test_exact_linalg_surd_inverse_rejects_unfactorable_rows() {
    // A row whose entries carry different radicals has no common factor.
    let mat = array![
        [Surd::sqrt_integer(2), Surd::sqrt_integer(3)],
        [Surd::zero(), Surd::one()]
    ];
    assert!(surd_inverse(&mat).is_err());
}

#[test]
fn test_exact_linalg_surd_determinant_zero_row() {
    let mat = array![[Surd::zero(), Surd::zero()], [Surd::one(), Surd::one()]];
    assert!(surd_determinant(&mat).unwrap().is_zero());
}

#[test]
fn test_exact_linalg_surd_matvec() {
    let mat = array![
        [Surd::one(), Surd::sqrt_integer(2)],
        [Surd::zero(), Surd::integer(3)]
    ];
    let vec = ndarray::array![Surd::sqrt_integer(2), Surd::one()];
    let result = surd_matvec(&mat, &vec);
    // [√2 + √2, 3] = [2√2, 3].
    assert_eq!(result[0], &Surd::integer(2) * &Surd::sqrt_integer(2));
    assert_eq!(result[1], Surd::integer(3));
}
