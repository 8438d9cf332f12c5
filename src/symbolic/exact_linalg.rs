//! Exact linear algebra over rationals and surds.

use anyhow::format_err;
use itertools::Itertools;
use ndarray::{s, Array1, Array2, Axis, Zip};
use num::BigRational;
use num_traits::{One, Zero};

use crate::symbolic::surd::Surd;

#[cfg(test)]
#[path = "exact_linalg_tests.rs"]
mod exact_linalg_tests;

/// Calculates the determinant of a square matrix of exact rationals using
/// the Bareiss algorithm.
///
/// For more information, see
/// <https://stackoverflow.com/questions/66192894/precise-determinant-of-integer-nxn-matrix>.
///
/// # Arguments
///
/// * `mat` - A square matrix.
///
/// # Returns
///
/// The exact determinant of `mat`.
///
/// # Panics
///
/// Panics if `mat` is not a square matrix.
pub fn rational_determinant(mat: &Array2<BigRational>) -> BigRational {
    assert_eq!(mat.ncols(), mat.nrows(), "A square matrix is expected.");
    let mut mat = mat.clone();
    let dim = mat.ncols();
    if dim == 0 {
        return BigRational::one();
    }
    let mut sign = BigRational::one();
    let mut prev = BigRational::one();

    for i in 0..(dim - 1) {
        if mat[(i, i)].is_zero() {
            // Swap with another row having a non-zero i-th element.
            let rel_swapto = mat.slice(s![(i + 1).., i]).iter().position(|x| !x.is_zero());
            if let Some(rel_index) = rel_swapto {
                let (mut mat_above, mut mat_below) = mat.view_mut().split_at(Axis(0), i + 1);
                let row_from = mat_above.slice_mut(s![i, ..]);
                let row_to = mat_below.slice_mut(s![rel_index, ..]);
                Zip::from(row_from).and(row_to).for_each(std::mem::swap);
                sign = -sign;
            } else {
                // All mat[.., i] are zero => zero determinant.
                return BigRational::zero();
            }
        }
        for (j, k) in ((i + 1)..dim).cartesian_product((i + 1)..dim) {
            let numerator = &mat[(j, k)] * &mat[(i, i)] - &mat[(j, i)] * &mat[(i, k)];
            mat[(j, k)] = numerator / &prev;
        }
        prev = mat[(i, i)].clone();
    }
    sign * mat[(dim - 1, dim - 1)].clone()
}

/// Inverts a square matrix of exact rationals by Gauss--Jordan elimination.
///
/// # Arguments
///
/// * `mat` - A square matrix.
///
/// # Returns
///
/// The exact inverse, or `None` if `mat` is singular.
///
/// # Panics
///
/// Panics if `mat` is not a square matrix.
pub fn rational_inverse(mat: &Array2<BigRational>) -> Option<Array2<BigRational>> {
    assert_eq!(mat.ncols(), mat.nrows(), "A square matrix is expected.");
    let dim = mat.nrows();
    let mut work = mat.clone();
    let mut inv = Array2::from_shape_fn((dim, dim), |(r, c)| {
        if r == c {
            BigRational::one()
        } else {
            BigRational::zero()
        }
    });

    for col in 0..dim {
        let pivot_row = (col..dim).find(|&r| !work[(r, col)].is_zero())?;
        if pivot_row != col {
            for c in 0..dim {
                work.swap((pivot_row, c), (col, c));
                inv.swap((pivot_row, c), (col, c));
            }
        }
        let pivot = work[(col, col)].clone();
        for c in 0..dim {
            let scaled_work = &work[(col, c)] / &pivot;
            work[(col, c)] = scaled_work;
            let scaled_inv = &inv[(col, c)] / &pivot;
            inv[(col, c)] = scaled_inv;
        }
        for r in 0..dim {
            if r == col || work[(r, col)].is_zero() {
                continue;
            }
            let factor = work[(r, col)].clone();
            for c in 0..dim {
                let updated_work = &work[(r, c)] - &(&work[(col, c)] * &factor);
                work[(r, c)] = updated_work;
                let updated_inv = &inv[(r, c)] - &(&inv[(col, c)] * &factor);
                inv[(r, c)] = updated_inv;
            }
        }
    }
    Some(inv)
}

/// Factors a matrix of surds into per-row single-term surd factors and a
/// rational core, *i.e.* $`\mathbf{A} = \mathbf{D} \mathbf{B}`$ with
/// $`\mathbf{D}`$ diagonal and $`\mathbf{B}`$ rational.
///
/// The factor of each row is its leading non-zero entry. This succeeds
/// whenever every row is a common surd multiple of a rational row, which is
/// the structure of the spherical-harmonic change-of-basis matrix: every row
/// is scaled by the normalisation constant of its harmonic.
///
/// # Arguments
///
/// * `mat` - A matrix of surds.
///
/// # Returns
///
/// The row factors and the rational core, or an error if a row is zero, has
/// a multi-term leading entry, or is not a rational multiple of its leading
/// entry.
pub fn factored_rows(mat: &Array2<Surd>) -> Result<(Vec<Surd>, Array2<BigRational>), anyhow::Error> {
    let mut factors = Vec::with_capacity(mat.nrows());
    let mut core = Array2::from_elem(mat.raw_dim(), BigRational::zero());
    for (r, row) in mat.rows().into_iter().enumerate() {
        let factor = row
            .iter()
            .find(|entry| !entry.is_zero())
            .cloned()
            .ok_or_else(|| format_err!("Row {r} is identically zero: the matrix is singular."))?;
        let factor_inv = factor.inv().ok_or_else(|| {
            format_err!("Row {r} has a multi-term leading entry: no common surd factor exists.")
        })?;
        for (c, entry) in row.iter().enumerate() {
            if entry.is_zero() {
                continue;
            }
            let rational = (entry * &factor_inv).as_rational().ok_or_else(|| {
                format_err!(
                    "Entry ({r}, {c}) is not a rational multiple of the leading entry of row {r}."
                )
            })?;
            core[(r, c)] = rational;
        }
        factors.push(factor);
    }
    Ok((factors, core))
}

/// Inverts a square matrix of surds whose rows each carry a common
/// single-term surd factor, via [`factored_rows`]:
/// $`\mathbf{A}^{-1} = \mathbf{B}^{-1} \mathbf{D}^{-1}`$, so column $`c`$ of
/// the inverse is the corresponding column of the rational inverse scaled by
/// the reciprocal of the factor of row $`c`$.
///
/// # Arguments
///
/// * `mat` - A square matrix of surds.
///
/// # Returns
///
/// The exact inverse, or an error if the matrix cannot be row-factored or
/// is singular.
///
/// # Panics
///
/// Panics if `mat` is not a square matrix.
pub fn surd_inverse(mat: &Array2<Surd>) -> Result<Array2<Surd>, anyhow::Error> {
    assert_eq!(mat.ncols(), mat.nrows(), "A square matrix is expected.");
    let (factors, core) = factored_rows(mat)?;
    let core_inv = rational_inverse(&core)
        .ok_or_else(|| format_err!("The rational core of the matrix is singular."))?;
    let factor_invs = factors
        .iter()
        .map(|factor| {
            factor
                .inv()
                .expect("A row factor validated by `factored_rows` must be invertible.")
        })
        .collect::<Vec<_>>();
    Ok(Array2::from_shape_fn(mat.raw_dim(), |(r, c)| {
        &Surd::rational(core_inv[(r, c)].clone()) * &factor_invs[c]
    }))
}

/// Calculates the exact determinant of a square matrix of surds via
/// [`factored_rows`]: the product of the row factors times the determinant
/// of the rational core.
///
/// # Arguments
///
/// * `mat` - A square matrix of surds.
///
/// # Returns
///
/// The exact determinant.
///
/// # Panics
///
/// Panics if `mat` is not a square matrix.
pub fn surd_determinant(mat: &Array2<Surd>) -> Result<Surd, anyhow::Error> {
    assert_eq!(mat.ncols(), mat.nrows(), "A square matrix is expected.");
    if mat
        .rows()
        .into_iter()
        .any(|row| row.iter().all(|entry| entry.is_zero()))
    {
        return Ok(Surd::zero());
    }
    let (factors, core) = factored_rows(mat)?;
    let det_core = rational_determinant(&core);
    Ok(factors
        .iter()
        .fold(Surd::rational(det_core), |acc, factor| &acc * factor))
}

/// Multiplies two matrices of surds exactly.
///
/// # Panics
///
/// Panics if the dimensions are incompatible.
pub fn surd_matmul(lhs: &Array2<Surd>, rhs: &Array2<Surd>) -> Array2<Surd> {
    assert_eq!(
        lhs.ncols(),
        rhs.nrows(),
        "Incompatible dimensions for matrix multiplication."
    );
    Array2::from_shape_fn((lhs.nrows(), rhs.ncols()), |(r, c)| {
        (0..lhs.ncols()).fold(Surd::zero(), |acc, k| &acc + &(&lhs[(r, k)] * &rhs[(k, c)]))
    })
}

/// Multiplies a matrix of surds by a vector of surds exactly.
///
/// # Panics
///
/// Panics if the dimensions are incompatible.
pub fn surd_matvec(lhs: &Array2<Surd>, rhs: &Array1<Surd>) -> Array1<Surd> {
    assert_eq!(
        lhs.ncols(),
        rhs.len(),
        "Incompatible dimensions for matrix-vector multiplication."
    );
    Array1::from_shape_fn(lhs.nrows(), |r| {
        (0..lhs.ncols()).fold(Surd::zero(), |acc, k| &acc + &(&lhs[(r, k)] * &rhs[k]))
    })
}

/// Constructs the identity matrix of surds of a given dimension.
#[must_use]
pub fn surd_identity(dim: usize) -> Array2<Surd> {
    Array2::from_shape_fn((dim, dim), |(r, c)| {
        if r == c {
            Surd::one()
        } else {
            Surd::zero()
        }
    })
}
