//! Expansion of real spherical harmonics in disk polynomials and the exact
//! change-of-basis matrices between the two bases.

use anyhow::format_err;
use factorial::Factorial;
use ndarray::{Array1, Array2};
use num::{BigInt, BigRational};
use num_traits::{One, Zero};

use crate::basis::disk::{DiskOrder, SphOrder};
use crate::symbolic::exact_linalg::surd_inverse;
use crate::symbolic::expr::Expr;
use crate::symbolic::surd::Surd;

#[cfg(test)]
#[path = "sh_expansion_tests.rs"]
mod sh_expansion_tests;

/// Calculates the factorial of `n` as an exact big integer.
///
/// # Panics
///
/// Panics if the factorial cannot be computed in `u64`.
fn big_factorial(n: u32) -> BigInt {
    BigInt::from(
        u64::from(n)
            .checked_factorial()
            .unwrap_or_else(|| panic!("Unable to compute the factorial of {n}.")),
    )
}

/// Obtains the normalisation constant of the real spherical harmonic
/// $`Y_{lm}`$:
///
/// ```math
/// A(l, m) = \sqrt{\frac{(2 - \delta_{m0}) (2l + 1) (l - m)!}{4 \pi (l + m)!}}.
/// ```
///
/// # Arguments
///
/// * `l` - The degree of the harmonic.
/// * `m` - The absolute order of the harmonic, $`0 \leq m \leq l`$.
///
/// # Returns
///
/// The exact value of $`A(l, m)`$ as a single-term surd.
///
/// # Panics
///
/// Panics if $`m > l`$.
#[must_use]
pub fn norm_a(l: u32, m: u32) -> Surd {
    assert!(m <= l, "The order `m` must not exceed the degree `l`.");
    let pre = if m == 0 { 1u64 } else { 2u64 };
    let ratio = BigRational::new(
        BigInt::from(pre * (2 * u64::from(l) + 1)) * big_factorial(l - m),
        BigInt::from(4) * big_factorial(l + m),
    );
    &Surd::sqrt_ratio(&ratio) * &Surd::pi_sqrt_pow(-1)
}

/// Obtains the expansion weight $`B(l, m, j, k)`$ of the real spherical
/// harmonic $`Y_{lm}`$:
///
/// ```math
/// B(l, m, j, k) = \frac{2^l m!}{j! k! (m - j)! (l - m - k)!}
///     \prod_{t = 1}^{l} \frac{-l + m + k - 1 + 2t}{2},
/// ```
///
/// where the product is the ratio of Gamma functions
/// $`\Gamma(\frac{l + m + k + 1}{2}) / \Gamma(\frac{-l + m + k + 1}{2})`$.
/// When the denominator Gamma function has a pole, *i.e.* when
/// $`-l + m + k - 1`$ is negative and even, the weight vanishes.
///
/// # Arguments
///
/// * `l` - The degree of the harmonic.
/// * `m` - The absolute order of the harmonic, $`0 \leq m \leq l`$.
/// * `j` - The summation index over powers of $`y`$, $`0 \leq j \leq m`$.
/// * `k` - The summation index over radial powers, $`0 \leq k \leq l - m`$.
///
/// # Returns
///
/// The exact value of $`B(l, m, j, k)`$, which is zero for argument
/// combinations outside the summation ranges or at a Gamma pole.
///
/// # Panics
///
/// Panics if $`m > l`$.
#[must_use]
pub fn weight_b(l: u32, m: u32, j: u32, k: u32) -> BigRational {
    assert!(m <= l, "The order `m` must not exceed the degree `l`.");
    if j > m || k > l - m {
        return BigRational::zero();
    }

    let b2 = i64::from(m) + i64::from(k) - i64::from(l) - 1;
    if b2 < 0 && b2 % 2 == 0 {
        return BigRational::zero();
    }

    let mut ratio = BigRational::one();
    for t in 1..=i64::from(l) {
        ratio *= BigRational::new(BigInt::from(b2 + 2 * t), BigInt::from(2));
    }
    let prefactor = BigRational::new(
        (BigInt::one() << l) * big_factorial(m),
        big_factorial(j) * big_factorial(k) * big_factorial(m - j) * big_factorial(l - m - k),
    );
    prefactor * ratio
}

/// Obtains the expansion weight $`C(p, q, k)`$ of the real spherical
/// harmonic $`Y_{lm}`$:
///
/// ```math
/// C(p, q, k) = \frac{(k/2)!}{(q/2)! \left(\frac{k - p}{2}\right)!
///     \left(\frac{p - q}{2}\right)!}.
/// ```
///
/// # Arguments
///
/// * `p` - An even summation index, $`0 \leq p \leq k`$.
/// * `q` - An even summation index, $`0 \leq q \leq p`$.
/// * `k` - An even summation index.
///
/// # Returns
///
/// The exact value of $`C(p, q, k)`$.
///
/// # Panics
///
/// Panics if any argument is odd or if $`q \leq p \leq k`$ is violated.
#[must_use]
pub fn weight_c(p: u32, q: u32, k: u32) -> BigRational {
    assert!(
        p % 2 == 0 && q % 2 == 0 && k % 2 == 0,
        "All arguments of `weight_c` must be even."
    );
    assert!(q <= p && p <= k, "The ordering q <= p <= k is violated.");
    BigRational::new(
        big_factorial(k / 2),
        big_factorial(q / 2) * big_factorial((k - p) / 2) * big_factorial((p - q) / 2),
    )
}

/// Constructs the real spherical harmonic $`Y_{lm}`$, evaluated on the unit
/// sphere, as a symbolic expression in the disk variables $`x`$, $`y`$, and
/// $`z = \sqrt{1 - x^2 - y^2}`$.
///
/// For $`m \geq 0`$:
///
/// ```math
/// Y_{lm} = A(l, m) \sum_{\substack{j = 0 \\ j\ \mathrm{even}}}^{m}
///     \sum_{k = 0}^{l - m} \sum_{\substack{p, q}}
///     (-1)^{(j + p)/2}\,
///     B(l, m, j, k)\, C(p, q, \cdot)\,
///     x^{m - j + p - q}\, y^{j + q}\, z^{k \bmod 2},
/// ```
///
/// where even $`k`$ contributes no power of $`z`$ and odd $`k`$ contributes
/// a single power of $`z`$ with the $`C`$ weight evaluated at $`k - 1`$. For
/// $`m < 0`$ the sum runs over odd $`j`$ with the sign
/// $`(-1)^{(j + p - 1)/2}`$ and $`m`$ replaced by $`\lvert m \rvert`$
/// elsewhere.
///
/// # Arguments
///
/// * `l` - The degree of the harmonic.
/// * `m` - The order of the harmonic, $`-l \leq m \leq l`$.
///
/// # Returns
///
/// The symbolic expression of $`Y_{lm}`$.
///
/// # Panics
///
/// Panics if $`\lvert m \rvert > l`$.
#[must_use]
pub fn ylm(l: u32, m: i32) -> Expr {
    let am = m.unsigned_abs();
    assert!(
        am <= l,
        "The absolute order `|m|` must not exceed the degree `l`."
    );
    let norm = norm_a(l, am);
    let mut terms: Vec<Expr> = Vec::new();

    let mut push_term = |j: u32, k: u32, p: u32, q: u32, kc: u32, with_z: bool| {
        let wb = weight_b(l, am, j, k);
        if wb.is_zero() {
            return;
        }
        let wc = weight_c(p, q, kc);
        let sign_exponent = if m >= 0 { (j + p) / 2 } else { (j + p - 1) / 2 };
        let mut coeff = wb * wc;
        if sign_exponent % 2 == 1 {
            coeff = -coeff;
        }
        let mut term = Expr::constant(&norm * &Surd::rational(coeff))
            * Expr::x().pow(am - j + p - q)
            * Expr::y().pow(j + q);
        if with_z {
            term = term * Expr::z();
        }
        terms.push(term);
    };

    let j_start = if m >= 0 { 0 } else { 1 };
    for j in (j_start..=am).step_by(2) {
        for k in (0..=(l - am)).step_by(2) {
            for p in (0..=k).step_by(2) {
                for q in (0..=p).step_by(2) {
                    push_term(j, k, p, q, k, false);
                }
            }
        }
        for k in (1..=(l - am)).step_by(2) {
            for p in (0..k).step_by(2) {
                for q in (0..=p).step_by(2) {
                    push_term(j, k, p, q, k - 1, true);
                }
            }
        }
    }

    terms.into_iter().fold(Expr::zero(), |acc, term| acc + term)
}

/// Calculates the coefficient vector of the real spherical harmonic
/// $`Y_{lm}`$ in the disk polynomial basis of maximum degree `lmax`.
///
/// # Arguments
///
/// * `l` - The degree of the harmonic.
/// * `m` - The order of the harmonic, $`-l \leq m \leq l`$.
/// * `lmax` - The maximum degree of the disk basis, $`l \leq l_{\max}`$.
///
/// # Returns
///
/// A vector of exact disk-basis coefficients of dimension
/// $`(l_{\max} + 1)^2`$ in the canonical [`DiskOrder`].
///
/// # Panics
///
/// Panics if $`\lvert m \rvert > l`$ or $`l > l_{\max}`$.
#[must_use]
pub fn ylm_disk_coeffs(l: u32, m: i32, lmax: u32) -> Array1<Surd> {
    assert!(
        l <= lmax,
        "The degree `l` must not exceed the maximum degree `lmax`."
    );
    let poly = ylm(l, m).expand();
    let disk_order = DiskOrder::lm(lmax);
    Array1::from_iter(
        disk_order
            .iter()
            .map(|mono_tuple| poly.coefficient(mono_tuple)),
    )
}

/// Returns the overall normalisation of the change-of-basis matrix,
/// $`2 / \sqrt{\pi}`$.
#[must_use]
pub fn standard_norm() -> Surd {
    &Surd::integer(2) * &Surd::pi_sqrt_pow(-1)
}

/// Constructs the exact change-of-basis matrix from real spherical harmonics
/// to disk polynomials: row $`n`$ holds the disk-basis coefficients of the
/// $`n`$-th harmonic in increasing-$`(l, m)`$ order, scaled by `norm`.
///
/// A coefficient vector $`\mathbf{y}`$ in the harmonic basis then satisfies
/// $`\mathbf{p}^{\mathsf{T}} = \mathbf{y}^{\mathsf{T}} \mathbf{A}`$ for the
/// corresponding disk-basis coefficient vector $`\mathbf{p}`$.
///
/// # Arguments
///
/// * `lmax` - The maximum degree.
/// * `norm` - The overall normalisation applied to every row.
///
/// # Returns
///
/// The $`(l_{\max} + 1)^2 \times (l_{\max} + 1)^2`$ change-of-basis matrix.
#[must_use]
pub fn sh_to_poly_mat(lmax: u32, norm: &Surd) -> Array2<Surd> {
    let sph_order = SphOrder::increasinglm(lmax);
    let dim = sph_order.ncomps();
    let mut mat = Array2::from_elem((dim, dim), Surd::zero());
    for (n, (l, m)) in sph_order.iter().enumerate() {
        let coeffs = ylm_disk_coeffs(*l, *m, lmax);
        for (c, coeff) in coeffs.iter().enumerate() {
            if coeff.is_zero() {
                continue;
            }
            mat[(n, c)] = coeff * norm;
        }
    }
    mat
}

/// Constructs the exact change-of-basis matrix from disk polynomials to real
/// spherical harmonics, *i.e.* the inverse of [`sh_to_poly_mat`].
///
/// Every row of the forward matrix is a common surd multiple of a rational
/// row (the normalisation constant of its harmonic), so the inverse is
/// obtained exactly by factoring out the per-row surds and inverting the
/// rational core.
///
/// # Arguments
///
/// * `lmax` - The maximum degree.
/// * `norm` - The overall normalisation of the forward matrix.
///
/// # Returns
///
/// The exact inverse change-of-basis matrix.
pub fn poly_to_sh_mat(lmax: u32, norm: &Surd) -> Result<Array2<Surd>, anyhow::Error> {
    surd_inverse(&sh_to_poly_mat(lmax, norm))
}

/// Expresses the disk basis monomial of index `n` as an exact coefficient
/// vector over real spherical harmonics of maximum degree `lmax`.
///
/// With the conventions of [`sh_to_poly_mat`],
/// $`\mathbf{y}^{\mathsf{T}} = \mathbf{p}^{\mathsf{T}} \mathbf{A}^{-1}`$, so
/// the harmonic coefficients of the monomial $`\mathbf{p} = \mathbf{e}_n`$
/// form the $`n`$-th row of the inverse change-of-basis matrix.
///
/// # Arguments
///
/// * `n` - The basis index of the monomial.
/// * `lmax` - The maximum degree.
/// * `norm` - The overall normalisation of the forward matrix.
///
/// # Returns
///
/// A vector of exact harmonic coefficients in increasing-$`(l, m)`$ order.
pub fn monomial_to_sh(n: u32, lmax: u32, norm: &Surd) -> Result<Array1<Surd>, anyhow::Error> {
    let dim = (lmax + 1) * (lmax + 1);
    if n >= dim {
        return Err(format_err!(
            "The basis index {n} lies outside the basis of dimension {dim}."
        ));
    }
    let inv = poly_to_sh_mat(lmax, norm)?;
    Ok(inv.row(n as usize).to_owned())
}
