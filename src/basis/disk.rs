//! Enumeration of the disk polynomial basis and the canonical ordering of
//! real spherical harmonics.

use std::collections::HashSet;
use std::fmt;
use std::slice::Iter;

use derive_builder::Builder;

use crate::symbolic::expr::Expr;
use crate::symbolic::poly::{mono_tuple_to_str, MonoTuple};

#[cfg(test)]
#[path = "disk_tests.rs"]
mod disk_tests;

/// Maps a linear basis index $`n`$ to the degree--order pair $`(l, m)`$ via
/// $`l = \lfloor \sqrt{n} \rfloor`$ and $`m = n - l^2 - l`$.
///
/// # Arguments
///
/// * `n` - A non-negative basis index.
///
/// # Returns
///
/// The pair $`(l, m)`$ with $`-l \leq m \leq l`$.
#[must_use]
pub fn basis_index_to_lm(n: u32) -> (u32, i32) {
    let mut l = 0u32;
    while (l + 1) * (l + 1) <= n {
        l += 1;
    }
    let m = i64::from(n) - i64::from(l * l) - i64::from(l);
    (
        l,
        i32::try_from(m).expect("Unable to convert the order `m` to `i32`."),
    )
}

/// Maps a degree--order pair $`(l, m)`$ to its linear basis index
/// $`n = l^2 + l + m`$.
///
/// # Arguments
///
/// * `l` - The degree, $`l \geq 0`$.
/// * `m` - The order, $`-l \leq m \leq l`$.
///
/// # Returns
///
/// The basis index $`n`$.
///
/// # Panics
///
/// Panics if $`\lvert m \rvert > l`$.
#[must_use]
pub fn lm_to_basis_index(l: u32, m: i32) -> u32 {
    assert!(
        m.unsigned_abs() <= l,
        "The order `m` must be between -l and l (inclusive)."
    );
    let n = i64::from(l * l) + i64::from(l) + i64::from(m);
    u32::try_from(n).expect("Unable to convert the basis index `n` to `u32`.")
}

/// Maps a linear basis index $`n`$ to the exponent tuple $`(i, j, k)`$ of
/// the disk monomial $`x^i y^j z^k`$.
///
/// With $`\mu = l - m`$ and $`\nu = l + m`$:
///
/// ```math
/// x^i y^j z^k =
///     \begin{cases}
///         x^{\mu/2} y^{\nu/2}           & \nu\ \mathrm{even} \\
///         x^{(\mu-1)/2} y^{(\nu-1)/2} z & \nu\ \mathrm{odd}
///     \end{cases}
/// ```
///
/// # Arguments
///
/// * `n` - A non-negative basis index.
///
/// # Returns
///
/// The exponent tuple $`(i, j, k)`$ with $`k \in \{0, 1\}`$.
#[must_use]
pub fn basis_mono_tuple(n: u32) -> MonoTuple {
    let (l, m) = basis_index_to_lm(n);
    let mu = u32::try_from(i64::from(l) - i64::from(m))
        .expect("Unable to convert `l - m` to `u32`.");
    let nu = u32::try_from(i64::from(l) + i64::from(m))
        .expect("Unable to convert `l + m` to `u32`.");
    if nu % 2 == 0 {
        (mu / 2, nu / 2, 0)
    } else {
        ((mu - 1) / 2, (nu - 1) / 2, 1)
    }
}

/// Maps the exponent tuple $`(i, j, k)`$ of a disk monomial back to its
/// linear basis index. This is the inverse of [`basis_mono_tuple`].
///
/// # Arguments
///
/// * `mono_tuple` - An exponent tuple with $`k \in \{0, 1\}`$.
///
/// # Returns
///
/// The basis index $`n`$.
///
/// # Panics
///
/// Panics if the $`z`$ exponent exceeds one.
#[must_use]
pub fn mono_tuple_to_basis_index(mono_tuple: &MonoTuple) -> u32 {
    let (i, j, k) = mono_tuple;
    assert!(
        *k <= 1,
        "A disk monomial must have a `z` exponent of zero or one."
    );
    let l = i + j + k;
    let m = i64::from(*j) - i64::from(*i);
    lm_to_basis_index(
        l,
        i32::try_from(m).expect("Unable to convert the order `m` to `i32`."),
    )
}

/// Returns the disk basis monomial of index $`n`$ as a symbolic expression.
///
/// # Arguments
///
/// * `n` - A non-negative basis index.
///
/// # Returns
///
/// The expression $`x^i y^j z^k`$.
#[must_use]
pub fn poly_basis(n: u32) -> Expr {
    let (i, j, k) = basis_mono_tuple(n);
    Expr::x().pow(i) * Expr::y().pow(j) * Expr::z().pow(k)
}

/// A struct to contain information about the ordering of the disk polynomial
/// basis up to a maximum spherical-harmonic degree.
#[derive(Clone, Builder, PartialEq, Eq, Hash)]
pub struct DiskOrder {
    /// A sequence of $`(i, j, k)`$ exponent tuples giving the ordering of the
    /// disk monomials.
    #[builder(setter(custom))]
    mono_tuples: Vec<MonoTuple>,

    /// The maximum spherical-harmonic degree spanned by the basis.
    pub lmax: u32,
}

impl DiskOrderBuilder {
    fn mono_tuples(&mut self, mono_tuples: &[MonoTuple]) -> &mut Self {
        let lmax = self.lmax.expect("`lmax` has not been set.");
        assert_eq!(
            mono_tuples.len(),
            ((lmax + 1) * (lmax + 1)) as usize,
            "The number of monomials does not match the basis dimension."
        );
        self.mono_tuples = Some(mono_tuples.to_vec());
        self
    }
}

impl DiskOrder {
    fn builder() -> DiskOrderBuilder {
        DiskOrderBuilder::default()
    }

    /// Constructs a new `DiskOrder` struct in the canonical $`(l, m)`$
    /// enumeration order for a given maximum degree.
    ///
    /// # Arguments
    ///
    /// * `lmax` - The maximum spherical-harmonic degree.
    ///
    /// # Returns
    ///
    /// A `DiskOrder` struct with the canonical ordering.
    #[must_use]
    pub fn lm(lmax: u32) -> Self {
        let mono_tuples = (0..(lmax + 1) * (lmax + 1))
            .map(basis_mono_tuple)
            .collect::<Vec<_>>();
        Self::builder()
            .lmax(lmax)
            .mono_tuples(&mono_tuples)
            .build()
            .expect("Unable to construct a `DiskOrder` structure with canonical order.")
    }

    /// Verifies if this `DiskOrder` struct is valid: distinct monomials, each
    /// with a valid $`z`$ exponent and total degree within `lmax`.
    ///
    /// # Returns
    ///
    /// A boolean indicating if this `DiskOrder` struct is valid.
    #[must_use]
    pub fn verify(&self) -> bool {
        let mono_tuples_set = self.mono_tuples.iter().collect::<HashSet<_>>();
        let lmax = self.lmax;
        mono_tuples_set.len() == self.ncomps()
            && mono_tuples_set
                .iter()
                .all(|(i, j, k)| *k <= 1 && i + j + k <= lmax)
    }

    pub fn iter(&self) -> Iter<MonoTuple> {
        self.mono_tuples.iter()
    }

    pub fn ncomps(&self) -> usize {
        let lmax = usize::try_from(self.lmax).unwrap_or_else(|_| {
            panic!("Unable to convert the maximum degree {} to `usize`.", self.lmax)
        });
        (lmax + 1) * (lmax + 1)
    }
}

impl fmt::Display for DiskOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Maximum degree: {}", self.lmax)?;
        writeln!(f, "Order:")?;
        for mono_tuple in self.iter() {
            writeln!(f, "  {}", mono_tuple_to_str(mono_tuple))?;
        }
        Ok(())
    }
}

impl fmt::Debug for DiskOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Maximum degree: {}", self.lmax)?;
        writeln!(f, "Order:")?;
        for mono_tuple in self.iter() {
            writeln!(f, "  {mono_tuple:?}")?;
        }
        Ok(())
    }
}

/// A struct to contain information about the canonical ordering of real
/// spherical harmonics up to a maximum degree: increasing $`l`$, and
/// increasing $`m`$ within each $`l`$.
#[derive(Clone, Builder, PartialEq, Eq, Hash)]
pub struct SphOrder {
    /// A sequence of $`(l, m)`$ pairs giving the ordering of the harmonics.
    #[builder(setter(custom))]
    lm_tuples: Vec<(u32, i32)>,

    /// The maximum degree.
    pub lmax: u32,
}

impl SphOrderBuilder {
    fn lm_tuples(&mut self, lm_tuples: &[(u32, i32)]) -> &mut Self {
        let lmax = self.lmax.expect("`lmax` has not been set.");
        assert_eq!(
            lm_tuples.len(),
            ((lmax + 1) * (lmax + 1)) as usize,
            "The number of harmonics does not match the basis dimension."
        );
        assert!(lm_tuples.iter().all(|(l, m)| m.unsigned_abs() <= *l));
        self.lm_tuples = Some(lm_tuples.to_vec());
        self
    }
}

impl SphOrder {
    fn builder() -> SphOrderBuilder {
        SphOrderBuilder::default()
    }

    /// Constructs a new `SphOrder` struct in increasing-$`l`$,
    /// increasing-$`m`$ order for a given maximum degree.
    ///
    /// # Arguments
    ///
    /// * `lmax` - The maximum degree.
    ///
    /// # Returns
    ///
    /// A `SphOrder` struct with the canonical ordering.
    #[must_use]
    pub fn increasinglm(lmax: u32) -> Self {
        let lm_tuples = (0..(lmax + 1) * (lmax + 1))
            .map(basis_index_to_lm)
            .collect::<Vec<_>>();
        Self::builder()
            .lmax(lmax)
            .lm_tuples(&lm_tuples)
            .build()
            .expect("Unable to construct a `SphOrder` structure with canonical order.")
    }

    pub fn iter(&self) -> Iter<(u32, i32)> {
        self.lm_tuples.iter()
    }

    pub fn ncomps(&self) -> usize {
        let lmax = usize::try_from(self.lmax).unwrap_or_else(|_| {
            panic!("Unable to convert the maximum degree {} to `usize`.", self.lmax)
        });
        (lmax + 1) * (lmax + 1)
    }
}

/// Translates a degree--order pair to a human-understandable harmonic label,
/// *e.g.* `Y(2, -1)`.
pub(crate) fn lm_tuple_to_str(lm_tuple: &(u32, i32)) -> String {
    format!("Y({}, {})", lm_tuple.0, lm_tuple.1)
}

impl fmt::Display for SphOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Maximum degree: {}", self.lmax)?;
        writeln!(f, "Order:")?;
        for lm_tuple in self.iter() {
            writeln!(f, "  {}", lm_tuple_to_str(lm_tuple))?;
        }
        Ok(())
    }
}

impl fmt::Debug for SphOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Maximum degree: {}", self.lmax)?;
        writeln!(f, "Order:")?;
        for lm_tuple in self.iter() {
            writeln!(f, "  {lm_tuple:?}")?;
        }
        Ok(())
    }
}
