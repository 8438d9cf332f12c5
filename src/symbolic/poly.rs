//! Canonical polynomials over the projected stellar disk.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use itertools::Itertools;
use num_traits::{One, Zero};

use crate::symbolic::surd::Surd;

#[cfg(test)]
#[path = "poly_tests.rs"]
mod poly_tests;

/// The exponent tuple $`(i, j, k)`$ of the disk monomial $`x^i y^j z^k`$,
/// where $`z = \sqrt{1 - x^2 - y^2}`$.
pub type MonoTuple = (u32, u32, u32);

/// A struct to represent a polynomial over the disk variables $`x`$, $`y`$,
/// and $`z = \sqrt{1 - x^2 - y^2}`$ in canonical form: a map from monomial
/// exponent tuples $`(i, j, k)`$ to exact [`Surd`] coefficients, with
/// $`k \in \{0, 1\}`$ maintained by rewriting $`z^2 = 1 - x^2 - y^2`$ at
/// insertion.
///
/// Because the representation is a normal form, extracting the coefficient
/// of a monomial is a plain lookup: no residual dependence on the disk
/// variables can hide inside a coefficient, so a "partial match" where the
/// coefficient of a target term still contains $`x`$, $`y`$ or $`z`$ is
/// structurally impossible.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct DiskPoly {
    terms: BTreeMap<MonoTuple, Surd>,
}

impl DiskPoly {
    /// Constructs the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// Constructs a constant polynomial.
    #[must_use]
    pub fn constant(value: Surd) -> Self {
        let mut poly = Self::zero();
        poly.add_term(0, 0, 0, value);
        poly
    }

    /// Constructs a single-monomial polynomial $`c\ x^i y^j z^k`$ with the
    /// $`z`$ exponent reduced into the canonical range.
    #[must_use]
    pub fn monomial(i: u32, j: u32, k: u32, coeff: Surd) -> Self {
        let mut poly = Self::zero();
        poly.add_term(i, j, k, coeff);
        poly
    }

    /// Adds $`c\ x^i y^j z^k`$ into this polynomial, rewriting
    /// $`z^2 \mapsto 1 - x^2 - y^2`$ until $`k \in \{0, 1\}`$.
    fn add_term(&mut self, i: u32, j: u32, k: u32, coeff: Surd) {
        if coeff.is_zero() {
            return;
        }
        if k >= 2 {
            self.add_term(i, j, k - 2, coeff.clone());
            self.add_term(i + 2, j, k - 2, -&coeff);
            self.add_term(i, j + 2, k - 2, -coeff);
            return;
        }
        let entry = self.terms.entry((i, j, k)).or_insert_with(Surd::zero);
        *entry = &*entry + &coeff;
        if entry.is_zero() {
            self.terms.remove(&(i, j, k));
        }
    }

    /// Returns the exact coefficient of the monomial $`x^i y^j z^k`$
    /// identified by `mono`, or zero if the monomial is absent.
    ///
    /// This is the coefficient extractor of the basis-change construction:
    /// the canonical form guarantees the returned value is genuinely
    /// constant in the disk variables.
    #[must_use]
    pub fn coefficient(&self, mono: &MonoTuple) -> Surd {
        self.terms.get(mono).cloned().unwrap_or_else(Surd::zero)
    }

    /// Returns the constant term, *i.e.* the coefficient remaining after all
    /// of $`x`$, $`y`$ and $`z`$ are zeroed out.
    #[must_use]
    pub fn constant_term(&self) -> Surd {
        self.coefficient(&(0, 0, 0))
    }

    /// Returns `true` if this polynomial has no terms.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The number of monomials with non-zero coefficients.
    #[must_use]
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// Iterates over the (monomial, coefficient) pairs in graded
    /// lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&MonoTuple, &Surd)> {
        self.terms.iter()
    }

    /// Multiplies this polynomial by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: &Surd) -> Self {
        let mut poly = Self::zero();
        for ((i, j, k), coeff) in &self.terms {
            poly.add_term(*i, *j, *k, coeff * scalar);
        }
        poly
    }
}

impl Add<&'_ DiskPoly> for &DiskPoly {
    type Output = DiskPoly;

    fn add(self, rhs: &DiskPoly) -> Self::Output {
        let mut poly = self.clone();
        for ((i, j, k), coeff) in &rhs.terms {
            poly.add_term(*i, *j, *k, coeff.clone());
        }
        poly
    }
}

impl Neg for &DiskPoly {
    type Output = DiskPoly;

    fn neg(self) -> Self::Output {
        DiskPoly {
            terms: self
                .terms
                .iter()
                .map(|(mono, coeff)| (*mono, -coeff))
                .collect(),
        }
    }
}

impl Sub<&'_ DiskPoly> for &DiskPoly {
    type Output = DiskPoly;

    fn sub(self, rhs: &DiskPoly) -> Self::Output {
        self + &(-rhs)
    }
}

impl Mul<&'_ DiskPoly> for &DiskPoly {
    type Output = DiskPoly;

    fn mul(self, rhs: &DiskPoly) -> Self::Output {
        let mut poly = DiskPoly::zero();
        for ((il, jl, kl), cl) in &self.terms {
            for ((ir, jr, kr), cr) in &rhs.terms {
                poly.add_term(il + ir, jl + jr, kl + kr, cl * cr);
            }
        }
        poly
    }
}

impl One for DiskPoly {
    fn one() -> Self {
        Self::constant(Surd::one())
    }
}

impl Mul for DiskPoly {
    type Output = DiskPoly;

    fn mul(self, rhs: DiskPoly) -> Self::Output {
        &self * &rhs
    }
}

/// Translates a disk monomial exponent tuple to a human-understandable
/// string, *e.g.* `x^2yz`, with `1` for the empty monomial.
pub(crate) fn mono_tuple_to_str(mono: &MonoTuple) -> String {
    let (i, j, k) = mono;
    if i + j + k == 0 {
        return "1".to_string();
    }
    let exponents = [*i, *j, *k];
    let variables = ["x", "y", "z"];
    exponents
        .iter()
        .enumerate()
        .map(|(idx, &e)| match e.cmp(&1) {
            Ordering::Greater => format!("{}^{e}", variables[idx]),
            Ordering::Equal => variables[idx].to_string(),
            Ordering::Less => String::new(),
        })
        .collect::<String>()
}

impl fmt::Display for DiskPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        let rendered = self
            .terms
            .iter()
            .map(|(mono, coeff)| {
                if mono == &(0, 0, 0) {
                    format!("{coeff}")
                } else {
                    format!("({coeff}){}", mono_tuple_to_str(mono))
                }
            })
            .join(" + ");
        write!(f, "{rendered}")
    }
}

impl fmt::Debug for DiskPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiskPoly({self})")
    }
}
