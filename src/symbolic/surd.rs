//! Exact scalar arithmetic over rationals, square roots, and powers of $`\pi`$.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num::{BigInt, BigRational, BigUint, Integer};
use num_traits::{One, Pow, Signed, Zero};

#[cfg(test)]
#[path = "surd_tests.rs"]
mod surd_tests;

/// The key of a surd term: the square-free radicand $`r`$ and the power $`h`$
/// of $`\sqrt{\pi}`$.
type SurdKey = (BigUint, i32);

/// A struct to represent exact scalars of the form
///
/// ```math
/// \sum_t c_t \sqrt{r_t}\ \pi^{h_t/2},
/// ```
///
/// where $`c_t`$ are rationals, $`r_t`$ are square-free positive integers, and
/// $`h_t`$ are (possibly negative) integers. Terms are keyed by
/// $`(r_t, h_t)`$, so like terms always merge and the zero value is the empty
/// sum. All spherical-harmonic normalisation constants, change-of-basis
/// matrix entries, and decomposition coefficients in this crate are values of
/// this form.
#[derive(Clone, PartialEq, Eq)]
pub struct Surd {
    /// The terms of this surd, mapping $`(r_t, h_t)`$ to $`c_t`$. Zero
    /// coefficients are never stored.
    terms: BTreeMap<SurdKey, BigRational>,
}

/// Splits a positive integer $`n`$ into $`(s, r)`$ such that $`n = s^2 r`$
/// with $`r`$ square-free, by trial division.
///
/// # Arguments
///
/// * `n` - A positive integer.
///
/// # Returns
///
/// The pair $`(s, r)`$.
fn square_free_split(n: &BigUint) -> (BigUint, BigUint) {
    let one = BigUint::one();
    let mut remaining = n.clone();
    let mut outer = BigUint::one();
    let mut root = BigUint::one();
    let mut p = BigUint::from(2u32);
    while &p * &p <= remaining {
        let mut mult = 0u32;
        while (&remaining % &p).is_zero() {
            remaining /= &p;
            mult += 1;
        }
        if mult > 0 {
            outer *= Pow::pow(&p, mult / 2);
            if mult % 2 == 1 {
                root *= &p;
            }
        }
        p += &one;
    }
    // `remaining` is now either unity or a prime appearing to the first power.
    root *= &remaining;
    (outer, root)
}

/// Inserts a coefficient into a term map, merging with any existing term and
/// dropping the entry if the merged coefficient vanishes.
fn insert_term(terms: &mut BTreeMap<SurdKey, BigRational>, key: SurdKey, coeff: BigRational) {
    if coeff.is_zero() {
        return;
    }
    match terms.entry(key) {
        Entry::Occupied(mut entry) => {
            *entry.get_mut() += coeff;
            if entry.get().is_zero() {
                entry.remove();
            }
        }
        Entry::Vacant(entry) => {
            entry.insert(coeff);
        }
    }
}

impl Surd {
    /// Constructs a single-term surd $`c \sqrt{r}\ \pi^{h/2}`$, reducing the
    /// radicand to square-free form.
    ///
    /// # Arguments
    ///
    /// * `coeff` - The rational coefficient $`c`$.
    /// * `root` - The radicand $`r`$, a positive integer not required to be
    ///   square-free.
    /// * `pi_half` - The power $`h`$ of $`\sqrt{\pi}`$.
    ///
    /// # Returns
    ///
    /// The reduced single-term surd.
    ///
    /// # Panics
    ///
    /// Panics if `root` is zero.
    #[must_use]
    pub fn new_term(coeff: BigRational, root: BigUint, pi_half: i32) -> Self {
        assert!(!root.is_zero(), "The radicand of a surd term must be positive.");
        let mut terms = BTreeMap::new();
        let (outer, square_free_root) = square_free_split(&root);
        let reduced_coeff = coeff * BigRational::from(BigInt::from(outer));
        insert_term(&mut terms, (square_free_root, pi_half), reduced_coeff);
        Self { terms }
    }

    /// Constructs a rational surd (no radical, no $`\pi`$).
    #[must_use]
    pub fn rational(coeff: BigRational) -> Self {
        Self::new_term(coeff, BigUint::one(), 0)
    }

    /// Constructs an integer surd.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self::rational(BigRational::from(BigInt::from(value)))
    }

    /// Constructs the rational surd $`p/q`$.
    ///
    /// # Panics
    ///
    /// Panics if $`q = 0`$.
    #[must_use]
    pub fn ratio(p: i64, q: i64) -> Self {
        Self::rational(BigRational::new(BigInt::from(p), BigInt::from(q)))
    }

    /// Constructs the exact square root of a non-negative rational:
    ///
    /// ```math
    /// \sqrt{\frac{n}{d}} = \frac{\sqrt{nd}}{d},
    /// ```
    ///
    /// with square factors of $`nd`$ extracted into the coefficient.
    ///
    /// # Arguments
    ///
    /// * `value` - A non-negative rational.
    ///
    /// # Returns
    ///
    /// The exact square root as a single-term surd.
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative.
    #[must_use]
    pub fn sqrt_ratio(value: &BigRational) -> Self {
        assert!(
            !value.is_negative(),
            "The square root of a negative rational is not representable."
        );
        if value.is_zero() {
            return Self::zero();
        }
        let numer = value
            .numer()
            .to_biguint()
            .expect("Unable to convert the reduced numerator to `BigUint`.");
        let denom = value
            .denom()
            .to_biguint()
            .expect("Unable to convert the reduced denominator to `BigUint`.");
        let radicand = &numer * &denom;
        let coeff = BigRational::new(BigInt::one(), BigInt::from(denom));
        Self::new_term(coeff, radicand, 0)
    }

    /// Constructs the exact square root of a non-negative integer.
    #[must_use]
    pub fn sqrt_integer(value: u64) -> Self {
        Self::sqrt_ratio(&BigRational::from(BigInt::from(value)))
    }

    /// Constructs $`\pi^{h/2}`$.
    ///
    /// # Arguments
    ///
    /// * `pi_half` - The power $`h`$ of $`\sqrt{\pi}`$.
    #[must_use]
    pub fn pi_sqrt_pow(pi_half: i32) -> Self {
        Self::new_term(BigRational::one(), BigUint::one(), pi_half)
    }

    /// The number of terms in this surd.
    #[must_use]
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// Returns the rational value of this surd if it is free of radicals and
    /// powers of $`\pi`$, and `None` otherwise.
    #[must_use]
    pub fn as_rational(&self) -> Option<BigRational> {
        if self.terms.is_empty() {
            return Some(BigRational::zero());
        }
        if self.terms.len() == 1 {
            let ((root, pi_half), coeff) = self
                .terms
                .iter()
                .next()
                .expect("Unable to obtain the only term of the surd.");
            if root.is_one() && *pi_half == 0 {
                return Some(coeff.clone());
            }
        }
        None
    }

    /// Returns the exact reciprocal of this surd if it consists of a single
    /// term, rationalised as
    ///
    /// ```math
    /// \frac{1}{c \sqrt{r}\ \pi^{h/2}} = \frac{\sqrt{r}}{c r}\ \pi^{-h/2},
    /// ```
    ///
    /// and `None` if the surd is zero or has multiple terms.
    #[must_use]
    pub fn inv(&self) -> Option<Self> {
        if self.terms.len() != 1 {
            return None;
        }
        let ((root, pi_half), coeff) = self
            .terms
            .iter()
            .next()
            .expect("Unable to obtain the only term of the surd.");
        let root_ratio = BigRational::from(BigInt::from(root.clone()));
        let inv_coeff = (coeff * root_ratio)
            .recip();
        Some(Self::new_term(inv_coeff, root.clone(), -pi_half))
    }

    /// Divides this surd by a single-term surd.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero or has multiple terms.
    #[must_use]
    pub fn div_single(&self, divisor: &Self) -> Self {
        let divisor_inv = divisor.inv().unwrap_or_else(|| {
            panic!("Unable to invert the surd {divisor} as it is not a single term.")
        });
        self * &divisor_inv
    }

    /// Iterates over the $`((r_t, h_t), c_t)`$ terms of this surd in key
    /// order.
    pub fn iter_terms(&self) -> impl Iterator<Item = (&SurdKey, &BigRational)> {
        self.terms.iter()
    }
}

impl Zero for Surd {
    fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl One for Surd {
    fn one() -> Self {
        Self::integer(1)
    }
}

impl Default for Surd {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add<&'_ Surd> for &Surd {
    type Output = Surd;

    fn add(self, rhs: &Surd) -> Self::Output {
        let mut terms = self.terms.clone();
        for (key, coeff) in &rhs.terms {
            insert_term(&mut terms, key.clone(), coeff.clone());
        }
        Surd { terms }
    }
}

impl Add for Surd {
    type Output = Surd;

    fn add(self, rhs: Surd) -> Self::Output {
        &self + &rhs
    }
}

impl Neg for &Surd {
    type Output = Surd;

    fn neg(self) -> Self::Output {
        Surd {
            terms: self
                .terms
                .iter()
                .map(|(key, coeff)| (key.clone(), -coeff))
                .collect(),
        }
    }
}

impl Neg for Surd {
    type Output = Surd;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Sub<&'_ Surd> for &Surd {
    type Output = Surd;

    fn sub(self, rhs: &Surd) -> Self::Output {
        self + &(-rhs)
    }
}

impl Sub for Surd {
    type Output = Surd;

    fn sub(self, rhs: Surd) -> Self::Output {
        &self - &rhs
    }
}

impl Mul<&'_ Surd> for &Surd {
    type Output = Surd;

    fn mul(self, rhs: &Surd) -> Self::Output {
        let mut terms = BTreeMap::new();
        for ((root_l, pi_l), coeff_l) in &self.terms {
            for ((root_r, pi_r), coeff_r) in &rhs.terms {
                // √r₁·√r₂ = g·√(r₁r₂/g²) with g = gcd(r₁, r₂); the product
                // radicand stays square-free because r₁ and r₂ are.
                let g = root_l.gcd(root_r);
                let root = (root_l / &g) * (root_r / &g);
                let coeff = coeff_l * coeff_r * BigRational::from(BigInt::from(g));
                insert_term(&mut terms, (root, pi_l + pi_r), coeff);
            }
        }
        Surd { terms }
    }
}

impl Mul for Surd {
    type Output = Surd;

    fn mul(self, rhs: Surd) -> Self::Output {
        &self * &rhs
    }
}

/// Renders the magnitude of a single surd term in exact-arithmetic notation,
/// *e.g.* `√15π/15` or `1/(2√π)`. The sign is handled by the caller.
fn format_term_magnitude(coeff: &BigRational, root: &BigUint, pi_half: i32) -> String {
    let numer = coeff.numer().abs();
    let denom = coeff.denom().clone();

    let mut numer_factors: Vec<String> = Vec::new();
    if !root.is_one() {
        numer_factors.push(format!("√{root}"));
    }
    if pi_half > 0 {
        let whole = pi_half / 2;
        if whole == 1 {
            numer_factors.push("π".to_string());
        } else if whole > 1 {
            numer_factors.push(format!("π^{whole}"));
        }
        if pi_half % 2 == 1 {
            numer_factors.push("√π".to_string());
        }
    }
    let mut numer_str = if numer.is_one() && !numer_factors.is_empty() {
        String::new()
    } else {
        numer.to_string()
    };
    numer_str.push_str(&numer_factors.concat());

    let mut denom_factors: Vec<String> = Vec::new();
    if !denom.is_one() {
        denom_factors.push(denom.to_string());
    }
    if pi_half < 0 {
        let whole = (-pi_half) / 2;
        if whole == 1 {
            denom_factors.push("π".to_string());
        } else if whole > 1 {
            denom_factors.push(format!("π^{whole}"));
        }
        if (-pi_half) % 2 == 1 {
            denom_factors.push("√π".to_string());
        }
    }

    if denom_factors.is_empty() {
        numer_str
    } else if denom_factors.len() == 1 {
        format!("{numer_str}/{}", denom_factors[0])
    } else {
        format!("{numer_str}/({})", denom_factors.concat())
    }
}

impl fmt::Display for Surd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, ((root, pi_half), coeff)) in self.terms.iter().enumerate() {
            if i == 0 {
                if coeff.is_negative() {
                    write!(f, "-")?;
                }
            } else if coeff.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            write!(f, "{}", format_term_magnitude(coeff, root, *pi_half))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Surd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Surd({self})")
    }
}
