//! Symbolic expression trees over the projected disk variables.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use itertools::Itertools;
use num_traits::{One, Zero};

use crate::symbolic::poly::DiskPoly;
use crate::symbolic::surd::Surd;

#[cfg(test)]
#[path = "expr_tests.rs"]
mod expr_tests;

/// An enum to indicate a formal disk variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Var {
    /// The projected disk coordinate $`x`$.
    X,

    /// The projected disk coordinate $`y`$.
    Y,

    /// The derived coordinate $`z = \sqrt{1 - x^2 - y^2}`$.
    Z,
}

/// An enum to represent an immutable symbolic expression in the disk
/// variables with exact [`Surd`] constants.
///
/// Expressions are only ever combined via addition, multiplication, and
/// exponentiation; [`Expr::expand`] converts them into the canonical
/// [`DiskPoly`] form by structural recursion, which is where all
/// simplification happens. There is no substitution machinery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// An exact scalar constant.
    Constant(Surd),

    /// A formal disk variable.
    Symbol(Var),

    /// A sum of sub-expressions.
    Sum(Vec<Expr>),

    /// A product of sub-expressions.
    Product(Vec<Expr>),

    /// A sub-expression raised to a non-negative integer power.
    Power(Box<Expr>, u32),
}

impl Expr {
    /// The variable $`x`$.
    #[must_use]
    pub fn x() -> Self {
        Self::Symbol(Var::X)
    }

    /// The variable $`y`$.
    #[must_use]
    pub fn y() -> Self {
        Self::Symbol(Var::Y)
    }

    /// The variable $`z = \sqrt{1 - x^2 - y^2}`$.
    #[must_use]
    pub fn z() -> Self {
        Self::Symbol(Var::Z)
    }

    /// An exact constant expression.
    #[must_use]
    pub fn constant(value: Surd) -> Self {
        Self::Constant(value)
    }

    /// An integer constant expression.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self::Constant(Surd::integer(value))
    }

    /// Raises this expression to a non-negative integer power.
    #[must_use]
    pub fn pow(self, exponent: u32) -> Self {
        Self::Power(Box::new(self), exponent)
    }

    /// Expands this expression into the canonical [`DiskPoly`] form by
    /// structural recursion over the tree, with $`z^2 = 1 - x^2 - y^2`$
    /// applied during polynomial arithmetic.
    #[must_use]
    pub fn expand(&self) -> DiskPoly {
        match self {
            Self::Constant(value) => DiskPoly::constant(value.clone()),
            Self::Symbol(Var::X) => DiskPoly::monomial(1, 0, 0, Surd::one()),
            Self::Symbol(Var::Y) => DiskPoly::monomial(0, 1, 0, Surd::one()),
            Self::Symbol(Var::Z) => DiskPoly::monomial(0, 0, 1, Surd::one()),
            Self::Sum(terms) => terms
                .iter()
                .fold(DiskPoly::zero(), |acc, term| &acc + &term.expand()),
            Self::Product(factors) => factors
                .iter()
                .fold(DiskPoly::one(), |acc, factor| &acc * &factor.expand()),
            Self::Power(base, exponent) => {
                let base_poly = base.expand();
                (0..*exponent).fold(DiskPoly::one(), |acc, _| &acc * &base_poly)
            }
        }
    }
}

impl Zero for Expr {
    fn zero() -> Self {
        Self::Constant(Surd::zero())
    }

    fn is_zero(&self) -> bool {
        matches!(self, Self::Constant(value) if value.is_zero())
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Self::Output {
        match (self, rhs) {
            (lhs, rhs) if rhs.is_zero() => lhs,
            (lhs, rhs) if lhs.is_zero() => rhs,
            (Expr::Sum(mut lhs), Expr::Sum(rhs)) => {
                lhs.extend(rhs);
                Expr::Sum(lhs)
            }
            (Expr::Sum(mut lhs), rhs) => {
                lhs.push(rhs);
                Expr::Sum(lhs)
            }
            (lhs, Expr::Sum(mut rhs)) => {
                rhs.insert(0, lhs);
                Expr::Sum(rhs)
            }
            (lhs, rhs) => Expr::Sum(vec![lhs, rhs]),
        }
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Self::Output {
        match (self, rhs) {
            (Expr::Product(mut lhs), Expr::Product(rhs)) => {
                lhs.extend(rhs);
                Expr::Product(lhs)
            }
            (Expr::Product(mut lhs), rhs) => {
                lhs.push(rhs);
                Expr::Product(lhs)
            }
            (lhs, Expr::Product(mut rhs)) => {
                rhs.insert(0, lhs);
                Expr::Product(rhs)
            }
            (lhs, rhs) => Expr::Product(vec![lhs, rhs]),
        }
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        Expr::integer(-1) * self
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Self::Output {
        self + (-rhs)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{value}"),
            Self::Symbol(Var::X) => write!(f, "x"),
            Self::Symbol(Var::Y) => write!(f, "y"),
            Self::Symbol(Var::Z) => write!(f, "z"),
            Self::Sum(terms) => {
                write!(f, "({})", terms.iter().map(|t| t.to_string()).join(" + "))
            }
            Self::Product(factors) => {
                write!(f, "{}", factors.iter().map(|t| t.to_string()).join("·"))
            }
            Self::Power(base, exponent) => write!(f, "{base}^{exponent}"),
        }
    }
}
