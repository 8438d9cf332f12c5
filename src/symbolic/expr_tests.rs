use num_traits::{One, Zero};

use super::Expr;
use crate::symbolic::surd::Surd;

#[test]
fn test_expr_expand_monomials() {
    let x2y = Expr::x().pow(2) * Expr::y();
    let poly = x2y.expand();
    assert_eq!(poly.coefficient(&(2, 1, 0)), Surd::one());
    assert_eq!(poly.n_terms(), 1);
}

#[test]
fn test_expr_expand_binomial_square() {
    // (x + y)² = x² + 2xy + y².
    let sq = (Expr::x() + Expr::y()).pow(2);
    let poly = sq.expand();
    assert_eq!(poly.coefficient(&(2, 0, 0)), Surd::one());
    assert_eq!(poly.coefficient(&(1, 1, 0)), Surd::integer(2));
    assert_eq!(poly.coefficient(&(0, 2, 0)), Surd::one());
    assert_eq!(poly.n_terms(), 3);
}

#[test]
fn test_expr_expand_z_square_identity() {
    // z² + x² + y² - 1 expands to the zero polynomial.
    let expr = Expr::z().pow(2) + Expr::x().pow(2) + Expr::y().pow(2) - Expr::integer(1);
    assert!(expr.expand().is_zero());
}

#[test]
fn test_expr_constant_folding_through_expand() {
    let c = Expr::constant(&Surd::ratio(1, 2) * &Surd::sqrt_integer(3));
    let expr = c * Expr::x() * Expr::constant(Surd::sqrt_integer(3));
    let poly = expr.expand();
    // (√3/2)·√3 = 3/2.
    assert_eq!(poly.coefficient(&(1, 0, 0)), Surd::ratio(3, 2));
}

#[test]
fn test_expr_zero_power() {
    let expr = Expr::x().pow(0);
    assert_eq!(expr.expand().constant_term(), Surd::one());
}

#[test]
fn test_expr_zero_addition_identity() {
    let expr = Expr::zero() + Expr::y();
    assert_eq!(expr, Expr::y());
}
