use num_traits::{One, Zero};

use super::{mono_tuple_to_str, DiskPoly};
use crate::symbolic::surd::Surd;

#[test]
fn test_poly_z_square_reduction() {
    // z² must canonicalise to 1 - x² - y².
    let z2 = DiskPoly::monomial(0, 0, 2, Surd::one());
    assert_eq!(z2.coefficient(&(0, 0, 0)), Surd::integer(1));
    assert_eq!(z2.coefficient(&(2, 0, 0)), Surd::integer(-1));
    assert_eq!(z2.coefficient(&(0, 2, 0)), Surd::integer(-1));
    assert_eq!(z2.n_terms(), 3);

    // z³ = z - x²z - y²z.
    let z3 = DiskPoly::monomial(0, 0, 3, Surd::one());
    assert_eq!(z3.coefficient(&(0, 0, 1)), Surd::integer(1));
    assert_eq!(z3.coefficient(&(2, 0, 1)), Surd::integer(-1));
    assert_eq!(z3.coefficient(&(0, 2, 1)), Surd::integer(-1));
    assert!(z3.coefficient(&(0, 0, 0)).is_zero());
}

#[test]
fn test_poly_product_reduces_z() {
    // (xz)·(yz) = xy - x³y - xy³.
    let xz = DiskPoly::monomial(1, 0, 1, Surd::one());
    let yz = DiskPoly::monomial(0, 1, 1, Surd::one());
    let prod = &xz * &yz;
    assert_eq!(prod.coefficient(&(1, 1, 0)), Surd::integer(1));
    assert_eq!(prod.coefficient(&(3, 1, 0)), Surd::integer(-1));
    assert_eq!(prod.coefficient(&(1, 3, 0)), Surd::integer(-1));
    assert_eq!(prod.n_terms(), 3);
}

#[test]
fn test_poly_coefficient_extraction_is_exact() {
    let mut poly = DiskPoly::monomial(2, 0, 0, Surd::ratio(1, 2));
    poly = &poly + &DiskPoly::monomial(0, 1, 1, &Surd::sqrt_integer(3) * &Surd::pi_sqrt_pow(-1));
    assert_eq!(poly.coefficient(&(2, 0, 0)), Surd::ratio(1, 2));
    assert_eq!(
        poly.coefficient(&(0, 1, 1)),
        &Surd::sqrt_integer(3) * &Surd::pi_sqrt_pow(-1)
    );
    // Absent monomials extract to exactly zero.
    assert!(poly.coefficient(&(1, 0, 0)).is_zero());
    assert!(poly.constant_term().is_zero());
}

#[test]
fn test_poly_cancellation() {
    let x2 = DiskPoly::monomial(2, 0, 0, Surd::one());
    let diff = &x2 - &x2;
    assert!(diff.is_zero());

    // 1 - x² - y² - z² = 0 exactly.
    let one = DiskPoly::constant(Surd::one());
    let x2y2 = &DiskPoly::monomial(2, 0, 0, Surd::one()) + &DiskPoly::monomial(0, 2, 0, Surd::one());
    let z2 = DiskPoly::monomial(0, 0, 2, Surd::one());
    assert!((&(&one - &x2y2) - &z2).is_zero());
}

#[test]
fn test_poly_mono_tuple_to_str() {
    assert_eq!(mono_tuple_to_str(&(0, 0, 0)), "1");
    assert_eq!(mono_tuple_to_str(&(1, 0, 0)), "x");
    assert_eq!(mono_tuple_to_str(&(0, 0, 1)), "z");
    assert_eq!(mono_tuple_to_str(&(2, 1, 1)), "x^2yz");
}
