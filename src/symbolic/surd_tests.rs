use num::{BigInt, BigRational, BigUint};
use num_traits::{One, Zero};

use super::Surd;

#[test]
fn test_surd_square_free_reduction() {
    // √12 = 2√3.
    let s = Surd::sqrt_integer(12);
    assert_eq!(s, &Surd::integer(2) * &Surd::sqrt_integer(3));

    // √(9/4) = 3/2.
    let s = Surd::sqrt_ratio(&BigRational::new(BigInt::from(9), BigInt::from(4)));
    assert_eq!(s, Surd::ratio(3, 2));

    // √(5/12) = √15/6.
    let s = Surd::sqrt_ratio(&BigRational::new(BigInt::from(5), BigInt::from(12)));
    assert_eq!(s, &Surd::ratio(1, 6) * &Surd::sqrt_integer(15));
}

#[test]
fn test_surd_like_term_merging() {
    let a = &Surd::ratio(1, 3) * &Surd::sqrt_integer(5);
    let b = &Surd::ratio(2, 3) * &Surd::sqrt_integer(5);
    assert_eq!(&a + &b, Surd::sqrt_integer(5));

    // √2 + √3 - √2 = √3.
    let sum = &(&Surd::sqrt_integer(2) + &Surd::sqrt_integer(3)) - &Surd::sqrt_integer(2);
    assert_eq!(sum, Surd::sqrt_integer(3));

    // Full cancellation gives the empty sum.
    let zero = &a - &a;
    assert!(zero.is_zero());
    assert_eq!(zero.n_terms(), 0);
}

#[test]
fn test_surd_multiplication() {
    // √6·√10 = 2√15.
    assert_eq!(
        &Surd::sqrt_integer(6) * &Surd::sqrt_integer(10),
        &Surd::integer(2) * &Surd::sqrt_integer(15)
    );

    // √3·√3 = 3.
    assert_eq!(
        &Surd::sqrt_integer(3) * &Surd::sqrt_integer(3),
        Surd::integer(3)
    );

    // (1 + √2)(1 - √2) = -1.
    let plus = &Surd::one() + &Surd::sqrt_integer(2);
    let minus = &Surd::one() - &Surd::sqrt_integer(2);
    assert_eq!(&plus * &minus, Surd::integer(-1));

    // π^(1/2)·π^(3/2) = π².
    assert_eq!(
        &Surd::pi_sqrt_pow(1) * &Surd::pi_sqrt_pow(3),
        Surd::pi_sqrt_pow(4)
    );
}

#[test]
fn test_surd_reciprocal() {
    // 1/(2/√π) = √π/2.
    let norm = &Surd::integer(2) * &Surd::pi_sqrt_pow(-1);
    assert_eq!(
        norm.inv().unwrap(),
        &Surd::ratio(1, 2) * &Surd::pi_sqrt_pow(1)
    );

    // 1/(√3/(2√π)) = 2√π/√3 = 2√3π/3... as a surd: (2/3)√3·√π.
    let sa11 = &(&Surd::ratio(1, 2) * &Surd::sqrt_integer(3)) * &Surd::pi_sqrt_pow(-1);
    let expected = &(&Surd::ratio(2, 3) * &Surd::sqrt_integer(3)) * &Surd::pi_sqrt_pow(1);
    assert_eq!(sa11.inv().unwrap(), expected);

    // Reciprocals of multi-term or zero surds are not single surds.
    assert!((&Surd::one() + &Surd::sqrt_integer(2)).inv().is_none());
    assert!(Surd::zero().inv().is_none());

    // x·x⁻¹ = 1.
    let x = &(&Surd::ratio(-3, 7) * &Surd::sqrt_integer(10)) * &Surd::pi_sqrt_pow(-3);
    assert_eq!(&x * &x.inv().unwrap(), Surd::one());
}

#[test]
fn test_surd_as_rational() {
    assert_eq!(Surd::zero().as_rational(), Some(BigRational::zero()));
    assert_eq!(
        Surd::ratio(-5, 3).as_rational(),
        Some(BigRational::new(BigInt::from(-5), BigInt::from(3)))
    );
    assert!(Surd::sqrt_integer(2).as_rational().is_none());
    assert!(Surd::pi_sqrt_pow(2).as_rational().is_none());
}

#[test]
fn test_surd_display() {
    assert_eq!(Surd::zero().to_string(), "0");
    assert_eq!(Surd::integer(1).to_string(), "1");
    assert_eq!(Surd::ratio(-1, 3).to_string(), "-1/3");
    assert_eq!(Surd::pi_sqrt_pow(2).to_string(), "π");
    assert_eq!(Surd::pi_sqrt_pow(-1).to_string(), "1/√π");
    assert_eq!(
        (&Surd::ratio(1, 2) * &Surd::pi_sqrt_pow(-1)).to_string(),
        "1/(2√π)"
    );
    assert_eq!(
        (&Surd::ratio(1, 15) * &(&Surd::sqrt_integer(15) * &Surd::pi_sqrt_pow(2))).to_string(),
        "√15π/15"
    );
    assert_eq!(
        (&Surd::ratio(-1, 15) * &(&Surd::sqrt_integer(5) * &Surd::pi_sqrt_pow(2))).to_string(),
        "-√5π/15"
    );
    assert_eq!(
        (&Surd::integer(2) * &Surd::pi_sqrt_pow(-1)).to_string(),
        "2/√π"
    );
    assert_eq!(
        (&Surd::one() + &Surd::sqrt_integer(2)).to_string(),
        "1 + √2"
    );
    assert_eq!(
        (&Surd::one() - &Surd::sqrt_integer(2)).to_string(),
        "1 - √2"
    );
}

#[test]
fn test_surd_radicand_not_assumed_square_free() {
    // Constructing with radicand 18 must reduce to 3√2.
    let s = Surd::new_term(BigRational::one(), BigUint::from(18u32), 0);
    assert_eq!(s, &Surd::integer(3) * &Surd::sqrt_integer(2));
}
