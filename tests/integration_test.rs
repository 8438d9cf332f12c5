use dopsh::drivers::basis_conversion::{BasisConversionDriver, BasisConversionParams};
use dopsh::drivers::DopshDriver;
use dopsh::symbolic::surd::Surd;
use num_traits::Zero;

#[test]
fn test_basis_conversion_quadratic_monomials() {
    let params = BasisConversionParams::builder()
        .lmax(2)
        .monomial_indices(&[0, 1, 4])
        .build()
        .unwrap();
    let mut driver = BasisConversionDriver::builder()
        .parameters(params)
        .build()
        .unwrap();
    driver.run().unwrap();
    let result = driver.result().unwrap();
    let expansions = result.monomial_expansions();

    // 1 = π Y(0, 0).
    let (_, coeffs) = &expansions[0];
    assert_eq!(coeffs[0], Surd::pi_sqrt_pow(2));
    assert!(coeffs.iter().skip(1).all(Surd::is_zero));

    // x = (√3 π/3) Y(1, 1).
    let (_, coeffs) = &expansions[1];
    assert_eq!(
        coeffs[3],
        &(&Surd::ratio(1, 3) * &Surd::sqrt_integer(3)) * &Surd::pi_sqrt_pow(2)
    );
    for n in [0usize, 1, 2, 4, 5, 6, 7, 8] {
        assert!(coeffs[n].is_zero());
    }

    // x² = (π/3) Y(0, 0) - (√5 π/15) Y(2, 0) + (√15 π/15) Y(2, 2).
    let (_, coeffs) = &expansions[2];
    assert_eq!(coeffs[0], &Surd::ratio(1, 3) * &Surd::pi_sqrt_pow(2));
    assert_eq!(
        coeffs[6],
        &(&Surd::ratio(-1, 15) * &Surd::sqrt_integer(5)) * &Surd::pi_sqrt_pow(2)
    );
    assert_eq!(
        coeffs[8],
        &(&Surd::ratio(1, 15) * &Surd::sqrt_integer(15)) * &Surd::pi_sqrt_pow(2)
    );
    for n in [1usize, 2, 3, 4, 5, 7] {
        assert!(coeffs[n].is_zero());
    }
}

#[test]
fn test_basis_conversion_round_trip_lmax_3() {
    use dopsh::angmom::sh_expansion::{sh_to_poly_mat, standard_norm};
    use dopsh::symbolic::exact_linalg::{surd_identity, surd_inverse, surd_matmul};

    let mat = sh_to_poly_mat(3, &standard_norm());
    let inv = surd_inverse(&mat).unwrap();
    assert_eq!(surd_matmul(&mat, &inv), surd_identity(16));
    assert_eq!(surd_matmul(&inv, &mat), surd_identity(16));
}
