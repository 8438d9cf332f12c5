//! Driver for the exact conversion between the disk polynomial basis and
//! real spherical harmonics.

use std::fmt;

use anyhow::{self, bail, format_err};
use derive_builder::Builder;
use itertools::Itertools;
use ndarray::{Array1, Array2};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::angmom::sh_expansion::{sh_to_poly_mat, standard_norm};
use crate::basis::disk::{basis_mono_tuple, lm_tuple_to_str, SphOrder};
use crate::drivers::DopshDriver;
use crate::io::format::{
    dopsh_error, dopsh_warn, nice_bool, write_subtitle, write_title, DopshOutput,
};
use crate::symbolic::exact_linalg::{surd_determinant, surd_inverse};
use crate::symbolic::poly::mono_tuple_to_str;
use crate::symbolic::surd::Surd;

#[cfg(test)]
#[path = "basis_conversion_tests.rs"]
mod basis_conversion_tests;

// ==================
// Struct definitions
// ==================

// ----------
// Parameters
// ----------

fn default_lmax() -> u32 {
    2
}

/// Parameter structure controlling the conversion between the disk polynomial
/// basis and real spherical harmonics.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct BasisConversionParams {
    /// The maximum spherical-harmonic degree spanned by the bases.
    #[builder(default = "2")]
    #[serde(default = "default_lmax")]
    pub lmax: u32,

    /// The basis indices of the disk monomials to be expressed over real
    /// spherical harmonics.
    #[builder(setter(custom), default = "vec![]")]
    #[serde(default)]
    pub monomial_indices: Vec<u32>,

    /// Boolean indicating if the full change-of-basis matrices are to be
    /// printed.
    #[builder(default = "false")]
    #[serde(default)]
    pub print_matrices: bool,
}

impl BasisConversionParams {
    pub fn builder() -> BasisConversionParamsBuilder {
        BasisConversionParamsBuilder::default()
    }
}

impl BasisConversionParamsBuilder {
    pub fn monomial_indices(&mut self, indices: &[u32]) -> &mut Self {
        self.monomial_indices = Some(indices.to_vec());
        self
    }
}

impl fmt::Display for BasisConversionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_title(f, "Disk-Polynomial / Spherical-Harmonic Basis Conversion")?;
        writeln!(f)?;
        writeln!(f, "Maximum degree: {}", self.lmax)?;
        if self.monomial_indices.is_empty() {
            writeln!(f, "Monomials to expand: none")?;
        } else {
            writeln!(
                f,
                "Monomials to expand: {}",
                self.monomial_indices
                    .iter()
                    .map(|n| mono_tuple_to_str(&basis_mono_tuple(*n)))
                    .join(", ")
            )?;
        }
        writeln!(
            f,
            "Printing change-of-basis matrices: {}",
            nice_bool(self.print_matrices)
        )?;
        writeln!(f)?;
        Ok(())
    }
}

// ------
// Result
// ------

/// Result structure containing the exact change-of-basis matrices and the
/// requested monomial expansions.
#[derive(Clone, Builder, Debug)]
pub struct BasisConversionResult {
    /// The parameters used to obtain this result.
    parameters: BasisConversionParams,

    /// The change-of-basis matrix from real spherical harmonics to disk
    /// polynomials.
    sh_to_poly: Array2<Surd>,

    /// The inverse change-of-basis matrix from disk polynomials to real
    /// spherical harmonics.
    poly_to_sh: Array2<Surd>,

    /// The exact determinant of the forward change-of-basis matrix.
    determinant: Surd,

    /// The harmonic coefficient vectors of the requested monomials, keyed by
    /// basis index.
    monomial_expansions: Vec<(u32, Array1<Surd>)>,
}

impl BasisConversionResult {
    fn builder() -> BasisConversionResultBuilder {
        BasisConversionResultBuilder::default()
    }

    /// The change-of-basis matrix from real spherical harmonics to disk
    /// polynomials: row $`n`$ holds the disk-basis coefficients of the
    /// $`n`$-th harmonic.
    pub fn sh_to_poly(&self) -> &Array2<Surd> {
        &self.sh_to_poly
    }

    /// The inverse change-of-basis matrix.
    pub fn poly_to_sh(&self) -> &Array2<Surd> {
        &self.poly_to_sh
    }

    /// The exact determinant of the forward change-of-basis matrix.
    pub fn determinant(&self) -> &Surd {
        &self.determinant
    }

    /// The harmonic coefficient vectors of the requested monomials, keyed by
    /// basis index.
    pub fn monomial_expansions(&self) -> &[(u32, Array1<Surd>)] {
        &self.monomial_expansions
    }

    fn write_expansions(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_subtitle(f, "Monomial expansions over real spherical harmonics")?;
        writeln!(f)?;
        let sph_order = SphOrder::increasinglm(self.parameters.lmax);
        for (n, coeffs) in &self.monomial_expansions {
            let mono = mono_tuple_to_str(&basis_mono_tuple(*n));
            let terms = coeffs
                .iter()
                .zip(sph_order.iter())
                .filter(|(coeff, _)| !coeff.is_zero())
                .map(|(coeff, lm_tuple)| {
                    let label = lm_tuple_to_str(lm_tuple);
                    if coeff.n_terms() == 1 {
                        format!("{coeff} {label}")
                    } else {
                        format!("({coeff}) {label}")
                    }
                })
                .join(" + ");
            if terms.is_empty() {
                writeln!(f, "  {mono} = 0")?;
            } else {
                writeln!(f, "  {mono} = {terms}")?;
            }
        }
        writeln!(f)?;
        Ok(())
    }

    fn write_matrix(
        f: &mut fmt::Formatter<'_>,
        title: &str,
        mat: &Array2<Surd>,
    ) -> fmt::Result {
        write_subtitle(f, title)?;
        writeln!(f)?;
        for row in mat.rows() {
            writeln!(f, "  [{}]", row.iter().map(|entry| entry.to_string()).join(", "))?;
        }
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for BasisConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Basis dimension: {}",
            (self.parameters.lmax + 1) * (self.parameters.lmax + 1)
        )?;
        writeln!(f, "Determinant of change-of-basis matrix: {}", self.determinant)?;
        writeln!(f)?;

        if self.parameters.print_matrices {
            Self::write_matrix(
                f,
                "Change-of-basis matrix (harmonics to polynomials)",
                &self.sh_to_poly,
            )?;
            Self::write_matrix(
                f,
                "Inverse change-of-basis matrix (polynomials to harmonics)",
                &self.poly_to_sh,
            )?;
        }

        if !self.monomial_expansions.is_empty() {
            self.write_expansions(f)?;
        }

        Ok(())
    }
}

// ------
// Driver
// ------

/// Driver to carry out the exact conversion between the disk polynomial
/// basis and real spherical harmonics.
#[derive(Clone, Builder)]
pub struct BasisConversionDriver {
    /// The control parameters for the conversion.
    parameters: BasisConversionParams,

    /// The result of the conversion.
    #[builder(default = "None")]
    result: Option<BasisConversionResult>,
}

impl BasisConversionDriver {
    pub fn builder() -> BasisConversionDriverBuilder {
        BasisConversionDriverBuilder::default()
    }

    fn convert(&mut self) -> Result<(), anyhow::Error> {
        let params = &self.parameters;
        params.log_output_display();

        let dim = (params.lmax + 1) * (params.lmax + 1);
        if let Some(n) = params.monomial_indices.iter().find(|n| **n >= dim) {
            dopsh_error!("The monomial index {n} lies outside the basis of dimension {dim}.");
            bail!("The monomial index {n} lies outside the basis of dimension {dim}.");
        }
        if params.monomial_indices.is_empty() {
            dopsh_warn!(
                "No monomial indices specified: only the change-of-basis matrices will be computed."
            );
        }

        let norm = standard_norm();
        let sh_to_poly = sh_to_poly_mat(params.lmax, &norm);
        let poly_to_sh = surd_inverse(&sh_to_poly)?;
        let determinant = surd_determinant(&sh_to_poly)?;
        let monomial_expansions = params
            .monomial_indices
            .iter()
            .map(|n| (*n, poly_to_sh.row(*n as usize).to_owned()))
            .collect::<Vec<_>>();

        let result = BasisConversionResult::builder()
            .parameters(params.clone())
            .sh_to_poly(sh_to_poly)
            .poly_to_sh(poly_to_sh)
            .determinant(determinant)
            .monomial_expansions(monomial_expansions)
            .build()
            .map_err(|err| format_err!(err))?;
        result.log_output_display();
        self.result = Some(result);
        Ok(())
    }
}

impl DopshDriver for BasisConversionDriver {
    type Params = BasisConversionParams;

    type Outcome = BasisConversionResult;

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.convert()
    }

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No basis conversion results found."))
    }
}
