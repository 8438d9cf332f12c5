//! # DoPSH: Disk-Polynomial and Spherical-Harmonic Conversions
//!
//! DoPSH is a program for exact conversions between polynomials on the
//! projected stellar disk and real spherical harmonics, written in Rust with
//! the following capabilities:
//! - symbolic construction of real spherical harmonics as polynomials in the
//!   disk variables $`x`$, $`y`$ and $`z = \sqrt{1 - x^2 - y^2}`$,
//! - exact arithmetic over sums of quadratic surds and half-integer powers
//!   of $`\pi`$,
//! - exact construction and inversion of the change-of-basis matrix between
//!   the disk polynomial basis and real spherical harmonics, and
//! - exact expansion of disk monomials over real spherical harmonics.
//!
//! For most items (structs, enums, functions, and traits), their usages are
//! illustrated in test functions. For more explanation, please consult this
//! documentation.
//!
//! ## License
//!
//! GNU Lesser General Public License v3.0.

pub mod angmom;
pub mod basis;
pub mod drivers;
pub mod interfaces;
pub mod io;
pub mod symbolic;
