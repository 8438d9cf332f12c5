//! Exact symbolic arithmetic: surds, expression trees, canonical disk
//! polynomials, and exact linear algebra.

pub mod exact_linalg;
pub mod expr;
pub mod poly;
pub mod surd;
