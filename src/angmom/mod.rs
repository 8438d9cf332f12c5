//! Expansions of real spherical harmonics over the projected disk.

pub mod sh_expansion;
