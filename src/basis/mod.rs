//! Orderings and enumerations of the disk polynomial and spherical-harmonic
//! bases.

pub mod disk;
