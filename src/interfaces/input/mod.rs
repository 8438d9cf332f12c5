//! DoPSH interface for YAML input configuration files.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::drivers::basis_conversion::{BasisConversionDriver, BasisConversionParams};
use crate::drivers::DopshDriver;
use crate::interfaces::InputHandle;
use crate::io::read_dopsh_yaml;

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;

/// A structure containing DoPSH input parameters which can be serialised into and deserialised
/// from a YAML input file.
#[derive(Clone, Serialize, Deserialize)]
pub struct Input {
    /// Specification for the conversion between the disk polynomial basis and real spherical
    /// harmonics.
    pub basis_conversion: BasisConversionParams,
}

impl Default for Input {
    fn default() -> Self {
        Input {
            basis_conversion: BasisConversionParams::builder()
                .monomial_indices(&[0, 1, 4])
                .build()
                .expect("Unable to build a default `BasisConversionParams`."),
        }
    }
}

impl Input {
    /// Reads an input specification from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the YAML file (with its `.yml` or `.yaml` extension).
    ///
    /// # Returns
    ///
    /// A `Result` containing the parsed input specification.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        read_dopsh_yaml(&path).with_context(|| {
            format!(
                "Unable to parse the input file `{}`.",
                path.as_ref().display()
            )
        })
    }
}

impl InputHandle for Input {
    fn handle(&self) -> Result<(), anyhow::Error> {
        let mut driver = BasisConversionDriver::builder()
            .parameters(self.basis_conversion.clone())
            .build()
            .with_context(|| "Unable to construct a basis conversion driver from the input file")?;
        driver.run()
    }
}
