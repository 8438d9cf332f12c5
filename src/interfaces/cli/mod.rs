use std::path::PathBuf;

use clap::Parser;

use crate::io::format::dopsh_output;

const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// Logs a nicely formatted DoPSH heading to the `dopsh-output` logger.
pub fn log_heading() {
    let version = if let Some(ver) = VERSION {
        format!("v{ver}")
    } else {
        "v unknown".to_string()
    };
    dopsh_output!("╭─────────────────────────────────────────────────────────────────────────────────────────────────────╮");
    dopsh_output!("│ DDDDDDDD               PPPPPPPP    SSSSSSSS  HH      HH                                             │");
    dopsh_output!("│ DD      DD            PP      PP  SS      SS HH      HH                                             │");
    dopsh_output!("│ DD       DD  oooooo   PP      PP  SS         HH      HH                                             │");
    dopsh_output!("│ DD       DD oo    oo  PPPPPPPP     SSSSSSSS  HHHHHHHHHH                                             │");
    dopsh_output!("│ DD       DD oo    oo  PP                  SS HH      HH                                             │");
    dopsh_output!("│ DD      DD  oo    oo  PP          SS      SS HH      HH                                             │");
    dopsh_output!("│ DDDDDDDD     oooooo   PP           SSSSSSSS  HH      HH                                             │");
    dopsh_output!("│                                                                                                     │");
    dopsh_output!("│ Exact conversions between disk polynomials and real spherical harmonics              {version:>13} │");
    dopsh_output!("╰─────────────────────────────────────────────────────────────────────────────────────────────────────╯");
    dopsh_output!("");
}

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// The maximum spherical-harmonic degree spanned by the bases.
    #[arg(value_name = "LMAX")]
    pub lmax: Option<u32>,

    /// A basis index of a disk monomial to be expanded over real spherical
    /// harmonics. May be specified multiple times.
    #[arg(short, long = "monomial", value_name = "N")]
    pub monomials: Vec<u32>,

    /// Prints the full change-of-basis matrices.
    #[arg(long)]
    pub matrices: bool,

    /// A YAML configuration file specifying the conversion parameters. When
    /// given, the other command-line parameters are ignored.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// A file to write the output to instead of the console.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
