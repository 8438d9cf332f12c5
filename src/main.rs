use std::process;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;

use dopsh::drivers::basis_conversion::{BasisConversionDriver, BasisConversionParams};
use dopsh::drivers::DopshDriver;
use dopsh::interfaces::cli::{log_heading, Cli};
use dopsh::interfaces::input::Input;
use dopsh::interfaces::InputHandle;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    let config = if let Some(output) = cli.output.as_ref() {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{m}{n}")))
            .append(false)
            .build(output)
            .with_context(|| {
                format!("Unable to create the output file `{}`.", output.display())
            })?;
        Config::builder()
            .appender(Appender::builder().build("file", Box::new(file)))
            .logger(
                Logger::builder()
                    .appender("file")
                    .additive(false)
                    .build("dopsh-output", LevelFilter::Info),
            )
            .build(Root::builder().appender("file").build(LevelFilter::Warn))?
    } else {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{m}{n}")))
            .build();
        Config::builder()
            .appender(Appender::builder().build("stdout", Box::new(stdout)))
            .logger(
                Logger::builder()
                    .appender("stdout")
                    .additive(false)
                    .build("dopsh-output", LevelFilter::Info),
            )
            .build(Root::builder().appender("stdout").build(LevelFilter::Warn))?
    };
    log4rs::init_config(config).with_context(|| "Unable to initialise the logging framework.")?;

    log_heading();

    if let Some(config_path) = cli.config.as_ref() {
        return Input::from_file(config_path)?.handle();
    }

    let mut params = BasisConversionParams::builder();
    if let Some(lmax) = cli.lmax {
        params.lmax(lmax);
    }
    let params = params
        .monomial_indices(&cli.monomials)
        .print_matrices(cli.matrices)
        .build()
        .with_context(|| "Unable to construct basis conversion parameters.")?;

    let mut driver = BasisConversionDriver::builder()
        .parameters(params)
        .build()
        .with_context(|| "Unable to construct a basis conversion driver.")?;
    driver.run()
}
