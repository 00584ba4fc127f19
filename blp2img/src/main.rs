//! Main entry point for the blp2img CLI

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics share standard output with the conversion report
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stdout)
        .init();

    let format = cli.format.into();
    let verbose = cli.verbose > 0;
    let mut failed = 0usize;

    for file in &cli.files {
        match commands::convert_file(file, format, verbose) {
            Ok(output) => println!("Successfully saved {}", output.display()),
            Err(err) => {
                failed += 1;
                println!("Error: {err:#}");
            }
        }
    }

    log::info!(
        "Converted {} of {} files",
        cli.files.len() - failed,
        cli.files.len()
    );
    Ok(())
}
