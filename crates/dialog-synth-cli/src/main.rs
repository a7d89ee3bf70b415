//! dialog-synth CLI - abstract dialogue voice synthesizer
//!
//! Writes one WAV file per sentence of the input text and demonstrates the
//! result by playing it while revealing the text.

use clap::Parser;
use std::process::ExitCode;

use dialog_synth_cli::cli_args::Cli;
use dialog_synth_cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::synth::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            commands::exit_code_for(&e)
        }
    }
}
