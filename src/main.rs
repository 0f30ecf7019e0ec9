mod banner;
mod cli;
mod config;
mod input;
mod rainbow;

use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use crossterm::tty::IsTty;

use crate::cli::Cli;
use crate::rainbow::{RenderError, SleepClock, StreamOrchestrator};

fn run() -> anyhow::Result<()> {
    let is_terminal = io::stdout().is_tty();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let text = e.render().to_string();
            return match banner::print(&text, is_terminal) {
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
                result => result.context("failed to print help"),
            };
        }
        Err(e) => e.exit(),
    };

    let settings = cli.resolve(is_terminal);
    let start_hue = rainbow::start_hue(settings.seed);
    let mut out = BufWriter::new(io::stdout().lock());
    let mut orchestrator = StreamOrchestrator::new(&settings, start_hue, SleepClock);
    finish(orchestrator.run(&mut out, input::open_sources(&cli.files)))
}

/// A reader that went away ends the run quietly, any other failure is an error.
fn finish(result: Result<(), RenderError>) -> anyhow::Result<()> {
    match result {
        Err(e) if e.is_broken_pipe() => Ok(()),
        result => result.map_err(anyhow::Error::from),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e:#}", env!("CARGO_PKG_NAME"));
            ExitCode::FAILURE
        }
    }
}
