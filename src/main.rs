use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::style::{style, Stylize};
use crossterm::tty::IsTty;

use transcheck::cli::{commands, Args};
use transcheck::{constants, logging, theme};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    let result = color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .install()
        .and_then(|()| commands::run(&args));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

/// Print the error chain as one line on standard error.
fn report_error(err: &color_eyre::Report) {
    let message = err
        .chain()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ");
    let line = format!("{} {message}", constants::ERR_PREFIX);

    if io::stderr().is_tty() {
        eprintln!("{}", style(line).with(theme::ERROR));
    } else {
        eprintln!("{line}");
    }
}
