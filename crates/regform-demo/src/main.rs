#![forbid(unsafe_code)]

//! Line-driven registration form demo.
//!
//! Plays the rendering layer: each input line becomes a form event, and the
//! resulting view is printed to stdout. Logs go to stderr.

mod cli;
mod command;
mod view;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process::ExitCode;

use regform_core::{EmailInput, FormConfig, RegistrationForm, ValidationTiming};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use cli::{Action, Opts};
use command::{Command, parse_line};

fn init_logging() {
    let filter = EnvFilter::try_from_env("REGFORM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn config_from(opts: &Opts) -> FormConfig {
    FormConfig::default()
        .email_input(if opts.trim_email {
            EmailInput::Trimmed
        } else {
            EmailInput::Verbatim
        })
        .timing(if opts.on_submit {
            ValidationTiming::OnSubmit
        } else {
            ValidationTiming::RealTime
        })
}

fn print_form(out: &mut impl Write, form: &RegistrationForm, json: bool) -> io::Result<()> {
    if json {
        let line = serde_json::to_string(&form.snapshot()).map_err(io::Error::other)?;
        writeln!(out, "{line}")
    } else {
        write!(out, "{}", view::render(form))
    }
}

fn run(opts: &Opts, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    let mut form = RegistrationForm::with_config(config_from(opts));
    print_form(out, &form, opts.json)?;

    for (lineno, line) in input.lines().enumerate() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                tracing::warn!(line = lineno + 1, %err, "skipping line");
                writeln!(out, "error: line {}: {err}", lineno + 1)?;
                continue;
            }
        };

        match command {
            Command::Form(event) => {
                if let Err(err) = form.dispatch(event) {
                    writeln!(out, "error: {err}")?;
                    continue;
                }
                print_form(out, &form, opts.json)?;
            }
            Command::Countries(query) => {
                for name in form.config().countries.filter(&query) {
                    writeln!(out, "  {name}")?;
                }
            }
            Command::ToggleMode => {
                form.set_timing(form.config().timing.toggle());
                print_form(out, &form, opts.json)?;
            }
            Command::Show => print_form(out, &form, opts.json)?,
            Command::Quit => break,
        }
    }
    out.flush()
}

fn main() -> ExitCode {
    let opts = match Opts::parse() {
        Action::Run(opts) => opts,
        Action::Help => {
            println!("{}", cli::HELP_TEXT);
            return ExitCode::SUCCESS;
        }
        Action::Version => {
            println!("regform-demo {}", cli::VERSION);
            return ExitCode::SUCCESS;
        }
        Action::Fail(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };
    init_logging();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match &opts.script {
        Some(path) => File::open(path).and_then(|f| run(&opts, BufReader::new(f), &mut out)),
        None => run(&opts, io::stdin().lock(), &mut out),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "demo failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
