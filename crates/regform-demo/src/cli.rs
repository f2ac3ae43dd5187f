#![forbid(unsafe_code)]

//! Command-line argument parsing for the registration demo.
//!
//! Parses args manually to keep the binary lean. Supports environment
//! variable overrides via the `REGFORM_DEMO_*` prefix.

use std::env;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
Registration Form Demo

USAGE:
    regform-demo [OPTIONS]

Reads commands from stdin (or --script) and prints the form after each one.

OPTIONS:
    --script=PATH   Read commands from PATH instead of stdin
    --json          Print JSON snapshots instead of the text view
    --trim-email    Strip surrounding whitespace from email input
    --on-submit     Only report errors when the form is submitted
    --help, -h      Show this help message
    --version, -V   Show version

COMMANDS:
    email [TEXT]       Set the email (empty clears it)
    country [NAME]     Select a country (no name clears it)
    terms on|off       Tick or untick the terms checkbox
    submit             Press Register
    reset              Press Register Another User
    countries [QUERY]  List countries matching QUERY
    mode               Toggle real-time / on-submit validation
    show               Print the form again
    quit               Exit

ENVIRONMENT VARIABLES:
    REGFORM_DEMO_SCRIPT       Override --script
    REGFORM_DEMO_JSON         Set to 1 for --json
    REGFORM_DEMO_TRIM_EMAIL   Set to 1 for --trim-email
    REGFORM_DEMO_ON_SUBMIT    Set to 1 for --on-submit
    REGFORM_LOG               Log filter (default: warn)";

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Opts {
    /// Command file; stdin when `None`.
    pub script: Option<PathBuf>,
    /// Print JSON snapshots.
    pub json: bool,
    /// Trim email input.
    pub trim_email: bool,
    /// Start in on-submit validation timing.
    pub on_submit: bool,
}

/// What the process should do after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Run(Opts),
    Help,
    Version,
    Fail(String),
}

fn flag_set(value: &str) -> bool {
    matches!(value, "1" | "true" | "yes" | "on")
}

impl Opts {
    /// Parse the process environment and arguments.
    pub fn parse() -> Action {
        let vars = env::vars().filter(|(k, _)| k.starts_with("REGFORM_DEMO_"));
        Self::parse_from(vars, env::args().skip(1))
    }

    /// Parse from explicit sources.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse_from<V, A>(vars: V, args: A) -> Action
    where
        V: IntoIterator<Item = (String, String)>,
        A: IntoIterator<Item = String>,
    {
        let mut opts = Self::default();

        for (key, val) in vars {
            match key.as_str() {
                "REGFORM_DEMO_SCRIPT" if !val.is_empty() => opts.script = Some(val.into()),
                "REGFORM_DEMO_JSON" => opts.json = flag_set(&val),
                "REGFORM_DEMO_TRIM_EMAIL" => opts.trim_email = flag_set(&val),
                "REGFORM_DEMO_ON_SUBMIT" => opts.on_submit = flag_set(&val),
                _ => {}
            }
        }

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Action::Help,
                "--version" | "-V" => return Action::Version,
                "--json" => opts.json = true,
                "--trim-email" => opts.trim_email = true,
                "--on-submit" => opts.on_submit = true,
                other => {
                    if let Some(path) = other.strip_prefix("--script=") {
                        if path.is_empty() {
                            return Action::Fail("Invalid --script value: empty path".into());
                        }
                        opts.script = Some(path.into());
                    } else {
                        return Action::Fail(format!(
                            "Unknown argument: {other}\nRun with --help for usage information."
                        ));
                    }
                }
            }
        }

        Action::Run(opts)
    }
}
