#![forbid(unsafe_code)]

//! Script command parsing.

use std::fmt;

use regform_core::FormEvent;

/// One line of a demo script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward to the form.
    Form(FormEvent),
    /// List countries matching a query.
    Countries(String),
    /// Toggle validation timing.
    ToggleMode,
    /// Print the form again.
    Show,
    /// Stop reading input.
    Quit,
}

/// A script line that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a command.
    Unknown(String),
    /// `terms` was given something other than on/off.
    BadTerms(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "unknown command: {word}"),
            Self::BadTerms(value) => write!(f, "terms expects on|off, got: {value:?}"),
        }
    }
}

impl std::error::Error for CommandError {}

/// Parse a line. Blank lines and `#` comments yield `Ok(None)`.
///
/// The argument of `email` is taken verbatim after the single separating
/// space so surrounding whitespace reaches the form unchanged.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() || line.trim_start().starts_with('#') {
        return Ok(None);
    }

    let line = line.trim_start();
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };

    let command = match word {
        "email" => Command::Form(FormEvent::EmailChanged(rest.to_string())),
        "country" => {
            let name = rest.trim();
            Command::Form(FormEvent::CountryChanged(
                (!name.is_empty()).then(|| name.to_string()),
            ))
        }
        "terms" => match rest.trim() {
            "on" | "yes" | "true" => Command::Form(FormEvent::TermsChanged(true)),
            "off" | "no" | "false" => Command::Form(FormEvent::TermsChanged(false)),
            other => return Err(CommandError::BadTerms(other.to_string())),
        },
        "submit" => Command::Form(FormEvent::Submit),
        "reset" => Command::Form(FormEvent::Reset),
        "countries" => Command::Countries(rest.trim().to_string()),
        "mode" => Command::ToggleMode,
        "show" => Command::Show,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(line: &str) -> FormEvent {
        match parse_line(line) {
            Ok(Some(Command::Form(event))) => event,
            other => panic!("expected form event for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   \n"), Ok(None));
        assert_eq!(parse_line("# setup"), Ok(None));
    }

    #[test]
    fn email_keeps_argument_verbatim() {
        assert_eq!(form("email a@b.co"), FormEvent::EmailChanged("a@b.co".into()));
        assert_eq!(
            form("email  a@b.co "),
            FormEvent::EmailChanged(" a@b.co ".into())
        );
        assert_eq!(form("email"), FormEvent::EmailChanged(String::new()));
    }

    #[test]
    fn country_set_and_clear() {
        assert_eq!(
            form("country United Kingdom"),
            FormEvent::CountryChanged(Some("United Kingdom".into()))
        );
        assert_eq!(form("country"), FormEvent::CountryChanged(None));
    }

    #[test]
    fn terms_values() {
        assert_eq!(form("terms on"), FormEvent::TermsChanged(true));
        assert_eq!(form("terms off"), FormEvent::TermsChanged(false));
        assert_eq!(
            parse_line("terms maybe"),
            Err(CommandError::BadTerms("maybe".into()))
        );
    }

    #[test]
    fn buttons_and_utilities() {
        assert_eq!(form("submit"), FormEvent::Submit);
        assert_eq!(form("reset\r\n"), FormEvent::Reset);
        assert_eq!(
            parse_line("countries uni"),
            Ok(Some(Command::Countries("uni".into())))
        );
        assert_eq!(parse_line("mode"), Ok(Some(Command::ToggleMode)));
        assert_eq!(parse_line("show"), Ok(Some(Command::Show)));
        assert_eq!(parse_line("exit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn unknown_command() {
        let err = parse_line("register now").unwrap_err();
        assert_eq!(err.to_string(), "unknown command: register");
    }
}
