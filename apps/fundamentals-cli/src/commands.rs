//! Subcommands and result rendering.

use clap::Subcommand;
use fundamentals_sdk::{CalculatorApi, StringApi};
use serde::Serialize;

use crate::config::{OutputConfig, OutputFormat};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add two integers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
        /// Wrap around on overflow instead of failing
        #[arg(long)]
        wrapping: bool,
    },
    /// Print whether an integer is even
    IsEven {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Reverse TEXT; prints the absent marker when TEXT is omitted
    ///
    /// In text output an absent result and a reversal equal to the marker look
    /// the same; use `--json`, where absent is `null`. Use `--` before TEXT that
    /// starts with a hyphen.
    Reverse {
        text: Option<String>,
    },
    /// Print whether TEXT is a palindrome (empty and absent TEXT are not)
    IsPalindrome {
        text: Option<String>,
    },
}

/// Result of a single command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Int(i64),
    Bool(bool),
    Text(Option<String>),
}

#[derive(Serialize)]
struct Envelope<'a> {
    result: &'a Outcome,
}

/// Run `command` against the given services.
///
/// # Errors
/// Returns an error if `add` overflows without `--wrapping`.
pub fn execute(
    command: &Command,
    calculator: &dyn CalculatorApi,
    strings: &dyn StringApi,
) -> anyhow::Result<Outcome> {
    let outcome = match command {
        Command::Add { a, b, wrapping } => {
            if *wrapping {
                Outcome::Int(calculator.add(*a, *b))
            } else {
                Outcome::Int(calculator.checked_add(*a, *b)?)
            }
        }
        Command::IsEven { n } => Outcome::Bool(calculator.is_even(*n)),
        Command::Reverse { text } => Outcome::Text(strings.reverse(text.as_deref())),
        Command::IsPalindrome { text } => {
            Outcome::Bool(strings.is_palindrome(text.as_deref()))
        }
    };

    tracing::info!(?command, "command executed");
    Ok(outcome)
}

impl Outcome {
    /// Render for stdout according to the output configuration.
    ///
    /// # Errors
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, output: &OutputConfig) -> Result<String, serde_json::Error> {
        match output.format {
            OutputFormat::Json => serde_json::to_string(&Envelope { result: self }),
            OutputFormat::Text => Ok(match self {
                Self::Int(value) => value.to_string(),
                Self::Bool(value) => value.to_string(),
                Self::Text(Some(value)) => value.clone(),
                Self::Text(None) => output.absent_marker.clone(),
            }),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use fundamentals::{CalculatorService, StringService};

    fn run(command: &Command) -> anyhow::Result<Outcome> {
        execute(command, &CalculatorService::new(), &StringService::new())
    }

    fn text_output() -> OutputConfig {
        OutputConfig::default()
    }

    fn json_output() -> OutputConfig {
        OutputConfig {
            format: OutputFormat::Json,
            ..OutputConfig::default()
        }
    }

    #[test]
    fn test_add() {
        let command = Command::Add {
            a: -10,
            b: 5,
            wrapping: false,
        };
        assert_eq!(run(&command).unwrap(), Outcome::Int(-5));
    }

    #[test]
    fn test_add_overflow_fails_unless_wrapping() {
        let command = Command::Add {
            a: i64::MAX,
            b: 1,
            wrapping: false,
        };
        let err = run(&command).unwrap_err();
        assert!(err.to_string().contains("overflow"));

        let command = Command::Add {
            a: i64::MAX,
            b: 1,
            wrapping: true,
        };
        assert_eq!(run(&command).unwrap(), Outcome::Int(i64::MIN));
    }

    #[test]
    fn test_is_even() {
        assert_eq!(
            run(&Command::IsEven { n: 0 }).unwrap(),
            Outcome::Bool(true)
        );
        assert_eq!(
            run(&Command::IsEven { n: -7 }).unwrap(),
            Outcome::Bool(false)
        );
    }

    #[test]
    fn test_reverse() {
        let command = Command::Reverse {
            text: Some("hi".to_owned()),
        };
        assert_eq!(
            run(&command).unwrap(),
            Outcome::Text(Some("ih".to_owned()))
        );
        assert_eq!(
            run(&Command::Reverse { text: None }).unwrap(),
            Outcome::Text(None)
        );
    }

    #[test]
    fn test_is_palindrome() {
        let palindrome = |text: Option<&str>| {
            run(&Command::IsPalindrome {
                text: text.map(str::to_owned),
            })
            .unwrap()
        };
        assert_eq!(palindrome(Some("lol")), Outcome::Bool(true));
        assert_eq!(palindrome(Some("ahmed")), Outcome::Bool(false));
        assert_eq!(palindrome(Some("")), Outcome::Bool(false));
        assert_eq!(palindrome(None), Outcome::Bool(false));
    }

    #[test]
    fn test_render_text() {
        let output = text_output();
        assert_eq!(Outcome::Int(15).render(&output).unwrap(), "15");
        assert_eq!(Outcome::Bool(true).render(&output).unwrap(), "true");
        assert_eq!(
            Outcome::Text(Some("ih".to_owned())).render(&output).unwrap(),
            "ih"
        );
        assert_eq!(Outcome::Text(None).render(&output).unwrap(), "(absent)");
        assert_eq!(Outcome::Text(Some(String::new())).render(&output).unwrap(), "");
    }

    #[test]
    fn test_render_custom_absent_marker() {
        let output = OutputConfig {
            absent_marker: "-".to_owned(),
            ..OutputConfig::default()
        };
        assert_eq!(Outcome::Text(None).render(&output).unwrap(), "-");
    }

    #[test]
    fn test_json_tells_absent_from_marker_text() {
        let marker_text = run(&Command::Reverse {
            text: Some(")tnesba(".to_owned()),
        })
        .unwrap();
        let absent = run(&Command::Reverse { text: None }).unwrap();

        let text = text_output();
        assert_eq!(marker_text.render(&text).unwrap(), absent.render(&text).unwrap());

        let json = json_output();
        assert_eq!(marker_text.render(&json).unwrap(), r#"{"result":"(absent)"}"#);
        assert_eq!(absent.render(&json).unwrap(), r#"{"result":null}"#);
    }

    #[test]
    fn test_render_json() {
        let output = json_output();
        assert_eq!(
            Outcome::Int(-5).render(&output).unwrap(),
            r#"{"result":-5}"#
        );
        assert_eq!(
            Outcome::Bool(false).render(&output).unwrap(),
            r#"{"result":false}"#
        );
        assert_eq!(
            Outcome::Text(Some("ih".to_owned())).render(&output).unwrap(),
            r#"{"result":"ih"}"#
        );
        assert_eq!(
            Outcome::Text(None).render(&output).unwrap(),
            r#"{"result":null}"#
        );
    }
}
