mod check;
mod completions;
mod generate;
mod spec_args;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use enumerator_spec::ValidationError;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on spec errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for enumerator_spec::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for std::result::Result<T, ValidationError> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "enumerator")]
#[command(version)]
#[command(about = "Generate closed sum-type enums for Go")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Go enum module
    Generate(GenerateCommand),

    /// Validate an enum spec without generating code
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// The arguments this process was started with, minus the program name.
///
/// Echoed into the `go:generate` directive of generated files.
pub(crate) fn invocation() -> String {
    echo_args(
        std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned()),
    )
}

/// Join arguments so that `go generate` splits them back into the same words.
fn echo_args<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| echo_arg(arg.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `go generate` splits on spaces and tabs, unquotes Go string literals and
/// then expands `$NAME` in every word.
fn echo_arg(arg: &str) -> String {
    let arg = arg.replace('$', "${DOLLAR}");
    let needs_quotes = arg.is_empty()
        || arg
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '"' || c == '\\');
    if !needs_quotes {
        return arg;
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_echo_plain_args() {
        assert_eq!(
            echo_args(["generate", "--package", "color", "--values", "Red,Green"]),
            "generate --package color --values Red,Green"
        );
    }

    #[test]
    fn test_echo_quotes_whitespace() {
        assert_eq!(
            echo_args(["--copyright", "my license.txt", ""]),
            r#"--copyright "my license.txt" """#
        );
    }

    #[test]
    fn test_echo_escapes_line_breaks_and_quotes() {
        let echo = echo_args(["a\nb", "say \"hi\"", r"C:\dir"]);
        assert!(!echo.contains('\n'));
        assert_eq!(echo, r#""a\nb" "say \"hi\"" "C:\\dir""#);
    }

    #[test]
    fn test_echo_escapes_dollar() {
        assert_eq!(echo_args(["$HOME/LICENSE"]), "${DOLLAR}HOME/LICENSE");
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from([
            "enumerator", "check", "-vv", "--package", "color", "--type", "Color", "--values",
            "Red",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
