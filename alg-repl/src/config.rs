//! Command-line configuration.

use clap::Parser;
use simplelog::LevelFilter;
use std::path::PathBuf;

/// Simplifies and factors polynomial expressions, one per line.
///
/// Reads from the given file, from stdin if it is not a terminal, or interactively otherwise.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Print the steps taken for each expression
    #[arg(long)]
    pub steps: bool,

    /// Print the simplified polynomial without factoring it
    #[arg(long)]
    pub simplify_only: bool,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long = "log", value_name = "LEVEL", default_value = "warn", value_parser = parse_level)]
    pub log_level: LevelFilter,

    /// File to read expressions from
    pub file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            steps: false,
            simplify_only: false,
            log_level: LevelFilter::Warn,
            file: None,
        }
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, String> {
    level.parse().map_err(|_| format!("`{}` is not a log level", level))
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("alg-repl").chain(args.iter().copied()))
    }

    fn error_kind(args: &[&str]) -> Option<ErrorKind> {
        parse(args).err().map(|err| err.kind())
    }

    #[test]
    fn defaults() {
        assert_eq!(parse(&[]).unwrap(), Config::default());
    }

    #[test]
    fn all_options() {
        let config = parse(&["--steps", "--log", "debug", "--simplify-only", "input.txt"]).unwrap();
        assert_eq!(config, Config {
            steps: true,
            simplify_only: true,
            log_level: LevelFilter::Debug,
            file: Some(PathBuf::from("input.txt")),
        });
    }

    #[test]
    fn log_level_is_case_insensitive() {
        assert_eq!(parse(&["--log", "TRACE"]).unwrap().log_level, LevelFilter::Trace);
        assert_eq!(parse(&["--log=off"]).unwrap().log_level, LevelFilter::Off);
    }

    #[test]
    fn errors() {
        assert_eq!(error_kind(&["--help"]), Some(ErrorKind::DisplayHelp));
        assert_eq!(error_kind(&["--verbose"]), Some(ErrorKind::UnknownArgument));
        assert_eq!(error_kind(&["--log", "loud"]), Some(ErrorKind::ValueValidation));
        assert_eq!(error_kind(&["a.txt", "b.txt"]), Some(ErrorKind::UnknownArgument));
        assert!(parse(&["--log"]).is_err());
    }
}
