//! CLI argument definitions for texttools.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "texttools",
    version,
    about = "Text transformation toolbox - 100+ string utilities with a self-test harness",
    long_about = "Run text transformations (case conversion, encodings, styled alphabets,\n\
                  generators) from the command line, and validate the whole tool set\n\
                  against its expected behaviors."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply a transformation to text.
    Transform(TransformArgs),

    /// List every available transformation.
    List,

    /// Validate transformations against their expected behaviors.
    Validate(ValidateArgs),

    /// Show the stored validation status of one transformation.
    Status(StatusArgs),
}

#[derive(Parser)]
pub struct TransformArgs {
    /// Transformation key (see `texttools list`).
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Input text. Read from stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Directory for usage metrics (default: .texttools).
    #[arg(long = "metrics-dir", value_name = "DIR")]
    pub metrics_dir: Option<PathBuf>,

    /// Skip recording usage metrics.
    #[arg(long = "no-metrics")]
    pub no_metrics: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Validate a single transformation instead of the whole set.
    #[arg(long = "key", value_name = "KEY")]
    pub key: Option<String>,

    /// Directory for audit records, the report snapshot, and certificates
    /// (default: .texttools).
    #[arg(long = "metrics-dir", value_name = "DIR")]
    pub metrics_dir: Option<PathBuf>,

    /// Print the report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct StatusArgs {
    /// Transformation key.
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Directory holding the validation snapshot (default: .texttools).
    #[arg(long = "metrics-dir", value_name = "DIR")]
    pub metrics_dir: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn transform_parses_key_and_text() {
        let cli = Cli::try_parse_from(["texttools", "transform", "upper-case", "hello"])
            .expect("valid invocation");
        match cli.command {
            Command::Transform(args) => {
                assert_eq!(args.key, "upper-case");
                assert_eq!(args.text.as_deref(), Some("hello"));
                assert!(!args.no_metrics);
            }
            _ => panic!("expected transform subcommand"),
        }
    }

    #[test]
    fn validate_accepts_key_filter_and_json() {
        let cli = Cli::try_parse_from([
            "texttools",
            "validate",
            "--key",
            "base64-encode",
            "--json",
            "--metrics-dir",
            "/tmp/m",
        ])
        .expect("valid invocation");
        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.key.as_deref(), Some("base64-encode"));
                assert!(args.json);
                assert!(args.metrics_dir.is_some());
            }
            _ => panic!("expected validate subcommand"),
        }
    }

    #[test]
    fn status_requires_a_key() {
        assert!(Cli::try_parse_from(["texttools", "status"]).is_err());
        let cli = Cli::try_parse_from(["texttools", "status", "upper-case"])
            .expect("valid invocation");
        assert!(matches!(cli.command, Command::Status(_)));
    }
}
