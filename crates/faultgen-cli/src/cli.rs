//! CLI argument definitions for the fault message generator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use faultgen_cli::pipeline::GenerateConfig;

#[derive(Parser)]
#[command(
    name = "faultgen",
    disable_version_flag = true,
    about = "Create fault messages and template descriptions for fault triggers",
    long_about = "Create fault messages and template descriptions for fault triggers.\n\n\
                  Each trigger names a 32-bit fault array. Every bit becomes one\n\
                  FactoryTalk View alarm message (XLSX) and one Logix tag comment (CSV).\n\n\
                  The Logix format version is passed with -V/--version; -v and -q only\n\
                  adjust log verbosity. The output directory is -o, --output-directory\n\
                  or --od (a single-dash -od is read as -o d)."
)]
pub struct Cli {
    /// Shortcut to the controller as defined in FactoryTalk View Studio.
    #[arg(short = 's', long = "shortcut", value_name = "SHORTCUT")]
    pub shortcut: String,

    /// Path to a text file containing one trigger per line.
    #[arg(short = 't', long = "triggers", value_name = "PATH")]
    pub triggers: PathBuf,

    /// Directory the XLSX and CSV files are written to.
    #[arg(
        short = 'o',
        long = "output-directory",
        visible_alias = "od",
        value_name = "DIR"
    )]
    pub output_directory: PathBuf,

    /// Logix import/export format version (0.3 for Logix v33).
    #[arg(short = 'V', long = "version", value_name = "VERSION")]
    pub format_version: String,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn generate_config(&self) -> GenerateConfig {
        GenerateConfig {
            shortcut: self.shortcut.clone(),
            triggers: self.triggers.clone(),
            output_dir: self.output_directory.clone(),
            format_version: self.format_version.clone(),
        }
    }
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
    fn test_command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_short_flags() {
        let cli = Cli::try_parse_from([
            "faultgen", "-s", "PLC1", "-t", "triggers.txt", "-o", "out", "-V", "0.3",
        ])
        .unwrap();
        assert_eq!(cli.shortcut, "PLC1");
        assert_eq!(cli.format_version, "0.3");
        let config = cli.generate_config();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.triggers, PathBuf::from("triggers.txt"));
    }

    #[test]
    fn test_parses_long_flags_and_alias() {
        let cli = Cli::try_parse_from([
            "faultgen",
            "--shortcut",
            "PLC1",
            "--triggers",
            "triggers.txt",
            "--od",
            "out",
            "--version",
            "0.3",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.output_directory, PathBuf::from("out"));
        assert!(cli.verbosity.is_present());
    }

    #[test]
    fn test_lowercase_v_is_verbosity_not_version() {
        let result = Cli::try_parse_from([
            "faultgen", "-s", "PLC1", "-t", "triggers.txt", "-o", "out", "-v", "0.3",
        ]);
        assert!(result.is_err());

        let long_about = Cli::command().get_long_about().unwrap().to_string();
        assert!(long_about.contains("-V/--version"));
        assert!(long_about.contains("--od"));
    }

    #[test]
    fn test_requires_shortcut() {
        let result = Cli::try_parse_from(["faultgen", "-t", "t.txt", "-o", "out", "-V", "0.3"]);
        assert!(result.is_err());
    }
}
