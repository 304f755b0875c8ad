//! CLI argument definitions for the language index builder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "langindex",
    version,
    about = "Build the merged language index from IANA, ISO 639, Ethnologue and SLDR data",
    long_about = "Merge the IANA subtag registry, the ISO 639 crosswalk, the Ethnologue\n\
                  name and country tables and the SLDR tag catalogue into one\n\
                  language index (LanguageDataIndex.txt / LanguageDataIndex.json)."
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
    /// Merge the sources and write the language index.
    Build(BuildArgs),

    /// Merge the sources and print one record.
    Show(ShowArgs),

    /// Generate TwoToThreeCodes.txt from the SIL iso-639-3.tab table.
    Crosswalk(CrosswalkArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Directory holding the five source files
    /// (default: $LANGINDEX_SOURCES_DIR, else sources/ at the workspace root).
    #[arg(long = "sources", value_name = "DIR")]
    pub sources: Option<PathBuf>,

    /// Output directory for the index files (default: <SOURCES>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: OutputFormatArg,

    /// TOML merge policy (default: built-in policy).
    #[arg(long = "policy", value_name = "FILE")]
    pub policy: Option<PathBuf>,

    /// Fail when a language is found in several countries with no primary one.
    #[arg(long = "fail-on-ambiguous")]
    pub fail_on_ambiguous: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Index key (e.g. `fr`, `zh-TW`) or ISO 639-3 code.
    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Directory holding the five source files.
    #[arg(long = "sources", value_name = "DIR")]
    pub sources: Option<PathBuf>,

    /// TOML merge policy (default: built-in policy).
    #[arg(long = "policy", value_name = "FILE")]
    pub policy: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CrosswalkArgs {
    /// Path to the SIL iso-639-3.tab code table.
    #[arg(value_name = "ISO639_TAB")]
    pub iso639_tab: PathBuf,

    /// Write the crosswalk to a file instead of stdout.
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Tsv,
    Json,
    Both,
}

impl OutputFormatArg {
    pub fn wants_tsv(self) -> bool {
        matches!(self, Self::Tsv | Self::Both)
    }

    pub fn wants_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
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

    #[test]
    fn parses_build_flags() {
        let cli = Cli::try_parse_from([
            "langindex",
            "build",
            "--sources",
            "data",
            "--format",
            "tsv",
            "--fail-on-ambiguous",
        ])
        .unwrap();
        let Command::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(args.sources, Some(PathBuf::from("data")));
        assert_eq!(args.format, OutputFormatArg::Tsv);
        assert!(args.fail_on_ambiguous);
        assert!(args.format.wants_tsv());
        assert!(!args.format.wants_json());
    }

    #[test]
    fn global_log_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from(["langindex", "show", "fr", "--log-format", "json"]).unwrap();
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        assert!(matches!(cli.command, Command::Show(ref args) if args.tag == "fr"));
    }

    #[test]
    fn crosswalk_requires_a_table() {
        assert!(Cli::try_parse_from(["langindex", "crosswalk"]).is_err());
    }
}
