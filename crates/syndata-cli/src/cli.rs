//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "syndata",
    version,
    about = "Discretize tabular records for marginal-distribution scoring",
    long_about = "Convert tabular records between raw values and small integer codes.\n\n\
                  Continuous fields are binned, categorical fields enumerated, and\n\
                  ordinal fields zero-shifted, driven by a schema and bin-spec JSON."
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
    /// Encode a raw CSV table into integer codes.
    Encode(EncodeArgs),

    /// Decode an integer-coded CSV table back to representative raw values.
    Decode(DecodeArgs),
}

#[derive(Parser)]
pub struct EncodeArgs {
    /// Input CSV table of raw values.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Schema JSON file (per-field descriptors).
    #[arg(long, value_name = "PATH")]
    pub schema: PathBuf,

    /// Bin specification JSON file. Without it, only categorical and
    /// ordinal fields are recoded.
    #[arg(long, value_name = "PATH")]
    pub bins: Option<PathBuf>,

    /// Output directory (default: next to the input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output file stem (default: `<input stem>_coded`).
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Keep only rows whose FIELD value is listed; repeatable.
    #[arg(long = "filter", value_name = "FIELD=V1,V2", action = clap::ArgAction::Append)]
    pub filters: Vec<String>,
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// Input CSV table of integer codes.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Schema JSON file (per-field descriptors).
    #[arg(long, value_name = "PATH")]
    pub schema: PathBuf,

    /// Bin specification JSON file used when the table was encoded.
    #[arg(long, value_name = "PATH")]
    pub bins: Option<PathBuf>,

    /// Output directory (default: next to the input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output file stem (default: `<input stem>_decoded`).
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Keep only rows whose FIELD value is listed; repeatable.
    #[arg(long = "filter", value_name = "FIELD=V1,V2", action = clap::ArgAction::Append)]
    pub filters: Vec<String>,

    /// Emit infinite bin edges as-is instead of finite proxies.
    #[arg(long = "keep-inf")]
    pub keep_inf: bool,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
