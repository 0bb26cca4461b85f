pub mod decode;
pub mod find;
pub mod format;
pub mod normalize;
pub mod parse_float;
pub mod path;

use std::process::ExitCode;

use clap::{Args, Subcommand};
use log::error;

pub use decode::DecodeArgs;
pub use find::FindArgs;
pub use format::FormatArgs;
pub use normalize::NormalizeArgs;
pub use parse_float::ParseFloatArgs;
pub use path::PathArgs;

use crate::printer::{ColorChoice, OutputFormat, PrinterConfig, ResultPrinter, make_printer};

/// Common error type for command handlers
pub type CommandResult<T> = anyhow::Result<T>;

/// Every input produced a result.
pub const EXIT_OK: u8 = 0;
/// At least one input had no result (no match, malformed input, ...).
pub const EXIT_NO_RESULT: u8 = 1;
/// The command itself failed (I/O, bad arguments).
pub const EXIT_ERROR: u8 = 2;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode UTF-8 bytes into UTF-16 code units.
    ///
    /// Example:
    ///   strutil decode 'h€llo'
    ///   strutil decode --hex 'f0 9f 98 80'
    ///   strutil decode --file notes.txt
    Decode(DecodeArgs),

    /// Remove `.` and `..` segments from paths.
    ///
    /// Example:
    ///   strutil normalize 'a/./b' '/a/../../b'
    Normalize(NormalizeArgs),

    /// Case-insensitive substring search.
    ///
    /// Example:
    ///   strutil find 'Hello World' WORLD
    Find(FindArgs),

    /// Show the components of a path.
    Path(PathArgs),

    /// Render an integer in decimal.
    Format(FormatArgs),

    /// Parse the leading number of a text as a float.
    ParseFloat(ParseFloatArgs),
}

impl Command {
    pub fn run(self) -> ExitCode {
        match self {
            Command::Decode(args) => decode::run(args),
            Command::Normalize(args) => normalize::run(args),
            Command::Find(args) => find::run(args),
            Command::Path(args) => path::run(args),
            Command::Format(args) => format::run(args),
            Command::ParseFloat(args) => parse_float::run(args),
        }
    }
}

#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Output results as NDJSON (one JSON object per line)
    #[arg(long)]
    pub json: bool,

    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,
}

impl OutputOptions {
    pub fn config(&self) -> PrinterConfig {
        PrinterConfig {
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            },
            color: ColorChoice::from_flag(&self.color),
        }
    }

    /// Create a printer based on the output options.
    pub fn make_printer(&self) -> Box<dyn ResultPrinter> {
        make_printer(self.config())
    }
}

/// Map a handler outcome to the process exit code, reporting errors.
pub fn finish(kind: &str, result: CommandResult<ExitCode>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(e) => {
            error!("[{kind}] {e:#}");
            eprintln!("[{kind}] {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Exit code for a run where `failures` inputs had no result.
pub fn exit_for(failures: usize) -> ExitCode {
    if failures == 0 {
        ExitCode::from(EXIT_OK)
    } else {
        ExitCode::from(EXIT_NO_RESULT)
    }
}
