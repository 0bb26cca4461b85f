use std::process::ExitCode;

use clap::Args;
use strutil_path::normalize_path;

use crate::commands::{CommandResult, OutputOptions, exit_for, finish};
use crate::printer::ResultRow;

const KIND: &str = "normalize";

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Paths to normalize
    #[arg(required = true, num_args = 1..)]
    pub paths: Vec<String>,

    /// Output formatting options
    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: NormalizeArgs) -> ExitCode {
    finish(KIND, execute(args))
}

fn execute(args: NormalizeArgs) -> CommandResult<ExitCode> {
    let mut printer = args.output.make_printer();

    for path in &args.paths {
        let normalized = normalize_path(path);
        printer.print_row(&ResultRow {
            kind: KIND,
            input: path,
            output: &normalized,
            fields: &[],
        })?;
    }

    Ok(exit_for(0))
}
