use std::process::ExitCode;

use clap::Args;
use strutil_text::{float_to_string, parse_float};

use crate::commands::{CommandResult, OutputOptions, exit_for, finish};
use crate::printer::{FailureRow, ResultRow};

const KIND: &str = "parse-float";

#[derive(Debug, Args)]
pub struct ParseFloatArgs {
    /// Text whose leading number is parsed
    #[arg(allow_hyphen_values = true)]
    pub text: String,

    /// Output formatting options
    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: ParseFloatArgs) -> ExitCode {
    finish(KIND, execute(args))
}

fn execute(args: ParseFloatArgs) -> CommandResult<ExitCode> {
    let mut printer = args.output.make_printer();

    match parse_float(&args.text) {
        Ok(value) => {
            printer.print_row(&ResultRow {
                kind: KIND,
                input: &args.text,
                output: &float_to_string(value),
                fields: &[],
            })?;
            Ok(exit_for(0))
        }
        Err(e) => {
            printer.print_failure(&FailureRow {
                kind: KIND,
                input: &args.text,
                message: &e.to_string(),
            })?;
            Ok(exit_for(1))
        }
    }
}
