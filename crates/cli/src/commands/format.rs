use std::process::ExitCode;

use clap::Args;
use strutil_text::DecimalBuffer;

use crate::commands::{CommandResult, OutputOptions, exit_for, finish};
use crate::printer::ResultRow;

const KIND: &str = "format";

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Integer to render
    #[arg(allow_negative_numbers = true)]
    pub value: i64,

    /// Output formatting options
    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: FormatArgs) -> ExitCode {
    finish(KIND, execute(args))
}

fn execute(args: FormatArgs) -> CommandResult<ExitCode> {
    let mut printer = args.output.make_printer();
    let mut buf = DecimalBuffer::new();
    let rendered = buf.format(args.value);

    let fields = [("digits", rendered.trim_start_matches('-').len().to_string())];
    printer.print_row(&ResultRow {
        kind: KIND,
        input: rendered,
        output: rendered,
        fields: &fields,
    })?;

    Ok(exit_for(0))
}
