use std::process::ExitCode;

use clap::Args;
use strutil_path::{
    directory_name, file_name, file_name_without_extension, normalize_path,
    path_without_extension,
};

use crate::commands::{CommandResult, OutputOptions, exit_for, finish};
use crate::printer::ResultRow;

const KIND: &str = "path";

#[derive(Debug, Args)]
pub struct PathArgs {
    /// Path to split into components
    pub path: String,

    /// Output formatting options
    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: PathArgs) -> ExitCode {
    finish(KIND, execute(args))
}

/// Labelled components shown for a path.
pub fn components(path: &str) -> [(&'static str, String); 5] {
    [
        ("directory", directory_name(path).to_owned()),
        ("file name", file_name(path).to_owned()),
        ("stem", file_name_without_extension(path).to_owned()),
        ("no ext", path_without_extension(path).to_owned()),
        ("normalized", normalize_path(path)),
    ]
}

fn execute(args: PathArgs) -> CommandResult<ExitCode> {
    let mut printer = args.output.make_printer();
    let fields = components(&args.path);

    printer.print_row(&ResultRow {
        kind: KIND,
        input: &args.path,
        output: &args.path,
        fields: &fields,
    })?;

    Ok(exit_for(0))
}
