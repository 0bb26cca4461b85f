use std::process::ExitCode;

use clap::Args;
use strutil_text::{SearchCase, find};

use crate::commands::{CommandResult, OutputOptions, exit_for, finish};
use crate::printer::{FailureRow, ResultRow};

const KIND: &str = "find";

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Text to search in
    pub haystack: String,

    /// Text to search for
    pub needle: String,

    /// Match letter case exactly
    #[arg(long, short = 's')]
    pub case_sensitive: bool,

    /// Output formatting options
    #[command(flatten)]
    pub output: OutputOptions,
}

impl FindArgs {
    fn search_case(&self) -> SearchCase {
        if self.case_sensitive {
            SearchCase::CaseSensitive
        } else {
            SearchCase::IgnoreCase
        }
    }
}

pub fn run(args: FindArgs) -> ExitCode {
    finish(KIND, execute(args))
}

fn execute(args: FindArgs) -> CommandResult<ExitCode> {
    let mut printer = args.output.make_printer();

    let Some(offset) = find(&args.haystack, &args.needle, args.search_case()) else {
        printer.print_failure(&FailureRow {
            kind: KIND,
            input: &args.needle,
            message: "no match",
        })?;
        return Ok(exit_for(1));
    };

    let len = matched_len(&args.haystack[offset..], &args.needle);
    let fields = [("match", args.haystack[offset..offset + len].to_owned())];
    printer.print_row(&ResultRow {
        kind: KIND,
        input: &args.needle,
        output: &offset.to_string(),
        fields: &fields,
    })?;

    Ok(exit_for(0))
}

/// Byte length of the text at the start of `rest` that matched `needle`.
///
/// Case mapping keeps the character count but not always the byte count, so
/// walk as many characters as the needle has.
fn matched_len(rest: &str, needle: &str) -> usize {
    rest.chars()
        .take(needle.chars().count())
        .map(char::len_utf8)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matched_len_counts_haystack_bytes() {
        assert_eq!(matched_len("WORLD!", "world"), 5);
        assert_eq!(matched_len("Über", "üb"), 3);
        assert_eq!(matched_len("abc", ""), 0);
    }

    #[test]
    fn case_flag_selects_search_case() {
        let mut args = FindArgs {
            haystack: "Hello".to_owned(),
            needle: "hello".to_owned(),
            case_sensitive: false,
            output: OutputOptions {
                json: false,
                color: "never".to_owned(),
            },
        };
        assert_eq!(args.search_case(), SearchCase::IgnoreCase);

        args.case_sensitive = true;
        assert_eq!(args.search_case(), SearchCase::CaseSensitive);
    }
}
