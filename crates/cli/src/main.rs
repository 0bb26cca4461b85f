use std::process::ExitCode;

use clap::Parser;

mod commands;
mod printer;

use commands::Command;
use strutil_runtime::logging;

#[derive(Debug, Parser)]
#[command(
    name = "strutil",
    version,
    about = "Text decoding, path normalization and formatting utilities",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    cli.command.run()
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
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["strutil", "normalize", "a/./b", "../c"]).unwrap();
        match cli.command {
            Command::Normalize(args) => assert_eq!(args.paths, vec!["a/./b", "../c"]),
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::try_parse_from(["strutil", "format", "-42", "--json"]).unwrap();
        match cli.command {
            Command::Format(args) => {
                assert_eq!(args.value, -42);
                assert!(args.output.json);
            }
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::try_parse_from(["strutil", "decode", "--hex", "e2 82 ac"]).unwrap();
        match cli.command {
            Command::Decode(args) => assert_eq!(args.hex.as_deref(), Some("e2 82 ac")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn decode_sources_conflict() {
        assert!(Cli::try_parse_from(["strutil", "decode", "text", "--hex", "41"]).is_err());
        assert!(Cli::try_parse_from(["strutil", "normalize"]).is_err());
    }
}
