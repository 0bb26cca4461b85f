use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::Args;
use log::debug;
use strutil_text::decode_utf8_to_utf16;

use crate::commands::{CommandResult, OutputOptions, exit_for, finish};
use crate::printer::{FailureRow, ResultRow};

const KIND: &str = "decode";

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Text to decode; read from stdin when no input is given
    #[arg(conflicts_with_all = ["hex", "file"])]
    pub text: Option<String>,

    /// Raw bytes as hex pairs, e.g. 'e2 82 ac' or 'e282ac'
    #[arg(long, conflicts_with = "file")]
    pub hex: Option<String>,

    /// Read the bytes from a file
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Output formatting options
    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: DecodeArgs) -> ExitCode {
    finish(KIND, execute(args))
}

fn execute(args: DecodeArgs) -> CommandResult<ExitCode> {
    let (label, bytes) = read_input(&args)?;
    debug!("decoding {} bytes from {label}", bytes.len());

    let mut printer = args.output.make_printer();

    match decode_utf8_to_utf16(&bytes) {
        Ok(units) => {
            let fields = [
                ("bytes", bytes.len().to_string()),
                ("units", units.len().to_string()),
            ];
            printer.print_row(&ResultRow {
                kind: KIND,
                input: &label,
                output: &format_units(&units),
                fields: &fields,
            })?;
            Ok(exit_for(0))
        }
        Err(e) => {
            printer.print_failure(&FailureRow {
                kind: KIND,
                input: &label,
                message: &e.to_string(),
            })?;
            Ok(exit_for(1))
        }
    }
}

/// Pick the byte source and a label describing it.
fn read_input(args: &DecodeArgs) -> CommandResult<(String, Vec<u8>)> {
    if let Some(path) = &args.file {
        let bytes =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        return Ok((path.display().to_string(), bytes));
    }

    if let Some(hex) = &args.hex {
        return Ok((hex.clone(), parse_hex(hex)?));
    }

    if let Some(text) = &args.text {
        return Ok((text.clone(), text.as_bytes().to_vec()));
    }

    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("failed to read stdin")?;
    Ok(("<stdin>".to_owned(), bytes))
}

/// Parse hex byte pairs, ignoring whitespace between them.
pub fn parse_hex(text: &str) -> CommandResult<Vec<u8>> {
    let digits: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    if digits.len() % 2 != 0 {
        bail!("hex input has an odd number of digits");
    }

    digits
        .chunks_exact(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).context("hex input is not ASCII")?;
            u8::from_str_radix(pair, 16).with_context(|| format!("invalid hex byte {pair:?}"))
        })
        .collect()
}

/// Render code units as `0x`-prefixed, space separated hex.
pub fn format_units(units: &[u16]) -> String {
    units
        .iter()
        .map(|u| format!("{u:#06x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;
