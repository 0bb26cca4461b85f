use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output with optional colors.
    #[default]
    Human,
    /// NDJSON (newline-delimited JSON) for machine consumption.
    Json,
}

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Automatically detect TTY and enable colors if appropriate.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorChoice {
    pub fn from_flag(value: &str) -> Self {
        match value {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PrinterConfig {
    pub format: OutputFormat,
    pub color: ColorChoice,
}

/// One result produced by a subcommand.
#[derive(Debug)]
pub struct ResultRow<'a> {
    /// Subcommand that produced the row, e.g. `normalize`.
    pub kind: &'a str,
    /// The input the result was computed from.
    pub input: &'a str,
    /// Main result value.
    pub output: &'a str,
    /// Extra labelled values, printed after the main one.
    pub fields: &'a [(&'a str, String)],
}

/// A per-input failure that does not abort the command.
#[derive(Debug)]
pub struct FailureRow<'a> {
    pub kind: &'a str,
    pub input: &'a str,
    pub message: &'a str,
}

/// Writes command results in one output format.
pub trait ResultPrinter {
    fn print_row(&mut self, row: &ResultRow<'_>) -> io::Result<()>;

    fn print_failure(&mut self, failure: &FailureRow<'_>) -> io::Result<()>;
}

pub struct HumanPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    use_color: bool,
}

impl<W: Write, E: Write> HumanPrinter<W, E> {
    /// Printer over arbitrary writers; `Auto` color resolves to no color.
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        let use_color = cfg.color == ColorChoice::Always;
        Self {
            out,
            err,
            use_color,
        }
    }

    /// Create a printer that writes to stdout and stderr with TTY detection.
    pub fn stdout(cfg: PrinterConfig) -> HumanPrinter<io::Stdout, io::Stderr> {
        use std::io::IsTerminal;

        let use_color = match cfg.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };

        HumanPrinter {
            out: io::stdout(),
            err: io::stderr(),
            use_color,
        }
    }

    #[inline]
    fn paint(&self, text: &str) -> String {
        if self.use_color {
            format!("\x1b[32m{}\x1b[0m", text)
        } else {
            text.to_owned()
        }
    }
}

impl<W: Write, E: Write> ResultPrinter for HumanPrinter<W, E> {
    fn print_row(&mut self, row: &ResultRow<'_>) -> io::Result<()> {
        let output = self.paint(row.output);
        writeln!(self.out, "{}", output)?;

        for (label, value) in row.fields {
            writeln!(self.out, "  {:<12} {}", format!("{label}:"), value)?;
        }
        Ok(())
    }

    fn print_failure(&mut self, failure: &FailureRow<'_>) -> io::Result<()> {
        writeln!(
            self.err,
            "[{}] {:?}: {}",
            failure.kind, failure.input, failure.message
        )
    }
}

pub struct JsonPrinter<W: Write, E: Write> {
    out: W,
    err: E,
}

impl<W: Write, E: Write> JsonPrinter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    /// Create a printer that writes to stdout and stderr.
    pub fn stdout() -> JsonPrinter<io::Stdout, io::Stderr> {
        JsonPrinter {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl<W: Write, E: Write> ResultPrinter for JsonPrinter<W, E> {
    fn print_row(&mut self, row: &ResultRow<'_>) -> io::Result<()> {
        let mut obj = serde_json::json!({
            "kind": row.kind,
            "input": row.input,
            "output": row.output,
        });
        for (label, value) in row.fields {
            obj[*label] = serde_json::Value::from(value.as_str());
        }
        writeln!(self.out, "{}", obj)
    }

    fn print_failure(&mut self, failure: &FailureRow<'_>) -> io::Result<()> {
        let obj = serde_json::json!({
            "type": "error",
            "kind": failure.kind,
            "input": failure.input,
            "message": failure.message,
        });
        writeln!(self.err, "{}", obj)
    }
}

/// Printer for the configured format on stdout/stderr.
pub fn make_printer(cfg: PrinterConfig) -> Box<dyn ResultPrinter> {
    match cfg.format {
        OutputFormat::Human => Box::new(HumanPrinter::<io::Stdout, io::Stderr>::stdout(cfg)),
        OutputFormat::Json => Box::new(JsonPrinter::<io::Stdout, io::Stderr>::stdout()),
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
