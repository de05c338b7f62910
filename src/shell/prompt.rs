//! Line-oriented prompting
//!
//! `Prompter` wraps an input reader and an output writer. Parsing helpers
//! turn raw answers into amounts, options and positions, rejecting anything
//! invalid before it can reach the ledger.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::error::LedgerError;
use crate::models::{Classification, Money};

/// Why an interactive step stopped
#[derive(Error, Debug)]
pub enum ShellError {
    /// The input stream closed
    #[error("end of input")]
    EndOfInput,

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl From<io::Error> for ShellError {
    fn from(err: io::Error) -> Self {
        Self::Ledger(err.into())
    }
}

pub type ShellResult<T> = Result<T, ShellError>;

/// Reads answers from `input`, writes prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line
    pub fn ask(&mut self, prompt: &str) -> ShellResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::EndOfInput);
        }

        Ok(line.trim().to_string())
    }

    /// Print one line of output
    pub fn say(&mut self, text: impl AsRef<str>) -> ShellResult<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Print text verbatim, without adding a newline
    pub fn print(&mut self, text: impl AsRef<str>) -> ShellResult<()> {
        write!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Give back the underlying writer
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parse a positive amount
pub fn parse_amount(input: &str) -> Result<Money, LedgerError> {
    let amount = Money::parse(input).map_err(|e| LedgerError::InvalidAmount(e.to_string()))?;

    if !amount.is_positive() {
        return Err(LedgerError::InvalidAmount(format!(
            "amount must be greater than zero (got {})",
            amount
        )));
    }

    Ok(amount)
}

/// Parse a 1-based option number into one of `C`'s options
pub fn parse_option<C: Classification>(input: &str) -> Result<C, LedgerError> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(C::from_menu_index)
        .ok_or_else(|| LedgerError::selection(C::NOUN, input.trim(), C::ALL.len()))
}

/// Parse a 1-based record number
///
/// Only rejects text that is not a number at all; whether the record exists
/// is up to the ledger.
pub fn parse_record_number(
    input: &str,
    what: &'static str,
    len: usize,
) -> Result<usize, LedgerError> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| LedgerError::selection(what, input.trim(), len))
}
