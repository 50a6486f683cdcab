//! Line-oriented operator console.
//!
//! Generic over its reader and writer so whole menu sessions can be driven
//! from an in-memory script.

use crate::error::AppError;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Indentation shared by every line the program prints.
pub const INDENT: &str = "  ";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Print `label` (indented, no newline) and read one line with only the
    /// line terminator removed.
    ///
    /// # Errors
    /// `AppError::EndOfInput` when the reader is exhausted.
    pub fn prompt_line(&mut self, label: &str) -> Result<String, AppError> {
        write!(self.output, "{}{}", INDENT, label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::EndOfInput);
        }
        let stripped = line.strip_suffix('\n').unwrap_or(&line);
        let stripped = stripped.strip_suffix('\r').unwrap_or(stripped);
        Ok(stripped.to_string())
    }

    /// Prompt and return the answer with surrounding whitespace trimmed.
    pub fn prompt(&mut self, label: &str) -> Result<String, AppError> {
        Ok(self.prompt_line(label)?.trim().to_string())
    }

    /// Prompt for a whole number.
    ///
    /// # Errors
    /// `AppError::InvalidInput` naming `field` when the answer does not parse.
    pub fn prompt_parse<T: FromStr>(&mut self, label: &str, field: &str) -> Result<T, AppError> {
        let answer = self.prompt(label)?;
        answer
            .parse::<T>()
            .map_err(|_| AppError::invalid_input(field, &answer))
    }

    /// Print one indented line.
    pub fn say(&mut self, text: impl Display) -> Result<(), AppError> {
        writeln!(self.output, "{}{}", INDENT, text)?;
        Ok(())
    }

    /// Print text verbatim, for pre-rendered blocks.
    pub fn write_block(&mut self, block: &str) -> Result<(), AppError> {
        self.output.write_all(block.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
