//! Interactive token echo loop.

use std::io::{BufRead, Write};

use crate::{
    debug_log,
    errors::errors::{format_error, Error},
    lexer::lexer::Lexer,
};

pub const PROMPT: &str = ">> ";

/// Reads `input` line by line, writing every token of each line to `output`.
///
/// Lines are scanned as raw bytes, so invalid UTF-8 is reported one byte at
/// a time. Returns once `input` is exhausted. Illegal tokens are followed by
/// a diagnostic line; they never stop the loop.
pub fn start<R: BufRead, W: Write>(mut input: R, output: &mut W, prompt: &str) -> Result<(), Error> {
    let mut buffer = Vec::new();
    let mut line_number = 0usize;

    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            debug_log!("end of input after {} lines", line_number);
            return Ok(());
        }
        line_number += 1;

        let mut count = 0usize;

        for token in Lexer::new(strip_line_ending(&buffer)) {
            writeln!(output, "{}", token)?;
            if token.is_illegal() {
                writeln!(output, "{}", format_error(&Error::unrecognised(&token)))?;
            }
            count += 1;
        }

        debug_log!("line {}: {} tokens", line_number, count);
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
