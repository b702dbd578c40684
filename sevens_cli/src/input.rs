use std::io::{BufRead, Write};

use crate::error::GameError;

/// Prints `prompt`, then blocks until a full line arrives. No timeout.
/// A closed input stream is reported as `GameError::InputClosed`.
pub fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String, GameError> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(GameError::InputClosed);
    }
    Ok(buf)
}
