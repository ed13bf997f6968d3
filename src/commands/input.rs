//! Line input for the interactive commands

use std::io::{self, BufRead, Write};

/// Print a prompt and read one trimmed line; `None` at end of input
pub fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
