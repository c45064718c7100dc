// src/prompt.rs
// =============================================================================
// Console prompts for `fetch --download`.
//
// Only the CLI layer asks questions; the fetch module takes plain
// arguments. `ask` is generic over its reader and writer so tests can
// drive it without a terminal.
// =============================================================================

use std::io::{self, BufRead, Write};

/// Prints `message` and reads one line, without the trailing newline.
/// End of input counts as an empty answer.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> io::Result<String> {
    writeln!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// `ask` on the process's stdin and stdout
pub fn ask_stdin(message: &str) -> io::Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    ask(&mut stdin.lock(), &mut stdout.lock(), message)
}
