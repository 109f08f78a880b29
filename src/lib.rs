//! `panescrub` is a library and command-line filter that cleans captured
//! terminal-pane content by collapsing runs of consecutive empty prompt
//! blocks down to a single trailing instance.
//!
//! Tools that save and later restore terminal sessions append one more
//! rendering of an empty prompt per cycle; replaying a pane that has been
//! through many cycles shows a growing stack of identical empty prompts,
//! each trailed by the shell's transient restore errors. This filter makes
//! one stateful pass over the line stream and keeps only the last block of
//! each run, so repeated save/restore stays visually bounded.
//!
//! The pass is built from three pieces that compose per input line:
//! 1.  **Normalize**: strip CSI escape sequences to get a matching key
//!     ([`normalize`]); the original bytes are what gets emitted.
//! 2.  **Classify**: decide whether the normalized line is a prompt top, an
//!     empty prompt bottom, restore noise, or ordinary text ([`classify`]).
//! 3.  **Collapse**: the stateful core ([`collapse`]) that buffers, emits,
//!     or discards based on the classification.
//!
//! # Example: Library Usage
//!
//! ```
//! use panescrub::run;
//! use std::io::Cursor;
//!
//! // Two empty prompt blocks from two save/restore cycles, with the
//! // shell's restore noise between them. Only the last block survives.
//! let input = "\
//! ╭ A 2024-01-01 10:00:00 ╯
//! ╰ $
//! bash: [: : integer expression expected
//! ╭ B 2024-01-01 10:00:01 ╯
//! ╰ $
//! hello
//! ";
//!
//! let mut output = Vec::new();
//! run(Cursor::new(input), &mut output).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "╭ B 2024-01-01 10:00:01 ╯\n╰ $\nhello\n"
//! );
//! ```

pub mod classify;
pub mod cli;
pub mod collapse;
pub mod constants;
pub mod errors;
pub mod normalize;

// Re-export key public types for easier use as a library
pub use classify::LineKind;
pub use collapse::{Collapser, Line};
pub use errors::AppError;
pub use normalize::strip_csi;

use crate::errors::io_error_on;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Runs the complete filter over a line stream.
///
/// Consumes `reader` one line at a time, feeds each line through the
/// collapsing state machine, and writes whatever it emits to `writer`.
/// At end of input the machine is drained exactly once, so no pending
/// state is silently dropped.
///
/// Emitted lines keep their original text byte-for-byte (including any
/// embedded escape sequences); only line terminators are re-written as
/// `\n`. Output order matches arrival order, modulo the collapsed lines.
///
/// # Errors
/// Only I/O failures on `reader` or `writer` produce errors; the filtering
/// itself is total over arbitrary line input. Whatever was emitted before
/// an I/O failure remains valid output.
pub fn run<R: BufRead, W: Write>(reader: R, writer: &mut W) -> Result<()> {
    let mut collapser = Collapser::new();
    let mut read = 0usize;
    let mut written = 0usize;

    for line in reader.lines() {
        let line = line.map_err(|e| io_error_on("input", e))?;
        read += 1;
        for emitted in collapser.push_line(&line) {
            writeln!(writer, "{emitted}").map_err(|e| io_error_on("output", e))?;
            written += 1;
        }
    }

    // End of input: drain the buffer and any pending candidate.
    for emitted in collapser.finish() {
        writeln!(writer, "{emitted}").map_err(|e| io_error_on("output", e))?;
        written += 1;
    }
    writer.flush().map_err(|e| io_error_on("output", e))?;

    log::debug!("filtered {} input line(s) down to {}", read, written);
    Ok(())
}
