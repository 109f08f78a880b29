// src/normalize.rs

//! Strips terminal escape sequences from lines to produce a matching key.
//!
//! Captured pane content carries the color and style sequences the shell
//! prompt was rendered with. Classification must see the plain text, but the
//! original bytes are what gets emitted, so stripping happens on a copy and
//! only ever feeds the classifier.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// CSI sequences: ESC '[' , parameter bytes, one final letter.
static CSI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1b\[[0-9;:?]*[A-Za-z]").expect("CSI regex is valid")
});

/// Removes all CSI escape sequences from a line.
///
/// Returns a borrowed `Cow` when the line contains no sequences, so the
/// common case (plain text) allocates nothing. The result is used only for
/// pattern matching; output always uses the untouched original.
///
/// # Examples
/// ```
/// use panescrub::normalize::strip_csi;
///
/// assert_eq!(strip_csi("\x1b[1;32m╰ $\x1b[0m"), "╰ $");
/// assert_eq!(strip_csi("no escapes here"), "no escapes here");
/// ```
pub fn strip_csi(line: &str) -> Cow<'_, str> {
    CSI_RE.replace_all(line, "")
}
