// src/classify.rs

//! Classifies normalized lines against the fixed prompt and noise patterns.
//!
//! Three independent predicates over a normalized (escape-stripped) line:
//! prompt-top, prompt-bottom, and restore-noise. [`classify`] applies them
//! in the priority order noise → bottom → top, which is the order the
//! collapsing rules require.

use crate::constants::RESTORE_MARKER_COMMAND;
use once_cell::sync::Lazy;
use regex::Regex;

/// The classification of a single normalized line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A known shell-startup error message emitted during session restore.
    RestoreNoise,
    /// The lower half of the two-line prompt with no command text after `$`.
    PromptBottom,
    /// The upper half of the two-line prompt, ending in its timestamp.
    PromptTop,
    /// Anything else, passed through untouched.
    Text,
}

// Top border glyph, anything, a YYYY-MM-DD HH:MM:SS timestamp, then the
// bottom-right corner glyph closing the line.
static PROMPT_TOP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^╭.*[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2} ?╯$")
        .expect("prompt-top regex is valid")
});

// Bottom border glyph, a space, the bare `$`, trailing spaces only.
static PROMPT_BOTTOM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^╰ \$ *$").expect("prompt-bottom regex is valid"));

// The closed set of restore-noise messages. This list is deliberately
// literal; do not widen it without a new message being observed in the wild.
static NOISE_INTEGER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^bash: \[: .*: integer expression expected$")
        .expect("integer-expression noise regex is valid")
});

static NOISE_TRAP_EOF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^bash: trap: EOF: invalid signal specification$")
        .expect("trap noise regex is valid")
});

static NOISE_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "^bash: {}: command not found$",
        regex::escape(RESTORE_MARKER_COMMAND)
    ))
    .expect("marker noise regex is valid")
});

/// Returns true iff the line is the upper half of the two-line prompt.
///
/// # Examples
/// ```
/// use panescrub::classify::is_prompt_top;
///
/// assert!(is_prompt_top("╭ ~/src 2024-01-01 10:00:00 ╯"));
/// assert!(!is_prompt_top("╭ no timestamp here ╯"));
/// ```
pub fn is_prompt_top(s: &str) -> bool {
    PROMPT_TOP_RE.is_match(s)
}

/// Returns true iff the line is an empty prompt bottom (`╰ $` and nothing
/// but trailing spaces).
///
/// # Examples
/// ```
/// use panescrub::classify::is_prompt_bottom;
///
/// assert!(is_prompt_bottom("╰ $"));
/// assert!(is_prompt_bottom("╰ $   "));
/// assert!(!is_prompt_bottom("╰ $ ls -la"));
/// ```
pub fn is_prompt_bottom(s: &str) -> bool {
    PROMPT_BOTTOM_RE.is_match(s)
}

/// Returns true iff the line is one of the known restore-noise messages.
pub fn is_restore_noise(s: &str) -> bool {
    NOISE_INTEGER_RE.is_match(s) || NOISE_TRAP_EOF_RE.is_match(s) || NOISE_MARKER_RE.is_match(s)
}

/// Classifies a normalized line, checking noise → bottom → top.
pub fn classify(s: &str) -> LineKind {
    if is_restore_noise(s) {
        LineKind::RestoreNoise
    } else if is_prompt_bottom(s) {
        LineKind::PromptBottom
    } else if is_prompt_top(s) {
        LineKind::PromptTop
    } else {
        LineKind::Text
    }
}
