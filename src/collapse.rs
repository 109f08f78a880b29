// src/collapse.rs

//! The collapsing state machine.
//!
//! Tracks three pieces of state across the line stream: a pending prompt-top
//! candidate (seen but not yet known to start an empty block or a real
//! prompt), a buffer of completed empty blocks awaiting collapse, and a flag
//! marking the noise-absorption window that follows a completed block.
//!
//! Two of the rules re-evaluate the current line after a state transition
//! (ending the absorption window, and a pending candidate resolving to a
//! real prompt). That re-evaluation is an explicit loop over [`Collapser::step`],
//! which reports whether the line was consumed or must be run through the
//! rules again.

use crate::classify::{classify, LineKind};
use crate::normalize::strip_csi;
use log::debug;

/// One input line: the raw text that gets emitted, and the classification
/// computed from its escape-stripped form. Normalization only ever feeds the
/// classifier; it is consumed here at construction and never reaches output.
#[derive(Debug, Clone)]
pub struct Line {
    raw: String,
    kind: LineKind,
}

impl Line {
    /// Normalizes and classifies a raw input line.
    pub fn new(raw: &str) -> Self {
        let kind = classify(&strip_csi(raw));
        Line {
            raw: raw.to_string(),
            kind,
        }
    }

    /// The original, unmodified text of the line.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The classification of the line's normalized text.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    fn into_raw(self) -> String {
        self.raw
    }
}

/// One empty-prompt rendering: a prompt top immediately followed by an empty
/// prompt bottom.
#[derive(Debug)]
struct Block {
    top: Line,
    bottom: Line,
}

/// Outcome of running one line through the rule chain.
enum Step {
    /// The line was handled; move on to the next input line.
    Consumed,
    /// State changed; run the same line through the rules again.
    Again,
}

/// Collapses runs of consecutive empty prompt blocks down to the last one.
///
/// Feed lines with [`push_line`](Collapser::push_line); each call returns the
/// lines to emit at that point (possibly none). Call
/// [`finish`](Collapser::finish) exactly once at end of input to drain the
/// remaining state.
#[derive(Debug, Default)]
pub struct Collapser {
    pending_top: Option<Line>,
    buffer: Vec<Block>,
    absorb_noise: bool,
}

impl Collapser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one input line through the rule chain and returns whatever
    /// output it produces, in emission order.
    pub fn push_line(&mut self, raw: &str) -> Vec<String> {
        let line = Line::new(raw);
        let mut out = Vec::new();
        loop {
            match self.step(&line, &mut out) {
                Step::Consumed => break,
                Step::Again => continue,
            }
        }
        out
    }

    /// Drains all remaining state at end of input: flushes the block buffer,
    /// then emits a still-pending top as-is (an unterminated real prompt).
    pub fn finish(mut self) -> Vec<String> {
        let mut out = Vec::new();
        self.flush(&mut out);
        if let Some(top) = self.pending_top.take() {
            out.push(top.into_raw());
        }
        out
    }

    /// One pass over the rule chain, in priority order; first match wins.
    fn step(&mut self, line: &Line, out: &mut Vec<String>) -> Step {
        // The absorption window after a completed block swallows restore
        // noise; the first non-noise line closes it and is then processed
        // normally.
        if self.absorb_noise {
            if line.kind() == LineKind::RestoreNoise {
                debug!("absorbed restore noise: {:?}", line.raw());
                return Step::Consumed;
            }
            self.absorb_noise = false;
            return Step::Again;
        }

        if let Some(top) = self.pending_top.take() {
            return match line.kind() {
                LineKind::PromptBottom => {
                    // The held candidate plus this bottom form an empty
                    // block; buffer it and open the absorption window.
                    self.buffer.push(Block {
                        top,
                        bottom: line.clone(),
                    });
                    self.absorb_noise = true;
                    Step::Consumed
                }
                LineKind::PromptTop => {
                    // Two tops with no bottom between them: the held one was
                    // a same-cycle redraw. The new line supersedes it.
                    debug!("discarded redrawn prompt top: {:?}", top.raw());
                    self.pending_top = Some(line.clone());
                    Step::Consumed
                }
                _ => {
                    // The held candidate was a real (non-empty) prompt.
                    self.flush(out);
                    out.push(top.into_raw());
                    Step::Again
                }
            };
        }

        match line.kind() {
            LineKind::PromptTop => {
                self.pending_top = Some(line.clone());
                Step::Consumed
            }
            _ => {
                self.flush(out);
                out.push(line.raw().to_string());
                Step::Consumed
            }
        }
    }

    /// Emits the last buffered block (top then bottom), discarding all
    /// earlier ones, and empties the buffer. No-op when the buffer is empty.
    fn flush(&mut self, out: &mut Vec<String>) {
        if let Some(last) = self.buffer.pop() {
            if !self.buffer.is_empty() {
                debug!(
                    "collapsed {} earlier empty block(s)",
                    self.buffer.len()
                );
                self.buffer.clear();
            }
            out.push(last.top.into_raw());
            out.push(last.bottom.into_raw());
        }
    }
}
