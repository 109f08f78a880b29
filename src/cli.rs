// src/cli.rs

use clap::Parser;

/// Collapses repeated empty prompt blocks from captured terminal panes.
///
/// panescrub reads captured pane content on stdin and writes the cleaned
/// content to stdout. Each save/restore cycle of a terminal session leaves
/// behind one more rendering of an empty prompt; runs of those (and the
/// shell restore noise trailing them) are collapsed down to the single most
/// recent block. The filter takes no options; behavior is fixed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {}
