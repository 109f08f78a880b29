// src/constants.rs

/// Sentinel command the pane-restore sequence types into the shell. Shells
/// that do not define it report it as missing, which is one of the noise
/// messages absorbed after a completed empty block.
pub const RESTORE_MARKER_COMMAND: &str = "__pane_restore_marker__";
