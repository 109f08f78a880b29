// tests/common.rs

use assert_cmd::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by most integration tests, but not all.
pub fn panescrub_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("panescrub"))
}
