// tests/library_api.rs
//
// Exercises the public library surface: the streaming `run` pipeline and
// the `Collapser`/`Line` building blocks it is made of.

use panescrub::{run, Collapser, Line, LineKind};
use std::io::Cursor;

#[test]
fn test_line_construction_classifies_through_escapes() {
    let line = Line::new("\x1b[1;32m╰ $\x1b[0m");
    assert_eq!(line.kind(), LineKind::PromptBottom);
    // Raw text is untouched.
    assert_eq!(line.raw(), "\x1b[1;32m╰ $\x1b[0m");
}

#[test]
fn test_collapser_buffers_silently() {
    // While an empty block is forming, nothing is emitted.
    let mut collapser = Collapser::new();
    assert!(collapser.push_line("╭ A 2024-01-01 10:00:00 ╯").is_empty());
    assert!(collapser.push_line("╰ $").is_empty());
    assert_eq!(collapser.finish(), vec!["╭ A 2024-01-01 10:00:00 ╯", "╰ $"]);
}

#[test]
fn test_collapser_emits_on_ordinary_line() {
    let mut collapser = Collapser::new();
    collapser.push_line("╭ A 2024-01-01 10:00:00 ╯");
    collapser.push_line("╰ $");
    let emitted = collapser.push_line("echo");
    assert_eq!(emitted, vec!["╭ A 2024-01-01 10:00:00 ╯", "╰ $", "echo"]);
    assert!(collapser.finish().is_empty());
}

#[test]
fn test_run_over_in_memory_streams() {
    let input = "\
before
╭ A 2024-01-01 10:00:00 ╯
╰ $
bash: trap: EOF: invalid signal specification
╭ B 2024-01-01 10:00:01 ╯
╰ $
bash: __pane_restore_marker__: command not found
after
";
    let mut output = Vec::new();
    run(Cursor::new(input), &mut output).unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "before\n╭ B 2024-01-01 10:00:01 ╯\n╰ $\nafter\n"
    );
}

#[test]
fn test_run_with_crlf_input() {
    // BufRead::lines strips \r\n; output is \n-terminated.
    let input = "one\r\ntwo\r\n";
    let mut output = Vec::new();
    run(Cursor::new(input), &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "one\ntwo\n");
}

#[test]
fn test_pathological_run_of_blocks_stays_one_block() {
    // Hundreds of save/restore cycles with no normal output in between
    // still flush to a single block.
    let mut collapser = Collapser::new();
    for i in 0..500 {
        let top = format!("╭ cycle 2024-01-01 {:02}:{:02}:00 ╯", i / 60, i % 60);
        assert!(collapser.push_line(&top).is_empty());
        assert!(collapser.push_line("╰ $").is_empty());
    }
    let drained = collapser.finish();
    assert_eq!(drained, vec!["╭ cycle 2024-01-01 08:19:00 ╯", "╰ $"]);
}
