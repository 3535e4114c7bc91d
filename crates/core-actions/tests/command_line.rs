mod common;
use common::*;

use pretty_assertions::assert_eq;

fn command(body: &str) -> Vec<Stroke> {
    let mut keys = vec![Stroke::Char(':')];
    keys.extend(chars(body));
    keys.push(Stroke::Enter);
    keys
}

#[test]
fn colon_opens_command_line() {
    let mut m = model(&["abc"]);
    replay(&mut m, &chars(":w"));
    assert_eq!(m.state().command_line.buffer(), ":w");
    assert_eq!(lines(&m), vec!["abc"]);
}

#[test]
fn write_saves_to_bound_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    let mut m = model(&["abc"]);
    m.state_mut().file_name = Some(path.clone());
    replay(&mut m, &chars("x"));
    replay(&mut m, &command("w"));
    assert_eq!(m.state().status, "File saved successfully");
    assert!(!m.state().modified);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "bc\n");
}

#[test]
fn write_falls_back_to_default_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut m = model(&["one", "two"]);
    m.state_mut().default_save_path = dir.path().join("output.txt");
    replay(&mut m, &command("w"));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("output.txt")).unwrap(),
        "one\ntwo\n"
    );
}

#[test]
fn write_failure_is_reported_and_keeps_modified() {
    let dir = tempfile::tempdir().unwrap();
    let mut m = model(&["abc"]);
    m.state_mut().file_name = Some(dir.path().join("absent").join("doc.txt"));
    replay(&mut m, &chars("x"));
    assert!(!replay(&mut m, &command("w")));
    assert!(m.state().status.starts_with("Error saving file: "));
    assert!(m.state().modified);
}

#[test]
fn q_bang_quits_with_changes() {
    let mut m = model(&["abc"]);
    replay(&mut m, &chars("x"));
    assert!(!replay(&mut m, &command("q")));
    assert!(replay(&mut m, &command("q!")));
}

#[test]
fn wq_saves_then_quits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    let mut m = model(&["abc"]);
    m.state_mut().file_name = Some(path.clone());
    replay(&mut m, &chars("x"));
    assert!(replay(&mut m, &command("wq")));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "bc\n");
}

#[test]
fn esc_and_backspace_cancel() {
    let mut m = model(&["abc"]);
    replay(&mut m, &[Stroke::Char(':'), Stroke::Char('q'), Stroke::Esc]);
    assert!(!m.state().command_line.is_active());
    replay(&mut m, &[Stroke::Char(':'), Stroke::Backspace]);
    assert!(!m.state().command_line.is_active());
    replay(&mut m, &chars("x"));
    assert_eq!(lines(&m), vec!["bc"]);
}

#[test]
fn unknown_command_message() {
    let mut m = model(&["abc"]);
    replay(&mut m, &command("e foo"));
    assert_eq!(m.state().status, "Not an editor command: e foo");
}
