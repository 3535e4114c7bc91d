mod common;
use common::*;

use core_state::Mode;
use core_text::Position;
use pretty_assertions::assert_eq;

fn search(term: &str) -> Vec<Stroke> {
    let mut keys = vec![Stroke::Char('/')];
    keys.extend(chars(term));
    keys.push(Stroke::Enter);
    keys
}

#[test]
fn search_then_repeat_without_wraparound() {
    let mut m = model(&["hello world", "world peace"]);
    replay(&mut m, &search("world"));
    assert_eq!(m.state().mode, Mode::Normal);
    assert_eq!(cursor(&m), Position::new(0, 6));
    replay(&mut m, &chars("n"));
    assert_eq!(cursor(&m), Position::new(1, 0));
    replay(&mut m, &chars("n"));
    assert_eq!(cursor(&m), Position::new(1, 0));
    assert_eq!(m.state().status, "Pattern not found: world");
}

#[test]
fn capital_n_searches_backward() {
    let mut m = model(&["ab ab", "ab"]);
    replay(&mut m, &chars("G"));
    m.state_mut().search.term = "ab".into();
    replay(&mut m, &chars("N"));
    assert_eq!(cursor(&m), Position::new(0, 3));
    replay(&mut m, &chars("N"));
    assert_eq!(cursor(&m), Position::new(0, 0));
}

#[test]
fn status_mirrors_live_term() {
    let mut m = model(&["abc"]);
    replay(&mut m, &chars("/ab"));
    assert_eq!(m.state().mode, Mode::Search);
    assert_eq!(m.state().status, "/ab");
    replay(&mut m, &[Stroke::Backspace]);
    assert_eq!(m.state().status, "/a");
}

#[test]
fn esc_abandons_edit_but_keeps_confirmed_term() {
    let mut m = model(&["foo bar", "bar foo"]);
    replay(&mut m, &search("bar"));
    assert_eq!(cursor(&m), Position::new(0, 4));
    replay(&mut m, &chars("/foo"));
    replay(&mut m, &[Stroke::Esc]);
    assert_eq!(m.state().mode, Mode::Normal);
    assert_eq!(m.state().search.term, "bar");
    replay(&mut m, &chars("n"));
    assert_eq!(cursor(&m), Position::new(1, 0));
}

#[test]
fn search_keys_do_not_edit_buffer() {
    let mut m = model(&["abc"]);
    replay(&mut m, &chars("/xdp"));
    replay(&mut m, &[Stroke::Esc]);
    assert_eq!(lines(&m), vec!["abc"]);
    assert!(!m.state().modified);
}

#[test]
fn replace_mode_requires_confirmed_term() {
    let mut m = model(&["foo"]);
    replay(&mut m, &chars("R"));
    assert_eq!(m.state().mode, Mode::Normal);
    assert_eq!(m.state().status, "No search term");
}

#[test]
fn replace_all_through_keys() {
    let mut m = model(&["foo bar foo", "nothing", "foofoo"]);
    replay(&mut m, &search("foo"));
    let mut keys = chars("Rbaz");
    keys.push(Stroke::Enter);
    replay(&mut m, &keys);
    assert_eq!(lines(&m), vec!["baz bar baz", "nothing", "bazbaz"]);
    assert_eq!(m.state().status, "Replaced 4 occurrences");
    assert_eq!(m.state().mode, Mode::Normal);
    assert!(m.state().modified);

    replay(&mut m, &chars("u"));
    assert_eq!(lines(&m), vec!["foo bar foo", "nothing", "foofoo"]);
}

#[test]
fn replace_all_twice_reports_zero_second_time() {
    let mut m = model(&["foo"]);
    replay(&mut m, &search("foo"));
    let mut keys = chars("Rbar");
    keys.push(Stroke::Enter);
    replay(&mut m, &keys);
    replay(&mut m, &keys);
    assert_eq!(lines(&m), vec!["bar"]);
    assert_eq!(m.state().status, "Replaced 0 occurrences");
    assert_eq!(m.state().undo_depth(), 1);
}

#[test]
fn replace_prompt_mirrors_and_cancels() {
    let mut m = model(&["foo"]);
    replay(&mut m, &search("foo"));
    replay(&mut m, &chars("Rxy"));
    assert_eq!(m.state().status, "Replace with: xy");
    replay(&mut m, &[Stroke::Esc]);
    assert_eq!(m.state().mode, Mode::Normal);
    assert_eq!(lines(&m), vec!["foo"]);
}
