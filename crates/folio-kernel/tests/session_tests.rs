//! End-to-end session tests against the built-in portfolio tree.

use std::sync::Arc;

use chrono::NaiveDate;
use folio_kernel::{FixedClock, LineKind, ScrollbackLine, Session, Shell, Vfs};
use proptest::prelude::*;
use rstest::rstest;

fn shell() -> Arc<Shell> {
    let at = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    Arc::new(Shell::new(Vfs::portfolio().unwrap()).with_clock(FixedClock(at)))
}

fn session() -> Session {
    shell().open_session(None).unwrap()
}

/// Submit a line and return the texts it appended, minus the echoed command.
fn run(session: &mut Session, line: &str) -> Vec<String> {
    let sub = session.submit(line).expect("line should not be blank");
    sub.lines
        .iter()
        .filter(|l| l.kind != LineKind::Command)
        .map(|l| l.text.clone())
        .collect()
}

fn errors(session: &Session) -> Vec<&str> {
    session
        .scrollback()
        .iter()
        .filter(|l| l.kind == LineKind::Error)
        .map(|l| l.text.as_str())
        .collect()
}

// ============================================================================
// Scenario: cd about, cat bio.txt, cd /nonexistent
// ============================================================================

#[test]
fn about_scenario() {
    let mut s = session();

    run(&mut s, "cd about");
    assert_eq!(s.cwd(), "/about");

    let bio = Vfs::portfolio().unwrap();
    let expected: Vec<&str> = bio
        .resolve("/about/bio.txt")
        .unwrap()
        .lines()
        .unwrap();

    let out = run(&mut s, "cat bio.txt");
    assert_eq!(out.len(), expected.len() + 1);
    assert_eq!(&out[..expected.len()], expected.as_slice());
    assert_eq!(out.last().map(String::as_str), Some(""));

    let before = s.scrollback().len();
    run(&mut s, "cd /nonexistent");
    let added = &s.scrollback()[before..];
    assert_eq!(added[0], ScrollbackLine::command("/about$ cd /nonexistent"));
    assert_eq!(
        added[1],
        ScrollbackLine::error("cd: /nonexistent: No such file or directory")
    );
    assert_eq!(errors(&s).len(), 1);
    assert_eq!(s.cwd(), "/about");
}

// ============================================================================
// Navigation
// ============================================================================

#[rstest]
#[case::nested("/about", "/")]
#[case::root("/", "/")]
fn cd_parent(#[case] start: &str, #[case] expected: &str) {
    let mut s = shell().open_session(Some(start)).unwrap();
    run(&mut s, "cd ..");
    assert_eq!(s.cwd(), expected);
    assert!(errors(&s).is_empty());
}

#[test]
fn cd_parent_of_two_levels() {
    let vfs = Vfs::from_json(r#"{ "a": { "b": {} } }"#).unwrap();
    let shell = Arc::new(Shell::new(vfs));
    let mut s = shell.open_session(Some("/a/b")).unwrap();
    run(&mut s, "cd ..");
    assert_eq!(s.cwd(), "/a");
}

#[test]
fn cat_directory_is_wrong_type() {
    let mut s = session();
    let out = run(&mut s, "cat projects");
    assert_eq!(out, vec!["cat: projects: Is a directory", ""]);
    assert_eq!(s.cwd(), "/");
}

#[test]
fn ls_is_idempotent() {
    let mut s = session();
    let first = run(&mut s, "ls");
    let second = run(&mut s, "ls");
    assert_eq!(first, second);
    assert!(first.iter().any(|l| l.ends_with("about/")));
    assert!(first.iter().any(|l| l.ends_with("resume.txt")));
}

// ============================================================================
// Errors never touch state
// ============================================================================

#[test]
fn unknown_command() {
    let mut s = session();
    run(&mut s, "cd skills");
    run(&mut s, "frobnicate");
    assert_eq!(errors(&s), vec!["frobnicate: command not found"]);
    assert_eq!(s.cwd(), "/skills");
}

#[rstest]
#[case("cat")]
#[case("cat missing.txt")]
#[case("cat about")]
#[case("cd resume.txt")]
#[case("open calculator")]
#[case("open")]
fn errors_produce_one_line(#[case] line: &str) {
    let mut s = session();
    let history_before = s.history().len();
    let out = run(&mut s, line);
    assert_eq!(out.len(), 2, "{line}: {out:?}");
    assert_eq!(errors(&s).len(), 1);
    assert_eq!(s.cwd(), "/");
    assert_eq!(s.history().len(), history_before + 1);
}

// ============================================================================
// Misc builtins
// ============================================================================

#[test]
fn fixed_outputs() {
    let mut s = session();
    assert_eq!(run(&mut s, "whoami"), vec!["visitor", ""]);
    assert_eq!(run(&mut s, "date"), vec!["Sat Jun  1 09:30:00 2024", ""]);
    assert_eq!(run(&mut s, "open email"), vec!["Opening email client...", ""]);
    assert!(run(&mut s, "help")[0].starts_with("Available commands"));
    assert!(run(&mut s, "sudo").len() > 1);
    assert!(run(&mut s, "hack").len() > 1);
}

#[test]
fn clear_keeps_history() {
    let mut s = session();
    run(&mut s, "ls");
    run(&mut s, "cd about");
    s.submit("clear");
    assert!(s.scrollback().is_empty());
    assert_eq!(s.history(), &["ls", "cd about", "clear"]);
    assert_eq!(s.cwd(), "/about");
}

#[test]
fn history_recall() {
    let mut s = session();
    for line in ["pwd", "ls", "whoami"] {
        s.submit(line);
    }
    assert_eq!(s.recall_previous(), Some("whoami"));
    assert_eq!(s.recall_previous(), Some("ls"));
    assert_eq!(s.recall_previous(), Some("pwd"));
    assert_eq!(s.recall_previous(), Some("pwd"));
    assert_eq!(s.recall_next(), "ls");
}

#[test]
fn sessions_are_independent() {
    let shell = shell();
    let mut a = shell.open_session(None).unwrap();
    let b = shell.open_session(None).unwrap();
    run(&mut a, "cd blog");
    assert_eq!(a.cwd(), "/blog");
    assert_eq!(b.cwd(), "/");
    assert!(b.history().is_empty());
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn cd_then_pwd_round_trips(index in any::<prop::sample::Index>()) {
        let shell = shell();
        let dirs = shell.vfs().directories();
        let dir = index.get(&dirs).clone();

        let mut s = shell.open_session(None).unwrap();
        run(&mut s, &format!("cd {dir}"));
        let out = run(&mut s, "pwd");
        prop_assert_eq!(out, vec![dir, String::new()]);
    }

    #[test]
    fn unknown_verbs_never_move_cwd(verb in "[a-z]{3,10}") {
        let shell = shell();
        prop_assume!(!shell.commands().contains(&verb));

        let mut s = shell.open_session(Some("/projects")).unwrap();
        let out = run(&mut s, &verb);
        prop_assert_eq!(out, vec![format!("{verb}: command not found"), String::new()]);
        prop_assert_eq!(s.cwd(), "/projects");
    }
}
