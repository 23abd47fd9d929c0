use dicelog::cmd::triplet;
use dicelog::error::DiceLogError;
use dicelog::process::builtin::map::BuiltinMap;
use dicelog::process::{INVALID_MESSAGE, execute};
use dicelog::session::Session;
use dicelog::store::{Journal, JournalSink, Roll};
use std::cell::RefCell;
use std::rc::Rc;

fn session() -> (Session, Rc<RefCell<Vec<u8>>>) {
    let buffer = Rc::new(RefCell::new(Vec::new()));
    let journal = Journal::from_sink(JournalSink::Buffer(buffer.clone())).unwrap();
    (Session::new(journal), buffer)
}

#[test]
fn execute_records_valid_roll() {
    let (mut session, buffer) = session();
    let mut map = BuiltinMap::new();
    let mut out = Vec::new();

    let status = execute(&mut map, &mut session, triplet::parse("3 1 4"), &mut out).unwrap();

    assert_eq!(status, 0);
    assert!(out.is_empty());
    assert_eq!(session.rolls.as_slice(), &[Roll::new(3, 1, 4).unwrap()]);
    let journal = String::from_utf8(buffer.borrow().clone()).unwrap();
    assert!(journal.ends_with("第1個：3 1 4\n"));
}

#[test]
fn execute_ignores_empty_lines() {
    let (mut session, _buffer) = session();
    let mut map = BuiltinMap::new();
    let mut out = Vec::new();

    let status = execute(&mut map, &mut session, triplet::parse(""), &mut out).unwrap();

    assert_eq!(status, 0);
    assert!(out.is_empty());
    assert!(session.rolls.is_empty());
}

#[test]
fn execute_reports_invalid_input() {
    let (mut session, _buffer) = session();
    let mut map = BuiltinMap::new();
    let mut out = Vec::new();

    let status = execute(&mut map, &mut session, triplet::parse("1 2 9"), &mut out).unwrap();

    assert_eq!(status, 1);
    assert_eq!(String::from_utf8(out).unwrap(), format!("{INVALID_MESSAGE}\n"));
}

#[test]
fn journal_failure_keeps_log_and_file_in_step() {
    let (mut session, buffer) = session();
    let mut map = BuiltinMap::new();
    let mut out = Vec::new();

    execute(&mut map, &mut session, triplet::parse("2 2 5"), &mut out).unwrap();
    session.journal.close().unwrap();
    assert!(execute(&mut map, &mut session, triplet::parse("6 1 3"), &mut out).is_err());

    let journal = String::from_utf8(buffer.borrow().clone()).unwrap();
    let records: Vec<&str> = journal.lines().filter(|l| l.starts_with('第')).collect();
    assert_eq!(records, vec!["第1個：2 2 5"]);
    assert_eq!(session.rolls.as_slice(), &[Roll::new(2, 2, 5).unwrap()]);
}

#[test]
fn recording_after_close_is_an_error() {
    let (mut session, _buffer) = session();
    let mut map = BuiltinMap::new();
    let mut out = Vec::new();

    execute(&mut map, &mut session, triplet::parse("0 0 0"), &mut out).unwrap();
    let err = execute(&mut map, &mut session, triplet::parse("1 2 3"), &mut out).unwrap_err();

    assert!(matches!(err, DiceLogError::JournalClosed));
    assert!(session.rolls.is_empty());
}
