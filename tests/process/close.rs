use dicelog::cmd::Sentinel;
use dicelog::process::builtin::map::BuiltinMap;
use dicelog::process::close::{CLOSE_CODE, CLOSED_MESSAGE};
use dicelog::session::Session;
use dicelog::store::{Journal, JournalSink};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn close_flushes_journal_and_signals_exit() {
    let buffer = Rc::new(RefCell::new(Vec::new()));
    let mut session = Session::new(Journal::from_sink(JournalSink::Buffer(buffer)).unwrap());
    let mut map = BuiltinMap::new();
    let mut out = Vec::new();

    let status = map
        .invoke(Sentinel::Close, &mut session, &mut out)
        .expect("close builtin not registered")
        .unwrap();

    assert_eq!(status, CLOSE_CODE);
    assert!(!session.journal.is_open());
    assert_eq!(String::from_utf8(out).unwrap(), format!("{CLOSED_MESSAGE}\n"));
}
