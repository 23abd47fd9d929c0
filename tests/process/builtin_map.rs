use dicelog::cmd::Sentinel;
use dicelog::error::DiceLogResult;
use dicelog::process::builtin::map::BuiltinMap;
use dicelog::process::builtin::{BUILTIN_SENTINELS, Builtin};
use dicelog::session::Session;
use dicelog::store::{Journal, JournalSink};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

fn session() -> Session {
    let buffer = Rc::new(RefCell::new(Vec::new()));
    Session::new(Journal::from_sink(JournalSink::Buffer(buffer)).unwrap())
}

struct Shout {}

impl Builtin for Shout {
    fn call(&mut self, _session: &mut Session, out: &mut dyn Write) -> DiceLogResult<i32> {
        writeln!(out, "HELP!")?;
        Ok(42)
    }
}

#[test]
fn registers_every_sentinel() {
    let map = BuiltinMap::new();
    for sentinel in BUILTIN_SENTINELS {
        assert!(map.contains(sentinel), "{sentinel:?}");
    }
}

#[test]
fn add_replaces_existing_builtin() {
    let mut map = BuiltinMap::new();
    let mut session = session();
    let mut out = Vec::new();

    map.add(Sentinel::Help, Box::new(Shout {}));
    let status = map
        .invoke(Sentinel::Help, &mut session, &mut out)
        .expect("help builtin not registered")
        .unwrap();

    assert_eq!(status, 42);
    assert_eq!(String::from_utf8(out).unwrap(), "HELP!\n");
}

#[test]
fn sentinel_triplets_are_distinct() {
    assert_eq!(Sentinel::History.triplet(), [7, 7, 7]);
    assert_eq!(Sentinel::Help.triplet(), [8, 8, 8]);
    assert_eq!(Sentinel::Close.triplet(), [0, 0, 0]);
}
