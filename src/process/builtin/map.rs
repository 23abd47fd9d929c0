use super::Builtin;
use crate::cmd::Sentinel;
use crate::error::DiceLogResult;
use crate::process::close::Close;
use crate::process::help::Help;
use crate::process::history::History;
use crate::session::Session;
use std::collections::HashMap;
use std::io::Write;

pub struct BuiltinMap {
    func_map: HashMap<Sentinel, Box<dyn Builtin>>,
}

impl Default for BuiltinMap {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinMap {
    pub fn new() -> Self {
        let mut builtin = BuiltinMap {
            func_map: HashMap::new(),
        };

        builtin.add(Sentinel::History, Box::new(History::new()));
        builtin.add(Sentinel::Help, Box::new(Help::new()));
        builtin.add(Sentinel::Close, Box::new(Close::new()));
        builtin
    }

    /// Run the builtin bound to `sentinel`, or `None` if nothing is registered.
    pub fn invoke(
        &mut self,
        sentinel: Sentinel,
        session: &mut Session,
        out: &mut dyn Write,
    ) -> Option<DiceLogResult<i32>> {
        self.func_map
            .get_mut(&sentinel)
            .map(|builtin| builtin.call(session, out))
    }

    pub fn add(&mut self, sentinel: Sentinel, builtin: Box<dyn Builtin>) {
        self.func_map.insert(sentinel, builtin);
    }

    pub fn contains(&self, sentinel: Sentinel) -> bool {
        self.func_map.contains_key(&sentinel)
    }
}
