use crate::error::DiceLogResult;
use crate::process::builtin::Builtin;
use crate::session::Session;
use std::io::Write;

/// Instructions shown at startup and on `8 8 8`.
pub const INSTRUCTIONS: [&str; 6] = [
    "指令如下：",
    "1.直接輸入骰子點數 用空格隔開 Example: 2 5 6",
    "2.想要查看指令的話 請輸入8 8 8",
    "3.如果要查看歷史紀錄 請輸入7 7 7",
    "4.關閉檔案後才可將歷史資料寫入檔案內,關閉檔案指令為0 0 0",
    "5.關閉程式前必須先關閉檔案，否則紀錄會遺失",
];

/// Builtin that reprints the instructions.
pub struct Help {}

impl Builtin for Help {
    fn call(&mut self, _session: &mut Session, out: &mut dyn Write) -> DiceLogResult<i32> {
        show_instructions(out)?;
        Ok(0)
    }
}

impl Help {
    pub fn new() -> Self {
        Help {}
    }
}

pub fn show_instructions(out: &mut dyn Write) -> DiceLogResult<()> {
    for line in INSTRUCTIONS {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
