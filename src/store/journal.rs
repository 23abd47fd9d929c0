//! The on-disk text journal that mirrors every recorded roll.

use super::roll::Roll;
use crate::error::{DiceLogError, DiceLogResult};
use log::{debug, info};
use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::rc::Rc;

/// Lines written at the top of every journal: the instructions, then the record layout.
/// The file copy of the example has no space after the colon, unlike the console text.
pub const HEADER: [&str; 8] = [
    "指令如下：",
    "1.直接輸入骰子點數 用空格隔開 Example:2 5 6",
    "2.想要查看指令的話 請輸入8 8 8",
    "3.如果要查看歷史紀錄 請輸入7 7 7",
    "4.關閉檔案後才可將歷史資料寫入檔案內,關閉檔案指令為0 0 0",
    "5.關閉程式前必須先關閉檔案，否則紀錄會遺失",
    "格式為:",
    "序號 骰子1 骰子2 骰子3",
];

/// Destination for journal output.
pub enum JournalSink {
    File(BufWriter<File>),
    Buffer(Rc<RefCell<Vec<u8>>>),
}

impl Write for JournalSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            JournalSink::File(file) => file.write(buf),
            JournalSink::Buffer(buffer) => buffer.borrow_mut().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            JournalSink::File(file) => file.flush(),
            JournalSink::Buffer(_) => Ok(()),
        }
    }
}

pub struct Journal {
    sink: Option<JournalSink>,
}

impl Journal {
    /// Create (or truncate) the journal file and write its header.
    pub fn create(path: &Path) -> DiceLogResult<Self> {
        let file = File::create(path).map_err(|source| DiceLogError::OpenLog {
            path: path.to_path_buf(),
            source,
        })?;
        info!("opened journal at {}", path.display());

        Self::from_sink(JournalSink::File(BufWriter::new(file)))
    }

    /// Wrap an arbitrary sink and write the header to it.
    pub fn from_sink(sink: JournalSink) -> DiceLogResult<Self> {
        let mut journal = Self { sink: Some(sink) };
        journal.write_header()?;
        Ok(journal)
    }

    fn write_header(&mut self) -> DiceLogResult<()> {
        let sink = self.sink_mut()?;
        for line in HEADER {
            writeln!(sink, "{line}")?;
        }
        Ok(())
    }

    /// Append the record line for the roll with the given 1-based ordinal.
    pub fn record(&mut self, ordinal: usize, roll: &Roll) -> DiceLogResult<()> {
        let sink = self.sink_mut()?;
        writeln!(sink, "{}", format_record(ordinal, roll))?;
        debug!("journaled roll #{ordinal}: {roll}");
        Ok(())
    }

    /// Flush and release the sink. Closing twice is a no-op.
    pub fn close(&mut self) -> DiceLogResult<()> {
        if let Some(mut sink) = self.sink.take() {
            sink.flush()?;
            info!("journal closed");
        }
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.sink.is_some()
    }

    fn sink_mut(&mut self) -> DiceLogResult<&mut JournalSink> {
        self.sink.as_mut().ok_or(DiceLogError::JournalClosed)
    }
}

/// Render the journal line for a roll, e.g. `第3個：2 5 6`.
pub fn format_record(ordinal: usize, roll: &Roll) -> String {
    format!("第{ordinal}個：{roll}")
}
