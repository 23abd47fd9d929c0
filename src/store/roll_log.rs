use super::roll::Roll;
use thiserror::Error;

/// Number of rolls a session keeps unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("roll log is full ({capacity} rolls)")]
pub struct LogFull {
    pub capacity: usize,
}

/// Append-only, bounded sequence of rolls in the order they were entered.
#[derive(Debug, Clone)]
pub struct RollLog {
    rolls: Vec<Roll>,
    capacity: usize,
}

impl Default for RollLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl RollLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rolls: Vec::new(),
            capacity,
        }
    }

    /// Append a roll and return its 1-based ordinal.
    pub fn push(&mut self, roll: Roll) -> Result<usize, LogFull> {
        if self.is_full() {
            return Err(LogFull {
                capacity: self.capacity,
            });
        }
        self.rolls.push(roll);
        Ok(self.rolls.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Roll> {
        self.rolls.iter()
    }

    pub fn as_slice(&self) -> &[Roll] {
        &self.rolls
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.rolls.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
