use std::fmt;

/// Lowest face of a six-sided die.
pub const MIN_FACE: u8 = 1;
/// Highest face of a six-sided die.
pub const MAX_FACE: u8 = 6;

/// A single recorded throw of three dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Roll {
    dice: [u8; 3],
}

impl Roll {
    /// Build a roll when every value is a valid die face.
    pub fn new(a: i64, b: i64, c: i64) -> Option<Self> {
        Some(Self {
            dice: [face(a)?, face(b)?, face(c)?],
        })
    }

    pub fn dice(&self) -> [u8; 3] {
        self.dice
    }

    pub fn sum(&self) -> u32 {
        self.dice.iter().map(|&d| u32::from(d)).sum()
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.dice;
        write!(f, "{a} {b} {c}")
    }
}

fn face(value: i64) -> Option<u8> {
    u8::try_from(value)
        .ok()
        .filter(|v| (MIN_FACE..=MAX_FACE).contains(v))
}
