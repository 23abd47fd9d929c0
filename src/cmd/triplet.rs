//! Classification of a raw input line into a roll, a sentinel or an error.

use crate::store::Roll;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Reserved triplets that act as control instructions instead of rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    /// `7 7 7`: list every recorded roll.
    History,
    /// `8 8 8`: reprint the instructions.
    Help,
    /// `0 0 0`: close the journal and stop.
    Close,
}

impl Sentinel {
    pub fn triplet(self) -> [i64; 3] {
        match self {
            Sentinel::History => [7, 7, 7],
            Sentinel::Help => [8, 8, 8],
            Sentinel::Close => [0, 0, 0],
        }
    }
}

static SENTINELS: Lazy<HashMap<[i64; 3], Sentinel>> = Lazy::new(|| {
    [Sentinel::History, Sentinel::Help, Sentinel::Close]
        .into_iter()
        .map(|s| (s.triplet(), s))
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// Three integers, but not dice faces and not a sentinel.
    OutOfRange([i64; 3]),
    /// Anything that is not exactly three integers.
    Malformed,
}

/// A classified input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Empty,
    Roll(Roll),
    Sentinel(Sentinel),
    Invalid(InvalidInput),
}

/// Classify a single line of user input.
pub fn parse(input: &str) -> Command {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.is_empty() {
        return Command::Empty;
    }

    let Some(values) = parse_triplet(&tokens) else {
        return Command::Invalid(InvalidInput::Malformed);
    };

    classify(values)
}

/// Classify three already-parsed integers.
pub fn classify(values: [i64; 3]) -> Command {
    if let Some(sentinel) = SENTINELS.get(&values) {
        return Command::Sentinel(*sentinel);
    }

    let [a, b, c] = values;
    match Roll::new(a, b, c) {
        Some(roll) => Command::Roll(roll),
        None => Command::Invalid(InvalidInput::OutOfRange(values)),
    }
}

fn parse_triplet(tokens: &[&str]) -> Option<[i64; 3]> {
    let [a, b, c] = tokens else {
        return None;
    };
    Some([a.parse().ok()?, b.parse().ok()?, c.parse().ok()?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_face_triplet_is_a_roll() {
        for a in 1..=6 {
            for b in 1..=6 {
                for c in 1..=6 {
                    let line = format!("{a} {b} {c}");
                    assert!(matches!(parse(&line), Command::Roll(_)), "{line}");
                }
            }
        }
    }

    #[test]
    fn recognises_sentinels() {
        assert_eq!(parse("7 7 7"), Command::Sentinel(Sentinel::History));
        assert_eq!(parse("8 8 8"), Command::Sentinel(Sentinel::Help));
        assert_eq!(parse("0 0 0"), Command::Sentinel(Sentinel::Close));
    }

    #[test]
    fn tolerates_extra_whitespace() {
        assert_eq!(
            parse("  2\t5   6 \r"),
            Command::Roll(Roll::new(2, 5, 6).unwrap())
        );
        assert_eq!(parse(" 0  0 0"), Command::Sentinel(Sentinel::Close));
    }

    #[test]
    fn out_of_range_values_are_invalid() {
        for line in ["7 7 6", "1 2 7", "0 1 2", "-1 2 3", "9 9 9", "0 0 7", "100 1 1"] {
            assert!(
                matches!(parse(line), Command::Invalid(InvalidInput::OutOfRange(_))),
                "{line}"
            );
        }
    }

    #[test]
    fn non_triplets_are_malformed() {
        for line in ["1 2", "1 2 3 4", "a b c", "1 2 x", "1.5 2 3"] {
            assert_eq!(parse(line), Command::Invalid(InvalidInput::Malformed), "{line}");
        }
    }

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(parse(""), Command::Empty);
        assert_eq!(parse("   "), Command::Empty);
    }
}
