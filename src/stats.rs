//! Big/small and odd/even classification of rolls, plus session summaries.

use crate::store::Roll;
use std::fmt;

/// Sums at or above this value count as "big".
pub const BIG_THRESHOLD: u32 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All three dice show the same face.
    Triple(u8),
    Big,
    Small,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Odd,
    Even,
    /// Triples are not counted as odd or even.
    None,
}

pub fn classify(roll: &Roll) -> Outcome {
    let [a, b, c] = roll.dice();
    if a == b && b == c {
        Outcome::Triple(a)
    } else if roll.sum() >= BIG_THRESHOLD {
        Outcome::Big
    } else {
        Outcome::Small
    }
}

pub fn parity(roll: &Roll) -> Parity {
    match classify(roll) {
        Outcome::Triple(_) => Parity::None,
        _ if roll.sum() % 2 == 0 => Parity::Even,
        _ => Parity::Odd,
    }
}

/// Human readable label, e.g. `大 13` or `豹子 3 (3-3-3) 9`.
pub fn label(roll: &Roll) -> String {
    let sum = roll.sum();
    match classify(roll) {
        Outcome::Triple(face) => format!("豹子 {face} ({face}-{face}-{face}) {sum}"),
        Outcome::Big => format!("大 {sum}"),
        Outcome::Small => format!("小 {sum}"),
    }
}

/// Two dice share a face and the third differs.
pub fn is_double(roll: &Roll) -> bool {
    let [a, b, c] = roll.dice();
    let triple = a == b && b == c;
    !triple && (a == b || b == c || a == c)
}

/// Three distinct consecutive faces, in any order.
pub fn is_straight(roll: &Roll) -> bool {
    let mut dice = roll.dice();
    dice.sort_unstable();
    dice[0] + 1 == dice[1] && dice[1] + 1 == dice[2]
}

/// Longest run of consecutive rolls with the same outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Streaks {
    pub big: usize,
    pub small: usize,
    pub triple: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub total: u64,
    pub big: usize,
    pub small: usize,
    pub triples: usize,
    pub odd: usize,
    pub even: usize,
    /// How often each face showed, indexed by `face - 1`.
    pub faces: [usize; 6],
    pub doubles: usize,
    pub straights: usize,
    /// Triples per face, indexed by `face - 1`.
    pub triple_faces: [usize; 6],
    pub longest: Streaks,
}

impl Summary {
    pub fn from_rolls<'a>(rolls: impl IntoIterator<Item = &'a Roll>) -> Self {
        let mut summary = Summary::default();
        let mut previous: Option<Outcome> = None;
        let mut run = 0;

        for roll in rolls {
            summary.count += 1;
            summary.total += u64::from(roll.sum());
            for face in roll.dice() {
                summary.faces[usize::from(face - 1)] += 1;
            }

            let outcome = classify(roll);
            match outcome {
                Outcome::Triple(face) => {
                    summary.triples += 1;
                    summary.triple_faces[usize::from(face - 1)] += 1;
                }
                Outcome::Big => summary.big += 1,
                Outcome::Small => summary.small += 1,
            }
            match parity(roll) {
                Parity::Odd => summary.odd += 1,
                Parity::Even => summary.even += 1,
                Parity::None => {}
            }
            if is_double(roll) {
                summary.doubles += 1;
            }
            if is_straight(roll) {
                summary.straights += 1;
            }

            run = match previous {
                Some(prev) if same_kind(prev, outcome) => run + 1,
                _ => 1,
            };
            previous = Some(outcome);
            let longest = match outcome {
                Outcome::Triple(_) => &mut summary.longest.triple,
                Outcome::Big => &mut summary.longest.big,
                Outcome::Small => &mut summary.longest.small,
            };
            *longest = (*longest).max(run);
        }
        summary
    }

    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.total as f64 / self.count as f64)
        }
    }

    /// Faces seen most often; empty before the first roll.
    pub fn hot_faces(&self) -> Vec<u8> {
        self.faces_matching(self.faces.iter().max().copied())
    }

    /// Faces seen least often; empty before the first roll.
    pub fn cold_faces(&self) -> Vec<u8> {
        self.faces_matching(self.faces.iter().min().copied())
    }

    fn faces_matching(&self, target: Option<usize>) -> Vec<u8> {
        if self.count == 0 {
            return Vec::new();
        }
        (1..=6u8)
            .zip(self.faces)
            .filter(|(_, count)| Some(*count) == target)
            .map(|(face, _)| face)
            .collect()
    }
}

/// Triples of different faces still continue a triple run.
fn same_kind(a: Outcome, b: Outcome) -> bool {
    std::mem::discriminant(&a) == std::mem::discriminant(&b)
}

fn join_faces(faces: &[u8]) -> String {
    faces
        .iter()
        .map(|face| face.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(mean) = self.mean() else {
            return write!(f, "(尚無紀錄)");
        };

        writeln!(
            f,
            "統計：共{}次 大{} 小{} 豹子{} 單{} 雙{} 平均{:.2}",
            self.count, self.big, self.small, self.triples, self.odd, self.even, mean
        )?;

        write!(f, "點數：")?;
        for (face, count) in (1..=6).zip(self.faces) {
            let sep = if face == 1 { "" } else { " " };
            write!(f, "{sep}{face}點{count}")?;
        }
        writeln!(f)?;

        write!(
            f,
            "牌型：對子{} 順子{} 豹子{}",
            self.doubles, self.straights, self.triples
        )?;
        let by_face: Vec<String> = (1..=6)
            .zip(self.triple_faces)
            .filter(|(_, count)| *count > 0)
            .map(|(face, count)| format!("{face}點×{count}"))
            .collect();
        if !by_face.is_empty() {
            write!(f, " ({})", by_face.join(" "))?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "最長連續：大{} 小{} 豹子{}",
            self.longest.big, self.longest.small, self.longest.triple
        )?;
        write!(
            f,
            "熱門：{} 冷門：{}",
            join_faces(&self.hot_faces()),
            join_faces(&self.cold_faces())
        )
    }
}
