//! Arrow directions, button slots and the orientation permutation
//!
//! An orientation assigns one of the four directions to each of the four
//! slots, with no direction repeated. Slot order is always top-left,
//! top-right, bottom-left, bottom-right.

use std::fmt;

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{ARROW_TILT_DEGREES, QUARTER_TURN_DEGREES, SLOT_COUNT};

/// Direction an arrow points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; SLOT_COUNT] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Quarter turns clockwise from up (0-3)
    pub fn index(self) -> u8 {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }

    /// Yaw applied to the arrow graphic
    pub fn yaw_degrees(self) -> f32 {
        QUARTER_TURN_DEGREES * self.index() as f32
    }
}

/// Fixed arrow/button position on the module face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Slot {
    pub const ALL: [Slot; SLOT_COUNT] =
        [Slot::TopLeft, Slot::TopRight, Slot::BottomLeft, Slot::BottomRight];

    pub fn index(self) -> usize {
        match self {
            Slot::TopLeft => 0,
            Slot::TopRight => 1,
            Slot::BottomLeft => 2,
            Slot::BottomRight => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Button location as shown in the log
    pub fn label(self) -> &'static str {
        match self {
            Slot::TopLeft => "Top left",
            Slot::TopRight => "Top right",
            Slot::BottomLeft => "Bottom left",
            Slot::BottomRight => "Bottom right",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "0" | "tl" | "top-left" | "topleft" => Some(Slot::TopLeft),
            "1" | "tr" | "top-right" | "topright" => Some(Slot::TopRight),
            "2" | "bl" | "bottom-left" | "bottomleft" => Some(Slot::BottomLeft),
            "3" | "br" | "bottom-right" | "bottomright" => Some(Slot::BottomRight),
            _ => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One direction per slot, every direction used exactly once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Orientation([Direction; SLOT_COUNT]);

impl Orientation {
    /// Every arrow pointing its own slot index: up, right, down, left
    pub const IDENTITY: Orientation = Orientation(Direction::ALL);

    /// Returns None unless `directions` is a permutation
    pub fn new(directions: [Direction; SLOT_COUNT]) -> Option<Self> {
        let mut seen = [false; SLOT_COUNT];
        for d in directions {
            let i = d.index() as usize;
            if seen[i] {
                return None;
            }
            seen[i] = true;
        }
        Some(Self(directions))
    }

    /// Parse a 4-digit key such as `"3102"`
    pub fn from_key(key: &str) -> Option<Self> {
        let bytes = key.as_bytes();
        if bytes.len() != SLOT_COUNT {
            return None;
        }
        let mut directions = [Direction::Up; SLOT_COUNT];
        for (slot, &b) in bytes.iter().enumerate() {
            let digit = b.checked_sub(b'0')?;
            directions[slot] = Direction::from_index(digit)?;
        }
        Self::new(directions)
    }

    /// Forward Fisher-Yates over the four directions
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut directions = Direction::ALL;
        for i in 0..SLOT_COUNT {
            let j = rng.random_range(i..SLOT_COUNT);
            directions.swap(i, j);
        }
        Self(directions)
    }

    /// All 24 orientations in lexicographic key order
    pub fn all() -> Vec<Orientation> {
        let mut out = Vec::with_capacity(24);
        for a in Direction::ALL {
            for b in Direction::ALL {
                for c in Direction::ALL {
                    for d in Direction::ALL {
                        if let Some(o) = Self::new([a, b, c, d]) {
                            out.push(o);
                        }
                    }
                }
            }
        }
        out
    }

    pub fn direction(&self, slot: Slot) -> Direction {
        self.0[slot.index()]
    }

    pub fn directions(&self) -> [Direction; SLOT_COUNT] {
        self.0
    }

    /// Direction digits concatenated in slot order
    pub fn key(&self) -> String {
        self.0.iter().map(|d| char::from(b'0' + d.index())).collect()
    }

    /// Euler angles (degrees) for the arrow in `slot`
    pub fn arrow_rotation(&self, slot: Slot) -> Vec3 {
        Vec3::new(ARROW_TILT_DEGREES, self.direction(slot).yaw_degrees(), 0.0)
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl TryFrom<String> for Orientation {
    type Error = String;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        Self::from_key(&key).ok_or_else(|| format!("not an orientation key: {key:?}"))
    }
}

impl From<Orientation> for String {
    fn from(o: Orientation) -> Self {
        o.key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_all_orientations_are_distinct_permutations() {
        let all = Orientation::all();
        assert_eq!(all.len(), 24);

        let keys: HashSet<String> = all.iter().map(|o| o.key()).collect();
        assert_eq!(keys.len(), 24);
        assert_eq!(all.first().map(|o| o.key()).as_deref(), Some("0123"));
        assert_eq!(all.last().map(|o| o.key()).as_deref(), Some("3210"));
    }

    #[test]
    fn test_from_key() {
        let o = Orientation::from_key("3102").unwrap();
        assert_eq!(o.direction(Slot::TopLeft), Direction::Left);
        assert_eq!(o.direction(Slot::TopRight), Direction::Right);
        assert_eq!(o.direction(Slot::BottomLeft), Direction::Up);
        assert_eq!(o.direction(Slot::BottomRight), Direction::Down);
        assert_eq!(o.key(), "3102");
        assert_eq!(o.to_string(), "3102");

        // Repeats, bad digits and wrong lengths
        assert!(Orientation::from_key("0012").is_none());
        assert!(Orientation::from_key("0124").is_none());
        assert!(Orientation::from_key("012").is_none());
        assert!(Orientation::from_key("01234").is_none());
        assert!(Orientation::from_key("01a3").is_none());
        assert!(Orientation::from_key("").is_none());
    }

    #[test]
    fn test_new_rejects_repeats() {
        use Direction::*;
        assert!(Orientation::new([Up, Up, Down, Left]).is_none());
        assert_eq!(Orientation::new([Up, Right, Down, Left]), Some(Orientation::IDENTITY));
    }

    #[test]
    fn test_arrow_rotation() {
        let o = Orientation::from_key("0123").unwrap();
        assert_eq!(o.arrow_rotation(Slot::TopLeft), Vec3::new(90.0, 0.0, 0.0));
        assert_eq!(o.arrow_rotation(Slot::TopRight), Vec3::new(90.0, 90.0, 0.0));
        assert_eq!(o.arrow_rotation(Slot::BottomLeft), Vec3::new(90.0, 180.0, 0.0));
        assert_eq!(o.arrow_rotation(Slot::BottomRight), Vec3::new(90.0, 270.0, 0.0));
    }

    #[test]
    fn test_slot_parsing() {
        assert_eq!(Slot::from_str("0"), Some(Slot::TopLeft));
        assert_eq!(Slot::from_str("TR"), Some(Slot::TopRight));
        assert_eq!(Slot::from_str(" bottom-left "), Some(Slot::BottomLeft));
        assert_eq!(Slot::from_str("3"), Some(Slot::BottomRight));
        assert_eq!(Slot::from_str("4"), None);
        assert_eq!(Slot::from_str("middle"), None);
        assert_eq!(Slot::from_index(4), None);
        for slot in Slot::ALL {
            assert_eq!(Slot::from_index(slot.index()), Some(slot));
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let o = Orientation::shuffled(&mut rng);
            assert!(Orientation::new(o.directions()).is_some());
        }
    }

    #[test]
    fn test_shuffle_is_uniform() {
        // Chi-square with 23 degrees of freedom; 49.73 is the p = 0.001 cutoff
        const TRIALS: usize = 24_000;
        let mut rng = Pcg32::seed_from_u64(12345);
        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..TRIALS {
            *counts.entry(Orientation::shuffled(&mut rng).key()).or_default() += 1;
        }
        assert_eq!(counts.len(), 24);

        let expected = TRIALS as f64 / 24.0;
        let chi_square: f64 = counts
            .values()
            .map(|&n| {
                let diff = n as f64 - expected;
                diff * diff / expected
            })
            .sum();
        assert!(chi_square < 49.73, "chi-square too high: {chi_square}");
    }

    #[test]
    fn test_serde_as_key() {
        let o = Orientation::from_key("2310").unwrap();
        let json = serde_json::to_string(&o).unwrap();
        assert_eq!(json, "\"2310\"");
        let back: Orientation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, o);
        assert!(serde_json::from_str::<Orientation>("\"1111\"").is_err());
    }
}
