//! River-crossing puzzle vertex and parameters

use crate::error::Result;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// River bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bank {
    Left,
    Right,
}

impl Bank {
    pub fn opposite(self) -> Bank {
        match self {
            Bank::Left => Bank::Right,
            Bank::Right => Bank::Left,
        }
    }

    /// 0 for the left bank, 1 for the right bank
    pub fn as_digit(self) -> u8 {
        match self {
            Bank::Left => 0,
            Bank::Right => 1,
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bank::Left => write!(f, "left"),
            Bank::Right => write!(f, "right"),
        }
    }
}

/// One complete configuration of the puzzle: who is on which bank and where
/// the boat is. Displays as `(a,b,c,d,e)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RiverState {
    pub left_cannibals: u32,
    pub left_missionaries: u32,
    pub right_cannibals: u32,
    pub right_missionaries: u32,
    pub boat: Bank,
}

impl RiverState {
    pub fn new(
        left_cannibals: u32,
        left_missionaries: u32,
        right_cannibals: u32,
        right_missionaries: u32,
        boat: Bank,
    ) -> Self {
        Self {
            left_cannibals,
            left_missionaries,
            right_cannibals,
            right_missionaries,
            boat,
        }
    }

    /// (cannibals, missionaries) on `bank`
    pub fn on(&self, bank: Bank) -> (u32, u32) {
        match bank {
            Bank::Left => (self.left_cannibals, self.left_missionaries),
            Bank::Right => (self.right_cannibals, self.right_missionaries),
        }
    }

    pub fn as_tuple(&self) -> (u32, u32, u32, u32, u8) {
        (
            self.left_cannibals,
            self.left_missionaries,
            self.right_cannibals,
            self.right_missionaries,
            self.boat.as_digit(),
        )
    }
}

impl fmt::Display for RiverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b, c, d, e) = self.as_tuple();
        write!(f, "({a},{b},{c},{d},{e})")
    }
}

impl Serialize for RiverState {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.as_tuple().serialize(serializer)
    }
}

/// Puzzle parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSpec {
    /// Number of cannibals (all start on the left bank)
    #[serde(default = "default_population")]
    pub cannibals: u32,

    /// Number of missionaries (all start on the left bank)
    #[serde(default = "default_population")]
    pub missionaries: u32,

    /// People the boat carries per crossing (at least one must row)
    #[serde(default = "default_boat_capacity")]
    pub boat_capacity: u32,
}

fn default_population() -> u32 {
    3
}

fn default_boat_capacity() -> u32 {
    2
}

impl Default for PuzzleSpec {
    fn default() -> Self {
        Self {
            cannibals: default_population(),
            missionaries: default_population(),
            boat_capacity: default_boat_capacity(),
        }
    }
}

impl PuzzleSpec {
    pub fn new(cannibals: u32, missionaries: u32, boat_capacity: u32) -> Self {
        Self {
            cannibals,
            missionaries,
            boat_capacity,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.boat_capacity == 0 {
            crate::bail_invalid!("boat capacity", "0 (the boat needs a rower)");
        }
        Ok(())
    }

    /// Everyone on the left bank with the boat
    pub fn start(&self) -> RiverState {
        RiverState::new(self.cannibals, self.missionaries, 0, 0, Bank::Left)
    }

    /// Everyone on the right bank with the boat
    pub fn goal(&self) -> RiverState {
        RiverState::new(0, 0, self.cannibals, self.missionaries, Bank::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_tuple_notation() {
        let spec = PuzzleSpec::default();
        assert_eq!(spec.start().to_string(), "(3,3,0,0,0)");
        assert_eq!(spec.goal().to_string(), "(0,0,3,3,1)");
    }

    #[test]
    fn test_serializes_as_array() {
        let state = RiverState::new(2, 2, 1, 1, Bank::Right);
        assert_eq!(serde_json::to_string(&state).unwrap(), "[2,2,1,1,1]");
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = PuzzleSpec::new(3, 3, 0).validate().unwrap_err();
        assert!(err.to_string().contains("boat capacity"));
        assert!(PuzzleSpec::default().validate().is_ok());
    }

    #[test]
    fn test_bank_helpers() {
        assert_eq!(Bank::Left.opposite(), Bank::Right);
        assert_eq!(Bank::Right.as_digit(), 1);
        let state = RiverState::new(1, 2, 2, 1, Bank::Left);
        assert_eq!(state.on(Bank::Left), (1, 2));
        assert_eq!(state.on(Bank::Right), (2, 1));
    }

    #[test]
    fn test_spec_defaults_from_partial_toml() {
        let spec: PuzzleSpec = toml::from_str("boat_capacity = 3").unwrap();
        assert_eq!(spec, PuzzleSpec::new(3, 3, 3));
    }
}
