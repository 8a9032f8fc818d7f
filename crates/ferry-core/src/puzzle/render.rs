//! Text frames for a solved crossing sequence

use crate::puzzle::state::{Bank, PuzzleSpec, RiverState};
use serde::Serialize;
use std::fmt;

const WATER: &str = "~~~~~~";
const BOAT: &str = "\\_/";

/// People carried by one crossing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Crossing {
    pub cannibals: u32,
    pub missionaries: u32,
    pub toward: Bank,
}

fn cannibals(count: u32) -> String {
    match count {
        1 => "1 cannibal".to_string(),
        n => format!("{n} cannibals"),
    }
}

fn missionaries(count: u32) -> String {
    match count {
        1 => "1 missionary".to_string(),
        n => format!("{n} missionaries"),
    }
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let people = match (self.cannibals, self.missionaries) {
            (c, 0) => cannibals(c),
            (0, m) => missionaries(m),
            (c, m) => format!("{} and {}", cannibals(c), missionaries(m)),
        };
        write!(f, "{people} cross to the {} bank", self.toward)
    }
}

/// The crossing that turns `from` into `to`, if the boat changed banks
pub fn describe_move(from: &RiverState, to: &RiverState) -> Option<Crossing> {
    if from.boat == to.boat {
        return None;
    }
    Some(Crossing {
        cannibals: from.left_cannibals.abs_diff(to.left_cannibals),
        missionaries: from.left_missionaries.abs_diff(to.left_missionaries),
        toward: to.boat,
    })
}

fn bank_text(cannibals: u32, missionaries: u32) -> String {
    let c = "C".repeat(cannibals as usize);
    let m = "M".repeat(missionaries as usize);
    match (c.is_empty(), m.is_empty()) {
        (false, false) => format!("{c} {m}"),
        _ => format!("{c}{m}"),
    }
}

/// One line showing both banks with the boat moored on its side
pub fn render_state(spec: &PuzzleSpec, state: &RiverState) -> String {
    let width = (spec.cannibals + spec.missionaries + 1) as usize;
    let left = bank_text(state.left_cannibals, state.left_missionaries);
    let right = bank_text(state.right_cannibals, state.right_missionaries);
    let river = match state.boat {
        Bank::Left => format!("{BOAT}{WATER}"),
        Bank::Right => format!("{WATER}{BOAT}"),
    };
    format!("{left:>width$} |{river}| {right}")
        .trim_end()
        .to_string()
}

/// One frame per vertex of `path`: a header naming the step, state and
/// crossing taken to reach it, followed by the banks line.
pub fn render_path(spec: &PuzzleSpec, path: &[RiverState]) -> Vec<String> {
    path.iter()
        .enumerate()
        .map(|(step, state)| {
            let header = match step
                .checked_sub(1)
                .and_then(|prev| describe_move(&path[prev], state))
            {
                Some(crossing) => format!("step {step} {state}: {crossing}"),
                None => format!("step {step} {state}"),
            };
            format!("{header}\n  {}", render_state(spec, state))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_state_start_and_goal() {
        let spec = PuzzleSpec::default();
        assert_eq!(render_state(&spec, &spec.start()), "CCC MMM |\\_/~~~~~~|");
        assert_eq!(
            render_state(&spec, &spec.goal()),
            "        |~~~~~~\\_/| CCC MMM"
        );
    }

    #[test]
    fn test_render_state_pads_left_bank() {
        let spec = PuzzleSpec::default();
        let state = RiverState::new(1, 3, 2, 0, Bank::Right);
        assert_eq!(render_state(&spec, &state), "  C MMM |~~~~~~\\_/| CC");
    }

    #[test]
    fn test_describe_move() {
        let from = RiverState::new(3, 3, 0, 0, Bank::Left);
        let to = RiverState::new(2, 2, 1, 1, Bank::Right);
        let crossing = describe_move(&from, &to).unwrap();
        assert_eq!(crossing.cannibals, 1);
        assert_eq!(crossing.missionaries, 1);
        assert_eq!(
            crossing.to_string(),
            "1 cannibal and 1 missionary cross to the right bank"
        );
        assert!(describe_move(&from, &from).is_none());
    }

    #[test]
    fn test_crossing_plurals() {
        let crossing = Crossing {
            cannibals: 0,
            missionaries: 2,
            toward: Bank::Left,
        };
        assert_eq!(crossing.to_string(), "2 missionaries cross to the left bank");
        let crossing = Crossing {
            cannibals: 2,
            missionaries: 0,
            toward: Bank::Right,
        };
        assert_eq!(crossing.to_string(), "2 cannibals cross to the right bank");
    }

    #[test]
    fn test_render_path_frames() {
        let spec = PuzzleSpec::default();
        let path = vec![spec.start(), RiverState::new(1, 3, 2, 0, Bank::Right)];
        let frames = render_path(&spec, &path);
        assert_eq!(frames.len(), 2);
        assert!(frames[0].starts_with("step 0 (3,3,0,0,0)\n"));
        assert!(frames[1].starts_with("step 1 (1,3,2,0,1): 2 cannibals cross to the right bank\n"));
        assert!(render_path(&spec, &[]).is_empty());
    }
}
