use strum_macros::{Display, EnumIter, EnumString};

use crate::constants::{DeckComposition, DEFAULT_HAND_SIZE, DEFAULT_WIN_GOAL};
use crate::error::{Result, UnoError};

#[derive(Clone, Copy, Debug, Default, Display, EnumString, EnumIter, PartialEq, Eq)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MatchMode {
    /// Play one round and stop.
    SingleRound,
    /// Keep playing rounds until someone reaches the win goal.
    #[default]
    Endless,
}

/// Everything a match needs to know before the first card is dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    pub win_goal: u32,
    pub mode: MatchMode,
    pub hand_size: usize,
    pub composition: DeckComposition,
    /// Fixed seed for reproducible shuffles. Random when unset.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            win_goal: DEFAULT_WIN_GOAL,
            mode: MatchMode::default(),
            hand_size: DEFAULT_HAND_SIZE,
            composition: DeckComposition::default(),
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn with_win_goal(mut self, win_goal: u32) -> Self {
        self.win_goal = win_goal;
        self
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    pub fn with_composition(mut self, composition: DeckComposition) -> Self {
        self.composition = composition;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.win_goal == 0 {
            return Err(UnoError::InvalidWinGoal(self.win_goal));
        }
        Ok(())
    }
}
