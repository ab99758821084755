use strum::EnumCount;
use strum_macros::{Display, EnumIter, EnumString};

use crate::card::CardColor;
use crate::error::{Result, UnoError};

pub const MAX_CARD_NUMBER: u8 = 9;
pub const DEFAULT_HAND_SIZE: usize = 5;
pub const DEFAULT_WIN_GOAL: u32 = 3;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

/// Cards drawn by the next player when a Draw Two is played.
pub const DRAW_TWO_PENALTY: usize = 2;
/// Cards drawn by the next player when a Draw Four is played.
pub const DRAW_FOUR_PENALTY: usize = 4;

/// How many of each card a deck holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeckComposition {
    pub number_cards_per_color: &'static [u8],
    pub skip_cards_per_color: u8,
    pub reverse_cards_per_color: u8,
    pub draw_two_cards_per_color: u8,
    pub wild_cards: u8,
    pub draw_four_cards: u8,
}

impl DeckComposition {
    /// One of every number and action card per color, four of each wild: 60 cards.
    pub const CLASSIC: DeckComposition = DeckComposition {
        number_cards_per_color: &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        skip_cards_per_color: 1,
        reverse_cards_per_color: 1,
        draw_two_cards_per_color: 1,
        wild_cards: 4,
        draw_four_cards: 4,
    };

    /// The official 108 card deck.
    pub const STANDARD: DeckComposition = DeckComposition {
        number_cards_per_color: &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9],
        skip_cards_per_color: 2,
        reverse_cards_per_color: 2,
        draw_two_cards_per_color: 2,
        wild_cards: 4,
        draw_four_cards: 4,
    };

    /// Two of every number per color and nothing else: 80 cards.
    pub const NUMBERS_ONLY: DeckComposition = DeckComposition {
        number_cards_per_color: &[0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9],
        skip_cards_per_color: 0,
        reverse_cards_per_color: 0,
        draw_two_cards_per_color: 0,
        wild_cards: 0,
        draw_four_cards: 0,
    };

    pub const fn cards_per_color(&self) -> usize {
        self.number_cards_per_color.len()
            + self.skip_cards_per_color as usize
            + self.reverse_cards_per_color as usize
            + self.draw_two_cards_per_color as usize
    }

    /// Checks that every number is a real card face and that a starting card
    /// can exist at all.
    pub fn validate(&self) -> Result<()> {
        if let Some(number) = self
            .number_cards_per_color
            .iter()
            .find(|number| **number > MAX_CARD_NUMBER)
        {
            return Err(UnoError::InvalidCardNumber(*number));
        }
        if self.cards_per_color() == 0 {
            return Err(UnoError::NoColoredCards);
        }
        Ok(())
    }

    pub const fn total(&self) -> usize {
        self.cards_per_color() * CardColor::COUNT
            + self.wild_cards as usize
            + self.draw_four_cards as usize
    }
}

impl Default for DeckComposition {
    fn default() -> Self {
        DeckComposition::CLASSIC
    }
}

/// Named deck presets, parseable from configuration text.
#[derive(Clone, Copy, Debug, Default, Display, EnumString, EnumIter, PartialEq, Eq)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DeckPreset {
    #[default]
    Classic,
    Standard,
    NumbersOnly,
}

impl DeckPreset {
    pub fn composition(&self) -> DeckComposition {
        match self {
            DeckPreset::Classic => DeckComposition::CLASSIC,
            DeckPreset::Standard => DeckComposition::STANDARD,
            DeckPreset::NumbersOnly => DeckComposition::NUMBERS_ONLY,
        }
    }
}
