use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// One of the four real colors. Uncolored wild cards live in [`Card::Wild`] and
/// [`Card::DrawFour`] until they are played.
#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum CardColor {
    Red,
    Green,
    Blue,
    Yellow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColoredCard {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

impl ColoredCard {
    pub fn into_played_card(self, color: CardColor) -> PlayedCard {
        PlayedCard::Colored(color, self)
    }

    fn value(&self) -> CardValue {
        match self {
            ColoredCard::Number(number) => CardValue::Number(*number),
            ColoredCard::Skip => CardValue::Skip,
            ColoredCard::Reverse => CardValue::Reverse,
            ColoredCard::DrawTwo => CardValue::DrawTwo,
        }
    }
}

/// The face value of a card, used for value matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardValue {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    DrawFour,
}

impl Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardValue::Number(number) => write!(f, "{number}"),
            CardValue::Skip => write!(f, "Skip"),
            CardValue::Reverse => write!(f, "Reverse"),
            CardValue::DrawTwo => write!(f, "Draw Two"),
            CardValue::Wild => write!(f, "Wild"),
            CardValue::DrawFour => write!(f, "Draw Four"),
        }
    }
}

/// A card in the deck or in a hand.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Card {
    Colored(CardColor, ColoredCard),
    Wild,
    DrawFour,
}

impl Card {
    pub fn is_wild(&self) -> bool {
        matches!(self, Card::Wild | Card::DrawFour)
    }

    /// `None` for wild cards that have not been played yet.
    pub fn color(&self) -> Option<CardColor> {
        match self {
            Card::Colored(color, _) => Some(*color),
            Card::Wild | Card::DrawFour => None,
        }
    }

    pub fn value(&self) -> CardValue {
        match self {
            Card::Colored(_, card) => card.value(),
            Card::Wild => CardValue::Wild,
            Card::DrawFour => CardValue::DrawFour,
        }
    }

    /// Whether this card may be played on `top`: wild cards always can, other
    /// cards need the same color or the same value.
    pub fn matches(&self, top: &PlayedCard) -> bool {
        self.is_wild() || self.color() == Some(top.color()) || self.value() == top.value()
    }

    /// Turns the card face up. Wild cards call `choose_color` exactly once to
    /// get their color; colored cards never call it.
    pub fn into_played_card(self, choose_color: impl FnOnce() -> CardColor) -> PlayedCard {
        match self {
            Card::Colored(color, card) => card.into_played_card(color),
            Card::Wild => PlayedCard::Wild(choose_color()),
            Card::DrawFour => PlayedCard::DrawFour(choose_color()),
        }
    }
}

/// The face-up card on the discard pile. Always carries a real color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayedCard {
    Colored(CardColor, ColoredCard),
    Wild(CardColor),
    DrawFour(CardColor),
}

impl PlayedCard {
    pub fn color(&self) -> CardColor {
        match self {
            PlayedCard::Colored(color, _) => *color,
            PlayedCard::Wild(color) => *color,
            PlayedCard::DrawFour(color) => *color,
        }
    }

    pub fn value(&self) -> CardValue {
        match self {
            PlayedCard::Colored(_, card) => card.value(),
            PlayedCard::Wild(_) => CardValue::Wild,
            PlayedCard::DrawFour(_) => CardValue::DrawFour,
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Colored(color, card) => write!(f, "{} {}", color, card.value()),
            Card::Wild => write!(f, "Wild"),
            Card::DrawFour => write!(f, "Draw Four"),
        }
    }
}

impl Display for PlayedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayedCard::Colored(color, card) => write!(f, "{} {}", color, card.value()),
            PlayedCard::Wild(color) => write!(f, "Wild ({color})"),
            PlayedCard::DrawFour(color) => write!(f, "Draw Four ({color})"),
        }
    }
}
