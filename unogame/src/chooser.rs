//! The two decisions the engine leaves to whoever is playing: which card to
//! play and which color a wild card becomes.

use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;

use crate::card::{CardColor, PlayedCard};
use crate::player::Player;
use crate::turn::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveChoice {
    /// Play the card at this hand index. Must be one of the legal moves.
    Play(usize),
    /// Draw a card instead of playing. This ends the turn.
    Draw,
}

/// What a move chooser gets to see when asked for a move.
#[derive(Debug)]
pub struct TurnView<'a> {
    pub seat: usize,
    pub player: &'a Player,
    pub top_card: &'a PlayedCard,
    pub legal_moves: &'a [usize],
    pub direction: Direction,
}

pub trait MoveChooser {
    /// Asked again until it returns [`MoveChoice::Draw`] or a legal index.
    fn choose_move(&mut self, view: &TurnView<'_>) -> MoveChoice;
}

pub trait ColorChooser {
    /// `None` stands for input that does not name a color; the engine asks again.
    fn choose_color(&mut self, player: &Player) -> Option<CardColor>;
}

impl<F> MoveChooser for F
where
    F: FnMut(&TurnView<'_>) -> MoveChoice,
{
    fn choose_move(&mut self, view: &TurnView<'_>) -> MoveChoice {
        self(view)
    }
}

impl<F> ColorChooser for F
where
    F: FnMut(&Player) -> Option<CardColor>,
{
    fn choose_color(&mut self, player: &Player) -> Option<CardColor> {
        self(player)
    }
}

/// Plays the first legal card and names the color it holds the most of.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalBot;

impl MoveChooser for FirstLegalBot {
    fn choose_move(&mut self, view: &TurnView<'_>) -> MoveChoice {
        view.legal_moves
            .first()
            .map_or(MoveChoice::Draw, |index| MoveChoice::Play(*index))
    }
}

impl ColorChooser for FirstLegalBot {
    fn choose_color(&mut self, player: &Player) -> Option<CardColor> {
        // Ties go to the earlier color.
        CardColor::iter().rev().max_by_key(|color| {
            player
                .hand()
                .iter()
                .filter(|card| card.color() == Some(*color))
                .count()
        })
    }
}

/// Picks uniformly among the legal moves and the four colors.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveChooser for RandomBot<R> {
    fn choose_move(&mut self, view: &TurnView<'_>) -> MoveChoice {
        view.legal_moves
            .choose(&mut self.rng)
            .map_or(MoveChoice::Draw, |index| MoveChoice::Play(*index))
    }
}

impl<R: Rng> ColorChooser for RandomBot<R> {
    fn choose_color(&mut self, _player: &Player) -> Option<CardColor> {
        CardColor::iter()
            .collect::<Vec<_>>()
            .choose(&mut self.rng)
            .copied()
    }
}
