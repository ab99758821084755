use tracing::{debug, warn};

use crate::card::{CardColor, CardValue, PlayedCard};
use crate::chooser::{ColorChooser, MoveChoice, MoveChooser, TurnView};
use crate::constants::{DRAW_FOUR_PENALTY, DRAW_TWO_PENALTY};
use crate::deck::Deck;
use crate::player::Player;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn step(&self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum TurnActionResult {
    Neutral,
    /// The player chose to draw instead of playing.
    SelfDraw { drawn: usize },
    /// The player had nothing to play and drew automatically.
    ForcedDraw { drawn: usize },
    Skip { skipped: usize },
    Reverse,
    DrawTwo { target: usize, drawn: usize },
    Wild(CardColor),
    DrawFour { color: CardColor, target: usize, drawn: usize },
}

#[derive(Debug, PartialEq, Eq)]
pub struct PlayTurnResult {
    /// Seat of the player who took the turn.
    pub player: usize,
    pub played: Option<PlayedCard>,
    pub turn_action_result: TurnActionResult,
    pub won: bool,
}

/// Turn order and the face-up card.
///
/// `turn_index` is never reduced; it only moves by the direction's step and is
/// mapped onto a seat with `rem_euclid`, so it may go as negative as it likes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnState {
    pub turn_index: isize,
    pub direction: Direction,
    pub top_card: PlayedCard,
}

impl TurnState {
    pub(crate) fn new(top_card: PlayedCard) -> Self {
        Self {
            turn_index: 0,
            direction: Direction::Forward,
            top_card,
        }
    }

    fn seat_at(&self, offset: isize, players_count: usize) -> usize {
        (self.turn_index + offset).rem_euclid(players_count as isize) as usize
    }

    pub(crate) fn current_player_index(&self, players_count: usize) -> usize {
        self.seat_at(0, players_count)
    }

    pub(crate) fn next_player_index(&self, players_count: usize) -> usize {
        self.seat_at(self.direction.step(), players_count)
    }

    pub(crate) fn advance(&mut self) {
        self.turn_index += self.direction.step();
    }

    pub(crate) fn reverse(&mut self) {
        self.direction = self.direction.reversed();
    }
}

/// Runs single turns against a table of players and a deck it does not own.
/// Callers guarantee the table is never empty.
#[derive(Debug)]
pub(crate) struct TurnEngine {
    state: TurnState,
}

impl TurnEngine {
    pub(crate) fn new(top_card: PlayedCard) -> Self {
        Self {
            state: TurnState::new(top_card),
        }
    }

    pub(crate) fn state(&self) -> &TurnState {
        &self.state
    }

    pub(crate) fn top_card(&self) -> &PlayedCard {
        &self.state.top_card
    }

    pub(crate) fn direction(&self) -> Direction {
        self.state.direction
    }

    pub(crate) fn current_player_index(&self, players_count: usize) -> usize {
        self.state.current_player_index(players_count)
    }

    pub(crate) fn next_player_index(&self, players_count: usize) -> usize {
        self.state.next_player_index(players_count)
    }

    /// Plays one turn for the current player.
    ///
    /// When the turn does not end the round, the turn index has already moved on
    /// to the next player by the time this returns.
    pub(crate) fn play_turn<M, C>(
        &mut self,
        players: &mut [Player],
        deck: &mut Deck,
        moves: &mut M,
        colors: &mut C,
    ) -> PlayTurnResult
    where
        M: MoveChooser + ?Sized,
        C: ColorChooser + ?Sized,
    {
        let players_count = players.len();
        let seat = self.current_player_index(players_count);
        let player = &mut players[seat];
        let legal_moves = player.legal_moves(&self.state.top_card);

        let choice = if legal_moves.is_empty() {
            None
        } else {
            Some(self.ask_for_move(player, seat, &legal_moves, moves))
        };

        let (played, turn_action_result) = match choice {
            None => {
                let drawn = player.draw_cards(deck, 1);
                debug!(player = player.name(), drawn, "no legal move, drawing");
                (None, TurnActionResult::ForcedDraw { drawn })
            }
            Some(MoveChoice::Draw) => {
                let drawn = player.draw_cards(deck, 1);
                debug!(player = player.name(), drawn, "drawing instead of playing");
                (None, TurnActionResult::SelfDraw { drawn })
            }
            Some(MoveChoice::Play(index)) => {
                let card = player.remove_card(index);
                let played = card.into_played_card(|| Self::ask_for_color(player, colors));
                debug!(player = player.name(), card = %played, "playing card");
                self.state.top_card = played.clone();
                let result = self.apply_effect(&played, players, deck);
                (Some(played), result)
            }
        };

        // Only a card leaving the hand can win the round.
        let won = played.is_some() && players[seat].has_won();
        if !won {
            self.state.advance();
        }

        PlayTurnResult {
            player: seat,
            played,
            turn_action_result,
            won,
        }
    }

    fn ask_for_move<M>(
        &self,
        player: &Player,
        seat: usize,
        legal_moves: &[usize],
        moves: &mut M,
    ) -> MoveChoice
    where
        M: MoveChooser + ?Sized,
    {
        let view = TurnView {
            seat,
            player,
            top_card: &self.state.top_card,
            legal_moves,
            direction: self.state.direction,
        };

        loop {
            match moves.choose_move(&view) {
                MoveChoice::Play(index) if !legal_moves.contains(&index) => {
                    warn!(player = player.name(), index, "rejected illegal move, asking again");
                }
                choice => return choice,
            }
        }
    }

    fn ask_for_color<C>(player: &Player, colors: &mut C) -> CardColor
    where
        C: ColorChooser + ?Sized,
    {
        loop {
            match colors.choose_color(player) {
                Some(color) => return color,
                None => warn!(player = player.name(), "no color chosen, asking again"),
            }
        }
    }

    fn apply_effect(
        &mut self,
        played: &PlayedCard,
        players: &mut [Player],
        deck: &mut Deck,
    ) -> TurnActionResult {
        let players_count = players.len();

        match played.value() {
            CardValue::Skip => {
                let skipped = self.next_player_index(players_count);
                self.state.advance();
                debug!(skipped, "skip");
                TurnActionResult::Skip { skipped }
            }
            CardValue::Reverse => {
                self.state.reverse();
                debug!(direction = ?self.state.direction, "reverse");
                TurnActionResult::Reverse
            }
            CardValue::DrawTwo => {
                let target = self.next_player_index(players_count);
                let drawn = players[target].draw_cards(deck, DRAW_TWO_PENALTY);
                debug!(target, drawn, "draw two");
                TurnActionResult::DrawTwo { target, drawn }
            }
            CardValue::DrawFour => {
                let target = self.next_player_index(players_count);
                let drawn = players[target].draw_cards(deck, DRAW_FOUR_PENALTY);
                debug!(target, drawn, "draw four");
                TurnActionResult::DrawFour {
                    color: played.color(),
                    target,
                    drawn,
                }
            }
            CardValue::Wild => TurnActionResult::Wild(played.color()),
            CardValue::Number(_) => TurnActionResult::Neutral,
        }
    }
}
