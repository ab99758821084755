use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, info};

use crate::card::{Card, PlayedCard};
use crate::chooser::{ColorChooser, MoveChooser};
use crate::constants::{DeckComposition, MAX_PLAYERS, MIN_PLAYERS};
use crate::deck::Deck;
use crate::error::{Result, UnoError};
use crate::player::Player;
use crate::turn::{Direction, PlayTurnResult, TurnActionResult, TurnEngine, TurnState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundState {
    AwaitingMove { player: usize },
    RoundOver(RoundOutcome),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Won { winner: usize, name: String },
    /// The deck is empty and nobody can play, so nothing can change any more.
    Blocked,
}

impl RoundOutcome {
    pub fn winner_name(&self) -> Option<&str> {
        match self {
            RoundOutcome::Won { name, .. } => Some(name),
            RoundOutcome::Blocked => None,
        }
    }
}

pub(crate) fn validate_player_names(names: &[String]) -> Result<()> {
    if names.len() < MIN_PLAYERS {
        return Err(UnoError::NotEnoughPlayers);
    }
    if names.len() > MAX_PLAYERS {
        return Err(UnoError::TooManyPlayers);
    }

    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(UnoError::DuplicatePlayerName(name.clone()));
        }
    }

    Ok(())
}

/// One round: a fresh deck, the players' hands and the turn engine.
#[derive(Debug)]
pub struct Round {
    deck: Deck,
    players: Vec<Player>,
    engine: TurnEngine,
    outcome: Option<RoundOutcome>,
    turns_played: usize,
    /// Consecutive turns where the deck was empty and the player could not play.
    stuck_turns: usize,
}

impl Round {
    pub fn new<R: Rng + ?Sized>(
        player_names: &[String],
        composition: &DeckComposition,
        hand_size: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let deck = Deck::build(composition, rng)?;
        Self::with_deck(player_names, deck, hand_size)
    }

    /// Sets up a round from an already arranged deck.
    pub fn with_deck(player_names: &[String], deck: Deck, hand_size: usize) -> Result<Self> {
        validate_player_names(player_names)?;

        let mut deck = deck;
        let mut players = player_names
            .iter()
            .map(|name| Player::new(name.as_str()))
            .collect::<Vec<_>>();

        for player in &mut players {
            player.draw_cards(&mut deck, hand_size);
        }

        let top_card = Self::reveal_top_card(&mut deck)?;
        debug!(top_card = %top_card, deck = deck.cards_count(), "round set up");

        Ok(Round {
            deck,
            players,
            engine: TurnEngine::new(top_card),
            outcome: None,
            turns_played: 0,
            stuck_turns: 0,
        })
    }

    /// Draws until a colored card shows up. Wild cards drawn on the way are
    /// taken out of the game.
    fn reveal_top_card(deck: &mut Deck) -> Result<PlayedCard> {
        loop {
            match deck.draw() {
                Some(Card::Colored(color, card)) => return Ok(card.into_played_card(color)),
                Some(card) => debug!(card = %card, "discarding wild starting card"),
                None => return Err(UnoError::NoStartingCard),
            }
        }
    }

    pub fn play_turn<M, C>(&mut self, moves: &mut M, colors: &mut C) -> Result<PlayTurnResult>
    where
        M: MoveChooser + ?Sized,
        C: ColorChooser + ?Sized,
    {
        if self.outcome.is_some() {
            return Err(UnoError::RoundOver);
        }

        let result = self
            .engine
            .play_turn(&mut self.players, &mut self.deck, moves, colors);
        self.turns_played += 1;

        if result.won {
            let name = self.players[result.player].name().to_string();
            info!(winner = %name, turns = self.turns_played, "round won");
            self.outcome = Some(RoundOutcome::Won {
                winner: result.player,
                name,
            });
            return Ok(result);
        }

        let stuck = matches!(
            result.turn_action_result,
            TurnActionResult::ForcedDraw { drawn: 0 }
        );
        self.stuck_turns = if stuck { self.stuck_turns + 1 } else { 0 };
        if self.stuck_turns >= self.players.len() {
            info!(turns = self.turns_played, "round blocked, deck empty and no legal moves");
            self.outcome = Some(RoundOutcome::Blocked);
        }

        Ok(result)
    }

    pub fn run_to_completion<M, C>(&mut self, moves: &mut M, colors: &mut C) -> Result<RoundOutcome>
    where
        M: MoveChooser + ?Sized,
        C: ColorChooser + ?Sized,
    {
        loop {
            if let Some(outcome) = &self.outcome {
                return Ok(outcome.clone());
            }
            self.play_turn(moves, colors)?;
        }
    }

    pub fn state(&self) -> RoundState {
        match &self.outcome {
            Some(outcome) => RoundState::RoundOver(outcome.clone()),
            None => RoundState::AwaitingMove {
                player: self.current_player_index(),
            },
        }
    }

    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn top_card(&self) -> &PlayedCard {
        self.engine.top_card()
    }

    pub fn direction(&self) -> Direction {
        self.engine.direction()
    }

    pub fn turn_state(&self) -> &TurnState {
        self.engine.state()
    }

    pub fn current_player_index(&self) -> usize {
        self.engine.current_player_index(self.players.len())
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index()]
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn deck_count(&self) -> usize {
        self.deck.cards_count()
    }

    pub fn turns_played(&self) -> usize {
        self.turns_played
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::card::{CardColor, CardValue, ColoredCard};
    use crate::chooser::FirstLegalBot;

    fn create_player_names(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("Player {}", i + 1)).collect()
    }

    fn blue(number: u8) -> Card {
        Card::Colored(CardColor::Blue, ColoredCard::Number(number))
    }

    #[test]
    fn return_ok_if_enough_players() {
        let result = Round::new(
            &create_player_names(2),
            &DeckComposition::CLASSIC,
            5,
            &mut StdRng::seed_from_u64(1),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn return_err_if_not_enough_players() {
        let error = Round::new(
            &create_player_names(1),
            &DeckComposition::CLASSIC,
            5,
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap_err();
        assert_eq!(error, UnoError::NotEnoughPlayers);
    }

    #[test]
    fn return_err_if_too_many_players() {
        let error = Round::new(
            &create_player_names(11),
            &DeckComposition::CLASSIC,
            5,
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap_err();
        assert_eq!(error, UnoError::TooManyPlayers);
    }

    #[test]
    fn empty_table_is_rejected() {
        let error = Round::with_deck(&[], Deck::stacked(vec![blue(1)]), 0).unwrap_err();
        assert_eq!(error, UnoError::NotEnoughPlayers);
    }

    #[test]
    fn return_err_on_duplicate_names() {
        let names = vec!["Ann".to_string(), "Bo".to_string(), "Ann".to_string()];
        let error = Round::with_deck(&names, Deck::stacked(vec![blue(1)]), 0).unwrap_err();
        assert_eq!(error, UnoError::DuplicatePlayerName("Ann".to_string()));
    }

    #[test]
    fn all_players_start_with_5_cards() {
        let round = Round::new(
            &create_player_names(4),
            &DeckComposition::CLASSIC,
            5,
            &mut StdRng::seed_from_u64(9),
        )
        .unwrap();

        for player in round.players() {
            assert_eq!(player.cards_count(), 5);
        }
        assert_eq!(round.current_player_index(), 0);
        assert_eq!(round.direction(), Direction::Forward);
        assert!(matches!(round.state(), RoundState::AwaitingMove { player: 0 }));
    }

    #[test]
    fn wild_cards_are_discarded_when_revealing() {
        let deck = Deck::stacked(vec![
            blue(1),
            blue(2),
            Card::Wild,
            Card::DrawFour,
            Card::Colored(CardColor::Red, ColoredCard::Skip),
            blue(3),
        ]);
        let round = Round::with_deck(&create_player_names(2), deck, 1).unwrap();

        assert_eq!(
            round.top_card(),
            &PlayedCard::Colored(CardColor::Red, ColoredCard::Skip)
        );
        assert_eq!(round.deck_count(), 1);
    }

    #[test]
    fn setup_fails_without_a_colored_card() {
        let deck = Deck::stacked(vec![blue(1), blue(2), Card::Wild]);
        let error = Round::with_deck(&create_player_names(2), deck, 1).unwrap_err();
        assert_eq!(error, UnoError::NoStartingCard);
    }

    #[test]
    fn starting_card_is_never_wild() {
        let names = create_player_names(4);
        for seed in 0..1000 {
            let round = Round::new(
                &names,
                &DeckComposition::CLASSIC,
                5,
                &mut StdRng::seed_from_u64(seed),
            )
            .unwrap();
            assert!(!matches!(
                round.top_card().value(),
                CardValue::Wild | CardValue::DrawFour
            ));
        }
    }

    #[test]
    fn empty_hand_only_wins_by_playing() {
        let deck = Deck::stacked(vec![Card::Colored(CardColor::Red, ColoredCard::Number(5))]);
        let mut round = Round::with_deck(&create_player_names(2), deck, 0).unwrap();

        let result = round
            .play_turn(
                &mut |_: &crate::chooser::TurnView<'_>| crate::chooser::MoveChoice::Draw,
                &mut FirstLegalBot,
            )
            .unwrap();

        assert_eq!(result.played, None);
        assert!(!result.won);
        assert!(matches!(round.state(), RoundState::AwaitingMove { player: 1 }));
    }

    #[test]
    fn round_is_blocked_when_nobody_can_play() {
        let deck = Deck::stacked(vec![
            blue(1),
            blue(2),
            Card::Colored(CardColor::Red, ColoredCard::Number(5)),
        ]);
        let mut round = Round::with_deck(&create_player_names(2), deck, 1).unwrap();

        let outcome = round
            .run_to_completion(&mut FirstLegalBot, &mut FirstLegalBot)
            .unwrap();

        assert_eq!(outcome, RoundOutcome::Blocked);
        assert_eq!(round.turns_played(), 2);
        assert_eq!(
            round.play_turn(&mut FirstLegalBot, &mut FirstLegalBot),
            Err(UnoError::RoundOver)
        );
    }
}
