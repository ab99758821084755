use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use crate::chooser::{ColorChooser, MoveChooser};
use crate::config::{MatchConfig, MatchMode};
use crate::error::{Result, UnoError};
use crate::round::{validate_player_names, Round, RoundOutcome};
use crate::score::Scoreboard;

/// What the host gets back after every round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    /// 1-based round number.
    pub round: u32,
    pub outcome: RoundOutcome,
    pub turns: usize,
    pub scoreboard: Scoreboard,
    /// Set once this round made someone reach the win goal.
    pub match_winner: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    pub rounds: Vec<RoundSummary>,
    pub winner: Option<String>,
    /// The host asked to stop before anyone reached the win goal.
    pub stopped: bool,
}

/// A series of rounds between the same players.
#[derive(Debug)]
pub struct Match {
    config: MatchConfig,
    player_names: Vec<String>,
    scoreboard: Scoreboard,
    rounds_played: u32,
    rng: StdRng,
}

impl Match {
    pub fn new(player_names: Vec<String>, config: MatchConfig) -> Result<Self> {
        validate_player_names(&player_names)?;
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Match {
            scoreboard: Scoreboard::new(&player_names),
            player_names,
            config,
            rounds_played: 0,
            rng,
        })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn player_names(&self) -> &[String] {
        &self.player_names
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn match_winner(&self) -> Option<(&str, u32)> {
        self.scoreboard.leader_at(self.config.win_goal)
    }

    /// Deals a fresh round. The host may drive it turn by turn and hand the
    /// outcome to [`Match::record_round`].
    pub fn new_round(&mut self) -> Result<Round> {
        if self.match_winner().is_some() {
            return Err(UnoError::MatchOver);
        }
        Round::new(
            &self.player_names,
            &self.config.composition,
            self.config.hand_size,
            &mut self.rng,
        )
    }

    /// Adds a finished round to the match. Nothing is recorded once the match
    /// is decided or when the winner is not seated at this table.
    pub fn record_round(&mut self, outcome: &RoundOutcome, turns: usize) -> Result<RoundSummary> {
        if self.match_winner().is_some() {
            return Err(UnoError::MatchOver);
        }
        if let Some(name) = outcome.winner_name() {
            if self.scoreboard.record_win(name).is_none() {
                return Err(UnoError::UnknownPlayer(name.to_string()));
            }
        }
        self.rounds_played += 1;

        let match_winner = self.match_winner().map(|(name, wins)| {
            info!(winner = name, wins, "match won");
            name.to_string()
        });

        Ok(RoundSummary {
            round: self.rounds_played,
            outcome: outcome.clone(),
            turns,
            scoreboard: self.scoreboard.clone(),
            match_winner,
        })
    }

    pub fn play_round<M, C>(&mut self, moves: &mut M, colors: &mut C) -> Result<RoundSummary>
    where
        M: MoveChooser + ?Sized,
        C: ColorChooser + ?Sized,
    {
        let mut round = self.new_round()?;
        info!(round = self.rounds_played + 1, "starting round");
        let outcome = round.run_to_completion(moves, colors)?;
        self.record_round(&outcome, round.turns_played())
    }

    /// Plays according to the configured mode. In endless mode `another_round`
    /// is asked after every round that did not decide the match; returning
    /// false stops the match.
    pub fn run<M, C, F>(
        &mut self,
        moves: &mut M,
        colors: &mut C,
        mut another_round: F,
    ) -> Result<MatchOutcome>
    where
        M: MoveChooser + ?Sized,
        C: ColorChooser + ?Sized,
        F: FnMut(&RoundSummary) -> bool,
    {
        let mut rounds = Vec::new();

        loop {
            let summary = self.play_round(moves, colors)?;
            let decided = summary.match_winner.is_some();
            let single = self.config.mode == MatchMode::SingleRound;
            let keep_going = !decided && !single && another_round(&summary);
            rounds.push(summary);

            if !keep_going {
                return Ok(MatchOutcome {
                    winner: self.match_winner().map(|(name, _)| name.to_string()),
                    stopped: !decided && !single,
                    rounds,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chooser::FirstLegalBot;

    fn names() -> Vec<String> {
        vec!["Ann".to_string(), "Bo".to_string()]
    }

    fn won_by(winner: usize) -> RoundOutcome {
        RoundOutcome::Won {
            winner,
            name: names()[winner].clone(),
        }
    }

    #[test]
    fn zero_win_goal_is_rejected() {
        let error = Match::new(names(), MatchConfig::default().with_win_goal(0)).unwrap_err();
        assert_eq!(error, UnoError::InvalidWinGoal(0));
    }

    #[test]
    fn recorded_rounds_add_up() {
        let mut game = Match::new(names(), MatchConfig::default().with_seed(1)).unwrap();

        let summary = game.record_round(&won_by(1), 12).unwrap();
        assert_eq!(summary.round, 1);
        assert_eq!(summary.match_winner, None);

        game.record_round(&won_by(0), 8).unwrap();
        game.record_round(&RoundOutcome::Blocked, 40).unwrap();
        game.record_round(&won_by(1), 9).unwrap();
        assert_eq!(game.match_winner(), None);

        let summary = game.record_round(&won_by(1), 3).unwrap();
        assert_eq!(summary.match_winner.as_deref(), Some("Bo"));
        assert_eq!(game.scoreboard().get("Ann"), Some(1));
        assert_eq!(game.scoreboard().get("Bo"), Some(3));
        assert_eq!(game.rounds_played(), 5);
        assert_eq!(game.new_round().unwrap_err(), UnoError::MatchOver);
    }

    #[test]
    fn nothing_is_recorded_after_the_match_is_decided() {
        let mut game = Match::new(names(), MatchConfig::default().with_win_goal(1)).unwrap();
        game.record_round(&won_by(0), 10).unwrap();

        let error = game.record_round(&won_by(1), 7).unwrap_err();

        assert_eq!(error, UnoError::MatchOver);
        assert_eq!(game.rounds_played(), 1);
        assert_eq!(game.scoreboard().get("Bo"), Some(0));
    }

    #[test]
    fn unknown_winner_is_rejected() {
        let mut game = Match::new(names(), MatchConfig::default()).unwrap();
        let outcome = RoundOutcome::Won {
            winner: 5,
            name: "Mallory".to_string(),
        };

        let error = game.record_round(&outcome, 4).unwrap_err();

        assert_eq!(error, UnoError::UnknownPlayer("Mallory".to_string()));
        assert_eq!(game.rounds_played(), 0);
        assert_eq!(game.scoreboard().total_wins(), 0);
    }

    #[test]
    fn single_round_mode_plays_once() {
        let config = MatchConfig::default()
            .with_mode(MatchMode::SingleRound)
            .with_seed(5);
        let mut game = Match::new(names(), config).unwrap();

        let outcome = game
            .run(&mut FirstLegalBot, &mut FirstLegalBot, |_| {
                panic!("single round mode never asks")
            })
            .unwrap();

        assert_eq!(outcome.rounds.len(), 1);
        assert_eq!(outcome.winner, None);
        assert!(!outcome.stopped);
    }

    #[test]
    fn endless_mode_stops_when_asked() {
        let mut game = Match::new(names(), MatchConfig::default().with_seed(5)).unwrap();

        let outcome = game
            .run(&mut FirstLegalBot, &mut FirstLegalBot, |_| false)
            .unwrap();

        assert_eq!(outcome.rounds.len(), 1);
        assert!(outcome.stopped);
    }
}
