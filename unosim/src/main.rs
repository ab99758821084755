mod render;
mod settings;

use color_eyre::{eyre::eyre, Result};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;
use unogame::{
    chooser::{ColorChooser, FirstLegalBot, MoveChooser, RandomBot},
    config::MatchMode,
    match_play::{Match, RoundSummary},
};

use settings::{BotKind, Settings};

fn play_round<M, C>(game: &mut Match, moves: &mut M, colors: &mut C) -> Result<RoundSummary>
where
    M: MoveChooser + ?Sized,
    C: ColorChooser + ?Sized,
{
    let mut round = game.new_round()?;
    println!("\nStarting round {}", game.rounds_played() + 1);

    while !round.is_over() {
        println!("{}", render::turn_header(&round));
        let result = round.play_turn(moves, colors)?;
        println!("{}", render::turn_result(&round, &result));
    }

    let outcome = round
        .outcome()
        .cloned()
        .ok_or_else(|| eyre!("round ended without an outcome"))?;
    Ok(game.record_round(&outcome, round.turns_played())?)
}

/// Plays rounds until the match is decided, a single round is done or
/// `max_rounds` have been played. Returns the number of rounds played.
fn play_match<M, C>(game: &mut Match, moves: &mut M, colors: &mut C, max_rounds: u32) -> Result<u32>
where
    M: MoveChooser + ?Sized,
    C: ColorChooser + ?Sized,
{
    loop {
        let summary = play_round(game, moves, colors)?;
        println!("{}", render::round_summary(&summary));

        if let Some(winner) = &summary.match_winner {
            println!("{winner} wins the match. Game over.");
            break;
        }
        if game.config().mode == MatchMode::SingleRound {
            break;
        }
        if game.rounds_played() >= max_rounds {
            println!("No winner after {max_rounds} rounds. Stopping the match.");
            info!(rounds = max_rounds, "match stopped without a winner");
            break;
        }
    }

    Ok(game.rounds_played())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env()?;
    info!(players = ?settings.players, bot = %settings.bot, mode = %settings.config.mode, "starting match");

    let seed = settings.config.seed;
    let max_rounds = settings.max_rounds;
    let mut game = Match::new(settings.players, settings.config)?;

    let mut moves: Box<dyn MoveChooser> = match settings.bot {
        BotKind::FirstLegal => Box::new(FirstLegalBot),
        BotKind::Random => Box::new(RandomBot::new(match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        })),
    };
    let mut colors = FirstLegalBot;

    play_match(&mut game, moves.as_mut(), &mut colors, max_rounds)?;
    Ok(())
}
