use unogame::{
    match_play::RoundSummary,
    round::{Round, RoundOutcome},
    turn::{PlayTurnResult, TurnActionResult},
};

pub fn turn_header(round: &Round) -> String {
    let player = round.current_player();
    let hand = player
        .hand()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{}'s turn. Top card: {}\n  Hand: [{hand}]",
        player.name(),
        round.top_card()
    )
}

pub fn turn_result(round: &Round, result: &PlayTurnResult) -> String {
    let name = move |seat: usize| round.players()[seat].name();
    let player = name(result.player);

    let mut line = match &result.played {
        Some(card) => format!("  {player} plays {card}"),
        None => format!("  {player} draws a card"),
    };

    match &result.turn_action_result {
        TurnActionResult::Skip { skipped } => {
            line.push_str(&format!(", {} is skipped", name(*skipped)))
        }
        TurnActionResult::Reverse => line.push_str(", play reverses"),
        TurnActionResult::DrawTwo { target, drawn }
        | TurnActionResult::DrawFour { target, drawn, .. } => {
            line.push_str(&format!(", {} draws {drawn}", name(*target)))
        }
        TurnActionResult::ForcedDraw { drawn: 0 } | TurnActionResult::SelfDraw { drawn: 0 } => {
            line.push_str(" but the deck is empty")
        }
        _ => {}
    }

    if result.won {
        line.push_str(&format!("\n{player} wins the round!"));
    }
    line
}

pub fn round_summary(summary: &RoundSummary) -> String {
    let headline = match &summary.outcome {
        RoundOutcome::Won { name, .. } => {
            format!("Round {} won by {name} in {} turns", summary.round, summary.turns)
        }
        RoundOutcome::Blocked => format!(
            "Round {} blocked after {} turns, nobody scores",
            summary.round, summary.turns
        ),
    };
    format!("{headline}\n\nScoreboard:\n{}", summary.scoreboard)
}
