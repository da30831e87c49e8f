use std::error::Error;
use std::io::Write;

use tictactoe_common::games::tictactoe::{GameOutcome, GameState, MatchError, Side, best_move_for};
use tictactoe_common::log;

use crate::console::{Renderer, cell_number};

/// Both sides played by the search, alternating who opens.
pub fn run_self_play<W: Write>(
    games: u32,
    renderer: Renderer,
    writer: &mut W,
) -> Result<Vec<GameOutcome>, Box<dyn Error>> {
    let mut outcomes = Vec::with_capacity(games as usize);

    for game_number in 1..=games {
        let starting_side = if game_number % 2 == 1 { Side::Ai } else { Side::Player };
        let mut state = GameState::new(starting_side);
        writeln!(writer, "\nMatch {}\n{}", game_number, renderer.board(state.board()))?;

        while !state.is_over() {
            let side = state.side_to_move();
            let position = best_move_for(state.board(), side, state.move_index())
                .ok_or(MatchError::NoAvailableMove)?;
            state.apply(position)?;
            writeln!(
                writer,
                "{} has put a {} in cell {}\n\n{}",
                side_name(side),
                renderer.side_symbol(side),
                cell_number(position),
                renderer.board(state.board())
            )?;
        }

        let outcome = state.outcome();
        log!("Self-play game {} finished: {:?}", game_number, outcome);
        writeln!(writer, "{}", describe(outcome))?;
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Player => "Challenger",
        Side::Ai => "AI",
    }
}

fn describe(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::AiWin => "AI has won this match.",
        GameOutcome::PlayerWin => "Challenger has won this match.",
        GameOutcome::Draw | GameOutcome::InProgress => "It's a draw",
    }
}
