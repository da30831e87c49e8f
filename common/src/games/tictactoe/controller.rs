use rand::Rng;

use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::GameState;
use super::tournament::{MatchScore, TournamentResult};
use super::types::{FirstPlayerMode, GameOutcome, InvalidMove, Position, Side, WinningLine};

#[derive(Debug)]
pub enum MatchError {
    InvalidMove(InvalidMove),
    GameOver,
    /// The search was asked to move on a full board. A caller bug.
    NoAvailableMove,
    InputClosed,
    Input(String),
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::InvalidMove(e) => write!(f, "Invalid move: {}", e),
            MatchError::GameOver => write!(f, "Game is already over"),
            MatchError::NoAvailableMove => write!(f, "No available move on a full board"),
            MatchError::InputClosed => write!(f, "Input closed"),
            MatchError::Input(message) => write!(f, "Input error: {}", message),
        }
    }
}

impl std::error::Error for MatchError {}

impl From<InvalidMove> for MatchError {
    fn from(e: InvalidMove) -> Self {
        MatchError::InvalidMove(e)
    }
}

/// Source of the human side's decisions.
pub trait PlayerInput {
    fn wants_to_start(&mut self, game_number: u32) -> Result<bool, MatchError>;

    fn choose_position(&mut self, board: &Board) -> Result<Position, MatchError>;

    fn on_invalid_move(&mut self, _error: &InvalidMove) {}
}

pub trait MatchObserver {
    fn on_game_started(&mut self, _game_number: u32, _starting_side: Side) {}

    fn on_move(&mut self, _side: Side, _position: Position, _board: &Board) {}

    fn on_game_over(
        &mut self,
        _game_number: u32,
        _outcome: GameOutcome,
        _winning_line: Option<WinningLine>,
        _score: &MatchScore,
    ) {
    }

    /// Called once all games are played, before the result is recorded.
    fn on_tournament_over(&mut self, _result: &TournamentResult) {}
}

pub struct NoopObserver;

impl MatchObserver for NoopObserver {}

pub struct MatchController {
    first_player_mode: FirstPlayerMode,
    score: MatchScore,
}

impl MatchController {
    pub fn new(first_player_mode: FirstPlayerMode) -> Self {
        Self {
            first_player_mode,
            score: MatchScore::default(),
        }
    }

    pub fn score(&self) -> &MatchScore {
        &self.score
    }

    pub fn reset_score(&mut self) {
        self.score.reset();
    }

    pub fn first_player_mode(&self) -> FirstPlayerMode {
        self.first_player_mode
    }

    /// Resolves who opens game `game_number` (1-based).
    pub fn starting_side(
        &self,
        game_number: u32,
        input: &mut dyn PlayerInput,
    ) -> Result<Side, MatchError> {
        let player_starts = match self.first_player_mode {
            FirstPlayerMode::Player => true,
            FirstPlayerMode::Ai => false,
            FirstPlayerMode::Alternate => game_number % 2 == 1,
            FirstPlayerMode::Random => rand::rng().random(),
            FirstPlayerMode::Ask => input.wants_to_start(game_number)?,
        };

        Ok(if player_starts { Side::Player } else { Side::Ai })
    }

    /// Plays one game to its end and books the result.
    pub fn play_game(
        &mut self,
        game_number: u32,
        starting_side: Side,
        input: &mut dyn PlayerInput,
        observer: &mut dyn MatchObserver,
    ) -> Result<GameOutcome, MatchError> {
        let mut state = GameState::new(starting_side);
        log!("Game {} started, {:?} moves first", game_number, starting_side);
        observer.on_game_started(game_number, starting_side);

        while !state.is_over() {
            let side = state.side_to_move();
            let position = match side {
                Side::Ai => self.play_ai_turn(&mut state)?,
                Side::Player => self.play_player_turn(&mut state, input)?,
            };
            observer.on_move(side, position, state.board());
        }

        let outcome = state.outcome();
        self.score.record(outcome);
        log!(
            "Game {} finished: {:?}, score {}:{}",
            game_number,
            outcome,
            self.score.player_wins,
            self.score.ai_wins
        );
        observer.on_game_over(game_number, outcome, state.winning_line(), &self.score);

        Ok(outcome)
    }

    fn play_ai_turn(&self, state: &mut GameState) -> Result<Position, MatchError> {
        if state.board().is_full() {
            return Err(MatchError::NoAvailableMove);
        }

        let position =
            calculate_move(BotInput::from_game_state(state)).ok_or(MatchError::NoAvailableMove)?;
        state.apply(position)?;
        log!("AI placed mark at {}", position);
        Ok(position)
    }

    fn play_player_turn(
        &self,
        state: &mut GameState,
        input: &mut dyn PlayerInput,
    ) -> Result<Position, MatchError> {
        loop {
            let position = input.choose_position(state.board())?;
            match state.apply(position) {
                Ok(_) => return Ok(position),
                Err(MatchError::InvalidMove(e)) => {
                    log!("Rejected player move: {}", e);
                    input.on_invalid_move(&e);
                }
                Err(e) => return Err(e),
            }
        }
    }
}
