use super::board::Board;
use super::controller::MatchError;
use super::types::{GameOutcome, Position, Side, WinningLine};
use super::win_detector::{outcome, winning_line};

/// One game: the authoritative board plus whose turn it is.
///
/// The outcome is never stored; it is recomputed from the board.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    starting_side: Side,
    side_to_move: Side,
    move_index: usize,
    last_move: Option<Position>,
}

impl GameState {
    pub fn new(starting_side: Side) -> Self {
        Self {
            board: Board::new(),
            starting_side,
            side_to_move: starting_side,
            move_index: 0,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn starting_side(&self) -> Side {
        self.starting_side
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn move_index(&self) -> usize {
        self.move_index
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn outcome(&self) -> GameOutcome {
        outcome(&self.board)
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(&self.board)
    }

    /// Places the mark of the side to move and passes the turn.
    pub fn apply(&mut self, position: Position) -> Result<GameOutcome, MatchError> {
        if self.is_over() {
            return Err(MatchError::GameOver);
        }

        self.board.place(position, self.side_to_move)?;
        self.last_move = Some(position);
        self.move_index += 1;

        let outcome = self.outcome();
        if !outcome.is_terminal() {
            self.side_to_move = self.side_to_move.opponent();
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::{Cell, InvalidMove};

    #[test]
    fn test_new_game_starts_empty() {
        let state = GameState::new(Side::Ai);
        assert_eq!(state.side_to_move(), Side::Ai);
        assert_eq!(state.move_index(), 0);
        assert_eq!(state.outcome(), GameOutcome::InProgress);
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_apply_alternates_turns() {
        let mut state = GameState::new(Side::Player);
        state.apply(Position::new(0, 0)).unwrap();
        assert_eq!(state.side_to_move(), Side::Ai);
        state.apply(Position::new(1, 1)).unwrap();
        assert_eq!(state.side_to_move(), Side::Player);
        assert_eq!(state.board().get(Position::new(1, 1)), Some(Cell::Ai));
        assert_eq!(state.move_index(), 2);
        assert_eq!(state.board().mark_count(), state.move_index());
    }

    #[test]
    fn test_invalid_move_keeps_turn_and_board() {
        let mut state = GameState::new(Side::Player);
        state.apply(Position::new(0, 0)).unwrap();
        let before = *state.board();

        let err = state.apply(Position::new(0, 0)).unwrap_err();
        assert!(matches!(err, MatchError::InvalidMove(InvalidMove::Occupied(_))));
        assert_eq!(*state.board(), before);
        assert_eq!(state.side_to_move(), Side::Ai);
        assert_eq!(state.move_index(), 1);
    }

    #[test]
    fn test_win_is_absorbing() {
        let mut state = GameState::new(Side::Player);
        for index in [0, 3, 1, 4] {
            state.apply(Position::from_index(index)).unwrap();
        }
        assert_eq!(state.apply(Position::from_index(2)).unwrap(), GameOutcome::PlayerWin);
        assert_eq!(state.side_to_move(), Side::Player);
        assert!(state.winning_line().is_some());

        let err = state.apply(Position::from_index(8)).unwrap_err();
        assert!(matches!(err, MatchError::GameOver));
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut state = GameState::new(Side::Player);
        // X O X / X O O / O X X
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state.apply(Position::from_index(index)).unwrap();
        }
        assert_eq!(state.outcome(), GameOutcome::Draw);
        assert!(state.is_over());
    }
}
