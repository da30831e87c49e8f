use super::board::Board;
use super::game_state::GameState;
use super::types::{CELL_COUNT, GameOutcome, Position, Side};
use super::win_detector::outcome;

/// Exact game value from the searching side's point of view.
///
/// Ordered `Loss < Draw < Win`, so it doubles as the alpha-beta bound type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    Loss,
    Draw,
    Win,
}

impl Score {
    pub fn value(&self) -> i32 {
        match self {
            Score::Loss => -1,
            Score::Draw => 0,
            Score::Win => 1,
        }
    }

    fn terminal(board: &Board, perspective: Side) -> Option<Score> {
        match outcome(board) {
            GameOutcome::InProgress => None,
            GameOutcome::Draw => Some(Score::Draw),
            won if won.winner() == Some(perspective) => Some(Score::Win),
            _ => Some(Score::Loss),
        }
    }
}

pub struct BotInput {
    pub board: Board,
    pub side: Side,
    pub move_index: usize,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: *state.board(),
            side: state.side_to_move(),
            move_index: state.move_index(),
        }
    }
}

pub fn calculate_move(input: BotInput) -> Option<Position> {
    best_move_for(&input.board, input.side, input.move_index)
}

/// The AI's move for `board`. `None` only when the board is full.
pub fn best_move(board: &Board, move_index: usize) -> Option<Position> {
    best_move_for(board, Side::Ai, move_index)
}

/// Best move for `side`. Among equally scored moves the first one in
/// row-major order wins.
pub fn best_move_for(board: &Board, side: Side, move_index: usize) -> Option<Position> {
    let mut best_move = None;
    let mut best_score: Option<Score> = None;

    for (position, score) in evaluate_moves(board, side, move_index) {
        if best_score.is_none_or(|best| score > best) {
            best_score = Some(score);
            best_move = Some(position);
        }
    }

    best_move
}

/// Scores every available move for `side`, in row-major order.
pub fn evaluate_moves(board: &Board, side: Side, move_index: usize) -> Vec<(Position, Score)> {
    let mut scratch = *board;
    let available_moves = scratch.available_positions();
    let mut scored = Vec::with_capacity(available_moves.len());

    for position in available_moves {
        if scratch.place(position, side).is_err() {
            continue;
        }

        let score = search(
            &mut scratch,
            move_index + 1,
            side,
            side.opponent(),
            Score::Loss,
            Score::Win,
        );

        scratch.undo(position);
        scored.push((position, score));
    }

    scored
}

/// Minimax with alpha-beta pruning. `perspective` is the maximizing side.
///
/// Every placement is undone before returning, so `board` leaves in the
/// state it came in.
pub fn search(
    board: &mut Board,
    depth: usize,
    perspective: Side,
    to_move: Side,
    mut alpha: Score,
    mut beta: Score,
) -> Score {
    if let Some(score) = Score::terminal(board, perspective) {
        return score;
    }

    if depth >= CELL_COUNT {
        return Score::Draw;
    }

    let is_maximizing = to_move == perspective;
    let mut best_score = if is_maximizing { Score::Loss } else { Score::Win };

    for position in board.available_positions() {
        if board.place(position, to_move).is_err() {
            continue;
        }
        let score = search(board, depth + 1, perspective, to_move.opponent(), alpha, beta);
        board.undo(position);

        if is_maximizing {
            best_score = best_score.max(score);
            alpha = alpha.max(score);
        } else {
            best_score = best_score.min(score);
            beta = beta.min(score);
        }

        if beta <= alpha {
            return best_score;
        }
    }

    best_score
}
