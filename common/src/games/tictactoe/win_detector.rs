use super::board::Board;
use super::types::{BOARD_SIZE, Cell, GameOutcome, Position, Side, WinningLine};

const LINES: [[usize; BOARD_SIZE]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Game state derived from the board alone. Two winning lines of different
/// marks cannot arise under alternating play and are not checked for.
pub fn outcome(board: &Board) -> GameOutcome {
    match check_win(board).and_then(|mark| mark.side()) {
        Some(Side::Player) => GameOutcome::PlayerWin,
        Some(Side::Ai) => GameOutcome::AiWin,
        None if board.is_full() => GameOutcome::Draw,
        None => GameOutcome::InProgress,
    }
}

pub fn check_win(board: &Board) -> Option<Cell> {
    winning_line(board).map(|line| line.mark)
}

pub fn winning_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();

    for [a, b, c] in LINES {
        let mark = cells[a];
        if mark != Cell::Empty && mark == cells[b] && mark == cells[c] {
            return Some(WinningLine::new(
                mark,
                [
                    Position::from_index(a),
                    Position::from_index(b),
                    Position::from_index(c),
                ],
            ));
        }
    }

    None
}
