use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Player,
    Ai,
}

impl Cell {
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Player => 'X',
            Cell::Ai => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            'X' | 'x' => Some(Cell::Player),
            'O' | 'o' => Some(Cell::Ai),
            '.' | '_' | ' ' => Some(Cell::Empty),
            _ => None,
        }
    }

    pub fn side(&self) -> Option<Side> {
        match self {
            Cell::Player => Some(Side::Player),
            Cell::Ai => Some(Side::Ai),
            Cell::Empty => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    pub fn mark(&self) -> Cell {
        match self {
            Side::Player => Cell::Player,
            Side::Ai => Cell::Ai,
        }
    }
}

/// A cell address. Row-major flat index is `row * 3 + col`.
///
/// Positions outside the grid can be built (e.g. from raw user input); the
/// board rejects them on placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    PlayerWin,
    AiWin,
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        *self != GameOutcome::InProgress
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            GameOutcome::PlayerWin => Some(Side::Player),
            GameOutcome::AiWin => Some(Side::Ai),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Cell,
    pub cells: [Position; BOARD_SIZE],
}

impl WinningLine {
    pub fn new(mark: Cell, cells: [Position; BOARD_SIZE]) -> Self {
        Self { mark, cells }
    }

    pub fn start(&self) -> Position {
        self.cells[0]
    }

    pub fn end(&self) -> Position {
        self.cells[BOARD_SIZE - 1]
    }
}

/// Who opens each game of a tournament.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    Player,
    Ai,
    Alternate,
    Random,
    #[default]
    Ask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    OutOfRange(Position),
    Occupied(Position),
}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::OutOfRange(pos) => write!(f, "Position {} is out of bounds", pos),
            InvalidMove::Occupied(pos) => write!(f, "Cell {} is already marked", pos),
        }
    }
}

impl std::error::Error for InvalidMove {}
