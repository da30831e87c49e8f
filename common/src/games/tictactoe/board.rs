use std::str::FromStr;

use super::types::{BOARD_SIZE, CELL_COUNT, Cell, InvalidMove, Position, Side};

/// The 3x3 grid. A plain value: copying it is the snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, position: Position) -> Option<Cell> {
        if !position.is_on_board() {
            return None;
        }
        Some(self.cells[position.index()])
    }

    pub fn place(&mut self, position: Position, side: Side) -> Result<(), InvalidMove> {
        if !position.is_on_board() {
            return Err(InvalidMove::OutOfRange(position));
        }

        let cell = &mut self.cells[position.index()];
        if *cell != Cell::Empty {
            return Err(InvalidMove::Occupied(position));
        }

        *cell = side.mark();
        Ok(())
    }

    /// Backtracking step of the search. Not a game-level undo.
    pub(crate) fn undo(&mut self, position: Position) {
        if position.is_on_board() {
            self.cells[position.index()] = Cell::Empty;
        }
    }

    pub fn available_positions(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(CELL_COUNT);
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == Cell::Empty {
                moves.push(Position::from_index(index));
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn mark_count(&self) -> usize {
        CELL_COUNT - self.count(Cell::Empty)
    }

    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_SIZE)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses nine cells in row-major order, e.g. `"X.X/.O./..."`.
/// `/` and whitespace other than a literal space cell are separators.
impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;

        for symbol in s.chars() {
            if symbol == '/' || symbol == '\n' || symbol == '\r' || symbol == '\t' {
                continue;
            }
            let cell = Cell::from_symbol(symbol)
                .ok_or_else(|| format!("Unexpected board symbol '{}'", symbol))?;
            if count == CELL_COUNT {
                return Err(format!("Board has more than {} cells", CELL_COUNT));
            }
            cells[count] = cell;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(format!("Board needs {} cells, got {}", CELL_COUNT, count));
        }

        Ok(Self { cells })
    }
}
