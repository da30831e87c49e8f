use std::io::{BufRead, Write};

use tictactoe_common::games::tictactoe::{
    BOARD_SIZE, Board, CELL_COUNT, Cell, FileResultLog, GameOutcome, InvalidMove, MatchError,
    MatchObserver, MatchScore, PlayerInput, Position, ResultLogError, ResultSink, Score, Side,
    TournamentResult, TournamentWinner, WinningLine, evaluate_moves,
};
use tictactoe_common::log;

/// Draws boards with the configured symbols.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    pub player_symbol: char,
    pub ai_symbol: char,
}

impl Renderer {
    pub fn symbol(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => ' ',
            Cell::Player => self.player_symbol,
            Cell::Ai => self.ai_symbol,
        }
    }

    pub fn side_symbol(&self, side: Side) -> char {
        self.symbol(side.mark())
    }

    pub fn board(&self, board: &Board) -> String {
        let mut out = String::new();
        for (y, row) in board.rows().enumerate() {
            let cells: Vec<String> = row.iter().map(|&c| self.symbol(c).to_string()).collect();
            out.push_str(&format!("\t\t\t {}\n", cells.join(" | ")));
            if y + 1 < BOARD_SIZE {
                out.push_str("\t\t\t-----------\n");
            }
        }
        out.push('\n');
        out
    }

    pub fn instructions(&self) -> String {
        let mut out = String::from("\nChoose a cell numbered from 1 to 9 as below and play\n\n");
        for y in 0..BOARD_SIZE {
            let cells: Vec<String> = (0..BOARD_SIZE)
                .map(|x| (y * BOARD_SIZE + x + 1).to_string())
                .collect();
            out.push_str(&format!("\t\t\t {} \n", cells.join(" | ")));
            if y + 1 < BOARD_SIZE {
                out.push_str("\t\t\t-----------\n");
            }
        }
        out.push('\n');
        out
    }
}

/// 1-based cell number as shown to the player.
pub fn cell_number(position: Position) -> usize {
    position.index() + 1
}

pub fn verdict(result: &TournamentResult) -> &'static str {
    match result.winner() {
        TournamentWinner::Player => "Congratulations! You won the tournament.",
        TournamentWinner::Draw => "Surprised right! Tournament ends in a draw.",
        TournamentWinner::Ai => "AI won the tournament. Better luck next time!",
    }
}

/// Reads the human's answers from `reader`, prompting on `writer`.
pub struct ConsoleInput<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    renderer: Renderer,
    show_hints: bool,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W, renderer: Renderer, show_hints: bool) -> Self {
        Self {
            reader,
            writer,
            renderer,
            show_hints,
        }
    }

    fn prompt(&mut self, text: &str) -> Result<String, MatchError> {
        write!(self.writer, "{}", text).map_err(|e| MatchError::Input(e.to_string()))?;
        self.writer
            .flush()
            .map_err(|e| MatchError::Input(e.to_string()))?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| MatchError::Input(e.to_string()))?;
        if read == 0 {
            return Err(MatchError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, text: &str) -> Result<(), MatchError> {
        writeln!(self.writer, "{}", text).map_err(|e| MatchError::Input(e.to_string()))
    }

    pub fn show_instructions(&mut self) -> Result<(), MatchError> {
        let text = self.renderer.instructions();
        write!(self.writer, "{}", text).map_err(|e| MatchError::Input(e.to_string()))
    }

    /// Empty input keeps `default`.
    pub fn read_match_count(&mut self, default: u32, max: u32) -> Result<u32, MatchError> {
        loop {
            let answer = self.prompt(&format!(
                "\nChoose tournament format (best of 3/5/7/10 or a single match) [{}]: ",
                default
            ))?;
            if answer.is_empty() {
                return Ok(default);
            }
            match answer.parse::<u32>() {
                Ok(count) if (1..=max).contains(&count) => return Ok(count),
                _ => self.say(&format!("Please enter a number from 1 to {}.", max))?,
            }
        }
    }

    pub fn ask_play_again(&mut self) -> Result<bool, MatchError> {
        let answer = self.prompt("\nDo you want to play another tournament? (y/n): ")?;
        Ok(is_yes(&answer))
    }

    fn print_hints(&mut self, board: &Board) -> Result<(), MatchError> {
        let hints: Vec<String> = evaluate_moves(board, Side::Player, board.mark_count())
            .into_iter()
            .map(|(position, score)| {
                let label = match score {
                    Score::Win => "wins",
                    Score::Draw => "draws",
                    Score::Loss => "loses",
                };
                format!("{}:{}", cell_number(position), label)
            })
            .collect();
        self.say(&format!("Hints: {}", hints.join(" ")))
    }
}

impl<R: BufRead, W: Write> PlayerInput for ConsoleInput<R, W> {
    fn wants_to_start(&mut self, _game_number: u32) -> Result<bool, MatchError> {
        let answer = self.prompt("\nDo you want to start first this match? (y/n): ")?;
        Ok(is_yes(&answer))
    }

    fn choose_position(&mut self, board: &Board) -> Result<Position, MatchError> {
        if self.show_hints {
            self.print_hints(board)?;
        }

        loop {
            let available: Vec<String> = board
                .available_positions()
                .into_iter()
                .map(|p| cell_number(p).to_string())
                .collect();
            self.say(&format!("Available positions: {}", available.join(" ")))?;

            let answer = self.prompt("Enter position: ")?;
            match answer.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
                Some(index) => return Ok(Position::from_index(index.min(CELL_COUNT))),
                None => self.say("Invalid or occupied cell. Try again.")?,
            }
        }
    }

    fn on_invalid_move(&mut self, _error: &InvalidMove) {
        if let Err(e) = self.say("Invalid or occupied cell. Try again.") {
            log!("Failed to show invalid move prompt: {}", e);
        }
    }
}

fn is_yes(answer: &str) -> bool {
    answer.starts_with(['y', 'Y'])
}

/// Prints game progress.
pub struct ConsoleView<W: Write> {
    writer: W,
    renderer: Renderer,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(writer: W, renderer: Renderer) -> Self {
        Self { writer, renderer }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, text: &str) {
        let _ = write!(self.writer, "{}", text);
        let _ = self.writer.flush();
    }

}

impl<W: Write> MatchObserver for ConsoleView<W> {
    fn on_game_started(&mut self, game_number: u32, _starting_side: Side) {
        let text = format!("\nMatch {}\n{}", game_number, self.renderer.board(&Board::new()));
        self.emit(&text);
    }

    fn on_move(&mut self, side: Side, position: Position, board: &Board) {
        let mut text = String::new();
        if side == Side::Ai {
            text.push_str(&format!(
                "AI has put a {} in cell {}\n\n",
                self.renderer.side_symbol(Side::Ai),
                cell_number(position)
            ));
        }
        text.push_str(&self.renderer.board(board));
        self.emit(&text);
    }

    fn on_game_over(
        &mut self,
        _game_number: u32,
        outcome: GameOutcome,
        winning_line: Option<WinningLine>,
        score: &MatchScore,
    ) {
        let mut text = match outcome {
            GameOutcome::AiWin => "AI has won this match.\n".to_string(),
            GameOutcome::PlayerWin => "You have won this match.\n".to_string(),
            GameOutcome::Draw | GameOutcome::InProgress => "It's a draw\n".to_string(),
        };
        if let Some(line) = winning_line {
            let cells: Vec<String> = line.cells.iter().map(|&p| cell_number(p).to_string()).collect();
            text.push_str(&format!("Winning line: {}\n", cells.join("-")));
        }
        text.push_str(&format!(
            "Score => You: {} | AI: {}\n",
            score.player_wins, score.ai_wins
        ));
        self.emit(&text);
    }

    fn on_tournament_over(&mut self, result: &TournamentResult) {
        let text = format!("\n{}\n", verdict(result));
        self.emit(&text);
    }
}

/// File log that also tells the player when the file cannot be written.
pub struct ConsoleResultLog<W: Write> {
    inner: FileResultLog,
    writer: W,
}

impl<W: Write> ConsoleResultLog<W> {
    pub fn new(inner: FileResultLog, writer: W) -> Self {
        Self { inner, writer }
    }
}

impl<W: Write> ResultSink for ConsoleResultLog<W> {
    fn record(&mut self, result: &TournamentResult) -> Result<(), ResultLogError> {
        let recorded = self.inner.record(result);
        if recorded.is_err() {
            let _ = writeln!(self.writer, "Error opening log file.");
        }
        recorded
    }
}
