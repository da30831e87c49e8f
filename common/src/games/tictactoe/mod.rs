mod board;
mod bot_controller;
mod controller;
mod game_state;
mod result_log;
mod settings;
mod tournament;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, Score, best_move, best_move_for, calculate_move, evaluate_moves, search};
pub use controller::{MatchController, MatchError, MatchObserver, NoopObserver, PlayerInput};
pub use game_state::GameState;
pub use result_log::{FileResultLog, ResultLogError, ResultSink, format_result};
pub use settings::{DEFAULT_RESULT_LOG, MAX_MATCHES, TournamentConfig};
pub use tournament::{MatchScore, Tournament, TournamentResult, TournamentWinner};
pub use types::{
    BOARD_SIZE, CELL_COUNT, Cell, FirstPlayerMode, GameOutcome, InvalidMove, Position, Side,
    WinningLine,
};
pub use win_detector::{check_win, outcome, winning_line};
