use chrono::{DateTime, Local};

use crate::log;
use super::controller::{MatchController, MatchError, MatchObserver, PlayerInput};
use super::result_log::ResultSink;
use super::settings::TournamentConfig;
use super::types::{FirstPlayerMode, GameOutcome, Side};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchScore {
    pub player_wins: u32,
    pub ai_wins: u32,
}

impl MatchScore {
    /// Counts a finished game. Draws and unfinished games leave the score as is.
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome.winner() {
            Some(Side::Player) => self.player_wins += 1,
            Some(Side::Ai) => self.ai_wins += 1,
            None => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TournamentWinner {
    Player,
    Ai,
    Draw,
}

/// Final tally handed to the result sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentResult {
    player_wins: u32,
    ai_wins: u32,
    total_matches: u32,
    timestamp: DateTime<Local>,
}

impl TournamentResult {
    pub fn new(score: MatchScore, total_matches: u32, timestamp: DateTime<Local>) -> Self {
        Self {
            player_wins: score.player_wins,
            ai_wins: score.ai_wins,
            total_matches,
            timestamp,
        }
    }

    pub fn player_wins(&self) -> u32 {
        self.player_wins
    }

    pub fn ai_wins(&self) -> u32 {
        self.ai_wins
    }

    pub fn total_matches(&self) -> u32 {
        self.total_matches
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn draws(&self) -> u32 {
        self.total_matches
            .saturating_sub(self.player_wins + self.ai_wins)
    }

    pub fn winner(&self) -> TournamentWinner {
        match self.player_wins.cmp(&self.ai_wins) {
            std::cmp::Ordering::Greater => TournamentWinner::Player,
            std::cmp::Ordering::Less => TournamentWinner::Ai,
            std::cmp::Ordering::Equal => TournamentWinner::Draw,
        }
    }
}

pub struct Tournament {
    total_matches: u32,
    controller: MatchController,
}

impl Tournament {
    pub fn new(total_matches: u32, first_player_mode: FirstPlayerMode) -> Self {
        Self {
            total_matches,
            controller: MatchController::new(first_player_mode),
        }
    }

    pub fn from_config(config: &TournamentConfig) -> Self {
        Self::new(config.matches, config.first_player)
    }

    pub fn total_matches(&self) -> u32 {
        self.total_matches
    }

    pub fn controller(&self) -> &MatchController {
        &self.controller
    }

    /// Plays every game, reports the result to `observer`, then hands it to `sink`.
    ///
    /// A sink failure is logged, not returned: the games are already played.
    pub fn run(
        &mut self,
        input: &mut dyn PlayerInput,
        observer: &mut dyn MatchObserver,
        sink: &mut dyn ResultSink,
    ) -> Result<TournamentResult, MatchError> {
        self.controller.reset_score();
        log!(
            "Tournament started: {} matches, first player {:?}",
            self.total_matches,
            self.controller.first_player_mode()
        );

        for game_number in 1..=self.total_matches {
            let starting_side = self.controller.starting_side(game_number, input)?;
            self.controller
                .play_game(game_number, starting_side, input, observer)?;
        }

        let result = TournamentResult::new(*self.controller.score(), self.total_matches, Local::now());
        log!(
            "Tournament finished: {}:{} over {} matches",
            result.player_wins(),
            result.ai_wins(),
            result.total_matches()
        );

        observer.on_tournament_over(&result);
        if let Err(e) = sink.record(&result) {
            log!("Failed to record tournament result: {}", e);
        }

        self.controller.reset_score();
        Ok(result)
    }
}
