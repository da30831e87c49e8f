use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::tournament::{TournamentResult, TournamentWinner};

const SEPARATOR: &str = "----------------------------------------";

#[derive(Debug)]
pub struct ResultLogError {
    path: PathBuf,
    source: std::io::Error,
}

impl ResultLogError {
    pub fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Display for ResultLogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error writing result log {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for ResultLogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Receives the final tally of each tournament.
pub trait ResultSink {
    fn record(&mut self, result: &TournamentResult) -> Result<(), ResultLogError>;
}

/// Appends one text block per tournament to a file.
pub struct FileResultLog {
    path: PathBuf,
}

impl FileResultLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultSink for FileResultLog {
    fn record(&mut self, result: &TournamentResult) -> Result<(), ResultLogError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ResultLogError::new(&self.path, e))?;

        file.write_all(format_result(result).as_bytes())
            .map_err(|e| ResultLogError::new(&self.path, e))
    }
}

pub fn format_result(result: &TournamentResult) -> String {
    let winner = match result.winner() {
        TournamentWinner::Player => "You",
        TournamentWinner::Ai => "AI",
        TournamentWinner::Draw => "Draw",
    };

    format!(
        "Tournament Started: {}\nMatch Format: Best of {}\nFinal Score => You: {} | AI: {}\nWinner: {}\n{}\n",
        result.timestamp().format("%a %b %e %H:%M:%S %Y"),
        result.total_matches(),
        result.player_wins(),
        result.ai_wins(),
        winner,
        SEPARATOR
    )
}
