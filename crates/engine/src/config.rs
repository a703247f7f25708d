use klotski_core::{Board, Coord, Footprint};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One piece of the initial layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceDef {
    pub name: String,
    pub width: i8,
    pub height: i8,
    pub col: i8,
    pub row: i8,
}

impl PieceDef {
    pub fn new(name: &str, width: i8, height: i8, col: i8, row: i8) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            col,
            row,
        }
    }

    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.width, self.height)
    }

    pub fn start(&self) -> Coord {
        Coord::new(self.col, self.row)
    }
}

/// A complete puzzle: grid size, initial layout and win condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub width: i8,
    pub height: i8,
    pub pieces: Vec<PieceDef>,
    /// Name of the piece that has to reach `target`.
    pub goal: String,
    pub target: Coord,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board must be between 1x1 and 64x64 cells, got {width}x{height}")]
    BadDimensions { width: i8, height: i8 },
    #[error("puzzle has no pieces")]
    NoPieces,
    #[error("too many pieces ({0})")]
    TooManyPieces(usize),
    #[error("piece `{0}` has an empty footprint")]
    EmptyFootprint(String),
    #[error("piece name `{0}` is used twice")]
    DuplicateName(String),
    #[error("piece `{0}` does not fit on the board")]
    OutOfBounds(String),
    #[error("pieces `{0}` and `{1}` overlap")]
    Overlap(String, String),
    #[error("goal piece `{0}` is not in the layout")]
    UnknownGoal(String),
    #[error("target {0} cannot hold the goal piece")]
    TargetOutOfBounds(Coord),
    #[error("invalid puzzle json: {0}")]
    Parse(#[from] serde_json::Error),
}

impl PuzzleConfig {
    /// The daughter-in-a-box layout: a 2x2 daughter at the top has to reach
    /// the exit at the bottom middle.
    pub fn hakoiri_musume() -> Self {
        Self {
            width: Board::CLASSIC_WIDTH,
            height: Board::CLASSIC_HEIGHT,
            pieces: vec![
                PieceDef::new("daughter", 2, 2, 1, 0),
                PieceDef::new("father", 1, 2, 0, 0),
                PieceDef::new("mother", 1, 2, 3, 0),
                PieceDef::new("bantou", 2, 1, 1, 2),
                PieceDef::new("butler", 1, 2, 0, 2),
                PieceDef::new("maid", 1, 2, 3, 2),
                PieceDef::new("guard1", 1, 1, 1, 3),
                PieceDef::new("guard2", 1, 1, 2, 3),
                PieceDef::new("guard3", 1, 1, 0, 4),
                PieceDef::new("guard4", 1, 1, 3, 4),
            ],
            goal: "daughter".to_string(),
            target: Coord::new(1, 3),
        }
    }

    /// Parse and validate a puzzle from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PuzzleConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject layouts that would break the board invariants from move zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=64).contains(&self.width) || !(1..=64).contains(&self.height) {
            return Err(ConfigError::BadDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.pieces.is_empty() {
            return Err(ConfigError::NoPieces);
        }
        if self.pieces.len() > u8::MAX as usize {
            return Err(ConfigError::TooManyPieces(self.pieces.len()));
        }

        let mut names = FxHashSet::default();
        for def in &self.pieces {
            if def.width < 1 || def.height < 1 {
                return Err(ConfigError::EmptyFootprint(def.name.clone()));
            }
            if !names.insert(def.name.as_str()) {
                return Err(ConfigError::DuplicateName(def.name.clone()));
            }
            if !def
                .footprint()
                .at(def.start())
                .fits_within(self.width, self.height)
            {
                return Err(ConfigError::OutOfBounds(def.name.clone()));
            }
        }

        for (i, a) in self.pieces.iter().enumerate() {
            let ra = a.footprint().at(a.start());
            for b in &self.pieces[i + 1..] {
                if ra.overlaps(&b.footprint().at(b.start())) {
                    return Err(ConfigError::Overlap(a.name.clone(), b.name.clone()));
                }
            }
        }

        let goal = self
            .pieces
            .iter()
            .find(|p| p.name == self.goal)
            .ok_or_else(|| ConfigError::UnknownGoal(self.goal.clone()))?;
        if !goal
            .footprint()
            .at(self.target)
            .fits_within(self.width, self.height)
        {
            return Err(ConfigError::TargetOutOfBounds(self.target));
        }

        Ok(())
    }

    /// Fresh board in the initial layout. Ids follow `pieces` order.
    pub fn build_board(&self) -> Board {
        let mut board = Board::new(self.width, self.height);
        for def in &self.pieces {
            board.add_piece(def.name.as_str(), def.footprint(), def.start());
        }
        board
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::hakoiri_musume()
    }
}
