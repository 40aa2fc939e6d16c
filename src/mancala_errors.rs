use std::error::Error;
use std::fmt;

// ---------------------------------------------
// Error Handling
// ---------------------------------------------
#[derive(Debug, Clone, PartialEq)]
pub enum MancalaError {
    /// Label is not on the board.
    InvalidCup(String),
    /// Label is on the board but the cup holds no seeds.
    EmptyCup(String),
    /// A player was asked for a move without being seated at a board.
    NoGameInProgress(String),
    /// An agent had no move to offer although the match is not over.
    MissingMove(String),
    InvalidBoard(String),
    UnknownAgent(String),
}

pub type MancalaResult<T> = std::result::Result<T, MancalaError>;

impl MancalaError {
    /// Recoverable errors are bad input; the match loop discards the attempt
    /// and asks the same player again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, MancalaError::InvalidCup(_) | MancalaError::EmptyCup(_))
    }
}

impl Error for MancalaError {}

impl fmt::Display for MancalaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use MancalaError::*;
        match self {
            InvalidCup(cup) => write!(f, "Invalid cup. Got {}.", cup),
            EmptyCup(cup) => write!(f, "Cup '{}' is empty.", cup),
            NoGameInProgress(name) => write!(f, "{} is not part of a game in progress", name),
            MissingMove(name) => write!(f, "{} returned no cup to sow", name),
            InvalidBoard(reason) => write!(f, "Invalid board: {}", reason),
            UnknownAgent(kind) => write!(f, "Could not find a player of type {}", kind),
        }
    }
}
