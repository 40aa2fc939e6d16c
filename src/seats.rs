use std::fmt::{self, Display};

// ---------------------------------------------
// Seats
// ---------------------------------------------

/// The two sides of the board. Player One banks in the store at index 0,
/// Player Two in the store at the board's midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    PlayerOne,
    PlayerTwo,
}

impl Seat {
    pub fn opposite(&self) -> Seat {
        match self {
            Seat::PlayerOne => Seat::PlayerTwo,
            Seat::PlayerTwo => Seat::PlayerOne,
        }
    }

    pub fn as_index(&self) -> usize {
        match self {
            Seat::PlayerOne => 0,
            Seat::PlayerTwo => 1,
        }
    }

    pub fn both() -> [Seat; 2] {
        [Seat::PlayerOne, Seat::PlayerTwo]
    }
}

impl Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::PlayerOne => write!(f, "Player 1"),
            Seat::PlayerTwo => write!(f, "Player 2"),
        }
    }
}
