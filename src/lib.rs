//! Rules and players for Kalah-style mancala: a ring of cups with one store
//! per player, sowing through both stores, and an extra turn whenever the last
//! seed lands in the mover's own store.
#[macro_use]
extern crate impl_ops;

pub mod agents;
pub mod algorithms;
pub mod boards;
pub mod game;
pub mod mancala_errors;
pub mod moves;
pub mod players;
pub mod seats;
pub mod series;
pub mod utils;

pub use agents::{Agent, AgentKind};
pub use boards::Board;
pub use game::{Game, MatchOutcome, MatchState};
pub use mancala_errors::{MancalaError, MancalaResult};
pub use players::{GameResult, Player};
pub use seats::Seat;
pub use series::{Series, SeriesConfig};
