use crate::agents::Agent;
use crate::boards::Board;
use crate::mancala_errors::*;
use crate::seats::Seat;
use colored::{Color, ColoredString, Colorize};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Tie,
}

/// A named participant: an agent picking the cups, the seat it holds while a
/// match is running, and its record across matches.
pub struct Player {
    pub name: String,
    pub color: Color,
    agent: Box<dyn Agent>,
    seat: Option<Seat>,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Player {
    pub fn new(name: &str, color: Color, agent: Box<dyn Agent>) -> Self {
        Player {
            name: name.to_string(),
            color: color,
            agent: agent,
            seat: None,
            wins: 0,
            losses: 0,
            ties: 0,
        }
    }

    pub fn seat(&self) -> Option<Seat> {
        self.seat
    }

    /// Seats the player at a match.
    pub fn join(&mut self, seat: Seat) {
        self.seat = Some(seat);
    }

    /// Asks the agent for a cup. Fails if the player is not seated, or if the
    /// agent comes back empty-handed.
    pub fn take_turn(&mut self, board: &Board) -> MancalaResult<String> {
        let seat = self
            .seat
            .ok_or_else(|| MancalaError::NoGameInProgress(self.name.clone()))?;
        log::debug!("{}'s turn ({})", self.name, seat);
        self.agent
            .play_move(board, seat)
            .ok_or_else(|| MancalaError::MissingMove(self.name.clone()))
    }

    /// Records the result and leaves the match.
    pub fn game_over(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Tie => self.ties += 1,
        }
        self.seat = None;
    }

    pub fn colored_name(&self) -> ColoredString {
        self.name.as_str().color(self.color).bold()
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:\n    Wins: {}\n    Losses: {}\n    Ties: {}",
            self.name, self.wins, self.losses, self.ties
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::RandomAgent;
    use crate::utils::seeded_rng;

    fn player() -> Player {
        Player::new(
            "Player 1",
            Color::Red,
            Box::new(RandomAgent::with_rng(seeded_rng())),
        )
    }

    #[test]
    fn test_take_turn_requires_game() {
        let mut board = Board::new(6).unwrap();
        board.initialize_cups(4);
        let mut p = player();
        assert_eq!(
            p.take_turn(&board),
            Err(MancalaError::NoGameInProgress("Player 1".into()))
        );
        p.join(Seat::PlayerOne);
        assert!(p.take_turn(&board).is_ok());
    }

    #[test]
    fn test_take_turn_without_move() {
        let board = Board::new(6).unwrap();
        let mut p = player();
        p.join(Seat::PlayerTwo);
        assert_eq!(
            p.take_turn(&board),
            Err(MancalaError::MissingMove("Player 1".into()))
        );
    }

    #[test]
    fn test_game_over() {
        let mut p = player();
        p.join(Seat::PlayerOne);
        p.game_over(GameResult::Win);
        assert_eq!(p.seat(), None);
        p.join(Seat::PlayerTwo);
        p.game_over(GameResult::Tie);
        p.join(Seat::PlayerOne);
        p.game_over(GameResult::Loss);
        p.join(Seat::PlayerOne);
        p.game_over(GameResult::Loss);
        assert_eq!((p.wins, p.losses, p.ties), (1, 2, 1));
    }

    #[test]
    fn test_display() {
        let mut p = player();
        p.game_over(GameResult::Win);
        assert_eq!(
            p.to_string(),
            "Player 1:\n    Wins: 1\n    Losses: 0\n    Ties: 0"
        );
    }
}
