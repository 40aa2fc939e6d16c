use crate::game::{Game, MatchOutcome};
use crate::mancala_errors::*;
use crate::players::Player;
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesConfig {
    pub side_length: usize,
    pub initial_seeds: u32,
    pub number_of_games: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        SeriesConfig {
            side_length: 6,
            initial_seeds: 3,
            number_of_games: 10,
        }
    }
}

/// A run of matches between the same two players. Seats swap every game, so
/// each player moves first half of the time.
pub struct Series {
    pub player1: Player,
    pub player2: Player,
    config: SeriesConfig,
}

impl Series {
    pub fn new(player1: Player, player2: Player, config: SeriesConfig) -> Self {
        Series {
            player1: player1,
            player2: player2,
            config: config,
        }
    }

    pub fn run_games(&mut self) -> MancalaResult<Vec<MatchOutcome>> {
        let SeriesConfig {
            side_length,
            initial_seeds,
            number_of_games,
        } = self.config;
        let mut outcomes = Vec::with_capacity(number_of_games);

        for idx in 0..number_of_games {
            let (first, second) = if idx % 2 == 0 {
                (&mut self.player1, &mut self.player2)
            } else {
                (&mut self.player2, &mut self.player1)
            };
            let mut game = Game::new(first, second, side_length, initial_seeds)?;
            outcomes.push(game.run()?);
        }

        log::info!(
            "series over: {} {}-{}-{}, {} {}-{}-{}",
            self.player1.name,
            self.player1.wins,
            self.player1.losses,
            self.player1.ties,
            self.player2.name,
            self.player2.wins,
            self.player2.losses,
            self.player2.ties
        );
        Ok(outcomes)
    }

    pub fn final_results(&self) -> SeriesSummary<'_> {
        let winner = if self.player1.wins > self.player2.wins {
            Some(&self.player1)
        } else if self.player2.wins > self.player1.wins {
            Some(&self.player2)
        } else {
            None
        };
        SeriesSummary {
            winner: winner,
            players: [&self.player1, &self.player2],
        }
    }
}

pub struct SeriesSummary<'a> {
    /// `None` when both players won equally often.
    pub winner: Option<&'a Player>,
    pub players: [&'a Player; 2],
}

impl<'a> Display for SeriesSummary<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Some(p) => writeln!(f, "{} wins the series!", p.name)?,
            None => writeln!(f, "Series ended in a tie")?,
        }
        for p in self.players.iter() {
            write!(f, "\n{}\n", p)?;
        }
        Ok(())
    }
}
