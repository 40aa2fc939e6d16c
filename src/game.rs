use crate::boards::Board;
use crate::mancala_errors::*;
use crate::players::{GameResult, Player};
use crate::seats::Seat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    InProgress,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    pub player_1_store: u32,
    pub player_2_store: u32,
    /// `None` on a tie.
    pub winner: Option<Seat>,
    pub turns: u32,
}

/// One match between two seated players. The first player sits in seat One
/// and moves first.
pub struct Game<'a> {
    board: Board,
    players: [&'a mut Player; 2],
    current_player: Seat,
    state: MatchState,
    turn_count: u32,
}

impl<'a> Game<'a> {
    pub fn new(
        player1: &'a mut Player,
        player2: &'a mut Player,
        side_length: usize,
        initial_seeds: u32,
    ) -> MancalaResult<Game<'a>> {
        let mut board = Board::new(side_length)?;
        board.initialize_cups(initial_seeds);
        Ok(Game::from_board(board, player1, player2))
    }

    /// Match starting from an arbitrary board.
    pub fn from_board(board: Board, player1: &'a mut Player, player2: &'a mut Player) -> Game<'a> {
        player1.join(Seat::PlayerOne);
        player2.join(Seat::PlayerTwo);
        let state = if board.done() {
            MatchState::Done
        } else {
            MatchState::InProgress
        };
        Game {
            board: board,
            players: [player1, player2],
            current_player: Seat::PlayerOne,
            state: state,
            turn_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Seat {
        self.current_player
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.as_index()]
    }

    /// Plays the match to the end and hands out the results.
    pub fn run(&mut self) -> MancalaResult<MatchOutcome> {
        log::info!(
            "{} vs {}: {} cups a side",
            self.players[0].name,
            self.players[1].name,
            self.board.side_length()
        );
        while self.state == MatchState::InProgress {
            self.play_turn()?;
        }
        Ok(self.finish())
    }

    /// Asks the current player for cups until one can be sown, sows it and
    /// passes the turn on unless the last seed hit the mover's store.
    /// Returns the landing index.
    pub fn play_turn(&mut self) -> MancalaResult<usize> {
        loop {
            let seat = self.current_player;
            let player = &mut self.players[seat.as_index()];
            let cup = player.take_turn(&self.board)?;

            match self.board.sow(&cup) {
                Ok(landing) => {
                    self.turn_count += 1;
                    log::debug!(
                        "turn {}: {} sowed {}, last seed at {}",
                        self.turn_count,
                        player.name,
                        cup,
                        landing
                    );
                    self.determine_next_player(landing);
                    if self.board.done() {
                        self.state = MatchState::Done;
                    }
                    return Ok(landing);
                }
                Err(e) if e.is_recoverable() => {
                    log::warn!("{}: {}", player.name, e);
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn determine_next_player(&mut self, last_cup: usize) {
        if last_cup == self.board.store_index(self.current_player) {
            log::debug!("{} goes again", self.current_player);
        } else {
            self.current_player = self.current_player.opposite();
        }
    }

    /// Compares the stores, tells both players how they did and unseats them.
    pub fn finish(&mut self) -> MatchOutcome {
        self.state = MatchState::Done;
        let one = self.board.player_1_store();
        let two = self.board.player_2_store();
        let winner = if one > two {
            Some(Seat::PlayerOne)
        } else if two > one {
            Some(Seat::PlayerTwo)
        } else {
            None
        };

        for seat in Seat::both().iter() {
            let result = match winner {
                None => GameResult::Tie,
                Some(w) if w == *seat => GameResult::Win,
                Some(_) => GameResult::Loss,
            };
            self.players[seat.as_index()].game_over(result);
        }

        match winner {
            Some(w) => log::info!(
                "{} wins {} to {} after {} turns",
                self.players[w.as_index()].name,
                one.max(two),
                one.min(two),
                self.turn_count
            ),
            None => log::info!("tie at {} after {} turns", one, self.turn_count),
        }

        MatchOutcome {
            player_1_store: one,
            player_2_store: two,
            winner: winner,
            turns: self.turn_count,
        }
    }
}
