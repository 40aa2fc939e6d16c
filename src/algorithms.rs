use crate::boards::Board;
use crate::moves::{filled_cups, free_moves, gen_moves, sow_cups, store_index};
use crate::seats::Seat;
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops;

pub const DEFAULT_DEPTH: u16 = 4;
/// Added when a move at a maximizing ply earns the searching seat another turn.
const FREE_MOVE_BONUS: f64 = 1000.0;
/// Subtracted when a move at a minimizing ply earns the opponent another turn.
const OPPONENT_FREE_MOVE_PENALTY: f64 = 50.0;

/// Linear weights of the static evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub banked: f64,
    pub own_filled: f64,
    pub opponent_filled: f64,
    pub own_free_moves: f64,
    pub opponent_free_moves: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            banked: 1.0,
            own_filled: 0.12,
            opponent_filled: -0.12,
            own_free_moves: 25.0,
            opponent_free_moves: -35.0,
        }
    }
}

/// Counts the evaluation is built from, all seen from one seat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features {
    /// Sign of own store minus opponent store.
    pub banked: f64,
    pub own_filled: f64,
    pub opponent_filled: f64,
    pub own_free_moves: f64,
    pub opponent_free_moves: f64,
}

impl Features {
    pub fn of(cups: &[u32], seat: Seat) -> Features {
        let total = cups.len();
        let own = cups[store_index(total, seat)] as i64;
        let theirs = cups[store_index(total, seat.opposite())] as i64;
        Features {
            banked: (own - theirs).signum() as f64,
            own_filled: filled_cups(cups, seat) as f64,
            opponent_filled: filled_cups(cups, seat.opposite()) as f64,
            own_free_moves: free_moves(cups, seat).len() as f64,
            opponent_free_moves: free_moves(cups, seat.opposite()).len() as f64,
        }
    }
}

impl_op_ex!(*|w: &Weights, f: &Features| -> f64 {
    w.banked * f.banked
        + w.own_filled * f.own_filled
        + w.opponent_filled * f.opponent_filled
        + w.own_free_moves * f.own_free_moves
        + w.opponent_free_moves * f.opponent_free_moves
});

pub trait MinimaxSearch {
    /// Static score of a position, from `seat`'s point of view. Higher => Better
    fn score(&self, cups: &[u32], seat: Seat) -> f64;

    /// Index of the cup `seat` should sow, looking `depth` plies ahead.
    /// `None` if there is nothing to sow.
    fn minimax<R: Rng + ?Sized>(
        &self,
        board: &Board,
        seat: Seat,
        depth: u16,
        rng: &mut R,
    ) -> Option<usize> {
        let depth = depth.max(1);
        // One buffer per ply, reused by every sibling at that ply.
        let mut arena = vec![board.cups().to_vec(); depth as usize + 1];
        let (value, best) = self.minimax_helper(&mut arena, seat, depth, true, rng);
        log::trace!("minimax {} picks {:?} at {:.2}", seat, best, value);
        best
    }

    #[doc(hidden)]
    fn minimax_helper<R: Rng + ?Sized>(
        &self,
        arena: &mut [Vec<u32>],
        seat: Seat,
        look_ahead: u16,
        maximizing: bool,
        rng: &mut R,
    ) -> (f64, Option<usize>) {
        let (current, deeper) = match arena.split_first_mut() {
            Some(split) => split,
            None => return (0.0, None),
        };

        if look_ahead == 0 || deeper.is_empty() {
            return (self.score(current, seat), None);
        }

        let moves = gen_moves(current);
        if moves.is_empty() {
            return (self.score(current, seat), None);
        }

        let mover = if maximizing { seat } else { seat.opposite() };
        let mover_store = store_index(current.len(), mover);

        if maximizing {
            let mut best_val = f64::NEG_INFINITY;
            let mut best_moves = Vec::new();

            for mv in moves {
                deeper[0].copy_from_slice(current);
                let landing = sow_cups(&mut deeper[0], mv.index);

                let val = if landing == mover_store {
                    FREE_MOVE_BONUS
                        + self.minimax_helper(deeper, seat, look_ahead - 1, true, rng).0
                } else {
                    self.minimax_helper(deeper, seat, look_ahead - 1, false, rng).0
                };

                if val > best_val {
                    best_val = val;
                    best_moves.clear();
                    best_moves.push(mv.index);
                } else if val == best_val {
                    best_moves.push(mv.index);
                }
            }
            (best_val, best_moves.choose(rng).copied())
        } else {
            let mut best_val = f64::INFINITY;
            let mut best_move = None;

            // First minimum wins; only the maximizing side randomizes ties.
            for mv in moves {
                deeper[0].copy_from_slice(current);
                let landing = sow_cups(&mut deeper[0], mv.index);

                let val = if landing == mover_store {
                    self.minimax_helper(deeper, seat, look_ahead - 1, false, rng).0
                        - OPPONENT_FREE_MOVE_PENALTY
                } else {
                    self.minimax_helper(deeper, seat, look_ahead - 1, true, rng).0
                };

                if val < best_val {
                    best_val = val;
                    best_move = Some(mv.index);
                }
            }
            (best_val, best_move)
        }
    }
}

impl MinimaxSearch for Weights {
    fn score(&self, cups: &[u32], seat: Seat) -> f64 {
        self * Features::of(cups, seat)
    }
}
