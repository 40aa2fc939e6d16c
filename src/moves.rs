//! Describing the sows that can be made on a ring of cups.
//!
//! Everything here works on a bare cup slice so the same rules serve the live
//! board, scratch copies and the search buffers.
use crate::seats::Seat;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub index: usize,
    pub seeds: u32,
    pub landing: usize,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})->{}", self.index, self.seeds, self.landing)
    }
}

impl Move {
    pub fn new(index: usize, seeds: u32, total_cups: usize) -> Self {
        Move {
            index: index,
            seeds: seeds,
            landing: (index + seeds as usize) % total_cups,
        }
    }
}

pub fn midpoint(total_cups: usize) -> usize {
    total_cups / 2
}

pub fn store_index(total_cups: usize, seat: Seat) -> usize {
    match seat {
        Seat::PlayerOne => 0,
        Seat::PlayerTwo => midpoint(total_cups),
    }
}

pub fn is_store(total_cups: usize, index: usize) -> bool {
    index == 0 || index == midpoint(total_cups)
}

pub fn top_row_range(total_cups: usize) -> Range<usize> {
    1..midpoint(total_cups)
}

pub fn bottom_row_range(total_cups: usize) -> Range<usize> {
    midpoint(total_cups) + 1..total_cups
}

/// The row that sows toward the seat's own store.
pub fn natural_row(total_cups: usize, seat: Seat) -> Range<usize> {
    match seat {
        Seat::PlayerOne => bottom_row_range(total_cups),
        Seat::PlayerTwo => top_row_range(total_cups),
    }
}

/// Empties the cup at `index` and drops one seed in each following slot,
/// stores included, wrapping around the ring. Returns the index of the slot
/// that received the last seed. The caller guarantees the cup is not empty.
pub fn sow_cups(cups: &mut [u32], index: usize) -> usize {
    debug_assert!(cups[index] > 0, "Sowing from empty cup {}", index);
    let total = cups.len();
    let mut seeds = cups[index];
    let mut current = index;
    cups[index] = 0;
    while seeds > 0 {
        current = (current + 1) % total;
        cups[current] += 1;
        seeds -= 1;
    }
    current
}

/// Every non-empty playable cup, ascending by index.
pub fn gen_moves(cups: &[u32]) -> Vec<Move> {
    let total = cups.len();
    cups.iter()
        .enumerate()
        .filter(|&(i, &seeds)| seeds > 0 && !is_store(total, i))
        .map(|(i, &seeds)| Move::new(i, seeds, total))
        .collect()
}

/// Moves whose last seed lands in the seat's own store.
pub fn free_moves(cups: &[u32], seat: Seat) -> Vec<Move> {
    let store = store_index(cups.len(), seat);
    gen_moves(cups)
        .into_iter()
        .filter(|m| m.landing == store)
        .collect()
}

/// Non-empty cups in the seat's natural row.
pub fn filled_cups(cups: &[u32], seat: Seat) -> usize {
    natural_row(cups.len(), seat)
        .filter(|&i| cups[i] > 0)
        .count()
}

/// Forward distance around the ring from `source` to `target`.
pub fn distance(source: usize, target: usize, total_cups: usize) -> usize {
    (target + total_cups - source % total_cups) % total_cups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Vec<u32> {
        vec![0, 4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4]
    }

    #[test]
    fn test_sow_cups() {
        let mut cups = start();
        let landing = sow_cups(&mut cups, 1);
        assert_eq!(cups, vec![0, 0, 5, 5, 5, 5, 4, 0, 4, 4, 4, 4, 4, 4]);
        assert_eq!(landing, 5);
    }

    #[test]
    fn test_sow_many_laps() {
        let mut cups = vec![0, 30, 0, 0, 0, 0];
        let landing = sow_cups(&mut cups, 1);
        assert_eq!(cups.iter().sum::<u32>(), 30);
        // 30 seeds over 6 slots: five full laps, ending back on the source cup
        assert_eq!(cups, vec![5, 5, 5, 5, 5, 5]);
        assert_eq!(landing, 1);
    }

    #[test]
    fn test_gen_moves_skips_stores() {
        let cups = vec![3, 0, 2, 5, 0, 1];
        let moves = gen_moves(&cups);
        let indices: Vec<usize> = moves.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![2, 5]);
        assert_eq!(moves[0].landing, 4);
        assert_eq!(moves[1].landing, 0);
    }

    #[test]
    fn test_free_moves() {
        let cups = start();
        let p2: Vec<usize> = free_moves(&cups, Seat::PlayerTwo)
            .iter()
            .map(|m| m.index)
            .collect();
        // c (index 3) with four seeds ends on index 7
        assert_eq!(p2, vec![3]);
        let p1: Vec<usize> = free_moves(&cups, Seat::PlayerOne)
            .iter()
            .map(|m| m.index)
            .collect();
        // index 10 with four seeds ends on index 0
        assert_eq!(p1, vec![10]);
    }

    #[test]
    fn test_rows() {
        assert_eq!(top_row_range(14), 1..7);
        assert_eq!(bottom_row_range(14), 8..14);
        assert_eq!(natural_row(14, Seat::PlayerOne), 8..14);
        assert_eq!(natural_row(14, Seat::PlayerTwo), 1..7);
        assert!(is_store(14, 0) && is_store(14, 7) && !is_store(14, 8));
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(2, 4, 14), 2);
        assert_eq!(distance(13, 1, 14), 2);
        assert_eq!(distance(5, 5, 14), 0);
    }

    #[test]
    fn test_filled_cups() {
        let cups = vec![9, 1, 0, 9, 0, 2];
        assert_eq!(filled_cups(&cups, Seat::PlayerOne), 1);
        assert_eq!(filled_cups(&cups, Seat::PlayerTwo), 1);
    }
}
