use crate::mancala_errors::*;
use crate::moves::{self, sow_cups};
use crate::seats::Seat;
use crate::utils::generate_sequence;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::rc::Rc;

// ---------------------------------------------
// Board Types
// ---------------------------------------------

// Indexes and their associated letters for a side length of six:
//
//      a   b   c   d   e   f
//      1   2   3   4   5   6
//   0                           7
//      13  12  11  10  9   8
//      g   h   i   j   k   l
//
// Index 0 is Player 1's store, the midpoint is Player 2's store.

/// Bijection between cup labels and slot indices. Built once per board and
/// shared by every copy of it.
#[derive(Debug, PartialEq)]
pub struct CupLayout {
    side_length: usize,
    cup_to_index: HashMap<String, usize>,
    index_to_cup: Vec<Option<String>>,
}

impl CupLayout {
    fn new(side_length: usize) -> CupLayout {
        let total = side_length * 2 + 2;
        let midpoint = moves::midpoint(total);
        let mut cup_to_index = HashMap::with_capacity(total - 2);
        let mut index_to_cup = vec![None; total];

        // Top row left to right, then the bottom row right to left, drawing
        // from one running sequence.
        let order = (1..midpoint).chain((midpoint + 1..total).rev());
        for (index, letter) in order.zip(generate_sequence(total - 2)) {
            cup_to_index.insert(letter.clone(), index);
            index_to_cup[index] = Some(letter);
        }

        CupLayout {
            side_length: side_length,
            cup_to_index: cup_to_index,
            index_to_cup: index_to_cup,
        }
    }
}

/// The cups of one match. Cloning is a deep copy of the cups; the layout is
/// shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cups: Vec<u32>,
    layout: Rc<CupLayout>,
}

impl Board {
    pub fn new(side_length: usize) -> MancalaResult<Board> {
        if side_length == 0 {
            return Err(MancalaError::InvalidBoard(
                "side length must be at least 1".to_string(),
            ));
        }
        Ok(Board {
            cups: vec![0; side_length * 2 + 2],
            layout: Rc::new(CupLayout::new(side_length)),
        })
    }

    /// Board holding exactly the given cups, stores included.
    pub fn from_cups(cups: Vec<u32>) -> MancalaResult<Board> {
        if cups.len() < 4 || cups.len() % 2 != 0 {
            return Err(MancalaError::InvalidBoard(format!(
                "expected an even number of at least 4 cups, got {}",
                cups.len()
            )));
        }
        let side_length = cups.len() / 2 - 1;
        Ok(Board {
            cups: cups,
            layout: Rc::new(CupLayout::new(side_length)),
        })
    }

    /// Puts `seeds` into every playable cup. Stores are left alone.
    pub fn initialize_cups(&mut self, seeds: u32) {
        let total = self.total_cups();
        for (i, cup) in self.cups.iter_mut().enumerate() {
            if !moves::is_store(total, i) {
                *cup = seeds;
            }
        }
    }

    /// Sows the cup with the given label and returns the index where the last
    /// seed landed. Nothing is touched when the label is unknown or the cup is
    /// empty.
    pub fn sow(&mut self, cup: &str) -> MancalaResult<usize> {
        let index = self
            .cup_index(cup)
            .ok_or_else(|| MancalaError::InvalidCup(cup.to_string()))?;
        if self.cups[index] == 0 {
            return Err(MancalaError::EmptyCup(cup.to_string()));
        }
        Ok(sow_cups(&mut self.cups, index))
    }

    /// True once both rows are empty. Stores may hold anything.
    pub fn done(&self) -> bool {
        self.top_row().iter().all(|&c| c == 0) && self.bottom_row().iter().all(|&c| c == 0)
    }
}

// Queries
impl Board {
    pub fn cups(&self) -> &[u32] {
        &self.cups
    }

    pub fn seeds(&self, index: usize) -> u32 {
        self.cups[index]
    }

    pub fn total_seeds(&self) -> u32 {
        self.cups.iter().sum()
    }

    pub fn side_length(&self) -> usize {
        self.layout.side_length
    }

    pub fn total_cups(&self) -> usize {
        self.cups.len()
    }

    pub fn midpoint(&self) -> usize {
        moves::midpoint(self.total_cups())
    }

    pub fn cup_index(&self, cup: &str) -> Option<usize> {
        self.layout.cup_to_index.get(cup).copied()
    }

    /// Label of a playable cup; `None` for stores and out-of-range indices.
    pub fn cup_label(&self, index: usize) -> Option<&str> {
        self.layout
            .index_to_cup
            .get(index)
            .and_then(|c| c.as_deref())
    }

    pub fn labels(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.layout
            .cup_to_index
            .iter()
            .map(|(label, &index)| (label.as_str(), index))
    }

    pub fn top_row(&self) -> &[u32] {
        &self.cups[moves::top_row_range(self.total_cups())]
    }

    pub fn top_row_indices(&self) -> Vec<usize> {
        moves::top_row_range(self.total_cups()).collect()
    }

    /// Top row labels in screen order (left to right). Up to `z` this is
    /// also alphabetical; past it, `aa` stays after `z` instead of sorting
    /// next to `a`.
    pub fn top_row_cups(&self) -> Vec<&str> {
        self.top_row_indices()
            .into_iter()
            .filter_map(|i| self.cup_label(i))
            .collect()
    }

    pub fn bottom_row(&self) -> &[u32] {
        &self.cups[moves::bottom_row_range(self.total_cups())]
    }

    pub fn bottom_row_indices(&self) -> Vec<usize> {
        moves::bottom_row_range(self.total_cups()).collect()
    }

    /// Bottom row labels in screen order (left to right), which is the order
    /// they were handed out in. Labels run against the index here. Same
    /// caveat as [`Board::top_row_cups`] for labels past `z`.
    pub fn bottom_row_cups(&self) -> Vec<&str> {
        self.bottom_row_indices()
            .into_iter()
            .rev()
            .filter_map(|i| self.cup_label(i))
            .collect()
    }

    pub fn natural_row_indices(&self, seat: Seat) -> Vec<usize> {
        moves::natural_row(self.total_cups(), seat).collect()
    }

    pub fn store_index(&self, seat: Seat) -> usize {
        moves::store_index(self.total_cups(), seat)
    }

    pub fn store(&self, seat: Seat) -> u32 {
        self.cups[self.store_index(seat)]
    }

    pub fn player_1_store(&self) -> u32 {
        self.store(Seat::PlayerOne)
    }

    pub fn player_2_store(&self) -> u32 {
        self.store(Seat::PlayerTwo)
    }

    /// Indices of every cup that can be sown right now.
    pub fn legal_indices(&self) -> Vec<usize> {
        moves::gen_moves(&self.cups).iter().map(|m| m.index).collect()
    }
}

const CELL_WIDTH: usize = 4;

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = " ".repeat(CELL_WIDTH);
        write!(f, "{}", pad)?;
        for label in self.top_row_cups() {
            write!(f, "{:>w$}", label, w = CELL_WIDTH)?;
        }
        write!(f, "\n{}", pad)?;
        for seeds in self.top_row() {
            write!(f, "{:>w$}", seeds, w = CELL_WIDTH)?;
        }
        write!(
            f,
            "\n{:>w$}{}{:>w$}\n{}",
            self.player_1_store(),
            " ".repeat(CELL_WIDTH * self.side_length()),
            self.player_2_store(),
            pad,
            w = CELL_WIDTH
        )?;
        for seeds in self.bottom_row().iter().rev() {
            write!(f, "{:>w$}", seeds, w = CELL_WIDTH)?;
        }
        write!(f, "\n{}", pad)?;
        for label in self.bottom_row_cups() {
            write!(f, "{:>w$}", label, w = CELL_WIDTH)?;
        }
        Ok(())
    }
}
