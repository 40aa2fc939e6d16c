#[cfg(test)]
use rand::{rngs::SmallRng, SeedableRng};

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Lazy, unbounded sequence of cup labels:
/// a, b, ..., z, aa, ab, ..., az, ba, ..., zz, aaa, ...
///
/// Position `p` is written in bijective base 26, so every label appears exactly once.
#[derive(Debug, Clone, Default)]
pub struct LabelSequence {
    position: usize,
}

impl LabelSequence {
    pub fn new() -> Self {
        LabelSequence { position: 0 }
    }
}

fn label_at(position: usize) -> String {
    let mut letters = Vec::new();
    let mut n = position + 1;
    while n > 0 {
        n -= 1;
        letters.push(ALPHABET[n % ALPHABET.len()]);
        n /= ALPHABET.len();
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

impl Iterator for LabelSequence {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let label = label_at(self.position);
        self.position += 1;
        Some(label)
    }
}

/// First `number_of_items` labels of the [`LabelSequence`].
pub fn generate_sequence(number_of_items: usize) -> Vec<String> {
    LabelSequence::new().take(number_of_items).collect()
}

// Functions relevant for tests
#[cfg(test)]
pub fn seeded_rng() -> SmallRng {
    SmallRng::seed_from_u64(0x6d61_6e63)
}

/// Builds a board of the given side length with every cup empty, then fills
/// the listed (label, seeds) pairs.
#[cfg(test)]
pub fn board_with(side_length: usize, seeds: &[(&str, u32)]) -> crate::boards::Board {
    let probe = crate::boards::Board::new(side_length).unwrap();
    let mut cups = vec![0; probe.total_cups()];
    for (label, n) in seeds {
        cups[probe.cup_index(label).unwrap()] = *n;
    }
    crate::boards::Board::from_cups(cups).unwrap()
}
