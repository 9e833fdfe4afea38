//! The four vertex colors and permutations of them

use std::fmt;

use serde::{Serialize, Deserialize};

/// A vertex color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red = 0,
    Yellow = 1,
    Green = 2,
    Blue = 3,
}

/// One ordering of the four colors; entry `k` is the color for stage `k`
pub type ColorPermutation = [Color; 4];

impl Color {
    /// All colors in index order
    pub const ALL: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All 24 permutations of the four colors in lexicographic order
/// (`RYGB`, `RYBG`, `RGYB`, ... `BGYR`).
pub fn all_permutations() -> Vec<ColorPermutation> {
    let mut out = Vec::with_capacity(24);
    for a in Color::ALL {
        for b in Color::ALL {
            for c in Color::ALL {
                for d in Color::ALL {
                    let p = [a, b, c, d];
                    if is_permutation(&p) {
                        out.push(p);
                    }
                }
            }
        }
    }
    out
}

/// Whether every color appears exactly once
pub fn is_permutation(p: &ColorPermutation) -> bool {
    Color::ALL.iter().all(|c| p.iter().filter(|x| *x == c).count() == 1)
}

/// Render a permutation as its letters, e.g. `RYGB`
pub fn permutation_letters(p: &ColorPermutation) -> String {
    p.iter().map(|c| c.letter()).collect()
}
