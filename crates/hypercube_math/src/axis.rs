//! The four axes of 4D space and bitmask sets of them
//!
//! Axis `d` corresponds to bit `d` of a vertex index.

use bitflags::bitflags;
use serde::{Serialize, Deserialize};

/// One of the four spatial axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    /// X axis (left/right)
    X = 0,
    /// Y axis (bottom/top)
    Y = 1,
    /// Z axis (front/back)
    Z = 2,
    /// W axis (zig/zag)
    W = 3,
}

impl Axis {
    /// All axes in index order
    pub const ALL: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::W];

    /// Order in which axes are listed when naming a shape, and the
    /// order in which rule generation walks dimension pairs.
    pub const NAMING_ORDER: [Axis; 4] = [Axis::W, Axis::Y, Axis::Z, Axis::X];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Single-letter symbol used in rotation names
    pub const fn symbol(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
            Axis::W => 'W',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.symbol() == symbol.to_ascii_uppercase())
    }

    /// Words for the low and high side of this axis
    pub const fn side_names(self) -> [&'static str; 2] {
        match self {
            Axis::X => ["left", "right"],
            Axis::Y => ["bottom", "top"],
            Axis::Z => ["front", "back"],
            Axis::W => ["zig", "zag"],
        }
    }

    /// The vertex-index bit for this axis
    #[inline]
    pub const fn bit(self) -> usize {
        1 << (self as usize)
    }

    pub fn mask(self) -> AxisMask {
        AxisMask::from_bits_truncate(self.bit() as u8)
    }
}

bitflags! {
    /// A set of axes, laid out like the bits of a vertex index
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct AxisMask: u8 {
        const X = 0b0001;
        const Y = 0b0010;
        const Z = 0b0100;
        const W = 0b1000;
    }
}

impl AxisMask {
    /// Number of axes in the set
    pub fn count(self) -> u32 {
        self.bits().count_ones()
    }

    /// Iterate the contained axes in index order
    pub fn axes(self) -> impl Iterator<Item = Axis> {
        Axis::ALL.into_iter().filter(move |a| self.contains(a.mask()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for axis in Axis::ALL {
            assert_eq!(Axis::from_index(axis.index()), Some(axis));
        }
        assert_eq!(Axis::from_index(4), None);
    }

    #[test]
    fn test_symbol_lookup_is_case_insensitive() {
        assert_eq!(Axis::from_symbol('w'), Some(Axis::W));
        assert_eq!(Axis::from_symbol('Y'), Some(Axis::Y));
        assert_eq!(Axis::from_symbol('Q'), None);
    }

    #[test]
    fn test_bits_match_vertex_layout() {
        assert_eq!(Axis::X.bit(), 1);
        assert_eq!(Axis::W.bit(), 8);
        assert_eq!(Axis::Z.mask(), AxisMask::Z);
    }

    #[test]
    fn test_mask_axes() {
        let m = AxisMask::Y | AxisMask::W;
        assert_eq!(m.count(), 2);
        assert_eq!(m.axes().collect::<Vec<_>>(), vec![Axis::Y, Axis::W]);
    }
}
