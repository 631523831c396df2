//! Neighborhood encoding and glyph selection
//!
//! Each active cell is summarised by an 8-bit vector with one bit per planar
//! neighbor. A small table maps the orthogonal patterns to box-drawing
//! glyphs; every other vector falls back to a rule keyed on its population
//! count.

use crate::spatial::lattice::Lattice;

/// Top-left neighbor bit
pub const TOP_LEFT: u8 = 0b1000_0000;
/// Top neighbor bit
pub const TOP: u8 = 0b0100_0000;
/// Top-right neighbor bit
pub const TOP_RIGHT: u8 = 0b0010_0000;
/// Left neighbor bit
pub const LEFT: u8 = 0b0001_0000;
/// Right neighbor bit
pub const RIGHT: u8 = 0b0000_1000;
/// Bottom-left neighbor bit
pub const BOTTOM_LEFT: u8 = 0b0000_0100;
/// Bottom neighbor bit
pub const BOTTOM: u8 = 0b0000_0010;
/// Bottom-right neighbor bit
pub const BOTTOM_RIGHT: u8 = 0b0000_0001;

/// Rendered symbol for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Nothing drawn
    Blank,
    /// Isolated or unconnected point
    Point,
    /// Connection to the left only
    StubLeft,
    /// Connection to the right only
    StubRight,
    /// Connection upward only
    StubUp,
    /// Connection downward only
    StubDown,
    /// Left and right
    Horizontal,
    /// Up and down
    Vertical,
    /// Right and down
    CornerDownRight,
    /// Left and down
    CornerDownLeft,
    /// Up and right
    CornerUpRight,
    /// Up and left
    CornerUpLeft,
    /// Left, right and down
    TeeDown,
    /// Left, right and up
    TeeUp,
    /// Up, down and right
    TeeRight,
    /// Up, down and left
    TeeLeft,
    /// All four orthogonal directions
    Cross,
    /// Unlisted pattern with three or more neighbors
    Junction,
    /// Unlisted pattern with exactly two neighbors
    Link,
}

impl Glyph {
    /// Display character
    pub const fn symbol(self) -> char {
        match self {
            Self::Blank => ' ',
            Self::Point => '●',
            Self::StubLeft => '╸',
            Self::StubRight => '╺',
            Self::StubUp => '╹',
            Self::StubDown => '╻',
            Self::Horizontal => '━',
            Self::Vertical => '┃',
            Self::CornerDownRight => '┏',
            Self::CornerDownLeft => '┓',
            Self::CornerUpRight => '┗',
            Self::CornerUpLeft => '┛',
            Self::TeeDown => '┳',
            Self::TeeUp => '┻',
            Self::TeeRight => '┣',
            Self::TeeLeft => '┫',
            Self::Cross => '╋',
            Self::Junction => '┼',
            Self::Link => '─',
        }
    }

    /// Whether the glyph claims three or more connections
    pub const fn is_junction(self) -> bool {
        matches!(
            self,
            Self::TeeDown
                | Self::TeeUp
                | Self::TeeRight
                | Self::TeeLeft
                | Self::Cross
                | Self::Junction
        )
    }
}

/// Encode the planar 8-neighborhood of a cell, TL in the high bit
pub fn encode_neighborhood(lattice: &Lattice, row: usize, col: usize) -> u8 {
    lattice
        .planar_neighbors(row, col)
        .iter()
        .enumerate()
        .filter(|&(_, &active)| active)
        .fold(0, |vector, (index, _)| vector | (TOP_LEFT >> index))
}

/// Explicit table entry for a vector, if any
pub const fn lookup(vector: u8) -> Option<Glyph> {
    const LEFT_RIGHT: u8 = LEFT | RIGHT;
    const TOP_BOTTOM: u8 = TOP | BOTTOM;
    const RIGHT_BOTTOM: u8 = RIGHT | BOTTOM;
    const LEFT_BOTTOM: u8 = LEFT | BOTTOM;
    const TOP_RIGHT_ORTHO: u8 = TOP | RIGHT;
    const TOP_LEFT_ORTHO: u8 = TOP | LEFT;
    const TEE_DOWN: u8 = LEFT | RIGHT | BOTTOM;
    const TEE_UP: u8 = LEFT | RIGHT | TOP;
    const TEE_RIGHT: u8 = TOP | BOTTOM | RIGHT;
    const TEE_LEFT: u8 = TOP | BOTTOM | LEFT;
    const CROSS: u8 = TOP | BOTTOM | LEFT | RIGHT;

    let glyph = match vector {
        0 => Glyph::Blank,
        LEFT => Glyph::StubLeft,
        RIGHT => Glyph::StubRight,
        TOP => Glyph::StubUp,
        BOTTOM => Glyph::StubDown,
        LEFT_RIGHT => Glyph::Horizontal,
        TOP_BOTTOM => Glyph::Vertical,
        RIGHT_BOTTOM => Glyph::CornerDownRight,
        LEFT_BOTTOM => Glyph::CornerDownLeft,
        TOP_RIGHT_ORTHO => Glyph::CornerUpRight,
        TOP_LEFT_ORTHO => Glyph::CornerUpLeft,
        TEE_DOWN => Glyph::TeeDown,
        TEE_UP => Glyph::TeeUp,
        TEE_RIGHT => Glyph::TeeRight,
        TEE_LEFT => Glyph::TeeLeft,
        CROSS => Glyph::Cross,
        _ => return None,
    };
    Some(glyph)
}

/// Table lookup with the population-count fallback
pub const fn classify(vector: u8) -> Glyph {
    if let Some(glyph) = lookup(vector) {
        return glyph;
    }
    match vector.count_ones() {
        0 => Glyph::Blank,
        1 => Glyph::Point,
        2 => Glyph::Link,
        _ => Glyph::Junction,
    }
}

/// Downgrade a junction glyph to a point unless it has at least 3 live neighbors
pub const fn validate_junction(glyph: Glyph, live_neighbors: usize) -> Glyph {
    if glyph.is_junction() && live_neighbors < 3 {
        Glyph::Point
    } else {
        glyph
    }
}

/// Glyph for an active cell of `lattice`
pub fn select_glyph(lattice: &Lattice, row: usize, col: usize) -> Glyph {
    let vector = encode_neighborhood(lattice, row, col);
    validate_junction(classify(vector), lattice.planar_neighbor_count(row, col))
}
