//! Dilation for visually sparse grids

use std::borrow::Cow;

use crate::io::configuration::SPARSE_DENSITY_THRESHOLD;
use crate::spatial::lattice::Lattice;

/// Grow every active cell into its in-bounds 8-neighborhood
pub fn dilate(lattice: &Lattice) -> Lattice {
    lattice.map_cells(|row, col, active| active || lattice.planar_neighbor_count(row, col) > 0)
}

/// Dilated copy when density is below the sparse threshold, otherwise the input
pub fn enhance(lattice: &Lattice) -> Cow<'_, Lattice> {
    if lattice.density() < SPARSE_DENSITY_THRESHOLD {
        Cow::Owned(dilate(lattice))
    } else {
        Cow::Borrowed(lattice)
    }
}
