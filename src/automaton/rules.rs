//! Pure transition functions applied cell by cell

use crate::spatial::lattice::Lattice;

/// Standard two-state rule: survive on 2 or 3 neighbors, birth on exactly 3
pub const fn next_state(active: bool, live_neighbors: usize) -> bool {
    matches!((active, live_neighbors), (true, 2 | 3) | (false, 3))
}

/// Flip `base` when the digit's threshold `digit / 9` falls below `rate`
pub fn perturb(base: bool, digit: u8, rate: f64) -> bool {
    let threshold = f64::from(digit) / 9.0;
    if threshold < rate { !base } else { base }
}

/// Apply the base rule to every cell using toroidal neighbor counts
///
/// The result is computed entirely from `lattice`; nothing is written back.
pub fn base_generation(lattice: &Lattice) -> Lattice {
    lattice.map_cells(|row, col, active| next_state(active, lattice.neighbor_count(row, col)))
}

/// Digit assigned to a cell: `digits[(row * width + col) mod len]`
pub fn perturbation_digit(digits: &[u8], row: usize, col: usize, width: usize) -> Option<u8> {
    if digits.is_empty() {
        return None;
    }
    digits.get((row * width + col) % digits.len()).copied()
}

/// Pass every cell through the perturbation filter
///
/// Returns the filtered lattice and the number of flipped cells.
pub fn apply_perturbation(next: &Lattice, digits: &[u8], rate: f64) -> (Lattice, usize) {
    let width = next.width();
    let mut flipped = 0;
    let perturbed = next.map_cells(|row, col, base| {
        let state = perturbation_digit(digits, row, col, width)
            .map_or(base, |digit| perturb(base, digit, rate));
        if state != base {
            flipped += 1;
        }
        state
    });
    (perturbed, flipped)
}
