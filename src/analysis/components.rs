//! Connected components over planar 8-connectivity
//!
//! The flood fill is iterative with an explicit stack, so component size is
//! bounded only by the grid, never by call depth.

use bitvec::prelude::*;

use crate::io::configuration::MIN_PATHWAY_LENGTH;
use crate::spatial::lattice::Lattice;

/// Maximal set of mutually reachable active cells
///
/// Cell order reflects traversal and carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    cells: Vec<(usize, usize)>,
}

impl Component {
    /// Member cells as (row, col)
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Number of member cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the component has no cells (never true for produced components)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the component is long enough to count as a continuous trace
    pub fn is_pathway(&self) -> bool {
        self.cells.len() >= MIN_PATHWAY_LENGTH
    }

    /// Whether a cell belongs to the component
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

/// Find every connected component of active cells
pub fn find_components(lattice: &Lattice) -> Vec<Component> {
    let width = lattice.width();
    let mut visited = bitvec![0; lattice.total_cells()];
    let mut components = Vec::new();
    let mut stack = Vec::new();

    for (row, col) in lattice.active_positions() {
        if is_visited(&visited, row * width + col) {
            continue;
        }

        visited.set(row * width + col, true);
        stack.push((row, col));
        let mut cells = Vec::new();

        while let Some((r, c)) = stack.pop() {
            cells.push((r, c));
            for (nr, nc) in lattice.planar_neighbor_positions(r, c) {
                let index = nr * width + nc;
                if lattice.is_active(nr, nc) && !is_visited(&visited, index) {
                    visited.set(index, true);
                    stack.push((nr, nc));
                }
            }
        }

        components.push(Component { cells });
    }

    components
}

/// Components of at least three cells
pub fn trace_pathways(lattice: &Lattice) -> Vec<Component> {
    find_components(lattice)
        .into_iter()
        .filter(Component::is_pathway)
        .collect()
}

fn is_visited(visited: &BitVec, index: usize) -> bool {
    visited.get(index).as_deref() == Some(&true)
}
