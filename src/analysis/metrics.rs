//! Aggregate network metrics computed from a lattice

use std::fmt;

use crate::analysis::components::{Component, find_components};
use crate::spatial::lattice::Lattice;

/// Topological summary of one lattice state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkMetrics {
    /// Number of active cells
    pub active_cells: usize,
    /// Active cells divided by total cells
    pub active_ratio: f64,
    /// Number of connected components
    pub cluster_count: usize,
    /// Size of the largest component (0 when nothing is active)
    pub largest_cluster: usize,
    /// Components per active cell; lower is more connected
    pub fragmentation: f64,
    /// Components with at least three cells
    pub pathway_count: usize,
    /// Binary Shannon entropy of the active/inactive split, in bits
    pub entropy: f64,
}

impl NetworkMetrics {
    /// Aggregate precomputed components
    pub fn from_components(
        components: &[Component],
        active_cells: usize,
        total_cells: usize,
    ) -> Self {
        let cluster_count = components.len();
        Self {
            active_cells,
            active_ratio: active_cells as f64 / total_cells.max(1) as f64,
            cluster_count,
            largest_cluster: components.iter().map(Component::len).max().unwrap_or(0),
            fragmentation: cluster_count as f64 / active_cells.max(1) as f64,
            pathway_count: components.iter().filter(|c| c.is_pathway()).count(),
            entropy: binary_entropy(active_cells, total_cells),
        }
    }
}

impl fmt::Display for NetworkMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Active: {} ({:.3}) | Clusters: {} | Largest: {} | Fragmentation: {:.3} | Pathways: {} | Entropy: {:.3}",
            self.active_cells,
            self.active_ratio,
            self.cluster_count,
            self.largest_cluster,
            self.fragmentation,
            self.pathway_count,
            self.entropy
        )
    }
}

/// Compute all metrics for a lattice
pub fn analyze(lattice: &Lattice) -> NetworkMetrics {
    let components = find_components(lattice);
    NetworkMetrics::from_components(&components, lattice.active_count(), lattice.total_cells())
}

/// Shannon entropy of a two-way split, defined as 0 for an empty or full grid
pub fn binary_entropy(active_cells: usize, total_cells: usize) -> f64 {
    if active_cells == 0 || active_cells >= total_cells {
        return 0.0;
    }
    let p1 = active_cells as f64 / total_cells as f64;
    let p0 = 1.0 - p1;
    -(p0 * p0.log2() + p1 * p1.log2())
}
