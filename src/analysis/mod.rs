//! Topological analysis of lattice states

/// Pass/fail validation checks over network metrics
pub mod checkpoints;
/// Connected components and pathway tracing via flood fill
pub mod components;
/// Density, fragmentation and entropy metrics
pub mod metrics;

pub use components::{Component, find_components, trace_pathways};
pub use metrics::{NetworkMetrics, analyze};
