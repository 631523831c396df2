//! Tests for aggregate network metrics and binary entropy

#[cfg(test)]
mod tests {
    use latticeart::analysis::metrics::binary_entropy;
    use latticeart::analysis::{NetworkMetrics, analyze, find_components};
    use latticeart::spatial::Lattice;

    const TOLERANCE: f64 = 1e-4;

    // Tests entropy vanishes for empty and full grids
    #[test]
    fn test_entropy_boundaries() {
        assert!(binary_entropy(0, 100).abs() < TOLERANCE);
        assert!(binary_entropy(100, 100).abs() < TOLERANCE);
        assert!((binary_entropy(50, 100) - 1.0).abs() < TOLERANCE);
        assert!((binary_entropy(5, 15) - 0.9183).abs() < TOLERANCE);
    }

    // Tests entropy is symmetric in the active and inactive counts
    #[test]
    fn test_entropy_symmetry() {
        for active in 1..40 {
            let forward = binary_entropy(active, 40);
            let mirrored = binary_entropy(40 - active, 40);
            assert!((forward - mirrored).abs() < 1e-12);
            assert!(forward > 0.0 && forward <= 1.0);
        }
    }

    // Tests the metrics of a single horizontal line
    #[test]
    fn test_analyze_line() {
        let lattice = Lattice::from_rows(&[
            vec![0, 0, 0, 0, 0],
            vec![1, 1, 1, 1, 1],
            vec![0, 0, 0, 0, 0],
        ])
        .expect("lattice");
        let metrics = analyze(&lattice);

        assert_eq!(metrics.active_cells, 5);
        assert_eq!(metrics.cluster_count, 1);
        assert_eq!(metrics.largest_cluster, 5);
        assert_eq!(metrics.pathway_count, 1);
        assert!((metrics.active_ratio - 1.0 / 3.0).abs() < TOLERANCE);
        assert!((metrics.fragmentation - 0.2).abs() < TOLERANCE);
        assert!((metrics.entropy - 0.9183).abs() < TOLERANCE);
    }

    // Tests an empty grid reports zeros rather than dividing by zero
    #[test]
    fn test_analyze_empty() {
        let metrics = analyze(&Lattice::new(4, 6).expect("lattice"));
        assert_eq!(metrics.active_cells, 0);
        assert_eq!(metrics.cluster_count, 0);
        assert_eq!(metrics.largest_cluster, 0);
        assert_eq!(metrics.pathway_count, 0);
        assert!(metrics.fragmentation.abs() < TOLERANCE);
        assert!(metrics.entropy.abs() < TOLERANCE);
    }

    // Tests isolated cells give maximal fragmentation
    #[test]
    fn test_fragmentation_of_isolated_cells() {
        let rows = [vec![1, 0, 1, 0, 1], vec![0, 0, 0, 0, 0]];
        let lattice = Lattice::from_rows(&rows).expect("lattice");
        let metrics = analyze(&lattice);
        assert_eq!(metrics.cluster_count, 3);
        assert_eq!(metrics.pathway_count, 0);
        assert!((metrics.fragmentation - 1.0).abs() < TOLERANCE);
    }

    // Tests aggregation from precomputed components agrees with analyze
    #[test]
    fn test_from_components_matches_analyze() {
        let rows = [vec![1, 1, 0, 0], vec![0, 1, 0, 1], vec![0, 0, 0, 1]];
        let lattice = Lattice::from_rows(&rows).expect("lattice");
        let components = find_components(&lattice);
        let (active, total) = (lattice.active_count(), lattice.total_cells());
        let aggregated = NetworkMetrics::from_components(&components, active, total);
        assert_eq!(aggregated, analyze(&lattice));
    }

    // Tests the one-line summary format
    #[test]
    fn test_display() {
        let lattice = Lattice::from_rows(&[vec![1, 1, 1, 0]]).expect("lattice");
        assert_eq!(
            analyze(&lattice).to_string(),
            "Active: 3 (0.750) | Clusters: 1 | Largest: 3 | Fragmentation: 0.333 | Pathways: 1 | Entropy: 0.811"
        );
    }
}
