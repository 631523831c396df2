//! Tests for seeding, stagnation handling and the engine lifecycle

#[cfg(test)]
mod tests {
    use latticeart::automaton::engine::derive_steps;
    use latticeart::automaton::{AutomatonEngine, EngineState};
    use latticeart::sequence::DigitSource;
    use latticeart::spatial::Lattice;

    fn repeated(pattern: &[u8], times: usize) -> DigitSource {
        DigitSource::from_digits(pattern.repeat(times), 0).expect("valid digits")
    }

    fn block(size: usize) -> Lattice {
        let mut lattice = Lattice::new(size, size).expect("lattice");
        for (row, col) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
            lattice.set(row, col, true).expect("in bounds");
        }
        lattice
    }

    // Tests all-nine digits stack every cluster on one wrapped 3x3 block
    #[test]
    fn test_seed_all_nines_wraps_corner() {
        let mut digits = repeated(&[9], 32);
        let mut engine = AutomatonEngine::new(Lattice::new(10, 10).expect("lattice"));
        assert_eq!(engine.state(), EngineState::Unseeded);

        engine.seed(&mut digits);

        assert_eq!(engine.state(), EngineState::Seeded);
        assert_eq!(digits.position(), 16);
        assert_eq!(
            engine.lattice().active_positions().collect::<Vec<_>>(),
            vec![
                (0, 0),
                (0, 8),
                (0, 9),
                (1, 0),
                (1, 8),
                (1, 9),
                (9, 0),
                (9, 8),
                (9, 9)
            ]
        );
    }

    // Tests the gate digit selects only some offsets of each cluster
    #[test]
    fn test_seed_gating_selects_offsets() {
        let mut digits = repeated(&[6, 0], 16);
        let mut engine = AutomatonEngine::new(Lattice::new(20, 20).expect("lattice"));
        engine.seed(&mut digits);

        assert_eq!(
            engine.lattice().active_positions().collect::<Vec<_>>(),
            vec![(1, 1), (1, 19), (2, 0), (3, 1), (3, 19)]
        );
    }

    // Tests a still life is perturbed once stagnation is detected
    #[test]
    fn test_stagnant_block_is_perturbed() {
        let mut digits = repeated(&[0, 5, 5, 5, 5, 5, 5, 5], 10);
        let mut engine = AutomatonEngine::new(block(6));

        let first = engine.evolve_step(&mut digits);
        assert!(!first.stagnant);
        assert_eq!(first.generation, 1);
        assert_eq!(first.active_cells, 4);
        assert_eq!(engine.lattice(), &block(6));
        assert_eq!(digits.position(), 8);

        let second = engine.evolve_step(&mut digits);
        assert!(second.stagnant);
        assert_eq!(second.flipped, 5);
        assert_eq!(second.active_cells, 9);
        assert_eq!(digits.position(), 16);

        let third = engine.evolve_step(&mut digits);
        assert!(!third.stagnant);
        assert_eq!(third.active_cells, 12);
        assert_ne!(engine.lattice(), &block(6));
        assert_eq!(digits.position(), 24);
        assert_eq!(engine.perturbed_steps(), 1);
    }

    // Tests a glider translates across the torus without perturbation
    #[test]
    fn test_glider_step() {
        let mut lattice = Lattice::new(6, 6).expect("lattice");
        for (row, col) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
            lattice.set(row, col, true).expect("in bounds");
        }
        let mut digits = repeated(&[5], 64);
        let mut engine = AutomatonEngine::new(lattice);

        let outcome = engine.evolve_step(&mut digits);
        assert!(!outcome.stagnant);
        assert_eq!(
            engine.lattice().active_positions().collect::<Vec<_>>(),
            vec![(1, 0), (1, 2), (2, 1), (2, 2), (3, 1)]
        );
    }

    // Tests an empty lattice is stagnant but stays empty under non-zero digits
    #[test]
    fn test_empty_lattice_stays_empty() {
        let mut digits = repeated(&[7], 64);
        let mut engine = AutomatonEngine::new(Lattice::new(4, 4).expect("lattice"));
        engine.run(3, &mut digits);

        assert_eq!(engine.lattice().active_count(), 0);
        assert_eq!(engine.perturbed_steps(), 2);
    }

    // Tests a bounded run reports every step and finishes in the done state
    #[test]
    fn test_run_observed_lifecycle() {
        let mut digits = DigitSource::with_position(200, 11).expect("source");
        let mut engine = AutomatonEngine::new(Lattice::new(12, 16).expect("lattice"));
        engine.seed(&mut digits);

        let mut seen = Vec::new();
        engine.run_observed(7, &mut digits, |outcome, lattice| {
            assert_eq!(outcome.active_cells, lattice.active_count());
            seen.push(outcome.generation);
        });

        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(engine.generation(), 7);
        assert_eq!(engine.state(), EngineState::Done);
        assert_eq!(engine.history().len(), 5);
        assert_eq!(engine.into_lattice().dimensions(), (12, 16));
    }

    // Tests identical inputs evolve identically
    #[test]
    fn test_evolution_is_deterministic() {
        let evolve = || {
            let mut digits = DigitSource::with_position(300, 99).expect("source");
            let mut engine = AutomatonEngine::new(Lattice::new(10, 14).expect("lattice"));
            engine.seed(&mut digits);
            engine.run(12, &mut digits);
            (engine.into_lattice(), digits.position())
        };
        assert_eq!(evolve(), evolve());
    }

    // Tests the derived step count formula and its range
    #[test]
    fn test_derive_steps() {
        let mut digits = DigitSource::from_digits(vec![3, 7, 9, 9, 0, 4], 0).expect("source");
        assert_eq!(derive_steps(&mut digits), 41);
        assert_eq!(derive_steps(&mut digits), 21);
        assert_eq!(derive_steps(&mut digits), 20);

        let mut source = DigitSource::with_position(500, 0).expect("source");
        for _ in 0..200 {
            let steps = derive_steps(&mut source);
            assert!((20..60).contains(&steps));
        }
    }
}
