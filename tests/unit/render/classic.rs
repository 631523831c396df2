//! Tests for the digit-driven shade style

#[cfg(test)]
mod tests {
    use latticeart::render::classic::{render_classic, shade};
    use latticeart::sequence::DigitSource;
    use latticeart::spatial::Lattice;

    // Tests shade lookup, with digit 9 clamped to the last glyph
    #[test]
    fn test_shade_table() {
        assert_eq!(shade(0), ' ');
        assert_eq!(shade(1), '░');
        assert_eq!(shade(4), '█');
        assert_eq!(shade(8), '★');
        assert_eq!(shade(9), '★');
    }

    // Tests one digit is consumed per active cell in row-major order
    #[test]
    fn test_render_consumes_digits_row_major() {
        let lattice = Lattice::from_rows(&[vec![1, 1, 0], vec![0, 0, 1]]).expect("lattice");
        let mut digits = DigitSource::from_digits(vec![4, 8, 1, 3], 0).expect("source");
        let art = render_classic(&lattice, &mut digits);

        assert_eq!(art.glyph_lines, vec!["█★".to_string(), "  ░".to_string()]);
        assert_eq!(digits.position(), 3);
        assert_eq!(art.metrics.active_cells, 3);
    }

    // Tests an empty lattice renders empty rows and draws nothing
    #[test]
    fn test_render_empty() {
        let lattice = Lattice::new(2, 4).expect("lattice");
        let mut digits = DigitSource::from_digits(vec![5; 4], 1).expect("source");
        let art = render_classic(&lattice, &mut digits);

        assert_eq!(art.glyph_lines, vec![String::new(), String::new()]);
        assert_eq!(digits.position(), 1);
    }
}
