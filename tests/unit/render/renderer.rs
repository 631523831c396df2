//! Tests for the full rendering pipeline

#[cfg(test)]
mod tests {
    use latticeart::render::{ColorMode, Glyph, SymbolRenderer};
    use latticeart::spatial::Lattice;

    fn line() -> Lattice {
        Lattice::from_rows(&[
            vec![0, 0, 0, 0, 0],
            vec![1, 1, 1, 1, 1],
            vec![0, 0, 0, 0, 0],
        ])
        .expect("lattice")
    }

    // Tests a horizontal line renders as a capped bar
    #[test]
    fn test_render_line() {
        let art = SymbolRenderer::default().render(&line());
        assert_eq!(art.glyph_lines, vec!["", "╺━━━╸", ""]);
        assert_eq!(art.to_text(), "\n╺━━━╸\n");
        assert_eq!(art.to_string(), art.to_text());
    }

    // Tests a sparse grid is dilated for drawing while metrics keep the source
    #[test]
    fn test_render_sparse_dilates() {
        let mut lattice = Lattice::new(5, 5).expect("lattice");
        lattice.set(2, 2, true).expect("in bounds");
        let art = SymbolRenderer::default().render(&lattice);

        assert_eq!(art.glyph_lines, vec!["", " ┼┼┼", " ┼┼┼", " ┼┼┼", ""]);
        assert_eq!(art.metrics.active_cells, 1);
        assert_eq!(art.metrics.cluster_count, 1);
        assert_eq!(art.metrics.pathway_count, 0);
    }

    // Tests an active cell with no neighbors renders blank
    #[test]
    fn test_isolated_cell_renders_blank() {
        let rows = [vec![1, 1, 0], vec![0, 0, 0], vec![0, 0, 1]];
        let lattice = Lattice::from_rows(&rows).expect("lattice");
        let art = SymbolRenderer::default().render(&lattice);
        assert_eq!(art.glyph_lines, vec!["╺╸", "", ""]);
        assert_eq!(
            SymbolRenderer::row_glyphs(&lattice, 2),
            vec![Glyph::Blank, Glyph::Blank, Glyph::Blank]
        );
    }

    // Tests colour sequences follow each glyph's local density
    #[test]
    fn test_render_palette_colours() {
        let renderer = SymbolRenderer::new(ColorMode::Palette256);
        assert_eq!(renderer.color(), ColorMode::Palette256);
        let art = renderer.render(&line());
        let bar = art.glyph_lines.get(1).expect("bar row");

        assert!(bar.starts_with("\u{1b}[38;5;21m╺\u{1b}[0m"));
        assert_eq!(bar.matches("\u{1b}[0m").count(), 5);
    }

    // Tests plain output never contains control sequences
    #[test]
    fn test_render_plain_has_no_escapes() {
        for mode in [ColorMode::Off, ColorMode::Basic] {
            let art = SymbolRenderer::new(mode).render(&line());
            assert!(art.glyph_lines.iter().all(|row| !row.contains('\u{1b}')));
        }
    }

    // Tests rendered text converts back to the drawn lattice
    #[test]
    fn test_render_reparses_to_source() {
        let source = line();
        let art = SymbolRenderer::new(ColorMode::Palette256).render(&source);
        let reparsed = Lattice::from_glyph_lines(&art.glyph_lines).expect("lattice");
        assert_eq!(reparsed, source);
    }

    // Tests a plus sign: orthogonal arms cap the ends, diagonal contact makes junctions
    #[test]
    fn test_render_plus() {
        let lattice = Lattice::from_rows(&[
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![1, 1, 1, 1, 1],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 1, 0, 0],
        ])
        .expect("lattice");
        let art = SymbolRenderer::default().render(&lattice);
        assert_eq!(art.glyph_lines, vec!["  ╻", "  ┼", "╺┼╋┼╸", "  ┼", "  ╹"]);
    }
}
