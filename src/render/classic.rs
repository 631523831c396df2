//! Shade-glyph style driven by the digit stream

use crate::analysis::metrics::analyze;
use crate::io::configuration::VISUAL_CHARS;
use crate::render::renderer::RenderedArt;
use crate::sequence::digits::DigitSource;
use crate::spatial::lattice::Lattice;

/// Shade character for a digit, clamped to the last glyph
pub fn shade(digit: u8) -> char {
    let index = usize::from(digit).min(VISUAL_CHARS.len() - 1);
    VISUAL_CHARS.get(index).copied().unwrap_or(' ')
}

/// Draw each active cell with a shade chosen by the next digit
///
/// Digits are consumed row-major, one per active cell. Metrics describe the
/// lattice as given.
pub fn render_classic(lattice: &Lattice, digits: &mut DigitSource) -> RenderedArt {
    let glyph_lines = (0..lattice.height())
        .map(|row| {
            let line: String = (0..lattice.width())
                .map(|col| {
                    if lattice.is_active(row, col) {
                        shade(digits.next_digit())
                    } else {
                        ' '
                    }
                })
                .collect();
            line.trim_end().to_string()
        })
        .collect();

    RenderedArt {
        glyph_lines,
        metrics: analyze(lattice),
    }
}
