//! ANSI colour annotation keyed on local neighborhood density

use clap::ValueEnum;

use crate::io::configuration::{
    HIGH_DENSITY_COLOR, LOW_DENSITY_COLOR, LOW_DENSITY_CUTOFF, MEDIUM_DENSITY_COLOR,
    MEDIUM_DENSITY_CUTOFF,
};

/// Colour capability signalled by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// No control sequences at all
    #[default]
    Off,
    /// Basic 8-colour terminal; glyphs stay uncoloured
    Basic,
    /// 256-colour palette
    Palette256,
    /// 24-bit colour (uses the 256-colour palette codes)
    TrueColor,
}

impl ColorMode {
    /// Whether glyphs receive colour sequences in this mode
    pub const fn colors_glyphs(self) -> bool {
        matches!(self, Self::Palette256 | Self::TrueColor)
    }
}

/// Three-way classification of local density
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityBucket {
    /// Below 0.3
    Low,
    /// From 0.3 up to 0.7
    Medium,
    /// 0.7 and above
    High,
}

impl DensityBucket {
    /// Bucket for a density in `[0, 1]`
    pub fn from_density(density: f64) -> Self {
        if density < LOW_DENSITY_CUTOFF {
            Self::Low
        } else if density < MEDIUM_DENSITY_CUTOFF {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// 256-colour palette index
    pub const fn color_code(self) -> u8 {
        match self {
            Self::Low => LOW_DENSITY_COLOR,
            Self::Medium => MEDIUM_DENSITY_COLOR,
            Self::High => HIGH_DENSITY_COLOR,
        }
    }
}

/// Wrap a glyph in a foreground colour sequence when the mode allows it
pub fn colorize(symbol: char, local_density: f64, mode: ColorMode) -> String {
    if mode.colors_glyphs() {
        let code = DensityBucket::from_density(local_density).color_code();
        format!("\u{1b}[38;5;{code}m{symbol}\u{1b}[0m")
    } else {
        symbol.to_string()
    }
}
