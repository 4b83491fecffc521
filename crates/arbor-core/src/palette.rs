//! Depth-level palettes.
//!
//! Rendering layers color each node by its depth level. A [`Palette`] cycles
//! through its colors, so `color_for_level(level)` is
//! `colors[level % colors.len()]`.

use thiserror::Error;

use crate::color::Color;

/// Categorical palette used when none is configured.
const DEFAULT_COLORS: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Errors raised while building a [`Palette`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette must contain at least one color")]
    Empty,

    #[error("palette entry {index}: {reason}")]
    InvalidColor { index: usize, reason: String },
}

/// An ordered, non-empty list of colors indexed by depth level.
///
/// # Examples
///
/// ```
/// use arbor_core::palette::Palette;
///
/// let palette = Palette::from_strings(["red", "green"]).unwrap();
/// assert_eq!(palette.color_for_level(0), palette.color_for_level(2));
/// assert_ne!(palette.color_for_level(0), palette.color_for_level(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette from already parsed colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] if `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { colors })
    }

    /// Parses every entry as a CSS color and builds a palette from them.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidColor`] for the first entry that does
    /// not parse, or [`PaletteError::Empty`] if no entries were given.
    pub fn from_strings<I, S>(entries: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                Color::new(entry.as_ref())
                    .map_err(|reason| PaletteError::InvalidColor { index, reason })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Returns the color used for nodes at `level`.
    pub fn color_for_level(&self, level: usize) -> Color {
        self.colors[level % self.colors.len()]
    }

    /// Returns the number of distinct colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; palettes are never empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_strings(DEFAULT_COLORS).expect("default palette colors are valid CSS colors")
    }
}
