//! Colors and the per-step highlight mapping.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREY: Color = Color::rgb(128, 128, 128);

    pub const BACKGROUND: Color = Color::WHITE;

    /// Default bar colors, cycled by index modulo 3.
    pub const GRADIENT: [Color; 3] = [
        Color::rgb(207, 159, 255),
        Color::rgb(224, 176, 255),
        Color::rgb(218, 112, 214),
    ];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn gradient(index: usize) -> Color {
        Self::GRADIENT[index % Self::GRADIENT.len()]
    }

    /// CSS `rgb(...)` form for canvas hosts.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Index → color overrides emitted by one step.
///
/// Built fresh for every step; later inserts for the same index win, so
/// `{h: red, p: green}` with `h == p` renders green.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Highlight {
    marks: HashMap<usize, Color>,
}

impl Highlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, index: usize, color: Color) -> Self {
        self.marks.insert(index, color);
        self
    }

    /// Pair of markers used by exchange steps: `first` red, `second` green.
    pub fn pair(first: usize, second: usize) -> Self {
        Self::new().with(first, Color::RED).with(second, Color::GREEN)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.marks.get(&index).copied()
    }

    /// Override if present, else the default gradient color for `index`.
    #[inline]
    pub fn color_for(&self, index: usize) -> Color {
        self.get(index).unwrap_or_else(|| Color::gradient(index))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Marks sorted by index, for deterministic comparisons and transport.
    pub fn sorted_marks(&self) -> Vec<(usize, Color)> {
        let mut out: Vec<(usize, Color)> = self.marks.iter().map(|(i, c)| (*i, *c)).collect();
        out.sort_unstable_by_key(|(i, _)| *i);
        out
    }
}
