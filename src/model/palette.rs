//! Hue-sweep palette with one colour per array value

use crate::math::color::Color;

/// Ordered colours indexed by `value - 1`
///
/// Colours follow values rather than positions, so a bar keeps its colour as
/// it moves through the array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Sweep the hue circle evenly at full saturation and value
    ///
    /// Entry `i` has hue `i / count`, so its colour depends only on that ratio.
    pub fn rainbow(count: usize) -> Self {
        let colors = (0..count)
            .map(|index| Color::from_hsv(index as f64 / count as f64, 1.0, 1.0))
            .collect();
        Self { colors }
    }

    /// Colour of entry `index`
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Colour assigned to an array value (values start at 1)
    pub fn color_for(&self, value: u32) -> Option<Color> {
        (value as usize)
            .checked_sub(1)
            .and_then(|index| self.get(index))
    }

    /// Number of colours
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colours
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All colours in order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}
