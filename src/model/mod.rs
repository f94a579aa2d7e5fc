//! Session data: the array being sorted and its palette

/// The permutation being shuffled and sorted
pub mod array;
/// Hue-sweep palette keyed by value
pub mod palette;

pub use array::ArrayModel;
pub use palette::Palette;
