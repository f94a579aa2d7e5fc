//! Tests for the hue-sweep palette

#[cfg(test)]
mod tests {
    use sortviz::math::color::Color;
    use sortviz::model::Palette;

    // Tests one colour per value, starting at red
    // Verified by starting the sweep at a non-zero hue
    #[test]
    fn test_rainbow() {
        let palette = Palette::rainbow(12);

        assert_eq!(palette.len(), 12);
        assert!(!palette.is_empty());
        assert_eq!(palette.get(0), Some(Color::new(255, 0, 0)));
        assert_eq!(palette.get(6), Some(Color::new(0, 255, 255)));
        assert_eq!(palette.get(12), None);
    }

    // Tests colours depend only on the index ratio
    // Verified by dividing by count minus one
    #[test]
    fn test_rainbow_scale_invariant() {
        assert_eq!(Palette::rainbow(10).get(5), Palette::rainbow(100).get(50));
        assert_eq!(Palette::rainbow(4).get(1), Palette::rainbow(8).get(2));
    }

    // Tests values map to colours one-based
    // Verified by indexing colours with the raw value
    #[test]
    fn test_color_for() {
        let palette = Palette::rainbow(4);

        assert_eq!(palette.color_for(1), palette.get(0));
        assert_eq!(palette.color_for(4), palette.get(3));
        assert_eq!(palette.color_for(0), None);
        assert_eq!(palette.color_for(5), None);
    }

    // Tests an empty palette
    // Verified by allocating a colour for zero counts
    #[test]
    fn test_empty_palette() {
        let palette = Palette::rainbow(0);

        assert!(palette.is_empty());
        assert!(palette.colors().is_empty());
    }
}
