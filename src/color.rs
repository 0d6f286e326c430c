use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Named colours (matplotlib "tab" palette)
// ---------------------------------------------------------------------------

pub const TAB_BLUE: Srgb<u8> = Srgb::new(0x1f, 0x77, 0xb4);
pub const TAB_ORANGE: Srgb<u8> = Srgb::new(0xff, 0x7f, 0x0e);
pub const TAB_GREEN: Srgb<u8> = Srgb::new(0x2c, 0xa0, 0x2c);
pub const LIGHT_GRAY: Srgb<u8> = Srgb::new(0xd3, 0xd3, 0xd3);
pub const AXIS_GRAY: Srgb<u8> = Srgb::new(0x80, 0x80, 0x80);

/// Colours for the first categories of a categorical chart, by position.
pub const CATEGORY_BASE: [Srgb<u8>; 3] = [TAB_BLUE, TAB_ORANGE, TAB_GREEN];

/// Mean ratings at or above this value are highlighted as "high".
pub const HIGH_RATING_THRESHOLD: f64 = 3.0;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Srgb<u8>> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            rgb.into_format()
        })
        .collect()
}

/// Colours for `n` categories in chart order.
///
/// The first three positions take the fixed `CATEGORY_BASE` colours; any
/// further categories get generated hues, so the mapping never depends on a
/// plotting library's own cycle.
pub fn categorical_colors(n: usize) -> Vec<Srgb<u8>> {
    let extra = generate_palette(n.saturating_sub(CATEGORY_BASE.len()));
    CATEGORY_BASE
        .iter()
        .copied()
        .chain(extra)
        .take(n)
        .collect()
}

/// Highlight colour for a group's mean rating.
pub fn rating_color(mean: f64) -> Srgb<u8> {
    if mean >= HIGH_RATING_THRESHOLD {
        TAB_BLUE
    } else {
        TAB_ORANGE
    }
}

/// Convert to the plotters colour type.
pub fn to_rgb(color: Srgb<u8>) -> RGBColor {
    RGBColor(color.red, color.green, color.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_three_categories_use_fixed_colours() {
        assert_eq!(categorical_colors(2), vec![TAB_BLUE, TAB_ORANGE]);
        assert_eq!(categorical_colors(3), vec![TAB_BLUE, TAB_ORANGE, TAB_GREEN]);
    }

    #[test]
    fn extra_categories_get_distinct_deterministic_colours() {
        let colors = categorical_colors(6);
        assert_eq!(colors.len(), 6);
        assert_eq!(&colors[..3], &CATEGORY_BASE);
        assert_eq!(colors, categorical_colors(6));
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn rating_threshold_is_inclusive() {
        assert_eq!(rating_color(3.0), TAB_BLUE);
        assert_eq!(rating_color(2.999), TAB_ORANGE);
        assert_eq!(rating_color(4.2), TAB_BLUE);
    }

    #[test]
    fn converts_to_plotters_rgb() {
        assert_eq!(to_rgb(TAB_ORANGE), RGBColor(255, 127, 14));
    }
}
