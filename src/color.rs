use eframe::egui::Color32;
use palette::{Darken, Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Fixed island colours
// ---------------------------------------------------------------------------

pub const TORGERSEN: Srgb<u8> = Srgb::new(0x7e, 0x6c, 0x6c);
pub const BISCOE: Srgb<u8> = Srgb::new(0xf8, 0x75, 0x75);
pub const DREAM: Srgb<u8> = Srgb::new(0xb9, 0xe6, 0xff);

/// Used for any island outside the fixed map.
pub const DEFAULT_COLOR: Srgb<u8> = Srgb::new(0x99, 0x99, 0x99);

/// Table header background.
pub const HEADER_COLOR: Srgb<u8> = BISCOE;

/// Histogram series are drawn semi-transparent so overlaps stay visible.
pub const HISTOGRAM_OPACITY: f32 = 0.6;

/// Look up the colour of an island.
pub fn island_color(island: &str) -> Srgb<u8> {
    match island {
        "Torgersen" => TORGERSEN,
        "Biscoe" => BISCOE,
        "Dream" => DREAM,
        _ => DEFAULT_COLOR,
    }
}

/// A darker shade of `color` for bar outlines.
pub fn outline(color: Srgb<u8>) -> Srgb<u8> {
    let hsl: Hsl = color.into_format::<f32>().into_color();
    let rgb: Srgb = hsl.darken(0.3).into_color();
    rgb.into_format()
}

/// `#rrggbb` for HTML / SVG output.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Convert to an egui colour with the given opacity.
pub fn to_color32(color: Srgb<u8>, opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.red, color.green, color.blue, alpha)
}

/// Convert for the plotters SVG charts.
pub fn to_rgb_color(color: Srgb<u8>) -> RGBColor {
    RGBColor(color.red, color.green, color.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_islands_have_fixed_colours() {
        assert_eq!(to_hex(island_color("Torgersen")), "#7e6c6c");
        assert_eq!(to_hex(island_color("Biscoe")), "#f87575");
        assert_eq!(to_hex(island_color("Dream")), "#b9e6ff");
    }

    #[test]
    fn unknown_island_falls_back() {
        assert_eq!(island_color("Anvers"), DEFAULT_COLOR);
    }

    #[test]
    fn outline_is_darker() {
        let base = island_color("Dream");
        let dark = outline(base);
        let sum = |c: Srgb<u8>| c.red as u32 + c.green as u32 + c.blue as u32;
        assert!(sum(dark) < sum(base));
    }

    #[test]
    fn opacity_maps_to_alpha() {
        assert_eq!(to_color32(BISCOE, 1.0), Color32::from_rgb(0xf8, 0x75, 0x75));
        assert_eq!(to_color32(BISCOE, HISTOGRAM_OPACITY).a(), 153);
    }

    #[test]
    fn plotters_colour_keeps_channels() {
        assert_eq!(to_rgb_color(DREAM), RGBColor(0xb9, 0xe6, 0xff));
    }
}
