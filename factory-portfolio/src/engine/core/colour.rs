use bevy::prelude::*;
use constants::palette::rgb_bytes;

/// sRGB colour from a 0xRRGGBB palette entry.
pub fn hex_colour(hex: u32) -> Color {
    let (r, g, b) = rgb_bytes(hex);
    Color::srgb_u8(r, g, b)
}

pub fn hex_linear(hex: u32) -> LinearRgba {
    hex_colour(hex).to_linear()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_entries_decode_per_channel() {
        let colour = hex_colour(0xff8000).to_srgba();
        assert_eq!(colour.red, 1.0);
        assert!((colour.green - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(colour.blue, 0.0);
    }
}
