use bevy::prelude::*;

/// Convert a 24-bit `0xRRGGBB` value to an sRGB colour.
pub fn hex_colour(hex: u32) -> Color {
    let [_, red, green, blue] = hex.to_be_bytes();
    Color::srgb_u8(red, green, blue)
}

/// Linear RGB of a hex colour scaled by `intensity`, for emissive channels.
pub fn hex_emissive(hex: u32, intensity: f32) -> LinearRgba {
    let linear = hex_colour(hex).to_linear();
    LinearRgba::rgb(
        linear.red * intensity,
        linear.green * intensity,
        linear.blue * intensity,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_hex_channels() {
        let colour = hex_colour(0xff00ff).to_srgba();
        assert_eq!(colour.red, 1.0);
        assert_eq!(colour.green, 0.0);
        assert_eq!(colour.blue, 1.0);
    }

    #[test]
    fn ignores_bits_above_rgb() {
        assert_eq!(hex_colour(0x12ffffff), hex_colour(0xffffff));
    }

    #[test]
    fn emissive_scales_linear_channels() {
        let emissive = hex_emissive(0xff00ff, 2.0);
        assert!((emissive.red - 2.0).abs() < 1e-6);
        assert_eq!(emissive.green, 0.0);
        assert!((emissive.blue - 2.0).abs() < 1e-6);
    }
}
