//! RGB to HSL conversion.

use crate::types::{Hsl, Rgb};

/// Convert an RGB colour to HSL.
///
/// Works in normalized `[0, 1]` channel space with the six-segment hue
/// formula. Hue is truncated to whole degrees, saturation and lightness to
/// whole percent. Achromatic colours get hue and saturation 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let l = (max + min) / 2.0;

    if d == 0.0 {
        return Hsl::new(0, 0, (l * 100.0) as u8);
    }

    let s = d / (1.0 - (2.0 * l - 1.0).abs());

    // Floored modulo keeps red-max hues in [0, 360).
    let h = if max == r {
        60.0 * ((g - b) / d).rem_euclid(6.0)
    } else if max == g {
        60.0 * (((b - r) / d) + 2.0)
    } else {
        60.0 * (((r - g) / d) + 4.0)
    };

    Hsl::new(h as u16, (s * 100.0) as u8, (l * 100.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl(r: u8, g: u8, b: u8) -> (u16, u8, u8) {
        let c = rgb_to_hsl(Rgb::new(r, g, b));
        (c.h, c.s, c.l)
    }

    #[test]
    fn test_black() {
        assert_eq!(hsl(0, 0, 0), (0, 0, 0));
    }

    #[test]
    fn test_white() {
        assert_eq!(hsl(255, 255, 255), (0, 0, 100));
    }

    #[test]
    fn test_pure_red() {
        assert_eq!(hsl(255, 0, 0), (0, 100, 50));
    }

    #[test]
    fn test_primaries_and_secondaries() {
        assert_eq!(hsl(0, 255, 0), (120, 100, 50));
        assert_eq!(hsl(0, 0, 255), (240, 100, 50));
        assert_eq!(hsl(255, 255, 0), (60, 100, 50));
        assert_eq!(hsl(0, 255, 255), (180, 100, 50));
        assert_eq!(hsl(255, 0, 255), (300, 100, 50));
    }

    #[test]
    fn test_grey_is_achromatic() {
        // 128/255 = 0.50196 -> 50
        assert_eq!(hsl(128, 128, 128), (0, 0, 50));
    }

    #[test]
    fn test_red_max_with_blue_above_green_wraps() {
        // (g - b) / d is negative; floored modulo lifts it into [300, 360)
        let (h, _, _) = hsl(255, 0, 128);
        assert_eq!(h, 329);
    }

    #[test]
    fn test_values_truncate() {
        // l = (200 + 50) / 510 = 0.4901..., s = 150 / 250 = 0.6, h = 20
        assert_eq!(hsl(200, 100, 50), (20, 60, 49));
    }
}
