/// A color in hue/saturation/value form, using the OpenCV 8-bit convention:
/// hue is degrees halved (0..=179), saturation and value are 0..=255.
/// Keying against a hue range is only meaningful in this representation;
/// in raw RGB a "green" pixel has no single-channel test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    /// Converts an 8-bit RGB triple to HSV.
    ///
    /// V = max(r,g,b); S = round(255 * (max - min) / max), 0 when max is 0;
    /// H = round(degrees / 2), wrapped into 0..=179. Achromatic pixels
    /// (max == min) get hue 0.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let diff = (max - min) as f32;

        let s = if max == 0 {
            0
        } else {
            (diff * 255.0 / max as f32).round() as u8
        };

        let h = if max == min {
            0
        } else {
            let (rf, gf, bf) = (r as f32, g as f32, b as f32);
            // Hue sector depends on which channel is the maximum.
            let mut degrees = if max == r {
                60.0 * (gf - bf) / diff
            } else if max == g {
                120.0 + 60.0 * (bf - rf) / diff
            } else {
                240.0 + 60.0 * (rf - gf) / diff
            };
            if degrees < 0.0 {
                degrees += 360.0;
            }
            ((degrees / 2.0).round() as u16 % 180) as u8
        };

        Self { h, s, v: max }
    }
}
