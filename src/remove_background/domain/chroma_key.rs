use crate::domain::color::Hsv;
use crate::domain::error::DomainError;

/// An inclusive HSV range describing the backdrop color to key out.
/// A pixel inside the range becomes fully transparent in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromaKey {
    pub lower: Hsv,
    pub upper: Hsv,
}

impl ChromaKey {
    pub fn new(lower: Hsv, upper: Hsv) -> Result<Self, DomainError> {
        if lower.h > upper.h || lower.s > upper.s || lower.v > upper.v {
            return Err(DomainError::InvalidInput(format!(
                "chroma key lower bound {:?} exceeds upper bound {:?}",
                lower, upper
            )));
        }
        Ok(Self { lower, upper })
    }

    /// The fixed green-screen range: hue 35..=85 (OpenCV scale, i.e. 70°..=170°)
    /// with saturation and value at least 40, so near-gray and near-black
    /// greens are kept.
    pub const fn green() -> Self {
        Self {
            lower: Hsv::new(35, 40, 40),
            upper: Hsv::new(85, 255, 255),
        }
    }

    /// Inclusive on both bounds for all three channels.
    pub fn contains(&self, color: Hsv) -> bool {
        (self.lower.h..=self.upper.h).contains(&color.h)
            && (self.lower.s..=self.upper.s).contains(&color.s)
            && (self.lower.v..=self.upper.v).contains(&color.v)
    }
}
