//! Sample drawing and classification.

use rand::Rng;

/// One uniformly drawn point in [-1, 1] × [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Sample {
    /// Draw a sample with both coordinates uniform on [-1, 1].
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(-1.0..=1.0),
            y: rng.gen_range(-1.0..=1.0),
        }
    }

    /// Classify against the inscribed unit circle.
    ///
    /// Uses the closed-disk test x² + y² ≤ 1, so points exactly on the
    /// boundary count as inside.
    pub fn classify(&self) -> Classification {
        if self.x * self.x + self.y * self.y <= 1.0 {
            Classification::Inside
        } else {
            Classification::Outside
        }
    }
}

/// Position of a sample relative to the unit circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// On or within the unit circle (rendered red).
    Inside,
    /// Outside the unit circle (rendered blue).
    Outside,
}

impl Classification {
    /// True for [`Classification::Inside`].
    pub fn is_inside(self) -> bool {
        matches!(self, Self::Inside)
    }
}
