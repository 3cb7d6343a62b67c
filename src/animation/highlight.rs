//! Hover highlight with a damped emissive fade.

use crate::util::damping::damp;

/// Hover state and emissive intensity of one leaf or cover.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Highlight {
    hovered: bool,
    intensity: f32,
}

impl Highlight {
    /// Set the hover flag (pointer enter/leave, or cleared by a click).
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Whether the pointer is over this slot.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Current emissive intensity.
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Fade toward `level` while hovered, toward zero otherwise.
    pub fn update(&mut self, level: f32, lambda: f32, dt: f32) {
        let target = if self.hovered { level } else { 0.0 };
        self.intensity = damp(self.intensity, target, lambda, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fades_in_and_out() {
        let mut h = Highlight::default();
        h.set_hovered(true);
        for _ in 0..120 {
            h.update(0.08, 6.0, 1.0 / 60.0);
        }
        assert!((h.intensity() - 0.08).abs() < 0.001);
        assert!(h.intensity() <= 0.08);

        h.set_hovered(false);
        let before = h.intensity();
        h.update(0.08, 6.0, 1.0 / 60.0);
        assert!(h.intensity() < before);
        assert!(h.intensity() > 0.0);
    }
}
