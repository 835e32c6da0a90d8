use log::debug;

use crate::geometry_utils::ArrowShape;

/// Every arrow drawn so far, kept until explicitly cleared
#[derive(Default)]
pub struct TrajectoryOverlay {
    arrows: Vec<ArrowShape>,
}

impl TrajectoryOverlay {
    pub fn new() -> Self {
        TrajectoryOverlay { arrows: Vec::new() }
    }

    pub fn add_arrow(&mut self, shape: ArrowShape) {
        self.arrows.push(shape);
    }

    /// Remove all arrows. Returns how many were removed; clearing an empty
    /// overlay is fine and returns 0.
    pub fn clear(&mut self) -> usize {
        let count = self.arrows.len();
        self.arrows.clear();
        debug!("Cleared {} arrows", count);
        count
    }

    pub fn arrows(&self) -> &[ArrowShape] {
        &self.arrows
    }

    pub fn len(&self) -> usize {
        self.arrows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry_utils::compute_arrow;

    use super::*;

    #[test]
    fn test_add_then_clear() {
        let mut overlay = TrajectoryOverlay::new();
        overlay.add_arrow(compute_arrow((0., 0.), (1., 0.), 10., 0.5));
        overlay.add_arrow(compute_arrow((1., 0.), (1., 1.), 10., 0.5));
        assert_eq!(overlay.len(), 2);
        assert_eq!(overlay.arrows()[1].start, (1., 0.));

        assert_eq!(overlay.clear(), 2);
        assert!(overlay.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut overlay = TrajectoryOverlay::new();
        overlay.add_arrow(compute_arrow((0., 0.), (1., 0.), 10., 0.5));
        overlay.clear();
        assert_eq!(overlay.clear(), 0);
        assert!(overlay.arrows().is_empty());
    }
}
