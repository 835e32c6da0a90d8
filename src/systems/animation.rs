use std::time::Duration;

use log::debug;

use crate::{
    Point2D,
    geometry_utils::{ArrowShape, compute_arrow, ease_in_out, lerp_points},
};

use super::{touch_queue::Segment, trajectory::TrajectoryOverlay};

pub struct ArrowSettings {
    pub barb_length: f32,
    /// Radians
    pub barb_angle: f32,
}

struct InFlight {
    segment: Segment,
    elapsed: Duration,
}

/// Result of advancing the in-flight animation by one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationStep {
    pub position: Point2D,
    pub completed: bool,
}

/// Interpolates the marker along one segment at a time
pub struct AnimationDriver {
    arrow_settings: ArrowSettings,
    in_flight: Option<InFlight>,
}

impl AnimationDriver {
    pub fn new(arrow_settings: ArrowSettings) -> Self {
        AnimationDriver {
            arrow_settings,
            in_flight: None,
        }
    }

    /// Start animating `segment`. The arrow for the whole segment is handed to
    /// the overlay straight away, before the marker has moved at all.
    pub fn animate(&mut self, segment: Segment, overlay: &mut TrajectoryOverlay) -> ArrowShape {
        let arrow = compute_arrow(
            segment.from,
            segment.to,
            self.arrow_settings.barb_length,
            self.arrow_settings.barb_angle,
        );
        overlay.add_arrow(arrow);

        debug!(
            "Animate {:?} -> {:?} over {:?}",
            segment.from, segment.to, segment.duration
        );
        self.in_flight = Some(InFlight {
            segment,
            elapsed: Duration::ZERO,
        });

        arrow
    }

    /// Move the animation on by `elapsed`. Returns None if nothing is in flight.
    ///
    /// A zero-duration segment completes on the first call, whatever `elapsed` is.
    /// On completion the position is exactly the segment target.
    pub fn advance(&mut self, elapsed: Duration) -> Option<AnimationStep> {
        let in_flight = self.in_flight.as_mut()?;
        in_flight.elapsed += elapsed;

        let Segment { from, to, duration } = in_flight.segment;
        if in_flight.elapsed >= duration {
            self.in_flight = None;
            return Some(AnimationStep {
                position: to,
                completed: true,
            });
        }

        let t = in_flight.elapsed.as_secs_f32() / duration.as_secs_f32();
        Some(AnimationStep {
            position: lerp_points(&from, &to, ease_in_out(t)),
            completed: false,
        })
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry_utils::distance_points;

    use super::*;

    fn driver() -> AnimationDriver {
        AnimationDriver::new(ArrowSettings {
            barb_length: 10.,
            barb_angle: std::f32::consts::FRAC_PI_4,
        })
    }

    fn segment(from: Point2D, to: Point2D, ms: u64) -> Segment {
        Segment {
            from,
            to,
            duration: Duration::from_millis(ms),
        }
    }

    #[test]
    fn test_arrow_drawn_when_animation_starts() {
        let mut d = driver();
        let mut overlay = TrajectoryOverlay::new();
        let arrow = d.animate(segment((0., 0.), (10., 0.), 1000), &mut overlay);

        assert_eq!(overlay.len(), 1);
        assert_eq!(overlay.arrows()[0], arrow);
        assert_eq!(arrow.end, (10., 0.));
        assert!(d.is_animating());
    }

    #[test]
    fn test_progress_is_monotonic_and_exact_at_end() {
        let mut d = driver();
        let mut overlay = TrajectoryOverlay::new();
        d.animate(segment((0., 0.), (100., 0.), 1000), &mut overlay);

        let mut last_x = 0.;
        for _ in 0..9 {
            let step = d.advance(Duration::from_millis(100)).unwrap();
            assert!(!step.completed);
            assert!(step.position.0 >= last_x);
            assert!(step.position.0 < 100.);
            last_x = step.position.0;
        }
        let step = d.advance(Duration::from_millis(250)).unwrap();
        assert!(step.completed);
        assert_eq!(step.position, (100., 0.));
        assert!(!d.is_animating());
        assert!(d.advance(Duration::from_millis(16)).is_none());
    }

    #[test]
    fn test_halfway_is_halfway() {
        let mut d = driver();
        let mut overlay = TrajectoryOverlay::new();
        d.animate(segment((0., 0.), (0., 50.), 1000), &mut overlay);
        let step = d.advance(Duration::from_millis(500)).unwrap();
        assert!(distance_points(&step.position, &(0., 25.)) < 0.001);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut d = driver();
        let mut overlay = TrajectoryOverlay::new();
        d.animate(segment((1., 1.), (5., 5.), 0), &mut overlay);
        let step = d.advance(Duration::ZERO).unwrap();
        assert!(step.completed);
        assert_eq!(step.position, (5., 5.));
    }

    #[test]
    fn test_nothing_in_flight() {
        let mut d = driver();
        assert!(d.advance(Duration::from_millis(16)).is_none());
    }
}
