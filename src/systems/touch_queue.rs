use std::{collections::VecDeque, time::Duration};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::Point2D;

pub const MIN_SPEED: f32 = 0.;
pub const MAX_SPEED: f32 = 1.;

/// Duration (in seconds) of each segment: 0 is instantaneous, 1 is the slowest.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Speed(f32);

impl Speed {
    /// Out-of-range values are clamped rather than rejected; NaN becomes the fastest speed.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            warn!("Speed value is NaN; using {}", MIN_SPEED);
            return Speed(MIN_SPEED);
        }
        let clamped = value.clamp(MIN_SPEED, MAX_SPEED);
        if clamped != value {
            warn!("Speed value {} out of range, clamped to {}", value, clamped);
        }
        Speed(clamped)
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs_f32(self.0)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed(MAX_SPEED)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    Idle,
    Animating,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerState {
    pub centre: Point2D,
    pub is_animating: bool,
}

/// One movement of the marker, as handed to the animation driver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point2D,
    pub to: Point2D,
    pub duration: Duration,
}

impl Segment {
    pub fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }
}

/// Serialises touch-ended events into a single ordered stream of segments.
///
/// The coordinator never drives an animation itself: whenever a segment should
/// start it is returned to the caller, who must eventually report back with
/// [`TouchQueueCoordinator::on_animation_completed`].
pub struct TouchQueueCoordinator {
    marker: MarkerState,
    pending_targets: VecDeque<Point2D>,
    speed: Speed,
}

impl TouchQueueCoordinator {
    pub fn new(initial_centre: Point2D, speed: Speed) -> Self {
        TouchQueueCoordinator {
            marker: MarkerState {
                centre: initial_centre,
                is_animating: false,
            },
            pending_targets: VecDeque::new(),
            speed,
        }
    }

    pub fn on_touch_ended(&mut self, point: Point2D) -> Option<Segment> {
        if self.marker.is_animating {
            self.pending_targets.push_back(point);
            debug!(
                "Busy; queued target {:?} ({} pending)",
                point,
                self.pending_targets.len()
            );
            None
        } else {
            info!("Idle -> Animating");
            self.marker.is_animating = true;
            Some(self.segment_to(point))
        }
    }

    pub fn on_animation_completed(&mut self) -> Option<Segment> {
        if !self.marker.is_animating {
            warn!("Animation completed while already idle; ignoring");
            return None;
        }
        match self.pending_targets.pop_front() {
            Some(target) => {
                debug!(
                    "Dequeued target {:?} ({} still pending)",
                    target,
                    self.pending_targets.len()
                );
                Some(self.segment_to(target))
            }
            None => {
                info!("Animating -> Idle");
                self.marker.is_animating = false;
                None
            }
        }
    }

    pub fn on_speed_changed(&mut self, value: f32) {
        self.speed = Speed::new(value);
        debug!("Speed now {:?}", self.speed);
    }

    /// Report where the marker currently is; the next segment starts from here
    pub fn move_marker(&mut self, centre: Point2D) {
        self.marker.centre = centre;
    }

    pub fn state(&self) -> CoordinatorState {
        if self.marker.is_animating {
            CoordinatorState::Animating
        } else {
            CoordinatorState::Idle
        }
    }

    pub fn marker(&self) -> &MarkerState {
        &self.marker
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn pending_targets(&self) -> impl Iterator<Item = &Point2D> {
        self.pending_targets.iter()
    }

    pub fn pending_count(&self) -> usize {
        self.pending_targets.len()
    }

    fn segment_to(&self, target: Point2D) -> Segment {
        Segment {
            from: self.marker.centre,
            to: target,
            duration: self.speed.as_duration(),
        }
    }
}
