pub mod animation;
pub mod touch_queue;
pub mod trajectory;

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use animation::{AnimationDriver, AnimationStep, ArrowSettings};
use log::{debug, info};
use touch_queue::{CoordinatorState, Segment, Speed, TouchQueueCoordinator};
use trajectory::TrajectoryOverlay;

use crate::{Point2D, app_config::AppConfig, geometry_utils::ArrowShape};

/// Rendering instructions for whoever draws the view
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    MarkerPositionChanged(Point2D),
    ArrowAdded(ArrowShape),
    ArrowsCleared,
}

/// Every boundary event and every tick must go through the same lock
pub type SharedSystems = Arc<Mutex<Systems>>;

pub struct Systems {
    pub touch_queue: TouchQueueCoordinator,
    pub animation: AnimationDriver,
    pub trajectory: TrajectoryOverlay,
    effects: Vec<Effect>,
}

impl Systems {
    pub fn new(config: &AppConfig) -> Systems {
        let touch_queue =
            TouchQueueCoordinator::new(config.view_centre(), Speed::new(config.initial_speed));

        let animation = AnimationDriver::new(ArrowSettings {
            barb_length: config.arrow_barb_length,
            barb_angle: config.arrow_barb_angle.to_radians(),
        });

        info!(
            "Marker starts at {:?}, speed {:?}",
            touch_queue.marker().centre,
            touch_queue.speed()
        );

        Systems {
            touch_queue,
            animation,
            trajectory: TrajectoryOverlay::new(),
            effects: Vec::new(),
        }
    }

    pub fn into_shared(self) -> SharedSystems {
        Arc::new(Mutex::new(self))
    }

    pub fn handle_touch_ended(&mut self, point: Point2D) {
        let next = self.touch_queue.on_touch_ended(point);
        self.start_segments(next);
    }

    pub fn handle_speed_changed(&mut self, value: f32) {
        self.touch_queue.on_speed_changed(value);
    }

    pub fn handle_clear_requested(&mut self) {
        self.trajectory.clear();
        self.effects.push(Effect::ArrowsCleared);
    }

    /// Scheduler tick: move the in-flight animation on by `elapsed`, and start
    /// the next queued segment if it completed.
    pub fn update(&mut self, elapsed: Duration) {
        if let Some(step) = self.animation.advance(elapsed) {
            if self.apply_step(step) {
                let next = self.touch_queue.on_animation_completed();
                self.start_segments(next);
            }
        }
    }

    /// Take all effects produced since the last call, oldest first
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn state(&self) -> CoordinatorState {
        self.touch_queue.state()
    }

    pub fn is_animating(&self) -> bool {
        self.state() == CoordinatorState::Animating
    }

    pub fn marker_position(&self) -> Point2D {
        self.touch_queue.marker().centre
    }

    /// Segments are started in a loop rather than from within completion
    /// handling, so a long chain of instantaneous segments never recurses.
    fn start_segments(&mut self, mut next: Option<Segment>) {
        while let Some(segment) = next.take() {
            let arrow = self.animation.animate(segment, &mut self.trajectory);
            self.effects.push(Effect::ArrowAdded(arrow));

            if !segment.is_instant() {
                return;
            }
            let completed = match self.animation.advance(Duration::ZERO) {
                Some(step) => self.apply_step(step),
                None => false,
            };
            if !completed {
                return;
            }
            next = self.touch_queue.on_animation_completed();
        }
    }

    /// Returns true if the step completed its segment
    fn apply_step(&mut self, step: AnimationStep) -> bool {
        self.touch_queue.move_marker(step.position);
        self.effects.push(Effect::MarkerPositionChanged(step.position));
        if step.completed {
            debug!("Segment complete at {:?}", step.position);
        }
        step.completed
    }
}
