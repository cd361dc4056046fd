//! The ball: a moving box of side 2R with a fixed speed

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, VecExt};
use crate::Config;
use crate::consts::{LAUNCH_ANGLE_MAX, LAUNCH_ANGLE_MIN};

/// Draw a launch angle in degrees.
///
/// Uniform in [30, 150], then mirrored through 90 with probability 1/2.
pub fn launch_angle<R: Rng>(rng: &mut R) -> f32 {
    let angle = rng.random_range(LAUNCH_ANGLE_MIN..=LAUNCH_ANGLE_MAX);
    if rng.random_bool(0.5) {
        180.0 - angle
    } else {
        angle
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Bounding box, used for every collision test
    pub bounds: Rect,
    pub velocity: Vec2,
    pub radius: f32,
    /// Launch speed (pixels per tick)
    pub speed: f32,
}

impl Ball {
    /// Centred ball with a fresh random launch
    pub fn new<R: Rng>(config: &Config, rng: &mut R) -> Self {
        let mut ball = Self {
            bounds: Rect::new(0.0, 0.0, config.ball_radius * 2.0, config.ball_radius * 2.0),
            velocity: Vec2::ZERO,
            radius: config.ball_radius,
            speed: config.ball_speed,
        };
        ball.reset(config, rng);
        ball
    }

    /// Recentre and relaunch at a random angle
    pub fn reset<R: Rng>(&mut self, config: &Config, rng: &mut R) {
        self.recenter(config);
        self.launch_at(launch_angle(rng));
    }

    /// Put the box in the middle of the field
    pub fn recenter(&mut self, config: &Config) {
        self.bounds.x = config.field_width / 2.0 - self.radius;
        self.bounds.y = config.field_height / 2.0 - self.radius;
    }

    /// Set velocity from a launch angle (degrees). Always launches upward.
    pub fn launch_at(&mut self, angle_deg: f32) {
        let mut direction = Vec2::X.rotated_deg(angle_deg);
        direction.y = -direction.y.abs();
        self.velocity = direction * self.speed;
    }

    /// Advance one tick, then bounce off the side walls and ceiling.
    ///
    /// The floor never bounces; falling out is a lost life.
    pub fn update(&mut self, field_width: f32) {
        self.bounds.translate(self.velocity);

        if self.bounds.left() <= 0.0 || self.bounds.right() >= field_width {
            self.velocity.negate_x();
        }
        if self.bounds.top() <= 0.0 {
            self.velocity.negate_y();
        }
    }

    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }
}
