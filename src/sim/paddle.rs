//! The player's paddle: horizontal motion only, never leaves the field

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::Config;

/// Horizontal movement intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub bounds: Rect,
    /// Pixels per move
    pub speed: f32,
}

impl Paddle {
    /// Paddle centred horizontally, `paddle_floor_gap` above the bottom
    pub fn new(config: &Config) -> Self {
        Self {
            bounds: Rect::new(
                config.field_width / 2.0 - config.paddle_width / 2.0,
                config.field_height - config.paddle_floor_gap,
                config.paddle_width,
                config.paddle_height,
            ),
            speed: config.paddle_speed,
        }
    }

    /// Shift by one step. A step that would cross a side of the field is
    /// dropped entirely; returns whether the paddle moved.
    pub fn step(&mut self, direction: Direction, field_width: f32) -> bool {
        match direction {
            Direction::Left if self.bounds.left() - self.speed >= 0.0 => {
                self.bounds.x -= self.speed;
                true
            }
            Direction::Right if self.bounds.right() + self.speed <= field_width => {
                self.bounds.x += self.speed;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_centred_above_floor() {
        let config = Config::default();
        let paddle = Paddle::new(&config);
        assert_eq!(paddle.bounds.center_x(), 400.0);
        assert_eq!(paddle.bounds.top(), 550.0);
        assert_eq!(paddle.bounds.width, 100.0);
        assert_eq!(paddle.speed, 8.0);
    }

    #[test]
    fn test_step_moves_by_speed() {
        let config = Config::default();
        let mut paddle = Paddle::new(&config);
        assert!(paddle.step(Direction::Left, config.field_width));
        assert_eq!(paddle.bounds.left(), 342.0);
        assert!(paddle.step(Direction::Right, config.field_width));
        assert!(paddle.step(Direction::Right, config.field_width));
        assert_eq!(paddle.bounds.left(), 358.0);
        assert_eq!(paddle.bounds.top(), 550.0);
    }

    #[test]
    fn test_step_rejected_at_edges() {
        let config = Config::default();
        let mut paddle = Paddle::new(&config);

        paddle.bounds.x = 5.0;
        assert!(!paddle.step(Direction::Left, config.field_width));
        assert_eq!(paddle.bounds.left(), 5.0);

        paddle.bounds.x = config.field_width - paddle.bounds.width - 3.0;
        assert!(!paddle.step(Direction::Right, config.field_width));
        assert_eq!(paddle.bounds.right(), config.field_width - 3.0);

        // Exactly reaching the edge is allowed
        paddle.bounds.x = 8.0;
        assert!(paddle.step(Direction::Left, config.field_width));
        assert_eq!(paddle.bounds.left(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_field(
            start in 0.0f32..700.0,
            moves in prop::collection::vec(any::<bool>(), 0..300),
        ) {
            let config = Config::default();
            let mut paddle = Paddle::new(&config);
            paddle.bounds.x = start;
            for left in moves {
                let dir = if left { Direction::Left } else { Direction::Right };
                paddle.step(dir, config.field_width);
                prop_assert!(paddle.bounds.left() >= 0.0);
                prop_assert!(paddle.bounds.right() <= config.field_width);
            }
        }
    }
}
