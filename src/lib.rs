//! Breakout - a single-screen brick breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, physics, collisions, game state)
//! - `renderer`: Scene drawing onto an abstract surface, plus a terminal backend
//! - `platform`: Keyboard intents and frame pacing
//! - `config`: Startup constants, optionally loaded from JSON

pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::Config;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Target frame rate; one frame is one simulation tick
    pub const FPS: u32 = 60;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Pixels per tick
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Distance from the paddle's top edge to the bottom of the field
    pub const PADDLE_FLOOR_GAP: f32 = 50.0;
    /// Horizontal rebound factor applied to `offset * ball_speed`
    pub const PADDLE_DEFLECTION: f32 = 1.2;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Pixels per tick
    pub const BALL_SPEED: f32 = 5.0;
    /// Launch angle range (degrees from +x), keeps |sin| >= 0.5
    pub const LAUNCH_ANGLE_MIN: f32 = 30.0;
    pub const LAUNCH_ANGLE_MAX: f32 = 150.0;

    /// Brick grid defaults
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_ROWS: u32 = 4;
    pub const BRICK_TOP_MARGIN: f32 = 50.0;

    /// Session defaults
    pub const STARTING_LIVES: u32 = 3;
    pub const POINTS_PER_BRICK: u32 = 10;
}

/// An 8-bit RGB colour
pub type Rgb = [u8; 3];

/// Colors for game elements
pub mod colors {
    use super::Rgb;

    pub const BACKGROUND: Rgb = [30, 30, 30];
    pub const PADDLE: Rgb = [0, 150, 255];
    pub const BALL: Rgb = [255, 215, 0];
    pub const TEXT: Rgb = [255, 255, 255];
    pub const OUTLINE: Rgb = [255, 255, 255];

    /// Brick palette, cycled by row index
    pub const BRICKS: [Rgb; 5] = [
        [255, 50, 50],
        [50, 255, 50],
        [50, 50, 255],
        [255, 255, 50],
        [255, 50, 255],
    ];
}
