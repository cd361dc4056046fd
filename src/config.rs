//! Startup configuration
//!
//! Every tunable constant of a session. Defaults match `crate::consts`; a JSON
//! file named by `BREAKOUT_CONFIG` may override any subset of them.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{Rgb, colors};

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV: &str = "BREAKOUT_CONFIG";

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_floor_gap: f32,
    pub paddle_deflection: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_speed: f32,

    // === Bricks ===
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_rows: u32,
    pub brick_top_margin: f32,
    pub brick_palette: Vec<Rgb>,

    // === Session ===
    pub starting_lives: u32,
    pub points_per_brick: u32,
    pub fps: u32,
    /// Fixed RNG seed; drawn from the OS when absent
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_floor_gap: PADDLE_FLOOR_GAP,
            paddle_deflection: PADDLE_DEFLECTION,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_rows: BRICK_ROWS,
            brick_top_margin: BRICK_TOP_MARGIN,
            brick_palette: colors::BRICKS.to_vec(),

            starting_lives: STARTING_LIVES,
            points_per_brick: POINTS_PER_BRICK,
            fps: FPS,
            seed: None,
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json).context("invalid config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config =
            Self::from_json(&json).with_context(|| format!("in config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `BREAKOUT_CONFIG` if set, otherwise defaults
    pub fn from_env() -> Result<Self> {
        Self::load_or_default(std::env::var_os(CONFIG_ENV).as_deref().map(Path::new))
    }

    /// Load `path` if given, otherwise defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default config");
                Ok(Self::default())
            }
        }
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("brick_top_margin", self.brick_top_margin),
            ("paddle_floor_gap", self.paddle_floor_gap),
            ("paddle_deflection", self.paddle_deflection),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                bail!("{name} must be a finite number, got {value}");
            }
        }
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                bail!("{name} must be a positive number, got {value}");
            }
        }
        if self.paddle_width > self.field_width {
            bail!("paddle_width {} exceeds field_width {}", self.paddle_width, self.field_width);
        }
        if self.brick_width > self.field_width {
            bail!("brick_width {} exceeds field_width {}", self.brick_width, self.field_width);
        }
        if self.ball_radius * 2.0 > self.field_width.min(self.field_height) {
            bail!("ball_radius {} does not fit the field", self.ball_radius);
        }
        if self.paddle_floor_gap < self.paddle_height || self.paddle_floor_gap > self.field_height {
            bail!(
                "paddle_floor_gap {} must lie between paddle_height {} and field_height {}",
                self.paddle_floor_gap,
                self.paddle_height,
                self.field_height
            );
        }
        if self.brick_top_margin < 0.0 {
            bail!("brick_top_margin must not be negative, got {}", self.brick_top_margin);
        }
        let grid_bottom = self.brick_top_margin + self.brick_rows as f32 * self.brick_height;
        if grid_bottom > self.field_height {
            bail!(
                "{} brick rows end at y={}, below field_height {}",
                self.brick_rows,
                grid_bottom,
                self.field_height
            );
        }
        if self.brick_palette.is_empty() {
            bail!("brick_palette must contain at least one colour");
        }
        if self.starting_lives == 0 {
            bail!("starting_lives must be at least 1");
        }
        if self.fps == 0 {
            bail!("fps must be at least 1");
        }
        Ok(())
    }

    /// Bricks per row: as many whole bricks as fit across the field
    pub fn brick_columns(&self) -> u32 {
        if self.brick_width.is_nan() || self.brick_width <= 0.0 {
            return 0;
        }
        (self.field_width / self.brick_width).floor() as u32
    }

    /// Brick rows actually laid out: `brick_rows`, cut to what fits between
    /// the top margin and the bottom of the field
    pub fn brick_rows_that_fit(&self) -> u32 {
        let room = (self.field_height - self.brick_top_margin) / self.brick_height;
        if room.is_nan() || room < 1.0 {
            return 0;
        }
        self.brick_rows.min(room.floor() as u32)
    }
}
