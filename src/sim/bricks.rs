//! The brick field: a fixed grid of one-hit targets

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::{Config, Rgb, colors};

/// A brick entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub bounds: Rect,
    pub color: Rgb,
    /// Cleared once hit; never set again within a session
    active: bool,
}

impl Brick {
    pub fn new(bounds: Rect, color: Rgb) -> Self {
        Self {
            bounds,
            color,
            active: true,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Knock the brick out. Returns false if it was already gone.
    pub fn deactivate(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }
}

/// All bricks of a session, in creation order (row-major, top row first)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickField {
    bricks: Vec<Brick>,
}

impl BrickField {
    /// Full grid of active bricks.
    ///
    /// Rows that would run past the bottom of the field are left out, and an
    /// empty palette falls back to the built-in colours.
    pub fn new(config: &Config) -> Self {
        let columns = config.brick_columns();
        let rows = config.brick_rows_that_fit();
        let palette: &[Rgb] = if config.brick_palette.is_empty() {
            &colors::BRICKS
        } else {
            &config.brick_palette
        };
        let capacity = (rows as usize).checked_mul(columns as usize).unwrap_or(0);
        let mut bricks = Vec::with_capacity(capacity);
        for row in 0..rows {
            let color = palette[row as usize % palette.len()];
            for col in 0..columns {
                let bounds = Rect::new(
                    col as f32 * config.brick_width,
                    row as f32 * config.brick_height + config.brick_top_margin,
                    config.brick_width,
                    config.brick_height,
                );
                bricks.push(Brick::new(bounds, color));
            }
        }
        log::debug!(
            "Built brick field: {} rows x {} columns",
            rows,
            columns
        );
        Self { bricks }
    }

    /// A field from explicit bricks (level layouts and tests)
    pub fn from_bricks(bricks: Vec<Brick>) -> Self {
        Self { bricks }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn active(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.is_active())
    }

    pub fn get(&self, index: usize) -> Option<&Brick> {
        self.bricks.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Brick> {
        self.bricks.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// True once every brick has been knocked out
    pub fn is_cleared(&self) -> bool {
        self.bricks.iter().all(|b| !b.is_active())
    }

    /// Index of the first active brick (creation order) overlapping `bounds`
    pub fn first_hit(&self, bounds: &Rect) -> Option<usize> {
        self.bricks
            .iter()
            .position(|b| b.is_active() && b.bounds.intersects(bounds))
    }
}
