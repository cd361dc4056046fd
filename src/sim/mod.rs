//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall clock
//! - Seeded RNG only, owned by the session
//! - Stable iteration order (brick creation order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod bricks;
pub mod collision;
pub mod geometry;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::{Ball, launch_angle};
pub use bricks::{Brick, BrickField};
pub use collision::{BounceAxis, resolve_collisions};
pub use geometry::{Rect, VecExt};
pub use paddle::{Direction, Paddle};
pub use state::{GameEvent, GamePhase, Session};
pub use tick::{TickInput, tick};
