//! One simulation step
//!
//! Active: paddle input, then collisions, then ball motion.
//! Ended: nothing moves; only a restart is honoured.

use super::collision::resolve_collisions;
use super::paddle::Direction;
use super::state::{GameEvent, Session};

/// Input intents for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move paddle left (held)
    pub left: bool,
    /// Move paddle right (held)
    pub right: bool,
    /// Start a new session (edge-triggered, only acted on once ended)
    pub restart: bool,
}

/// Advance the session by one tick
pub fn tick(session: &mut Session, input: &TickInput) -> Vec<GameEvent> {
    if session.game_over {
        if input.restart {
            session.restart();
            return vec![GameEvent::Restarted];
        }
        return Vec::new();
    }

    session.time_ticks += 1;

    let field_width = session.config.field_width;
    if input.left {
        session.paddle.step(Direction::Left, field_width);
    }
    if input.right {
        session.paddle.step(Direction::Right, field_width);
    }

    let events = resolve_collisions(session);
    session.ball.update(field_width);
    events
}
