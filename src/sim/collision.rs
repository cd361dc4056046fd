//! Collision detection and response
//!
//! Runs once per tick in a fixed order: paddle, bricks, floor, win check.
//! Everything here is a gameplay branch, not an error.

use super::ball::Ball;
use super::geometry::{Rect, VecExt};
use super::paddle::Paddle;
use super::state::{GameEvent, Session};

/// Steering offset of the ball relative to the paddle centre.
///
/// Nominally in [-1, 1]; not clamped, so a corner hit with the ball centre
/// past the paddle's end can exceed 1.
pub fn paddle_offset(ball: &Ball, paddle: &Paddle) -> f32 {
    (ball.bounds.center_x() - paddle.bounds.center_x()) / (paddle.bounds.width / 2.0)
}

/// Bounce the ball off the paddle if they overlap.
///
/// Vertical speed is kept but forced upward, horizontal speed is replaced by
/// `offset * speed * deflection`, and the ball is lifted onto the paddle so
/// the next tick cannot hit again.
pub fn ball_paddle_collision(ball: &mut Ball, paddle: &Paddle, deflection: f32) -> Option<f32> {
    if !ball.bounds.intersects(&paddle.bounds) {
        return None;
    }

    let offset = paddle_offset(ball, paddle);
    ball.velocity.y = -ball.velocity.y.abs();
    ball.velocity.x = offset * ball.speed * deflection;
    ball.bounds.set_bottom(paddle.bounds.top());
    Some(offset)
}

/// Which velocity component a brick hit reflects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceAxis {
    X,
    Y,
}

/// Guess the struck face from overlap depths: a shallower horizontal overlap
/// means a side hit.
pub fn bounce_axis(ball: &Ball, brick: &Rect) -> BounceAxis {
    let overlap = ball.bounds.overlap(brick);
    if overlap.x < overlap.y {
        BounceAxis::X
    } else {
        BounceAxis::Y
    }
}

/// Resolve at most one brick hit. Returns the destroyed brick's index.
pub fn ball_brick_collision(session: &mut Session) -> Option<usize> {
    let index = session.bricks.first_hit(&session.ball.bounds)?;
    let brick = session.bricks.get_mut(index)?;
    brick.deactivate();

    match bounce_axis(&session.ball, &brick.bounds) {
        BounceAxis::X => session.ball.velocity.negate_x(),
        BounceAxis::Y => session.ball.velocity.negate_y(),
    }
    session.score += session.config.points_per_brick;
    Some(index)
}

/// True if the ball has dropped below the field
pub fn ball_below_floor(ball: &Ball, field_height: f32) -> bool {
    ball.bounds.bottom() > field_height
}

/// Run every collision check for one tick, in order
pub fn resolve_collisions(session: &mut Session) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // 1. Paddle
    if let Some(offset) = ball_paddle_collision(
        &mut session.ball,
        &session.paddle,
        session.config.paddle_deflection,
    ) {
        log::debug!("Paddle hit: offset={:.3}, vel={}", offset, session.ball.velocity);
        events.push(GameEvent::PaddleHit { offset });
    }

    // 2. Bricks (one per tick)
    if let Some(index) = ball_brick_collision(session) {
        log::debug!("Brick {} destroyed, score={}", index, session.score);
        events.push(GameEvent::BrickDestroyed {
            index,
            points: session.config.points_per_brick,
        });
    }

    // 3. Floor
    if ball_below_floor(&session.ball, session.config.field_height) {
        session.lives = session.lives.saturating_sub(1);
        log::info!("Life lost, {} remaining", session.lives);
        events.push(GameEvent::LifeLost {
            remaining: session.lives,
        });
        if session.lives > 0 {
            session.ball.reset(&session.config, &mut session.rng);
            events.push(GameEvent::BallReset);
        } else {
            session.game_over = true;
            log::info!("Game over, final score {}", session.score);
            events.push(GameEvent::GameOver);
        }
    }

    // 4. Win, checked regardless of the floor outcome
    if session.bricks.is_cleared() {
        session.win = true;
        session.game_over = true;
        log::info!("All bricks cleared, final score {}", session.score);
        events.push(GameEvent::Won);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use crate::sim::bricks::{Brick, BrickField};
    use crate::sim::geometry::Rect;
    use glam::Vec2;

    fn session() -> Session {
        Session::new(Config::default(), 4242)
    }

    /// Park the ball far from everything
    fn park_ball(session: &mut Session) {
        session.ball.bounds.x = 390.0;
        session.ball.bounds.y = 400.0;
        session.ball.velocity = Vec2::new(0.0, -5.0);
    }

    #[test]
    fn test_paddle_hit_centre_goes_straight_up() {
        let mut s = session();
        // Ball centred over the paddle, bottom 3px into the paddle top (550)
        s.ball.bounds = Rect::new(390.0, 533.0, 20.0, 20.0);
        s.ball.velocity = Vec2::new(0.0, 5.0);

        let events = resolve_collisions(&mut s);

        assert!(matches!(events[0], GameEvent::PaddleHit { offset } if offset.abs() < 1e-6));
        assert!(s.ball.velocity.x.abs() < 1e-6);
        assert_eq!(s.ball.velocity.y, -5.0);
        assert_eq!(s.ball.bounds.bottom(), s.paddle.bounds.top());
    }

    #[test]
    fn test_paddle_hit_right_edge_deflects() {
        let mut s = session();
        // Ball centre at paddle's right edge (450)
        s.ball.bounds = Rect::new(440.0, 535.0, 20.0, 20.0);
        s.ball.velocity = Vec2::new(-1.0, 4.0);

        let offset = ball_paddle_collision(&mut s.ball, &s.paddle, 1.2).unwrap();

        assert!((offset - 1.0).abs() < 1e-6);
        assert!((s.ball.velocity.x - 6.0).abs() < 1e-5);
        assert_eq!(s.ball.velocity.y, -4.0);
    }

    #[test]
    fn test_paddle_hit_keeps_upward_ball_upward() {
        let mut s = session();
        s.ball.bounds = Rect::new(340.0, 540.0, 20.0, 20.0);
        s.ball.velocity = Vec2::new(2.0, -3.0);
        let offset = ball_paddle_collision(&mut s.ball, &s.paddle, 1.2).unwrap();
        assert!((offset + 1.0).abs() < 1e-6);
        assert_eq!(s.ball.velocity.y, -3.0);
        assert!((s.ball.velocity.x + 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_paddle_offset_unclamped_on_corner_hit() {
        let mut s = session();
        // Ball centre 8px beyond the paddle's right end, box still overlapping
        s.ball.bounds = Rect::new(448.0, 535.0, 20.0, 20.0);
        s.ball.velocity = Vec2::new(0.0, 5.0);
        let offset = ball_paddle_collision(&mut s.ball, &s.paddle, 1.2).unwrap();
        assert!(offset > 1.0);
        assert!(s.ball.velocity.x > s.ball.speed * 1.2);
    }

    #[test]
    fn test_no_paddle_hit_when_touching_only() {
        let mut s = session();
        s.ball.bounds = Rect::new(390.0, 530.0, 20.0, 20.0);
        s.ball.velocity = Vec2::new(0.0, 5.0);
        assert!(ball_paddle_collision(&mut s.ball, &s.paddle, 1.2).is_none());
        assert_eq!(s.ball.velocity, Vec2::new(0.0, 5.0));
    }

    #[test]
    fn test_brick_hit_from_below_reflects_y() {
        let mut s = session();
        // Clipping the underside of the bottom-left brick (row 3 spans y 140..170)
        s.ball.bounds = Rect::new(20.0, 166.0, 20.0, 20.0);
        s.ball.velocity = Vec2::new(3.0, -4.0);

        let events = resolve_collisions(&mut s);

        assert_eq!(
            events,
            vec![GameEvent::BrickDestroyed {
                index: 30,
                points: 10
            }]
        );
        assert_eq!(s.ball.velocity, Vec2::new(3.0, 4.0));
        assert_eq!(s.score, 10);
        assert!(!s.bricks.get(30).unwrap().is_active());
    }

    #[test]
    fn test_brick_side_hit_reflects_x() {
        let mut s = session();
        s.bricks = BrickField::from_bricks(vec![
            Brick::new(Rect::new(300.0, 300.0, 75.0, 30.0), [0, 0, 0]),
            Brick::new(Rect::new(0.0, 0.0, 10.0, 10.0), [0, 0, 0]),
        ]);
        // Ball clipping the left face: 3px deep horizontally, 20px vertically
        s.ball.bounds = Rect::new(283.0, 305.0, 20.0, 20.0);
        s.ball.velocity = Vec2::new(4.0, 3.0);

        assert_eq!(ball_brick_collision(&mut s), Some(0));
        assert_eq!(s.ball.velocity, Vec2::new(-4.0, 3.0));
    }

    #[test]
    fn test_only_one_brick_per_tick() {
        let mut s = session();
        // Straddles bricks 30 and 31 along the bottom row
        s.ball.bounds = Rect::new(65.0, 165.0, 20.0, 20.0);
        s.ball.velocity = Vec2::new(0.0, -5.0);

        resolve_collisions(&mut s);

        assert_eq!(s.score, 10);
        assert!(!s.bricks.get(30).unwrap().is_active());
        assert!(s.bricks.get(31).unwrap().is_active());
        assert_eq!(s.ball.velocity, Vec2::new(0.0, 5.0));
    }

    #[test]
    fn test_floor_costs_a_life_and_resets() {
        let mut s = session();
        s.ball.bounds = Rect::new(100.0, 590.0, 20.0, 20.0);
        s.ball.velocity = Vec2::new(0.0, 5.0);

        let events = resolve_collisions(&mut s);

        assert_eq!(
            events,
            vec![GameEvent::LifeLost { remaining: 2 }, GameEvent::BallReset]
        );
        assert_eq!(s.lives, 2);
        assert!(!s.game_over);
        assert_eq!(s.ball.center(), Vec2::new(400.0, 300.0));
        assert!(s.ball.velocity.y < 0.0);
    }

    #[test]
    fn test_last_life_ends_game() {
        let mut s = session();
        s.lives = 1;
        s.ball.bounds = Rect::new(100.0, 590.0, 20.0, 20.0);

        let events = resolve_collisions(&mut s);

        assert_eq!(
            events,
            vec![GameEvent::LifeLost { remaining: 0 }, GameEvent::GameOver]
        );
        assert_eq!(s.lives, 0);
        assert!(s.game_over);
        assert!(!s.win);
    }

    #[test]
    fn test_last_brick_wins() {
        let mut s = session();
        for i in 1..s.bricks.len() {
            s.bricks.get_mut(i).unwrap().deactivate();
        }
        s.ball.bounds = Rect::new(20.0, 76.0, 20.0, 20.0);
        s.ball.velocity = Vec2::new(0.0, -5.0);

        let events = resolve_collisions(&mut s);

        assert!(events.contains(&GameEvent::Won));
        assert!(s.win);
        assert!(s.game_over);
        assert_eq!(s.lives, 3);
        assert_eq!(s.score, 10);
    }

    #[test]
    fn test_win_beats_last_life_on_same_tick() {
        let mut s = session();
        s.lives = 1;
        s.bricks = BrickField::from_bricks(vec![Brick::new(
            Rect::new(0.0, 580.0, 200.0, 30.0),
            [0, 0, 0],
        )]);
        s.ball.bounds = Rect::new(100.0, 590.0, 20.0, 20.0);
        s.ball.velocity = Vec2::new(0.0, 5.0);

        resolve_collisions(&mut s);

        assert_eq!(s.lives, 0);
        assert!(s.game_over);
        assert!(s.win);
    }

    #[test]
    fn test_quiet_tick_has_no_events() {
        let mut s = session();
        park_ball(&mut s);
        assert!(resolve_collisions(&mut s).is_empty());
        assert_eq!(s.score, 0);
        assert_eq!(s.lives, 3);
    }
}
