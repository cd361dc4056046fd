//! Draw one frame of a session

use glam::Vec2;

use super::{Align, Surface};
use crate::colors;
use crate::sim::{GamePhase, Session};

/// Left edge of the lives counter, measured from the right of the field
const LIVES_INSET: f32 = 120.0;
/// HUD baseline distance from the top-left corner
const HUD_MARGIN: f32 = 10.0;

/// Draw and present a complete frame.
///
/// Entities are only drawn while the ball is in play; an ended session shows
/// the HUD and the result banner.
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, session: &Session) -> anyhow::Result<()> {
    surface.clear(colors::BACKGROUND);

    if session.is_active() {
        let paddle = &session.paddle.bounds;
        surface.fill_rect(paddle, colors::PADDLE);
        surface.stroke_rect(paddle, colors::OUTLINE);

        let ball = &session.ball;
        surface.fill_circle(ball.center(), ball.radius, colors::BALL);
        surface.stroke_circle(ball.center(), ball.radius, colors::OUTLINE);

        for brick in session.bricks.active() {
            surface.fill_rect(&brick.bounds, brick.color);
            surface.stroke_rect(&brick.bounds, colors::OUTLINE);
        }
    }

    draw_hud(surface, session);
    surface.present()
}

fn draw_hud<S: Surface + ?Sized>(surface: &mut S, session: &Session) {
    let config = &session.config;

    surface.draw_text(
        Vec2::splat(HUD_MARGIN),
        &format!("Score: {}", session.score),
        colors::TEXT,
        Align::Left,
    );
    surface.draw_text(
        Vec2::new(config.field_width - LIVES_INSET, HUD_MARGIN),
        &format!("Lives: {}", session.lives),
        colors::TEXT,
        Align::Left,
    );

    let banner = match session.phase() {
        GamePhase::Active => return,
        GamePhase::Won => "You Win!",
        GamePhase::Lost => "Game Over!",
    };
    let mid_x = config.field_width / 2.0;
    let mid_y = config.field_height / 2.0;
    surface.draw_text(Vec2::new(mid_x, mid_y - 30.0), banner, colors::TEXT, Align::Center);
    surface.draw_text(
        Vec2::new(mid_x, mid_y + 10.0),
        "Press R to restart",
        colors::TEXT,
        Align::Center,
    );
}
