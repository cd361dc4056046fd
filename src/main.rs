//! Breakout entry point
//!
//! Sets up the terminal, runs the fixed-rate game loop, and always restores
//! the terminal on the way out.

use std::io::{BufWriter, Stdout, Write, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    ExecutableCommand, cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal,
};
use glam::Vec2;

use breakout::Config;
use breakout::platform::{FrameClock, KeyTracker};
use breakout::renderer::{TerminalSurface, draw_frame};
use breakout::sim::{Session, tick};

const TITLE: &str = "Modern Breakout";

fn main() -> Result<()> {
    env_logger::init();
    log::info!("{} starting...", TITLE);

    let config = Config::from_env()?;
    let session = Session::from_config(config)?;

    let mut out = BufWriter::new(stdout());
    let keyboard_enhanced = enter_terminal(&mut out)?;

    let result = run(&mut out, session, keyboard_enhanced);

    leave_terminal(&mut out, keyboard_enhanced);
    result
}

/// Raw mode, alternate screen, hidden cursor. Returns whether key release
/// events were enabled.
fn enter_terminal(out: &mut BufWriter<Stdout>) -> Result<bool> {
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)
        .context("failed to open the alternate screen")?;
    out.execute(cursor::Hide)?;
    out.execute(terminal::SetTitle(TITLE))?;

    // Kitty-protocol terminals report releases; others fall back to key repeat
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if keyboard_enhanced {
        out.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    log::debug!("Keyboard enhancement: {}", keyboard_enhanced);
    Ok(keyboard_enhanced)
}

fn leave_terminal(out: &mut BufWriter<Stdout>, keyboard_enhanced: bool) {
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = out.flush();
}

fn run<W: Write>(out: &mut W, mut session: Session, release_events: bool) -> Result<()> {
    let (cols, rows) = terminal::size().context("failed to query terminal size")?;
    let field = Vec2::new(session.config.field_width, session.config.field_height);
    let mut surface = TerminalSurface::new(out, field, cols, rows);
    let mut keys = KeyTracker::new(release_events);
    let mut clock = FrameClock::new(session.config.fps);

    loop {
        // Drain pending input without blocking
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => keys.handle(&key),
                Event::Resize(cols, rows) => surface.resize(cols, rows),
                _ => {}
            }
        }
        if keys.quit_requested() {
            log::info!("Quit after {} frames, score {}", clock.frames(), session.score);
            return Ok(());
        }

        let input = keys.next_input();
        tick(&mut session, &input);

        draw_frame(&mut surface, &session)?;
        clock.wait();
    }
}
