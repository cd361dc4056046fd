//! Rendering module
//!
//! The simulation is drawn through the `Surface` trait so the scene code
//! does not depend on any particular backend. All coordinates are field
//! pixels.

pub mod scene;
pub mod terminal;

pub use scene::draw_frame;
pub use terminal::TerminalSurface;

use glam::Vec2;

use crate::Rgb;
use crate::sim::Rect;

/// Horizontal anchoring of a text string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// `pos` is the left end of the text
    Left,
    /// `pos` is the middle of the text
    Center,
}

/// Something the scene can be drawn onto
pub trait Surface {
    fn clear(&mut self, color: Rgb);
    fn fill_rect(&mut self, rect: &Rect, color: Rgb);
    fn stroke_rect(&mut self, rect: &Rect, color: Rgb);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgb);
    fn draw_text(&mut self, pos: Vec2, text: &str, color: Rgb, align: Align);
    /// Show everything drawn since the last `clear`
    fn present(&mut self) -> anyhow::Result<()>;
}
