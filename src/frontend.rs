//! Seams between the game core and the outside world.
//!
//! The core never touches a terminal, a window or the system clock directly;
//! it draws through a `Renderer`, reads a `FrameInput` from an `InputSource`
//! and paces itself with a `Clock`.

use crate::assets::Sprite;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
}

/// Axis-aligned rectangle in screen units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Horizontal anchoring for `Renderer::draw_text`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    /// `x` is the left edge of the text.
    Left,
    /// `x` is the right edge of the text.
    Right,
    /// `x` is the centre of the text.
    Center,
}

pub trait Renderer {
    /// Paint the background over the whole screen.
    fn clear(&mut self);
    fn blit(&mut self, sprite: &Sprite, pos: (i32, i32));
    fn draw_rect(&mut self, color: Rgb, rect: Rect);
    fn draw_text(&mut self, text: &str, x: i32, y: i32, align: Align, color: Rgb);
    /// Push the finished frame to the screen.
    fn present(&mut self) -> std::io::Result<()>;
}

/// Held-key state for one frame, plus the quit signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    pub quit: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    None,
    Start,
    Quit,
}

pub trait InputSource {
    fn poll_frame(&mut self) -> FrameInput;
    fn poll_menu(&mut self) -> MenuEvent;
}

pub trait Clock {
    /// Block until one frame at `fps` has elapsed since the previous tick.
    fn tick(&mut self, fps: u32);
}

/// Everything the loops need from the platform, bundled so it can be
/// threaded through by a single `&mut`.
pub struct Frontend<R, I, C> {
    pub renderer: R,
    pub input: I,
    pub clock: C,
}

impl<R: Renderer, I: InputSource, C: Clock> Frontend<R, I, C> {
    pub fn new(renderer: R, input: I, clock: C) -> Self {
        Frontend { renderer, input, clock }
    }
}
