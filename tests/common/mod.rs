//! Test doubles for the frontend traits.
#![allow(dead_code)]

use std::collections::VecDeque;

use pixel_raiders::frontend::{Align, Clock, FrameInput, InputSource, MenuEvent, Rect, Renderer, Rgb};
use pixel_raiders::{Sprite, SpriteId};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Blit(SpriteId, (i32, i32)),
    Rect(Rgb, Rect),
    Text(String, i32, i32, Align),
    Present,
}

/// Remembers every call instead of drawing.
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text(t, ..) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn rects(&self) -> Vec<(Rgb, Rect)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Rect(color, rect) => Some((*color, *rect)),
                _ => None,
            })
            .collect()
    }

    pub fn presents(&self) -> usize {
        self.calls.iter().filter(|c| **c == DrawCall::Present).count()
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn blit(&mut self, sprite: &Sprite, pos: (i32, i32)) {
        self.calls.push(DrawCall::Blit(sprite.id, pos));
    }

    fn draw_rect(&mut self, color: Rgb, rect: Rect) {
        self.calls.push(DrawCall::Rect(color, rect));
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, align: Align, _color: Rgb) {
        self.calls.push(DrawCall::Text(text.to_string(), x, y, align));
    }

    fn present(&mut self) -> std::io::Result<()> {
        self.calls.push(DrawCall::Present);
        Ok(())
    }
}

/// Replays queued events; once a queue runs dry it returns the idle value.
#[derive(Default)]
pub struct ScriptedInput {
    pub frames: VecDeque<FrameInput>,
    pub menu: VecDeque<MenuEvent>,
}

impl InputSource for ScriptedInput {
    fn poll_frame(&mut self) -> FrameInput {
        self.frames.pop_front().unwrap_or_default()
    }

    fn poll_menu(&mut self) -> MenuEvent {
        self.menu.pop_front().unwrap_or(MenuEvent::None)
    }
}

/// Never sleeps; just counts ticks.
#[derive(Default)]
pub struct CountingClock {
    pub ticks: u32,
}

impl Clock for CountingClock {
    fn tick(&mut self, _fps: u32) {
        self.ticks += 1;
    }
}
