//! Terminal input and frame pacing.
//!
//! Terminals report key presses, not key state.  Instead of acting on each
//! key event individually, `TerminalInput` keeps a `key_frame` map with the
//! frame number of the last press/repeat event for every key, and treats a
//! key as held while that entry is fresh (within `HOLD_WINDOW` frames).
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
//!   `Press` / `Repeat` / `Release` events, so keys are dropped on release.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows up as
//!   repeated presses).  Keys expire after `HOLD_WINDOW` frames of silence.

use std::collections::HashMap;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use pixel_raiders::frontend::{Clock, FrameInput, InputSource, MenuEvent};

/// A key counts as held if its last press/repeat arrived within this many
/// frames.  OS key-repeat runs at 15 Hz or faster, so 8 frames at 60 FPS
/// (≈133 ms) is always refreshed before it expires.
const HOLD_WINDOW: u64 = 8;

pub struct TerminalInput {
    rx: mpsc::Receiver<Event>,
    /// Each held key → the frame it was last seen (press or repeat).
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
}

impl TerminalInput {
    pub fn new(rx: mpsc::Receiver<Event>) -> Self {
        TerminalInput {
            rx,
            key_frame: HashMap::new(),
            frame: 0,
        }
    }

    fn is_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| {
            self.key_frame
                .get(key)
                .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
                .unwrap_or(false)
        })
    }
}

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

impl InputSource for TerminalInput {
    fn poll_frame(&mut self) -> FrameInput {
        self.frame += 1;
        let mut quit = false;

        // Drain all pending events without blocking.
        while let Ok(event) = self.rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
            else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    quit |= is_quit(code, modifiers);
                    self.key_frame.insert(code, self.frame);
                }
                KeyEventKind::Repeat => {
                    self.key_frame.insert(code, self.frame);
                }
                KeyEventKind::Release => {
                    self.key_frame.remove(&code);
                }
            }
        }

        FrameInput {
            left: self.is_held(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]),
            right: self.is_held(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]),
            up: self.is_held(&[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')]),
            down: self.is_held(&[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')]),
            fire: self.is_held(&[KeyCode::Char(' ')]),
            quit,
        }
    }

    fn poll_menu(&mut self) -> MenuEvent {
        // Keys held during the last session must not leak into the next one.
        self.key_frame.clear();

        let mut result = MenuEvent::None;
        while let Ok(event) = self.rx.try_recv() {
            match event {
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(_),
                    ..
                }) => {
                    if result == MenuEvent::None {
                        result = MenuEvent::Start;
                    }
                }
                Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    modifiers,
                    ..
                }) => {
                    if is_quit(code, modifiers) {
                        return MenuEvent::Quit;
                    }
                    if code == KeyCode::Enter && result == MenuEvent::None {
                        result = MenuEvent::Start;
                    }
                }
                _ => {}
            }
        }
        result
    }
}

/// Sleeps away whatever is left of each frame's time budget.
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock {
            last: Instant::now(),
        }
    }
}

impl Clock for FrameClock {
    fn tick(&mut self, fps: u32) {
        let budget = Duration::from_secs(1) / fps.max(1);
        let elapsed = self.last.elapsed();
        if elapsed < budget {
            std::thread::sleep(budget - elapsed);
        }
        self.last = Instant::now();
    }
}
