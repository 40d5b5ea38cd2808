//! Terminal takeover and restore.
//!
//! `TerminalGuard` records each setup step as it succeeds and undoes exactly
//! those steps when dropped, so a failure halfway through setup (or anywhere
//! in the game) still leaves the terminal usable.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

pub struct TerminalGuard<W: Write> {
    out: W,
    raw: bool,
    screen: bool,
    keyboard_enhanced: bool,
}

impl<W: Write> TerminalGuard<W> {
    pub fn new(out: W) -> Self {
        TerminalGuard {
            out,
            raw: false,
            screen: false,
            keyboard_enhanced: false,
        }
    }

    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        Ok(())
    }

    /// Alternate screen, hidden cursor, mouse capture and, where supported,
    /// key-release events.
    pub fn enter_screen(&mut self) -> io::Result<()> {
        // Marked first: a half-applied sequence still needs undoing.
        self.screen = true;
        self.out.execute(terminal::EnterAlternateScreen)?;
        self.out.execute(cursor::Hide)?;
        self.out.execute(EnableMouseCapture)?;

        // Kitty-protocol terminals report key releases; others ignore this.
        self.keyboard_enhanced = self
            .out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
        Ok(())
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if self.keyboard_enhanced {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        if self.screen {
            let _ = self.out.execute(DisableMouseCapture);
            let _ = self.out.execute(cursor::Show);
            let _ = self.out.execute(terminal::LeaveAlternateScreen);
        }
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records everything written and rejects any write containing `fail_on`.
    struct Tape {
        bytes: Rc<RefCell<Vec<u8>>>,
        fail_on: &'static [u8],
    }

    impl Write for Tape {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf.windows(self.fail_on.len()).any(|w| w == self.fail_on) {
                return Err(io::Error::new(io::ErrorKind::Other, "refused"));
            }
            self.bytes.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn failed_setup_still_restores_the_screen() {
        let bytes = Rc::new(RefCell::new(Vec::new()));
        let mut guard = TerminalGuard::new(Tape {
            bytes: Rc::clone(&bytes),
            // Mouse capture is refused by this "terminal".
            fail_on: b"?1000h",
        });

        assert!(guard.enter_screen().is_err());
        assert!(contains(&bytes.borrow(), b"\x1b[?1049h"));
        drop(guard);

        let written = bytes.borrow();
        assert!(contains(&written, b"\x1b[?25h"), "cursor not shown again");
        assert!(contains(&written, b"\x1b[?1049l"), "alternate screen not left");
    }

    #[test]
    fn untouched_guard_writes_nothing() {
        let bytes = Rc::new(RefCell::new(Vec::new()));
        drop(TerminalGuard::new(Tape {
            bytes: Rc::clone(&bytes),
            fail_on: b"\x00",
        }));
        assert!(bytes.borrow().is_empty());
    }
}
