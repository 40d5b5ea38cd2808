//! Title screen: the outer loop that starts a fresh session on demand.

use rand::Rng;

use crate::assets::Assets;
use crate::constants::{BANNER_Y, FPS, WIDTH};
use crate::frontend::{Align, Clock, Frontend, InputSource, MenuEvent, Renderer, Rgb};
use crate::session::{run_session, EndReason, Session};

pub const TITLE: &str = "Press the mouse to begin...";

/// Why the menu loop returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuExit {
    /// Quit from the title screen.
    Closed,
    /// Quit in the middle of a session.
    QuitInGame,
}

/// Show the title screen until the player quits.  Every start builds a new
/// `Session`; nothing carries over from one playthrough to the next.
/// Returns the number of sessions played alongside the exit reason.
pub fn run_menu<R, I, C>(
    frontend: &mut Frontend<R, I, C>,
    assets: &Assets,
    rng: &mut impl Rng,
) -> std::io::Result<(MenuExit, u32)>
where
    R: Renderer,
    I: InputSource,
    C: Clock,
{
    let mut played = 0;
    loop {
        frontend.clock.tick(FPS);
        draw_title(&mut frontend.renderer)?;

        match frontend.input.poll_menu() {
            MenuEvent::None => {}
            MenuEvent::Quit => return Ok((MenuExit::Closed, played)),
            MenuEvent::Start => {
                played += 1;
                log::info!("session {} started", played);
                let mut session = Session::new(assets);
                let reason = run_session(&mut session, frontend, assets, rng)?;
                log::info!(
                    "session {} ended ({:?}) at level {} with {} lives",
                    played,
                    reason,
                    session.level(),
                    session.lives
                );
                if reason == EndReason::Quit {
                    return Ok((MenuExit::QuitInGame, played));
                }
            }
        }
    }
}

fn draw_title(renderer: &mut impl Renderer) -> std::io::Result<()> {
    renderer.clear();
    renderer.draw_text(TITLE, WIDTH / 2, BANNER_Y, Align::Center, Rgb::WHITE);
    renderer.present()
}
