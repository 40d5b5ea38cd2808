//! One playthrough: the per-frame state machine and the loop that drives it.
//!
//! `Session::step` holds all game logic for a frame and never touches I/O;
//! `run_session` wraps it with frame pacing, rendering and input polling.

use rand::Rng;

use crate::assets::Assets;
use crate::constants::{
    BANNER_Y, COLLISION_DAMAGE, ENEMY_SHOT_CHANCE, ENEMY_VEL, FPS, HEIGHT, HUD_MARGIN,
    LASER_VEL, LOST_HOLD_FRAMES, PLAYER_SPAWN, START_LIVES, WIDTH,
};
use crate::frontend::{Align, Clock, FrameInput, Frontend, InputSource, Renderer, Rgb};
use crate::mask::collide;
use crate::ship::Ship;
use crate::wave::Waves;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// The loss banner ran its course.
    Lost,
    /// The player asked to leave.
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// Frozen on the loss banner; counts frames until `LOST_HOLD_FRAMES`.
    Lost,
    Terminated(EndReason),
}

#[derive(Clone, Debug)]
pub struct Session {
    pub waves: Waves,
    pub lives: i32,
    pub lost: bool,
    pub lost_frames: u32,
    pub player: Ship,
    pub enemies: Vec<Ship>,
    pub phase: Phase,
}

impl Session {
    pub fn new(assets: &Assets) -> Self {
        let (x, y) = PLAYER_SPAWN;
        Session {
            waves: Waves::default(),
            lives: START_LIVES,
            lost: false,
            lost_frames: 0,
            player: Ship::player(x, y, assets),
            enemies: Vec::new(),
            phase: Phase::Playing,
        }
    }

    pub fn level(&self) -> u32 {
        self.waves.level
    }

    /// Advance the game by one frame.  Rendering for the frame has already
    /// happened by the time this runs.
    pub fn step(&mut self, input: &FrameInput, assets: &Assets, rng: &mut impl Rng) -> Phase {
        if let Phase::Terminated(_) = self.phase {
            return self.phase;
        }

        // ── 1. Loss detection & hold ─────────────────────────────────────────
        if self.lives <= 0 || self.player.health <= 0 {
            if !self.lost {
                log::info!(
                    "player lost at level {} (lives {}, health {})",
                    self.waves.level,
                    self.lives,
                    self.player.health
                );
            }
            self.lost = true;
            self.lost_frames += 1;
        }
        if self.lost {
            self.phase = if self.lost_frames > LOST_HOLD_FRAMES {
                Phase::Terminated(EndReason::Lost)
            } else {
                Phase::Lost
            };
            return self.phase;
        }

        // ── 2. Quit ──────────────────────────────────────────────────────────
        if input.quit {
            self.phase = Phase::Terminated(EndReason::Quit);
            return self.phase;
        }

        // ── 3. Next wave ─────────────────────────────────────────────────────
        if self.enemies.is_empty() {
            self.waves.spawn_next(&mut self.enemies, assets, rng);
        }

        // ── 4. Player input ──────────────────────────────────────────────────
        self.player.apply_input(input);

        // ── 5. Enemies ───────────────────────────────────────────────────────
        let player = &mut self.player;
        let lives = &mut self.lives;
        self.enemies.retain_mut(|enemy| {
            enemy.descend(ENEMY_VEL);
            enemy.advance_lasers(LASER_VEL, player);

            if rng.gen_ratio(1, ENEMY_SHOT_CHANCE) {
                enemy.shoot();
            }

            if collide(&*enemy, &*player) {
                player.health -= COLLISION_DAMAGE;
                log::debug!("rammed by {:?}, player health {}", enemy.role, player.health);
                false
            } else if enemy.y + enemy.height() > HEIGHT {
                *lives -= 1;
                log::debug!("breach by {:?}, {} lives left", enemy.role, lives);
                false
            } else {
                true
            }
        });

        // ── 6. Player lasers ─────────────────────────────────────────────────
        let kills = self.player.advance_lasers_against(-LASER_VEL, &mut self.enemies);
        if kills > 0 {
            log::debug!("{} enemies destroyed, {} remain", kills, self.enemies.len());
        }

        self.phase = Phase::Playing;
        self.phase
    }

    /// Draw the whole frame: background, HUD, ships and, once lost, the banner.
    pub fn draw(&self, renderer: &mut impl Renderer) -> std::io::Result<()> {
        renderer.clear();

        renderer.draw_text(
            &format!("Lives : {}", self.lives),
            HUD_MARGIN,
            HUD_MARGIN,
            Align::Left,
            Rgb::WHITE,
        );
        renderer.draw_text(
            &format!("Level : {}", self.waves.level),
            WIDTH - HUD_MARGIN,
            HUD_MARGIN,
            Align::Right,
            Rgb::WHITE,
        );

        self.player.draw(renderer);
        for enemy in &self.enemies {
            enemy.draw(renderer);
        }

        if self.lost {
            renderer.draw_text("You Lost!!", WIDTH / 2, BANNER_Y, Align::Center, Rgb::WHITE);
        }

        renderer.present()
    }
}

/// Play one session to completion.
pub fn run_session<R, I, C>(
    session: &mut Session,
    frontend: &mut Frontend<R, I, C>,
    assets: &Assets,
    rng: &mut impl Rng,
) -> std::io::Result<EndReason>
where
    R: Renderer,
    I: InputSource,
    C: Clock,
{
    loop {
        frontend.clock.tick(FPS);
        session.draw(&mut frontend.renderer)?;

        let input = frontend.input.poll_frame();
        if let Phase::Terminated(reason) = session.step(&input, assets, rng) {
            return Ok(reason);
        }
    }
}
