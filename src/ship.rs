//! Combatants: the player ship and the enemy ships.
//!
//! Both share one record (`Ship`) and differ only through `Role`.  Lasers
//! are resolved under one of two policies:
//!
//! * `advance_lasers`: flat damage against a single target, which survives
//!   as long as it has health left (enemy lasers vs. the player).
//! * `advance_lasers_against`: instant kill against a list of targets; any
//!   target a laser touches is removed outright (player lasers vs. enemies).

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::assets::{Assets, Sprite, SpriteId};
use crate::constants::{
    COOLDOWN, DEFAULT_HEALTH, ENEMY_LASER_X_OFFSET, HEALTH_BAR_GAP, HEALTH_BAR_HEIGHT, HEIGHT,
    LASER_DAMAGE, PLAYER_VEL, WIDTH,
};
use crate::error::GameError;
use crate::frontend::{FrameInput, Rect, Renderer, Rgb};
use crate::laser::Laser;
use crate::mask::{Mask, Masked};

// ── Enemy colours ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyColor {
    Red,
    Green,
    Blue,
}

impl EnemyColor {
    pub const ALL: [EnemyColor; 3] = [EnemyColor::Red, EnemyColor::Green, EnemyColor::Blue];

    /// `(ship sprite, laser sprite)` for this colour.
    pub fn sprites(self) -> (SpriteId, SpriteId) {
        match self {
            EnemyColor::Red => (SpriteId::RedShip, SpriteId::RedLaser),
            EnemyColor::Green => (SpriteId::GreenShip, SpriteId::GreenLaser),
            EnemyColor::Blue => (SpriteId::BlueShip, SpriteId::BlueLaser),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EnemyColor::Red => "red",
            EnemyColor::Green => "green",
            EnemyColor::Blue => "blue",
        }
    }
}

impl fmt::Display for EnemyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EnemyColor {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(EnemyColor::Red),
            "green" => Ok(EnemyColor::Green),
            "blue" => Ok(EnemyColor::Blue),
            other => Err(GameError::UnknownColor(other.to_string())),
        }
    }
}

// ── Ship ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// `max_health` only scales the health bar; health never regenerates.
    Player { max_health: i32 },
    Enemy { color: EnemyColor },
}

#[derive(Clone, Debug)]
pub struct Ship {
    pub x: i32,
    pub y: i32,
    /// May dip below zero for one frame before the session notices.
    pub health: i32,
    pub cooldown_counter: u32,
    /// In firing order.
    pub lasers: Vec<Laser>,
    pub role: Role,
    pub sprite: Rc<Sprite>,
    pub laser_sprite: Rc<Sprite>,
}

impl Ship {
    pub fn player(x: i32, y: i32, assets: &Assets) -> Self {
        Ship {
            x,
            y,
            health: DEFAULT_HEALTH,
            cooldown_counter: 0,
            lasers: Vec::new(),
            role: Role::Player {
                max_health: DEFAULT_HEALTH,
            },
            sprite: assets.get(SpriteId::PlayerShip),
            laser_sprite: assets.get(SpriteId::YellowLaser),
        }
    }

    pub fn enemy(x: i32, y: i32, color: EnemyColor, assets: &Assets) -> Self {
        let (ship, laser) = color.sprites();
        Ship {
            x,
            y,
            health: DEFAULT_HEALTH,
            cooldown_counter: 0,
            lasers: Vec::new(),
            role: Role::Enemy { color },
            sprite: assets.get(ship),
            laser_sprite: assets.get(laser),
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self.role, Role::Player { .. })
    }

    /// Horizontal extent of the sprite.
    pub fn width(&self) -> i32 {
        self.sprite.width()
    }

    /// Vertical extent of the sprite.
    pub fn height(&self) -> i32 {
        self.sprite.height()
    }

    // ── Weapon ───────────────────────────────────────────────────────────────

    /// Fire if the weapon is ready.  Returns whether a laser was spawned.
    pub fn shoot(&mut self) -> bool {
        if self.cooldown_counter != 0 {
            return false;
        }
        let x = match self.role {
            Role::Player { .. } => self.x,
            Role::Enemy { .. } => self.x + ENEMY_LASER_X_OFFSET,
        };
        self.lasers
            .push(Laser::new(x, self.y, Rc::clone(&self.laser_sprite)));
        self.cooldown_counter = 1;
        log::trace!("{:?} fired from ({}, {})", self.role, x, self.y);
        true
    }

    /// Advance the refractory period by one frame.
    pub fn cooldown_tick(&mut self) {
        if self.cooldown_counter >= COOLDOWN {
            self.cooldown_counter = 0;
        } else if self.cooldown_counter > 0 {
            self.cooldown_counter += 1;
        }
    }

    /// Flat-damage policy: every laser that hits `target` takes
    /// `LASER_DAMAGE` off its health and is destroyed.
    pub fn advance_lasers(&mut self, vel: i32, target: &mut Ship) {
        self.cooldown_tick();
        self.lasers.retain_mut(|laser| {
            laser.move_by(vel);
            if laser.off_screen(HEIGHT) {
                false
            } else if laser.collides_with(&*target) {
                target.health -= LASER_DAMAGE;
                false
            } else {
                true
            }
        });
    }

    /// Instant-kill policy: every target a laser overlaps is removed from
    /// `targets`, and the laser with it.  Returns the number of kills.
    pub fn advance_lasers_against(&mut self, vel: i32, targets: &mut Vec<Ship>) -> usize {
        self.cooldown_tick();
        let mut kills = 0;
        self.lasers.retain_mut(|laser| {
            laser.move_by(vel);
            if laser.off_screen(HEIGHT) {
                return false;
            }
            let before = targets.len();
            targets.retain(|target| !laser.collides_with(target));
            let hit = before - targets.len();
            kills += hit;
            hit == 0
        });
        kills
    }

    // ── Movement ─────────────────────────────────────────────────────────────

    /// Straight down by `vel`.
    pub fn descend(&mut self, vel: i32) {
        self.y += vel;
    }

    /// Apply one frame of player input.  Each axis is checked on its own, so
    /// a move blocked by one edge never cancels a move along the other axis.
    pub fn apply_input(&mut self, input: &FrameInput) {
        if input.left && self.x - PLAYER_VEL > 0 {
            self.x -= PLAYER_VEL;
        }
        if input.right && self.x + PLAYER_VEL + self.width() < WIDTH {
            self.x += PLAYER_VEL;
        }
        if input.up && self.y - PLAYER_VEL > 0 {
            self.y -= PLAYER_VEL;
        }
        // Leave room for the health bar under the hull.
        if input.down && self.y + PLAYER_VEL + self.height() + HEALTH_BAR_GAP < HEIGHT {
            self.y += PLAYER_VEL;
        }
        if input.fire {
            self.shoot();
        }
    }

    // ── Drawing ──────────────────────────────────────────────────────────────

    pub fn draw(&self, renderer: &mut impl Renderer) {
        renderer.blit(&self.sprite, (self.x, self.y));
        for laser in &self.lasers {
            laser.draw(renderer);
        }
        if let Role::Player { max_health } = self.role {
            self.draw_health_bar(renderer, max_health);
        }
    }

    fn draw_health_bar(&self, renderer: &mut impl Renderer, max_health: i32) {
        let y = self.y + self.height() + HEALTH_BAR_GAP;
        let full = self.width();
        renderer.draw_rect(
            Rgb::RED,
            Rect {
                x: self.x,
                y,
                w: full,
                h: HEALTH_BAR_HEIGHT,
            },
        );
        let filled = if max_health > 0 {
            full * self.health.clamp(0, max_health) / max_health
        } else {
            0
        };
        renderer.draw_rect(
            Rgb::GREEN,
            Rect {
                x: self.x,
                y,
                w: filled,
                h: HEALTH_BAR_HEIGHT,
            },
        );
    }
}

impl Masked for Ship {
    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn mask(&self) -> &Mask {
        &self.sprite.mask
    }
}
