//! Fixed tuning values shared by the whole game.
//!
//! Difficulty is flat: nothing here scales with the level.

// ── Screen & timing ──────────────────────────────────────────────────────────

/// World width in screen units.
pub const WIDTH: i32 = 750;
/// World height in screen units.
pub const HEIGHT: i32 = 750;
/// Target frame rate.
pub const FPS: u32 = 60;
/// Frames the loss banner stays up before the session ends (3 seconds).
pub const LOST_HOLD_FRAMES: u32 = FPS * 3;

// ── Ships ────────────────────────────────────────────────────────────────────

/// Frames between two shots of the same ship.
pub const COOLDOWN: u32 = 30;
pub const DEFAULT_HEALTH: i32 = 100;
pub const PLAYER_SPAWN: (i32, i32) = (375, 600);
pub const PLAYER_VEL: i32 = 5;
pub const ENEMY_VEL: i32 = 1;
/// Enemy lasers are shifted left so they leave from under the hull.
pub const ENEMY_LASER_X_OFFSET: i32 = -20;
/// One in this many frames, an enemy tries to fire.
pub const ENEMY_SHOT_CHANCE: u32 = 120;

// ── Combat ───────────────────────────────────────────────────────────────────

pub const LASER_VEL: i32 = 5;
pub const LASER_DAMAGE: i32 = 10;
/// Health lost by the player when an enemy hull rams it.
pub const COLLISION_DAMAGE: i32 = 10;
pub const START_LIVES: i32 = 5;

// ── Waves ────────────────────────────────────────────────────────────────────

/// Extra enemies added with every new wave.
pub const WAVE_STEP: u32 = 5;
pub const SPAWN_X_MIN: i32 = 50;
pub const SPAWN_X_MAX: i32 = WIDTH - 100; // exclusive
pub const SPAWN_Y_MIN: i32 = -1500;
pub const SPAWN_Y_MAX: i32 = -100; // exclusive

// ── HUD ──────────────────────────────────────────────────────────────────────

/// Gap between the bottom of the player sprite and its health bar.
pub const HEALTH_BAR_GAP: i32 = 10;
pub const HEALTH_BAR_HEIGHT: i32 = 10;
pub const HUD_MARGIN: i32 = 10;
/// Vertical position of the centred banners (loss message, menu title).
pub const BANNER_Y: i32 = 350;
