//! Wave director: decides when a new batch of enemies arrives and how big it is.

use rand::Rng;

use crate::assets::Assets;
use crate::constants::{SPAWN_X_MAX, SPAWN_X_MIN, SPAWN_Y_MAX, SPAWN_Y_MIN, WAVE_STEP};
use crate::ship::{EnemyColor, Ship};

/// Level progression for one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Waves {
    /// Never decreases.
    pub level: u32,
    /// Enemies in the most recent wave.
    pub wave_length: u32,
}

impl Waves {
    /// Start the next level and fill `enemies` with the new wave.
    ///
    /// Only called once the previous wave is gone.  Enemies start above the
    /// screen at staggered heights so they trickle in instead of arriving as
    /// a wall.  Returns the number of enemies spawned.
    pub fn spawn_next(
        &mut self,
        enemies: &mut Vec<Ship>,
        assets: &Assets,
        rng: &mut impl Rng,
    ) -> usize {
        debug_assert!(enemies.is_empty(), "wave spawned over live enemies");
        self.level += 1;
        self.wave_length += WAVE_STEP;

        enemies.extend((0..self.wave_length).map(|_| {
            let x = rng.gen_range(SPAWN_X_MIN..SPAWN_X_MAX);
            let y = rng.gen_range(SPAWN_Y_MIN..SPAWN_Y_MAX);
            let color = EnemyColor::ALL[rng.gen_range(0..EnemyColor::ALL.len())];
            Ship::enemy(x, y, color, assets)
        }));

        log::info!(
            "level {}: spawned wave of {} enemies",
            self.level,
            self.wave_length
        );
        self.wave_length as usize
    }
}
