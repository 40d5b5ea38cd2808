//! Sprite catalogue and mask provider.
//!
//! Every sprite the game can draw is known up front (`SpriteId::ALL`), so an
//! `Assets` value is complete by construction and lookups cannot fail.  It is
//! built once in `main` and lent to the session and the menu.

use std::path::Path;
use std::rc::Rc;

use crate::error::AssetError;
use crate::frontend::Rgb;
use crate::mask::Mask;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    PlayerShip,
    RedShip,
    GreenShip,
    BlueShip,
    YellowLaser,
    RedLaser,
    GreenLaser,
    BlueLaser,
}

impl SpriteId {
    pub const ALL: [SpriteId; 8] = [
        SpriteId::PlayerShip,
        SpriteId::RedShip,
        SpriteId::GreenShip,
        SpriteId::BlueShip,
        SpriteId::YellowLaser,
        SpriteId::RedLaser,
        SpriteId::GreenLaser,
        SpriteId::BlueLaser,
    ];

    /// File name inside an asset directory.
    pub fn file_name(self) -> &'static str {
        match self {
            SpriteId::PlayerShip => "pixel_ship_yellow.png",
            SpriteId::RedShip => "pixel_ship_red_small.png",
            SpriteId::GreenShip => "pixel_ship_green_small.png",
            SpriteId::BlueShip => "pixel_ship_blue_small.png",
            SpriteId::YellowLaser => "pixel_laser_yellow.png",
            SpriteId::RedLaser => "pixel_laser_red.png",
            SpriteId::GreenLaser => "pixel_laser_green.png",
            SpriteId::BlueLaser => "pixel_laser_blue.png",
        }
    }

    /// Flat colour used by renderers that cannot show the real pixels.
    pub fn tint(self) -> Rgb {
        match self {
            SpriteId::PlayerShip | SpriteId::YellowLaser => Rgb::YELLOW,
            SpriteId::RedShip | SpriteId::RedLaser => Rgb::RED,
            SpriteId::GreenShip | SpriteId::GreenLaser => Rgb::GREEN,
            SpriteId::BlueShip | SpriteId::BlueLaser => Rgb::BLUE,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug)]
pub struct Sprite {
    pub id: SpriteId,
    pub mask: Mask,
    pub tint: Rgb,
}

impl Sprite {
    pub fn width(&self) -> i32 {
        self.mask.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.mask.height() as i32
    }
}

#[derive(Debug)]
pub struct Assets {
    /// Indexed by `SpriteId as usize`.
    sprites: Vec<Rc<Sprite>>,
}

impl Assets {
    /// Procedurally drawn sprites, sized like the classic pixel-ship artwork.
    pub fn builtin() -> Self {
        let sprites = SpriteId::ALL
            .iter()
            .map(|&id| {
                Rc::new(Sprite {
                    id,
                    mask: builtin_mask(id),
                    tint: id.tint(),
                })
            })
            .collect();
        Assets { sprites }
    }

    /// Load every sprite from PNG files in `dir`.  Any missing, unreadable or
    /// fully transparent file aborts the load.
    pub fn load_dir(dir: &Path) -> Result<Self, AssetError> {
        let mut sprites = Vec::with_capacity(SpriteId::ALL.len());
        for id in SpriteId::ALL {
            let path = dir.join(id.file_name());
            if !path.is_file() {
                return Err(AssetError::Missing { id, path });
            }
            let img = image::open(&path)
                .map_err(|source| AssetError::Decode {
                    path: path.clone(),
                    source,
                })?
                .to_rgba8();
            let mask = Mask::from_rgba(img.width(), img.height(), img.as_raw());
            if mask.count() == 0 {
                return Err(AssetError::Empty(id));
            }
            log::debug!(
                "loaded {:?} from {} ({}x{})",
                id,
                path.display(),
                mask.width(),
                mask.height()
            );
            sprites.push(Rc::new(Sprite {
                id,
                mask,
                tint: id.tint(),
            }));
        }
        Ok(Assets { sprites })
    }

    pub fn get(&self, id: SpriteId) -> Rc<Sprite> {
        Rc::clone(&self.sprites[id.index()])
    }
}

// ── Built-in shapes ──────────────────────────────────────────────────────────

const PLAYER_W: u32 = 100;
const PLAYER_H: u32 = 90;
const ENEMY_W: u32 = 50;
const ENEMY_H: u32 = 40;
const LASER_W: u32 = 100;
const LASER_H: u32 = 90;

fn builtin_mask(id: SpriteId) -> Mask {
    match id {
        // Arrowhead hull with a notch cut out of the tail.
        SpriteId::PlayerShip => Mask::from_fn(PLAYER_W, PLAYER_H, |x, y| {
            let dx = (x as i32 - 50).abs();
            let hull = dx * 80 <= (y as i32 + 8) * 50 && y < 80;
            let notch = y >= 64 && dx < 12;
            hull && !notch
        }),
        // Downward wedge.
        SpriteId::RedShip => Mask::from_fn(ENEMY_W, ENEMY_H, |x, y| {
            let dx = (x as i32 - 25).abs();
            dx * 40 <= (40 - y as i32) * 25
        }),
        // Diamond.
        SpriteId::GreenShip => Mask::from_fn(ENEMY_W, ENEMY_H, |x, y| {
            let dx = (x as i32 - 25).abs();
            let dy = (y as i32 - 20).abs();
            dx * 20 + dy * 25 <= 500
        }),
        // Saucer.
        SpriteId::BlueShip => Mask::from_fn(ENEMY_W, ENEMY_H, |x, y| {
            let dx = x as i32 - 25;
            let dy = y as i32 - 20;
            dx * dx * 400 + dy * dy * 625 <= 250_000
        }),
        // Thin bolt in the middle of a mostly transparent frame.
        SpriteId::YellowLaser | SpriteId::RedLaser | SpriteId::GreenLaser | SpriteId::BlueLaser => {
            Mask::from_fn(LASER_W, LASER_H, |x, y| (44..56).contains(&x) && (30..60).contains(&y))
        }
    }
}
