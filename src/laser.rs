//! Projectiles.
//!
//! A laser only ever moves vertically.  Its velocity is supplied by the
//! owning ship each frame: negative for the player, positive for enemies.

use std::rc::Rc;

use crate::assets::Sprite;
use crate::frontend::Renderer;
use crate::mask::{collide, Mask, Masked};

#[derive(Clone, Debug)]
pub struct Laser {
    pub x: i32,
    pub y: i32,
    pub sprite: Rc<Sprite>,
}

impl Laser {
    pub fn new(x: i32, y: i32, sprite: Rc<Sprite>) -> Self {
        Laser { x, y, sprite }
    }

    pub fn move_by(&mut self, vel: i32) {
        self.y += vel;
    }

    /// Outside the closed vertical range `[0, height]`.
    pub fn off_screen(&self, height: i32) -> bool {
        self.y < 0 || self.y > height
    }

    pub fn collides_with(&self, target: &impl Masked) -> bool {
        collide(self, target)
    }

    pub fn draw(&self, renderer: &mut impl Renderer) {
        renderer.blit(&self.sprite, (self.x, self.y));
    }
}

impl Masked for Laser {
    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn mask(&self) -> &Mask {
        &self.sprite.mask
    }
}
