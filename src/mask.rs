//! Per-pixel opacity masks and the collision oracle.
//!
//! A `Mask` is built once per sprite and only read afterwards.  Collision is
//! pixel-accurate: two entities touch iff at least one opaque pixel of each
//! lands on the same screen position.

/// Alpha at or above this value counts as opaque.
pub const ALPHA_THRESHOLD: u8 = 127;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    /// Row-major, one entry per pixel.
    bits: Vec<bool>,
}

impl Mask {
    /// Build a mask by evaluating `opaque(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut opaque: impl FnMut(u32, u32) -> bool) -> Self {
        let mut bits = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                bits.push(opaque(x, y));
            }
        }
        Mask { width, height, bits }
    }

    /// Build a mask from tightly packed RGBA8 pixels.  Pixels missing from a
    /// short buffer are transparent.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Self {
        let len = (width * height) as usize;
        let mut bits: Vec<bool> = rgba
            .chunks_exact(4)
            .take(len)
            .map(|px| px[3] >= ALPHA_THRESHOLD)
            .collect();
        bits.resize(len, false);
        Mask { width, height, bits }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Opacity at `(x, y)`; anything outside the mask is transparent.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.bits[(y as u32 * self.width + x as u32) as usize]
    }

    /// Number of opaque pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// First pixel (in `self` coordinates) where `other`, placed at `offset`
    /// relative to `self`, overlaps.  Disjoint placements return `None`.
    pub fn overlap(&self, other: &Mask, offset: (i32, i32)) -> Option<(i32, i32)> {
        let (dx, dy) = offset;

        // Intersection of the two rectangles, in self coordinates.
        let x0 = dx.max(0);
        let y0 = dy.max(0);
        let x1 = (self.width as i32).min(dx + other.width as i32);
        let y1 = (self.height as i32).min(dy + other.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x, y) && other.get(x - dx, y - dy) {
                    return Some((x, y));
                }
            }
        }
        None
    }
}

/// Anything that occupies the screen through a mask.
pub trait Masked {
    /// Top-left anchor in screen units.
    fn position(&self) -> (i32, i32);
    fn mask(&self) -> &Mask;
}

/// True iff the opaque pixels of `a` and `b` overlap at their current positions.
///
/// The offset is `b - a`; swapping the arguments negates it.
pub fn collide(a: &impl Masked, b: &impl Masked) -> bool {
    let (ax, ay) = a.position();
    let (bx, by) = b.position();
    a.mask().overlap(b.mask(), (bx - ax, by - ay)).is_some()
}
