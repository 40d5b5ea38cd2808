use pixel_raiders::mask::{collide, Mask, Masked};

fn square(size: u32) -> Mask {
    Mask::from_fn(size, size, |_, _| true)
}

/// Minimal masked entity for exercising `collide`.
struct Blob {
    pos: (i32, i32),
    mask: Mask,
}

impl Masked for Blob {
    fn position(&self) -> (i32, i32) {
        self.pos
    }

    fn mask(&self) -> &Mask {
        &self.mask
    }
}

// ── Mask construction ────────────────────────────────────────────────────────

#[test]
fn from_fn_sets_expected_pixels() {
    let m = Mask::from_fn(4, 3, |x, y| x == y);
    assert_eq!(m.width(), 4);
    assert_eq!(m.height(), 3);
    assert!(m.get(0, 0));
    assert!(m.get(2, 2));
    assert!(!m.get(1, 0));
    assert_eq!(m.count(), 3);
}

#[test]
fn get_outside_is_transparent() {
    let m = square(2);
    assert!(!m.get(-1, 0));
    assert!(!m.get(0, -1));
    assert!(!m.get(2, 0));
    assert!(!m.get(0, 2));
}

#[test]
fn from_rgba_uses_alpha_threshold() {
    // Three pixels: alpha 0, 126, 127.
    let rgba = [9, 9, 9, 0, 9, 9, 9, 126, 9, 9, 9, 127];
    let m = Mask::from_rgba(3, 1, &rgba);
    assert!(!m.get(0, 0));
    assert!(!m.get(1, 0));
    assert!(m.get(2, 0));
}

#[test]
fn short_rgba_buffer_pads_with_transparent_pixels() {
    // Three pixels wide, but only the first one is supplied.
    let m = Mask::from_rgba(3, 1, &[0, 0, 0, 255]);
    assert_eq!((m.width(), m.height()), (3, 1));
    assert_eq!(m.count(), 1);
    assert!(m.get(0, 0));
    assert!(!m.get(1, 0));
    assert!(!m.get(2, 0));

    assert_eq!(m.overlap(&square(3), (0, 0)), Some((0, 0)));
    assert_eq!(m.overlap(&square(3), (1, 0)), None);
}

// ── Overlap ──────────────────────────────────────────────────────────────────

#[test]
fn overlap_at_zero_offset() {
    assert_eq!(square(3).overlap(&square(3), (0, 0)), Some((0, 0)));
}

#[test]
fn overlap_with_negative_offset() {
    let a = square(4);
    let b = square(4);
    // b sits up and to the left; only a's top-left corner is shared.
    assert_eq!(a.overlap(&b, (-3, -3)), Some((0, 0)));
}

#[test]
fn disjoint_placements_do_not_overlap() {
    let a = square(4);
    let b = square(4);
    assert_eq!(a.overlap(&b, (4, 0)), None);
    assert_eq!(a.overlap(&b, (0, -4)), None);
    assert_eq!(a.overlap(&b, (-100, 50)), None);
}

#[test]
fn transparent_pixels_never_collide() {
    // Two rings whose bounding boxes overlap but whose opaque pixels don't.
    let ring = Mask::from_fn(10, 10, |x, y| x == 0 || y == 0 || x == 9 || y == 9);
    let dot = Mask::from_fn(2, 2, |_, _| true);
    assert_eq!(ring.overlap(&dot, (4, 4)), None);
    assert!(ring.overlap(&dot, (0, 4)).is_some());
}

// ── collide ──────────────────────────────────────────────────────────────────

#[test]
fn collide_uses_relative_positions() {
    let a = Blob { pos: (100, 100), mask: square(10) };
    let near = Blob { pos: (109, 95), mask: square(10) };
    let far = Blob { pos: (110, 100), mask: square(10) };
    assert!(collide(&a, &near));
    assert!(!collide(&a, &far));
}

#[test]
fn collide_is_symmetric_for_swapped_arguments() {
    // An L shape: swapping arguments must negate the offset, not reuse it.
    let l_shape = Mask::from_fn(4, 4, |x, y| x == 0 || y == 3);
    let a = Blob { pos: (0, 0), mask: l_shape };
    let b = Blob { pos: (3, -3), mask: square(1) };
    assert!(!collide(&a, &b));
    assert!(!collide(&b, &a));

    let c = Blob { pos: (3, 3), mask: square(1) };
    assert!(collide(&a, &c));
    assert!(collide(&c, &a));
}
