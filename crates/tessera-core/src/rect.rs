use std::fmt;

/// An axis-aligned rectangle describing a widget's position and size.
///
/// The y axis grows downward, so `top` is the smaller y value and
/// `bottom` the larger. Only `x`, `y`, `w` and `h` are stored; every
/// anchor point is recomputed from them on each call, so reassigning a
/// field is visible to the next accessor.
///
/// Negative sizes are accepted as-is and simply yield inverted anchors
/// (`right() < left()`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rectangle {
    /// Creates a rectangle from a `(x, y)` position and a `(w, h)` size.
    pub fn new(position: (f64, f64), size: (f64, f64)) -> Self {
        let (x, y) = position;
        let (w, h) = size;
        Self { x, y, w, h }
    }

    pub fn width(&self) -> f64 {
        self.w
    }

    pub fn height(&self) -> f64 {
        self.h
    }

    /// The `(w, h)` pair.
    pub fn size(&self) -> (f64, f64) {
        (self.w, self.h)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Horizontal center of the rectangle.
    pub fn centerx(&self) -> f64 {
        self.x + self.w / 2.0
    }

    /// Vertical center of the rectangle.
    pub fn centery(&self) -> f64 {
        self.y + self.h / 2.0
    }

    pub fn center(&self) -> (f64, f64) {
        (self.centerx(), self.centery())
    }

    // ── Corners ──────────────────────────────────────────────────

    pub fn topleft(&self) -> (f64, f64) {
        (self.left(), self.top())
    }

    pub fn topright(&self) -> (f64, f64) {
        (self.right(), self.top())
    }

    pub fn bottomleft(&self) -> (f64, f64) {
        (self.left(), self.bottom())
    }

    pub fn bottomright(&self) -> (f64, f64) {
        (self.right(), self.bottom())
    }

    // ── Edge midpoints ───────────────────────────────────────────

    pub fn midtop(&self) -> (f64, f64) {
        (self.centerx(), self.top())
    }

    pub fn midbottom(&self) -> (f64, f64) {
        (self.centerx(), self.bottom())
    }

    pub fn midleft(&self) -> (f64, f64) {
        (self.left(), self.centery())
    }

    pub fn midright(&self) -> (f64, f64) {
        (self.right(), self.centery())
    }
}

impl From<((f64, f64), (f64, f64))> for Rectangle {
    fn from((position, size): ((f64, f64), (f64, f64))) -> Self {
        Self::new(position, size)
    }
}

/// Renders as `x, y, w, h` for log lines.
impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.x, self.y, self.w, self.h)
    }
}
