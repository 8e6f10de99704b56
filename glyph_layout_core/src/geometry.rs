//! Pixel-space rectangles, points and sizes used by layout queries.

/// Integer pixel rectangle: upper-left inclusive, lower-right exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle at `(x, y)` with the given size.
    pub fn from_origin(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    /// True when the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    /// Intersection with `clip`. Disjoint rectangles collapse to an empty one.
    #[must_use]
    pub fn clipped(&self, clip: &Self) -> Self {
        let x0 = self.x0.max(clip.x0);
        let y0 = self.y0.max(clip.y0);
        let x1 = self.x1.min(clip.x1).max(x0);
        let y1 = self.y1.min(clip.y1).max(y0);
        Self { x0, y0, x1, y1 }
    }
}

/// Pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pixel extent of laid-out text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimension {
    pub width: f32,
    pub height: f32,
}

impl Dimension {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whole-pixel size, rounding anything past 0.1 of a pixel up.
    pub fn to_pixels(self) -> (u32, u32) {
        (
            (self.width + 0.9).max(0.0) as u32,
            (self.height + 0.9).max(0.0) as u32,
        )
    }
}

#[cfg(test)]
mod tests;
