// Core types shared by the layout, the canvas and the renderer.

/// Straight (non-premultiplied) 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0 };

    /// Opaque color from a 0xRRGGBB literal.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
            a: 255,
        }
    }
}

/* ---------- Palette ---------- */

pub const BADGE_COLOR: Rgba = Rgba::hex(0x4a5568); // slate badge behind everything
pub const DOCUMENT_COLOR: Rgba = Rgba::hex(0xe2e8f0); // light "page"
pub const GLYPH_COLOR: Rgba = Rgba::hex(0x4a5568); // letter on the page
pub const ARROW_COLOR: Rgba = Rgba::hex(0x48bb78); // green download arrow

/* ---------- Shape descriptors (whole pixels, right/bottom inclusive) ---------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Extent between the edges, the way the layout measures it (right - left).
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_unpacks_channels() {
        assert_eq!(Rgba::hex(0x48bb78), Rgba { r: 0x48, g: 0xbb, b: 0x78, a: 255 });
    }

    #[test]
    fn bounds_are_inclusive() {
        let b = Bounds::new(2, 3, 5, 9);
        assert!(b.contains(5, 9));
        assert!(!b.contains(6, 9));
        assert_eq!((b.width(), b.height()), (3, 6));
    }
}
