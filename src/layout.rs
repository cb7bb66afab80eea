// Icon geometry for one target size.
// Every number here is a design constant at the 128px reference resolution,
// scaled by size/128 and truncated to whole pixels.

use crate::types::{Bounds, Point};

/// The resolution the design constants are drawn for.
pub const REFERENCE_SIZE: u32 = 128;

const BADGE_MARGIN: f64 = 4.0;

const DOC_LEFT: f64 = 32.0;
const DOC_TOP: f64 = 20.0;
const DOC_WIDTH: f64 = 48.0;
const DOC_HEIGHT: f64 = 56.0;
const DOC_RADIUS: f64 = 4.0;

const GLYPH_FONT_SIZE: f64 = 28.0;
const GLYPH_TOP_OFFSET: f64 = 10.0; // below the document's top edge

const ARROW_TOP: f64 = 70.0;
const ARROW_MIDDLE: f64 = 88.0;
const ARROW_BOTTOM: f64 = 108.0;
const ARROW_CENTER: f64 = 64.0;
const ARROW_HEAD_HALF_WIDTH: f64 = 28.0;
const ARROW_STEM_WIDTH: f64 = 16.0;
const ARROW_STEM_HEIGHT: f64 = 20.0;

/// All derived shape descriptors for one icon size.
#[derive(Debug, Clone, PartialEq)]
pub struct IconLayout {
    pub size: u32,
    pub scale: f64,
    pub badge: Bounds,
    pub document: Bounds,
    pub document_radius: i32,
    /// Pixels per em for the scalable font.
    pub font_size: u32,
    /// Gap between the document top and the glyph top.
    pub glyph_top_offset: i32,
    pub arrow_stem: Bounds,
    pub arrow_head: [Point; 3],
}

impl IconLayout {
    pub fn for_size(size: u32) -> Self {
        let scale = size as f64 / REFERENCE_SIZE as f64;
        // Truncate toward zero, like the original pixel grid.
        let px = |v: f64| (v * scale) as i32;
        let size_i = size as i32;

        let margin = px(BADGE_MARGIN);
        let badge = Bounds::new(margin, margin, size_i - margin, size_i - margin);

        let doc_left = px(DOC_LEFT);
        let doc_top = px(DOC_TOP);
        let document = Bounds::new(
            doc_left,
            doc_top,
            doc_left + px(DOC_WIDTH),
            doc_top + px(DOC_HEIGHT),
        );

        let top = px(ARROW_TOP);
        let middle = px(ARROW_MIDDLE);
        let bottom = px(ARROW_BOTTOM);
        let center = px(ARROW_CENTER);
        let head = px(ARROW_HEAD_HALF_WIDTH);
        let stem_half = px(ARROW_STEM_WIDTH) / 2;
        let arrow_stem = Bounds::new(center - stem_half, top, center + stem_half, top + px(ARROW_STEM_HEIGHT));
        let arrow_head = [
            Point::new(center - head, middle), // top left
            Point::new(center + head, middle), // top right
            Point::new(center, bottom),        // tip
        ];

        Self {
            size,
            scale,
            badge,
            document,
            document_radius: px(DOC_RADIUS),
            font_size: px(GLYPH_FONT_SIZE).max(0) as u32,
            glyph_top_offset: px(GLYPH_TOP_OFFSET),
            arrow_stem,
            arrow_head,
        }
    }

    /// Where to draw a glyph of `text_width` so it sits centered on the document.
    pub fn glyph_origin(&self, text_width: i32) -> Point {
        let doc = self.document;
        Point::new(
            doc.left + (doc.width() - text_width).div_euclid(2),
            doc.top + self.glyph_top_offset,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_size_uses_design_constants() {
        let l = IconLayout::for_size(128);
        assert_eq!(l.scale, 1.0);
        assert_eq!(l.badge, Bounds::new(4, 4, 124, 124));
        assert_eq!(l.document, Bounds::new(32, 20, 80, 76));
        assert_eq!(l.document_radius, 4);
        assert_eq!(l.font_size, 28);
        assert_eq!(l.arrow_stem, Bounds::new(56, 70, 72, 90));
        assert_eq!(l.arrow_head, [Point::new(36, 88), Point::new(92, 88), Point::new(64, 108)]);
    }

    #[test]
    fn small_size_truncates() {
        let l = IconLayout::for_size(16);
        assert_eq!(l.badge, Bounds::new(0, 0, 16, 16)); // 0.5 -> 0
        assert_eq!(l.document, Bounds::new(4, 2, 10, 9));
        assert_eq!(l.document_radius, 0);
        assert_eq!(l.font_size, 3);
        assert_eq!(l.glyph_top_offset, 1);
        assert_eq!(l.arrow_stem, Bounds::new(7, 8, 9, 10));
        assert_eq!(l.arrow_head, [Point::new(5, 11), Point::new(11, 11), Point::new(8, 13)]);
    }

    #[test]
    fn geometry_scales_linearly() {
        let small = IconLayout::for_size(16);
        let big = IconLayout::for_size(128);
        let ratio = 16.0 / 128.0;
        let pairs = [
            (small.document.width(), big.document.width()),
            (small.document.height(), big.document.height()),
            (small.arrow_stem.height(), big.arrow_stem.height()),
            (small.arrow_head[1].x - small.arrow_head[0].x, big.arrow_head[1].x - big.arrow_head[0].x),
            (small.arrow_head[2].y, big.arrow_head[2].y),
        ];
        for (s, b) in pairs {
            let expected = b as f64 * ratio;
            assert!((s as f64 - expected).abs() <= 1.0, "{s} vs {expected}");
        }
    }

    #[test]
    fn glyph_is_centered_on_document() {
        let l = IconLayout::for_size(128);
        // (48 - 5) / 2 = 21
        assert_eq!(l.glyph_origin(5), Point::new(53, 30));
        assert_eq!(l.glyph_origin(48), Point::new(32, 30));
    }
}
