// The icon renderer: one size in, one finished transparent image out.
// Paint order (back to front): badge circle, document, letter, arrow.

use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use crate::draw::Canvas;
use crate::error::Result;
use crate::font::GlyphFont;
use crate::layout::IconLayout;
use crate::types::{ARROW_COLOR, BADGE_COLOR, DOCUMENT_COLOR, GLYPH_COLOR};
use crate::{DEFAULT_FONT_PATH, GLYPH_TEXT};

/// Render the icon at `size` x `size` using the preferred system font.
pub fn render_icon(size: u32) -> Result<RgbaImage> {
    render_icon_with_font(size, Path::new(DEFAULT_FONT_PATH))
}

/// Render the icon, preferring the scalable font at `font_path`.
/// A missing or unusable font is not an error: the bitmap font stands in.
pub fn render_icon_with_font(size: u32, font_path: &Path) -> Result<RgbaImage> {
    let mut canvas = Canvas::new(size)?;
    let layout = IconLayout::for_size(size);
    debug!(?layout, "icon layout");

    canvas.fill_ellipse(layout.badge, BADGE_COLOR);
    canvas.fill_rounded_rect(layout.document, layout.document_radius, DOCUMENT_COLOR);

    let font = GlyphFont::load(font_path, layout.font_size, GLYPH_TEXT);
    let metrics = font.measure(GLYPH_TEXT);
    let origin = layout.glyph_origin(metrics.width());
    debug!(?metrics, x = origin.x, y = origin.y, fallback = font.is_fallback(), "glyph placement");
    font.draw(&mut canvas, origin, GLYPH_TEXT, GLYPH_COLOR);

    canvas.fill_rect(layout.arrow_stem, ARROW_COLOR);
    canvas.fill_polygon(&layout.arrow_head, ARROW_COLOR);

    Ok(canvas.into_image())
}
