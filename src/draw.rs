// Software drawing onto a transparent square canvas.
// Shapes provided here:
// 1) Filled ellipse (the badge).
// 2) Filled rounded rectangle (the document).
// 3) Filled rectangle / polygon (arrow stem and head).
// 4) Raw paths (glyph outlines) and single pixels (bitmap glyphs).

use crate::error::{Error, Result};
use crate::types::{Bounds, Point, Rgba};
use image::RgbaImage;
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, PremultipliedColorU8, Rect, Transform};

pub struct Canvas {
    pixmap: Pixmap, // premultiplied RGBA, starts fully transparent
}

/// Pixel-edge rect covering `b` with its right/bottom pixels included.
fn covering_rect(b: Bounds) -> Option<Rect> {
    Rect::from_ltrb(b.left as f32, b.top as f32, (b.right + 1) as f32, (b.bottom + 1) as f32)
}

fn paint_for(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

impl Canvas {
    /// Allocate a `size` x `size` canvas with every pixel transparent.
    pub fn new(size: u32) -> Result<Self> {
        let pixmap = Pixmap::new(size, size).ok_or(Error::InvalidSize(size))?;
        Ok(Self { pixmap })
    }

    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    /// Fill the ellipse inscribed in `bounds`.
    pub fn fill_ellipse(&mut self, bounds: Bounds, color: Rgba) {
        let Some(rect) = covering_rect(bounds) else { return };
        if let Some(path) = PathBuilder::from_oval(rect) {
            self.fill_path(&path, color);
        }
    }

    pub fn fill_rect(&mut self, bounds: Bounds, color: Rgba) {
        if let Some(rect) = covering_rect(bounds) {
            self.pixmap.fill_rect(rect, &paint_for(color), Transform::identity(), None);
        }
    }

    /// Fill `bounds` with corners rounded by `radius` (0 = square corners).
    pub fn fill_rounded_rect(&mut self, bounds: Bounds, radius: i32, color: Rgba) {
        if radius <= 0 {
            self.fill_rect(bounds, color);
            return;
        }
        let Some(rect) = covering_rect(bounds) else { return };
        let (x, y, w, h) = (rect.x(), rect.y(), rect.width(), rect.height());
        let r = (radius as f32).min(w.min(h) / 2.0);

        let mut pb = PathBuilder::new();
        pb.move_to(x + r, y);
        pb.line_to(x + w - r, y);
        pb.quad_to(x + w, y, x + w, y + r);
        pb.line_to(x + w, y + h - r);
        pb.quad_to(x + w, y + h, x + w - r, y + h);
        pb.line_to(x + r, y + h);
        pb.quad_to(x, y + h, x, y + h - r);
        pb.line_to(x, y + r);
        pb.quad_to(x, y, x + r, y);
        pb.close();

        if let Some(path) = pb.finish() {
            self.fill_path(&path, color);
        }
    }

    /// Fill a closed polygon through pixel centers.
    pub fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        let Some((first, rest)) = points.split_first() else { return };
        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32 + 0.5, first.y as f32 + 0.5);
        for p in rest {
            pb.line_to(p.x as f32 + 0.5, p.y as f32 + 0.5);
        }
        pb.close();
        if let Some(path) = pb.finish() {
            self.fill_path(&path, color);
        }
    }

    pub fn fill_path(&mut self, path: &Path, color: Rgba) {
        self.pixmap
            .fill_path(path, &paint_for(color), FillRule::Winding, Transform::identity(), None);
    }

    /// Overwrite one pixel; writes outside the canvas are ignored.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        let size = self.size() as i32;
        if x < 0 || y < 0 || x >= size || y >= size {
            return;
        }
        let a = color.a as u16;
        let premul = |c: u8| ((c as u16 * a + 127) / 255) as u8;
        let Some(px) = PremultipliedColorU8::from_rgba(premul(color.r), premul(color.g), premul(color.b), color.a)
        else {
            return;
        };
        let idx = y as usize * size as usize + x as usize;
        self.pixmap.pixels_mut()[idx] = px;
    }

    /// Straight-alpha color at (x,y), or None outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        let c = self.pixmap.pixel(u32::try_from(x).ok()?, u32::try_from(y).ok()?)?.demultiply();
        Some(Rgba { r: c.red(), g: c.green(), b: c.blue(), a: c.alpha() })
    }

    /// Hand the finished pixels over as a straight-alpha image.
    pub fn into_image(self) -> RgbaImage {
        let size = self.size();
        let mut raw = Vec::with_capacity(self.pixmap.pixels().len() * 4);
        for p in self.pixmap.pixels() {
            let c = p.demultiply();
            raw.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        // Length is exactly size * size * 4, so the buffer always fits.
        RgbaImage::from_raw(size, size, raw).unwrap_or_else(|| RgbaImage::new(size, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::hex(0xff0000);

    #[test]
    fn new_canvas_is_transparent() {
        let c = Canvas::new(8).unwrap();
        let img = c.into_image();
        assert_eq!(img.dimensions(), (8, 8));
        assert!(img.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(Canvas::new(0), Err(Error::InvalidSize(0))));
    }

    #[test]
    fn rect_covers_inclusive_bounds() {
        let mut c = Canvas::new(10).unwrap();
        c.fill_rect(Bounds::new(2, 2, 4, 4), RED);
        assert_eq!(c.pixel(2, 2), Some(RED));
        assert_eq!(c.pixel(4, 4), Some(RED));
        assert_eq!(c.pixel(5, 5), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn ellipse_fills_center_not_corners() {
        let mut c = Canvas::new(32).unwrap();
        c.fill_ellipse(Bounds::new(0, 0, 31, 31), RED);
        assert_eq!(c.pixel(16, 16), Some(RED));
        assert_eq!(c.pixel(0, 0).map(|p| p.a), Some(0));
    }

    #[test]
    fn rounded_rect_trims_corners() {
        let mut c = Canvas::new(32).unwrap();
        c.fill_rounded_rect(Bounds::new(4, 4, 27, 27), 8, RED);
        assert_eq!(c.pixel(16, 16), Some(RED));
        assert_eq!(c.pixel(16, 4), Some(RED));
        assert_eq!(c.pixel(4, 4).map(|p| p.a), Some(0));
    }

    #[test]
    fn polygon_fills_triangle_interior() {
        let mut c = Canvas::new(32).unwrap();
        c.fill_polygon(&[Point::new(2, 4), Point::new(30, 4), Point::new(16, 28)], RED);
        assert_eq!(c.pixel(16, 10), Some(RED));
        assert_eq!(c.pixel(2, 27).map(|p| p.a), Some(0));
    }

    #[test]
    fn put_pixel_clips_to_canvas() {
        let mut c = Canvas::new(4).unwrap();
        c.put_pixel(-1, 0, RED);
        c.put_pixel(4, 0, RED);
        c.put_pixel(1, 2, RED);
        assert_eq!(c.pixel(1, 2), Some(RED));
        assert_eq!(c.into_image().pixels().filter(|p| p[3] != 0).count(), 1);
    }
}
