// Glyph rendering for the letter on the document.
// Two sources:
// 1) A scalable TrueType font (outlines filled through the canvas).
// 2) A built-in fixed-size 5x7 bitmap font, used whenever (1) is unusable.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use ttf_parser::{Face, GlyphId, OutlineBuilder};

use crate::draw::Canvas;
use crate::error::{Error, Result};
use crate::types::{Point, Rgba};

/// Ink box of a glyph relative to its drawing origin (right/bottom exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextMetrics {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextMetrics {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// The font the renderer ended up with.
pub enum GlyphFont {
    Outline(OutlineFont),
    Bitmap,
}

impl GlyphFont {
    /// Load the scalable font at `px_size` pixels per em, or fall back to the bitmap font.
    /// `probe` must be drawable by the scalable font for it to be kept.
    pub fn load(path: &Path, px_size: u32, probe: char) -> Self {
        let loaded = OutlineFont::load(path, px_size).and_then(|font| {
            if font.has_glyph(probe) {
                Ok(font)
            } else {
                Err(Error::FontLoad { path: path.to_path_buf(), reason: format!("no glyph for {probe:?}") })
            }
        });
        match loaded {
            Ok(font) => {
                debug!(path = %font.source().display(), px_size, "loaded outline font");
                GlyphFont::Outline(font)
            }
            Err(e) => {
                warn!(error = %e, "falling back to built-in bitmap font");
                GlyphFont::Bitmap
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, GlyphFont::Bitmap)
    }

    pub fn measure(&self, ch: char) -> TextMetrics {
        match self {
            GlyphFont::Outline(font) => font.measure(ch),
            GlyphFont::Bitmap => measure_5x7(ch),
        }
    }

    /// Draw `ch` with its origin (left end of the top line) at `origin`.
    pub fn draw(&self, canvas: &mut Canvas, origin: Point, ch: char, color: Rgba) {
        match self {
            GlyphFont::Outline(font) => font.draw(canvas, origin, ch, color),
            GlyphFont::Bitmap => draw_char_5x7(canvas, origin.x, origin.y, ch, color),
        }
    }
}

/* ---------- Scalable TrueType font ---------- */

pub struct OutlineFont {
    data: Vec<u8>,
    px_size: u32,
    source: PathBuf,
}

impl OutlineFont {
    pub fn load(path: &Path, px_size: u32) -> Result<Self> {
        let data = fs::read(path)
            .map_err(|e| Error::FontLoad { path: path.to_path_buf(), reason: e.to_string() })?;
        Self::from_bytes(data, px_size, path)
    }

    /// Validate in-memory font data; `source` only labels errors and logs.
    pub fn from_bytes(data: Vec<u8>, px_size: u32, source: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        if px_size == 0 {
            return Err(Error::FontLoad { path: source, reason: "font size rounds to 0px".into() });
        }
        if let Err(e) = Face::parse(&data, 0) {
            return Err(Error::FontLoad { path: source, reason: e.to_string() });
        }
        Ok(Self { data, px_size, source })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    // Already validated in from_bytes, so this only fails on a corrupted buffer.
    fn face(&self) -> Option<Face<'_>> {
        Face::parse(&self.data, 0).ok()
    }

    fn scale(&self, face: &Face<'_>) -> f32 {
        self.px_size as f32 / face.units_per_em() as f32
    }

    pub fn has_glyph(&self, ch: char) -> bool {
        self.face().and_then(|f| f.glyph_index(ch)).is_some()
    }

    pub fn measure(&self, ch: char) -> TextMetrics {
        let Some(face) = self.face() else { return TextMetrics::default() };
        let scale = self.scale(&face);
        let ascent = (face.ascender() as f32 * scale).ceil() as i32;
        let Some(bbox) = face.glyph_index(ch).and_then(|id| face.glyph_bounding_box(id)) else {
            return TextMetrics::default();
        };
        TextMetrics {
            left: (bbox.x_min as f32 * scale).floor() as i32,
            top: ascent - (bbox.y_max as f32 * scale).ceil() as i32,
            right: (bbox.x_max as f32 * scale).ceil() as i32,
            bottom: ascent - (bbox.y_min as f32 * scale).floor() as i32,
        }
    }

    pub fn draw(&self, canvas: &mut Canvas, origin: Point, ch: char, color: Rgba) {
        let Some(face) = self.face() else { return };
        let Some(id) = face.glyph_index(ch) else { return };
        let scale = self.scale(&face);
        let baseline = origin.y as f32 + (face.ascender() as f32 * scale).ceil();
        if let Some(path) = build_glyph_path(&face, id, origin.x as f32, baseline, scale) {
            canvas.fill_path(&path, color);
        }
    }
}

fn build_glyph_path(face: &Face<'_>, id: GlyphId, x: f32, y: f32, scale: f32) -> Option<tiny_skia::Path> {
    let mut builder = GlyphPathBuilder { pb: tiny_skia::PathBuilder::new(), x, y, scale };
    face.outline_glyph(id, &mut builder)?;
    builder.pb.finish()
}

/// Collects a glyph outline in screen space (font units are y-up).
struct GlyphPathBuilder {
    pb: tiny_skia::PathBuilder,
    x: f32,
    y: f32,
    scale: f32,
}

impl GlyphPathBuilder {
    fn tx(&self, gx: f32) -> f32 {
        self.x + gx * self.scale
    }

    fn ty(&self, gy: f32) -> f32 {
        self.y - gy * self.scale
    }
}

impl OutlineBuilder for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = (self.tx(x), self.ty(y));
        self.pb.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = (self.tx(x), self.ty(y));
        self.pb.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1, x, y) = (self.tx(x1), self.ty(y1), self.tx(x), self.ty(y));
        self.pb.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = (self.tx(x1), self.ty(y1));
        let (x2, y2) = (self.tx(x2), self.ty(y2));
        let (x, y) = (self.tx(x), self.ty(y));
        self.pb.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.pb.close();
    }
}

/* ---------- 5x7 bitmap font (digits, A-Z, a little punctuation) ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),

        _ => None,
    }
}

/// Tight box around the lit cells of a bitmap glyph.
fn measure_5x7(ch: char) -> TextMetrics {
    let Some(rows) = glyph5x7(ch) else { return TextMetrics::default() };
    let lit: Vec<usize> = (0..7).filter(|&ry| rows[ry] != 0).collect();
    let (Some(&first), Some(&last)) = (lit.first(), lit.last()) else {
        return TextMetrics::default();
    };
    let cols = rows.iter().fold(0u8, |acc, r| acc | r);
    let left = (0..5).find(|rx| cols & (1 << (4 - rx)) != 0).unwrap_or(0);
    let right = (0..5).rev().find(|rx| cols & (1 << (4 - rx)) != 0).unwrap_or(0);
    TextMetrics { left, top: first as i32, right: right + 1, bottom: last as i32 + 1 }
}

fn draw_char_5x7(canvas: &mut Canvas, x: i32, y: i32, ch: char, color: Rgba) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    canvas.put_pixel(x + rx, y + ry as i32, color);
                }
            }
        }
    }
}
