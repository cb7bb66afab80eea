//! Procedurally drawn browser-extension icons.
//!
//! The logo is a slate badge circle, a light document carrying the letter
//! "M", and a green download arrow. Every shape is laid out on a 128px
//! design grid and scaled to the requested size, so the same code produces
//! the 16, 48 and 128 pixel variants.
//!
//! ```no_run
//! let img = extension_icons::render_icon(48)?;
//! assert_eq!(img.dimensions(), (48, 48));
//! # Ok::<(), extension_icons::Error>(())
//! ```

use std::path::{Path, PathBuf};

use tracing::info;

pub mod draw;
pub mod error;
pub mod font;
pub mod icon;
pub mod layout;
pub mod types;

pub use error::{Error, Result};
pub use icon::{render_icon, render_icon_with_font};

/// Sizes the driver writes, in order.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Preferred bold scalable font; the built-in bitmap font is used when it is missing.
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// The letter drawn on the document.
pub const GLYPH_TEXT: char = 'M';

pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}.png")
}

/// Render every size in [`ICON_SIZES`] and save it into `out_dir`.
/// Returns the written paths in the same order.
pub fn generate_icons(out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let img = render_icon(size)?;
        let path = out_dir.join(icon_file_name(size));
        img.save(&path).map_err(|source| Error::Save { path: path.clone(), source })?;
        info!(size, path = %path.display(), "wrote icon");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_size() {
        let names: Vec<String> = ICON_SIZES.iter().map(|&s| icon_file_name(s)).collect();
        assert_eq!(names, ["icon-16.png", "icon-48.png", "icon-128.png"]);
    }
}
