// Error type for the icon generator.
// Every variant states *where* things went wrong.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The preferred scalable font could not be used (recovered by the bitmap font).
    #[error("Font load error ({path}): {reason}")]
    FontLoad { path: PathBuf, reason: String },

    /// A canvas could not be allocated for this size.
    #[error("Invalid icon size: {0}")]
    InvalidSize(u32),

    /// Encoding or writing a PNG failed.
    #[error("Save error ({path}): {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_step() {
        let e = Error::FontLoad { path: PathBuf::from("/x/font.ttf"), reason: "missing".into() };
        assert_eq!(e.to_string(), "Font load error (/x/font.ttf): missing");
        assert_eq!(Error::InvalidSize(0).to_string(), "Invalid icon size: 0");
    }
}
