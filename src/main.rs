// Writes icon-16.png, icon-48.png and icon-128.png next to the generator
// (the crate's icons/ directory) and prints one line per file.

use std::fs;
use std::path::Path;

use extension_icons::{generate_icons, Error};

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let out_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("icons");
    fs::create_dir_all(&out_dir)?;

    for path in generate_icons(&out_dir)? {
        println!("Created {}", path.display());
    }

    Ok(())
}
