use std::fs;
use std::path::{Path, PathBuf};

use extension_icons::{generate_icons, icon_file_name, ICON_SIZES};
use sha2::{Digest, Sha256};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("extension-icons-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn digest(path: &Path) -> String {
    let bytes = fs::read(path).expect("read icon");
    hex::encode(Sha256::digest(&bytes))
}

#[test]
fn writes_exactly_three_sized_pngs() {
    let dir = scratch_dir("three");
    let written = generate_icons(&dir).expect("generate icons");

    let expected: Vec<PathBuf> = ICON_SIZES.iter().map(|&s| dir.join(icon_file_name(s))).collect();
    assert_eq!(written, expected);

    let mut on_disk: Vec<String> = fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    on_disk.sort();
    assert_eq!(on_disk, ["icon-128.png", "icon-16.png", "icon-48.png"]);

    for (size, path) in ICON_SIZES.iter().zip(&written) {
        let img = image::open(path).expect("decode icon");
        assert_eq!((img.width(), img.height()), (*size, *size));
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn rerun_overwrites_with_identical_bytes() {
    let dir = scratch_dir("rerun");
    let first: Vec<String> = generate_icons(&dir).unwrap().iter().map(|p| digest(p)).collect();
    let second: Vec<String> = generate_icons(&dir).unwrap().iter().map(|p| digest(p)).collect();
    assert_eq!(first, second);
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 3);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_output_dir_is_a_save_error() {
    let dir = scratch_dir("missing").join("not-created");
    match generate_icons(&dir) {
        Err(extension_icons::Error::Save { path, .. }) => assert_eq!(path, dir.join("icon-16.png")),
        other => panic!("expected a save error, got {other:?}"),
    }
}
