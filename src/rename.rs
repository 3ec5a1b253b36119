//! Screenshot housekeeping: shorten exported names and collect the files
//! in a canonical images directory.
//!
//! Dashboard exports arrive as `Screenshot 2023-11-05 at 11.11.28.png`;
//! only the trailing characters distinguish them, so the last 10 become
//! the new name.
use crate::error::CalibError;
use log::info;
use std::path::{Path, PathBuf};

const NAME_MARKER: &str = "Screenshot";
const KEPT_SUFFIX_CHARS: usize = 10;

/// Move every file in `src_dir` whose name contains `Screenshot` into
/// `images_dir` (created if missing), renamed to the last 10 characters
/// of its original name. Returns the new paths in the order processed.
pub fn shorten_screenshot_names(
    src_dir: &Path,
    images_dir: &Path,
) -> Result<Vec<PathBuf>, CalibError> {
    std::fs::create_dir_all(images_dir)?;
    let mut moved = Vec::new();
    for entry in std::fs::read_dir(src_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.contains(NAME_MARKER) {
            continue;
        }
        let short: String = tail_chars(&name, KEPT_SUFFIX_CHARS);
        let new_path = images_dir.join(&short);
        std::fs::rename(entry.path(), &new_path)?;
        moved.push(new_path);
    }
    info!("{} screenshots renamed into {}", moved.len(), images_dir.display());
    Ok(moved)
}

fn tail_chars(s: &str, n: usize) -> String {
    let count = s.chars().count();
    s.chars().skip(count.saturating_sub(n)).collect()
}
