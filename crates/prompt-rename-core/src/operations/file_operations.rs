use crate::error::RenameError;
use std::fs;
use std::path::Path;

pub fn path_exists(path: &Path) -> bool {
    path.exists()
}

/// Plain `fs::rename`: the destination's parent must already exist, and an
/// existing destination is handled however the platform handles it.
pub fn rename_path(src: &Path, dst: &Path) -> Result<(), RenameError> {
    fs::rename(src, dst).map_err(|io| RenameError::Rename {
        source_path: src.to_path_buf(),
        destination: dst.to_path_buf(),
        io,
    })
}
