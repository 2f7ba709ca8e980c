use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("Failed to rename {source_path:?} to {destination:?}")]
    Rename {
        source_path: PathBuf,
        destination: PathBuf,
        #[source]
        io: io::Error,
    },
}
