//! Error types and the related `Result<T>`

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from the ZIP codec itself
pub use zip::result::ZipError as CodecError;

pub type ZipResult<T> = Result<T, ZipError>;

#[derive(Debug, Error)]
pub enum ZipError {
    /// The directory to pack doesn't exist.
    #[error("Source directory {} does not exist", .0.display())]
    NotFound(PathBuf),

    /// The path to pack exists, but isn't a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The archive couldn't be opened, or isn't a ZIP archive at all.
    #[error("Couldn't open archive {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    /// An error from underlying I/O
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Walking the source directory failed partway through.
    #[error("Couldn't walk source directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// The codec rejected an entry or option for reasons other than I/O.
    #[error("Zip codec error: {0}")]
    Codec(CodecError),

    /// A path in the source tree can't be stored as a UTF-8 entry name.
    #[error("Path {} isn't valid UTF-8", .0.display())]
    NonUtf8Path(PathBuf),

    /// An entry would land outside the target directory
    /// (absolute paths, drive prefixes, `..`).
    #[error("Entry {0} would be extracted outside the target directory")]
    UnsafePath(String),

    /// An entry or relative path that doesn't name anything sensible
    #[error("Strange file hierarchy: {0}")]
    Hierarchy(String),
}

impl From<CodecError> for ZipError {
    fn from(e: CodecError) -> Self {
        match e {
            CodecError::Io(io) => ZipError::Io(io),
            other => ZipError::Codec(other),
        }
    }
}
