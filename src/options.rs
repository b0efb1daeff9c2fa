//! Knobs for [`pack_with()`] and [`unpack_with()`]
//!
//! Both option types are built like the codec's own `FileOptions`:
//! start from `default()` and chain setters.
//!
//! ```no_run
//! # use zipp::*;
//! let options = PackOptions::default()
//!     .compression_level(Some(9))
//!     .last_modified_time(false);
//! pack_with("assets", "assets.zip", &options)?;
//! # Ok::<(), ZipError>(())
//! ```
//!
//! [`pack_with()`]: ../write/fn.pack_with.html
//! [`unpack_with()`]: ../read/fn.unpack_with.html

/// How to build an archive
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PackOptions {
    pub(crate) compression_level: Option<i32>,
    pub(crate) last_modified_time: bool,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            compression_level: None,
            last_modified_time: true,
        }
    }
}

impl PackOptions {
    /// Sets the DEFLATE level (0 through 9) for file entries.
    /// `None` uses the codec's default.
    ///
    /// Directories are always stored, so this never applies to them.
    #[must_use]
    pub fn compression_level(mut self, level: Option<i32>) -> Self {
        self.compression_level = level;
        self
    }

    /// Whether to record each entry's modification time.
    ///
    /// When off, every entry is stamped 1980-01-01 00:00:00,
    /// the earliest MS-DOS time, and packing identical trees
    /// produces byte-identical archives.
    #[must_use]
    pub fn last_modified_time(mut self, record: bool) -> Self {
        self.last_modified_time = record;
        self
    }
}

/// How to extract an archive
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UnpackOptions {
    pub(crate) permissions: bool,
}

impl Default for UnpackOptions {
    fn default() -> Self {
        Self { permissions: true }
    }
}

impl UnpackOptions {
    /// Whether to apply Unix permission bits recorded in the archive
    /// to the files and directories it creates.
    /// Has no effect on other hosts.
    #[must_use]
    pub fn permissions(mut self, apply: bool) -> Self {
        self.permissions = apply;
        self
    }
}
