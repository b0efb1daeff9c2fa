//! zipp packs a directory tree into a ZIP archive and unpacks it again:
//!
//! ```no_run
//! zipp::pack("assets", "assets.zip")?;
//! zipp::unpack("assets.zip", "restored")?;
//! // restored/ now mirrors assets/
//! # Ok::<(), zipp::ZipError>(())
//! ```
//!
//! Every file and directory under the source becomes one entry,
//! named by its path relative to the source with `/` separators
//! (whatever the host uses). Directories are stored as-is;
//! files are [DEFLATE](https://en.wikipedia.org/wiki/DEFLATE)d.
//! Unix permission bits and modification times ride along in each entry.
//!
//! The ZIP format itself is handled by the [Zip crate];
//! this crate is just the walk from a directory to entries and back.
//!
//! ZIP entry names are just strings, and nothing stops a malicious archive
//! from naming one `../../.bashrc`. [`unpack()`] refuses any entry
//! with an absolute path, a drive prefix, or a `..` component,
//! so nothing is ever written outside the target directory.
//!
//! Both directions can be tuned with [`PackOptions`] and [`UnpackOptions`]:
//!
//! ```no_run
//! # use zipp::*;
//! // Reproducible archives: identical trees give identical bytes.
//! pack_with("assets", "assets.zip", &PackOptions::default().last_modified_time(false))?;
//! // Ignore whatever permissions the archive recorded.
//! unpack_with("assets.zip", "restored", &UnpackOptions::default().permissions(false))?;
//! # Ok::<(), ZipError>(())
//! ```
//!
//! [Zip crate]: https://crates.io/crates/zip

pub mod options;
pub mod read;
pub mod result;
pub mod write;

pub use options::{PackOptions, UnpackOptions};
pub use read::{unpack, unpack_with};
pub use result::{ZipError, ZipResult};
pub use write::{pack, pack_with};

mod attributes;
mod name;
