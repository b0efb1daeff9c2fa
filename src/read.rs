//! Unpacking a ZIP archive into a directory tree.
//!
//! Entries are extracted in the order the archive stores them.
//! Archives we write list each directory before its contents,
//! but plenty of others don't bother with directory entries at all,
//! so a file's parent directories are created as needed.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use log::*;
use zip::read::ZipFile;
use zip::ZipArchive;

use crate::attributes::PERMISSION_BITS;
use crate::name::enclosed_path;
use crate::options::UnpackOptions;
use crate::result::*;

const OWNER_WRITE: u32 = 0o200;
const OWNER_RWX: u32 = 0o700;

/// Extracts `archive` into `target`, using the default [`UnpackOptions`].
///
/// ```no_run
/// zipp::unpack("assets.zip", "restored")?;
/// # Ok::<(), zipp::ZipError>(())
/// ```
pub fn unpack<A: AsRef<Path>, T: AsRef<Path>>(archive: A, target: T) -> ZipResult<()> {
    unpack_with(archive, target, &UnpackOptions::default())
}

/// Extracts `archive` into `target`, creating `target` if needed.
///
/// Existing files are overwritten, even read-only ones.
/// Recorded directory modes are applied once everything else is in place,
/// so read-only directories round-trip.
/// Every entry name is checked before anything is written for it;
/// one that would land outside `target` stops the extraction
/// with [`ZipError::UnsafePath`], leaving entries before it in place.
pub fn unpack_with<A: AsRef<Path>, T: AsRef<Path>>(
    archive: A,
    target: T,
    options: &UnpackOptions,
) -> ZipResult<()> {
    let archive_path = archive.as_ref();
    let target = target.as_ref();

    let mut archive = open(archive_path)?;
    info!(
        "Unpacking {} ({} entries) into {}",
        archive_path.display(),
        archive.len(),
        target.display()
    );
    fs::create_dir_all(target)?;

    // Directory modes wait until everything is extracted,
    // so a read-only directory can still be filled.
    let mut directory_modes = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let relative = enclosed_path(entry.name())?;
        let destination = target.join(relative.as_std_path());
        let mode = if options.permissions {
            entry.unix_mode().map(|m| m & PERMISSION_BITS)
        } else {
            None
        };

        if is_dir(&entry) {
            debug!("Creating directory {relative}");
            fs::create_dir_all(&destination)?;
            if let Some(mode) = mode {
                // It may be left read-only by an earlier extraction.
                make_writable(&destination, OWNER_RWX)?;
                directory_modes.push((destination, mode));
            }
        } else {
            debug!("Extracting {relative} ({} bytes)", entry.size());
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent)?;
            }
            if destination.is_file() {
                make_writable(&destination, OWNER_WRITE)?;
            }
            let mut sink = BufWriter::new(create_file(&destination)?);
            // The codec checks the entry's CRC as we read it out.
            io::copy(&mut entry, &mut sink)?;
            sink.flush()?;
            drop(sink);
            if let Some(mode) = mode {
                set_mode(&destination, mode)?;
            }
        }
    }

    // Deepest first, so locking a parent can't get in the way.
    directory_modes.sort_by_key(|(path, _)| std::cmp::Reverse(path.components().count()));
    for (path, mode) in &directory_modes {
        set_mode(path, *mode)?;
    }

    info!("Unpacked {} entries", archive.len());
    Ok(())
}

fn open(path: &Path) -> ZipResult<ZipArchive<BufReader<File>>> {
    let open_error = |source: CodecError| ZipError::Open {
        path: path.to_owned(),
        source,
    };
    let file = File::open(path).map_err(|e| open_error(CodecError::Io(e)))?;
    ZipArchive::new(BufReader::new(file)).map_err(open_error)
}

/// Entries named `dir\` by some Windows tools are directories too.
fn is_dir(entry: &ZipFile) -> bool {
    entry.is_dir() || entry.name().ends_with('\\')
}

fn create_file(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// Sets the permission bits of `path` to exactly `mode`.
#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> io::Result<()> {
    Ok(())
}

/// Adds `bits` to the permissions of `path` if any are missing.
#[cfg(unix)]
fn make_writable(path: &Path, bits: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let current = fs::metadata(path)?.permissions().mode();
    if current & bits != bits {
        set_mode(path, (current | bits) & PERMISSION_BITS)?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn make_writable(path: &Path, _bits: u32) -> io::Result<()> {
    let mut permissions = fs::metadata(path)?.permissions();
    if permissions.readonly() {
        permissions.set_readonly(false);
        fs::set_permissions(path, permissions)?;
    }
    Ok(())
}
