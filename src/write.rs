//! Packing a directory tree into a ZIP archive.
//!
//! The source is walked depth-first with siblings sorted by name,
//! so a directory's entry always precedes everything inside it,
//! and the same tree always produces entries in the same order.

use std::fs::{self, File, Metadata};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::*;
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime as DosDateTime, ZipWriter};

use crate::attributes;
use crate::name::entry_name;
use crate::options::PackOptions;
use crate::result::*;

/// Files this big or bigger need Zip64 extensions.
const ZIP64_THRESHOLD: u64 = u32::MAX as u64;

/// Packs everything under `source` into a new archive at `target`,
/// using the default [`PackOptions`].
///
/// ```no_run
/// zipp::pack("assets", "assets.zip")?;
/// # Ok::<(), zipp::ZipError>(())
/// ```
pub fn pack<S: AsRef<Path>, T: AsRef<Path>>(source: S, target: T) -> ZipResult<()> {
    pack_with(source, target, &PackOptions::default())
}

/// Packs everything under `source` into a new archive at `target`.
///
/// `target` is created or truncated. Entry names are relative to `source`,
/// which itself isn't recorded. If packing fails partway through,
/// whatever was written to `target` stays there.
pub fn pack_with<S: AsRef<Path>, T: AsRef<Path>>(
    source: S,
    target: T,
    options: &PackOptions,
) -> ZipResult<()> {
    let source = source.as_ref();
    let target = target.as_ref();

    // Check before creating the archive so a typo doesn't leave an empty one behind.
    check_source(source)?;

    info!("Packing {} into {}", source.display(), target.display());
    let archive = File::create(target)?;
    let archive_path = fs::canonicalize(target)?;
    let mut writer = ZipWriter::new(BufWriter::new(archive));

    let mut entries = 0usize;
    for dir_entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
        let dir_entry = dir_entry?;
        let path = dir_entry.path();
        let relative = path.strip_prefix(source).map_err(|_| {
            ZipError::Hierarchy(format!(
                "{} isn't under {}",
                path.display(),
                source.display()
            ))
        })?;

        // Links are archived as whatever they point to, if that's a file.
        let metadata = if dir_entry.path_is_symlink() {
            match fs::metadata(path) {
                Ok(m) if m.is_file() => m,
                Ok(_) => {
                    warn!("Skipping {}: links to a non-file", path.display());
                    continue;
                }
                Err(e) => {
                    warn!("Skipping {}: dangling link ({e})", path.display());
                    continue;
                }
            }
        } else {
            dir_entry.metadata()?
        };

        let name = entry_name(relative)?;
        let stamp = timestamp(&metadata, options);

        if metadata.is_dir() {
            debug!("Adding directory {name}");
            let mut entry_options = FileOptions::default()
                .compression_method(CompressionMethod::Stored)
                .last_modified_time(stamp);
            if let Some(mode) = attributes::unix_mode(&metadata) {
                entry_options = entry_options.unix_permissions(mode);
            }
            writer.add_directory(name, entry_options)?;
        } else if metadata.is_file() {
            if is_archive(path, &archive_path) {
                debug!("Skipping {}: it's the archive being written", path.display());
                continue;
            }
            debug!("Adding file {name} ({} bytes)", metadata.len());
            let mut entry_options = FileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .compression_level(options.compression_level)
                .last_modified_time(stamp)
                .large_file(metadata.len() >= ZIP64_THRESHOLD);
            if let Some(mode) = attributes::unix_mode(&metadata) {
                entry_options = entry_options.unix_permissions(mode);
            }
            writer.start_file(name, entry_options)?;
            let mut file = File::open(path)?;
            io::copy(&mut file, &mut writer)?;
        } else {
            warn!("Skipping {}: not a file or directory", path.display());
            continue;
        }
        entries += 1;
    }

    let mut archive = writer.finish()?;
    archive.flush()?;
    info!("Wrote {entries} entries to {}", target.display());
    Ok(())
}

fn check_source(source: &Path) -> ZipResult<()> {
    let metadata = fs::metadata(source).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ZipError::NotFound(source.to_owned()),
        _ => ZipError::Io(e),
    })?;
    if !metadata.is_dir() {
        return Err(ZipError::NotADirectory(source.to_owned()));
    }
    Ok(())
}

fn timestamp(metadata: &Metadata, options: &PackOptions) -> DosDateTime {
    if !options.last_modified_time {
        return DosDateTime::default();
    }
    metadata
        .modified()
        .map(attributes::dos_timestamp)
        .unwrap_or_default()
}

/// Returns true if `path` is the archive we're writing,
/// which happens when it's placed inside the source tree.
fn is_archive(path: &Path, archive_path: &Path) -> bool {
    // Only canonicalize candidates with the right name.
    if path.file_name() != archive_path.file_name() {
        return false;
    }
    fs::canonicalize(path)
        .map(|p| p == archive_path)
        .unwrap_or(false)
}
