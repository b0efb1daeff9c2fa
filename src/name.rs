//! Mapping between filesystem paths and archive entry names.
//!
//! ZIP entry names always use `/`, whatever the host uses.
//! Going in, we join path components with `/`.
//! Coming out, we refuse any name that could resolve outside
//! the directory we're extracting into.

use std::path::Path;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use log::*;

use crate::result::*;

/// Turns a path relative to the source root into an entry name.
pub fn entry_name(relative: &Path) -> ZipResult<String> {
    let relative =
        Utf8Path::from_path(relative).ok_or_else(|| ZipError::NonUtf8Path(relative.to_owned()))?;

    let mut name = String::with_capacity(relative.as_str().len());
    for component in relative.components() {
        match component {
            Utf8Component::Normal(part) => {
                if !name.is_empty() {
                    name.push('/');
                }
                name.push_str(part);
            }
            Utf8Component::CurDir => {
                trace!("Dropping current dir (.) from {relative}");
            }
            other => {
                return Err(ZipError::Hierarchy(format!(
                    "{} found in relative path {relative}",
                    other.as_str()
                )));
            }
        }
    }

    if name.is_empty() {
        return Err(ZipError::Hierarchy(format!(
            "Relative path {relative:?} names nothing"
        )));
    }
    Ok(name)
}

/// Resolves an entry name from an archive into a path
/// relative to the extraction target.
///
/// Anything that could climb out of the target (a root, a drive prefix,
/// or any `..` at all) is an [`UnsafePath`](ZipError::UnsafePath).
/// Some Windows tools write `\` separators, so those count as separators too.
pub fn enclosed_path(name: &str) -> ZipResult<Utf8PathBuf> {
    if name.contains('\0') {
        return Err(ZipError::UnsafePath(name.to_owned()));
    }
    let normalized = name.replace('\\', "/");

    let mut enclosed = Utf8PathBuf::new();
    for component in Utf8Path::new(&normalized).components() {
        match component {
            Utf8Component::Normal(part) => enclosed.push(part),
            Utf8Component::CurDir => {
                trace!("Current dir (.) found in entry {name}");
            }
            // We could resolve a/../b to b, but nobody legitimate writes that.
            Utf8Component::Prefix(_) | Utf8Component::RootDir | Utf8Component::ParentDir => {
                return Err(ZipError::UnsafePath(name.to_owned()));
            }
        }
    }

    if enclosed.as_str().is_empty() {
        return Err(ZipError::Hierarchy(format!("Entry {name:?} names nothing")));
    }
    Ok(enclosed)
}
