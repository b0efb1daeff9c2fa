#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Result;
use walkdir::WalkDir;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Writes `contents` to `root/relative`, creating parents as needed.
pub fn write_file(root: &Path, relative: &str, contents: &[u8]) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

/// The two-file tree from the README:
/// `a.txt` says hello, `sub/b.txt` says world.
pub fn hello_world(root: &Path) -> Result<()> {
    write_file(root, "a.txt", b"hello")?;
    write_file(root, "sub/b.txt", b"world")?;
    Ok(())
}

/// Maps every path under `root` (with `/` separators) to its contents,
/// or `None` for directories.
pub fn snapshot(root: &Path) -> Result<BTreeMap<String, Option<Vec<u8>>>> {
    let mut tree = BTreeMap::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(root)?
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        let contents = if entry.file_type().is_dir() {
            None
        } else {
            Some(fs::read(entry.path())?)
        };
        tree.insert(relative, contents);
    }
    Ok(tree)
}

/// Lists an archive's entry names in stored order.
pub fn entry_names(archive: &Path) -> Result<Vec<String>> {
    let mut zip = zip::ZipArchive::new(fs::File::open(archive)?)?;
    let mut names = Vec::with_capacity(zip.len());
    for i in 0..zip.len() {
        names.push(zip.by_index(i)?.name().to_owned());
    }
    Ok(names)
}

/// Deterministic, poorly-compressible bytes.
pub fn noise(len: usize) -> Vec<u8> {
    let mut state: u32 = 0x2545_f491;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}
