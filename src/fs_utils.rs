use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::pattern::PatternEntry;

/// Resolve an entry against the current working directory.
pub fn resolve_entry(entry: &PatternEntry) -> Vec<PathBuf> {
    let base = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            warn!(error = %e, "cannot determine current directory; using relative paths");
            PathBuf::new()
        }
    };
    resolve_entry_in(entry, &base)
}

/// Return the regular files directly inside `base/entry.directory` whose name
/// fully matches the entry's pattern, in directory listing order.
pub fn resolve_entry_in(entry: &PatternEntry, base: &Path) -> Vec<PathBuf> {
    // `base.join("")` would be `base` itself; an empty directory never exists.
    let dir = base.join(&entry.directory);
    if entry.directory.as_os_str().is_empty() || !dir.exists() {
        warn!(directory = %entry.directory.display(), "directory does not exist, skipping");
        return Vec::new();
    }
    if !dir.is_dir() {
        warn!(directory = %entry.directory.display(), "not a directory, skipping");
        return Vec::new();
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);
    for item in walker {
        let item = match item {
            Ok(item) => item,
            Err(e) if e.depth() == 0 => {
                warn!(directory = %dir.display(), error = %e, "cannot list directory, skipping");
                break;
            }
            Err(e) => {
                debug!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        if !item.file_type().is_file() {
            continue;
        }
        let name = item.file_name().to_string_lossy();
        if entry.matches_name(&name) {
            files.push(normalize_path(&dir.join(item.file_name())));
        } else {
            debug!(file = %name, pattern = %entry.source, "name does not match");
        }
    }
    files
}

/// Resolve every entry and concatenate the results. Overlapping entries produce
/// duplicate paths.
pub fn resolve_entries(entries: &[PatternEntry]) -> Vec<PathBuf> {
    entries.iter().flat_map(resolve_entry).collect()
}

/// Drop repeated paths, keeping the first occurrence of each.
pub fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    paths.into_iter().filter(|p| seen.insert(p.clone())).collect()
}

/// Lexically normalise a path: `.` segments are removed and `..` cancels the
/// preceding normal segment. The filesystem is not consulted.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
