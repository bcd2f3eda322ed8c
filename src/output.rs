use std::fmt::Write as _;
use std::path::PathBuf;

/// One path per line, in the given order.
pub fn format_paths(paths: &[PathBuf]) -> String {
    let mut out = String::new();
    for p in paths {
        let _ = writeln!(out, "{}", p.display());
    }
    out
}
