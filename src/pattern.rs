//! Parsing of the pattern file into (directory, filename regex) entries.
//!
//! Each line is a path whose last segment is a regular expression matched against
//! whole file names inside the preceding directory. A line ending in `/` selects
//! every file in that directory.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use regex::Regex;
use regex_syntax::Parser;
use regex_syntax::hir::{Hir, Look};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::io_utils::{open_config, read_lines};

/// Pattern used when a line has no filename component.
pub const MATCH_ALL: &str = ".+";

#[derive(Debug, Clone)]
pub struct PatternEntry {
    pub directory: PathBuf,
    pub name_pattern: Regex,
    /// The filename component as written (or `MATCH_ALL`).
    pub source: String,
}

impl PatternEntry {
    /// Build an entry from a single config line.
    pub fn from_line(line: &str) -> std::result::Result<Self, regex::Error> {
        let (dir, name) = split_path(line);
        let source = if name.is_empty() { MATCH_ALL } else { name };
        Ok(Self {
            directory: PathBuf::from(dir),
            name_pattern: full_match_regex(source)?,
            source: source.to_string(),
        })
    }

    /// True when the pattern matches the whole of `name`.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name_pattern.is_match(name)
    }
}

/// Compile `pattern` so that it only accepts a match spanning the entire input.
///
/// Anchors are added to the parsed syntax tree rather than to the text, so flags
/// and `(?x)` comments in the pattern cannot reach past them.
pub fn full_match_regex(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    Regex::new(pattern)?;
    let hir = Parser::new()
        .parse(pattern)
        .map_err(|e| regex::Error::Syntax(e.to_string()))?;
    let anchored = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);
    Regex::new(&anchored.to_string())
}

/// Split a path into (directory, last segment) with POSIX `dirname`/`basename` rules.
///
/// Only `/` separates segments; a backslash belongs to the regex.
pub fn split_path(path: &str) -> (&str, &str) {
    let cut = path.rfind('/').map_or(0, |i| i + 1);
    let (head, tail) = path.split_at(cut);
    let trimmed = head.trim_end_matches('/');
    let head = if trimmed.is_empty() { head } else { trimmed };
    (head, tail)
}

/// Turn config lines into entries. Bad regexes are skipped with a warning.
///
/// `None` stands for a config source that could not be obtained and yields no
/// entries.
pub fn parse_config<R: BufRead>(reader: Option<R>) -> Vec<PatternEntry> {
    let Some(reader) = reader else {
        warn!("error reading config file: no config source available");
        return Vec::new();
    };

    let (lines, read_err) = read_lines(reader);
    if let Some(e) = read_err {
        warn!(error = %e, "error reading config file; remaining lines ignored");
    }

    let mut entries = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        match PatternEntry::from_line(line) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                warn!(line = idx + 1, text = %line, "error in regex, the line was skipped: {e}");
            }
        }
    }

    info!(entries = entries.len(), "config parsed");
    entries
}

/// Open the pattern file at `path` and parse it. Failing to open it is fatal.
pub fn load_config(path: &Path) -> Result<Vec<PatternEntry>> {
    let reader = open_config(path).map_err(|source| Error::ConfigOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_config(Some(reader)))
}
