use std::path::PathBuf;

use memchr::memmem;
use tracing::{debug, info, warn};

use crate::config::{Config, MatchMode, RunResult, UnreadablePolicy};
use crate::error::{Error, Result};
use crate::fs_utils::{dedup_paths, resolve_entries};
use crate::io_utils::read_file;
use crate::output::format_paths;
use crate::pattern::load_config;

/// The words to look for and how they combine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerms {
    pub words: Vec<String>,
    pub mode: MatchMode,
}

impl SearchTerms {
    pub fn new<I, S>(words: I, mode: MatchMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            mode,
        }
    }

    /// Literal, case-sensitive containment test over raw bytes.
    ///
    /// `All` with no words is true and `Any` with no words is false. Both modes stop
    /// at the first word that decides the outcome.
    pub fn matches(&self, content: &[u8]) -> bool {
        let contains = |w: &String| memmem::find(content, w.as_bytes()).is_some();
        match self.mode {
            MatchMode::All => self.words.iter().all(contains),
            MatchMode::Any => self.words.iter().any(contains),
        }
    }
}

/// Keep the files whose content satisfies `terms`, preserving input order.
///
/// Each file is read once; the handle does not outlive the read.
pub fn filter_files(
    files: &[PathBuf],
    terms: &SearchTerms,
    policy: UnreadablePolicy,
) -> Result<Vec<PathBuf>> {
    let mut kept = Vec::new();
    for path in files {
        let content = match read_file(path) {
            Ok(c) => c,
            Err(source) => match policy {
                UnreadablePolicy::Skip => {
                    warn!(file = %path.display(), error = %source, "cannot read file, skipping");
                    continue;
                }
                UnreadablePolicy::Fail => {
                    return Err(Error::Unreadable {
                        path: path.clone(),
                        source,
                    });
                }
            },
        };
        if terms.matches(&content) {
            debug!(file = %path.display(), "match");
            kept.push(path.clone());
        } else {
            debug!(file = %path.display(), "no match");
        }
    }
    Ok(kept)
}

/// Run the whole pipeline: read the pattern file, resolve it into candidate
/// files, and filter them by content.
pub fn run(cfg: &Config) -> Result<RunResult> {
    let entries = load_config(&cfg.config_path)?;

    let mut candidates = resolve_entries(&entries);
    if cfg.unique {
        candidates = dedup_paths(candidates);
    }
    info!(candidates = candidates.len(), "files resolved");

    let files = filter_files(&candidates, &cfg.terms, cfg.on_unreadable)?;
    info!(matched = files.len(), "content filter done");

    let output = format_paths(&files);
    Ok(RunResult { files, output })
}
