use std::path::PathBuf;

use crate::search::SearchTerms;

/// Default name of the pattern file, looked up in the current directory.
pub const DEFAULT_CONFIG_PATH: &str = ".logfind";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Every word must occur (-o absent).
    #[default]
    All,
    /// At least one word must occur (-o).
    Any,
}

/// What to do with a candidate file that cannot be read during the content scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnreadablePolicy {
    /// Drop the file and emit a warning.
    #[default]
    Skip,
    /// Abort the run with `Error::Unreadable`.
    Fail,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub config_path: PathBuf, // -c/--config
    pub terms: SearchTerms,   // search words + -o
    pub verbosity: u8,        // -v (repeatable)
    pub unique: bool,         // -u/--unique
    pub on_unreadable: UnreadablePolicy, // --strict
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            terms: SearchTerms::default(),
            verbosity: 0,
            unique: false,
            on_unreadable: UnreadablePolicy::Skip,
        }
    }
}

pub struct RunResult {
    pub files: Vec<PathBuf>,
    pub output: String,
}
