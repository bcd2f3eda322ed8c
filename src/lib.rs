//! logfind: find log files by name pattern and content.
//!
//! A pattern file (by default `.logfind`) lists one path per line. The last segment
//! of each line is a regular expression that must match a whole file name inside
//! the directory named by the rest of the line. The resulting files are then
//! filtered to those containing all (or, in OR mode, any) of the search words.
//!
//! Quick example: run the whole pipeline
//!
//! ```no_run
//! use logfind::{Config, MatchMode, SearchTerms, run};
//! let cfg = Config {
//!     terms: SearchTerms::new(["FATAL"], MatchMode::All),
//!     ..Default::default()
//! };
//! let result = run(&cfg).unwrap();
//! print!("{}", result.output);
//! ```
//!
//! Quick example: filter an explicit file list
//!
//! ```no_run
//! use logfind::{MatchMode, SearchTerms, UnreadablePolicy, filter_files};
//! use std::path::PathBuf;
//! let terms = SearchTerms::new(["INFO", "FATAL"], MatchMode::Any);
//! let files = vec![PathBuf::from("logs/app.log")];
//! let hits = filter_files(&files, &terms, UnreadablePolicy::Skip).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod fs_utils;
pub mod io_utils;
pub mod logging;
pub mod output;
pub mod pattern;
pub mod search;

pub use config::{Config, MatchMode, RunResult, UnreadablePolicy};
pub use error::{Error, Result};
pub use fs_utils::{resolve_entries, resolve_entry, resolve_entry_in};
pub use pattern::{PatternEntry, load_config, parse_config};
pub use search::{SearchTerms, filter_files, run};

// -----------------------
// Tests
// -----------------------
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};

    // Kept in its own directory so it never shows up as a candidate.
    fn write_config(dir: &Path, lines: &[String]) -> PathBuf {
        let cfg_dir = dir.join("cfg");
        fs::create_dir_all(&cfg_dir).unwrap();
        let path = cfg_dir.join(".logfind");
        fs::write(&path, lines.join("\n") + "\n").unwrap();
        path
    }

    fn sorted(mut v: Vec<PathBuf>) -> Vec<PathBuf> {
        v.sort();
        v
    }

    #[test]
    fn single_word_and_mode() {
        let td = tempfile::tempdir().unwrap();
        let logs = td.path().join("logs");
        fs::create_dir(&logs).unwrap();
        fs::write(logs.join("app.log"), "INFO started\n").unwrap();
        fs::write(logs.join("app.err"), "FATAL crashed\n").unwrap();
        fs::write(logs.join("debug.txt"), "FATAL but wrong name\n").unwrap();

        let line = format!("{}/app\\.(log|err)", logs.display());
        let cfg = Config {
            config_path: write_config(td.path(), &[line]),
            terms: SearchTerms::new(["FATAL"], MatchMode::All),
            ..Default::default()
        };
        let res = run(&cfg).unwrap();
        assert_eq!(res.files, vec![logs.join("app.err")]);
        assert_eq!(res.output, format!("{}\n", logs.join("app.err").display()));
    }

    #[test]
    fn empty_pattern_or_mode() {
        let td = tempfile::tempdir().unwrap();
        let logs = td.path().join("logs");
        fs::create_dir(&logs).unwrap();
        fs::write(logs.join("app.log"), "INFO started\n").unwrap();
        fs::write(logs.join("app.err"), "FATAL crashed\n").unwrap();
        fs::write(logs.join("debug.txt"), "nothing\n").unwrap();

        let cfg = Config {
            config_path: write_config(td.path(), &[format!("{}/", logs.display())]),
            terms: SearchTerms::new(["INFO", "FATAL"], MatchMode::Any),
            ..Default::default()
        };
        let res = run(&cfg).unwrap();
        assert_eq!(sorted(res.files), vec![logs.join("app.err"), logs.join("app.log")]);
    }

    #[test]
    fn overlapping_lines_keep_duplicates_unless_unique() {
        let td = tempfile::tempdir().unwrap();
        fs::write(td.path().join("a.log"), "hit\n").unwrap();
        let lines = vec![
            format!("{}/", td.path().display()),
            format!("{}/a\\.log", td.path().display()),
        ];
        let mut cfg = Config {
            config_path: write_config(td.path(), &lines),
            terms: SearchTerms::new(["hit"], MatchMode::All),
            ..Default::default()
        };
        let res = run(&cfg).unwrap();
        assert_eq!(res.files, vec![td.path().join("a.log"), td.path().join("a.log")]);

        cfg.unique = true;
        let res = run(&cfg).unwrap();
        assert_eq!(res.files, vec![td.path().join("a.log")]);
    }

    #[test]
    fn missing_config_is_fatal() {
        let cfg = Config {
            config_path: PathBuf::from("/definitely/not/here/.logfind"),
            terms: SearchTerms::new(["x"], MatchMode::All),
            ..Default::default()
        };
        let err = run(&cfg).err().unwrap();
        assert!(matches!(err, Error::ConfigOpen { .. }));
        assert!(err.to_string().contains("cannot open config file"));
    }

    #[test]
    fn missing_directory_is_skipped() {
        let td = tempfile::tempdir().unwrap();
        fs::write(td.path().join("a.log"), "hit\n").unwrap();
        let lines = vec![
            format!("{}/nope/", td.path().display()),
            format!("{}/a\\.log", td.path().display()),
        ];
        let cfg = Config {
            config_path: write_config(td.path(), &lines),
            terms: SearchTerms::new(["hit"], MatchMode::All),
            ..Default::default()
        };
        let res = run(&cfg).unwrap();
        assert_eq!(res.files, vec![td.path().join("a.log")]);
    }
}
