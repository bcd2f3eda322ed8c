//! Command-line argument parsing for the logfind binary.
//!
//! `build_cli()` describes the flags; `parse_from()` turns them into a `Config`
//! ready for `logfind::run`.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};
use logfind::config::DEFAULT_CONFIG_PATH;
use logfind::{Config, MatchMode, SearchTerms, UnreadablePolicy};

pub fn build_cli() -> Command {
    Command::new("logfind")
        .about("Prints a list of log files containing the given strings")
        .arg(
            Arg::new("search")
                .num_args(1..)
                .required(true)
                .value_name("WORD")
                .help("Gets files containing the given words"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .num_args(1)
                .default_value(DEFAULT_CONFIG_PATH)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Specifies a different config file (default .logfind)"),
        )
        .arg(
            Arg::new("or")
                .short('o')
                .action(ArgAction::SetTrue)
                .help("Uses OR logic when searching files"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Prints more verbose debug information (repeat for more)"),
        )
        .arg(
            Arg::new("unique")
                .short('u')
                .long("unique")
                .action(ArgAction::SetTrue)
                .help("Prints each file only once even if several config lines match it"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Fails instead of skipping files that cannot be read"),
        )
}

fn to_config(matches: &ArgMatches) -> Config {
    let words: Vec<String> = matches
        .get_many::<String>("search")
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default();
    let mode = if matches.get_flag("or") {
        MatchMode::Any
    } else {
        MatchMode::All
    };

    let mut cfg = Config {
        terms: SearchTerms::new(words, mode),
        verbosity: matches.get_count("verbose"),
        unique: matches.get_flag("unique"),
        ..Default::default()
    };
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        cfg.config_path = path.clone();
    }
    if matches.get_flag("strict") {
        cfg.on_unreadable = UnreadablePolicy::Fail;
    }
    cfg
}

/// Parse an argument list (first item is the program name).
pub fn parse_from<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_cli().try_get_matches_from(args)?;
    Ok(to_config(&matches))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = parse_from(["logfind", "FATAL"]).unwrap();
        assert_eq!(cfg.terms.words, vec!["FATAL".to_string()]);
        assert_eq!(cfg.terms.mode, MatchMode::All);
        assert_eq!(cfg.config_path, PathBuf::from(".logfind"));
        assert_eq!(cfg.verbosity, 0);
        assert!(!cfg.unique);
        assert_eq!(cfg.on_unreadable, UnreadablePolicy::Skip);
    }

    #[test]
    fn all_flags() {
        let cfg = parse_from([
            "logfind", "-o", "-vv", "-c", "other.cfg", "-u", "--strict", "INFO", "FATAL",
        ])
        .unwrap();
        assert_eq!(cfg.terms.words, vec!["INFO".to_string(), "FATAL".to_string()]);
        assert_eq!(cfg.terms.mode, MatchMode::Any);
        assert_eq!(cfg.config_path, PathBuf::from("other.cfg"));
        assert_eq!(cfg.verbosity, 2);
        assert!(cfg.unique);
        assert_eq!(cfg.on_unreadable, UnreadablePolicy::Fail);
    }

    #[test]
    fn long_options() {
        let cfg = parse_from(["logfind", "--config", "x", "--verbose", "w"]).unwrap();
        assert_eq!(cfg.config_path, PathBuf::from("x"));
        assert_eq!(cfg.verbosity, 1);
    }

    #[test]
    fn search_word_is_required() {
        assert!(parse_from(["logfind"]).is_err());
        assert!(parse_from(["logfind", "-o"]).is_err());
    }
}
