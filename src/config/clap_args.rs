use std::{ffi::OsString, path::PathBuf};

use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};

use super::log_level::LogLevel;

/// Keep a music server's queue fed with shuffled songs.
///
/// Picked song URIs are written to stdout, one per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct ClapArgs {
    /// The path to a JSON configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// The path to a JSON dump of the library: a list of
    /// {"uri": ..., "tags": {...}} objects.
    #[arg(long)]
    pub library: PathBuf,

    /// Read song URIs from this file instead of the whole library.
    /// "-" reads from stdin.
    #[arg(short, long)]
    pub file: Option<String>,

    /// With --file, don't check that each song is still in the library and
    /// passes the exclusion rules.
    #[arg(short, long, requires = "file")]
    pub nocheck: bool,

    /// Exclude songs whose tags match all of the given TAG PATTERN pairs.
    /// Can be specified multiple times, a song is excluded if any rule matches.
    #[arg(
        id = "exclude",
        short = 'e',
        long = "exclude",
        num_args = 2..,
        action = ArgAction::Append,
        value_names = ["TAG", "PATTERN"]
    )]
    #[allow(dead_code)]
    exclude_words: Vec<String>,

    /// `--exclude` words, one group per occurrence.
    #[arg(skip)]
    pub exclude: Vec<Vec<String>>,

    /// Pick this many songs, then exit. Picks forever if not given.
    #[arg(short, long)]
    pub only: Option<usize>,

    /// Number of songs per shuffle window.
    /// Overrides the `window_size` field in the configuration file.
    #[arg(short, long)]
    pub window_size: Option<usize>,

    /// Seed for the shuffle, for a reproducible pick order.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level.
    /// The log level specified here will override the log level in the configuration file.
    #[arg(short, long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Log files. Can be specified multiple times.
    /// "stdout" and "stderr" are special values that will log to your terminal.
    /// If not specified, logs will only be written to stderr.
    /// If specified, the `log_file` field in the configuration file will be ignored.
    #[arg(long)]
    pub log_file: Vec<String>,
}

impl ClapArgs {
    /// Parse `std::env::args_os()`, exiting with clap's usage message on error.
    pub fn parse_grouped() -> Self {
        Self::try_parse_grouped_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Like [`Parser::try_parse_from`], but keeps every `--exclude` occurrence
    /// as its own group of words.
    pub fn try_parse_grouped_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(itr)?;
        let mut args = Self::from_arg_matches(&matches)?;
        args.exclude = matches
            .get_occurrences::<String>("exclude")
            .map(|groups| groups.map(|words| words.cloned().collect()).collect())
            .unwrap_or_default();
        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        ClapArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_full() {
        let args = ClapArgs::try_parse_grouped_from([
            "mpdshuffle",
            "--library",
            "library.json",
            "-f",
            "-",
            "--nocheck",
            "-e",
            "artist",
            "X",
            "-e",
            "artist",
            "Y",
            "album",
            "Z",
            "-o",
            "3",
            "-w",
            "5",
            "--seed",
            "42",
            "-l",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.library, PathBuf::from("library.json"));
        assert_eq!(args.file.as_deref(), Some("-"));
        assert!(args.nocheck);
        assert_eq!(
            args.exclude,
            vec![vec!["artist", "X"], vec!["artist", "Y", "album", "Z"]]
        );
        assert_eq!(args.only, Some(3));
        assert_eq!(args.window_size, Some(5));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn test_exclude_groups_per_occurrence() {
        let args = ClapArgs::try_parse_grouped_from([
            "mpdshuffle",
            "--library",
            "l.json",
            "--exclude",
            "genre",
            "Jazz",
            "artist",
            "Y",
            "-e",
            "album",
            "Z",
        ])
        .unwrap();
        assert_eq!(
            args.exclude,
            vec![vec!["genre", "Jazz", "artist", "Y"], vec!["album", "Z"]]
        );

        let args = ClapArgs::try_parse_grouped_from(["mpdshuffle", "--library", "l.json"]).unwrap();
        assert!(args.exclude.is_empty());
    }

    #[test]
    fn test_exclude_needs_a_pattern() {
        let res =
            ClapArgs::try_parse_grouped_from(["mpdshuffle", "--library", "l.json", "-e", "x"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_library_is_required() {
        assert!(ClapArgs::try_parse_grouped_from(["mpdshuffle"]).is_err());
    }

    #[test]
    fn test_nocheck_requires_file() {
        let res = ClapArgs::try_parse_grouped_from(["mpdshuffle", "--library", "l.json", "-n"]);
        assert!(res.is_err());
    }
}
