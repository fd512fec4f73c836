use std::{collections::BTreeMap, path::PathBuf};

use mpdshuffle::{Rule, Tag};

pub use clap_args::ClapArgs;
pub use log_level::{LogLevel, set_log_output};

mod clap_args;
mod log_level;

/// Songs per shuffle window when neither the command line nor the
/// configuration file sets one.
pub const DEFAULT_WINDOW_SIZE: usize = 7;

#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    #[serde(default)]
    pub window_size: Option<usize>,
    /// exclusion rules, each one a tag -> pattern object
    #[serde(default)]
    pub exclude: Vec<BTreeMap<Tag, String>>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
    #[serde(default)]
    pub log_file: Vec<String>,
}

impl GlobalConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: GlobalConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    pub async fn from_json_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }
}

/// Where songs are loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SongSource {
    /// every song of the library
    Library,
    /// a list of URIs, "-" being stdin
    File { path: String, check: bool },
}

/// Command line and configuration file merged, command line first.
#[derive(Debug)]
pub struct Settings {
    pub library: PathBuf,
    pub source: SongSource,
    pub rules: Vec<Rule>,
    pub window_size: usize,
    pub only: Option<usize>,
    pub seed: Option<u64>,
    pub log_level: LogLevel,
    pub log_file: Vec<String>,
}

impl Settings {
    pub fn resolve(args: ClapArgs, config: GlobalConfig) -> mpdshuffle::Result<Self> {
        let mut rules = Vec::with_capacity(config.exclude.len() + args.exclude.len());
        for patterns in config.exclude {
            rules.push(Rule::from_patterns(patterns)?);
        }
        for words in &args.exclude {
            rules.push(Rule::from_args(words.as_slice())?);
        }

        let source = match args.file {
            Some(path) => SongSource::File {
                path,
                check: !args.nocheck,
            },
            None => SongSource::Library,
        };

        let log_file = match args.log_file.is_empty() {
            true => config.log_file,
            false => args.log_file,
        };

        Ok(Self {
            library: args.library,
            source,
            rules,
            window_size: args
                .window_size
                .or(config.window_size)
                .unwrap_or(DEFAULT_WINDOW_SIZE),
            only: args.only,
            seed: args.seed,
            log_level: args.log_level.or(config.log_level).unwrap_or_default(),
            log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpdshuffle::{Error, Song};

    fn args(extra: &[&str]) -> ClapArgs {
        let mut argv = vec!["mpdshuffle", "--library", "library.json"];
        argv.extend_from_slice(extra);
        ClapArgs::try_parse_grouped_from(argv).unwrap()
    }

    #[test]
    fn test_from_json() {
        let json = r#"
        {
            "window_size": 3,
            "exclude": [
                {"artist": "X"},
                {"albumartist": "Y", "album": "Z"}
            ],
            "log_level": "debug",
            "log_file": ["stdout", "/tmp/mpdshuffle.log"]
        }
        "#;

        let config = GlobalConfig::from_json(json).unwrap();

        assert_eq!(config.window_size, Some(3));
        assert_eq!(config.exclude.len(), 2);
        assert_eq!(config.exclude[1][&Tag::AlbumArtist], "Y");
        assert_eq!(config.log_level, Some(LogLevel::Debug));
        assert_eq!(config.log_file, vec!["stdout", "/tmp/mpdshuffle.log"]);
    }

    #[test]
    fn test_from_empty_json() {
        let config = GlobalConfig::from_json("{}").unwrap();
        assert_eq!(config.window_size, None);
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn test_from_invalid_json() {
        assert!(GlobalConfig::from_json(r#"{"windowsize": 3}"#).is_err());
        assert!(GlobalConfig::from_json(r#"{"exclude": [{"mood": "sad"}]}"#).is_err());
        assert!(GlobalConfig::from_json(r#"{"window_size": -1}"#).is_err());
    }

    #[tokio::test]
    async fn test_from_json_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), r#"{"window_size": 9}"#).unwrap();

        let config = GlobalConfig::from_json_file(file.path()).await.unwrap();
        assert_eq!(config.window_size, Some(9));
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(args(&[]), GlobalConfig::default()).unwrap();

        assert_eq!(settings.library, PathBuf::from("library.json"));
        assert_eq!(settings.source, SongSource::Library);
        assert!(settings.rules.is_empty());
        assert_eq!(settings.window_size, DEFAULT_WINDOW_SIZE);
        assert_eq!(settings.only, None);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.log_level, LogLevel::Info);
        assert!(settings.log_file.is_empty());
    }

    #[test]
    fn test_command_line_wins() {
        let config = GlobalConfig::from_json(
            r#"{"window_size": 3, "log_level": "warn", "log_file": ["a.log"]}"#,
        )
        .unwrap();
        let settings = Settings::resolve(
            args(&["-w", "5", "-l", "trace", "--log-file", "stdout"]),
            config,
        )
        .unwrap();

        assert_eq!(settings.window_size, 5);
        assert_eq!(settings.log_level, LogLevel::Trace);
        assert_eq!(settings.log_file, vec!["stdout"]);
    }

    #[test]
    fn test_config_fills_gaps() {
        let config =
            GlobalConfig::from_json(r#"{"window_size": 3, "log_file": ["a.log"]}"#).unwrap();
        let settings = Settings::resolve(args(&[]), config).unwrap();

        assert_eq!(settings.window_size, 3);
        assert_eq!(settings.log_file, vec!["a.log"]);
    }

    #[test]
    fn test_rules_from_both_sources() {
        let config = GlobalConfig::from_json(r#"{"exclude": [{"artist": "X"}]}"#).unwrap();
        let settings =
            Settings::resolve(args(&["-e", "genre", "Jazz", "artist", "Y"]), config).unwrap();

        assert_eq!(settings.rules.len(), 2);
        let x = Song::new("a").with_tag(Tag::Artist, "X");
        let jazz_y = Song::new("b")
            .with_tag(Tag::Artist, "Y")
            .with_tag(Tag::Genre, "Jazz");
        let rock_y = Song::new("c")
            .with_tag(Tag::Artist, "Y")
            .with_tag(Tag::Genre, "Rock");
        assert!(!settings.rules[0].accepts(&x));
        assert!(!settings.rules[1].accepts(&jazz_y));
        assert!(settings.rules.iter().all(|rule| rule.accepts(&rock_y)));
    }

    #[test]
    fn test_bad_rules_fail_fast() {
        let res = Settings::resolve(
            args(&["-e", "artist", "X", "album"]),
            GlobalConfig::default(),
        );
        assert!(matches!(res, Err(Error::MissingPattern(Tag::Album))));

        let res = Settings::resolve(args(&["-e", "mood", "sad"]), GlobalConfig::default());
        assert!(matches!(res, Err(Error::UnknownTag(_))));

        let config = GlobalConfig::from_json(r#"{"exclude": [{}]}"#).unwrap();
        let res = Settings::resolve(args(&[]), config);
        assert!(matches!(res, Err(Error::EmptyRule)));
    }

    #[test]
    fn test_file_source() {
        let settings =
            Settings::resolve(args(&["-f", "list.txt"]), GlobalConfig::default()).unwrap();
        assert_eq!(
            settings.source,
            SongSource::File {
                path: "list.txt".to_string(),
                check: true
            }
        );

        let settings =
            Settings::resolve(args(&["-f", "-", "--nocheck"]), GlobalConfig::default()).unwrap();
        assert_eq!(
            settings.source,
            SongSource::File {
                path: "-".to_string(),
                check: false
            }
        );
    }
}
