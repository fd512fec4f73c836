use std::collections::BTreeMap;

use crate::{Error, Result, Song, Tag};

/// An exclusion rule over song tags.
///
/// The rule is triggered only when every one of its patterns matches the
/// song exactly, and a triggered rule rejects the song. A song without a
/// value for one of the rule's tags never triggers it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rule {
    patterns: Vec<(Tag, String)>,
}

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_pattern(&mut self, tag: Tag, pattern: impl Into<String>) {
        self.patterns.push((tag, pattern.into()));
    }

    /// Build a rule from `tag pattern [tag pattern ...]` words, as given on
    /// the command line.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        if args.is_empty() {
            return Err(Error::EmptyRule);
        }

        let mut rule = Self::new();
        for pair in args.chunks(2) {
            let tag = Tag::parse(pair[0].as_ref())?;
            match pair.get(1) {
                Some(pattern) => rule.add_pattern(tag, pattern.as_ref()),
                None => return Err(Error::MissingPattern(tag)),
            }
        }
        Ok(rule)
    }

    /// Build a rule from a tag -> pattern map, as written in the config file.
    pub fn from_patterns(patterns: BTreeMap<Tag, String>) -> Result<Self> {
        if patterns.is_empty() {
            return Err(Error::EmptyRule);
        }
        Ok(Self {
            patterns: patterns.into_iter().collect(),
        })
    }

    pub fn accepts(&self, song: &Song) -> bool {
        if self.patterns.is_empty() {
            return true;
        }
        !self
            .patterns
            .iter()
            .all(|(tag, pattern)| song.tag(*tag) == Some(pattern.as_str()))
    }
}

/// true if no rule in the set rejects the song
pub fn accepted_by_all(rules: &[Rule], song: &Song) -> bool {
    rules.iter().all(|rule| rule.accepts(song))
}
