use std::{collections::BTreeMap, pin::Pin};

use async_trait::async_trait;
use futures::Stream;

mod memory;
mod tag;

pub use memory::MemoryLibrary;
pub use tag::Tag;

/// A playable item in the library: its URI plus whatever tags the server knows.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Song {
    pub uri: String,
    #[serde(default)]
    pub tags: BTreeMap<Tag, String>,
}

impl Song {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            tags: BTreeMap::new(),
        }
    }

    pub fn with_tag(mut self, tag: Tag, value: impl Into<String>) -> Self {
        self.tags.insert(tag, value.into());
        self
    }

    /// value of the tag, None if the song doesn't carry it
    pub fn tag(&self, tag: Tag) -> Option<&str> {
        self.tags.get(&tag).map(String::as_str)
    }
}

pub type SongStream<'a> = Pin<Box<dyn Stream<Item = anyhow::Result<Song>> + Send + 'a>>;

/// Query capability of the music server's library.
#[async_trait]
pub trait Library: Send + Sync {
    /// Enumerate every song in the library.
    /// The stream is finite and yields songs in the library's own order.
    async fn songs(&self) -> anyhow::Result<SongStream<'_>>;

    /// Look up a single song by URI.
    /// Returns None if the library doesn't contain it.
    async fn song(&self, uri: &str) -> anyhow::Result<Option<Song>>;
}
