use std::{collections::HashMap, path::Path};

use async_stream::stream;
use async_trait::async_trait;

use super::{Library, Song, SongStream};

/// A library held entirely in memory.
///
/// Songs are enumerated in insertion order, and point lookups go through a
/// URI index. It can be read from a JSON dump of the server's library,
/// i.e. an array of `{"uri": ..., "tags": {...}}` objects.
#[derive(Debug, Default, Clone)]
pub struct MemoryLibrary {
    songs: Vec<Song>,
    /// uri -> position in `songs`, the first song wins if a uri repeats
    index: HashMap<String, usize>,
}

impl MemoryLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, song: Song) {
        self.index.entry(song.uri.clone()).or_insert(self.songs.len());
        self.songs.push(song);
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let songs: Vec<Song> = serde_json::from_str(json)?;
        Ok(songs.into_iter().collect())
    }

    pub async fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }
}

impl FromIterator<Song> for MemoryLibrary {
    fn from_iter<I: IntoIterator<Item = Song>>(iter: I) -> Self {
        let mut library = Self::new();
        for song in iter {
            library.push(song);
        }
        library
    }
}

#[async_trait]
impl Library for MemoryLibrary {
    async fn songs(&self) -> anyhow::Result<SongStream<'_>> {
        let s = stream! {
            for song in self.songs.iter() {
                yield Ok::<_, anyhow::Error>(song.clone());
            }
        };

        Ok(Box::pin(s))
    }

    async fn song(&self, uri: &str) -> anyhow::Result<Option<Song>> {
        Ok(self.index.get(uri).map(|&i| self.songs[i].clone()))
    }
}
