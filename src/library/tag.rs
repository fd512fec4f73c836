use serde::{Deserialize, Deserializer, de};
use strum::{Display, EnumIter, EnumString};

use crate::Error;

/// Metadata fields a music server exposes for a song.
///
/// Parsing is case-insensitive and accepts both the snake_case name
/// (`album_artist`) and the run-together form the server uses on the
/// wire (`albumartist`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Tag {
    Artist,
    #[strum(to_string = "artist_sort", serialize = "artistsort")]
    ArtistSort,
    Album,
    #[strum(to_string = "album_sort", serialize = "albumsort")]
    AlbumSort,
    #[strum(to_string = "album_artist", serialize = "albumartist")]
    AlbumArtist,
    #[strum(to_string = "album_artist_sort", serialize = "albumartistsort")]
    AlbumArtistSort,
    Title,
    Track,
    Name,
    Genre,
    Date,
    #[strum(to_string = "original_date", serialize = "originaldate")]
    OriginalDate,
    Composer,
    Performer,
    Conductor,
    Work,
    Grouping,
    Comment,
    Disc,
    Label,
}

impl Tag {
    /// Parse a tag name, reporting unknown names as a configuration error.
    pub fn parse(name: &str) -> Result<Self, Error> {
        name.parse().map_err(|_| Error::UnknownTag(name.to_string()))
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Tag::parse(&name).map_err(de::Error::custom)
    }
}
