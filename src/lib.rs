mod error;
pub mod library;
pub mod loader;
mod rule;
mod shuffle;

pub use error::{Error, Result};
pub use library::{Library, MemoryLibrary, Song, Tag};
pub use loader::{CheckFileLoader, FileLoader, Loader, MpdLoader};
pub use rule::Rule;
pub use shuffle::ShuffleChain;
