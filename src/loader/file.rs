use async_trait::async_trait;
use log::debug;
use tokio::io::AsyncRead;
use tokio_stream::StreamExt;

use super::{Loader, UriSource, uri_lines};
use crate::{Result, ShuffleChain};

/// Loads every URI of a newline separated list, without checking it
/// against the library.
pub struct FileLoader {
    source: UriSource,
}

impl FileLoader {
    pub fn new(source: impl AsyncRead + Send + Unpin + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }
}

#[async_trait]
impl Loader for FileLoader {
    async fn load(&mut self, chain: &mut ShuffleChain) -> Result<()> {
        let mut lines = uri_lines(&mut *self.source);
        let mut added = 0;
        while let Some(uri) = lines.next().await {
            chain.add(uri?);
            added += 1;
        }
        debug!("loaded {} songs from file", added);
        Ok(())
    }
}
