use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use log::{debug, trace};
use tokio::io::AsyncRead;
use tokio_stream::StreamExt;

use super::{Loader, UriSource, uri_lines};
use crate::{Library, Result, Rule, ShuffleChain, rule::accepted_by_all};

/// Loads URIs from a newline separated list, keeping only the ones that are
/// still in the library and that no rule excludes.
///
/// Every line costs one library lookup, so prefer [`super::FileLoader`] for
/// lists that are known to be current.
pub struct CheckFileLoader {
    library: Arc<dyn Library>,
    rules: Vec<Rule>,
    source: UriSource,
}

impl CheckFileLoader {
    pub fn new(
        library: Arc<dyn Library>,
        rules: Vec<Rule>,
        source: impl AsyncRead + Send + Unpin + 'static,
    ) -> Self {
        Self {
            library,
            rules,
            source: Box::new(source),
        }
    }
}

#[async_trait]
impl Loader for CheckFileLoader {
    async fn load(&mut self, chain: &mut ShuffleChain) -> Result<()> {
        let mut lines = uri_lines(&mut *self.source);
        let (mut added, mut skipped) = (0usize, 0usize);
        while let Some(uri) = lines.next().await {
            let uri = uri?;
            let song = self
                .library
                .song(&uri)
                .await
                .with_context(|| format!("failed to look up {}", uri))?;

            match song {
                Some(song) if accepted_by_all(&self.rules, &song) => {
                    chain.add(uri);
                    added += 1;
                    continue;
                }
                Some(_) => trace!("{} excluded by rules", uri),
                None => trace!("{} is not in the library", uri),
            }
            skipped += 1;
        }
        debug!("loaded {} songs from file, {} skipped", added, skipped);
        Ok(())
    }
}
