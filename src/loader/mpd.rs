use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use log::{debug, trace};
use tokio_stream::StreamExt;

use super::Loader;
use crate::{Library, Result, Rule, ShuffleChain, rule::accepted_by_all};

/// Loads every song of the library that no rule excludes.
pub struct MpdLoader {
    library: Arc<dyn Library>,
    rules: Vec<Rule>,
}

impl MpdLoader {
    pub fn new(library: Arc<dyn Library>, rules: Vec<Rule>) -> Self {
        Self { library, rules }
    }
}

#[async_trait]
impl Loader for MpdLoader {
    async fn load(&mut self, chain: &mut ShuffleChain) -> Result<()> {
        let mut songs = self
            .library
            .songs()
            .await
            .context("failed to list the library")?;

        let (mut added, mut excluded) = (0usize, 0usize);
        while let Some(song) = songs.next().await {
            let song = song.context("failed to read a song from the library")?;
            if accepted_by_all(&self.rules, &song) {
                chain.add(song.uri);
                added += 1;
            } else {
                trace!("{} excluded by rules", song.uri);
                excluded += 1;
            }
        }
        debug!("loaded {} songs from the library, {} excluded", added, excluded);
        Ok(())
    }
}
