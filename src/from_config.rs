use std::sync::Arc;

use anyhow::Context;
use mpdshuffle::{CheckFileLoader, FileLoader, Library, Loader, MpdLoader, Rule};

use crate::config::SongSource;

/// Build the loader for the configured song source.
pub async fn build_loader(
    source: SongSource,
    library: Arc<dyn Library>,
    rules: Vec<Rule>,
) -> anyhow::Result<Box<dyn Loader>> {
    let loader: Box<dyn Loader> = match source {
        SongSource::Library => Box::new(MpdLoader::new(library, rules)),
        SongSource::File { path, check } => {
            let reader: mpdshuffle::loader::UriSource = match path.as_str() {
                "-" => Box::new(tokio::io::stdin()),
                path => Box::new(
                    tokio::fs::File::open(path)
                        .await
                        .with_context(|| format!("failed to open {}", path))?,
                ),
            };
            if check {
                Box::new(CheckFileLoader::new(library, rules, reader))
            } else {
                if !rules.is_empty() {
                    log::warn!("exclusion rules are ignored with --nocheck");
                }
                Box::new(FileLoader::new(reader))
            }
        }
    };

    Ok(loader)
}
