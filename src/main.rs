use std::sync::Arc;

use anyhow::Context;
use log::info;
use mpdshuffle::{Library, MemoryLibrary, ShuffleChain};

mod config;
mod from_config;
mod player;

use config::{ClapArgs, GlobalConfig, Settings, set_log_output};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ClapArgs::parse_grouped();
    let config = match &args.config {
        Some(path) => GlobalConfig::from_json_file(path)
            .await
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => GlobalConfig::default(),
    };
    let settings = Settings::resolve(args, config)?;

    set_log_output(settings.log_level, &settings.log_file).await?;

    let library = MemoryLibrary::from_json_file(&settings.library)
        .await
        .with_context(|| format!("failed to read library {}", settings.library.display()))?;
    info!("library has {} songs", library.len());
    let library: Arc<dyn Library> = Arc::new(library);

    let mut chain = match settings.seed {
        Some(seed) => ShuffleChain::with_seed(settings.window_size, seed)?,
        None => ShuffleChain::new(settings.window_size)?,
    };

    let mut loader = from_config::build_loader(settings.source, library, settings.rules).await?;
    loader
        .load(&mut chain)
        .await
        .context("failed to load songs")?;

    if chain.is_empty() {
        anyhow::bail!("no songs to shuffle");
    }
    info!(
        "shuffling {} songs in {} windows of up to {}",
        chain.len(),
        chain.pool_count(),
        chain.window_size()
    );

    player::play(&mut chain, settings.only, tokio::io::stdout()).await?;

    Ok(())
}
