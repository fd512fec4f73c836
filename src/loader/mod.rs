use async_trait::async_trait;
use futures::Stream;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio_stream::{StreamExt, wrappers::LinesStream};

use crate::{Result, ShuffleChain};

mod check_file;
mod file;
mod mpd;

pub use check_file::CheckFileLoader;
pub use file::FileLoader;
pub use mpd::MpdLoader;

/// A stream of newline separated song URIs, e.g. a file or stdin.
pub type UriSource = Box<dyn AsyncRead + Send + Unpin>;

/// Fills a shuffle chain from one source of songs.
#[async_trait]
pub trait Loader: Send {
    /// Add every accepted song of the source to the chain.
    ///
    /// Songs added before a failure stay in the chain.
    async fn load(&mut self, chain: &mut ShuffleChain) -> Result<()>;
}

/// Non-empty lines of the source, line endings stripped.
fn uri_lines<'a>(
    source: &'a mut (dyn AsyncRead + Send + Unpin),
) -> impl Stream<Item = std::io::Result<String>> + Send + Unpin + 'a {
    LinesStream::new(BufReader::new(source).lines())
        .filter(|line| !matches!(line, Ok(uri) if uri.is_empty()))
}
