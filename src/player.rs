use std::io;

use log::{debug, info};
use mpdshuffle::ShuffleChain;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Feed picked songs to `out`, one URI per line, `only` times or forever.
///
/// Returns the number of songs played. Playback stops quietly if the
/// reader on the other side goes away.
pub async fn play<W>(
    chain: &mut ShuffleChain,
    only: Option<usize>,
    mut out: W,
) -> io::Result<usize>
where
    W: AsyncWrite + Unpin,
{
    let mut played = 0;
    while only.is_none_or(|only| played < only) {
        let uri = chain.pick();
        match write_line(&mut out, uri).await {
            Ok(()) => debug!("queued {}", uri),
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                info!("output closed after {} songs", played);
                break;
            }
            Err(e) => return Err(e),
        }
        played += 1;
    }
    Ok(played)
}

async fn write_line<W: AsyncWrite + Unpin>(out: &mut W, line: &str) -> io::Result<()> {
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}
