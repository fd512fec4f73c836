use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{Error, Result};

mod pool;

use pool::Pool;

/// Random, anti-repeat sequence of song URIs.
///
/// Songs are split into pools of at most `window_size` items in the order
/// they are added. Every pick chooses a pool uniformly at random and takes
/// the next song of that pool's current pass, where a pass is a fresh random
/// permutation of the pool. A song therefore only comes back out of its pool
/// after every other song of the pool was played, while picks across pools
/// stay independent.
///
/// Pools are weighted equally, not by size. When the last pool is only
/// partly filled its songs are played more often than the others, and since
/// a pick from another pool may come right back to it, a song of a pool
/// with one item can play twice in a row.
#[derive(Debug)]
pub struct ShuffleChain {
    window_size: usize,
    pools: Vec<Pool>,
    len: usize,
    rng: StdRng,
}

impl ShuffleChain {
    /// Create an empty chain seeded from the OS.
    pub fn new(window_size: usize) -> Result<Self> {
        Self::with_rng(window_size, StdRng::from_os_rng())
    }

    /// Create an empty chain with a fixed seed, so the pick order is reproducible.
    pub fn with_seed(window_size: usize, seed: u64) -> Result<Self> {
        Self::with_rng(window_size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(window_size: usize, rng: StdRng) -> Result<Self> {
        if window_size == 0 {
            return Err(Error::InvalidWindowSize(window_size));
        }
        Ok(Self {
            window_size,
            pools: Vec::new(),
            len: 0,
            rng,
        })
    }

    pub fn add(&mut self, item: impl Into<String>) {
        let full = self
            .pools
            .last()
            .is_none_or(|pool| pool.len() >= self.window_size);
        if full {
            self.pools.push(Pool::default());
        }
        if let Some(pool) = self.pools.last_mut() {
            pool.push(item.into(), &mut self.rng);
            self.len += 1;
        }
    }

    /// Pick the next song to play.
    ///
    /// # Panics
    ///
    /// Panics if the chain is empty. Callers must load at least one song
    /// before asking for picks.
    pub fn pick(&mut self) -> &str {
        assert!(!self.pools.is_empty(), "pick from an empty shuffle chain");
        let i = self.rng.random_range(0..self.pools.len());
        self.pools[i].next(&mut self.rng)
    }

    /// number of songs in the chain, duplicates included
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every song in the chain, duplicates included, in no particular order.
    pub fn items(&self) -> Vec<&str> {
        self.pools.iter().flat_map(Pool::items).collect()
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }
}
