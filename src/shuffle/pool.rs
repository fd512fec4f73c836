use rand::{Rng, seq::SliceRandom};

/// One window of the shuffle chain.
///
/// `items` is kept as a random permutation that is walked with `cursor`.
/// Everything before the cursor was already picked in the current pass,
/// everything from the cursor on is still pending.
#[derive(Debug, Clone, Default)]
pub(super) struct Pool {
    items: Vec<String>,
    cursor: usize,
}

impl Pool {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Insert an item at a random pending position, so the pending part of
    /// the pass stays uniformly shuffled.
    pub fn push<R: Rng>(&mut self, item: String, rng: &mut R) {
        self.items.push(item);
        let last = self.items.len() - 1;
        let slot = rng.random_range(self.cursor..=last);
        self.items.swap(slot, last);
    }

    /// Consume the next item of the current pass, starting a new pass first
    /// if this one is used up.
    pub fn next<R: Rng>(&mut self, rng: &mut R) -> &str {
        if self.cursor == self.items.len() {
            self.refill(rng);
        }
        let i = self.cursor;
        self.cursor += 1;
        &self.items[i]
    }

    fn refill<R: Rng>(&mut self, rng: &mut R) {
        self.cursor = 0;
        let n = self.items.len();
        if n < 2 {
            return;
        }
        // The item picked last in the finished pass is at the end. It must not
        // open the next pass, so shuffle the others and drop it somewhere after
        // the first slot.
        self.items[..n - 1].shuffle(rng);
        let slot = rng.random_range(1..n);
        self.items.swap(slot, n - 1);
    }
}
