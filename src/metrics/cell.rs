use std::cell::Cell;

/// A metrics-only counter cell.
///
/// Lets `&self` read paths (peek, stats) record without mutable access. The
/// cache embedding it is single-threaded (`&mut self` for every state
/// change, not `Sync`), so the interior mutability never races.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }
}
