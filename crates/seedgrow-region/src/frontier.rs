//! Growth frontier
//!
//! A plain FIFO of coordinates. The region a queued coordinate grows is not
//! stored alongside it; it is read back from the label field when the entry
//! is dequeued.

use seedgrow_core::Coord;
use std::collections::VecDeque;

/// FIFO work queue with enqueue accounting
#[derive(Debug, Clone, Default)]
pub struct Frontier<const D: usize> {
    queue: VecDeque<Coord<D>>,
    enqueued: usize,
    peak: usize,
}

impl<const D: usize> Frontier<D> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            enqueued: 0,
            peak: 0,
        }
    }

    /// Push a coordinate onto the back.
    #[inline]
    pub fn push(&mut self, coord: Coord<D>) {
        self.queue.push_back(coord);
        self.enqueued += 1;
        self.peak = self.peak.max(self.queue.len());
    }

    /// Push the same coordinate `times` times.
    pub fn push_repeated(&mut self, coord: Coord<D>, times: usize) {
        for _ in 0..times {
            self.push(coord);
        }
    }

    /// Pop from the front.
    #[inline]
    pub fn pop(&mut self) -> Option<Coord<D>> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Total pushes since creation or the last [`Self::clear`].
    pub fn enqueued(&self) -> usize {
        self.enqueued
    }

    /// Largest length reached.
    pub fn peak(&self) -> usize {
        self.peak
    }

    /// Drop all entries and reset the counters.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.enqueued = 0;
        self.peak = 0;
    }
}
