//! Min-priority queue for the search frontier.
//!
//! Entries are ordered by `(f, order)`: lower `f` first, ties broken by the
//! insertion order the search assigned when the cell entered the frontier
//! (FIFO). The order counter lives here so it can only grow. A key never
//! changes once pushed.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A queued cell. Field order matters: the derived `Ord` compares `f`,
/// then `order`, then `idx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierEntry {
    pub f: u32,
    pub order: u64,
    pub idx: usize,
}

/// Frontier of a single search run.
#[derive(Debug, Default)]
pub struct FrontierQueue {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_order: u64,
}

impl FrontierQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next insertion order. The first call returns 0.
    pub fn next_order(&mut self) -> u64 {
        let order = self.next_order;
        self.next_order += 1;
        order
    }

    /// Queue `idx` with priority `f` under an already assigned `order`.
    pub fn push(&mut self, idx: usize, f: u32, order: u64) {
        self.heap.push(Reverse(FrontierEntry { f, order, idx }));
    }

    /// Remove the entry with the lowest `(f, order)`.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(e)| e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_new(q: &mut FrontierQueue, idx: usize, f: u32) {
        let order = q.next_order();
        q.push(idx, f, order);
    }

    #[test]
    fn lowest_f_first() {
        let mut q = FrontierQueue::new();
        push_new(&mut q, 10, 7);
        push_new(&mut q, 11, 3);
        push_new(&mut q, 12, 5);
        let got: Vec<usize> = std::iter::from_fn(|| q.pop()).map(|e| e.idx).collect();
        assert_eq!(got, vec![11, 12, 10]);
    }

    #[test]
    fn ties_are_fifo() {
        let mut q = FrontierQueue::new();
        for idx in [4, 2, 9, 1] {
            push_new(&mut q, idx, 6);
        }
        let got: Vec<usize> = std::iter::from_fn(|| q.pop()).map(|e| e.idx).collect();
        assert_eq!(got, vec![4, 2, 9, 1]);
    }

    #[test]
    fn orders_start_at_zero_and_increase() {
        let mut q = FrontierQueue::new();
        assert_eq!(q.next_order(), 0);
        assert_eq!(q.next_order(), 1);
        assert_eq!(q.next_order(), 2);
    }

    #[test]
    fn requeued_cell_goes_behind_earlier_ties() {
        let mut q = FrontierQueue::new();
        push_new(&mut q, 0, 5);
        push_new(&mut q, 1, 5);
        assert_eq!(q.pop().unwrap().idx, 0);
        // Cell 0 comes back with the same f; it now trails cell 1.
        push_new(&mut q, 0, 5);
        push_new(&mut q, 2, 5);
        let got: Vec<(usize, u64)> = std::iter::from_fn(|| q.pop())
            .map(|e| (e.idx, e.order))
            .collect();
        assert_eq!(got, vec![(1, 1), (0, 2), (2, 3)]);
        assert_eq!(q.pop(), None);
    }
}
