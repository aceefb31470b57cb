use std::collections::VecDeque;

use log::trace;

use crate::constants::HISTORY_CAPACITY;
use crate::translation::TranslationResult;

/// Bounded, insertion-ordered record of past translation results.
///
/// Oldest-first. Once at capacity, appending evicts exactly the single
/// oldest entry, preserving the relative order of everything else.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<TranslationResult>,
    capacity: usize,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Capacity must be at least 1. Exists mainly so tests can exercise
    /// eviction without filling 100 slots.
    pub fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        HistoryLog {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a result at the newest end. Always succeeds.
    pub fn append(&mut self, result: TranslationResult) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
            trace!("history at capacity {}, evicted oldest entry", self.capacity);
        }
        self.entries.push_back(result);
    }

    /// Empty the log. Leaves configuration and page table untouched, since
    /// the log never holds either.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Read-only view, oldest to newest.
    pub fn entries(&self) -> impl Iterator<Item = &TranslationResult> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::table::PageTable;
    use crate::translation::translate;

    fn result_for(logical: u64) -> TranslationResult {
        let config = Configuration::default();
        translate(&config, &PageTable::sample(), logical)
    }

    #[test]
    fn test_append_and_order() {
        let mut log = HistoryLog::new();
        assert!(log.is_empty());

        log.append(result_for(0));
        log.append(result_for(1024));
        log.append(result_for(2048));

        assert_eq!(log.len(), 3);
        let addresses: Vec<u64> = log.entries().map(|r| r.logical_address).collect();
        assert_eq!(addresses, vec![0, 1024, 2048]);
    }

    #[test]
    fn test_eviction_is_strict_fifo() {
        let mut log = HistoryLog::with_capacity(3);
        for logical in 0..5u64 {
            log.append(result_for(logical));
        }

        // 0 and 1 evicted, 2..4 remain in original order
        assert_eq!(log.len(), 3);
        let addresses: Vec<u64> = log.entries().map(|r| r.logical_address).collect();
        assert_eq!(addresses, vec![2, 3, 4]);
    }

    #[test]
    fn test_never_exceeds_full_capacity() {
        let mut log = HistoryLog::new();
        for logical in 0..=HISTORY_CAPACITY as u64 {
            log.append(result_for(logical));
        }

        // 101 appends: the first entry is gone, the newest 100 remain
        assert_eq!(log.len(), HISTORY_CAPACITY);
        assert_eq!(log.entries().next().unwrap().logical_address, 1);
        assert_eq!(
            log.entries().last().unwrap().logical_address,
            HISTORY_CAPACITY as u64
        );
    }

    #[test]
    fn test_clear_empties_unconditionally() {
        let mut log = HistoryLog::with_capacity(2);
        log.append(result_for(0));
        log.append(result_for(512));
        log.clear();

        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        // still usable after clearing
        log.append(result_for(1024));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_faulted_results_are_recorded_like_successes() {
        let mut log = HistoryLog::new();
        log.append(result_for(2048)); // not-loaded fault in the sample table
        log.append(result_for(3073)); // success

        assert_eq!(log.len(), 2);
        assert!(log.entries().next().unwrap().faulted());
    }
}
