use log::trace;

use crate::fifo::FifoCursor;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TlbEntry {
    pub page_number: u8,
    pub frame_index: usize,
}

/// Small fully-associative cache of page table entries. Lookups scan every
/// slot; inserts replace slots in FIFO order.
pub struct Tlb<const TLB_SIZE: usize> {
    slots: [Option<TlbEntry>; TLB_SIZE],
    cursor: FifoCursor<TLB_SIZE>,
}

impl<const TLB_SIZE: usize> Tlb<TLB_SIZE> {
    pub fn new() -> Self {
        Tlb {
            slots: [None; TLB_SIZE],
            cursor: FifoCursor::new(),
        }
    }

    pub fn lookup(&self, page_number: u8) -> Option<usize> {
        self.slots
            .iter()
            .flatten()
            .find(|entry| entry.page_number == page_number)
            .map(|entry| entry.frame_index)
    }

    /// Writes into the next FIFO slot, overwriting whatever it held.
    pub fn insert(&mut self, page_number: u8, frame_index: usize) {
        let slot = self.cursor.advance();

        trace!(
            "tlb: slot {} <- page {:#04X} frame {} (was {:?})",
            slot,
            page_number,
            frame_index,
            self.slots[slot]
        );

        self.slots[slot] = Some(TlbEntry {
            page_number,
            frame_index,
        });
    }

    /// Clears every slot caching `page_number`. Returns how many were cleared.
    pub fn invalidate_page(&mut self, page_number: u8) -> usize {
        let mut cleared = 0;

        for slot in self.slots.iter_mut() {
            if matches!(slot, Some(entry) if entry.page_number == page_number) {
                *slot = None;
                cleared += 1;
            }
        }

        cleared
    }

    pub fn entries(&self) -> impl Iterator<Item = &TlbEntry> {
        self.slots.iter().flatten()
    }
}

impl<const TLB_SIZE: usize> Default for Tlb<TLB_SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tlb_misses() {
        let tlb = Tlb::<16>::new();

        assert_eq!(tlb.lookup(0), None);
        assert_eq!(tlb.entries().count(), 0);
    }

    #[test]
    fn hit_after_insert() {
        let mut tlb = Tlb::<16>::new();
        tlb.insert(5, 2);

        assert_eq!(tlb.lookup(5), Some(2));
        assert_eq!(tlb.lookup(6), None);
    }

    #[test]
    fn replacement_follows_insertion_order_not_use() {
        let mut tlb = Tlb::<2>::new();
        tlb.insert(1, 10);
        tlb.insert(2, 20);

        // Hitting page 1 does not protect it.
        assert_eq!(tlb.lookup(1), Some(10));

        tlb.insert(3, 30);

        assert_eq!(tlb.lookup(1), None);
        assert_eq!(tlb.lookup(2), Some(20));
        assert_eq!(tlb.lookup(3), Some(30));
    }

    #[test]
    fn invalidate_clears_every_matching_slot() {
        let mut tlb = Tlb::<4>::new();
        tlb.insert(7, 1);
        tlb.insert(8, 2);
        tlb.insert(7, 1);

        assert_eq!(tlb.invalidate_page(7), 2);
        assert_eq!(tlb.lookup(7), None);
        assert_eq!(tlb.lookup(8), Some(2));
        assert_eq!(tlb.invalidate_page(7), 0);
    }
}
