/// Single-level table mapping every page number to its resident frame.
pub struct PageTable<const PAGE_TABLE_SIZE: usize> {
    table: [Option<usize>; PAGE_TABLE_SIZE],
}

impl<const PAGE_TABLE_SIZE: usize> PageTable<PAGE_TABLE_SIZE> {
    pub fn new() -> Self {
        PageTable {
            table: [None; PAGE_TABLE_SIZE],
        }
    }

    pub fn lookup(&self, page_number: u8) -> Option<usize> {
        self.table[page_number as usize]
    }

    pub fn install(&mut self, page_number: u8, frame_index: usize) {
        self.table[page_number as usize] = Some(frame_index);
    }

    /// Unmaps whichever page currently owns `frame_index` and returns it.
    ///
    /// The table is the only record of frame ownership, so this scans every
    /// entry.
    pub fn evict_frame(&mut self, frame_index: usize) -> Option<u8> {
        let mut evicted = None;

        for (page_number, entry) in self.table.iter_mut().enumerate() {
            if *entry == Some(frame_index) {
                *entry = None;
                evicted = Some(page_number as u8);
            }
        }

        evicted
    }

    pub fn resident_count(&self) -> usize {
        self.table.iter().filter(|entry| entry.is_some()).count()
    }
}

impl<const PAGE_TABLE_SIZE: usize> Default for PageTable<PAGE_TABLE_SIZE> {
    fn default() -> Self {
        Self::new()
    }
}
