use log::{debug, trace};

use crate::{
    address::{LogicalAddress, PhysicalAddress},
    constants::{FRAME_COUNT, PAGE_COUNT, TLB_SIZE},
    error::StoreReadError,
    page_loader::PageLoader,
    page_table::PageTable,
    physical_memory::PhysicalMemory,
    stats::Statistics,
    tlb::Tlb,
};

/// Which path an address took through the translation pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Access {
    TlbHit,
    PageTableHit,
    /// The page had to be loaded. `evicted` is the page whose frame was
    /// reclaimed, if the frame was already in use.
    PageFault {
        evicted: Option<u8>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Translation {
    pub logical: LogicalAddress,
    pub physical: PhysicalAddress,
    pub value: i8,
    pub access: Access,
}

pub struct Mmu<const FRAME_COUNT: usize, const TLB_SIZE: usize, LOADER: PageLoader> {
    memory: PhysicalMemory<FRAME_COUNT>,
    page_table: PageTable<PAGE_COUNT>,
    tlb: Tlb<TLB_SIZE>,
    loader: LOADER,
    stats: Statistics,
}

/// The standard geometry: 128 frames and a 16-entry TLB.
pub type Translator<LOADER> = Mmu<FRAME_COUNT, TLB_SIZE, LOADER>;

impl<const FRAME_COUNT: usize, const TLB_SIZE: usize, LOADER> Mmu<FRAME_COUNT, TLB_SIZE, LOADER>
where
    LOADER: PageLoader,
{
    pub fn new(loader: LOADER) -> Self {
        Mmu {
            memory: PhysicalMemory::new(),
            page_table: PageTable::new(),
            tlb: Tlb::new(),
            loader,
            stats: Statistics::default(),
        }
    }

    fn handle_page_fault(
        &mut self,
        page_number: u8,
    ) -> Result<(usize, Option<u8>), StoreReadError> {
        // Read before touching any table so a failed read leaves them coherent.
        let bytes = self.loader.read_page(page_number)?;

        let frame_idx = self.memory.next_free_frame();

        let evicted = if self.memory.is_occupied(frame_idx) {
            self.page_table.evict_frame(frame_idx)
        } else {
            None
        };

        if let Some(evicted_page) = evicted {
            let purged = self.tlb.invalidate_page(evicted_page);
            debug!(
                "mmu: evicting page {:#04X} from frame {} ({} tlb entries purged)",
                evicted_page, frame_idx, purged
            );
        }

        self.memory.load(frame_idx, &bytes);
        trace!(
            "mmu: frame {} <- page {:#04X} [{}..]",
            frame_idx,
            page_number,
            hex::encode(&bytes[..16])
        );

        self.page_table.install(page_number, frame_idx);
        self.tlb.insert(page_number, frame_idx);

        Ok((frame_idx, evicted))
    }

    pub fn translate(&mut self, address: LogicalAddress) -> Result<Translation, StoreReadError> {
        let page_number = address.page_number();
        let offset = address.offset();

        let (frame_idx, access) = if let Some(frame_idx) = self.tlb.lookup(page_number) {
            debug!("mmu: {} page {:#04X} tlb hit", address, page_number);
            (frame_idx, Access::TlbHit)
        } else if let Some(frame_idx) = self.page_table.lookup(page_number) {
            debug!("mmu: {} page {:#04X} page table hit", address, page_number);
            self.tlb.insert(page_number, frame_idx);
            (frame_idx, Access::PageTableHit)
        } else {
            debug!("mmu: {} page {:#04X} page fault", address, page_number);
            let (frame_idx, evicted) = self.handle_page_fault(page_number)?;
            (frame_idx, Access::PageFault { evicted })
        };

        self.stats.total += 1;
        match access {
            Access::TlbHit => self.stats.tlb_hits += 1,
            Access::PageFault { .. } => self.stats.page_faults += 1,
            Access::PageTableHit => {}
        }

        Ok(Translation {
            logical: address,
            physical: PhysicalAddress::new(frame_idx, offset),
            value: self.memory.read_byte(frame_idx, offset) as i8,
            access,
        })
    }

    /// Translates addresses in order, stopping at the first store failure.
    pub fn translate_all<I>(&mut self, addresses: I) -> Result<Vec<Translation>, StoreReadError>
    where
        I: IntoIterator<Item = LogicalAddress>,
    {
        addresses
            .into_iter()
            .map(|address| self.translate(address))
            .collect()
    }

    pub fn stats(&self) -> Statistics {
        self.stats
    }

    pub fn page_table(&self) -> &PageTable<PAGE_COUNT> {
        &self.page_table
    }

    pub fn tlb(&self) -> &Tlb<TLB_SIZE> {
        &self.tlb
    }

    pub fn memory(&self) -> &PhysicalMemory<FRAME_COUNT> {
        &self.memory
    }

    pub fn into_loader(self) -> LOADER {
        self.loader
    }
}
