/// Running counters for one translation run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total: u64,
    pub page_faults: u64,
    pub tlb_hits: u64,
}

impl Statistics {
    /// Faults per translated address, or 0 when nothing was translated.
    pub fn page_fault_rate(&self) -> f64 {
        Self::rate(self.page_faults, self.total)
    }

    pub fn tlb_hit_rate(&self) -> f64 {
        Self::rate(self.tlb_hits, self.total)
    }

    fn rate(count: u64, total: u64) -> f64 {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        }
    }
}
