//! Demand-paged address translation: a TLB in front of a single-level page
//! table, a bounded pool of physical frames, and a read-only backing store
//! that supplies page contents on a fault.

pub mod address;
pub mod constants;
pub mod error;
pub mod fifo;
pub mod mmu;
pub mod page_loader;
pub mod page_table;
pub mod physical_memory;
pub mod stats;
pub mod tlb;

pub use address::{LogicalAddress, PhysicalAddress};
pub use error::StoreReadError;
pub use mmu::{Access, Mmu, Translation, Translator};
pub use page_loader::{FilePageLoader, PageLoader};
pub use stats::Statistics;
