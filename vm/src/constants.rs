/// Bits of a logical address used as the offset inside a page.
pub const OFFSET_BITS: u32 = 8;
pub const OFFSET_MASK: u16 = (1 << OFFSET_BITS) - 1;
pub const PAGE_NUMBER_MASK: u16 = 0xFF;

pub const PAGE_SIZE: usize = 1 << OFFSET_BITS;
pub const PAGE_COUNT: usize = 256;
pub const FRAME_COUNT: usize = 128;
pub const TLB_SIZE: usize = 16;

/// Expected size in bytes of a complete backing store.
pub const BACKING_STORE_SIZE: usize = PAGE_COUNT * PAGE_SIZE;
