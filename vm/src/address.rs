use std::fmt;

use crate::constants::{OFFSET_BITS, OFFSET_MASK, PAGE_NUMBER_MASK};

/// 16-bit address as seen by the simulated program.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LogicalAddress(pub u16);

impl LogicalAddress {
    pub fn page_number(self) -> u8 {
        ((self.0 >> OFFSET_BITS) & PAGE_NUMBER_MASK) as u8
    }

    pub fn offset(self) -> u8 {
        (self.0 & OFFSET_MASK) as u8
    }
}

impl From<u16> for LogicalAddress {
    fn from(raw: u16) -> Self {
        LogicalAddress(raw)
    }
}

impl fmt::Display for LogicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Address inside physical memory, `(frame << 8) | offset`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PhysicalAddress(pub u32);

impl PhysicalAddress {
    pub fn new(frame_index: usize, offset: u8) -> Self {
        PhysicalAddress(((frame_index as u32) << OFFSET_BITS) | offset as u32)
    }
}

impl fmt::Display for PhysicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
