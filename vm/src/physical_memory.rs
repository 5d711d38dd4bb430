use crate::{constants::PAGE_SIZE, fifo::FifoCursor};

/// Fixed pool of page-sized frames. Frames are handed out round-robin; once
/// every frame has been used, each allocation reclaims the oldest one.
pub struct PhysicalMemory<const FRAME_COUNT: usize> {
    frames: Vec<[u8; PAGE_SIZE]>,
    occupied: [bool; FRAME_COUNT],
    cursor: FifoCursor<FRAME_COUNT>,
}

impl<const FRAME_COUNT: usize> PhysicalMemory<FRAME_COUNT> {
    pub fn new() -> Self {
        PhysicalMemory {
            frames: vec![[0; PAGE_SIZE]; FRAME_COUNT],
            occupied: [false; FRAME_COUNT],
            cursor: FifoCursor::new(),
        }
    }

    /// Next frame in FIFO order. The frame may still hold another page; the
    /// caller is responsible for unmapping it.
    pub fn next_free_frame(&mut self) -> usize {
        self.cursor.advance()
    }

    pub fn is_occupied(&self, frame_index: usize) -> bool {
        self.occupied[frame_index]
    }

    pub fn load(&mut self, frame_index: usize, bytes: &[u8; PAGE_SIZE]) {
        self.frames[frame_index].copy_from_slice(bytes);
        self.occupied[frame_index] = true;
    }

    pub fn read_byte(&self, frame_index: usize, offset: u8) -> u8 {
        self.frames[frame_index][offset as usize]
    }
}

impl<const FRAME_COUNT: usize> Default for PhysicalMemory<FRAME_COUNT> {
    fn default() -> Self {
        Self::new()
    }
}
