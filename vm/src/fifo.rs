/// Hands out slot indices `0, 1, .., N - 1, 0, ..` in strict insertion order,
/// regardless of how the slots are used afterwards.
#[derive(Debug, Default)]
pub struct FifoCursor<const N: usize> {
    next: usize,
}

impl<const N: usize> FifoCursor<N> {
    pub fn new() -> Self {
        FifoCursor { next: 0 }
    }

    pub fn advance(&mut self) -> usize {
        let slot = self.next;
        self.next = (self.next + 1) % N;
        slot
    }
}
