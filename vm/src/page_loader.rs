//! Backing store access.
//!
//! The store is a flat file split into fixed-size pages: page `p` lives at
//! bytes `[p * PAGE_SIZE, (p + 1) * PAGE_SIZE)`. Pages are only ever read,
//! and a page is either read whole or the read fails.

use std::{
    fs::File,
    io::{BufReader, Read, Seek, SeekFrom},
    path::Path,
};

use log::trace;

use crate::{constants::PAGE_SIZE, error::StoreReadError};

pub trait PageLoader {
    fn load_page_into(
        &mut self,
        page_number: u8,
        target: &mut [u8; PAGE_SIZE],
    ) -> Result<(), StoreReadError>;

    fn read_page(&mut self, page_number: u8) -> Result<[u8; PAGE_SIZE], StoreReadError> {
        let mut page = [0u8; PAGE_SIZE];
        self.load_page_into(page_number, &mut page)?;
        Ok(page)
    }
}

/// Loader backed by anything seekable, usually the backing store file.
#[derive(Debug)]
pub struct FilePageLoader<R> {
    source: R,
}

impl FilePageLoader<BufReader<File>> {
    /// Opens the backing store read-only.
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let file = File::open(path)?;

        Ok(FilePageLoader::new(BufReader::new(file)))
    }
}

impl<R: Read + Seek> FilePageLoader<R> {
    pub fn new(source: R) -> Self {
        FilePageLoader { source }
    }
}

impl<R: Read + Seek> PageLoader for FilePageLoader<R> {
    fn load_page_into(
        &mut self,
        page_number: u8,
        target: &mut [u8; PAGE_SIZE],
    ) -> Result<(), StoreReadError> {
        let position = page_number as u64 * PAGE_SIZE as u64;

        trace!("page_loader: reading page {:#04X} at byte {}", page_number, position);

        self.source
            .seek(SeekFrom::Start(position))
            .map_err(|e| StoreReadError::new(page_number, e))?;

        // A short read means the store is truncated; there are no partial pages.
        self.source
            .read_exact(target)
            .map_err(|e| StoreReadError::new(page_number, e))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, ErrorKind};

    use super::*;

    fn store_with_page_markers(pages: usize) -> Vec<u8> {
        (0..pages)
            .flat_map(|p| std::iter::repeat(p as u8).take(PAGE_SIZE))
            .collect()
    }

    #[test]
    fn reads_the_page_at_its_aligned_offset() {
        let mut loader = FilePageLoader::new(Cursor::new(store_with_page_markers(4)));

        let page = loader.read_page(2).unwrap();

        assert!(page.iter().all(|&b| b == 2));
    }

    #[test]
    fn pages_can_be_read_out_of_order() {
        let mut loader = FilePageLoader::new(Cursor::new(store_with_page_markers(8)));

        assert_eq!(loader.read_page(7).unwrap()[0], 7);
        assert_eq!(loader.read_page(1).unwrap()[PAGE_SIZE - 1], 1);
    }

    #[test]
    fn truncated_store_is_an_error() {
        let mut data = store_with_page_markers(2);
        data.truncate(PAGE_SIZE + 10);
        let mut loader = FilePageLoader::new(Cursor::new(data));

        let err = loader.read_page(1).unwrap_err();

        assert_eq!(err.page_number, 1);
        assert_eq!(err.source.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn page_past_the_end_is_an_error() {
        let mut loader = FilePageLoader::new(Cursor::new(store_with_page_markers(1)));

        assert!(loader.read_page(5).is_err());
    }
}
