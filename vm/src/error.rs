use std::{error::Error, fmt, io};

/// The backing store could not supply a whole page. Fatal to the run.
#[derive(Debug)]
pub struct StoreReadError {
    pub page_number: u8,
    pub source: io::Error,
}

impl StoreReadError {
    pub fn new(page_number: u8, source: io::Error) -> Self {
        StoreReadError {
            page_number,
            source,
        }
    }
}

impl fmt::Display for StoreReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to read page {:#04X} from backing store", self.page_number)
    }
}

impl Error for StoreReadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}
