//! Address file parsing. One decimal address per line; blank lines are
//! skipped and anything else that is not a `u16` is rejected.

use std::io::BufRead;

use anyhow::{bail, Context, Result};
use vm::LogicalAddress;

pub fn read_addresses<R: BufRead>(reader: R) -> Result<Vec<LogicalAddress>> {
    let mut addresses = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let line = line.with_context(|| format!("failed to read line {}", line_number))?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        match trimmed.parse::<u16>() {
            Ok(raw) => addresses.push(LogicalAddress::from(raw)),
            Err(e) => bail!(
                "line {}: {:?} is not an address in 0..=65535 ({})",
                line_number,
                trimmed,
                e
            ),
        }
    }

    Ok(addresses)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn parses_one_address_per_line() {
        let addresses = read_addresses(Cursor::new("16916\n62493\r\n  0 \n\n65535\n")).unwrap();

        assert_eq!(
            addresses,
            vec![
                LogicalAddress(16916),
                LogicalAddress(62493),
                LogicalAddress(0),
                LogicalAddress(65535)
            ]
        );
    }

    #[test]
    fn rejects_out_of_range_values_with_line_number() {
        let err = read_addresses(Cursor::new("1\n65536\n")).unwrap_err();

        assert!(err.to_string().starts_with("line 2:"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(read_addresses(Cursor::new("12ab\n")).is_err());
        assert!(read_addresses(Cursor::new("-4\n")).is_err());
    }

    #[test]
    fn empty_input_is_fine() {
        assert!(read_addresses(Cursor::new("")).unwrap().is_empty());
    }
}
