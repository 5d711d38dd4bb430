use std::io::{self, Write};

use vm::{Statistics, Translation};

pub fn write_translation<W: Write>(out: &mut W, t: &Translation) -> io::Result<()> {
    writeln!(
        out,
        "Virtual address: {} Physical Address: {} Value: {}",
        t.logical, t.physical, t.value
    )
}

pub fn write_summary<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "Number of Translated Addresses = {}", stats.total)?;
    writeln!(out, "Page Faults = {}", stats.page_faults)?;
    writeln!(out, "Page Fault Rate = {:.3}", stats.page_fault_rate())?;
    writeln!(out, "TLB Hits = {}", stats.tlb_hits)?;
    writeln!(out, "TLB Hit Rate: {:.3}", stats.tlb_hit_rate())
}
