mod input;
mod report;

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use vm::{FilePageLoader, Translator};

/// Translates 16-bit logical addresses through a TLB and a demand-paged
/// page table backed by a read-only backing store.
#[derive(Parser, Debug)]
#[command(name = "vm-sim", version, about, long_about = None)]
struct Cli {
    /// Backing store file (256 pages of 256 bytes).
    backing_store: PathBuf,

    /// File with one decimal logical address per line.
    addresses: PathBuf,

    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print the summary.
    #[arg(short, long)]
    quiet: bool,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let loader = FilePageLoader::open(&cli.backing_store)
        .with_context(|| format!("failed to open backing store {}", cli.backing_store.display()))?;

    let address_file = File::open(&cli.addresses)
        .with_context(|| format!("failed to open address file {}", cli.addresses.display()))?;
    let addresses = input::read_addresses(BufReader::new(address_file))
        .with_context(|| format!("invalid address file {}", cli.addresses.display()))?;

    info!("vm-sim: translating {} addresses", addresses.len());

    let mut translator = Translator::new(loader);

    for address in addresses {
        let translation = translator.translate(address)?;

        if !cli.quiet {
            report::write_translation(out, &translation)?;
        }
    }

    report::write_summary(out, &translator.stats())?;

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.verbose);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    run(&cli, &mut out)?;
    out.flush()?;

    Ok(())
}
