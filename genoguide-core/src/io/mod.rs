//! Boundary I/O for genome data service payloads
//!
//! Payloads arrive as loosely typed JSON; [`json`] validates them into the
//! typed entities of [`crate::types`] before anything reaches the layout code.

pub mod json;

pub use json::{
    decode_chromosomes, decode_gene, decode_genes, decode_statistic, decode_statistics,
    DecodeError, NamedStatistic,
};

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read a payload file into memory, transparently inflating `.gz` files.
pub fn read_payload<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut content = String::new();

    if path.extension().map_or(false, |ext| ext == "gz") {
        let mut reader = BufReader::new(GzDecoder::new(file));
        reader.read_to_string(&mut content)?;
    } else {
        let mut reader = BufReader::new(file);
        reader.read_to_string(&mut content)?;
    }

    log::debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}
