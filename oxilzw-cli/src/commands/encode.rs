//! Encode command implementations.

use crate::utils::{map_input, open_output};
use log::info;
use oxilzw::{ParallelConfig, codes_to_bytes, encode, parallel_encode_with, write_framed};
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// Parallel encode to the framed, one-line-per-chunk format.
pub fn cmd_encode(
    input: &Path,
    output: Option<&Path>,
    config: &ParallelConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let data = map_input(input)?;

    let chunks = parallel_encode_with(&data, config)?;
    let codes: usize = chunks.iter().map(Vec::len).sum();

    let writer = open_output(output)?;
    write_framed(&chunks, writer)?;

    info!(
        "Encoded {} bytes into {} codes across {} chunk(s) in {:.2?}",
        data.len(),
        codes,
        chunks.len(),
        start.elapsed()
    );
    Ok(())
}

/// Sequential encode to raw little-endian codes.
pub fn cmd_encode_single(
    input: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let data = map_input(input)?;

    let codes = encode(&data);

    let mut writer = open_output(output)?;
    writer.write_all(&codes_to_bytes(&codes))?;
    writer.flush()?;

    info!(
        "Encoded {} bytes into {} codes in {:.2?}",
        data.len(),
        codes.len(),
        start.elapsed()
    );
    Ok(())
}
