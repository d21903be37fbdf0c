//! Decode command implementations.

use crate::utils::{map_input, open_output};
use log::info;
use oxilzw::{ParallelConfig, codes_from_bytes, decode, parallel_decode_with};
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// Decode a framed stream in parallel.
pub fn cmd_decode(
    input: &Path,
    output: Option<&Path>,
    config: &ParallelConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let data = map_input(input)?;

    let decoded = parallel_decode_with(&data, config)?;

    let mut writer = open_output(output)?;
    writer.write_all(&decoded)?;
    writer.flush()?;

    info!(
        "Decoded {} framed bytes into {} bytes in {:.2?}",
        data.len(),
        decoded.len(),
        start.elapsed()
    );
    Ok(())
}

/// Decode raw little-endian codes sequentially.
pub fn cmd_decode_single(
    input: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let data = map_input(input)?;

    let codes = codes_from_bytes(&data)?;
    let decoded = decode(&codes)?;

    let mut writer = open_output(output)?;
    writer.write_all(&decoded)?;
    writer.flush()?;

    info!(
        "Decoded {} codes into {} bytes in {:.2?}",
        codes.len(),
        decoded.len(),
        start.elapsed()
    );
    Ok(())
}
