//! Stats command implementation.

use crate::utils::{map_input, percent};
use oxilzw::frame::{CODE_BYTES, frame};
use oxilzw::{ParallelConfig, parallel_encode_with, plan_chunks};
use std::path::Path;

/// Print chunking and compression statistics for a file.
pub fn cmd_stats(input: &Path, config: &ParallelConfig) -> Result<(), Box<dyn std::error::Error>> {
    let data = map_input(input)?;

    let ranges = plan_chunks(data.len(), config);
    let chunks = parallel_encode_with(&data, config)?;
    let codes: usize = chunks.iter().map(Vec::len).sum();
    let raw_size = codes * CODE_BYTES;
    let framed_size = frame(&chunks).len();

    println!("LZW Statistics");
    println!("==============");
    println!("File: {}", input.display());
    println!("Size: {} bytes", data.len());
    println!("Workers: {}", config.workers);
    println!("Chunks: {}", ranges.len());
    for (index, (range, codes)) in ranges.iter().zip(&chunks).enumerate() {
        println!(
            "  #{:<3} {:>10} bytes {:>10} codes  ({})",
            index,
            range.len(),
            codes.len(),
            percent(codes.len() * CODE_BYTES, range.len())
        );
    }
    println!("Codes: {}", codes);
    println!(
        "Raw code size: {} bytes ({})",
        raw_size,
        percent(raw_size, data.len())
    );
    println!(
        "Framed size: {} bytes ({})",
        framed_size,
        percent(framed_size, data.len())
    );

    Ok(())
}
