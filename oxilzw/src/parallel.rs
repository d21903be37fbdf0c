//! Chunked parallel driver.
//!
//! The input is split into contiguous chunks before any work starts. Each
//! chunk is encoded or decoded with its own fresh dictionary on a rayon pool
//! sized by [`ParallelConfig::workers`], and results are reassembled in chunk
//! order no matter which worker finishes first.

use crate::config::{LzwConfig, ParallelConfig};
use crate::decoder::LzwDecoder;
use crate::dictionary::Code;
use crate::encoder::LzwEncoder;
use crate::error::Result;
use crate::frame;
use log::{debug, trace};
use rayon::prelude::*;
use std::ops::Range;

/// Compute chunk boundaries for an input of `len` bytes.
///
/// Chunks are non-empty, contiguous and cover `0..len` exactly once. The
/// count is `ceil(len / min_chunk_len)` clamped to `1..=workers`; chunk
/// lengths differ by at most one byte. Empty input yields no chunks.
pub fn plan_chunks(len: usize, config: &ParallelConfig) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }

    let min_chunk_len = config.min_chunk_len.max(1);
    let count = len.div_ceil(min_chunk_len).clamp(1, config.workers.max(1));
    let base = len / count;
    let remainder = len % count;

    let mut ranges = Vec::with_capacity(count);
    let mut start = 0;
    for index in 0..count {
        let size = base + usize::from(index < remainder);
        ranges.push(start..start + size);
        start += size;
    }
    ranges
}

/// Run `job` over `items` on at most `workers` threads, keeping order.
///
/// The pool never has more threads than there are items. When that size
/// matches the global rayon pool, the global pool is used as is.
fn run_on_pool<T, R, F>(workers: usize, items: &[T], job: F) -> Result<Vec<R>>
where
    T: Sync,
    R: Send,
    F: Fn(usize, &T) -> Result<R> + Sync,
{
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let run = || -> Result<Vec<R>> {
        items
            .par_iter()
            .enumerate()
            .map(|(index, item)| job(index, item).map_err(|e| e.in_chunk(index)))
            .collect()
    };

    let threads = workers.min(items.len()).max(1);
    if threads == rayon::current_num_threads() {
        return run();
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("oxilzw-worker-{i}"))
        .build()?;
    pool.install(run)
}

/// Encode `input` as independent chunks on `workers` threads.
///
/// Returns one code sequence per chunk, in input order.
pub fn parallel_encode(input: &[u8], workers: usize) -> Result<Vec<Vec<Code>>> {
    parallel_encode_with(input, &ParallelConfig::new(workers))
}

/// Encode `input` as independent chunks using `config`.
pub fn parallel_encode_with(input: &[u8], config: &ParallelConfig) -> Result<Vec<Vec<Code>>> {
    config.validate()?;

    let ranges = plan_chunks(input.len(), config);
    debug!(
        "Encoding {} bytes as {} chunk(s) on {} worker(s)",
        input.len(),
        ranges.len(),
        config.workers
    );

    let lzw = config.lzw;
    run_on_pool(config.workers, &ranges, |index, range| {
        let mut encoder = LzwEncoder::new(lzw)?;
        let codes = encoder.encode(&input[range.clone()]);
        trace!(
            "Chunk {index}: {} bytes -> {} codes ({} learned)",
            range.len(),
            codes.len(),
            encoder.learned()
        );
        Ok(codes)
    })
}

/// Decode per-chunk code sequences in parallel and concatenate in order.
///
/// Fails fast: the first failing chunk's error is returned and no partial
/// output is produced.
pub fn parallel_decode_chunks<C>(chunks: &[C], config: &ParallelConfig) -> Result<Vec<u8>>
where
    C: AsRef<[Code]> + Sync,
{
    config.validate()?;

    let lzw: LzwConfig = config.lzw;
    let parts = run_on_pool(config.workers, chunks, |index, codes| {
        let mut decoder = LzwDecoder::new(lzw)?;
        let bytes = decoder.decode(codes.as_ref())?;
        trace!(
            "Chunk {index}: {} codes -> {} bytes",
            codes.as_ref().len(),
            bytes.len()
        );
        Ok(bytes)
    })?;

    let total = parts.iter().map(Vec::len).sum();
    let mut output = Vec::with_capacity(total);
    for part in &parts {
        output.extend_from_slice(part);
    }

    debug!("Decoded {} chunk(s) into {} bytes", parts.len(), total);
    Ok(output)
}

/// Decode a framed stream on the default worker pool.
pub fn parallel_decode(stream: &[u8]) -> Result<Vec<u8>> {
    parallel_decode_with(stream, &ParallelConfig::default())
}

/// Decode a framed stream using `config`.
///
/// Lines are split and unescaped in one forward pass; the per-line code
/// sequences are then decoded in parallel.
pub fn parallel_decode_with(stream: &[u8], config: &ParallelConfig) -> Result<Vec<u8>> {
    let chunks = frame::unframe(stream)?;
    debug!(
        "Framed stream of {} bytes holds {} line(s)",
        stream.len(),
        chunks.len()
    );
    parallel_decode_chunks(&chunks, config)
}

/// Encode `input` in parallel and serialize the chunks as a framed stream.
pub fn compress_framed(input: &[u8], config: &ParallelConfig) -> Result<Vec<u8>> {
    let chunks = parallel_encode_with(input, config)?;
    Ok(frame::frame(&chunks))
}

/// Alias for [`parallel_decode_with`], pairing with [`compress_framed`].
pub fn decompress_framed(stream: &[u8], config: &ParallelConfig) -> Result<Vec<u8>> {
    parallel_decode_with(stream, config)
}
