//! Parallel driver and framed stream integration tests.

use oxilzw::frame::{self, lines};
use oxilzw::{
    LzwError, ParallelConfig, compress_framed, decode, encode, parallel_decode,
    parallel_decode_with, parallel_encode, parallel_encode_with, plan_chunks, write_framed,
};

const TEXT: &str = "The Project Gutenberg EBook of War and Peace, by Leo Tolstoy\n\
This eBook is for the use of anyone anywhere at no cost and with almost\n\
no restrictions whatsoever. You may copy it, give it away or re-use\n\
it under the terms of the Project Gutenberg License included with this\n\
eBook or online at www.gutenberg.org\n\
Title: War and Peace\n\
Author: Leo Tolstoy\n\
Translators: Louise and Aylmer Maude\n\
Posting Date: January 10, 2009 [EBook #2600] Last Updated: November 3,\n\
2016\n\
Language: English\n\
Character set encoding: UTF-8\n\
*** START OF THIS PROJECT GUTENBERG EBOOK WAR AND PEACE ***\n";

fn config(workers: usize) -> ParallelConfig {
    ParallelConfig::new(workers).with_min_chunk_len(32)
}

#[test]
fn test_threading_roundtrip() {
    let encoded = parallel_encode_with(TEXT.as_bytes(), &config(4)).expect("encoding failed");
    assert_eq!(encoded.len(), 4);

    let mut framed = Vec::new();
    write_framed(&encoded, &mut framed).expect("writing failed");

    let decoded = parallel_decode(&framed).expect("decoding failed");
    assert_eq!(String::from_utf8(decoded).expect("utf-8"), TEXT);
}

#[test]
fn test_roundtrip_across_worker_counts() {
    let data = TEXT.as_bytes().repeat(3);
    for workers in 1..=12 {
        let cfg = config(workers);
        let framed = compress_framed(&data, &cfg).expect("encoding failed");

        let expected_lines = plan_chunks(data.len(), &cfg).len();
        assert_eq!(lines(&framed).count(), expected_lines);

        let decoded = parallel_decode_with(&framed, &cfg).expect("decoding failed");
        assert_eq!(decoded, data, "mismatch with {workers} workers");
    }
}

#[test]
fn test_worker_count_far_above_chunk_count() {
    let encoded = parallel_encode(b"abc", 10_000).expect("encoding failed");
    assert_eq!(encoded.len(), 1);
    assert_eq!(encoded[0], encode(b"abc"));

    let cfg = ParallelConfig::new(10_000);
    let framed = compress_framed(TEXT.as_bytes(), &cfg).expect("encoding failed");
    assert_eq!(lines(&framed).count(), 1);

    let decoded = parallel_decode_with(&framed, &cfg).expect("decoding failed");
    assert_eq!(decoded, TEXT.as_bytes());
}

#[test]
fn test_each_chunk_is_independent() {
    let chunks = parallel_encode_with(TEXT.as_bytes(), &config(3)).expect("encoding failed");
    let ranges = plan_chunks(TEXT.len(), &config(3));

    for (codes, range) in chunks.iter().zip(ranges) {
        // Each chunk decodes on its own with a fresh dictionary.
        let part = decode(codes).expect("decoding failed");
        assert_eq!(part, &TEXT.as_bytes()[range.clone()]);
        assert_eq!(codes, &encode(&TEXT.as_bytes()[range]));
    }
}

#[test]
fn test_single_worker_matches_sequential() {
    let chunks = parallel_encode(TEXT.as_bytes(), 1).expect("encoding failed");
    assert_eq!(chunks, vec![encode(TEXT.as_bytes())]);
}

#[test]
fn test_default_threshold_keeps_small_input_whole() {
    let chunks = parallel_encode(TEXT.as_bytes(), 8).expect("encoding failed");
    assert_eq!(chunks.len(), 1);
}

#[test]
fn test_codes_with_framing_bytes() {
    // Literal codes 10 and 92 serialize with a newline or marker low byte.
    let data = b"\n\n\\\\\n\\\n\\".repeat(50);
    let framed = compress_framed(&data, &config(2)).expect("encoding failed");

    for line in lines(&framed) {
        let line = line.expect("terminated line");
        let codes = frame::decode_line(line).expect("valid line");
        assert!(!codes.is_empty());
    }

    let decoded = parallel_decode_with(&framed, &config(2)).expect("decoding failed");
    assert_eq!(decoded, data);
}

#[test]
fn test_truncated_stream_fails() {
    let framed = compress_framed(TEXT.as_bytes(), &config(4)).expect("encoding failed");
    let truncated = &framed[..framed.len() - 1];

    match parallel_decode(truncated) {
        Err(LzwError::Chunk { index, source }) => {
            assert_eq!(index, 3);
            assert!(matches!(*source, LzwError::UnterminatedLine { .. }));
        }
        other => panic!("expected chunk error, got {other:?}"),
    }
}

#[test]
fn test_corrupt_chunk_fails_whole_decode() {
    let mut chunks = parallel_encode_with(TEXT.as_bytes(), &config(4)).expect("encoding failed");
    chunks[2][0] = 4000;
    let framed = frame::frame(&chunks);

    match parallel_decode_with(&framed, &config(4)) {
        Err(LzwError::Chunk { index, source }) => {
            assert_eq!(index, 2);
            assert!(matches!(
                *source,
                LzwError::CorruptStream {
                    code: 4000,
                    position: 0,
                    ..
                }
            ));
        }
        other => panic!("expected chunk error, got {other:?}"),
    }
}

#[test]
fn test_zero_workers_rejected() {
    assert!(matches!(
        parallel_decode_with(b"", &ParallelConfig::new(0)),
        Err(LzwError::InvalidWorkerCount(0))
    ));
}
