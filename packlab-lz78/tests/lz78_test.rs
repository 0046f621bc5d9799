//! Integration tests for the LZ78 codec.

use packlab_lz78::{CodecError, compress, compress_file, decompress, decompress_file};

/// Reproducible pseudo-random bytes (linear congruential generator).
fn lcg_bytes(len: usize, mut seed: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(len);
    for _ in 0..len {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

fn assert_roundtrip(input: &[u8]) {
    let compressed = compress(input).expect("compress");
    let decompressed = decompress(&compressed).expect("decompress");
    assert_eq!(decompressed, input);
}

#[test]
fn roundtrip_corpus() {
    assert_roundtrip(b"");
    assert_roundtrip(b"A");
    assert_roundtrip(b"AB");
    assert_roundtrip(b"ABABABABAB");
    assert_roundtrip(b"TOBEORNOTTOBEORTOBEORNOT");
    assert_roundtrip(&vec![0u8; 2048]);
    assert_roundtrip(&(0..=255u8).collect::<Vec<_>>());
    assert_roundtrip(&lcg_bytes(10_000, 0xFEED_FACE));
    assert_roundtrip(&b"The quick brown fox jumps over the lazy dog. ".repeat(40));
}

#[test]
fn highly_repetitive_input_compresses() {
    let input = vec![b'A'; 10_000];
    let compressed = compress(&input).unwrap();
    assert!(compressed.len() < input.len());
    assert_eq!(decompress(&compressed).unwrap(), input);
}

#[test]
fn dictionary_ids_are_dense() {
    // Every pair's parent id must have been assigned before it is used;
    // with ids handed out sequentially this means parent < 1 + pair index
    // (the root is id 0 and pair i creates id i + 1).
    let input = b"she sells sea shells by the sea shore ".repeat(20);
    let compressed = compress(&input).unwrap();

    let payload = &compressed[4..];
    for (i, pair) in payload.chunks_exact(5).enumerate() {
        let parent = u32::from_le_bytes(pair[0..4].try_into().unwrap()) as usize;
        assert!(parent <= i, "pair {i} references future id {parent}");
    }

    let dict_size = u32::from_le_bytes(compressed[0..4].try_into().unwrap()) as usize;
    assert_eq!(dict_size, 1 + payload.len() / 5);
}

#[test]
fn truncated_stream_is_rejected() {
    let compressed = compress(b"a longer input producing several pairs").unwrap();

    // Cut mid-pair: removing 2 bytes from a pair-aligned stream leaves a
    // 3-byte tail, which is neither a pair nor a pending-phrase record.
    let aligned_len = 4 + (compressed.len() - 4) / 5 * 5;
    let result = decompress(&compressed[..aligned_len - 2]);
    assert!(matches!(result, Err(CodecError::CorruptedData { .. })));
}

#[test]
fn file_roundtrip() {
    let dir = std::env::temp_dir();
    let input_path = dir.join("packlab_lz78_test_input");
    let packed_path = dir.join("packlab_lz78_test_packed");
    let output_path = dir.join("packlab_lz78_test_output");

    let original = b"dictionaries all the way down ".repeat(128);
    std::fs::write(&input_path, &original).unwrap();

    compress_file(&input_path, &packed_path).unwrap();

    // The header must carry the patched final count, not the placeholder.
    let packed = std::fs::read(&packed_path).unwrap();
    assert_ne!(&packed[0..4], &0u32.to_le_bytes());

    decompress_file(&packed_path, &output_path).unwrap();
    assert_eq!(std::fs::read(&output_path).unwrap(), original);

    for path in [&input_path, &packed_path, &output_path] {
        let _ = std::fs::remove_file(path);
    }
}

#[test]
fn missing_input_file_surfaces_io_error() {
    let dir = std::env::temp_dir();
    let result = compress_file(
        dir.join("packlab_lz78_does_not_exist"),
        dir.join("packlab_lz78_unused_output"),
    );
    assert!(matches!(result, Err(CodecError::Io(_))));
}
