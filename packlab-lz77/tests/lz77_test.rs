//! Integration tests for the LZ77 codec.

use packlab_lz77::{
    CodecError, LOOK_AHEAD_SIZE, WINDOW_SIZE, compress, compress_file, decompress,
    decompress_file,
};

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
    assert_roundtrip(b"ABABABABAB");
    assert_roundtrip(&vec![0u8; 4096]);
    assert_roundtrip(&b"The quick brown fox jumps over the lazy dog. ".repeat(40));
    assert_roundtrip(&lcg_bytes(5000, 0xDEAD_BEEF));
}

#[test]
fn highly_repetitive_input_compresses() {
    let input = vec![b'A'; 10_000];
    let compressed = compress(&input).unwrap();
    assert!(compressed.len() < input.len());
    assert_eq!(decompress(&compressed).unwrap(), input);
}

#[test]
fn emitted_triples_respect_window_bounds() {
    let input = lcg_bytes(2000, 42)
        .iter()
        .map(|b| b % 4) // few distinct values, plenty of matches
        .collect::<Vec<u8>>();
    let compressed = compress(&input).unwrap();

    for triple in compressed[WINDOW_SIZE..].chunks_exact(3) {
        assert!((triple[0] as usize) <= WINDOW_SIZE);
        assert!((triple[1] as usize) <= LOOK_AHEAD_SIZE);
    }
}

#[test]
fn truncated_stream_is_rejected() {
    let input = b"some input long enough to produce a couple of triples ".repeat(10);
    let compressed = compress(&input).unwrap();
    assert!(compressed.len() > WINDOW_SIZE + 3);

    // Cut inside a triple.
    let cut = compressed.len() - 1;
    assert!(matches!(
        decompress(&compressed[..cut]),
        Err(CodecError::CorruptedData { .. })
    ));
}

#[test]
fn file_roundtrip() {
    let dir = std::env::temp_dir();
    let input_path = dir.join("packlab_lz77_test_input");
    let packed_path = dir.join("packlab_lz77_test_packed");
    let output_path = dir.join("packlab_lz77_test_output");

    let original = b"sliding windows all the way down ".repeat(64);
    std::fs::write(&input_path, &original).unwrap();

    compress_file(&input_path, &packed_path).unwrap();
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
        dir.join("packlab_lz77_does_not_exist"),
        dir.join("packlab_lz77_unused_output"),
    );
    assert!(matches!(result, Err(CodecError::Io(_))));
}
