//! Performance benchmarks for the core bit-level I/O.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use packlab_core::bitstream::{BitReader, BitWriter};
use std::hint::black_box;
use std::io::Cursor;

fn bench_bitwriter(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitwriter");
    group.throughput(Throughput::Bytes(64 * 1024));

    group.bench_function("write_bits_mixed", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(64 * 1024);
            let mut writer = BitWriter::new(&mut out);
            for i in 0..64 * 1024u64 {
                let count = 1 + (i % 13) as u8;
                writer.write_bits(black_box(i), count).unwrap();
            }
            writer.flush().unwrap();
            black_box(out);
        });
    });

    group.finish();
}

fn bench_bitreader(c: &mut Criterion) {
    let mut data = Vec::new();
    {
        let mut writer = BitWriter::new(&mut data);
        for i in 0..64 * 1024u64 {
            writer.write_bits(i, 1 + (i % 13) as u8).unwrap();
        }
        writer.flush().unwrap();
    }

    let mut group = c.benchmark_group("bitreader");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("read_bits_mixed", |b| {
        b.iter(|| {
            let mut reader = BitReader::new(Cursor::new(&data));
            for i in 0..64 * 1024u64 {
                let count = 1 + (i % 13) as u8;
                black_box(reader.read_bits(count).unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_bitwriter, bench_bitreader);
criterion_main!(benches);
