// Criterion benchmark for the Cyrillic → Töte converter:
//  - per-case throughput based on actual input size
//  - a dedicated zero-copy case (script-free input skips every stage)
// Run with `cargo bench --bench convert`.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use qazarab::Qazarab;
use std::hint::black_box;

const SENTENCE: &str =
    "Біз Қазақстан елінде тұрамыз. Білім мен ғылым — дамудың кілті, сондықтан әр іс маңызды!";

fn bench_convert(c: &mut Criterion) {
    let converter = Qazarab::new();
    let paragraph = SENTENCE.repeat(32);
    let latin = "the quick brown fox jumps over the lazy dog ".repeat(32);

    let mut group = c.benchmark_group("convert");

    group.throughput(Throughput::Bytes(SENTENCE.len() as u64));
    group.bench_function("sentence", |b| {
        b.iter(|| converter.convert(black_box(SENTENCE)).unwrap())
    });

    group.throughput(Throughput::Bytes(paragraph.len() as u64));
    group.bench_function("paragraph", |b| {
        b.iter(|| converter.convert(black_box(paragraph.as_str())).unwrap())
    });

    group.throughput(Throughput::Bytes(latin.len() as u64));
    group.bench_function("pass_through_zero_copy", |b| {
        b.iter(|| converter.convert(black_box(latin.as_str())).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
