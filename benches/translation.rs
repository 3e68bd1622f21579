use criterion::{Criterion, criterion_group, criterion_main};

use dna_translator::sequence::sanitize;
use dna_translator::translation::{translate, translate_sequence};

// 12 kb of mixed-case sequence with line breaks every 60 bases.
fn fasta_like_input() -> String {
    let unit = "atgGCCattGTAatgGGCcgcTGAaagGGTaga";
    let bases: String = unit.repeat(12_000 / unit.len());
    bases
        .as_bytes()
        .chunks(60)
        .map(|line| format!("{}\n", String::from_utf8_lossy(line)))
        .collect()
}

fn bench_sanitize(c: &mut Criterion) {
    let raw = fasta_like_input();
    c.bench_function("sanitize (12 kb)", |b| {
        b.iter(|| {
            let clean = sanitize(&raw);
            assert!(!clean.is_empty());
        });
    });
}

fn bench_translate(c: &mut Criterion) {
    let raw = fasta_like_input();
    let clean = sanitize(&raw);

    c.bench_function("translate_sequence (12 kb)", |b| {
        b.iter(|| {
            let t = translate_sequence(&clean).unwrap();
            assert_eq!(t.records.len(), clean.len() / 3);
        });
    });

    c.bench_function("translate raw (12 kb)", |b| {
        b.iter(|| translate(&raw));
    });
}

criterion_group!(benches, bench_sanitize, bench_translate);
criterion_main!(benches);
