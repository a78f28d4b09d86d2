use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kana_core::transliterate::transliterate;

const INPUTS: &[&str] = &[
    "ka",
    "kyouhaiitenkidesune",
    "watashihanihongowobenkyoushiteimasu",
    "kあnじ",
];

fn bench_transliterate(c: &mut Criterion) {
    let buffers: Vec<Vec<char>> = INPUTS.iter().map(|s| s.chars().collect()).collect();

    let mut group = c.benchmark_group("transliterate");
    for (input, keys) in INPUTS.iter().zip(&buffers) {
        group.bench_function(*input, |b| b.iter(|| transliterate(black_box(keys))));
    }
    group.finish();
}

/// Typing a word one key at a time re-renders the whole buffer per key.
fn bench_incremental_typing(c: &mut Criterion) {
    let word: Vec<char> = "toukyoutokkyokyokakyoku".chars().collect();
    c.bench_function("incremental_typing", |b| {
        b.iter(|| {
            for end in 1..=word.len() {
                black_box(transliterate(&word[..end]));
            }
        })
    });
}

criterion_group!(benches, bench_transliterate, bench_incremental_typing);
criterion_main!(benches);
