use bkspell::checker::bktree::BkTree;
use bkspell::checker::distance::edit_distance;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Deterministic pseudo-words so runs are comparable.
fn corpus(n: usize) -> Vec<String> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let len = 3 + (state % 8) as usize;
            (0..len)
                .map(|i| (b'a' + ((state >> (i * 5)) % 26) as u8) as char)
                .collect()
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let words = corpus(20_000);
    let tree: BkTree = words.iter().map(String::as_str).collect();
    let queries = ["spelling", "qiuck", "teh", "dictoinary"];

    c.bench_function("bktree_search_t2", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(tree.search(black_box(q), 2));
            }
        })
    });

    c.bench_function("linear_scan_t2", |b| {
        b.iter(|| {
            for q in &queries {
                let hits = words
                    .iter()
                    .filter(|w| edit_distance(w, black_box(q)) <= 2)
                    .count();
                black_box(hits);
            }
        })
    });

    c.bench_function("bktree_build_20k", |b| {
        b.iter(|| {
            let tree: BkTree = words.iter().map(String::as_str).collect();
            black_box(tree.len())
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
