use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use benches::corpus;
use benches::{AhoCorasick, Automaton, DynamicIndex, Searcher};

criterion_group!(benches, bench_build, bench_add, bench_search);
criterion_main!(benches);

/// Benchmarks building a searcher from scratch.
pub fn bench_build(c: &mut Criterion) {
    let mut g = c.benchmark_group("build");

    macro_rules! bench {
        ($S:ty, $n:expr) => {{
            let patterns = corpus::words($n, 3, 12, 26);
            g.bench_with_input(
                BenchmarkId::new(<$S as Searcher>::name(), $n),
                &patterns,
                |b, patterns| b.iter(|| <$S as Searcher>::build(patterns)),
            );
        }};
    }

    for n in [10, 100, 1000] {
        bench!(AhoCorasick, n);
        bench!(Automaton, n);
        bench!(DynamicIndex, n);
    }
}

/// Benchmarks adding one word to an index of `n` words.
pub fn bench_add(c: &mut Criterion) {
    let mut g = c.benchmark_group("add");

    for n in [10, 100, 1000] {
        let patterns = corpus::words(n, 3, 12, 26);
        let index = DynamicIndex::build(&patterns);
        g.bench_with_input(BenchmarkId::new("dynamatch-index", n), &index, |b, index| {
            b.iter_batched(
                || index.clone(),
                |mut index| index.add("lorem").unwrap(),
                criterion::BatchSize::SmallInput,
            )
        });
        g.bench_with_input(BenchmarkId::new("dynamatch", n), &patterns, |b, patterns| {
            b.iter(|| {
                let mut patterns = patterns.clone();
                patterns.push("lorem".into());
                Automaton::build(&patterns)
            })
        });
    }
}

/// Benchmarks scanning random text for `n` words.
pub fn bench_search(c: &mut Criterion) {
    let mut g = c.benchmark_group("search");
    let text = corpus::text(64 * 1024, 26);

    macro_rules! bench {
        ($S:ty, $n:expr) => {{
            let patterns = corpus::words($n, 3, 12, 26);
            let searcher = <$S as Searcher>::build(&patterns);
            g.bench_function(BenchmarkId::new(<$S as Searcher>::name(), $n), |b| {
                b.iter(|| <$S as Searcher>::scan(&searcher, &text))
            });
        }};
    }

    for n in [10, 100, 1000] {
        bench!(AhoCorasick, n);
        bench!(Automaton, n);
        bench!(DynamicIndex, n);
    }
}
