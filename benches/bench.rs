use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use sort_search_rs::menu::SearchCase;
use sort_search_rs::registry::{search_registry, sort_registry};
use sort_search_rs::sorts;
use sort_test_tools::patterns;

// The quadratic sorts make anything much larger painfully slow.
const SORT_SIZES: [usize; 4] = [8, 64, 512, 4_096];

const SEARCH_SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn bench_sorts(c: &mut Criterion) {
    let pattern_providers: [(&str, fn(usize) -> Vec<i32>); 5] = [
        ("random", patterns::random),
        ("random_scaled", |len| {
            patterns::random_uniform(len, 0..=i32::try_from(len * 10).unwrap())
        }),
        ("random_zipf", |len| patterns::random_zipf(len, 1.0)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
    ];

    for (pattern_name, pattern_fn) in pattern_providers {
        let mut group = c.benchmark_group(format!("sort-{pattern_name}"));

        for len in SORT_SIZES {
            let input = pattern_fn(len);
            group.throughput(Throughput::Elements(len as u64));

            for (name, strategy) in sort_registry().iter() {
                group.bench_with_input(BenchmarkId::new(name, len), &input, |b, input| {
                    b.iter_batched_ref(
                        || input.clone(),
                        |v| strategy.run(black_box(v)),
                        BatchSize::SmallInput,
                    )
                });
            }
        }

        group.finish();
    }
}

fn bench_searches(c: &mut Criterion) {
    for case in SearchCase::ALL {
        let mut group = c.benchmark_group(format!("search-{}", case.label()));

        for len in SEARCH_SIZES {
            let unsorted = patterns::random_uniform(len, 0..=i32::try_from(len * 10).unwrap());
            let target = unsorted[case.target_index(len)];

            let mut sorted = unsorted.clone();
            sorts::quick::sort(&mut sorted);

            for (name, strategy) in search_registry().iter() {
                let input = if strategy.requires_sorted() {
                    &sorted
                } else {
                    &unsorted
                };

                group.bench_function(BenchmarkId::new(name, len), |b| {
                    b.iter(|| strategy.run(black_box(input), black_box(target)))
                });
            }
        }

        group.finish();
    }
}

criterion_group!(benches, bench_sorts, bench_searches);
criterion_main!(benches);
