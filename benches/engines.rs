use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use coin_strip::engines::{HeuristicEngine, MoveEngine, SearchEngine};

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_move");

    for pile in [10u32, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("heuristic", pile), &pile, |b, &pile| {
            b.iter(|| HeuristicEngine.best_move(black_box(pile)))
        });
        group.bench_with_input(BenchmarkId::new("search", pile), &pile, |b, &pile| {
            b.iter(|| SearchEngine.best_move(black_box(pile)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
