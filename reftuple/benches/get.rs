use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion,
};
use reftuple::prelude::*;

fn bench_get(g: &mut BenchmarkGroup<WallTime>) {
    let native = (1u64, String::from("native"), 3u8);
    let t = make_tuple((1u64, String::from("tuple"), 3u8));
    g.bench_function("get/native", |b| {
        b.iter(|| black_box(&native).0 + u64::from(black_box(&native).2))
    });
    g.bench_function("get/tuple", |b| {
        b.iter(|| *black_box(&t).get::<0>() + u64::from(*black_box(&t).get::<2>()))
    });
}

fn bench_assign(g: &mut BenchmarkGroup<WallTime>) {
    let source = (7u64, 8u32, 9u16);
    g.bench_function("assign/native", |b| {
        let (mut x, mut y, mut z) = (0u64, 0u32, 0u16);
        b.iter(|| {
            let (p, q, r) = black_box(source);
            x = p;
            y = q;
            z = r;
            black_box((x, y, z))
        })
    });
    g.bench_function("assign/tuple", |b| {
        let (mut x, mut y, mut z) = (0u64, 0u32, 0u16);
        let source = make_tuple(source);
        b.iter(|| {
            let _ = tie((&mut x, &mut y, &mut z)).assign(black_box(&source));
            black_box((x, y, z))
        })
    });
}

fn bench_swap(g: &mut BenchmarkGroup<WallTime>) {
    g.bench_function("swap/native", |b| {
        let (mut l, mut r) = ((1u64, 2u32), (3u64, 4u32));
        b.iter(|| {
            std::mem::swap(black_box(&mut l), black_box(&mut r));
        })
    });
    g.bench_function("swap/tuple", |b| {
        let (mut l, mut r) = (make_tuple((1u64, 2u32)), make_tuple((3u64, 4u32)));
        b.iter(|| {
            reftuple::swap(black_box(&mut l), black_box(&mut r));
        })
    });
}

fn bench_compare(g: &mut BenchmarkGroup<WallTime>) {
    let (a, s) = (5u64, String::from("compare"));
    let owned = make_tuple((5u64, String::from("compare")));
    g.bench_function("eq/native", |b| {
        let native = (5u64, String::from("compare"));
        b.iter(|| black_box(&native).0 == a && black_box(&native).1 == s)
    });
    g.bench_function("eq/tuple", |b| {
        let refs = forward_as_tuple((&a, &s));
        b.iter(|| black_box(&owned) == black_box(&refs))
    });
}

fn bench_all(c: &mut Criterion) {
    let mut g = c.benchmark_group("reftuple");
    bench_get(&mut g);
    bench_assign(&mut g);
    bench_swap(&mut g);
    bench_compare(&mut g);
    g.finish();
}

criterion_group!(benches, bench_all);
criterion_main!(benches);
