use criterion::{Criterion, black_box, criterion_group, criterion_main};

use hylambda::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn build_list(len: usize) -> Value {
    // Seeded so every run walks the same list.
    let mut rng = ChaCha20Rng::seed_from_u64(0x42);
    from_values((0..len).map(|_| from_usize(rng.random_range(0..8usize))))
}

fn bench_numerals(c: &mut Criterion) {
    c.bench_function("decode_mult_12x12", |b| {
        let m = from_usize(12);
        b.iter(|| decode(black_box(&mult(&m, &m))))
    });

    c.bench_function("equal_16_16", |b| {
        let m = from_usize(16);
        b.iter(|| decode_bool(black_box(&equal(&m, &m))))
    });

    c.bench_function("factorial_5", |b| {
        let fact = factorial();
        b.iter(|| decode(black_box(&fact.apply(from_usize(5)))))
    });
}

fn bench_lists(c: &mut Criterion) {
    let list = build_list(64);
    let plus = curry2(|acc, x| add(&acc, &x));
    let double = Value::new(|n| add(&n, &n));
    let nonzero = Value::new(|n| not(&is_zero(&n)));

    c.bench_function("fold_sum_64", |b| {
        b.iter(|| decode(black_box(&fold(&plus, &zero(), &list))))
    });

    c.bench_function("map_filter_64", |b| {
        let config = EvalConfig::default();
        b.iter(|| {
            let out = filter(&nonzero, &map(&double, black_box(&list)));
            to_vec(&out, &config).map(|v| v.len())
        })
    });
}

criterion_group!(benches, bench_numerals, bench_lists);
criterion_main!(benches);
