//! Benchmarks for the missing-key resolution path using divan

use dynamicdict::{DynamicDict, Factory};

fn main() {
    divan::main();
}

#[divan::bench]
fn resolve_present_key(bencher: divan::Bencher) {
    let mut dict = DynamicDict::with_factory(Factory::new("identity", |k: &u64| *k));
    dict.resolve(42).unwrap();

    bencher.bench_local(move || dict.resolve(divan::black_box(42)).map(|v| *v));
}

#[divan::bench]
fn resolve_missing_keys(bencher: divan::Bencher) {
    bencher.bench_local(|| {
        let mut dict = DynamicDict::with_factory(Factory::new("double", |k: &u64| k * 2));
        for k in 0..100u64 {
            let _ = dict.resolve(divan::black_box(k));
        }
        dict.len()
    });
}

#[divan::bench]
fn insert_lookup_plain(bencher: divan::Bencher) {
    bencher.bench_local(|| {
        let mut dict: DynamicDict<u64, u64> = DynamicDict::new();
        for k in 0..100u64 {
            dict.insert(k, k * 2);
        }
        (0..100u64).filter_map(|k| dict.get(&k).copied()).sum::<u64>()
    });
}
