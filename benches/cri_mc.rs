use criterion::{criterion_group, criterion_main, Criterion};
use tinyrand::{StdRand, Wyrand};
use tinyrand_alloc::Mock;

use mulligan::expand::Expander;
use mulligan::mc;
use mulligan::symbol::Symbol;

fn symbols(joined: &str) -> Vec<Symbol> {
    joined.split(',').map(Symbol::from).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let deck = symbols("a,a,a,a,a,a,ae,ae,ae,aef,aew,e,e,e,e,e,e,e,e,e,efw,ew,ew,ew,w,w,w,x,x,x");
    let criteria = symbols("a,e,e,w");
    let set = Expander::default().expand(&criteria, &deck, None).unwrap();

    // sanity check
    let estimate = mc::simulate(&deck, &set, 1_000, 4, &mut StdRand::default());
    assert!((0.0..=100.0).contains(&estimate));

    c.bench_function("cri_mc_exact_1k_wyrand", |b| {
        let mut rand = Wyrand::default();
        b.iter(|| {
            mc::simulate(&deck, &set, 1_000, 4, &mut rand);
        });
    });

    c.bench_function("cri_mc_partial_1k_wyrand", |b| {
        let mut rand = Wyrand::default();
        b.iter(|| {
            mc::simulate(&deck, &set, 1_000, 7, &mut rand);
        });
    });

    c.bench_function("cri_mc_exact_1k_mock", |b| {
        let mut rand = Mock::default();
        b.iter(|| {
            mc::simulate(&deck, &set, 1_000, 4, &mut rand);
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
