use criterion::{criterion_group, criterion_main, Criterion};

use mulligan::expand::Expander;
use mulligan::symbol::Symbol;

fn symbols(joined: &str) -> Vec<Symbol> {
    joined.split(',').map(Symbol::from).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let deck = symbols("a,a,a,a,a,a,ae,ae,ae,aef,aew,e,e,e,e,e,e,e,e,e,efw,ew,ew,ew,w,w,w,x,x,x");
    let criteria = symbols("a,e,e,w");

    // sanity check
    let set = Expander::default().expand(&criteria, &deck, None).unwrap();
    assert!(!set.is_empty());

    c.bench_function("cri_expand_reference_deck", |b| {
        b.iter(|| {
            Expander::default().expand(&criteria, &deck, None).unwrap();
        });
    });

    c.bench_function("cri_expand_padded_draw_5", |b| {
        let expander = Expander::default().with_safety_bound(100_000);
        b.iter(|| {
            expander.expand(&criteria, &deck, Some(5)).unwrap();
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
