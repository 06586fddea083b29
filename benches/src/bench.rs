//! Benchmarks of the literate regex pipeline
use criterion::{criterion_group, criterion_main, Criterion};

use literate_regex::parser::{describe, normalize};
use literate_regex_benches::{build_haystack, build_source};

/// Bench the text pipeline on sources of different sizes
fn bench_describe(c: &mut Criterion) {
    for nb_fields in [1, 10, 100] {
        let src = build_source(nb_fields);

        let mut group = c.benchmark_group(format!("Describe {nb_fields} fields"));
        group.bench_with_input("normalize", &src, |b, src| b.iter(|| normalize(src)));
        group.bench_with_input("describe", &src, |b, src| {
            b.iter(|| describe(src).unwrap())
        });
        group.finish();
    }
}

/// Bench compilation and iteration over matches
fn bench_exec(c: &mut Criterion) {
    for nb_fields in [1, 10] {
        let src = build_source(nb_fields).replace("/ d m", "/ d g m");
        let haystack = build_haystack(nb_fields, 1000);

        let mut group = c.benchmark_group(format!("Exec {nb_fields} fields"));
        group.sample_size(20);
        group.bench_with_input("compile", &src, |b, src| {
            b.iter_with_large_drop(|| literate_regex::compile(src).unwrap())
        });

        let pattern = literate_regex::compile(&src).unwrap();
        group.bench_with_input("exec_iter", &haystack, |b, haystack| {
            b.iter(|| pattern.exec_iter(haystack).count())
        });
        group.finish();
    }
}

criterion_group!(benches, bench_describe, bench_exec);
criterion_main!(benches);
