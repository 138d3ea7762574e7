//! Benchmarks for postfix compilation and NFA matching.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use thompson::{compile, NfaBuffers};

/// a?^n a^n in postfix, the pattern that sends backtracking engines
/// exponential. Simulation here stays linear in n per input character.
fn pathological_postfix(n: usize) -> String {
    let mut postfix = String::from("a?");
    for _ in 1..n {
        postfix.push_str("a?.");
    }
    for _ in 0..n {
        postfix.push_str("a.");
    }
    postfix
}

fn bench_compile(c: &mut Criterion) {
    let postfix = pathological_postfix(25);

    c.bench_function("compile_pathological_25", |b| {
        b.iter(|| compile(black_box(&postfix)).unwrap())
    });

    c.bench_function("compile_alternation", |b| {
        b.iter(|| compile(black_box("abcd|||efgh|||.")).unwrap())
    });
}

fn bench_literal_run(c: &mut Criterion) {
    let nfa = compile("a+b.").unwrap();
    let input = format!("{}b", "a".repeat(1000));
    let mut bufs = NfaBuffers::with_capacity(nfa.state_count());

    c.bench_function("match_long_run", |b| {
        b.iter(|| nfa.is_match_with(black_box(&input), &mut bufs))
    });
}

fn bench_pathological(c: &mut Criterion) {
    let n = 25;
    let nfa = compile(&pathological_postfix(n)).unwrap();
    let input = "a".repeat(n);
    let mut bufs = NfaBuffers::with_capacity(nfa.state_count());

    c.bench_function("match_pathological_25", |b| {
        b.iter(|| nfa.is_match_with(black_box(&input), &mut bufs))
    });
}

fn bench_buffer_reuse(c: &mut Criterion) {
    let nfa = compile("ab|*c.").unwrap();
    let mut bufs = NfaBuffers::with_capacity(nfa.state_count());

    c.bench_function("match_fresh_buffers", |b| {
        b.iter(|| nfa.is_match(black_box("ababc")))
    });

    c.bench_function("match_reused_buffers", |b| {
        b.iter(|| nfa.is_match_with(black_box("ababc"), &mut bufs))
    });
}

criterion_group!(
    benches,
    bench_compile,
    bench_literal_run,
    bench_pathological,
    bench_buffer_reuse
);
criterion_main!(benches);
