use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use monkey::evaluator::BuiltinId;
use monkey::{Environment, Function, Interpreter, Object, call_builtin, lookup_builtin};
use std::io;
use std::rc::Rc;

const SIZES: [usize; 3] = [10, 1_000, 100_000];

fn integers(size: usize) -> Object {
    Object::array((0..size as i64).map(Object::Integer))
}

fn increment() -> Object {
    Object::Function(Rc::new(Function::new(["x"], Environment::new(), |env, _| {
        match env.get("x") {
            Some(Object::Integer(n)) => Object::Integer(n + 1),
            _ => Object::Null,
        }
    })))
}

fn is_odd() -> Object {
    Object::Function(Rc::new(Function::new(["x"], Environment::new(), |env, _| {
        Object::Boolean(matches!(env.get("x"), Some(Object::Integer(n)) if n % 2 != 0))
    })))
}

// ============================================================================
// Registry Benchmarks
// ============================================================================

fn benchmark_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    group.bench_function("registered", |b| {
        b.iter(|| lookup_builtin(black_box("filter")));
    });
    group.bench_function("unknown", |b| {
        b.iter(|| lookup_builtin(black_box("reduce")));
    });

    group.finish();
}

// ============================================================================
// Sequence Benchmarks
// ============================================================================

fn benchmark_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");
    let mut interpreter = Interpreter::with_output(io::sink());

    for size in SIZES {
        let array = integers(size);

        group.bench_with_input(BenchmarkId::new("push", size), &array, |b, array| {
            b.iter(|| {
                call_builtin(
                    BuiltinId::Push,
                    &[black_box(array.clone()), Object::Integer(0)],
                    &mut interpreter,
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("rest", size), &array, |b, array| {
            b.iter(|| call_builtin(BuiltinId::Rest, &[black_box(array.clone())], &mut interpreter));
        });

        group.bench_with_input(BenchmarkId::new("len", size), &array, |b, array| {
            b.iter(|| call_builtin(BuiltinId::Len, &[black_box(array.clone())], &mut interpreter));
        });
    }

    group.finish();
}

// ============================================================================
// Higher-order Benchmarks
// ============================================================================

fn benchmark_higher_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("higher_order");
    let mut interpreter = Interpreter::with_output(io::sink());
    let increment = increment();
    let is_odd = is_odd();

    for size in SIZES {
        let array = integers(size);

        group.bench_with_input(BenchmarkId::new("map", size), &array, |b, array| {
            b.iter(|| {
                call_builtin(
                    BuiltinId::Map,
                    &[black_box(array.clone()), increment.clone()],
                    &mut interpreter,
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("filter", size), &array, |b, array| {
            b.iter(|| {
                call_builtin(
                    BuiltinId::Filter,
                    &[black_box(array.clone()), is_odd.clone()],
                    &mut interpreter,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_lookup,
    benchmark_sequence,
    benchmark_higher_order
);
criterion_main!(benches);
