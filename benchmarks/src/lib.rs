//! Criterion benchmarks for the builtin layer live in `benches/`.
