// fxlex - A lexical scanner for the fx drawing-macro language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.


//! Performance benchmarks for the fx lexer.
//!
//! Run with: cargo bench
//!
//! Results are saved to target/criterion/ with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fxlex::{Lexer, ReaderSource, StrSource, TokenKind};

// ============================================================================
// Benchmark Inputs
// ============================================================================

const MACROS: &str = include_str!("../tests/fixtures/valid/macros.fx");

/// The macro program repeated `times` times.
fn repeated(times: usize) -> String {
    MACROS.repeat(times)
}

// ============================================================================
// Lexer Benchmarks
// ============================================================================

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for (name, times) in [("small", 1), ("medium", 20), ("large", 200)] {
        let source = repeated(times);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("str", name), &source, |b, src| {
            b.iter(|| fxlex::tokenize(black_box(src)))
        });
        group.bench_with_input(BenchmarkId::new("reader", name), &source, |b, src| {
            b.iter(|| {
                Lexer::new(ReaderSource::new(black_box(src.as_bytes())), "bench")
                    .collect::<fxlex::Result<Vec<_>>>()
            })
        });
    }

    group.finish();
}

fn bench_peek(c: &mut Criterion) {
    let source = repeated(20);
    let mut group = c.benchmark_group("peek");
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("peek_then_next", |b| {
        b.iter(|| {
            let mut lexer = Lexer::new(StrSource::new(black_box(&source)), "bench");
            loop {
                let _ = lexer.peek_token();
                match lexer.next_token() {
                    Ok(token) if token.is_eof() => break,
                    _ => {}
                }
            }
        })
    });

    group.finish();
}

fn bench_recovery(c: &mut Criterion) {
    let source = repeated(20);
    let mut group = c.benchmark_group("recovery");

    group.bench_function("skip_statements", |b| {
        b.iter(|| {
            let mut lexer = Lexer::new(StrSource::new(black_box(&source)), "bench");
            while let Ok(token) = lexer.skip_until(&[TokenKind::Semicolon]) {
                if token.is_eof() {
                    break;
                }
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_peek, bench_recovery);
criterion_main!(benches);
