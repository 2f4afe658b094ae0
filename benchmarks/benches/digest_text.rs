// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use hashsmith::{OutputFormat, digest_text};

fn benchmark_digest_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest_text");

    let text = "The quick brown fox jumps over the lazy dog";
    for format in OutputFormat::ALL {
        group.bench_function(format.tag(), |b| {
            b.iter(|| digest_text(black_box(text), format).expect("digest_text failed"));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_digest_text);
criterion_main!(benches);
