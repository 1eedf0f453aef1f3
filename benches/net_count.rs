use std::ffi::CString;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use sp_count::{Variant, data, scalar};

pub fn criterion_benchmark(c: &mut Criterion) {
    let inputs = [
        ("random printable", data::random_printable(data::BENCH_LEN)),
        ("random sp", data::random_sp(data::BENCH_LEN)),
    ];

    let mut group = c.benchmark_group("net count");
    group.throughput(Throughput::Bytes(data::BENCH_LEN as u64));
    for (input_name, buf) in &inputs {
        for &variant in Variant::ALL {
            group.bench_with_input(BenchmarkId::new(variant.name(), input_name), buf, |b, buf| {
                b.iter(|| variant.count(buf))
            });
        }

        let s = CString::new(buf.clone()).expect("fixtures contain no zero byte");
        group.bench_with_input(BenchmarkId::new("cstr", input_name), &s, |b, s| {
            b.iter(|| scalar::count_cstr(s))
        });
        group.bench_with_input(BenchmarkId::new("cstr-switch", input_name), &s, |b, s| {
            b.iter(|| scalar::count_cstr_switch(s))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
