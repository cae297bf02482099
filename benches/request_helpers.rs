use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use dynqr::analytics::ScanRecord;
use dynqr::api::services::RedirectService;
use dynqr::utils::generate_random_code;

fn sample_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in [
        ("user-agent", "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"),
        ("referer", "https://poster.example/campaign"),
        ("x-forwarded-for", "203.0.113.9, 10.0.0.1, 10.0.0.2"),
    ] {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    headers
}

fn bench_scan_record(c: &mut Criterion) {
    let headers = sample_headers();
    let empty = HeaderMap::new();

    let mut group = c.benchmark_group("scan_record");
    group.bench_function("from_headers_full", |b| {
        b.iter(|| ScanRecord::from_headers(black_box("id-1"), black_box(&headers)))
    });
    group.bench_function("from_headers_empty", |b| {
        b.iter(|| ScanRecord::from_headers(black_box("id-1"), black_box(&empty)))
    });
    group.finish();
}

fn bench_extract_short_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_short_code");
    group.bench_function("single", |b| {
        b.iter(|| RedirectService::extract_short_code(black_box("code=AbCd1234")))
    });
    group.bench_function("noisy", |b| {
        b.iter(|| {
            RedirectService::extract_short_code(black_box(
                "utm_source=print&utm_medium=qr&code=AbCd1234&x=%20y",
            ))
        })
    });
    group.bench_function("missing", |b| {
        b.iter(|| RedirectService::extract_short_code(black_box("utm_source=print")))
    });
    group.finish();
}

fn bench_generate_code(c: &mut Criterion) {
    c.bench_function("generate_random_code_8", |b| {
        b.iter(|| generate_random_code(black_box(8)))
    });
}

criterion_group!(
    benches,
    bench_scan_record,
    bench_extract_short_code,
    bench_generate_code
);
criterion_main!(benches);
