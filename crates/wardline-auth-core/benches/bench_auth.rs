//! Benchmarks for the auth hot paths: password verification runs on every
//! login, token validation on every protected request.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use wardline_auth_core::{hash_password, verify_password, AuthConfig, TokenIssuer};
use wardline_types::{Role, UserId};

fn bench_password(c: &mut Criterion) {
    let hash = hash_password("Secret123!").unwrap();

    let mut group = c.benchmark_group("password");
    // Argon2id is deliberately slow; keep sample counts low
    group.sample_size(10);

    group.bench_function("hash", |b| {
        b.iter(|| hash_password(black_box("Secret123!")).unwrap());
    });

    group.bench_function("verify", |b| {
        b.iter(|| verify_password(black_box("Secret123!"), black_box(&hash)).unwrap());
    });

    group.finish();
}

fn bench_token(c: &mut Criterion) {
    let config = AuthConfig::try_new("bench-signing-secret-0123456789abcdef")
        .unwrap()
        .with_token_lifetime(Duration::from_secs(3600));
    let issuer = TokenIssuer::new(&config);
    let user_id = UserId::new();
    let token = issuer.issue(user_id, "bench-user", Role::Nurse).unwrap();

    let mut group = c.benchmark_group("token");

    group.bench_function("issue", |b| {
        b.iter(|| issuer.issue(black_box(user_id), black_box("bench-user"), Role::Nurse));
    });

    group.bench_function("validate", |b| {
        b.iter(|| issuer.validate(black_box(&token)));
    });

    group.finish();
}

criterion_group!(benches, bench_password, bench_token);
criterion_main!(benches);
