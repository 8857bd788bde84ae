use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dense_cholesky::{
    linalg::cholesky::{llt, rtr},
    stats::{PositiveDefiniteMat, StandardNormalMat},
    Mat,
};
use dyn_stack::{GlobalPodBuffer, PodStack};
use rand::{distributions::Distribution, rngs::StdRng, SeedableRng};

pub fn cholesky(c: &mut Criterion) {
    let rng = &mut StdRng::seed_from_u64(0);

    let mut group = c.benchmark_group("cholesky");
    for n in [4, 8, 16, 32, 64, 128, 256] {
        let a = PositiveDefiniteMat { dim: n }.sample(rng);

        group.bench_with_input(BenchmarkId::new("lower", n), &a, |b, a| {
            b.iter(|| llt::compute::cholesky_lower(a))
        });

        let mut dst = Mat::zeros(n, n);
        let mut mem = GlobalPodBuffer::new(llt::compute::cholesky_lower_req(n).unwrap());
        group.bench_with_input(BenchmarkId::new("lower-into", n), &a, |b, a| {
            b.iter(|| llt::compute::cholesky_lower_into(dst.as_mut(), a, PodStack::new(&mut mem)))
        });

        group.bench_with_input(BenchmarkId::new("upper", n), &a, |b, a| {
            b.iter(|| rtr::compute::cholesky_upper(a))
        });
    }
    group.finish();
}

pub fn solve(c: &mut Criterion) {
    let rng = &mut StdRng::seed_from_u64(0);

    let mut group = c.benchmark_group("solve");
    for n in [4, 16, 64, 256] {
        let a = PositiveDefiniteMat { dim: n }.sample(rng);
        let rhs: Mat = StandardNormalMat { nrows: n, ncols: 4 }.sample(rng);
        let (l, _) = llt::compute::cholesky_lower(&a);
        let (r, _) = rtr::compute::cholesky_upper(&a);

        let mut x = rhs.clone();
        group.bench_function(BenchmarkId::new("lower", n), |b| {
            b.iter(|| {
                x.copy_from(rhs.as_ref());
                llt::solve::solve_in_place(&l, &mut x).unwrap();
            })
        });
        group.bench_function(BenchmarkId::new("upper", n), |b| {
            b.iter(|| {
                x.copy_from(rhs.as_ref());
                rtr::solve::solve_in_place(&r, &mut x).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = cholesky, solve
);
criterion_main!(benches);
