use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use spectral_engine::{dft, fft, Signal};

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");
    for &n in &[256usize, 1024] {
        let samples: Vec<f64> = (0..n).map(|i| (i as f64 * 0.1).sin()).collect();
        let signal = Signal::from_real(&samples);
        group.bench_with_input(BenchmarkId::new("dft", n), &signal, |b, s| {
            b.iter(|| dft(s))
        });
        group.bench_with_input(BenchmarkId::new("fft", n), &signal, |b, s| {
            b.iter(|| fft(s).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transforms);
criterion_main!(benches);
