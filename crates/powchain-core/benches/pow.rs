use criterion::{criterion_group, criterion_main, Criterion};
use powchain_core::{mine, Difficulty, ProofOfWork};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_pow(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let previous_hash: [u8; 32] = rng.gen();
    let data: Vec<u8> = (0..256).map(|_| rng.gen()).collect();
    let difficulty = Difficulty::new(16).expect("valid difficulty");

    let mut group = c.benchmark_group("mine_block_difficulty_16");
    group.sample_size(10);

    group.bench_function("sequential", |b| {
        let mut timestamp = 1_600_000_000i64;
        b.iter(|| {
            timestamp += 1;
            let pow = ProofOfWork::new(&previous_hash, &data, timestamp, difficulty);
            pow.run().expect("nonce found")
        });
    });

    group.bench_function("parallel", |b| {
        let mut timestamp = 1_600_000_000i64;
        b.iter(|| {
            timestamp += 1;
            let pow = ProofOfWork::new(&previous_hash, &data, timestamp, difficulty);
            mine::mine_parallel(&pow).expect("nonce found")
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pow);
criterion_main!(benches);
