use rand::RngExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded generator so failures reproduce
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Uniform samples in [-1, 1)
pub fn random_sequence(rng: &mut ChaCha8Rng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.random::<f64>() * 2.0 - 1.0).collect()
}

/// Length in [min, max]
pub fn random_len(rng: &mut ChaCha8Rng, min: usize, max: usize) -> usize {
    min + (rng.random::<u32>() as usize) % (max - min + 1)
}
