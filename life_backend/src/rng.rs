//! Randomness for the one-time board seeding.
//!
//! Seed bytes come from the management canister VRF, with a hash of the
//! current time and caller as fallback. Samples are expanded from the seed
//! by hashing a running counter, so a given seed always produces the same
//! sequence and seeding stays reproducible in tests.

use ic_cdk::management_canister::raw_rand;
use sha2::{Digest, Sha256};

/// Expands a 32-byte seed into a stream of uniform samples in [0, 1).
#[derive(Clone, Debug)]
pub struct UnitSampler {
    seed: [u8; 32],
    counter: u64,
}

impl UnitSampler {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self { seed, counter: 0 }
    }

    /// Next uniform sample in [0, 1).
    pub fn next_unit(&mut self) -> f64 {
        let mut hasher = Sha256::new();
        hasher.update(self.seed);
        hasher.update(self.counter.to_be_bytes());
        let hash = hasher.finalize();
        self.counter += 1;

        let raw = u64::from_be_bytes(hash[0..8].try_into().unwrap());
        (raw >> 11) as f64 / (1u64 << 53) as f64 // top 53 bits = f64 mantissa width
    }
}

/// Obtain a 32-byte seed from the management canister VRF.
///
/// Falls back to hashing the current time and caller principal when the VRF
/// call fails.
pub async fn vrf_seed() -> [u8; 32] {
    let random_bytes = match raw_rand().await {
        Ok(bytes) => bytes,
        Err(_) => {
            // Fallback: combine timestamp with caller principal
            let time = ic_cdk::api::time();
            let caller = ic_cdk::api::msg_caller();
            let mut hasher = Sha256::new();
            hasher.update(time.to_be_bytes());
            hasher.update(caller.as_slice());
            hasher.finalize().to_vec()
        }
    };

    let mut hasher = Sha256::new();
    hasher.update(&random_bytes);
    hasher.finalize()[0..32].try_into().unwrap()
}
