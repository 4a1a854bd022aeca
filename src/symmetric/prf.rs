use rand::Rng;

use crate::serialization::Serializable;

/// Trait to model a pseudorandom function. In the signature scheme,
/// it is used to derive the start value of each hash chain from a
/// single short secret key, addressed by epoch and chain index.
pub trait Pseudorandom {
    type Key: Copy + Send + Sync + Serializable;

    type Output: Copy + Send + Sync;

    /// Generates a random key.
    fn key_gen<R: Rng>(rng: &mut R) -> Self::Key;

    /// Applies the PRF to the key, an epoch, and a chain index.
    /// Deterministic given its inputs.
    fn apply(key: &Self::Key, epoch: u32, chain_index: u64) -> Self::Output;

    /// Function to check internal consistency of any given parameters.
    /// Expected to panic if something is wrong. Should be invoked once
    /// during setup of the scheme, not on every call.
    fn internal_consistency_check();
}

pub mod sha;
