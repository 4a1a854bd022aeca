use rand::Rng;

use crate::MESSAGE_LENGTH;
use crate::serialization::Serializable;

pub mod basic_winternitz;
pub mod target_sum;

/// Trait to model incomparable encoding schemes.
///
/// These schemes allow to encode a message into a codeword,
/// which is a list of chunks, each between 0 and BASE - 1.
/// The encoding is randomized and can fail, in which case the
/// caller is expected to resample the randomness and retry,
/// up to MAX_TRIES times.
///
/// The incomparability property states that it should be hard
/// to find two messages such that the codeword of one is
/// coordinate-wise dominated by the codeword of the other.
pub trait IncomparableEncoding {
    type Parameter: Copy + Send + Sync + Serializable;
    type Randomness: Copy + PartialEq + Send + Sync + Serializable + std::fmt::Debug;

    /// Error type for unsuccessful encoding attempts.
    type Error: std::fmt::Debug;

    /// number of chunks in a codeword
    const DIMENSION: usize;

    /// an estimate of how many tries it takes
    /// to encode successfully. Note that this
    /// is not a strict upper bound, but the signer
    /// gives up after that many tries.
    const MAX_TRIES: usize;

    /// each chunk of a codeword is between 0 and BASE - 1
    const BASE: usize;

    /// Samples a fresh randomness for encoding.
    fn rand<R: Rng>(rng: &mut R) -> Self::Randomness;

    /// Encodes the given message with respect to an epoch.
    /// Returns the codeword as a list of DIMENSION chunks,
    /// each between 0 and BASE - 1, or an error if this
    /// randomness did not lead to a valid codeword.
    fn encode(
        parameter: &Self::Parameter,
        message: &[u8; MESSAGE_LENGTH],
        randomness: &Self::Randomness,
        epoch: u32,
    ) -> Result<Vec<u8>, Self::Error>;

    /// Function to check internal consistency of any given parameters.
    /// Expected to panic if something is wrong. Should be invoked once
    /// when setting up the scheme, not on every operation.
    fn internal_consistency_check();
}
