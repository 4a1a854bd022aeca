use sha3::{Digest, Sha3_256};

use crate::array::ByteArray;
use crate::{MESSAGE_LENGTH, TWEAK_SEPARATOR_FOR_MESSAGE_HASH};

use super::{MessageHash, bytes_to_chunks};

/// A message hash implemented using SHA3-256.
///
/// The digest is truncated to `NUM_CHUNKS * CHUNK_SIZE / 8` bytes and
/// then split into `NUM_CHUNKS` chunks of `CHUNK_SIZE` bits each.
/// All lengths are in bytes, and `CHUNK_SIZE` must be 1, 2, 4, or 8.
pub struct ShaMessageHash<
    const PARAMETER_LEN: usize,
    const RAND_LEN: usize,
    const NUM_CHUNKS: usize,
    const CHUNK_SIZE: usize,
>;

impl<
    const PARAMETER_LEN: usize,
    const RAND_LEN: usize,
    const NUM_CHUNKS: usize,
    const CHUNK_SIZE: usize,
> MessageHash for ShaMessageHash<PARAMETER_LEN, RAND_LEN, NUM_CHUNKS, CHUNK_SIZE>
{
    type Parameter = ByteArray<PARAMETER_LEN>;
    type Randomness = ByteArray<RAND_LEN>;

    const DIMENSION: usize = NUM_CHUNKS;
    const BASE: usize = 1 << CHUNK_SIZE;

    fn rand<R: rand::Rng>(rng: &mut R) -> Self::Randomness {
        ByteArray(rng.random())
    }

    fn apply(
        parameter: &Self::Parameter,
        epoch: u32,
        randomness: &Self::Randomness,
        message: &[u8; MESSAGE_LENGTH],
    ) -> Vec<u8> {
        let mut hasher = Sha3_256::new();

        // hash the randomness
        hasher.update(randomness.as_ref());

        // hash the parameter
        hasher.update(parameter.as_ref());

        // hash the separator to distinguish from chain and tree hashing
        hasher.update([TWEAK_SEPARATOR_FOR_MESSAGE_HASH]);

        // hash the epoch
        hasher.update(epoch.to_be_bytes());

        // hash the message
        hasher.update(message);

        // truncate to as many bytes as we need for NUM_CHUNKS chunks
        let digest = hasher.finalize();
        let num_bytes = NUM_CHUNKS * CHUNK_SIZE / 8;

        // split into chunks of CHUNK_SIZE bits each
        bytes_to_chunks(&digest[..num_bytes], CHUNK_SIZE)
    }

    fn internal_consistency_check() {
        assert!(
            matches!(CHUNK_SIZE, 1 | 2 | 4 | 8),
            "SHA Message Hash: Chunk size must be 1, 2, 4, or 8"
        );
        assert!(
            PARAMETER_LEN < 32,
            "SHA Message Hash: Parameter length must be less than 256 bit"
        );
        assert!(
            RAND_LEN > 0 && RAND_LEN < 32,
            "SHA Message Hash: Randomness length must be non-zero and less than 256 bit"
        );
        assert!(
            NUM_CHUNKS * CHUNK_SIZE <= 256,
            "SHA Message Hash: Hash length (= NUM_CHUNKS * CHUNK_SIZE) must be at most 256 bit"
        );
        assert!(
            Self::BASE <= 1 << 8,
            "SHA Message Hash: Base must be at most 2^8"
        );
        assert!(
            Self::DIMENSION <= 1 << 8,
            "SHA Message Hash: Dimension must be at most 2^8"
        );
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const PARAMETER_LEN: usize = 16;
    const RAND_LEN: usize = 16;
    const NUM_CHUNKS: usize = 48;
    const CHUNK_SIZE: usize = 4;

    type MH = ShaMessageHash<PARAMETER_LEN, RAND_LEN, NUM_CHUNKS, CHUNK_SIZE>;

    #[test]
    fn test_internal_consistency() {
        MH::internal_consistency_check();
    }

    #[test]
    fn test_apply_dimension_and_range() {
        let mut rng = rand::rng();

        let parameter = ByteArray(rng.random());
        let randomness = MH::rand(&mut rng);
        let message: [u8; MESSAGE_LENGTH] = rng.random();

        let chunks = MH::apply(&parameter, 13, &randomness, &message);

        assert_eq!(chunks.len(), MH::DIMENSION);
        for &chunk in &chunks {
            assert!((chunk as usize) < MH::BASE);
        }
    }

    proptest! {
        #[test]
        fn proptest_apply_sensitivity(
            parameter in prop::array::uniform16(any::<u8>()),
            randomness in prop::array::uniform16(any::<u8>()),
            message in prop::array::uniform32(any::<u8>()),
            epoch in any::<u32>(),
        ) {
            let parameter = ByteArray(parameter);
            let randomness = ByteArray(randomness);

            // determinism
            let chunks = MH::apply(&parameter, epoch, &randomness, &message);
            let chunks_again = MH::apply(&parameter, epoch, &randomness, &message);
            prop_assert_eq!(&chunks, &chunks_again);

            // changing the epoch must change the output
            let other_epoch = MH::apply(&parameter, epoch.wrapping_add(1), &randomness, &message);
            prop_assert_ne!(&chunks, &other_epoch);

            // changing the message must change the output
            let mut other_message = message;
            other_message[0] ^= 0x01;
            let other = MH::apply(&parameter, epoch, &randomness, &other_message);
            prop_assert_ne!(&chunks, &other);

            // changing the randomness must change the output
            let mut other_randomness = randomness;
            other_randomness[0] ^= 0x01;
            let other = MH::apply(&parameter, epoch, &other_randomness, &message);
            prop_assert_ne!(&chunks, &other);
        }
    }
}
