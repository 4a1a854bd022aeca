use sha3::{Digest, Sha3_256};

use crate::array::ByteArray;

use super::Pseudorandom;

const KEY_LENGTH: usize = 32; // 32 bytes
const PRF_DOMAIN_SEP: [u8; 16] = [
    0x00, 0x01, 0x12, 0xff, 0x00, 0x01, 0xfa, 0xff, 0x00, 0xaf, 0x12, 0xff, 0x01, 0xfa, 0xff, 0x00,
];

/// A pseudorandom function implemented using SHA3-256,
/// with a fixed domain separator to keep it apart from all
/// other uses of the hash function in the scheme.
/// It outputs OUTPUT_LEN many bytes.
pub struct ShaPRF<const OUTPUT_LEN: usize>;

impl<const OUTPUT_LEN: usize> Pseudorandom for ShaPRF<OUTPUT_LEN> {
    type Key = [u8; KEY_LENGTH];
    type Output = ByteArray<OUTPUT_LEN>;

    fn key_gen<R: rand::Rng>(rng: &mut R) -> Self::Key {
        rng.random()
    }

    fn apply(key: &Self::Key, epoch: u32, chain_index: u64) -> Self::Output {
        let mut hasher = Sha3_256::new();

        // hash the domain separator
        hasher.update(PRF_DOMAIN_SEP);

        // hash the key
        hasher.update(key);

        // hash the epoch
        hasher.update(epoch.to_be_bytes());

        // hash the chain index
        hasher.update(chain_index.to_be_bytes());

        // truncate the digest to the output length
        let digest = hasher.finalize();
        let mut output = [0u8; OUTPUT_LEN];
        output.copy_from_slice(&digest[..OUTPUT_LEN]);
        ByteArray(output)
    }

    fn internal_consistency_check() {
        assert!(
            OUTPUT_LEN > 0 && OUTPUT_LEN < 32,
            "SHA PRF: Output length must be non-zero and less than 256 bit"
        );
    }
}
