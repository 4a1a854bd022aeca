use sha3::{Digest, Sha3_256};

use crate::TWEAK_SEPARATOR_FOR_CHAIN_HASH;
use crate::TWEAK_SEPARATOR_FOR_TREE_HASH;
use crate::array::ByteArray;

use super::TweakableHash;

/// Enum to implement tweaks, with a leading domain separator byte
/// distinguishing tree tweaks from chain tweaks.
#[derive(Debug)]
pub enum ShaTweak {
    TreeTweak {
        level: u8,
        pos_in_level: u32,
    },
    ChainTweak {
        epoch: u32,
        chain_index: u8,
        pos_in_chain: u8,
    },
}

impl ShaTweak {
    /// Serializes the tweak for absorption into the hash.
    ///
    /// Layouts (all integers big-endian):
    /// - tree tweak:  `[0x01, level, pos_in_level (4 bytes)]`
    /// - chain tweak: `[0x00, epoch (4 bytes), chain_index, pos_in_chain]`
    ///
    /// The separator bytes make the two encodings collision-free, which is
    /// what the security of the scheme relies on. Do not change these layouts.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::TreeTweak {
                level,
                pos_in_level,
            } => {
                let mut bytes = Vec::with_capacity(6);
                bytes.push(TWEAK_SEPARATOR_FOR_TREE_HASH);
                bytes.push(*level);
                bytes.extend_from_slice(&pos_in_level.to_be_bytes());
                bytes
            }
            Self::ChainTweak {
                epoch,
                chain_index,
                pos_in_chain,
            } => {
                let mut bytes = Vec::with_capacity(7);
                bytes.push(TWEAK_SEPARATOR_FOR_CHAIN_HASH);
                bytes.extend_from_slice(&epoch.to_be_bytes());
                bytes.push(*chain_index);
                bytes.push(*pos_in_chain);
                bytes
            }
        }
    }
}

/// A tweakable hash function implemented using SHA3-256.
///
/// The digest is computed over `parameter || tweak || message` and
/// truncated to HASH_LEN bytes. PARAMETER_LEN and HASH_LEN must be
/// given in bytes, and must be less than the full 32 byte digest.
#[derive(Clone)]
pub struct ShaTweakHash<const PARAMETER_LEN: usize, const HASH_LEN: usize>;

impl<const PARAMETER_LEN: usize, const HASH_LEN: usize> TweakableHash
    for ShaTweakHash<PARAMETER_LEN, HASH_LEN>
{
    type Parameter = ByteArray<PARAMETER_LEN>;

    type Tweak = ShaTweak;

    type Domain = ByteArray<HASH_LEN>;

    fn rand_parameter<R: rand::Rng>(rng: &mut R) -> Self::Parameter {
        let mut parameter = [0u8; PARAMETER_LEN];
        rng.fill_bytes(&mut parameter);
        ByteArray(parameter)
    }

    fn rand_domain<R: rand::Rng>(rng: &mut R) -> Self::Domain {
        let mut domain = [0u8; HASH_LEN];
        rng.fill_bytes(&mut domain);
        ByteArray(domain)
    }

    fn tree_tweak(level: u8, pos_in_level: u32) -> Self::Tweak {
        ShaTweak::TreeTweak {
            level,
            pos_in_level,
        }
    }

    fn chain_tweak(epoch: u32, chain_index: u8, pos_in_chain: u8) -> Self::Tweak {
        ShaTweak::ChainTweak {
            epoch,
            chain_index,
            pos_in_chain,
        }
    }

    fn apply(
        parameter: &Self::Parameter,
        tweak: &Self::Tweak,
        message: &[Self::Domain],
    ) -> Self::Domain {
        let mut hasher = Sha3_256::new();

        // hash the parameter
        hasher.update(**parameter);

        // hash the tweak
        hasher.update(tweak.to_bytes());

        // hash the actual message, one domain element at a time
        for part in message {
            hasher.update(**part);
        }

        // truncate the digest to the hash length
        let digest = hasher.finalize();
        let mut output = [0u8; HASH_LEN];
        output.copy_from_slice(&digest[..HASH_LEN]);
        ByteArray(output)
    }

    fn internal_consistency_check() {
        assert!(
            PARAMETER_LEN > 0 && PARAMETER_LEN < 32,
            "SHA Tweak Hash: Parameter Length must be non-zero and less than 256 bit"
        );
        assert!(
            HASH_LEN > 0 && HASH_LEN < 32,
            "SHA Tweak Hash: Hash Length must be non-zero and less than 256 bit"
        );
    }
}

/// SHA3 tweakable hash with 128 bit parameter and 128 bit output.
pub type ShaTweak128128 = ShaTweakHash<16, 16>;
/// SHA3 tweakable hash with 128 bit parameter and 192 bit output.
pub type ShaTweak128192 = ShaTweakHash<16, 24>;
/// SHA3 tweakable hash with 192 bit parameter and 192 bit output.
pub type ShaTweak192192 = ShaTweakHash<24, 24>;
