//! Instantiations of the generalized XMSS signature scheme based on SHA3.
//!
//! All instantiations use the tweakable hash with 16-byte parameters and
//! 24-byte outputs, and the matching PRF with 24-byte outputs. They differ
//! in the key lifetime, the chunk size of the message hash, and the
//! incomparable encoding that is used on top of it.

use super::GeneralizedXMSSSignatureScheme;
use crate::{
    inc_encoding::{basic_winternitz::WinternitzEncoding, target_sum::TargetSumEncoding},
    symmetric::{message_hash::sha::ShaMessageHash, prf::sha::ShaPRF, tweak_hash::sha::ShaTweak128192},
};

/// Byte length of public parameters for the message hash
const PARAMETER_LEN: usize = 16;
/// Byte length of the encoding randomness rho
const RAND_LEN: usize = 16;

type PRF = ShaPRF<24>;
type TH = ShaTweak128192;

/// Message hashes for chunk sizes 1, 2, 4, 8.
/// The number of chunks is chosen so that the hash
/// output is 24 bytes in each case.
type MHw1 = ShaMessageHash<PARAMETER_LEN, RAND_LEN, 192, 1>;
type MHw2 = ShaMessageHash<PARAMETER_LEN, RAND_LEN, 96, 2>;
type MHw4 = ShaMessageHash<PARAMETER_LEN, RAND_LEN, 48, 4>;
type MHw8 = ShaMessageHash<PARAMETER_LEN, RAND_LEN, 24, 8>;

/// Instantiations with lifetime 2^10
pub mod lifetime_2_to_the_10 {
    use super::*;

    const LOG_LIFETIME: usize = 10;

    /// Instantiations based on the basic Winternitz encoding
    pub mod winternitz {
        use super::*;

        /// Number of checksum chunks for each chunk size, large enough
        /// to represent the maximum checksum in the respective base.
        const NUM_CHUNKS_CHECKSUM_W1: usize = 8;
        const NUM_CHUNKS_CHECKSUM_W2: usize = 5;
        const NUM_CHUNKS_CHECKSUM_W4: usize = 3;
        const NUM_CHUNKS_CHECKSUM_W8: usize = 2;

        pub type SIGWinternitzLifetime10W1 = GeneralizedXMSSSignatureScheme<
            PRF,
            WinternitzEncoding<MHw1, 1, NUM_CHUNKS_CHECKSUM_W1>,
            TH,
            LOG_LIFETIME,
        >;
        pub type SIGWinternitzLifetime10W2 = GeneralizedXMSSSignatureScheme<
            PRF,
            WinternitzEncoding<MHw2, 2, NUM_CHUNKS_CHECKSUM_W2>,
            TH,
            LOG_LIFETIME,
        >;
        pub type SIGWinternitzLifetime10W4 = GeneralizedXMSSSignatureScheme<
            PRF,
            WinternitzEncoding<MHw4, 4, NUM_CHUNKS_CHECKSUM_W4>,
            TH,
            LOG_LIFETIME,
        >;
        pub type SIGWinternitzLifetime10W8 = GeneralizedXMSSSignatureScheme<
            PRF,
            WinternitzEncoding<MHw8, 8, NUM_CHUNKS_CHECKSUM_W8>,
            TH,
            LOG_LIFETIME,
        >;
    }

    /// Instantiations based on the target sum encoding
    pub mod target_sum {
        use super::*;

        /// Expected sum for 48 chunks in base 16: 48 * 15 / 2
        const TARGET_SUM_W4_NO_OFF: usize = 360;
        /// Expected sum with a 10% offset: ceil(360 * 1.1)
        const TARGET_SUM_W4_OFF_10: usize = 396;
        /// Expected sum for 24 chunks in base 256: 24 * 255 / 2
        const TARGET_SUM_W8_NO_OFF: usize = 3060;
        /// Expected sum with a 10% offset: ceil(3060 * 1.1)
        const TARGET_SUM_W8_OFF_10: usize = 3366;

        pub type SIGTargetSumLifetime10W4NoOff = GeneralizedXMSSSignatureScheme<
            PRF,
            TargetSumEncoding<MHw4, TARGET_SUM_W4_NO_OFF>,
            TH,
            LOG_LIFETIME,
        >;
        pub type SIGTargetSumLifetime10W4Off10 = GeneralizedXMSSSignatureScheme<
            PRF,
            TargetSumEncoding<MHw4, TARGET_SUM_W4_OFF_10>,
            TH,
            LOG_LIFETIME,
        >;
        pub type SIGTargetSumLifetime10W8NoOff = GeneralizedXMSSSignatureScheme<
            PRF,
            TargetSumEncoding<MHw8, TARGET_SUM_W8_NO_OFF>,
            TH,
            LOG_LIFETIME,
        >;
        pub type SIGTargetSumLifetime10W8Off10 = GeneralizedXMSSSignatureScheme<
            PRF,
            TargetSumEncoding<MHw8, TARGET_SUM_W8_OFF_10>,
            TH,
            LOG_LIFETIME,
        >;
    }
}

/// Instantiations with lifetime 2^18
pub mod lifetime_2_to_the_18 {
    use super::*;

    const LOG_LIFETIME: usize = 18;

    /// Instantiations based on the basic Winternitz encoding
    pub mod winternitz {
        use super::*;

        const NUM_CHUNKS_CHECKSUM_W1: usize = 8;
        const NUM_CHUNKS_CHECKSUM_W2: usize = 5;
        const NUM_CHUNKS_CHECKSUM_W4: usize = 3;
        const NUM_CHUNKS_CHECKSUM_W8: usize = 2;

        pub type SIGWinternitzLifetime18W1 = GeneralizedXMSSSignatureScheme<
            PRF,
            WinternitzEncoding<MHw1, 1, NUM_CHUNKS_CHECKSUM_W1>,
            TH,
            LOG_LIFETIME,
        >;
        pub type SIGWinternitzLifetime18W2 = GeneralizedXMSSSignatureScheme<
            PRF,
            WinternitzEncoding<MHw2, 2, NUM_CHUNKS_CHECKSUM_W2>,
            TH,
            LOG_LIFETIME,
        >;
        pub type SIGWinternitzLifetime18W4 = GeneralizedXMSSSignatureScheme<
            PRF,
            WinternitzEncoding<MHw4, 4, NUM_CHUNKS_CHECKSUM_W4>,
            TH,
            LOG_LIFETIME,
        >;
        pub type SIGWinternitzLifetime18W8 = GeneralizedXMSSSignatureScheme<
            PRF,
            WinternitzEncoding<MHw8, 8, NUM_CHUNKS_CHECKSUM_W8>,
            TH,
            LOG_LIFETIME,
        >;
    }

    /// Instantiations based on the target sum encoding
    pub mod target_sum {
        use super::*;

        const TARGET_SUM_W4_NO_OFF: usize = 360;
        const TARGET_SUM_W4_OFF_10: usize = 396;
        const TARGET_SUM_W8_NO_OFF: usize = 3060;
        const TARGET_SUM_W8_OFF_10: usize = 3366;

        pub type SIGTargetSumLifetime18W4NoOff = GeneralizedXMSSSignatureScheme<
            PRF,
            TargetSumEncoding<MHw4, TARGET_SUM_W4_NO_OFF>,
            TH,
            LOG_LIFETIME,
        >;
        pub type SIGTargetSumLifetime18W4Off10 = GeneralizedXMSSSignatureScheme<
            PRF,
            TargetSumEncoding<MHw4, TARGET_SUM_W4_OFF_10>,
            TH,
            LOG_LIFETIME,
        >;
        pub type SIGTargetSumLifetime18W8NoOff = GeneralizedXMSSSignatureScheme<
            PRF,
            TargetSumEncoding<MHw8, TARGET_SUM_W8_NO_OFF>,
            TH,
            LOG_LIFETIME,
        >;
        pub type SIGTargetSumLifetime18W8Off10 = GeneralizedXMSSSignatureScheme<
            PRF,
            TargetSumEncoding<MHw8, TARGET_SUM_W8_OFF_10>,
            TH,
            LOG_LIFETIME,
        >;
    }
}
