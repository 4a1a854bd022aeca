//! Synchronized hash-based signatures in the generalized XMSS family.
//!
//! A key pair is bound to a fixed number of epochs (its lifetime). Each epoch
//! has its own one-time signing slot: the secret key holds hash-chain starting
//! points for every epoch, and the public key is the root of a Merkle-style
//! tree committing to the ends of all chains. Signing walks the chains
//! according to an incomparable encoding of the message; verification
//! completes the chains and recomputes the root.
//!
//! The scheme is assembled from three exchangeable components:
//! - a tweakable hash function ([`symmetric::tweak_hash::TweakableHash`]),
//! - a pseudorandom function ([`symmetric::prf::Pseudorandom`]), and
//! - an incomparable encoding ([`inc_encoding::IncomparableEncoding`]).
//!
//! SHA3-based instantiations of all three are provided, together with
//! ready-made scheme aliases in
//! [`signature::generalized_xmss::instantiations_sha`].
//!
//! Callers must never sign twice with the same epoch: tracking which epochs
//! have been used is the caller's responsibility.

/// Message length in bytes, for messages that we want to sign.
pub const MESSAGE_LENGTH: usize = 32;

pub const TWEAK_SEPARATOR_FOR_MESSAGE_HASH: u8 = 0x02;
pub const TWEAK_SEPARATOR_FOR_TREE_HASH: u8 = 0x01;
pub const TWEAK_SEPARATOR_FOR_CHAIN_HASH: u8 = 0x00;

pub mod array;
pub mod inc_encoding;
pub mod serialization;
pub mod signature;
pub mod symmetric;
