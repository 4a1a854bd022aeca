use rand::Rng;
use thiserror::Error;

use crate::MESSAGE_LENGTH;
use crate::serialization::Serializable;

pub mod generalized_xmss;

/// Errors that can occur during signing.
#[derive(Debug, Error)]
pub enum SigningError {
    /// Returned when no valid codeword was found within the
    /// maximum number of encoding attempts. The signer should
    /// retry with fresh randomness.
    #[error("Signing failed: no valid encoding found after {attempts} attempts.")]
    EncodingAttemptsExceeded { attempts: usize },
}

/// Trait to model a synchronized signature scheme.
/// In such a scheme, signing takes an epoch as input,
/// and it is assumed that the signer only signs one
/// message per epoch.
///
/// A key pair is generated for a contiguous range of epochs,
/// given by an activation epoch and a number of active epochs.
/// The signer must only sign with respect to epochs in this range.
pub trait SignatureScheme {
    type PublicKey: Serializable + Send + Sync;
    type SecretKey: Serializable + Send + Sync;
    type Signature: Serializable + Send + Sync;

    /// Total number of epochs the scheme supports.
    /// Key pairs can be active for any sub-range of [0, LIFETIME).
    const LIFETIME: u64;

    /// Generates a new key pair, active for the epoch range
    /// [activation_epoch, activation_epoch + num_active_epochs).
    ///
    /// Precondition: the range must be within [0, LIFETIME).
    fn key_gen<R: Rng>(
        rng: &mut R,
        activation_epoch: u32,
        num_active_epochs: u32,
    ) -> (Self::PublicKey, Self::SecretKey);

    /// Signs a message with respect to an epoch.
    ///
    /// Precondition: the epoch must be within the active range
    /// of the secret key, otherwise this function panics.
    fn sign<R: Rng>(
        rng: &mut R,
        sk: &Self::SecretKey,
        epoch: u32,
        message: &[u8; MESSAGE_LENGTH],
    ) -> Result<Self::Signature, SigningError>;

    /// Verifies a signature with respect to public key, epoch, and message.
    /// Must not panic on adversarial signatures, and instead return false.
    fn verify(
        pk: &Self::PublicKey,
        epoch: u32,
        message: &[u8; MESSAGE_LENGTH],
        sig: &Self::Signature,
    ) -> bool;

    /// Function to check internal consistency of any given parameters.
    /// Expected to panic if something is wrong. Should be invoked once
    /// when setting up the scheme, not on every operation.
    fn internal_consistency_check();
}
