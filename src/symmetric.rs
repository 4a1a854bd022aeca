/// Hash functions used for message hashing, i.e., as the first step
/// of any incomparable encoding.
pub mod message_hash;
/// Pseudorandom functions, used to derive the chain start values
/// of the secret key from a single short key.
pub mod prf;
/// Tweakable hash functions, and hash chains built from them.
pub mod tweak_hash;
/// Sparse Merkle-style hash trees built from tweakable hash functions.
pub mod tweak_hash_tree;
