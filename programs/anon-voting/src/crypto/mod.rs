//! Ballot encryption format
//!
//! Encryption and decryption happen off-chain. On-chain code only
//! validates the sealed payload layout.

pub mod sealed_ballot;

pub use sealed_ballot::{
    is_zero_nullifier, SealedBallot, MAX_SEALED_BALLOT_LEN, MIN_SEALED_BALLOT_LEN,
};
