//! Sealed ballot layout
//!
//! Ballots are sealed off-chain with box-style authenticated encryption
//! (X25519 + XSalsa20-Poly1305) against the poll's tallier public key:
//!
//! ```text
//! sealed = ephemeral_public_key (32) || nonce (24) || ciphertext (16-byte MAC + plaintext)
//! ```
//!
//! The program never decrypts. It only checks that the payload is large
//! enough to hold a non-empty sealed plaintext and small enough to fit the
//! ballot account.

use anchor_lang::prelude::*;

use crate::error::VotingError;

pub const EPHEMERAL_KEY_LEN: usize = 32;
pub const NONCE_LEN: usize = 24;
pub const MAC_LEN: usize = 16;

/// Smallest payload that can carry a one-byte plaintext.
pub const MIN_SEALED_BALLOT_LEN: usize = EPHEMERAL_KEY_LEN + NONCE_LEN + MAC_LEN + 1;

/// Largest payload the ballot account is sized for.
pub const MAX_SEALED_BALLOT_LEN: usize = 150;

/// Borrowed view over a sealed ballot payload.
#[derive(Debug, Clone, Copy)]
pub struct SealedBallot<'a> {
    ephemeral_key: &'a [u8; EPHEMERAL_KEY_LEN],
    nonce: &'a [u8; NONCE_LEN],
    /// MAC followed by the encrypted plaintext
    ciphertext: &'a [u8],
}

impl<'a> SealedBallot<'a> {
    /// Split a payload into its components, enforcing size bounds.
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        require!(
            bytes.len() >= MIN_SEALED_BALLOT_LEN,
            VotingError::InvalidEncryptedVote
        );
        require!(
            bytes.len() <= MAX_SEALED_BALLOT_LEN,
            VotingError::EncryptedVoteTooLarge
        );

        let (ephemeral_key, rest) = bytes.split_at(EPHEMERAL_KEY_LEN);
        let (nonce, ciphertext) = rest.split_at(NONCE_LEN);

        Ok(Self {
            ephemeral_key: ephemeral_key
                .try_into()
                .map_err(|_| error!(VotingError::InvalidEncryptedVote))?,
            nonce: nonce
                .try_into()
                .map_err(|_| error!(VotingError::InvalidEncryptedVote))?,
            ciphertext,
        })
    }

    pub fn ephemeral_key(&self) -> &'a [u8; EPHEMERAL_KEY_LEN] {
        self.ephemeral_key
    }

    pub fn nonce(&self) -> &'a [u8; NONCE_LEN] {
        self.nonce
    }

    /// MAC followed by the encrypted plaintext.
    pub fn ciphertext(&self) -> &'a [u8] {
        self.ciphertext
    }

    /// Length of the sealed plaintext (ciphertext minus MAC).
    pub fn plaintext_len(&self) -> usize {
        self.ciphertext.len().saturating_sub(MAC_LEN)
    }
}

/// Nullifiers are client-chosen random values; all-zero means the client
/// never filled it in.
#[inline]
pub fn is_zero_nullifier(nullifier: &[u8; 32]) -> bool {
    nullifier.iter().all(|&b| b == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sealed(len: usize) -> Vec<u8> {
        (0..len).map(|i| i as u8).collect()
    }

    #[test]
    fn test_min_len_matches_box_overhead() {
        assert_eq!(MIN_SEALED_BALLOT_LEN, 73);
    }

    #[test]
    fn test_parse_splits_components() {
        let bytes = sealed(MIN_SEALED_BALLOT_LEN + 4);
        let ballot = SealedBallot::parse(&bytes).unwrap();

        assert_eq!(ballot.ephemeral_key()[0], 0);
        assert_eq!(ballot.nonce()[0], EPHEMERAL_KEY_LEN as u8);
        assert_eq!(ballot.ciphertext()[0], (EPHEMERAL_KEY_LEN + NONCE_LEN) as u8);
        assert_eq!(ballot.ciphertext().len(), MAC_LEN + 5);
        assert_eq!(ballot.plaintext_len(), 5);
    }

    #[test]
    fn test_plaintext_len_without_full_mac() {
        let key = [0u8; EPHEMERAL_KEY_LEN];
        let nonce = [0u8; NONCE_LEN];
        let truncated = SealedBallot {
            ephemeral_key: &key,
            nonce: &nonce,
            ciphertext: &[0u8; 3],
        };
        assert_eq!(truncated.plaintext_len(), 0);
    }

    #[test]
    fn test_parse_rejects_short_payload() {
        let bytes = sealed(MIN_SEALED_BALLOT_LEN - 1);
        assert_eq!(
            SealedBallot::parse(&bytes).unwrap_err(),
            VotingError::InvalidEncryptedVote.into()
        );
        assert!(SealedBallot::parse(&[]).is_err());
    }

    #[test]
    fn test_parse_rejects_oversized_payload() {
        let bytes = sealed(MAX_SEALED_BALLOT_LEN + 1);
        assert_eq!(
            SealedBallot::parse(&bytes).unwrap_err(),
            VotingError::EncryptedVoteTooLarge.into()
        );
        assert!(SealedBallot::parse(&sealed(MAX_SEALED_BALLOT_LEN)).is_ok());
    }

    #[test]
    fn test_zero_nullifier_detection() {
        assert!(is_zero_nullifier(&[0u8; 32]));

        let mut partial = [0u8; 32];
        partial[31] = 1;
        assert!(!is_zero_nullifier(&partial));
    }
}
