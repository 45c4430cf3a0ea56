//! Anonymous ballot account
//!
//! One account per (poll, nullifier). The nullifier is a random value the
//! voter picks; it is not derived from the voter's key, so nothing stored
//! here points back at a `VoterRegistry` address.
//!
//! # Anti-Replay
//! The PDA is derived from the nullifier, so submitting the same nullifier
//! twice fails at account creation (address already in use). Double voting
//! under fresh nullifiers is stopped by the registry flag instead.

use anchor_lang::prelude::*;

use crate::constants::BALLOT_SEED;

/// PDA Seeds: `[b"vote", poll_id.to_le_bytes(), nullifier.as_ref()]`
#[account]
#[derive(InitSpace, Default)]
pub struct Ballot {
    pub poll_id: u64,

    /// Sealed ballot, opaque to the program
    #[max_len(150)]
    pub encrypted_vote: Vec<u8>,

    pub nullifier: [u8; 32],

    pub bump: u8,
}

impl Ballot {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    pub const SEED_PREFIX: &'static [u8] = BALLOT_SEED;

    /// Byte offset of `poll_id` in account data, for memcmp filters when
    /// listing every ballot of a poll.
    pub const POLL_ID_OFFSET: usize = 8;

    pub fn initialize(
        &mut self,
        poll_id: u64,
        encrypted_vote: Vec<u8>,
        nullifier: [u8; 32],
        bump: u8,
    ) {
        self.poll_id = poll_id;
        self.encrypted_vote = encrypted_vote;
        self.nullifier = nullifier;
        self.bump = bump;
    }

    pub fn find_pda(program_id: &Pubkey, poll_id: u64, nullifier: &[u8; 32]) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED_PREFIX, poll_id.to_le_bytes().as_ref(), nullifier.as_ref()],
            program_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::MAX_SEALED_BALLOT_LEN;
    use anchor_lang::Discriminator;

    #[test]
    fn test_ballot_space_fits_max_payload() {
        assert_eq!(Ballot::LEN, 8 + 8 + (4 + MAX_SEALED_BALLOT_LEN) + 32 + 1);
    }

    #[test]
    fn test_poll_id_follows_discriminator() {
        let mut ballot = Ballot::default();
        ballot.initialize(42, vec![9u8; 80], [3u8; 32], 250);

        let mut data = Vec::new();
        ballot.try_serialize(&mut data).unwrap();

        let offset = Ballot::POLL_ID_OFFSET;
        assert_eq!(&data[..8], &Ballot::DISCRIMINATOR[..]);
        assert_eq!(&data[offset..offset + 8], &42u64.to_le_bytes());
    }
}
