//! Per-(poll, voter) eligibility record
//!
//! Existence of the PDA is the registration; `has_voted` is the single-use
//! flag. Neither field is ever reset and the account is never closed, so a
//! voter gets exactly one ballot per poll.

use anchor_lang::prelude::*;

use crate::constants::VOTER_SEED;
use crate::error::VotingError;

/// PDA Seeds: `[b"voter", poll_id.to_le_bytes(), voter.key().as_ref()]`
#[account]
#[derive(InitSpace, Default)]
pub struct VoterRegistry {
    pub registered: bool,

    /// Flips false -> true exactly once, on the voter's ballot
    pub has_voted: bool,

    pub bump: u8,
}

impl VoterRegistry {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    pub const SEED_PREFIX: &'static [u8] = VOTER_SEED;

    pub fn initialize(&mut self, bump: u8) {
        self.registered = true;
        self.has_voted = false;
        self.bump = bump;
    }

    pub fn require_can_vote(&self) -> Result<()> {
        require!(self.registered, VotingError::VoterNotRegistered);
        require!(!self.has_voted, VotingError::AlreadyVoted);
        Ok(())
    }

    pub fn mark_voted(&mut self) -> Result<()> {
        self.require_can_vote()?;
        self.has_voted = true;
        Ok(())
    }

    pub fn find_pda(program_id: &Pubkey, poll_id: u64, voter: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED_PREFIX, poll_id.to_le_bytes().as_ref(), voter.as_ref()],
            program_id,
        )
    }
}
