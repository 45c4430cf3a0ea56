//! Global poll id allocator
//!
//! A single PDA holds the next id to hand out. Every poll creation takes a
//! write lock on it, so the runtime serializes allocations and no two polls
//! can receive the same id.

use anchor_lang::prelude::*;

use crate::constants::{COUNTER_SEED, FIRST_POLL_ID};
use crate::error::VotingError;

/// PDA Seeds: `[b"global_counter"]`
#[account]
#[derive(InitSpace, Default)]
pub struct PollCounter {
    /// Id the next created poll receives. Zero until initialized.
    pub next_poll_id: u64,
}

impl PollCounter {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    pub const SEED_PREFIX: &'static [u8] = COUNTER_SEED;

    pub fn is_initialized(&self) -> bool {
        self.next_poll_id >= FIRST_POLL_ID
    }

    /// Start allocating ids at `FIRST_POLL_ID`.
    pub fn initialize(&mut self) -> Result<()> {
        require!(!self.is_initialized(), VotingError::AlreadyInitialized);
        self.next_poll_id = FIRST_POLL_ID;
        Ok(())
    }

    /// Hand out the current id and advance the counter (checked arithmetic).
    pub fn allocate(&mut self) -> Result<u64> {
        let poll_id = self.next_poll_id;
        self.next_poll_id = poll_id
            .checked_add(1)
            .ok_or(error!(VotingError::ArithmeticOverflow))?;
        Ok(poll_id)
    }

    pub fn find_pda(program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::SEED_PREFIX], program_id)
    }
}
