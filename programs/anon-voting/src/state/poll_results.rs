//! Published tally for a poll
//!
//! The counts are submitted by the poll admin after decrypting ballots
//! off-chain. The program checks shape (one entry per candidate, in ballot
//! order) but cannot check that the counts match the sealed ballots.

use anchor_lang::prelude::*;

use crate::constants::RESULTS_SEED;
use crate::error::VotingError;
use crate::state::Poll;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct CandidateResult {
    #[max_len(32)]
    pub candidate_name: String,
    pub vote_count: u64,
}

/// PDA Seeds: `[b"results", poll_id.to_le_bytes()]`
#[account]
#[derive(InitSpace, Default)]
pub struct PollResults {
    pub poll_id: u64,

    #[max_len(10)]
    pub results: Vec<CandidateResult>,

    /// Sum of all `vote_count`s
    pub total_votes: u64,

    pub bump: u8,
}

impl PollResults {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    pub const SEED_PREFIX: &'static [u8] = RESULTS_SEED;

    /// Check a submitted tally against the poll and return its total.
    pub fn validate_tally(poll: &Poll, results: &[CandidateResult], now: i64) -> Result<u64> {
        poll.require_voting_closed(now)?;

        require!(
            results.len() == poll.candidates.len(),
            VotingError::InvalidTallyCount
        );
        require!(
            results
                .iter()
                .zip(poll.candidates.iter())
                .all(|(result, candidate)| result.candidate_name == *candidate),
            VotingError::TallyCandidateMismatch
        );

        results.iter().try_fold(0u64, |total, result| {
            total
                .checked_add(result.vote_count)
                .ok_or(error!(VotingError::ArithmeticOverflow))
        })
    }

    pub fn initialize(
        &mut self,
        poll_id: u64,
        results: Vec<CandidateResult>,
        total_votes: u64,
        bump: u8,
    ) {
        self.poll_id = poll_id;
        self.results = results;
        self.total_votes = total_votes;
        self.bump = bump;
    }

    pub fn find_pda(program_id: &Pubkey, poll_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED_PREFIX, poll_id.to_le_bytes().as_ref()],
            program_id,
        )
    }
}
