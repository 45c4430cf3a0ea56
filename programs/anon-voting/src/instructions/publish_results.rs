//! Publish Results Instruction
//!
//! The poll admin submits the tally after decrypting ballots off-chain.
//! Results are write-once: the results PDA can only be created one time.
//!
//! Trust boundary: the program cannot verify that the counts are a correct
//! decryption of the stored ballots. Auditors re-run the tally from the
//! ballot accounts with the tallier's secret.

use anchor_lang::prelude::*;

use crate::constants::{POLL_SEED, RESULTS_SEED};
use crate::error::VotingError;
use crate::events::ResultsPublished;
use crate::state::{CandidateResult, Poll, PollResults};

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct PublishResults<'info> {
    /// Must be the poll admin.
    #[account(mut)]
    pub publisher: Signer<'info>,

    #[account(
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump = poll.bump,
        constraint = poll.admin == publisher.key() @ VotingError::Unauthorized,
    )]
    pub poll: Box<Account<'info, Poll>>,

    #[account(
        init,
        payer = publisher,
        space = PollResults::LEN,
        seeds = [RESULTS_SEED, poll_id.to_le_bytes().as_ref()],
        bump
    )]
    pub poll_results: Box<Account<'info, PollResults>>,

    pub system_program: Program<'info, System>,
}

/// Check the tally against `poll` and write it into `record`.
pub fn record_results(
    poll: &Poll,
    record: &mut PollResults,
    publisher: Pubkey,
    now: i64,
    results: Vec<CandidateResult>,
    bump: u8,
) -> Result<ResultsPublished> {
    let total_votes = PollResults::validate_tally(poll, &results, now)?;

    record.initialize(poll.poll_id, results.clone(), total_votes, bump);

    Ok(ResultsPublished {
        poll_id: poll.poll_id,
        publisher,
        results,
        total_votes,
    })
}

pub fn handler(
    ctx: Context<PublishResults>,
    poll_id: u64,
    results: Vec<CandidateResult>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let publisher = ctx.accounts.publisher.key();

    let event = record_results(
        &ctx.accounts.poll,
        &mut ctx.accounts.poll_results,
        publisher,
        now,
        results,
        ctx.bumps.poll_results,
    )?;
    let total_votes = event.total_votes;

    emit!(event);

    msg!("Results published for poll {}", poll_id);
    msg!("Total votes: {}", total_votes);

    Ok(())
}
