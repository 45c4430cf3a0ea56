//! Anonymous Voting - encrypted ballots keyed by unlinkable nullifiers
//!
//! Ledger time gates every window; the admin tallies off-chain.

use anchor_lang::prelude::*;

pub mod constants;
pub mod crypto;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

#[cfg(not(target_os = "solana"))]
pub mod tally;


use instructions::*;
use state::CandidateResult;

declare_id!("H2S4xQeQgwSSZ1nyRjqP6KmSL4gLqcFSYuo69XNqHcy7");

#[program]
pub mod anon_voting {
    use super::*;

    pub fn initialize_counter(ctx: Context<InitializeCounter>) -> Result<()> {
        instructions::initialize_counter::handler(ctx)
    }

    pub fn initialize_poll(
        ctx: Context<InitializePoll>,
        end_time: u64,
        name: String,
        description: String,
        candidates: Vec<String>,
        tallier_pubkey: [u8; 32],
    ) -> Result<()> {
        instructions::initialize_poll::handler(
            ctx,
            end_time,
            name,
            description,
            candidates,
            tallier_pubkey,
        )
    }

    pub fn register_voter(ctx: Context<RegisterVoter>, poll_id: u64) -> Result<()> {
        instructions::register_voter::handler(ctx, poll_id)
    }

    pub fn vote(
        ctx: Context<Vote>,
        poll_id: u64,
        nullifier: [u8; 32],
        encrypted_vote: Vec<u8>,
    ) -> Result<()> {
        instructions::vote::handler(ctx, poll_id, nullifier, encrypted_vote)
    }

    pub fn publish_results(
        ctx: Context<PublishResults>,
        poll_id: u64,
        results: Vec<CandidateResult>,
    ) -> Result<()> {
        instructions::publish_results::handler(ctx, poll_id, results)
    }
}
