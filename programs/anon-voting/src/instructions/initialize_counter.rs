//! Initialize Counter Instruction
//!
//! Creates the global poll id allocator. Runs once per deployment.

use anchor_lang::prelude::*;

use crate::constants::COUNTER_SEED;
use crate::state::PollCounter;

#[derive(Accounts)]
pub struct InitializeCounter<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    /// `init_if_needed` so a second call reaches the handler and fails with
    /// `AlreadyInitialized` instead of a system program error.
    #[account(
        init_if_needed,
        payer = admin,
        space = PollCounter::LEN,
        seeds = [COUNTER_SEED],
        bump
    )]
    pub counter: Account<'info, PollCounter>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeCounter>) -> Result<()> {
    let counter = &mut ctx.accounts.counter;

    counter.initialize()?;

    msg!("Poll counter initialized");
    msg!("Next poll id: {}", counter.next_poll_id);

    Ok(())
}
