//! Initialize Poll Instruction
//!
//! Creates a poll under the next id from the global counter. The voting
//! window opens at the ledger's current time; callers only choose the end.
//!
//! Clients must derive the poll PDA from the counter value they observe
//! before submitting. If another creation lands first, the counter has
//! moved and this transaction fails on the seeds constraint.

use anchor_lang::prelude::*;

use crate::constants::{COUNTER_SEED, POLL_SEED};
use crate::events::PollCreated;
use crate::state::{poll::ledger_start_time, Poll, PollCounter};

#[derive(Accounts)]
pub struct InitializePoll<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [COUNTER_SEED],
        bump
    )]
    pub counter: Account<'info, PollCounter>,

    #[account(
        init,
        payer = admin,
        space = Poll::LEN,
        seeds = [POLL_SEED, counter.next_poll_id.to_le_bytes().as_ref()],
        bump
    )]
    pub poll: Box<Account<'info, Poll>>,

    pub system_program: Program<'info, System>,
}

/// Validate the definition, take the next id and fill in `poll`.
///
/// `counter` and `poll` are only written once every check has passed.
#[allow(clippy::too_many_arguments)]
pub fn create_poll(
    counter: &mut PollCounter,
    poll: &mut Poll,
    admin: Pubkey,
    now: i64,
    end_time: u64,
    name: String,
    description: String,
    candidates: Vec<String>,
    tallier_pubkey: [u8; 32],
    bump: u8,
) -> Result<PollCreated> {
    let start_time = ledger_start_time(now)?;

    Poll::validate_definition(&name, &description, &candidates, start_time, end_time)?;

    let poll_id = counter.allocate()?;

    poll.initialize(
        poll_id,
        admin,
        name.clone(),
        description.clone(),
        start_time,
        end_time,
        candidates.clone(),
        tallier_pubkey,
        bump,
    );

    Ok(PollCreated {
        poll_id,
        admin,
        name,
        description,
        candidates,
        start_time,
        end_time,
        tallier_pubkey,
    })
}

/// Handler for initialize_poll instruction.
///
/// # Arguments
/// * `end_time` - Unix seconds after which ballots are refused
/// * `name` - Poll title (max 32 bytes)
/// * `description` - Free text (max 280 bytes)
/// * `candidates` - 1 to 10 unique names, in ballot order
/// * `tallier_pubkey` - X25519 key ballots are sealed against
pub fn handler(
    ctx: Context<InitializePoll>,
    end_time: u64,
    name: String,
    description: String,
    candidates: Vec<String>,
    tallier_pubkey: [u8; 32],
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();

    let event = create_poll(
        &mut ctx.accounts.counter,
        &mut ctx.accounts.poll,
        admin,
        now,
        end_time,
        name,
        description,
        candidates,
        tallier_pubkey,
        ctx.bumps.poll,
    )?;
    let poll_id = event.poll_id;

    emit!(event);

    msg!("Poll created");
    msg!("Poll id: {}", poll_id);

    Ok(())
}
