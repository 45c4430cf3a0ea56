//! Vote Instruction
//!
//! Stores a sealed ballot in an anonymous account keyed by a voter-chosen
//! nullifier and burns the voter's single-use registry flag.
//!
//! # Anonymity Model
//! The ballot PDA is derived from `(poll_id, nullifier)` and the ballot
//! holds no voter key. The registry PDA is derived from `(poll_id, voter)`
//! and holds no nullifier. Linking the two requires the tallier's secret.
//!
//! # Check Order
//! 1. Voting window (ledger time)
//! 2. Registry entry exists and is registered
//! 3. Voter has not voted
//! 4. Sealed ballot size
//! 5. Nullifier is non-zero
//!
//! The registry account is loaded by the handler rather than by an
//! `Account` constraint, so a missing entry surfaces as
//! `VoterNotRegistered` after the window checks.

use anchor_lang::prelude::*;

use crate::constants::{BALLOT_SEED, POLL_SEED, VOTER_SEED};
use crate::crypto::{is_zero_nullifier, SealedBallot};
use crate::error::VotingError;
use crate::events::VoteCast;
use crate::state::{Ballot, Poll, VoterRegistry};

#[derive(Accounts)]
#[instruction(poll_id: u64, nullifier: [u8; 32])]
pub struct Vote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump = poll.bump,
    )]
    pub poll: Box<Account<'info, Poll>>,

    /// CHECK: address pinned by seeds; owner and discriminator are checked
    /// in `load_registry`
    #[account(
        mut,
        seeds = [VOTER_SEED, poll_id.to_le_bytes().as_ref(), voter.key().as_ref()],
        bump
    )]
    pub voter_registry: UncheckedAccount<'info>,

    #[account(
        init,
        payer = voter,
        space = Ballot::LEN,
        seeds = [BALLOT_SEED, poll_id.to_le_bytes().as_ref(), nullifier.as_ref()],
        bump
    )]
    pub ballot: Account<'info, Ballot>,

    pub system_program: Program<'info, System>,
}

/// Run every vote precondition in order.
///
/// `registry` is `None` when no registry account exists for the voter.
pub fn validate_vote(
    poll: &Poll,
    registry: Option<&VoterRegistry>,
    now: i64,
    nullifier: &[u8; 32],
    encrypted_vote: &[u8],
) -> Result<()> {
    poll.require_voting_open(now)?;

    registry
        .ok_or(error!(VotingError::VoterNotRegistered))?
        .require_can_vote()?;

    SealedBallot::parse(encrypted_vote)?;

    require!(!is_zero_nullifier(nullifier), VotingError::InvalidNullifier);

    Ok(())
}

/// Deserialize the voter's registry entry, or `None` if it was never created.
fn load_registry(info: &AccountInfo) -> Result<Option<VoterRegistry>> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    let registry = VoterRegistry::try_deserialize(&mut &data[..])?;
    Ok(Some(registry))
}

fn store_registry(info: &AccountInfo, registry: &VoterRegistry) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut dst: &mut [u8] = &mut data;
    registry.try_serialize(&mut dst)?;
    Ok(())
}

/// Validate a ballot, store it in `ballot` and burn the registry flag.
///
/// Nothing is written unless every check in `validate_vote` passes.
#[allow(clippy::too_many_arguments)]
pub fn cast_vote(
    poll: &Poll,
    registry: Option<&mut VoterRegistry>,
    ballot: &mut Ballot,
    voter: Pubkey,
    now: i64,
    nullifier: [u8; 32],
    encrypted_vote: Vec<u8>,
    bump: u8,
) -> Result<VoteCast> {
    validate_vote(poll, registry.as_deref(), now, &nullifier, &encrypted_vote)?;

    let registry = registry.ok_or(error!(VotingError::VoterNotRegistered))?;
    registry.mark_voted()?;

    ballot.initialize(poll.poll_id, encrypted_vote, nullifier, bump);

    Ok(VoteCast {
        poll_id: poll.poll_id,
        voter,
        timestamp: now,
    })
}

/// Handler for vote instruction.
///
/// # Arguments
/// * `poll_id` - Poll being voted in
/// * `nullifier` - 32 random bytes; seeds the ballot PDA
/// * `encrypted_vote` - Sealed ballot (see `crypto::sealed_ballot`)
pub fn handler(
    ctx: Context<Vote>,
    poll_id: u64,
    nullifier: [u8; 32],
    encrypted_vote: Vec<u8>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let voter = ctx.accounts.voter.key();
    let registry_info = ctx.accounts.voter_registry.to_account_info();

    let mut registry = load_registry(&registry_info)?;

    let event = cast_vote(
        &ctx.accounts.poll,
        registry.as_mut(),
        &mut ctx.accounts.ballot,
        voter,
        now,
        nullifier,
        encrypted_vote,
        ctx.bumps.ballot,
    )?;

    if let Some(registry) = registry.as_ref() {
        store_registry(&registry_info, registry)?;
    }

    emit!(event);

    msg!("Ballot recorded for poll {}", poll_id);

    Ok(())
}
