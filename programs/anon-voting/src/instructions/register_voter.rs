//! Register Voter Instruction
//!
//! Poll admin adds one voter to the poll's registry. Registering the same
//! voter again fails because the registry PDA already exists.

use anchor_lang::prelude::*;

use crate::constants::{POLL_SEED, VOTER_SEED};
use crate::error::VotingError;
use crate::events::VoterRegistered;
use crate::state::{Poll, VoterRegistry};

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct RegisterVoter<'info> {
    /// Poll admin (must sign and match `poll.admin`).
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump = poll.bump,
        has_one = admin @ VotingError::Unauthorized,
    )]
    pub poll: Box<Account<'info, Poll>>,

    /// CHECK: identity being registered; only its key is used as a seed
    pub voter: UncheckedAccount<'info>,

    #[account(
        init,
        payer = admin,
        space = VoterRegistry::LEN,
        seeds = [VOTER_SEED, poll_id.to_le_bytes().as_ref(), voter.key().as_ref()],
        bump
    )]
    pub voter_registry: Account<'info, VoterRegistry>,

    pub system_program: Program<'info, System>,
}

/// Mark `registry` as the voter's eligibility record for `poll_id`.
pub fn enroll_voter(
    registry: &mut VoterRegistry,
    poll_id: u64,
    voter: Pubkey,
    bump: u8,
) -> VoterRegistered {
    registry.initialize(bump);
    VoterRegistered { poll_id, voter }
}

pub fn handler(ctx: Context<RegisterVoter>, poll_id: u64) -> Result<()> {
    let voter = ctx.accounts.voter.key();

    let event = enroll_voter(
        &mut ctx.accounts.voter_registry,
        poll_id,
        voter,
        ctx.bumps.voter_registry,
    );

    emit!(event);

    msg!("Voter registered for poll {}", poll_id);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enroll_voter() {
        let mut registry = VoterRegistry::default();
        let voter = Pubkey::new_unique();

        let event = enroll_voter(&mut registry, 4, voter, 253);

        assert_eq!(event.poll_id, 4);
        assert_eq!(event.voter, voter);
        assert!(registry.registered);
        assert!(!registry.has_voted);
        assert_eq!(registry.bump, 253);
        assert!(registry.require_can_vote().is_ok());
    }
}
