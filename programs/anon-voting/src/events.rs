//! Audit events
//!
//! Each event is logged with an 8-byte discriminator followed by its Borsh
//! body. Indexers replay these to rebuild poll history.

use anchor_lang::prelude::*;

use crate::state::CandidateResult;

#[event]
#[derive(Debug)]
pub struct PollCreated {
    pub poll_id: u64,
    pub admin: Pubkey,
    pub name: String,
    pub description: String,
    pub candidates: Vec<String>,
    pub start_time: u64,
    pub end_time: u64,
    pub tallier_pubkey: [u8; 32],
}

#[event]
pub struct VoterRegistered {
    pub poll_id: u64,
    pub voter: Pubkey,
}

/// Carries who voted and when, never the ballot, nullifier or choice.
#[event]
#[derive(Debug)]
pub struct VoteCast {
    pub poll_id: u64,
    pub voter: Pubkey,
    pub timestamp: i64,
}

#[event]
#[derive(Debug)]
pub struct ResultsPublished {
    pub poll_id: u64,
    pub publisher: Pubkey,
    pub results: Vec<CandidateResult>,
    pub total_votes: u64,
}
