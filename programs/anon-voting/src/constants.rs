//! Protocol constants
//!
//! Seed tags are part of the wire contract: clients and indexers derive
//! the same addresses from them, so they must never change.

/// PDA seed for the global poll counter.
pub const COUNTER_SEED: &[u8] = b"global_counter";

/// PDA seed prefix for polls: `[POLL_SEED, poll_id_le]`.
pub const POLL_SEED: &[u8] = b"poll";

/// PDA seed prefix for voter registry entries: `[VOTER_SEED, poll_id_le, voter]`.
pub const VOTER_SEED: &[u8] = b"voter";

/// PDA seed prefix for anonymous ballots: `[BALLOT_SEED, poll_id_le, nullifier]`.
pub const BALLOT_SEED: &[u8] = b"vote";

/// PDA seed prefix for published results: `[RESULTS_SEED, poll_id_le]`.
pub const RESULTS_SEED: &[u8] = b"results";

/// Id handed to the first poll after the counter is initialized.
pub const FIRST_POLL_ID: u64 = 1;

pub const MIN_CANDIDATES: usize = 1;
pub const MAX_CANDIDATES: usize = 10;

/// Max bytes per candidate name.
pub const MAX_CANDIDATE_NAME_LEN: usize = 32;

/// Max bytes for a poll name.
pub const MAX_POLL_NAME_LEN: usize = 32;

/// Max bytes for a poll description.
pub const MAX_POLL_DESCRIPTION_LEN: usize = 280;
