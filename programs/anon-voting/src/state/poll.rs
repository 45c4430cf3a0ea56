//! Poll definition account
//!
//! Written once by `initialize_poll` and never mutated afterwards. The
//! voting window is stored as unsigned unix seconds and compared against
//! the ledger clock, never against a client-supplied time.

use anchor_lang::prelude::*;

use crate::constants::{
    MAX_CANDIDATES, MAX_CANDIDATE_NAME_LEN, MAX_POLL_DESCRIPTION_LEN, MAX_POLL_NAME_LEN,
    MIN_CANDIDATES, POLL_SEED,
};
use crate::error::VotingError;

/// PDA Seeds: `[b"poll", poll_id.to_le_bytes()]`
#[account]
#[derive(InitSpace, Default)]
pub struct Poll {
    pub poll_id: u64,

    /// Poll creator; the only key allowed to register voters and publish results
    pub admin: Pubkey,

    #[max_len(32)]
    pub name: String,

    #[max_len(280)]
    pub description: String,

    /// Pinned to the ledger clock at creation
    pub voting_start: u64,

    pub voting_end: u64,

    /// Ballot order is insertion order
    #[max_len(10, 32)]
    pub candidates: Vec<String>,

    /// X25519 key ballots are sealed against
    pub tallier_pubkey: [u8; 32],

    pub bump: u8,
}

impl Poll {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    pub const SEED_PREFIX: &'static [u8] = POLL_SEED;

    /// Validate a poll definition before anything is written.
    ///
    /// Check order is part of the error contract: candidate count bounds,
    /// then the time range, then the string bounds.
    pub fn validate_definition(
        name: &str,
        description: &str,
        candidates: &[String],
        voting_start: u64,
        voting_end: u64,
    ) -> Result<()> {
        require!(candidates.len() >= MIN_CANDIDATES, VotingError::NoCandidates);
        require!(
            candidates.len() <= MAX_CANDIDATES,
            VotingError::TooManyCandidates
        );
        require!(voting_end > voting_start, VotingError::InvalidTimeRange);

        require!(name.len() <= MAX_POLL_NAME_LEN, VotingError::NameTooLong);
        require!(
            description.len() <= MAX_POLL_DESCRIPTION_LEN,
            VotingError::DescriptionTooLong
        );

        for (i, candidate) in candidates.iter().enumerate() {
            require!(
                !candidate.is_empty() && candidate.len() <= MAX_CANDIDATE_NAME_LEN,
                VotingError::InvalidCandidateName
            );
            require!(
                !candidates[..i].contains(candidate),
                VotingError::DuplicateCandidate
            );
        }

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        poll_id: u64,
        admin: Pubkey,
        name: String,
        description: String,
        voting_start: u64,
        voting_end: u64,
        candidates: Vec<String>,
        tallier_pubkey: [u8; 32],
        bump: u8,
    ) {
        self.poll_id = poll_id;
        self.admin = admin;
        self.name = name;
        self.description = description;
        self.voting_start = voting_start;
        self.voting_end = voting_end;
        self.candidates = candidates;
        self.tallier_pubkey = tallier_pubkey;
        self.bump = bump;
    }

    /// Ballots are accepted for `voting_start <= now <= voting_end`.
    pub fn require_voting_open(&self, now: i64) -> Result<()> {
        let now = i128::from(now);
        require!(
            now >= i128::from(self.voting_start),
            VotingError::VotingNotStarted
        );
        require!(now <= i128::from(self.voting_end), VotingError::VotingEnded);
        Ok(())
    }

    /// Results may only be published strictly after `voting_end`.
    pub fn require_voting_closed(&self, now: i64) -> Result<()> {
        require!(
            i128::from(now) > i128::from(self.voting_end),
            VotingError::VotingNotEnded
        );
        Ok(())
    }

    pub fn find_pda(program_id: &Pubkey, poll_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED_PREFIX, poll_id.to_le_bytes().as_ref()],
            program_id,
        )
    }
}

/// Convert the ledger clock to the unsigned seconds a poll window uses.
pub fn ledger_start_time(now: i64) -> Result<u64> {
    u64::try_from(now).map_err(|_| error!(VotingError::InvalidStartTime))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn open_poll(start: u64, end: u64) -> Poll {
        let mut poll = Poll::default();
        poll.initialize(
            1,
            Pubkey::new_unique(),
            "Poll".to_string(),
            String::new(),
            start,
            end,
            names(&["Yes", "No"]),
            [7u8; 32],
            255,
        );
        poll
    }

    #[test]
    fn test_check_order_count_before_time() {
        // Empty candidate list wins over a bad time range
        assert_eq!(
            Poll::validate_definition("p", "", &[], 100, 50).unwrap_err(),
            VotingError::NoCandidates.into()
        );
        let eleven: Vec<String> = (0..11).map(|i| format!("c{i}")).collect();
        assert_eq!(
            Poll::validate_definition("p", "", &eleven, 100, 50).unwrap_err(),
            VotingError::TooManyCandidates.into()
        );
    }

    #[test]
    fn test_time_range_must_be_strict() {
        let candidates = names(&["A"]);
        assert_eq!(
            Poll::validate_definition("p", "", &candidates, 100, 100).unwrap_err(),
            VotingError::InvalidTimeRange.into()
        );
        assert!(Poll::validate_definition("p", "", &candidates, 100, 101).is_ok());
    }

    #[test]
    fn test_string_bounds() {
        let candidates = names(&["A"]);
        let long_name = "n".repeat(MAX_POLL_NAME_LEN + 1);
        assert_eq!(
            Poll::validate_definition(&long_name, "", &candidates, 0, 1).unwrap_err(),
            VotingError::NameTooLong.into()
        );

        let long_desc = "d".repeat(MAX_POLL_DESCRIPTION_LEN + 1);
        assert_eq!(
            Poll::validate_definition("p", &long_desc, &candidates, 0, 1).unwrap_err(),
            VotingError::DescriptionTooLong.into()
        );

        assert!(Poll::validate_definition(
            &"n".repeat(MAX_POLL_NAME_LEN),
            &"d".repeat(MAX_POLL_DESCRIPTION_LEN),
            &candidates,
            0,
            1
        )
        .is_ok());
    }

    #[test]
    fn test_candidate_names() {
        assert_eq!(
            Poll::validate_definition("p", "", &names(&["A", ""]), 0, 1).unwrap_err(),
            VotingError::InvalidCandidateName.into()
        );
        let too_long = vec!["c".repeat(MAX_CANDIDATE_NAME_LEN + 1)];
        assert_eq!(
            Poll::validate_definition("p", "", &too_long, 0, 1).unwrap_err(),
            VotingError::InvalidCandidateName.into()
        );
        assert_eq!(
            Poll::validate_definition("p", "", &names(&["A", "B", "A"]), 0, 1).unwrap_err(),
            VotingError::DuplicateCandidate.into()
        );
    }

    #[test]
    fn test_voting_window_is_inclusive() {
        let poll = open_poll(1_000, 2_000);

        assert_eq!(
            poll.require_voting_open(999).unwrap_err(),
            VotingError::VotingNotStarted.into()
        );
        assert!(poll.require_voting_open(1_000).is_ok());
        assert!(poll.require_voting_open(2_000).is_ok());
        assert_eq!(
            poll.require_voting_open(2_001).unwrap_err(),
            VotingError::VotingEnded.into()
        );
    }

    #[test]
    fn test_voting_closed_is_strict() {
        let poll = open_poll(1_000, 2_000);

        assert_eq!(
            poll.require_voting_closed(2_000).unwrap_err(),
            VotingError::VotingNotEnded.into()
        );
        assert!(poll.require_voting_closed(2_001).is_ok());
        assert!(poll.require_voting_closed(-5).is_err());
    }

    #[test]
    fn test_negative_clock_is_invalid_start() {
        assert_eq!(
            ledger_start_time(-1).unwrap_err(),
            VotingError::InvalidStartTime.into()
        );
        assert_eq!(ledger_start_time(1_700_000_000).unwrap(), 1_700_000_000);
    }

    #[test]
    fn test_poll_size_covers_bounds() {
        assert!(
            Poll::LEN
                >= 8 + 8
                    + 32
                    + (4 + MAX_POLL_NAME_LEN)
                    + (4 + MAX_POLL_DESCRIPTION_LEN)
                    + 8
                    + 8
                    + 4
                    + MAX_CANDIDATES * (4 + MAX_CANDIDATE_NAME_LEN)
                    + 32
                    + 1
        );
    }
}
