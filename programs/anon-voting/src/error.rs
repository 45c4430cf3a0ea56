//! Error types for the anonymous voting program
//!
//! Error codes are stable across versions for client compatibility.
//! New variants are only ever appended.

use anchor_lang::prelude::*;

#[error_code]
pub enum VotingError {
    // ========== Voting Window / Registry ==========

    #[msg("Voting has not started yet")]
    VotingNotStarted, // 6000

    #[msg("Voting has ended")]
    VotingEnded, // 6001

    #[msg("Voter is not registered for this poll")]
    VoterNotRegistered, // 6002

    #[msg("Voter has already voted")]
    AlreadyVoted, // 6003

    // ========== Poll Definition ==========

    #[msg("Cannot have more than 10 candidates")]
    TooManyCandidates, // 6004

    #[msg("Poll must have at least one candidate")]
    NoCandidates, // 6005

    /// Ledger clock is not representable as unsigned unix seconds
    #[msg("Start time cannot be in the past")]
    InvalidStartTime, // 6006

    #[msg("End time must be after start time")]
    InvalidTimeRange, // 6007

    // ========== Results ==========

    #[msg("Voting has not ended yet")]
    VotingNotEnded, // 6008

    #[msg("Tally count must match number of candidates")]
    InvalidTallyCount, // 6009

    // ========== Ballots ==========

    #[msg("Encrypted vote data is invalid or too small")]
    InvalidEncryptedVote, // 6010

    // ========== Authorization / Structural ==========

    #[msg("Unauthorized: caller is not poll admin")]
    Unauthorized, // 6011

    #[msg("Poll counter already initialized")]
    AlreadyInitialized, // 6012

    // ========== Input Bounds ==========

    #[msg("Poll name exceeds 32 bytes")]
    NameTooLong, // 6013

    #[msg("Poll description exceeds 280 bytes")]
    DescriptionTooLong, // 6014

    #[msg("Candidate names must be non-empty and at most 32 bytes")]
    InvalidCandidateName, // 6015

    #[msg("Candidate names must be unique")]
    DuplicateCandidate, // 6016

    #[msg("Encrypted vote exceeds ballot capacity")]
    EncryptedVoteTooLarge, // 6017

    #[msg("Invalid nullifier: cannot be all zeros")]
    InvalidNullifier, // 6018

    #[msg("Tally candidates do not match poll candidates")]
    TallyCandidateMismatch, // 6019

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow, // 6020
}
