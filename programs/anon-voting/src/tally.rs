//! Off-chain tally helper
//!
//! The tallier decrypts every ballot of a poll with its secret key and
//! feeds the plaintexts here. Plaintexts that are not valid UTF-8 or do not
//! name a candidate are counted as rejected and left out of the results.
//! The output is the ordered list `publish_results` expects.

use crate::crypto::SealedBallot;
use crate::state::{CandidateResult, Poll};

#[derive(Debug, Clone)]
pub struct TallySheet {
    candidates: Vec<String>,
    counts: Vec<u64>,
    rejected: u64,
}

impl TallySheet {
    pub fn for_poll(poll: &Poll) -> Self {
        Self::new(poll.candidates.clone())
    }

    pub fn new(candidates: Vec<String>) -> Self {
        let counts = vec![0; candidates.len()];
        Self {
            candidates,
            counts,
            rejected: 0,
        }
    }

    /// Count one decrypted ballot. Returns the candidate index on success.
    pub fn record(&mut self, plaintext: &[u8]) -> Option<usize> {
        let index = std::str::from_utf8(plaintext)
            .ok()
            .and_then(|name| self.candidates.iter().position(|c| c == name));

        match index {
            Some(i) => self.counts[i] = self.counts[i].saturating_add(1),
            None => self.rejected = self.rejected.saturating_add(1),
        }
        index
    }

    /// Count one stored ballot payload. `open` performs the box decryption
    /// with the tallier's secret and returns `None` when authentication
    /// fails. Malformed payloads are rejected without calling `open`.
    pub fn record_sealed<F>(&mut self, payload: &[u8], open: F) -> Option<usize>
    where
        F: FnOnce(&SealedBallot) -> Option<Vec<u8>>,
    {
        match SealedBallot::parse(payload).ok().as_ref().and_then(open) {
            Some(plaintext) => self.record(&plaintext),
            None => {
                self.record_undecryptable();
                None
            }
        }
    }

    /// Ballots that failed to decrypt can be reported here so they show up
    /// in the rejected count.
    pub fn record_undecryptable(&mut self) {
        self.rejected = self.rejected.saturating_add(1);
    }

    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    pub fn into_results(self) -> Vec<CandidateResult> {
        self.candidates
            .into_iter()
            .zip(self.counts)
            .map(|(candidate_name, vote_count)| CandidateResult {
                candidate_name,
                vote_count,
            })
            .collect()
    }
}
