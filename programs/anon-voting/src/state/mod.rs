//! State account definitions for the anonymous voting program

pub mod ballot;
pub mod poll;
pub mod poll_counter;
pub mod poll_results;
pub mod voter_registry;

pub use ballot::Ballot;
pub use poll::Poll;
pub use poll_counter::PollCounter;
pub use poll_results::{CandidateResult, PollResults};
pub use voter_registry::VoterRegistry;
