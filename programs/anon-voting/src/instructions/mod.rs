//! Instruction handlers for the anonymous voting program

pub mod initialize_counter;
pub mod initialize_poll;
pub mod publish_results;
pub mod register_voter;
pub mod vote;

pub use initialize_counter::*;
pub use initialize_poll::*;
pub use publish_results::*;
pub use register_voter::*;
pub use vote::*;
