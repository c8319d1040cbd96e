//! Game sessions: modes, computer replies and the running score.
//!
//! This is the flow a front end needs around the core: apply a person's
//! move, let the computer answer when it is its turn, count finished games,
//! and take moves back.

pub mod config;
pub mod runner;
pub mod tally;

pub use config::{PlayMode, SessionConfig};
pub use runner::{Session, TurnReport};
pub use tally::ScoreTally;
