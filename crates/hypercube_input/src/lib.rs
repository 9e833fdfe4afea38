//! Remote command input for the hypercube puzzle
//!
//! Parses the text commands a remote player can send and checks them
//! against the puzzle's current phase.

mod command;

pub use command::{Command, CommandError};
