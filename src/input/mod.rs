//! Input handling module
//!
//! Provides input mapping from text lines to host actions.

mod input_mapper;

pub use input_mapper::{InputAction, InputError, InputMapper, RESET_HOLD};
