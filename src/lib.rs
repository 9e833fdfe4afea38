//! Hypercube puzzle host
//!
//! Configuration, text input and the frame-stepped simulation around
//! [`hypercube_core::Puzzle`].

pub mod config;
pub mod input;
pub mod systems;
