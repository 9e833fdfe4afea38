//! Render output for the hypercube puzzle
//!
//! This crate does not draw anything itself. It converts a puzzle's state
//! into plain, GPU-ready data for whatever renderer hosts the puzzle.
//!
//! ## Key Components
//!
//! - [`frame::HypercubeFrame`] - projected vertices, edge segments and face triangles
//! - [`palette::MaterialColors`] - edge, vertex and face colors from the current tint
//! - [`palette::palette_color`] - RGBA for one of the four vertex colors

pub mod frame;
pub mod palette;

pub use frame::{from_to_up, EdgeSegment, FrameVertex, HypercubeFrame};
pub use palette::{hsv_to_rgb, palette_color, parse_hex, vertex_display_colors, MaterialColors, FACE_ALPHA, PALETTE_HEX};
