//! Core picker logic — strip geometry, date mapping, and the glide animation.
//!
//! Nothing in this module depends on any TUI or rendering crate, and
//! nothing in it reads the clock: callers inject dates and instants.

pub mod label;
pub mod picker;
pub mod strip;
pub mod tween;
