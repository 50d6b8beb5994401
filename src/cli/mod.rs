//! Terminal front-end.
//!
//! - `input`: prompt line parsing
//! - `display`: text rendering of views and outcomes
//! - `play`: the interactive loop driving the controller

pub mod display;
pub mod input;
pub mod play;
