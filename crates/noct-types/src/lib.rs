//! Foundation types shared across the NOCT workspace.
//!
//! Keeps the engine crate free of backend types: the TUI binary maps raw
//! terminal events into [`input::InputEvent`], and every fallible API speaks
//! [`error::NoctError`].

pub mod error;
pub mod input;

pub use error::{NoctError, Result};
pub use input::InputEvent;
