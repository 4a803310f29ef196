//! Terminal engine for the NOCT portfolio terminal.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! [`Command`] trait and are registered by name. The session resolves typed
//! input, dispatches handlers, and plays their output back through an
//! animated, tick-driven scrollback.

pub mod boot;
pub mod clock;
pub mod commands;
pub mod content;
pub mod line;
pub mod markup;
pub mod registry;
pub mod screen;
pub mod session;

/// Register all built-in portfolio commands into a registry.
pub use commands::register_builtins;
/// Portfolio content model, loaded from embedded TOML.
pub use content::Profile;
/// A unit of rendered output: markup text + style tag + reveal delay.
pub use line::{OutputLine, Style};
/// A single executable command trait.
pub use registry::Command;
/// Registry of available commands with dispatch resolution.
pub use registry::CommandRegistry;
/// Shared handle passed to every command handler.
pub use registry::Context;
/// Scrollback, playback state machine, and pending-command queue.
pub use screen::Screen;
/// The running terminal session: history, input buffer, dispatch gate.
pub use session::Session;
