//! Platform-agnostic input event types.
//!
//! The TUI binary maps its native key events to these variants. The engine
//! never sees raw backend input, which keeps the input loop testable without
//! a live terminal.

use serde::{Deserialize, Serialize};

/// A platform-agnostic input event delivered to the terminal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// Printable character typed into the input buffer.
    Char(char),
    /// Delete the character left of the cursor.
    Backspace,
    /// Submit the current buffer (Enter).
    Submit,
    /// Recall the previous (older) history entry.
    HistoryPrev,
    /// Recall the next (newer) history entry.
    HistoryNext,
    /// Tab-complete the current buffer.
    Complete,
    /// Interrupt shortcut (Ctrl-C): clear the buffer, echo a marker.
    Interrupt,
    /// Clear-screen shortcut (Ctrl-L).
    ClearScreen,
    /// The surface was resized to `cols` x `rows`.
    Resize { cols: u16, rows: u16 },
    /// User requested quit (window close, Ctrl-Q).
    Quit,
}
