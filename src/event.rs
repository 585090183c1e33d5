//! Host-facing messages that drive the selector.

use crossterm::event::KeyEvent;

/// Messages accepted by [`Selector::update`].
///
/// [`Selector::update`]: crate::Selector::update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Keyboard input.
    Key(KeyEvent),
    /// The host's layout manager granted a new size.
    Resize { width: u16, height: u16 },
}
