//! tui-completions — multi-column completion selector widget.
//!
//! Presents completion candidates grouped into named categories, one column
//! per category. The host constructs a [`Selector`], feeds it a candidate
//! source with [`Selector::set_values`], routes key events through
//! [`Selector::update`], and draws the current state with [`render::draw`].
//! When the interaction closes the host reads either an accepted entry or
//! treats close-without-acceptance as cancellation.
//!
//! The widget is transient and in-memory: no persisted state, no I/O, no
//! background work. Drawing is a pure read, safe to repeat between updates.

pub mod column;
pub mod error;
pub mod event;
pub mod input;
pub mod keymap;
pub mod layout;
pub mod render;
pub mod selector;
pub mod style;
pub mod values;

pub use error::SelectError;
pub use event::Message;
pub use keymap::KeyMap;
pub use layout::LayoutConfig;
pub use selector::Selector;
pub use style::Styles;
pub use values::{Entry, Values};
