//! Platform-agnostic input event types.
//!
//! Every backend maps its native input to these enums. The demo logic never
//! sees raw platform input.

use serde::{Deserialize, Serialize};

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute position.
    CursorMove { x: i32, y: i32 },
    /// Pointer pressed at absolute position (mouse or touch).
    PointerDown { x: i32, y: i32 },
    /// Pointer released.
    PointerUp { x: i32, y: i32 },
    /// A mapped key pressed.
    KeyPress(Key),
    /// User requested quit (window close, etc.).
    Quit,
}

/// Keys the demo responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Escape,
    S,
}
