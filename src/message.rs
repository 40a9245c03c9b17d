//! Editor message types.
//!
//! Everything a host can tell the editor is a [`Message`]: pointer and key
//! events in screen space plus toolbar-style actions.

use polycanvas_raster::Color;

use crate::geometry::Point;
use crate::input::{Key, Modifiers, PointerButton, Tool};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Pointer
    /// Button pressed at a screen position
    PointerPressed {
        position: Point,
        button: PointerButton,
        modifiers: Modifiers,
    },
    /// Pointer moved to a screen position
    PointerMoved { position: Point },
    /// Button released at a screen position
    PointerReleased {
        position: Point,
        button: PointerButton,
    },
    /// Wheel scrolled over a screen position (negative delta scrolls up)
    Wheel { position: Point, delta_y: f64 },

    // Keyboard
    KeyPressed { key: Key, modifiers: Modifiers },

    // Toolbar
    ActivateTool(Tool),
    SetColor(Color),
    SetOpacity(f32),
    DeleteSelected,
    ClearCanvas,
    ResetZoom,

    /// Host canvas resized
    Resize { width: u32, height: u32 },
}
