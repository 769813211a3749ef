//=========================================================================
// Input
//=========================================================================
//
// Platform-independent input vocabulary.
//
// Events are produced by the platform layer and routed by the screen
// switcher to the current controller, one at a time.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
