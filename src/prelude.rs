//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use stagecraft::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Composition root
pub use crate::{App, AppBuilder, PlatformError};

// Entities
pub use crate::core::entity::{EntityBuilder, EntityError, EntityId, PositionedEntity};

// Input
pub use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton};

// Render model
pub use crate::core::render::{Color, Group, Node, RenderHandle, Shape, Surface};

// Screen system
pub use crate::core::screen::{Lifecycle, NavigationQueue, Navigator, Screen, ScreenController, View};
pub use crate::screens::ScreenSwitcher;
