//=========================================================================
// Render Model
//=========================================================================
//
// Backend-agnostic retained-mode types the screen core draws through.
//
// Architecture:
//   Surface (shared, Rc)
//     └─ Group (one per screen view, visibility switch)
//          └─ PositionedEntity<Node> (ranked, center-anchored)
//
// No rasterization happens here. A backend walks `Group::draw_order()`
// of each visible group and paints the nodes.
//
//=========================================================================

//=== Module Declarations =================================================

mod group;
mod handle;
mod node;
mod surface;

//=== Public API ==========================================================

pub use group::Group;
pub use handle::RenderHandle;
pub use node::{Color, Node, Shape};
pub use surface::{RedrawHook, Surface};
