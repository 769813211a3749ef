//=========================================================================
// Entity System
//=========================================================================
//
// Positioned entities: render handles with identity, stacking rank and a
// center-anchored transform.
//
// Architecture:
//   EntityBuilder ──build()──> PositionedEntity<H: RenderHandle>
//                                 ├─ id: EntityId (monotonic, never reused)
//                                 ├─ rank, rotation, scale, x, y
//                                 └─ handle: H (offset = size / 2)
//
//=========================================================================

//=== Module Declarations =================================================

mod builder;
mod positioned;

//=== Public API ==========================================================

pub use builder::EntityBuilder;
pub use positioned::{EntityId, PositionedEntity};

//=== EntityError =========================================================

/// Entity construction failures.
///
/// These indicate programmer error and are reported, not recovered from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    /// The builder was finished without a render handle.
    #[error("positioned entity requires a render handle")]
    MissingHandle,
}
