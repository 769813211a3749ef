//=========================================================================
// Entity Builder
//=========================================================================
//
// Fluent construction for positioned entities with optional overrides.
//
// Defaults: rank 1, x/y at the surface midpoint (each axis independent).
// The handle is the only required input; building without one fails.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::{EntityError, PositionedEntity};
use crate::core::render::RenderHandle;

//=== EntityBuilder =======================================================

/// Builder for [`PositionedEntity`].
///
/// The handle's content must be complete before [`build`](Self::build):
/// the center offset is measured from it exactly once.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use stagecraft::core::entity::EntityBuilder;
/// use stagecraft::core::render::Node;
///
/// let button = EntityBuilder::new(Vec2::new(800.0, 600.0))
///     .handle(Node::rect(200.0, 60.0))
///     .rank(2)
///     .y(420.0)
///     .build()?;
///
/// assert_eq!(button.x(), 400.0);
/// assert_eq!(button.y(), 420.0);
/// # Ok::<(), stagecraft::core::entity::EntityError>(())
/// ```
#[derive(Debug)]
pub struct EntityBuilder<H: RenderHandle> {
    bounds: Vec2,
    handle: Option<H>,
    rank: i32,
    x: Option<f32>,
    y: Option<f32>,
}

impl<H: RenderHandle> EntityBuilder<H> {
    /// Starts a builder for a surface of the given size.
    pub fn new(bounds: Vec2) -> Self {
        Self {
            bounds,
            handle: None,
            rank: PositionedEntity::<H>::DEFAULT_RANK,
            x: None,
            y: None,
        }
    }

    pub fn handle(mut self, handle: H) -> Self {
        self.handle = Some(handle);
        self
    }

    pub fn rank(mut self, rank: i32) -> Self {
        self.rank = rank;
        self
    }

    pub fn x(mut self, x: f32) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f32) -> Self {
        self.y = Some(y);
        self
    }

    pub fn position(self, position: Vec2) -> Self {
        self.x(position.x).y(position.y)
    }

    /// Builds the entity, anchoring its handle at the center.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::MissingHandle`] if no handle was supplied.
    pub fn build(self) -> Result<PositionedEntity<H>, EntityError> {
        let handle = self.handle.ok_or(EntityError::MissingHandle)?;
        let center = self.bounds * 0.5;

        Ok(PositionedEntity::assemble(
            handle,
            self.rank,
            self.x.unwrap_or(center.x),
            self.y.unwrap_or(center.y),
        ))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
