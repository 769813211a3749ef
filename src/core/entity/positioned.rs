//=========================================================================
// Positioned Entity
//=========================================================================
//
// Transform wrapper anchoring a render handle at its visual center.
//
// Every setter writes through to the handle immediately. The handle's
// offset is measured once, at construction, to half its intrinsic size.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec2;

//=== Internal Dependencies ===============================================

use crate::core::render::RenderHandle;

//=== EntityId ============================================================

/// Process-unique entity identity.
///
/// Allocated from a monotonic counter starting at 1; values are never
/// reused, even after the entity is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

static NEXT_ENTITY_ID: AtomicU64 = AtomicU64::new(1);

impl EntityId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ENTITY_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//=== PositionedEntity ====================================================

/// A render handle with identity, stacking rank and a center-anchored
/// transform.
///
/// Built through [`EntityBuilder`](super::EntityBuilder) or
/// [`PositionedEntity::new`].
///
/// # Example
///
/// ```
/// use glam::Vec2;
/// use stagecraft::core::entity::PositionedEntity;
/// use stagecraft::core::render::{Node, RenderHandle};
///
/// let mut player = PositionedEntity::new(Node::rect(40.0, 20.0), Vec2::new(800.0, 600.0));
/// assert_eq!(player.handle().offset(), Vec2::new(20.0, 10.0));
///
/// player.set_rotation(90.0);
/// assert_eq!(player.handle().rotation(), 90.0);
/// ```
#[derive(Debug)]
pub struct PositionedEntity<H: RenderHandle> {
    id: EntityId,
    rank: i32,
    rotation: f32,
    scale: f32,
    x: f32,
    y: f32,
    handle: H,
}

impl<H: RenderHandle> PositionedEntity<H> {
    /// Default stacking rank.
    pub const DEFAULT_RANK: i32 = 1;

    //--- Construction -----------------------------------------------------

    /// Wraps `handle` with default rank, centered on a surface of `bounds`.
    pub fn new(handle: H, bounds: Vec2) -> Self {
        let center = bounds * 0.5;
        Self::assemble(handle, Self::DEFAULT_RANK, center.x, center.y)
    }

    /// Allocates an identity, anchors the handle at its center and pushes
    /// the initial transform onto it.
    pub(super) fn assemble(mut handle: H, rank: i32, x: f32, y: f32) -> Self {
        handle.set_offset(handle.intrinsic_size() * 0.5);
        handle.set_rotation(0.0);
        handle.set_scale(Vec2::ONE);
        handle.set_position(Vec2::new(x, y));

        Self {
            id: EntityId::next(),
            rank,
            rotation: 0.0,
            scale: 1.0,
            x,
            y,
            handle,
        }
    }

    //--- Identity & Rank --------------------------------------------------

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Stacking rank; higher ranks draw above and hit-test before lower.
    pub fn rank(&self) -> i32 {
        self.rank
    }

    pub fn set_rank(&mut self, rank: i32) {
        self.rank = rank;
    }

    //--- Transform --------------------------------------------------------

    /// Rotation in degrees. Not normalized.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
        self.handle.set_rotation(degrees);
    }

    /// Uniform scale factor.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Applies `factor` to both axes. The center stays where it is.
    pub fn set_scale(&mut self, factor: f32) {
        self.scale = factor;
        self.handle.set_scale(Vec2::splat(factor));
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
        self.handle.set_position(Vec2::new(x, self.y));
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn set_y(&mut self, y: f32) {
        self.y = y;
        self.handle.set_position(Vec2::new(self.x, y));
    }

    /// Center position in surface coordinates.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.x = position.x;
        self.y = position.y;
        self.handle.set_position(position);
    }

    //--- Handle -----------------------------------------------------------

    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Mutable access to the wrapped handle for content changes.
    ///
    /// Transform changes made here bypass the entity's bookkeeping; use
    /// the entity setters for those.
    pub fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    /// Swaps the wrapped handle, returning the previous one.
    ///
    /// Identity, rank and transform bookkeeping are kept and the stored
    /// rotation/scale/position are pushed onto the new handle. Its offset
    /// is NOT re-measured; call [`recenter`](Self::recenter) for that.
    pub fn set_handle(&mut self, mut handle: H) -> H {
        handle.set_rotation(self.rotation);
        handle.set_scale(Vec2::splat(self.scale));
        handle.set_position(self.position());
        std::mem::replace(&mut self.handle, handle)
    }

    /// Re-anchors the handle at half its current intrinsic size.
    pub fn recenter(&mut self) {
        let offset = self.handle.intrinsic_size() * 0.5;
        self.handle.set_offset(offset);
    }
}

//--- Trait Implementations -----------------------------------------------

impl<H: RenderHandle> PartialEq for PositionedEntity<H> {
    /// Entities compare by identity only.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<H: RenderHandle> Eq for PositionedEntity<H> {}

//=========================================================================
// Unit Tests
//=========================================================================
