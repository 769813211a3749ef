//=========================================================================
// Render Handle
//=========================================================================
//
// Backend-facing contract for anything a positioned entity can wrap.
//
// A handle stores its own transform (position, offset, rotation, scale)
// and reports its intrinsic size. The entity layer drives it through the
// setters below; the backend reads it through the getters.
//
// Transform order (as applied by a backend):
//   translate(position) → rotate(rotation) → scale(scale) → translate(-offset)
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== RenderHandle Trait ==================================================

/// A renderable object whose transform is owned by the caller.
///
/// All setters are plain stores: no clamping, normalization or batching.
/// Whatever value is set is exactly what the matching getter returns.
pub trait RenderHandle {
    /// Unscaled width/height of the handle's visual content.
    fn intrinsic_size(&self) -> Vec2;

    /// Point inside the handle (in unscaled local units) that `position`
    /// addresses.
    fn offset(&self) -> Vec2;

    fn set_offset(&mut self, offset: Vec2);

    /// Rotation in degrees, clockwise, around the offset point.
    fn rotation(&self) -> f32;

    fn set_rotation(&mut self, degrees: f32);

    /// Per-axis scale factors.
    fn scale(&self) -> Vec2;

    fn set_scale(&mut self, scale: Vec2);

    /// Position of the offset point in surface coordinates.
    fn position(&self) -> Vec2;

    fn set_position(&mut self, position: Vec2);
}
