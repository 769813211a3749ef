//=========================================================================
// Node
//=========================================================================
//
// Stock retained-mode render handle: a shape plus its transform state.
//
// Nodes carry no drawing code. A backend walks a group's draw order and
// renders each node's shape using the stored transform.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::RenderHandle;

//=== Color ===============================================================

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque color from red/green/blue components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

//=== Shape ===============================================================

/// Visual content of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled rectangle of the given size.
    Rect { size: Vec2 },

    /// Filled circle of the given radius.
    Circle { radius: f32 },

    /// Single line of text.
    Text { content: String, font_size: f32 },
}

impl Shape {
    /// Measures the unscaled extent of the shape.
    ///
    /// Text is measured with a fixed glyph advance of 3/5 of the font size
    /// since no font backend is available at this layer.
    pub fn measure(&self) -> Vec2 {
        match self {
            Self::Rect { size } => *size,
            Self::Circle { radius } => Vec2::splat(radius * 2.0),
            Self::Text { content, font_size } => Vec2::new(
                content.chars().count() as f32 * font_size * 3.0 / 5.0,
                *font_size,
            ),
        }
    }
}

//=== Node ================================================================

/// A shape with fill color and transform state.
///
/// Freshly built nodes sit at the origin with no offset, no rotation and
/// unit scale. Wrapping one in a positioned entity re-anchors it at its
/// center.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    shape: Shape,
    fill: Color,
    position: Vec2,
    offset: Vec2,
    rotation: f32,
    scale: Vec2,
}

impl Node {
    //--- Construction -----------------------------------------------------

    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            fill: Color::default(),
            position: Vec2::ZERO,
            offset: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
        }
    }

    pub fn rect(width: f32, height: f32) -> Self {
        Self::new(Shape::Rect { size: Vec2::new(width, height) })
    }

    pub fn circle(radius: f32) -> Self {
        Self::new(Shape::Circle { radius })
    }

    pub fn text(content: impl Into<String>, font_size: f32) -> Self {
        Self::new(Shape::Text {
            content: content.into(),
            font_size,
        })
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    //--- Content ----------------------------------------------------------

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn set_fill(&mut self, fill: Color) {
        self.fill = fill;
    }

    /// Replaces the content of a text node.
    ///
    /// The offset is left alone, so an entity wrapping this node stays
    /// anchored where it was measured. Returns `false` for non-text nodes.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        match &mut self.shape {
            Shape::Text { content, .. } => {
                *content = text.into();
                true
            }
            _ => false,
        }
    }

    //--- Geometry ---------------------------------------------------------

    /// Axis-aligned area covered by the node, as `(min, max)` corners.
    ///
    /// Rotation is ignored.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let min = self.position - self.offset * self.scale;
        let max = min + self.shape.measure() * self.scale;
        (min.min(max), min.max(max))
    }

    /// Whether `point` falls inside [`bounds`](Self::bounds), edges included.
    pub fn contains(&self, point: Vec2) -> bool {
        let (min, max) = self.bounds();
        point.cmpge(min).all() && point.cmple(max).all()
    }
}

//--- Trait Implementations -----------------------------------------------

impl RenderHandle for Node {
    fn intrinsic_size(&self) -> Vec2 {
        self.shape.measure()
    }

    fn offset(&self) -> Vec2 {
        self.offset
    }

    fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    fn rotation(&self) -> f32 {
        self.rotation
    }

    fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    fn scale(&self) -> Vec2 {
        self.scale
    }

    fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // Measurement Tests
    //=====================================================================

    #[test]
    fn rect_measures_its_size() {
        let node = Node::rect(40.0, 20.0);
        assert_eq!(node.intrinsic_size(), Vec2::new(40.0, 20.0));
    }

    #[test]
    fn circle_measures_its_diameter() {
        let node = Node::circle(8.0);
        assert_eq!(node.intrinsic_size(), Vec2::new(16.0, 16.0));
    }

    #[test]
    fn text_measures_glyph_advance() {
        let node = Node::text("ABCDE", 20.0);
        assert_eq!(node.intrinsic_size(), Vec2::new(60.0, 20.0));
    }

    #[test]
    fn set_text_keeps_offset() {
        let mut node = Node::text("AB", 10.0);
        node.set_offset(Vec2::new(6.0, 5.0));

        assert!(node.set_text("ABCD"));
        assert_eq!(node.offset(), Vec2::new(6.0, 5.0));
        assert_eq!(node.intrinsic_size(), Vec2::new(24.0, 10.0));
    }

    #[test]
    fn set_text_rejects_non_text() {
        let mut node = Node::rect(1.0, 1.0);
        assert!(!node.set_text("nope"), "Rect nodes have no text content");
    }

    //=====================================================================
    // Bounds Tests
    //=====================================================================

    #[test]
    fn bounds_follow_position_offset_and_scale() {
        let mut node = Node::rect(20.0, 10.0);
        node.set_offset(Vec2::new(10.0, 5.0));
        node.set_position(Vec2::new(100.0, 100.0));
        node.set_scale(Vec2::splat(2.0));

        let (min, max) = node.bounds();
        assert_eq!(min, Vec2::new(80.0, 90.0));
        assert_eq!(max, Vec2::new(120.0, 110.0));
    }

    #[test]
    fn contains_includes_edges() {
        let node = Node::rect(10.0, 10.0);
        assert!(node.contains(Vec2::new(0.0, 0.0)));
        assert!(node.contains(Vec2::new(10.0, 10.0)));
        assert!(!node.contains(Vec2::new(10.5, 5.0)));
    }

    #[test]
    fn negative_scale_produces_ordered_bounds() {
        let mut node = Node::rect(10.0, 10.0);
        node.set_scale(Vec2::splat(-1.0));

        let (min, max) = node.bounds();
        assert!(min.x <= max.x && min.y <= max.y, "Corners must be ordered");
    }
}
