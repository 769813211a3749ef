//=========================================================================
// Group
//=========================================================================
//
// The single top-level container a screen view owns.
//
// A group owns every entity of its screen and a visibility flag. Its
// visibility is the only show/hide mechanism; flipping it requests a
// redraw on the attached surface.
//
// Startup ordering: a group may be shown or hidden before it is attached.
// In that case the flip still happens and the redraw is skipped.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::rc::Rc;

use glam::Vec2;
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{Node, Surface};
use crate::core::entity::{EntityId, PositionedEntity};

//=== Group ===============================================================

/// Entity container with a single visibility switch.
///
/// Groups start hidden and unattached.
#[derive(Debug)]
pub struct Group {
    name: String,
    visible: bool,
    entities: Vec<PositionedEntity<Node>>,
    surface: Option<Rc<Surface>>,
}

impl Group {
    //--- Construction -----------------------------------------------------

    /// Creates an empty, hidden, unattached group.
    ///
    /// `name` is used in log output only.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: false,
            entities: Vec::new(),
            surface: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    //--- Surface Attachment -----------------------------------------------

    /// Attaches the group to the shared drawing surface.
    ///
    /// Meant to be called once at startup. A second call warns and
    /// replaces the previous attachment.
    pub fn attach(&mut self, surface: Rc<Surface>) {
        if self.surface.replace(surface).is_some() {
            warn!("Group '{}' was already attached and has been re-attached", self.name);
        } else {
            debug!("Group '{}' attached to surface", self.name);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&Rc<Surface>> {
        self.surface.as_ref()
    }

    //--- Visibility -------------------------------------------------------

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Makes the group visible, then requests a redraw.
    pub fn show(&mut self) {
        self.visible = true;
        self.request_redraw();
    }

    /// Makes the group invisible, then requests a redraw.
    pub fn hide(&mut self) {
        self.visible = false;
        self.request_redraw();
    }

    fn request_redraw(&self) {
        match &self.surface {
            Some(surface) => surface.request_redraw(),
            None => debug!("Group '{}' not attached, redraw skipped", self.name),
        }
    }

    //--- Entities ---------------------------------------------------------

    /// Takes ownership of `entity`, returning its identity for lookup.
    pub fn add(&mut self, entity: PositionedEntity<Node>) -> EntityId {
        let id = entity.id();
        self.entities.push(entity);
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&PositionedEntity<Node>> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut PositionedEntity<Node>> {
        self.entities.iter_mut().find(|e| e.id() == id)
    }

    /// Removes an entity, preserving the insertion order of the rest.
    pub fn remove(&mut self, id: EntityId) -> Option<PositionedEntity<Node>> {
        let pos = self.entities.iter().position(|e| e.id() == id)?;
        Some(self.entities.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PositionedEntity<Node>> {
        self.entities.iter()
    }

    //--- Rendering & Picking ----------------------------------------------

    /// Entities in paint order: ascending rank, insertion order on ties.
    ///
    /// Hidden groups paint nothing.
    pub fn draw_order(&self) -> Vec<&PositionedEntity<Node>> {
        if !self.visible {
            return Vec::new();
        }

        let mut ordered: Vec<_> = self.entities.iter().collect();
        ordered.sort_by_key(|e| e.rank());
        ordered
    }

    /// Topmost entity under `point`, if any.
    ///
    /// Highest rank wins; on equal rank the later-added entity wins, as it
    /// paints on top. Hidden groups never hit.
    pub fn hit_test(&self, point: Vec2) -> Option<EntityId> {
        if !self.visible {
            return None;
        }

        self.entities
            .iter()
            .filter(|e| e.handle().contains(point))
            .max_by_key(|e| e.rank())
            .map(|e| e.id())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::EntityBuilder;

    const BOUNDS: Vec2 = Vec2::new(200.0, 100.0);

    fn square(rank: i32, side: f32) -> PositionedEntity<Node> {
        EntityBuilder::new(BOUNDS)
            .handle(Node::rect(side, side))
            .rank(rank)
            .build()
            .unwrap()
    }

    fn attached() -> (Group, Rc<Surface>) {
        let surface = Rc::new(Surface::new(BOUNDS.x, BOUNDS.y));
        let mut group = Group::new("test");
        group.attach(Rc::clone(&surface));
        (group, surface)
    }

    //=====================================================================
    // Visibility Tests
    //=====================================================================

    #[test]
    fn starts_hidden_and_unattached() {
        let group = Group::new("fresh");
        assert!(!group.is_visible());
        assert!(!group.is_attached());
    }

    #[test]
    fn show_hide_show_leaves_visible() {
        let (mut group, _surface) = attached();

        group.show();
        group.hide();
        group.show();

        assert!(group.is_visible());
    }

    #[test]
    fn hide_is_idempotent() {
        let (mut group, surface) = attached();
        group.show();

        group.hide();
        group.hide();

        assert!(!group.is_visible());
        assert_eq!(surface.redraw_requests(), 3, "Each flip requests a redraw");
    }

    #[test]
    fn unattached_flip_skips_redraw() {
        let mut group = Group::new("orphan");

        group.show();
        assert!(group.is_visible(), "Visibility flips even without a surface");

        group.hide();
        assert!(!group.is_visible());
    }

    #[test]
    fn reattach_replaces_surface() {
        let (mut group, first) = attached();
        let second = Rc::new(Surface::new(1.0, 1.0));

        group.attach(Rc::clone(&second));
        group.show();

        assert_eq!(first.redraw_requests(), 0);
        assert_eq!(second.redraw_requests(), 1);
    }

    //=====================================================================
    // Entity Ownership Tests
    //=====================================================================

    #[test]
    fn add_get_remove_by_identity() {
        let mut group = Group::new("entities");
        let id = group.add(square(1, 10.0));

        assert_eq!(group.len(), 1);
        assert!(group.get(id).is_some());

        group.get_mut(id).unwrap().set_x(3.0);
        assert_eq!(group.get(id).unwrap().x(), 3.0);

        let removed = group.remove(id).unwrap();
        assert_eq!(removed.id(), id);
        assert!(group.is_empty());
        assert!(group.remove(id).is_none());
    }

    //=====================================================================
    // Draw Order Tests
    //=====================================================================

    #[test]
    fn draw_order_sorts_by_rank_stably() {
        let (mut group, _surface) = attached();
        let top = group.add(square(5, 1.0));
        let low_a = group.add(square(1, 1.0));
        let low_b = group.add(square(1, 1.0));
        group.show();

        let order: Vec<EntityId> = group.draw_order().iter().map(|e| e.id()).collect();

        assert_eq!(order, vec![low_a, low_b, top]);
    }

    #[test]
    fn hidden_group_draws_nothing() {
        let mut group = Group::new("hidden");
        group.add(square(1, 1.0));

        assert!(group.draw_order().is_empty());
    }

    //=====================================================================
    // Hit Test Tests
    //=====================================================================

    #[test]
    fn hit_test_prefers_highest_rank() {
        let (mut group, _surface) = attached();
        group.add(square(1, 50.0));
        let above = group.add(square(3, 20.0));
        group.add(square(2, 40.0));
        group.show();

        assert_eq!(group.hit_test(Vec2::new(100.0, 50.0)), Some(above));
    }

    #[test]
    fn hit_test_ties_go_to_latest() {
        let (mut group, _surface) = attached();
        group.add(square(1, 10.0));
        let later = group.add(square(1, 10.0));
        group.show();

        assert_eq!(group.hit_test(Vec2::new(100.0, 50.0)), Some(later));
    }

    #[test]
    fn hit_test_misses_outside_and_when_hidden() {
        let (mut group, _surface) = attached();
        group.add(square(1, 10.0));

        assert_eq!(group.hit_test(Vec2::new(100.0, 50.0)), None, "Hidden groups never hit");

        group.show();
        assert_eq!(group.hit_test(Vec2::new(0.0, 0.0)), None);
    }
}
