//=========================================================================
// Menu Screen
//=========================================================================
//
// Title screen shown at startup.
//
// Layout (surface-relative):
//   title   ── text, upper third
//   button  ── rect, center, rank 2
//   label   ── text on the button, rank 3
//   hint    ── text, lower fifth
//
// Enter, Space, or a left click on the button (or its label) requests the
// game screen.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::entity::{EntityBuilder, EntityError, EntityId};
use crate::core::input::{InputEvent, KeyCode, MouseButton};
use crate::core::render::{Color, Group, Node};
use crate::core::screen::{Navigator, Screen, ScreenController, View};

//=== Constants ===========================================================

const TITLE: &str = "STAGECRAFT";
const START_LABEL: &str = "START";
const HINT: &str = "Press Enter or click Start";

const BUTTON_SIZE: Vec2 = Vec2::new(220.0, 64.0);
const BUTTON_FILL: Color = Color::rgb(51, 115, 217);

//=== MenuView ============================================================

/// Entities of the title screen.
#[derive(Debug)]
pub struct MenuView {
    group: Group,
    title: EntityId,
    button: EntityId,
    label: EntityId,
    hint: EntityId,
}

impl MenuView {
    /// Lays out the menu on a surface of `bounds`.
    pub fn new(bounds: Vec2) -> Result<Self, EntityError> {
        let center = bounds * 0.5;
        let mut group = Group::new("menu");

        let title = group.add(
            EntityBuilder::new(bounds)
                .handle(Node::text(TITLE, 48.0))
                .y(bounds.y * 0.3)
                .build()?,
        );

        let button = group.add(
            EntityBuilder::new(bounds)
                .handle(Node::rect(BUTTON_SIZE.x, BUTTON_SIZE.y).with_fill(BUTTON_FILL))
                .rank(2)
                .position(center)
                .build()?,
        );

        let label = group.add(
            EntityBuilder::new(bounds)
                .handle(Node::text(START_LABEL, 28.0))
                .rank(3)
                .position(center)
                .build()?,
        );

        let hint = group.add(
            EntityBuilder::new(bounds)
                .handle(Node::text(HINT, 16.0).with_fill(Color::rgb(179, 179, 179)))
                .y(bounds.y * 0.8)
                .build()?,
        );

        Ok(Self {
            group,
            title,
            button,
            label,
            hint,
        })
    }

    pub fn title(&self) -> EntityId {
        self.title
    }

    pub fn button(&self) -> EntityId {
        self.button
    }

    pub fn label(&self) -> EntityId {
        self.label
    }

    pub fn hint(&self) -> EntityId {
        self.hint
    }

    /// Whether `point` lands on the start button or its label.
    ///
    /// Always false while the menu is hidden.
    pub fn hits_start(&self, point: Vec2) -> bool {
        matches!(self.group.hit_test(point), Some(id) if id == self.button || id == self.label)
    }
}

impl View for MenuView {
    fn group(&self) -> &Group {
        &self.group
    }

    fn group_mut(&mut self) -> &mut Group {
        &mut self.group
    }
}

//=== MenuController ======================================================

/// Drives the title screen and asks for the game when the player starts.
#[derive(Debug)]
pub struct MenuController {
    view: MenuView,
    navigator: Navigator,
    cursor: Vec2,
}

impl MenuController {
    pub fn new(view: MenuView, navigator: Navigator) -> Self {
        Self {
            view,
            navigator,
            cursor: Vec2::ZERO,
        }
    }

    pub fn menu_view(&self) -> &MenuView {
        &self.view
    }

    /// Last pointer position reported through `pointer_moved`.
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    fn request_start(&self) {
        debug!(target: "navigation", "Start requested from menu");
        self.navigator.request(Screen::Game);
    }
}

impl ScreenController for MenuController {
    fn view(&self) -> &dyn View {
        &self.view
    }

    fn view_mut(&mut self) -> &mut dyn View {
        &mut self.view
    }

    fn handle_input(&mut self, event: &InputEvent) {
        if let Some(KeyCode::Enter | KeyCode::Space) = event.pressed_key() {
            self.request_start();
        } else if event.pressed_button() == Some(MouseButton::Left) && self.view.hits_start(self.cursor) {
            self.request_start();
        }
    }

    fn pointer_moved(&mut self, position: Vec2) {
        self.cursor = position;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
