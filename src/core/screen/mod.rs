//=========================================================================
// Screen System
//=========================================================================
//
// Contracts for mutually-exclusive screens sharing one drawing surface.
//
// Architecture:
//   ScreenSwitcher (crate::screens)
//     ├─ controllers: one per Screen variant
//     │    └─ View ── Group (visibility switch)
//     └─ NavigationQueue ◄── Navigator (cloned into controllers)
//
// Flow:
//   input → controller → Navigator::request() → switcher drains queue
//         → hide every controller → show the target controller
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;
use crate::core::render::Group;

//=== Module Declarations =================================================

mod navigator;

//=== Public API ==========================================================

pub use navigator::{NavigationQueue, Navigator};

//=== Screen ==============================================================

/// Navigable destinations.
///
/// Closed set: the switcher matches on it exhaustively, so adding a
/// variant (e.g. a results screen carrying a final score) does not compile
/// until a controller handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Title/start screen, shown at startup.
    Menu,

    /// Gameplay screen.
    Game,
}

//=== View Trait ==========================================================

/// Owns a screen's single top-level group and toggles its visibility.
///
/// Only `group`/`group_mut` are required. The lifecycle methods flip the
/// group and request a redraw; both are idempotent apart from the repeated
/// redraw request.
pub trait View {
    /// The container the composition root attaches to the surface.
    fn group(&self) -> &Group;

    fn group_mut(&mut self) -> &mut Group;

    fn show(&mut self) {
        self.group_mut().show();
    }

    fn hide(&mut self) {
        self.group_mut().hide();
    }

    fn is_visible(&self) -> bool {
        self.group().is_visible()
    }
}

//=== ScreenController Trait ==============================================

/// Owns a View (and optionally a model) for one screen.
///
/// Visibility is driven through [`Lifecycle`], which is implemented for
/// every controller and cannot be overridden. Screen-specific entry
/// actions (such as resetting a model before showing) must end in
/// `Lifecycle::show` to keep one path for visibility changes.
///
/// # Minimal Implementation
///
/// ```rust
/// use stagecraft::core::render::Group;
/// use stagecraft::core::screen::{Lifecycle, ScreenController, View};
///
/// struct CreditsView { group: Group }
///
/// impl View for CreditsView {
///     fn group(&self) -> &Group { &self.group }
///     fn group_mut(&mut self) -> &mut Group { &mut self.group }
/// }
///
/// struct CreditsController { view: CreditsView }
///
/// impl ScreenController for CreditsController {
///     fn view(&self) -> &dyn View { &self.view }
///     fn view_mut(&mut self) -> &mut dyn View { &mut self.view }
/// }
///
/// let mut credits = CreditsController { view: CreditsView { group: Group::new("credits") } };
/// credits.show();
/// assert!(credits.is_visible());
/// ```
pub trait ScreenController {
    fn view(&self) -> &dyn View;

    fn view_mut(&mut self) -> &mut dyn View;

    /// Called for each input event while this screen is current.
    ///
    /// Default implementation ignores input.
    fn handle_input(&mut self, _event: &InputEvent) {}

    /// Called on every pointer move, whether or not this screen is current.
    ///
    /// `position` is in surface coordinates. Default implementation ignores
    /// it.
    fn pointer_moved(&mut self, _position: Vec2) {}

    /// Called once per tick while this screen is current.
    ///
    /// Default implementation does nothing.
    fn update(&mut self, _dt: f32) {}
}

//=== Lifecycle Trait =====================================================

/// Show/hide delegation shared by every controller.
///
/// Blanket-implemented for all [`ScreenController`]s; controllers gain it
/// automatically and cannot replace it.
pub trait Lifecycle {
    fn show(&mut self);

    fn hide(&mut self);

    fn is_visible(&self) -> bool;
}

impl<C: ScreenController + ?Sized> Lifecycle for C {
    fn show(&mut self) {
        self.view_mut().show();
    }

    fn hide(&mut self) {
        self.view_mut().hide();
    }

    fn is_visible(&self) -> bool {
        self.view().is_visible()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
