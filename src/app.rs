//=========================================================================
// Stagecraft App
//
// Composition root: builds the surface, the screens and the switcher,
// then hands everything to the platform.
//
// Architecture:
// ```text
//     AppBuilder  ──build()──>  App  ──run()──>  Platform (winit loop)
//         │                      │
//         ├─ with_title()        ├─ handle_input()  → switcher → requests
//         ├─ with_surface_size() ├─ update()
//         └─ with_tps()          └─ render_frame()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::rc::Rc;
use std::time::Duration;

use glam::Vec2;
use log::{info, trace};

//=== Internal Dependencies ===============================================

use crate::core::entity::EntityError;
use crate::core::input::InputEvent;
use crate::core::render::Surface;
use crate::core::screen::{Lifecycle, NavigationQueue, View};
use crate::platform::{Platform, PlatformError};
use crate::screens::{GameController, GameView, MenuController, MenuView, ScreenSwitcher};

//=== AppBuilder ==========================================================

/// Builder for configuring and constructing an [`App`].
///
/// # Default Values
///
/// - **Title**: `"Stagecraft"`
/// - **Surface**: 800×600 logical pixels
/// - **TPS**: 60.0 (updates per second)
///
/// # Examples
///
/// ```no_run
/// use stagecraft::AppBuilder;
///
/// let app = AppBuilder::new()
///     .with_title("Demo")
///     .with_surface_size(1024.0, 768.0)
///     .with_tps(120.0)
///     .build()
///     .expect("screens build");
///
/// app.run().expect("event loop");
/// ```
#[derive(Debug, Clone)]
pub struct AppBuilder {
    title: String,
    surface_size: Vec2,
    tps: f64,
}

impl AppBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: String::from("Stagecraft"),
            surface_size: Vec2::new(800.0, 600.0),
            tps: 60.0,
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the logical size of the drawing surface (and the window).
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive.
    pub fn with_surface_size(mut self, width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "Surface size must be positive, got {}x{}",
            width,
            height
        );
        self.surface_size = Vec2::new(width, height);
        self
    }

    /// Sets the target ticks per second for `update`.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Builds the app and enters the menu.
    ///
    /// Each screen's group is attached to the shared surface exactly once
    /// before the switcher issues the initial show.
    pub fn build(self) -> Result<App, EntityError> {
        info!(
            "Building app '{}' (surface: {}x{}, TPS: {})",
            self.title, self.surface_size.x, self.surface_size.y, self.tps
        );

        let surface = Rc::new(Surface::new(self.surface_size.x, self.surface_size.y));
        let queue = NavigationQueue::new();

        let mut menu_view = MenuView::new(surface.size())?;
        menu_view.group_mut().attach(Rc::clone(&surface));

        let mut game_view = GameView::new(surface.size())?;
        game_view.group_mut().attach(Rc::clone(&surface));

        let menu = MenuController::new(menu_view, queue.navigator());
        let game = GameController::new(game_view, queue.navigator());

        let mut switcher = ScreenSwitcher::new(menu, game, queue);
        switcher.start();

        Ok(App {
            title: self.title,
            tps: self.tps,
            surface,
            switcher,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== App =================================================================

/// Running front-end: the shared surface plus the screen switcher.
///
/// Single-threaded. Input and ticks are applied synchronously, and any
/// navigation they request is enacted before the call returns.
#[derive(Debug)]
pub struct App {
    title: String,
    tps: f64,
    surface: Rc<Surface>,
    switcher: ScreenSwitcher,
}

impl App {
    //--- Stimuli ----------------------------------------------------------

    /// Routes `event` to the current screen, then applies any navigation
    /// it requested.
    pub fn handle_input(&mut self, event: &InputEvent) {
        trace!("Input: {:?}", event);
        self.switcher.handle_input(event);
        self.switcher.process_requests();
    }

    /// Ticks the current screen by `dt` seconds, then applies any
    /// navigation it requested.
    pub fn update(&mut self, dt: f32) {
        self.switcher.update(dt);
        self.switcher.process_requests();
    }

    /// Walks the visible screens in paint order.
    ///
    /// Returns the number of entities drawn.
    pub fn render_frame(&self) -> usize {
        let mut drawn = 0;

        for controller in self.switcher.controllers().filter(|c| c.is_visible()) {
            let group = controller.view().group();
            for entity in group.draw_order() {
                trace!(
                    "Draw {} entity {} (rank {}) at ({}, {})",
                    group.name(),
                    entity.id(),
                    entity.rank(),
                    entity.x(),
                    entity.y()
                );
                drawn += 1;
            }
        }

        drawn
    }

    //--- Accessors --------------------------------------------------------

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tps(&self) -> f64 {
        self.tps
    }

    /// Fixed interval between `update` calls.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tps)
    }

    pub fn surface(&self) -> &Rc<Surface> {
        &self.surface
    }

    pub fn switcher(&self) -> &ScreenSwitcher {
        &self.switcher
    }

    //--- Execution --------------------------------------------------------

    /// Opens the window and blocks until it is closed.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting '{}' (TPS: {})", self.title, self.tps);

        let result = Platform::new(self).run();

        info!("Shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crate::core::screen::Screen;

    fn app() -> App {
        AppBuilder::new().build().expect("app builds")
    }

    //=====================================================================
    // AppBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = AppBuilder::new();
        assert_eq!(builder.title, "Stagecraft");
        assert_eq!(builder.surface_size, Vec2::new(800.0, 600.0));
        assert_eq!(builder.tps, 60.0);
    }

    #[test]
    fn builder_with_title() {
        let builder = AppBuilder::new().with_title("Demo");
        assert_eq!(builder.title, "Demo");
    }

    #[test]
    fn builder_with_tps() {
        let builder = AppBuilder::new().with_tps(120.0);
        assert_eq!(builder.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        AppBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        AppBuilder::new().with_tps(-60.0);
    }

    #[test]
    #[should_panic(expected = "Surface size must be positive")]
    fn builder_with_surface_size_panics_on_zero_width() {
        AppBuilder::new().with_surface_size(0.0, 600.0);
    }

    #[test]
    fn builder_with_surface_size() {
        let app = AppBuilder::new().with_surface_size(320.0, 240.0).build().expect("app");
        assert_eq!(app.surface().size(), Vec2::new(320.0, 240.0));
    }

    //=====================================================================
    // App Tests
    //=====================================================================

    #[test]
    fn build_enters_menu() {
        let app = app();

        assert_eq!(app.switcher().current(), Screen::Menu);
        assert!(app.switcher().menu().is_visible());
        assert!(!app.switcher().game().is_visible());
    }

    #[test]
    fn build_attaches_every_group_to_the_surface() {
        let app = app();

        for controller in app.switcher().controllers() {
            let group = controller.view().group();
            let surface = group.surface().expect("attached");
            assert!(Rc::ptr_eq(surface, app.surface()), "{} shares the surface", group.name());
        }
    }

    #[test]
    fn startup_show_requests_a_redraw() {
        let app = app();
        assert!(app.surface().redraw_requests() > 0);
    }

    #[test]
    fn handle_input_applies_navigation_immediately() {
        let mut app = app();

        app.handle_input(&InputEvent::key_down(KeyCode::Enter));

        assert_eq!(app.switcher().current(), Screen::Game);
        assert_eq!(app.switcher().visible_count(), 1);
    }

    #[test]
    fn render_frame_draws_visible_screen_only() {
        let mut app = app();
        assert_eq!(app.render_frame(), app.switcher().menu().menu_view().group().len());

        app.handle_input(&InputEvent::key_down(KeyCode::Enter));
        assert_eq!(app.render_frame(), app.switcher().game().game_view().group().len());
    }

    #[test]
    fn tick_interval_matches_tps() {
        let app = AppBuilder::new().with_tps(50.0).build().expect("app");
        assert_eq!(app.tick_interval(), Duration::from_millis(20));
    }
}
