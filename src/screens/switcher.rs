//=========================================================================
// Screen Switcher
//=========================================================================
//
// The navigation state machine.
//
// Owns one controller per `Screen` variant and the queue navigation
// requests arrive on. Every transition hides all controllers first and
// then runs the target's entry action, so exactly one screen is visible
// after each switch.
//
// Flow:
//   handle_input / update ──► current controller ──► Navigator::request
//                                                          │
//   process_requests ◄──────── NavigationQueue ◄───────────┘
//        │
//        └─► switch_to_screen (FIFO, one per request)
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use super::{GameController, MenuController};
use crate::core::input::InputEvent;
use crate::core::screen::{Lifecycle, NavigationQueue, Navigator, Screen, ScreenController};

//=== ScreenSwitcher ======================================================

/// Single authority over which screen is visible.
#[derive(Debug)]
pub struct ScreenSwitcher {
    menu: MenuController,
    game: GameController,
    queue: NavigationQueue,
    current: Screen,
    pointer: Vec2,
}

impl ScreenSwitcher {
    //--- Construction -----------------------------------------------------

    /// Takes ownership of the controllers and the queue their navigators
    /// feed.
    ///
    /// Nothing is shown until [`start`](Self::start) is called.
    pub fn new(menu: MenuController, game: GameController, queue: NavigationQueue) -> Self {
        Self {
            menu,
            game,
            queue,
            current: Screen::Menu,
            pointer: Vec2::ZERO,
        }
    }

    /// Enters the startup screen (the menu).
    pub fn start(&mut self) {
        info!("Starting screen switcher on {:?}", Screen::Menu);
        self.switch_to_screen(Screen::Menu);
    }

    //--- Transitions ------------------------------------------------------

    /// Hides every screen, then enters `screen`.
    pub fn switch_to_screen(&mut self, screen: Screen) {
        debug!(target: "navigation", "Switching {:?} -> {:?}", self.current, screen);

        for controller in self.controllers_mut() {
            controller.hide();
        }

        match screen {
            Screen::Menu => self.menu.show(),
            Screen::Game => self.game.start_game(),
        }

        self.current = screen;
    }

    /// Applies pending navigation requests in the order they were made.
    ///
    /// Returns how many transitions were applied.
    pub fn process_requests(&mut self) -> usize {
        let pending = self.queue.take();
        if !pending.is_empty() {
            trace!(target: "navigation", "Processing {} navigation request(s)", pending.len());
        }

        for &screen in &pending {
            self.switch_to_screen(screen);
        }

        pending.len()
    }

    /// Hands out a navigator feeding this switcher.
    pub fn navigator(&self) -> Navigator {
        self.queue.navigator()
    }

    //--- Routing ----------------------------------------------------------

    /// Forwards `event` to the current screen only.
    ///
    /// Pointer moves are also recorded and reported to every screen through
    /// `pointer_moved`, so a screen entered later knows where the pointer is.
    pub fn handle_input(&mut self, event: &InputEvent) {
        if let InputEvent::MouseMoved { x, y } = *event {
            let pointer = Vec2::new(x, y);
            self.pointer = pointer;
            for controller in self.controllers_mut() {
                controller.pointer_moved(pointer);
            }
        }

        self.current_controller_mut().handle_input(event);
    }

    /// Ticks the current screen only.
    pub fn update(&mut self, dt: f32) {
        self.current_controller_mut().update(dt);
    }

    //--- Queries ----------------------------------------------------------

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Last pointer position seen, in surface coordinates.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Number of screens currently reporting visible.
    pub fn visible_count(&self) -> usize {
        self.controllers().filter(|c| c.is_visible()).count()
    }

    /// Every controller, in `Screen` declaration order.
    pub fn controllers(&self) -> impl Iterator<Item = &dyn ScreenController> {
        [
            &self.menu as &dyn ScreenController,
            &self.game as &dyn ScreenController,
        ]
        .into_iter()
    }

    pub fn menu(&self) -> &MenuController {
        &self.menu
    }

    pub fn game(&self) -> &GameController {
        &self.game
    }

    //--- Internals --------------------------------------------------------

    fn controllers_mut(&mut self) -> [&mut dyn ScreenController; 2] {
        [&mut self.menu, &mut self.game]
    }

    fn current_controller_mut(&mut self) -> &mut dyn ScreenController {
        match self.current {
            Screen::Menu => &mut self.menu,
            Screen::Game => &mut self.game,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, MouseButton};
    use crate::screens::{GameState, GameView, MenuView};

    fn switcher() -> ScreenSwitcher {
        let bounds = Vec2::new(800.0, 600.0);
        let queue = NavigationQueue::new();
        let menu = MenuController::new(MenuView::new(bounds).expect("menu"), queue.navigator());
        let game = GameController::new(GameView::new(bounds).expect("game"), queue.navigator());
        ScreenSwitcher::new(menu, game, queue)
    }

    //=====================================================================
    // Transition Tests
    //=====================================================================

    #[test]
    fn nothing_visible_before_start() {
        let sw = switcher();
        assert_eq!(sw.visible_count(), 0);
    }

    #[test]
    fn start_shows_menu_only() {
        let mut sw = switcher();
        sw.start();

        assert_eq!(sw.current(), Screen::Menu);
        assert!(sw.menu().is_visible());
        assert!(!sw.game().is_visible());
    }

    #[test]
    fn switch_to_game_starts_a_run() {
        let mut sw = switcher();
        sw.start();

        sw.switch_to_screen(Screen::Game);

        assert_eq!(sw.current(), Screen::Game);
        assert!(sw.game().is_visible());
        assert!(!sw.menu().is_visible());
        assert_eq!(sw.game().model().state(), GameState::Running);
    }

    #[test]
    fn exactly_one_visible_after_every_switch() {
        let mut sw = switcher();
        sw.start();

        for screen in [Screen::Game, Screen::Game, Screen::Menu, Screen::Menu, Screen::Game] {
            sw.switch_to_screen(screen);
            assert_eq!(sw.visible_count(), 1, "After switching to {:?}", screen);
        }
    }

    #[test]
    fn switching_to_current_screen_re_enters_it() {
        let mut sw = switcher();
        sw.start();
        sw.switch_to_screen(Screen::Game);
        sw.update(2.0);

        sw.switch_to_screen(Screen::Game);

        assert_eq!(sw.game().model().elapsed(), 0.0, "Re-entering the game resets the run");
    }

    //=====================================================================
    // Request Processing Tests
    //=====================================================================

    #[test]
    fn process_requests_applies_in_fifo_order() {
        let mut sw = switcher();
        sw.start();
        let nav = sw.navigator();

        nav.request(Screen::Game);
        nav.request(Screen::Menu);

        assert_eq!(sw.process_requests(), 2);
        assert_eq!(sw.current(), Screen::Menu, "Last request wins");
        assert_eq!(sw.visible_count(), 1);
    }

    #[test]
    fn process_requests_without_pending_is_noop() {
        let mut sw = switcher();
        sw.start();

        assert_eq!(sw.process_requests(), 0);
        assert_eq!(sw.current(), Screen::Menu);
    }

    //=====================================================================
    // Routing Tests
    //=====================================================================

    #[test]
    fn input_reaches_current_screen_only() {
        let mut sw = switcher();
        sw.start();

        // Escape means nothing to the menu
        sw.handle_input(&InputEvent::key_down(KeyCode::Escape));
        assert_eq!(sw.process_requests(), 0);

        sw.handle_input(&InputEvent::key_down(KeyCode::Enter));
        assert_eq!(sw.process_requests(), 1);
        assert_eq!(sw.current(), Screen::Game);

        // Enter means nothing to the game
        sw.handle_input(&InputEvent::key_down(KeyCode::Enter));
        assert_eq!(sw.process_requests(), 0);
    }

    #[test]
    fn pointer_moves_reach_hidden_screens() {
        let mut sw = switcher();
        sw.start();
        sw.switch_to_screen(Screen::Game);

        sw.handle_input(&InputEvent::MouseMoved { x: 5.0, y: 5.0 });

        assert_eq!(sw.pointer(), Vec2::new(5.0, 5.0));
        assert_eq!(sw.menu().cursor(), Vec2::new(5.0, 5.0), "Menu tracks the pointer while hidden");
    }

    #[test]
    fn click_after_returning_to_menu_uses_current_pointer() {
        let mut sw = switcher();
        sw.start();

        sw.handle_input(&InputEvent::MouseMoved { x: 400.0, y: 300.0 });
        sw.handle_input(&InputEvent::mouse_down(MouseButton::Left));
        sw.process_requests();
        assert_eq!(sw.current(), Screen::Game);

        sw.handle_input(&InputEvent::MouseMoved { x: 5.0, y: 5.0 });
        sw.handle_input(&InputEvent::key_down(KeyCode::Escape));
        sw.process_requests();
        assert_eq!(sw.current(), Screen::Menu);

        sw.handle_input(&InputEvent::mouse_down(MouseButton::Left));
        assert_eq!(sw.process_requests(), 0, "Click away from the button starts nothing");
        assert_eq!(sw.current(), Screen::Menu);
    }

    #[test]
    fn update_ticks_current_screen_only() {
        let mut sw = switcher();
        sw.start();

        sw.update(5.0);
        assert_eq!(sw.game().model().elapsed(), 0.0, "Game is not current");

        sw.switch_to_screen(Screen::Game);
        sw.update(0.5);
        assert_eq!(sw.game().model().elapsed(), 0.5);
    }

    #[test]
    fn controllers_lists_every_screen() {
        let sw = switcher();
        assert_eq!(sw.controllers().count(), 2);
    }
}
