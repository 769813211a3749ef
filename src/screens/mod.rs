//=========================================================================
// Screens
//=========================================================================
//
// Concrete screens and the switcher that moves between them.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod game;
pub mod menu;
pub mod switcher;

//=== Public API ==========================================================

pub use game::{GameController, GameModel, GameState, GameView};
pub use menu::{MenuController, MenuView};
pub use switcher::ScreenSwitcher;
