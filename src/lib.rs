//=========================================================================
// Stagecraft Library Root
//
// Mutually-exclusive screens on one shared drawing surface, and
// center-anchored entities moving on it.
//
// Responsibilities:
// - Expose the screen contracts and the positioned-entity abstraction
//   (`core`)
// - Provide the concrete menu/game screens and the switcher (`screens`)
// - Keep the winit integration (`platform`) hidden behind `App::run`
//
// Typical usage:
// ```no_run
// use stagecraft::AppBuilder;
//
// fn main() {
//     AppBuilder::new().build().unwrap().run().unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the backend-independent contracts: entities, input,
// render model and screen traits.
//
// `screens` holds the concrete screens and the navigation state machine.
//
pub mod core;
pub mod prelude;
pub mod screens;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and event loop. `app` is the composition
// root that wires screens to the surface.
//
mod app;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use app::{App, AppBuilder};
pub use platform::PlatformError;
