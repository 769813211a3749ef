//=========================================================================
// Core
//=========================================================================
//
// Backend-independent building blocks of the front-end.
//
// Modules:
// - `entity`: positioned entities (identity, rank, center-anchored transform)
// - `input`: portable input events
// - `render`: surface, groups and render handles
// - `screen`: screen tags, view/controller contracts, navigation requests
//
//=========================================================================

//=== Module Declarations =================================================

pub mod entity;
pub mod input;
pub mod render;
pub mod screen;
