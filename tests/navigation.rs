//=========================================================================
// Navigation Scenario
//
// Drives a built app the way the platform does (input events and ticks)
// and checks which screen is visible after each step.
//
//=========================================================================

use stagecraft::prelude::*;
use stagecraft::screens::GameState;

fn key(app: &mut App, key: KeyCode) {
    app.handle_input(&InputEvent::key_down(key));
}

fn assert_only(app: &App, screen: Screen) {
    let switcher = app.switcher();
    assert_eq!(switcher.current(), screen);
    assert_eq!(switcher.visible_count(), 1, "Exactly one screen visible on {:?}", screen);

    match screen {
        Screen::Menu => assert!(switcher.menu().is_visible()),
        Screen::Game => assert!(switcher.game().is_visible()),
    }
}

#[test]
fn menu_game_menu_round_trip() {
    let mut app = AppBuilder::new().build().expect("app builds");
    assert_only(&app, Screen::Menu);
    assert_eq!(app.switcher().game().model().state(), GameState::NotStarted);

    key(&mut app, KeyCode::Enter);
    assert_only(&app, Screen::Game);
    assert_eq!(app.switcher().game().model().state(), GameState::Running);

    key(&mut app, KeyCode::ArrowRight);
    app.update(1.0);
    assert_eq!(app.switcher().game().model().moves(), 1);

    key(&mut app, KeyCode::Escape);
    assert_only(&app, Screen::Menu);
    assert_eq!(app.switcher().game().model().state(), GameState::Ended);

    key(&mut app, KeyCode::Space);
    assert_only(&app, Screen::Game);
    let model = app.switcher().game().model();
    assert_eq!(model.moves(), 0, "A new run starts from zero");
    assert_eq!(model.elapsed(), 0.0);
}

#[test]
fn clicking_start_enters_game() {
    let mut app = AppBuilder::new().build().expect("app builds");
    let center = app.surface().center();

    app.handle_input(&InputEvent::MouseMoved { x: center.x, y: center.y });
    app.handle_input(&InputEvent::mouse_down(MouseButton::Left));

    assert_only(&app, Screen::Game);
}

#[test]
fn pointer_moved_during_game_is_used_back_on_menu() {
    let mut app = AppBuilder::new().build().expect("app builds");
    let center = app.surface().center();

    app.handle_input(&InputEvent::MouseMoved { x: center.x, y: center.y });
    app.handle_input(&InputEvent::mouse_down(MouseButton::Left));
    assert_only(&app, Screen::Game);

    app.handle_input(&InputEvent::MouseMoved { x: 5.0, y: 5.0 });
    key(&mut app, KeyCode::Escape);
    assert_only(&app, Screen::Menu);

    app.handle_input(&InputEvent::mouse_down(MouseButton::Left));
    assert_only(&app, Screen::Menu);

    app.handle_input(&InputEvent::MouseMoved { x: center.x, y: center.y });
    app.handle_input(&InputEvent::mouse_down(MouseButton::Left));
    assert_only(&app, Screen::Game);
}

#[test]
fn player_starts_centered_on_every_run() {
    let mut app = AppBuilder::new().with_surface_size(640.0, 480.0).build().expect("app builds");

    for _ in 0..3 {
        key(&mut app, KeyCode::Enter);

        let player = app.switcher().game().game_view().player().expect("player");
        assert_eq!(player.position(), app.surface().center());
        assert_eq!(player.rotation(), 0.0);
        assert_eq!(player.scale(), 1.0);

        key(&mut app, KeyCode::ArrowUp);
        key(&mut app, KeyCode::KeyE);
        key(&mut app, KeyCode::Escape);
    }
}

#[test]
fn every_transition_requests_a_redraw() {
    let mut app = AppBuilder::new().build().expect("app builds");
    let before = app.surface().redraw_requests();

    key(&mut app, KeyCode::Enter);

    assert!(app.surface().redraw_requests() > before);
    assert!(!app.surface().is_bound(), "No window exists in tests");
}

#[test]
fn entity_transform_reaches_the_handle() {
    let bounds = glam::Vec2::new(800.0, 600.0);
    let mut entity = EntityBuilder::new(bounds)
        .handle(Node::rect(40.0, 20.0))
        .build()
        .expect("handle supplied");

    assert_eq!(entity.handle().offset(), glam::Vec2::new(20.0, 10.0));

    entity.set_rotation(405.0);
    entity.set_scale(2.0);
    entity.set_x(-50.0);
    entity.set_y(9000.0);

    let handle = entity.handle();
    assert_eq!(handle.rotation(), 405.0);
    assert_eq!(handle.scale(), glam::Vec2::splat(2.0));
    assert_eq!(handle.position(), glam::Vec2::new(-50.0, 9000.0));
    assert_eq!(handle.offset(), glam::Vec2::new(20.0, 10.0), "Offset fixed at construction");
}

#[test]
fn missing_handle_is_an_error() {
    let result = EntityBuilder::<Node>::new(glam::Vec2::new(800.0, 600.0)).build();
    assert_eq!(result.err(), Some(EntityError::MissingHandle));
}
