//=========================================================================
// Game Screen
//=========================================================================
//
// Gameplay screen: a single player entity the user moves, rotates and
// scales, plus a status line.
//
// Controls:
//   Arrows  ── move by MOVE_STEP, clamped to the surface
//   Q / E   ── rotate by ROTATE_STEP degrees
//   Z / X   ── shrink / grow by SCALE_STEP (never below MIN_SCALE)
//   Escape  ── end the run and go back to the menu
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::entity::{EntityBuilder, EntityError, EntityId, PositionedEntity};
use crate::core::input::{InputEvent, KeyCode};
use crate::core::render::{Color, Group, Node, Shape};
use crate::core::screen::{Lifecycle, Navigator, Screen, ScreenController, View};

//=== Constants ===========================================================

/// Distance moved per arrow key press, in surface units.
pub const MOVE_STEP: f32 = 16.0;

/// Rotation applied per Q/E press, in degrees.
pub const ROTATE_STEP: f32 = 15.0;

/// Scale factor applied per Z/X press.
pub const SCALE_STEP: f32 = 1.25;

/// Lower bound for the player's scale.
pub const MIN_SCALE: f32 = 0.25;

const PLAYER_SIZE: f32 = 48.0;
const PLAYER_FILL: Color = Color::rgb(242, 166, 38);
const STATUS_RANK: i32 = 5;

//=== GameModel ===========================================================

/// Phase of a game run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    NotStarted,
    Running,
    Ended,
}

/// Per-run counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameModel {
    state: GameState,
    elapsed: f32,
    moves: u32,
}

impl GameModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh run.
    pub fn reset(&mut self) {
        self.state = GameState::Running;
        self.elapsed = 0.0;
        self.moves = 0;
    }

    /// Ends the current run. Counters are kept for display.
    pub fn end(&mut self) {
        self.state = GameState::Ended;
    }

    /// Advances elapsed time. Ignored unless running.
    pub fn tick(&mut self, dt: f32) {
        if self.is_running() {
            self.elapsed += dt;
        }
    }

    pub fn record_move(&mut self) {
        self.moves += 1;
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Seconds spent in the current run.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// One-line summary shown on screen.
    pub fn status_line(&self) -> String {
        format!("Time {:.1}s  Moves {}", self.elapsed, self.moves)
    }
}

//=== GameView ============================================================

/// Entities of the gameplay screen.
#[derive(Debug)]
pub struct GameView {
    group: Group,
    bounds: Vec2,
    player: EntityId,
    status: EntityId,
}

impl GameView {
    /// Lays out the game on a surface of `bounds`.
    pub fn new(bounds: Vec2) -> Result<Self, EntityError> {
        let mut group = Group::new("game");

        let player = group.add(
            EntityBuilder::new(bounds)
                .handle(Node::rect(PLAYER_SIZE, PLAYER_SIZE).with_fill(PLAYER_FILL))
                .rank(2)
                .build()?,
        );

        let status = group.add(
            EntityBuilder::new(bounds)
                .handle(Node::text(GameModel::new().status_line(), 18.0))
                .rank(STATUS_RANK)
                .y(32.0)
                .build()?,
        );

        Ok(Self {
            group,
            bounds,
            player,
            status,
        })
    }

    /// Surface size the view was laid out for.
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn player_id(&self) -> EntityId {
        self.player
    }

    pub fn player(&self) -> Option<&PositionedEntity<Node>> {
        self.group.get(self.player)
    }

    pub fn player_mut(&mut self) -> Option<&mut PositionedEntity<Node>> {
        self.group.get_mut(self.player)
    }

    /// Puts the player back at the center, unrotated and unscaled.
    pub fn reset_player(&mut self) {
        let center = self.bounds * 0.5;
        if let Some(player) = self.player_mut() {
            player.set_position(center);
            player.set_rotation(0.0);
            player.set_scale(1.0);
        }
    }

    /// Current status text, if the status entity is present.
    pub fn status_text(&self) -> Option<&str> {
        match self.group.get(self.status)?.handle().shape() {
            Shape::Text { content, .. } => Some(content.as_str()),
            _ => None,
        }
    }

    /// Replaces the status text and keeps it centered on its anchor.
    pub fn set_status(&mut self, text: &str) {
        if let Some(status) = self.group.get_mut(self.status) {
            if status.handle_mut().set_text(text) {
                status.recenter();
            }
        }
    }
}

impl View for GameView {
    fn group(&self) -> &Group {
        &self.group
    }

    fn group_mut(&mut self) -> &mut Group {
        &mut self.group
    }
}

//=== GameController ======================================================

/// Owns the game model and view; handles gameplay input.
#[derive(Debug)]
pub struct GameController {
    model: GameModel,
    view: GameView,
    navigator: Navigator,
}

impl GameController {
    pub fn new(view: GameView, navigator: Navigator) -> Self {
        Self {
            model: GameModel::new(),
            view,
            navigator,
        }
    }

    pub fn model(&self) -> &GameModel {
        &self.model
    }

    pub fn game_view(&self) -> &GameView {
        &self.view
    }

    //--- Run Lifecycle ----------------------------------------------------

    /// Entry action for the game screen.
    ///
    /// Resets the model and the player, then shows the view.
    pub fn start_game(&mut self) {
        info!("Starting new game run");

        self.model.reset();
        self.view.reset_player();
        self.view.set_status(&self.model.status_line());
        self.show();
    }

    /// Ends the run and asks for the menu.
    pub fn end_game(&mut self) {
        info!(
            "Game run ended after {:.1}s and {} moves",
            self.model.elapsed(),
            self.model.moves()
        );

        self.model.end();
        self.navigator.request(Screen::Menu);
    }

    //--- Player Controls --------------------------------------------------

    fn move_player(&mut self, delta: Vec2) {
        let bounds = self.view.bounds();
        let Some(player) = self.view.player_mut() else {
            return;
        };

        let target = (player.position() + delta).clamp(Vec2::ZERO, bounds);
        player.set_position(target);
        self.model.record_move();
    }

    fn rotate_player(&mut self, degrees: f32) {
        if let Some(player) = self.view.player_mut() {
            let rotation = player.rotation() + degrees;
            player.set_rotation(rotation);
        }
    }

    fn scale_player(&mut self, factor: f32) {
        if let Some(player) = self.view.player_mut() {
            let scale = (player.scale() * factor).max(MIN_SCALE);
            player.set_scale(scale);
        }
    }
}

impl ScreenController for GameController {
    fn view(&self) -> &dyn View {
        &self.view
    }

    fn view_mut(&mut self) -> &mut dyn View {
        &mut self.view
    }

    fn handle_input(&mut self, event: &InputEvent) {
        if !self.model.is_running() {
            return;
        }

        let Some(key) = event.pressed_key() else {
            return;
        };

        match key {
            KeyCode::ArrowLeft => self.move_player(Vec2::new(-MOVE_STEP, 0.0)),
            KeyCode::ArrowRight => self.move_player(Vec2::new(MOVE_STEP, 0.0)),
            KeyCode::ArrowUp => self.move_player(Vec2::new(0.0, -MOVE_STEP)),
            KeyCode::ArrowDown => self.move_player(Vec2::new(0.0, MOVE_STEP)),
            KeyCode::KeyQ => self.rotate_player(-ROTATE_STEP),
            KeyCode::KeyE => self.rotate_player(ROTATE_STEP),
            KeyCode::KeyZ => self.scale_player(1.0 / SCALE_STEP),
            KeyCode::KeyX => self.scale_player(SCALE_STEP),
            KeyCode::Escape => self.end_game(),
            other => debug!("Game ignores key {:?}", other),
        }
    }

    fn update(&mut self, dt: f32) {
        if !self.model.is_running() {
            return;
        }

        self.model.tick(dt);
        self.view.set_status(&self.model.status_line());
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
