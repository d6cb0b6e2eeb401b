//! Game simulation system
//!
//! Routes host callbacks to the chase controller and the scene manager:
//! - Scene load → sprite binding and audio wiring
//! - Touch → last touch point, or restart from the result menu
//! - Post-physics tick → steering intents applied to the active graph
//! - Contact → outcome and transition into the result menu
//! - Window input → scene-space touches and key actions

use ftd_core::{
    ActiveScene, CollisionCategory, NodeKey, SceneError, SceneManager, TransitionEffect, Vec2,
};
use ftd_game::{apply_intents, ChaseConfig, ChaseController, GameState, MenuScene, Outcome};
use ftd_input::{InputAction, InputMapper, TouchEvent, TouchPhase, ViewTransform};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

use crate::config::WindowConfig;

/// Name under which the result menu is registered
pub const MENU_SCENE: &str = "MenuScene";

/// Longest frame delta fed to transitions, in seconds
const MAX_FRAME_DT: f32 = 0.25;

/// Result of a simulation tick
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SimulationResult {
    /// Number of intents applied to the scene graph
    pub intents_applied: usize,
    /// Scene that became active this tick, if a transition finished
    pub switched_to: Option<String>,
}

/// Drives one chase scene and its result menu
pub struct SimulationSystem {
    scenes: SceneManager,
    controller: ChaseController<NodeKey>,
    menu: Option<MenuScene>,
    game_scene: String,
    input: InputMapper,
    fullscreen: bool,
}

impl SimulationSystem {
    /// Create a simulation over a manager that already holds the chase template
    pub fn new(scenes: SceneManager, game_scene: impl Into<String>, config: ChaseConfig) -> Self {
        Self {
            scenes,
            controller: ChaseController::with_config(config),
            menu: None,
            game_scene: game_scene.into(),
            input: InputMapper::new(view_for(&WindowConfig::default())),
            fullscreen: false,
        }
    }

    /// Size the touch mapping to the window and take its fullscreen flag
    pub fn with_window(mut self, window: &WindowConfig) -> Self {
        let camera = self.input.view().camera;
        let mut view = view_for(window);
        view.set_camera(camera);
        *self.input.view_mut() = view;
        self.fullscreen = window.fullscreen;
        self
    }

    /// Instantiate the chase scene, make it active and bind the controller
    pub fn start(&mut self) -> Result<(), SceneError> {
        self.scenes.instantiate(&self.game_scene)?;
        self.scenes.switch_to(&self.game_scene)?;
        self.handle_load();
        Ok(())
    }

    /// Bind the controller to the freshly active chase scene
    ///
    /// Returns the number of intents applied.
    pub fn handle_load(&mut self) -> usize {
        let Some(graph) = self.scenes.active_graph_mut() else {
            log::warn!("No active scene to bind");
            return 0;
        };
        self.menu = None;
        let intents = self.controller.on_load(&*graph);
        let count = intents.len();
        apply_intents(graph, intents);
        self.follow_camera();
        count
    }

    /// Route a touch notification
    ///
    /// On the result menu a new touch restarts the chase.
    pub fn handle_touch(&mut self, touches: &[TouchEvent]) -> Result<(), SceneError> {
        if self.is_menu_active() {
            let restart = self
                .menu
                .as_mut()
                .map(|menu| menu.on_touch(touches))
                .unwrap_or(false);
            if restart {
                self.restart()?;
            }
            return Ok(());
        }

        self.controller.on_touch(touches);
        Ok(())
    }

    /// Run one frame after the host's physics step
    ///
    /// Transitions advance first. The chase only steers while its scene is
    /// active and no transition is running.
    pub fn tick(&mut self, dt: f32) -> SimulationResult {
        // A stalled frame advances transitions by at most MAX_FRAME_DT
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        let mut result = SimulationResult {
            switched_to: self.scenes.update(dt),
            ..Default::default()
        };

        if result.switched_to.as_deref() == Some(self.game_scene.as_str()) {
            self.handle_load();
        }

        if self.scenes.is_transitioning() || !self.is_game_active() {
            return result;
        }

        if let Some(graph) = self.scenes.active_graph_mut() {
            let intents = self.controller.on_tick(&*graph);
            result.intents_applied = intents.len();
            apply_intents(graph, intents);
        }
        self.follow_camera();
        result
    }

    /// Route a contact between two bodies
    ///
    /// Returns the outcome when this contact ended the chase.
    pub fn handle_contact(
        &mut self,
        a: CollisionCategory,
        b: CollisionCategory,
    ) -> Result<Option<Outcome>, SceneError> {
        if !self.is_game_active() {
            return Ok(None);
        }
        let Some(request) = self.controller.on_contact(a, b) else {
            return Ok(None);
        };

        let menu = MenuScene::from_outcome(request.outcome);
        log::info!("{} {}", menu.title(), menu.prompt());
        self.menu = Some(menu);

        self.scenes
            .register_active_scene(MENU_SCENE, ActiveScene::new(MENU_SCENE));
        self.scenes.transition_to(MENU_SCENE, request.transition)?;
        Ok(Some(request.outcome))
    }

    /// Start a fresh chase from the result menu
    pub fn restart(&mut self) -> Result<(), SceneError> {
        self.scenes.instantiate(&self.game_scene)?;
        let effect = self.result_transition();
        self.scenes.transition_to(&self.game_scene, effect)?;
        log::info!("Restarting '{}'", self.game_scene);

        // Instant transitions switch without going through update
        if self.is_game_active() && !self.scenes.is_transitioning() {
            self.handle_load();
        }
        Ok(())
    }

    /// Route a platform touch in physical window pixels
    pub fn handle_window_touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        position: PhysicalPosition<f64>,
        scale_factor: f64,
    ) -> Result<(), SceneError> {
        let touch = self.input.map_touch(id, phase, position, scale_factor);
        self.handle_touch(&[touch])
    }

    /// Route a mouse button change at `cursor` (logical pixels)
    pub fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        state: ElementState,
        cursor: Vec2,
    ) -> Result<(), SceneError> {
        match self.input.map_mouse_button(button, state, cursor) {
            Some(touch) => self.handle_touch(&[touch]),
            None => Ok(()),
        }
    }

    /// Route cursor movement (logical pixels)
    pub fn handle_cursor_moved(&mut self, cursor: Vec2) -> Result<(), SceneError> {
        match self.input.map_cursor_moved(cursor) {
            Some(touch) => self.handle_touch(&[touch]),
            None => Ok(()),
        }
    }

    /// Route a key change
    ///
    /// Returns false when the host should exit.
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) -> Result<bool, SceneError> {
        match InputMapper::map_keyboard(key, state) {
            Some(action) => self.handle_action(action),
            None => Ok(true),
        }
    }

    /// Apply a key action
    ///
    /// Restart only acts on the result menu, like a tap. Returns false when
    /// the host should exit.
    pub fn handle_action(&mut self, action: InputAction) -> Result<bool, SceneError> {
        match action {
            InputAction::Exit => {
                log::info!("Exit requested");
                return Ok(false);
            }
            InputAction::Restart => {
                if self.is_menu_active() {
                    self.restart()?;
                } else {
                    log::debug!("Restart ignored outside the result menu");
                }
            }
            InputAction::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                log::info!("Fullscreen: {}", if self.fullscreen { "ON" } else { "OFF" });
            }
        }
        Ok(true)
    }

    fn result_transition(&self) -> TransitionEffect {
        self.controller.config().result_transition.clone()
    }

    /// Keep touch mapping centred on the chase camera
    fn follow_camera(&mut self) {
        if !self.is_game_active() {
            return;
        }
        if let Some(camera) = self.scenes.active_graph().and_then(|g| g.camera_position()) {
            self.input.view_mut().set_camera(camera);
        }
    }

    /// Whether the window should be fullscreen
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Current window → scene mapping
    pub fn view(&self) -> &ViewTransform {
        self.input.view()
    }

    /// Whether the chase scene is on top of the stack
    pub fn is_game_active(&self) -> bool {
        self.scenes.active_scene_name() == Some(self.game_scene.as_str())
    }

    /// Whether the result menu is on top of the stack
    pub fn is_menu_active(&self) -> bool {
        self.scenes.active_scene_name() == Some(MENU_SCENE)
    }

    pub fn state(&self) -> GameState {
        self.controller.state()
    }

    pub fn controller(&self) -> &ChaseController<NodeKey> {
        &self.controller
    }

    pub fn menu(&self) -> Option<&MenuScene> {
        self.menu.as_ref()
    }

    pub fn scenes(&self) -> &SceneManager {
        &self.scenes
    }

    pub fn scenes_mut(&mut self) -> &mut SceneManager {
        &mut self.scenes
    }
}

fn view_for(window: &WindowConfig) -> ViewTransform {
    ViewTransform::new(
        Vec2::new(window.width as f32, window.height as f32),
        Vec2::ZERO,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ftd_core::{NodeTemplate, Scene, Vec2, GOAL_NODE, PLAYER_NODE, ZOMBIE_NODE};
    use ftd_input::TouchPhase;
    use std::time::Duration;

    fn manager() -> SceneManager {
        let mut scene = Scene::new("GameScene").with_camera(0.0, 0.0);
        scene.add_node(
            NodeTemplate::new(Vec2::ZERO, Vec2::new(32.0, 32.0))
                .with_name(PLAYER_NODE)
                .with_category(1, 6)
                .dynamic(),
        );
        scene.add_node(
            NodeTemplate::new(Vec2::new(200.0, 0.0), Vec2::new(32.0, 32.0))
                .with_name(ZOMBIE_NODE)
                .with_category(2, 1)
                .dynamic(),
        );
        scene.add_node(
            NodeTemplate::new(Vec2::new(0.0, 500.0), Vec2::new(64.0, 64.0))
                .with_name(GOAL_NODE)
                .with_category(4, 1),
        );
        let mut manager = SceneManager::new();
        manager.register_template(scene);
        manager
    }

    fn system(effect: TransitionEffect) -> SimulationSystem {
        let config = ChaseConfig {
            result_transition: effect,
            ..ChaseConfig::default()
        };
        let mut system = SimulationSystem::new(manager(), "GameScene", config);
        system.start().unwrap();
        system
    }

    fn flip() -> TransitionEffect {
        TransitionEffect::FlipVertical { duration: Duration::from_secs(1) }
    }

    fn tap() -> [TouchEvent; 1] {
        [TouchEvent::new(0, TouchPhase::Started, Vec2::new(0.0, 400.0))]
    }

    /// Tick at the frame cap until the running transition lands
    fn finish_transition(system: &mut SimulationSystem) -> Option<String> {
        for _ in 0..8 {
            let result = system.tick(MAX_FRAME_DT);
            if result.switched_to.is_some() {
                return result.switched_to;
            }
        }
        None
    }

    fn window(width: u32, height: u32) -> WindowConfig {
        WindowConfig {
            width,
            height,
            ..WindowConfig::default()
        }
    }

    #[test]
    fn test_start_binds_controller() {
        let system = system(flip());
        assert!(system.is_game_active());
        assert!(system.controller().player().is_some());
        assert_eq!(system.controller().zombies().len(), 1);

        let graph = system.scenes().active_graph().unwrap();
        assert_eq!(graph.listener(), system.controller().player());
    }

    #[test]
    fn test_tick_applies_intents() {
        let mut system = system(flip());
        // Zombie only, no touch yet
        assert_eq!(system.tick(0.016).intents_applied, 2);

        system.handle_touch(&tap()).unwrap();
        assert_eq!(system.tick(0.016).intents_applied, 5);
    }

    #[test]
    fn test_contact_transitions_to_menu() {
        let mut system = system(flip());
        let outcome = system
            .handle_contact(CollisionCategory::ZOMBIE, CollisionCategory::PLAYER)
            .unwrap();
        assert_eq!(outcome, Some(Outcome::Lost));
        assert!(system.scenes().is_transitioning());
        assert_eq!(system.menu().unwrap().title(), "You Lose!");

        // Chase is frozen while the flip runs
        assert_eq!(system.tick(0.25).intents_applied, 0);
        assert_eq!(system.tick(0.25).intents_applied, 0);
        assert!(system.is_game_active());

        assert!(system.tick(0.25).switched_to.is_none());
        let result = system.tick(0.25);
        assert_eq!(result.switched_to.as_deref(), Some(MENU_SCENE));
        assert!(system.is_menu_active());
    }

    #[test]
    fn test_oversized_delta_is_capped() {
        let mut system = system(flip());
        system
            .handle_contact(CollisionCategory::ZOMBIE, CollisionCategory::PLAYER)
            .unwrap();

        assert!(system.tick(f32::MAX).switched_to.is_none());
        assert!(system.tick(f32::INFINITY).switched_to.is_none());
        assert!(system.tick(f32::NAN).switched_to.is_none());
        assert!(system.scenes().is_transitioning());

        assert!(system.tick(f32::MAX).switched_to.is_none());
        assert_eq!(system.tick(f32::MAX).switched_to.as_deref(), Some(MENU_SCENE));
    }

    #[test]
    fn test_second_contact_ignored() {
        let mut system = system(flip());
        system
            .handle_contact(CollisionCategory::PLAYER, CollisionCategory::GOAL)
            .unwrap();
        let again = system
            .handle_contact(CollisionCategory::PLAYER, CollisionCategory::ZOMBIE)
            .unwrap();
        assert_eq!(again, None);
        assert_eq!(system.state(), GameState::Won);
    }

    #[test]
    fn test_tap_on_menu_restarts() {
        let mut system = system(flip());
        system
            .handle_contact(CollisionCategory::PLAYER, CollisionCategory::GOAL)
            .unwrap();
        assert_eq!(finish_transition(&mut system).as_deref(), Some(MENU_SCENE));
        assert!(system.is_menu_active());

        system.handle_touch(&tap()).unwrap();
        assert!(system.scenes().is_transitioning());

        assert_eq!(finish_transition(&mut system).as_deref(), Some("GameScene"));
        assert_eq!(system.state(), GameState::Playing);
        assert!(system.controller().last_touch().is_none());
    }

    #[test]
    fn test_instant_restart() {
        let mut system = system(TransitionEffect::Instant);
        system
            .handle_contact(CollisionCategory::ZOMBIE, CollisionCategory::PLAYER)
            .unwrap();
        assert!(system.is_menu_active());

        system.handle_touch(&tap()).unwrap();
        assert!(system.is_game_active());
        assert_eq!(system.state(), GameState::Playing);
    }

    #[test]
    fn test_restart_resets_positions() {
        let mut system = system(TransitionEffect::Instant);
        for _ in 0..10 {
            system.tick(0.016);
        }
        let zombie = system.controller().zombies()[0];
        let moved = system.scenes().active_graph().unwrap().get(zombie).unwrap().velocity;
        assert_ne!(moved, Vec2::ZERO);

        system
            .handle_contact(CollisionCategory::ZOMBIE, CollisionCategory::PLAYER)
            .unwrap();
        system.restart().unwrap();

        let zombie = system.controller().zombies()[0];
        let node = system.scenes().active_graph().unwrap().get(zombie).unwrap();
        assert_eq!(node.velocity, Vec2::ZERO);
        assert_eq!(node.audio.len(), 1);
        assert!(system.menu().is_none());
    }

    #[test]
    fn test_window_sizes_view() {
        let system = system(flip()).with_window(&window(800, 600));
        assert_eq!(system.view().viewport, Vec2::new(800.0, 600.0));
        assert!(!system.is_fullscreen());
    }

    #[test]
    fn test_window_touch_maps_to_scene() {
        let mut system = system(flip()).with_window(&window(800, 600));
        // Physical (800, 200) at 2x is logical (400, 100): 200 above centre
        system
            .handle_window_touch(1, TouchPhase::Started, PhysicalPosition::new(800.0, 200.0), 2.0)
            .unwrap();
        assert_eq!(system.controller().last_touch(), Some(Vec2::new(0.0, 200.0)));
    }

    #[test]
    fn test_touch_mapping_follows_camera() {
        let mut system = system(flip()).with_window(&window(800, 600));
        let player = system.controller().player().unwrap();
        system
            .scenes_mut()
            .active_graph_mut()
            .unwrap()
            .get_mut(player)
            .unwrap()
            .position = Vec2::new(0.0, 100.0);

        system.handle_touch(&tap()).unwrap();
        system.tick(0.016);
        assert_eq!(system.view().camera, Vec2::new(0.0, 100.0));

        // The centre of the window is now the player's position
        system
            .handle_mouse_button(MouseButton::Left, ElementState::Pressed, Vec2::new(400.0, 300.0))
            .unwrap();
        assert_eq!(system.controller().last_touch(), Some(Vec2::new(0.0, 100.0)));

        system.handle_cursor_moved(Vec2::new(500.0, 300.0)).unwrap();
        assert_eq!(system.controller().last_touch(), Some(Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn test_restart_key_on_menu() {
        let mut system = system(TransitionEffect::Instant);
        system
            .handle_contact(CollisionCategory::ZOMBIE, CollisionCategory::PLAYER)
            .unwrap();
        assert!(system.is_menu_active());

        assert!(system.handle_key(KeyCode::KeyR, ElementState::Pressed).unwrap());
        assert!(system.is_game_active());
        assert_eq!(system.state(), GameState::Playing);
    }

    #[test]
    fn test_restart_key_ignored_while_playing() {
        let mut system = system(TransitionEffect::Instant);
        system.handle_touch(&tap()).unwrap();

        assert!(system.handle_action(InputAction::Restart).unwrap());
        assert!(!system.scenes().is_transitioning());
        assert_eq!(system.controller().last_touch(), Some(Vec2::new(0.0, 400.0)));
    }

    #[test]
    fn test_exit_and_fullscreen_keys() {
        let mut system = system(flip());
        assert!(!system.handle_key(KeyCode::Escape, ElementState::Pressed).unwrap());

        assert!(system.handle_key(KeyCode::KeyF, ElementState::Pressed).unwrap());
        assert!(system.is_fullscreen());
        assert!(system.handle_key(KeyCode::KeyF, ElementState::Released).unwrap());
        assert!(system.is_fullscreen());
    }
}
