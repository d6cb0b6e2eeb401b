//! Chase scene controller
//!
//! The controller is driven entirely by host notifications:
//!
//! 1. `on_load` once the scene is instantiated: binds the sprites by name
//!    and wires up audio
//! 2. `on_touch` for every touch notification
//! 3. `on_tick` after each physics step: steers the player and zombies
//! 4. `on_contact` when two bodies start touching: decides the outcome
//!
//! Nothing here mutates the scene directly. Load and tick return intents
//! for the host to apply, and the first win or loss returns a
//! [`ResultRequest`] for the result menu.

use std::time::Duration;

use ftd_core::{CollisionCategory, TransitionEffect, GOAL_NODE, PLAYER_NODE, ZOMBIE_NODE};
use ftd_input::{TouchEvent, TouchTracker};

use crate::contact::{classify, ContactPair, Outcome, RoleCategories};
use crate::host::SceneView;
use crate::intent::{Intent, ResultRequest};
use crate::tick::{self, Sprite, TickContext};

/// Tunables for the chase
#[derive(Clone, Debug, PartialEq)]
pub struct ChaseConfig {
    /// Player speed in units per second
    pub player_speed: f32,
    /// Zombie speed in units per second
    pub zombie_speed: f32,
    /// Sound attached to every zombie
    pub zombie_sound: String,
    /// Transition into the result menu
    pub result_transition: TransitionEffect,
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            player_speed: 150.0,
            zombie_speed: 75.0,
            zombie_sound: "fear_moan.wav".to_string(),
            result_transition: TransitionEffect::FlipVertical {
                duration: Duration::from_secs(1),
            },
        }
    }
}

/// Where the chase stands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameState {
    /// Sprites are moving
    #[default]
    Playing,
    /// The player reached the goal
    Won,
    /// A zombie caught the player
    Lost,
}

impl GameState {
    /// Whether the chase has ended
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

impl From<Outcome> for GameState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => GameState::Won,
            Outcome::Lost => GameState::Lost,
        }
    }
}

/// Controller for the chase scene
///
/// `H` is the host's node handle. Handles are bound once in
/// [`on_load`](Self::on_load) and never re-resolved.
pub struct ChaseController<H> {
    config: ChaseConfig,
    player: Option<H>,
    zombies: Vec<H>,
    goal: Option<H>,
    roles: RoleCategories,
    touch: TouchTracker,
    state: GameState,
}

impl<H: Copy + Eq + std::fmt::Debug> ChaseController<H> {
    /// Create a controller with default tunables
    pub fn new() -> Self {
        Self::with_config(ChaseConfig::default())
    }

    /// Create a controller with the given tunables
    pub fn with_config(config: ChaseConfig) -> Self {
        Self {
            config,
            player: None,
            zombies: Vec::new(),
            goal: None,
            roles: RoleCategories::default(),
            touch: TouchTracker::new(),
            state: GameState::Playing,
        }
    }

    /// Bind sprites from a freshly loaded scene
    ///
    /// Resets any previous binding, touch point and outcome, so the same
    /// controller can be reused when the chase restarts.
    pub fn on_load<V>(&mut self, view: &V) -> Vec<Intent<H>>
    where
        V: SceneView<Handle = H>,
    {
        self.player = view.find(PLAYER_NODE);
        self.zombies = view.find_all(ZOMBIE_NODE);
        self.goal = view.find(GOAL_NODE);

        self.roles = RoleCategories {
            player: self.player.and_then(|h| view.category(h)),
            zombie: self.zombies.first().and_then(|&h| view.category(h)),
            goal: self.goal.and_then(|h| view.category(h)),
        };
        self.touch.clear();
        self.state = GameState::Playing;

        if self.player.is_none() {
            log::warn!("Scene has no '{}' sprite; the chase will not run", PLAYER_NODE);
        }
        if self.goal.is_none() {
            log::warn!("Scene has no '{}' sprite; the chase cannot be won", GOAL_NODE);
        }
        log::info!(
            "Chase bound: player={:?}, {} zombie(s), goal={:?}",
            self.player,
            self.zombies.len(),
            self.goal
        );
        log::debug!("Contact categories: {:?}", self.roles);

        let player_position = self.player.and_then(|h| view.position(h));
        tick::load_intents(self.player, player_position, &self.zombies, &self.config)
    }

    /// Record a touch notification
    pub fn on_touch(&mut self, touches: &[TouchEvent]) {
        self.touch.record(touches);
    }

    /// Gather the inputs for one tick from the live scene
    pub fn snapshot<V>(&self, view: &V) -> TickContext<H>
    where
        V: SceneView<Handle = H>,
    {
        let sprite = |h: H| {
            let position = view.position(h)?;
            let size = view.size(h)?;
            Some(Sprite::new(h, position, size * 0.5))
        };

        TickContext {
            player: self.player.and_then(sprite),
            zombies: self.zombies.iter().filter_map(|&h| sprite(h)).collect(),
            touch: self.touch.last_touch(),
        }
    }

    /// Steer every mobile sprite after a physics step
    pub fn on_tick<V>(&self, view: &V) -> Vec<Intent<H>>
    where
        V: SceneView<Handle = H>,
    {
        if self.state.is_over() {
            return Vec::new();
        }
        tick::update(&self.snapshot(view), &self.config)
    }

    /// Resolve a contact between two bodies
    ///
    /// Returns a request for the result menu on the first win or loss.
    /// Every later contact is ignored.
    pub fn on_contact(
        &mut self,
        a: CollisionCategory,
        b: CollisionCategory,
    ) -> Option<ResultRequest> {
        if self.state.is_over() {
            return None;
        }

        let outcome = classify(ContactPair::canonical(a, b), &self.roles)?;
        self.state = outcome.into();
        log::info!("Chase over: {:?}", outcome);

        Some(ResultRequest {
            outcome,
            transition: self.config.result_transition.clone(),
        })
    }

    /// Current state of the chase
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Tunables in use
    pub fn config(&self) -> &ChaseConfig {
        &self.config
    }

    /// Bound player handle
    pub fn player(&self) -> Option<H> {
        self.player
    }

    /// Bound zombie handles, in scene order
    pub fn zombies(&self) -> &[H] {
        &self.zombies
    }

    /// Bound goal handle
    pub fn goal(&self) -> Option<H> {
        self.goal
    }

    /// Categories bound for contact resolution
    pub fn roles(&self) -> &RoleCategories {
        &self.roles
    }

    /// Last recorded touch point
    pub fn last_touch(&self) -> Option<ftd_math::Vec2> {
        self.touch.last_touch()
    }
}

impl<H: Copy + Eq + std::fmt::Debug> Default for ChaseController<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ftd_core::{Node, NodeKey, SceneGraph};
    use ftd_input::TouchPhase;
    use ftd_math::Vec2;

    fn scene(zombies: &[Vec2]) -> SceneGraph {
        let mut graph = SceneGraph::new().with_camera(Vec2::ZERO);
        graph.add_node(
            Node::new(Vec2::new(100.0, 100.0), Vec2::new(32.0, 32.0))
                .with_name(PLAYER_NODE)
                .with_category(CollisionCategory::PLAYER, CollisionCategory::ALL)
                .with_dynamic(true),
        );
        for &p in zombies {
            graph.add_node(
                Node::new(p, Vec2::new(32.0, 32.0))
                    .with_name(ZOMBIE_NODE)
                    .with_category(CollisionCategory::ZOMBIE, CollisionCategory::PLAYER)
                    .with_dynamic(true),
            );
        }
        graph.add_node(
            Node::new(Vec2::new(500.0, 500.0), Vec2::new(64.0, 64.0))
                .with_name(GOAL_NODE)
                .with_category(CollisionCategory::GOAL, CollisionCategory::PLAYER),
        );
        graph
    }

    fn touch_at(x: f32, y: f32) -> [TouchEvent; 1] {
        [TouchEvent::new(0, TouchPhase::Moved, Vec2::new(x, y))]
    }

    #[test]
    fn test_defaults() {
        let config = ChaseConfig::default();
        assert_eq!(config.player_speed, 150.0);
        assert_eq!(config.zombie_speed, 75.0);
        assert_eq!(config.zombie_sound, "fear_moan.wav");
        assert_eq!(config.result_transition.name(), "flip_vertical");
        assert_eq!(config.result_transition.duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_load_binds_sprites() {
        let graph = scene(&[Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)]);
        let mut controller: ChaseController<NodeKey> = ChaseController::new();
        let intents = controller.on_load(&graph);

        assert!(controller.player().is_some());
        assert!(controller.goal().is_some());
        assert_eq!(controller.zombies().len(), 2);
        assert_eq!(controller.roles().zombie, Some(CollisionCategory::ZOMBIE));

        // listener + two emitters + camera
        assert_eq!(intents.len(), 4);
        assert_eq!(intents[0], Intent::SetListener { node: controller.player().unwrap() });
        assert_eq!(
            intents[3],
            Intent::CenterCamera { position: Vec2::new(100.0, 100.0) }
        );
    }

    #[test]
    fn test_tick_before_touch_moves_only_zombies() {
        let graph = scene(&[Vec2::ZERO]);
        let mut controller = ChaseController::new();
        controller.on_load(&graph);

        let intents = controller.on_tick(&graph);
        assert_eq!(intents.len(), 2);
        assert!(intents.iter().all(|i| i.node() == Some(&controller.zombies()[0])));
    }

    #[test]
    fn test_touch_persists_across_ticks() {
        let graph = scene(&[]);
        let mut controller = ChaseController::new();
        controller.on_load(&graph);
        controller.on_touch(&touch_at(300.0, 100.0));

        let first = controller.on_tick(&graph);
        let second = controller.on_tick(&graph);
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_contact_ends_chase_once() {
        let graph = scene(&[Vec2::ZERO]);
        let mut controller: ChaseController<NodeKey> = ChaseController::new();
        controller.on_load(&graph);

        let request = controller
            .on_contact(CollisionCategory::ZOMBIE, CollisionCategory::PLAYER)
            .unwrap();
        assert_eq!(request.outcome, Outcome::Lost);
        assert!(!request.did_win());
        assert_eq!(controller.state(), GameState::Lost);

        assert!(controller
            .on_contact(CollisionCategory::PLAYER, CollisionCategory::GOAL)
            .is_none());
        assert_eq!(controller.state(), GameState::Lost);
    }

    #[test]
    fn test_no_ticks_after_outcome() {
        let graph = scene(&[Vec2::ZERO]);
        let mut controller = ChaseController::new();
        controller.on_load(&graph);
        controller.on_touch(&touch_at(0.0, 0.0));
        controller.on_contact(CollisionCategory::PLAYER, CollisionCategory::GOAL);

        assert_eq!(controller.state(), GameState::Won);
        assert!(controller.on_tick(&graph).is_empty());
    }

    #[test]
    fn test_irrelevant_contacts_ignored() {
        let graph = scene(&[Vec2::ZERO, Vec2::X]);
        let mut controller: ChaseController<NodeKey> = ChaseController::new();
        controller.on_load(&graph);

        assert!(controller
            .on_contact(CollisionCategory::ZOMBIE, CollisionCategory::ZOMBIE)
            .is_none());
        assert!(controller
            .on_contact(CollisionCategory::PLAYER, CollisionCategory::WALL)
            .is_none());
        assert_eq!(controller.state(), GameState::Playing);
    }

    #[test]
    fn test_reload_resets_state() {
        let graph = scene(&[]);
        let mut controller: ChaseController<NodeKey> = ChaseController::new();
        controller.on_load(&graph);
        controller.on_touch(&touch_at(1.0, 1.0));
        controller.on_contact(CollisionCategory::PLAYER, CollisionCategory::GOAL);

        controller.on_load(&graph);
        assert_eq!(controller.state(), GameState::Playing);
        assert!(controller.last_touch().is_none());
    }

    #[test]
    fn test_missing_player_skips_everything() {
        let mut graph = SceneGraph::new();
        graph.add_node(
            Node::new(Vec2::ZERO, Vec2::new(32.0, 32.0))
                .with_name(ZOMBIE_NODE)
                .with_category(CollisionCategory::ZOMBIE, CollisionCategory::PLAYER),
        );
        let mut controller: ChaseController<NodeKey> = ChaseController::new();
        let intents = controller.on_load(&graph);

        // Zombie still gets its sound, but nothing else happens
        assert_eq!(intents.len(), 1);
        controller.on_touch(&touch_at(50.0, 50.0));
        assert!(controller.on_tick(&graph).is_empty());
        assert!(controller
            .on_contact(CollisionCategory::PLAYER, CollisionCategory::ZOMBIE)
            .is_none());
    }

    #[test]
    fn test_no_zombies_cannot_lose() {
        let graph = scene(&[]);
        let mut controller: ChaseController<NodeKey> = ChaseController::new();
        controller.on_load(&graph);
        assert_eq!(controller.roles().zombie, None);

        assert!(controller
            .on_contact(CollisionCategory::PLAYER, CollisionCategory::ZOMBIE)
            .is_none());
        assert!(controller
            .on_contact(CollisionCategory::ZOMBIE, CollisionCategory::PLAYER)
            .is_none());
        assert_eq!(controller.state(), GameState::Playing);

        // The goal still ends the chase
        let request = controller
            .on_contact(CollisionCategory::GOAL, CollisionCategory::PLAYER)
            .unwrap();
        assert!(request.did_win());
    }

    #[test]
    fn test_missing_goal_cannot_win() {
        let mut graph = scene(&[Vec2::ZERO]);
        let (goal, _) = graph.get_by_name(GOAL_NODE).unwrap();
        graph.remove_node(goal);

        let mut controller: ChaseController<NodeKey> = ChaseController::new();
        controller.on_load(&graph);
        assert!(controller.goal().is_none());
        assert_eq!(controller.roles().goal, None);

        assert!(controller
            .on_contact(CollisionCategory::PLAYER, CollisionCategory::GOAL)
            .is_none());
        assert_eq!(controller.state(), GameState::Playing);

        // Zombies still steer and can still catch the player
        assert_eq!(controller.on_tick(&graph).len(), 2);
        let request = controller
            .on_contact(CollisionCategory::ZOMBIE, CollisionCategory::PLAYER)
            .unwrap();
        assert_eq!(request.outcome, Outcome::Lost);
    }

    #[test]
    fn test_custom_config() {
        let config = ChaseConfig {
            zombie_speed: 10.0,
            ..ChaseConfig::default()
        };
        let graph = scene(&[Vec2::new(100.0, 0.0)]);
        let mut controller = ChaseController::with_config(config);
        controller.on_load(&graph);

        let intents = controller.on_tick(&graph);
        let velocity = intents.iter().find_map(|i| match i {
            Intent::SetVelocity { velocity, .. } => Some(*velocity),
            _ => None,
        });
        let v = velocity.unwrap();
        assert!((v.length() - 10.0).abs() < 0.001);
        assert!(v.y > 0.0);
    }
}
