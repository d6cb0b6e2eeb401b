//! Scene management with scene stack and transitions
//!
//! The SceneManager provides a centralized way to manage scenes:
//! - Load scene templates from RON files (validated on load)
//! - Instantiate runtime scenes from templates
//! - Manage a scene stack for overlays
//! - Run animated transitions between scenes
//!
//! # Example
//! ```ignore
//! let mut manager = SceneManager::new();
//! let name = manager.load_scene("assets/scenes/game.ron")?;
//! manager.instantiate(&name)?;
//! manager.push_scene(&name)?;
//!
//! // Later, when the chase ends
//! manager.register_active_scene("menu", ActiveScene::new("menu"));
//! manager.transition_to("menu", TransitionEffect::FlipVertical { duration })?;
//!
//! // Every frame
//! manager.update(dt);
//! ```

use std::collections::HashMap;

use crate::scene::{ActiveScene, SceneError};
use crate::scene_transition::{SceneTransition, TransitionEffect};
use crate::scene_validator::SceneValidator;
use crate::{Scene, SceneGraph};

/// Manages scenes with a stack and a pending transition
pub struct SceneManager {
    /// Loaded scene templates (from files)
    templates: HashMap<String, Scene>,
    /// Instantiated runtime scenes
    scenes: HashMap<String, ActiveScene>,
    /// Stack of active scene names (top = current)
    active_stack: Vec<String>,
    /// Transition currently running, if any
    transition: Option<SceneTransition>,
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneManager {
    /// Create a new empty scene manager
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
            scenes: HashMap::new(),
            active_stack: Vec::new(),
            transition: None,
        }
    }

    // --- Template management ---

    /// Load and validate a scene template from a RON file
    ///
    /// Returns the scene name on success.
    pub fn load_scene(&mut self, path: &str) -> Result<String, SceneError> {
        let scene = Scene::load(path)?;
        SceneValidator::validate_or_error(&scene)?;
        let name = scene.name.clone();
        log::info!("Loaded scene '{}' from {} ({} nodes)", name, path, scene.nodes.len());
        self.templates.insert(name.clone(), scene);
        Ok(name)
    }

    /// Get a loaded scene template by name
    pub fn get_template(&self, name: &str) -> Option<&Scene> {
        self.templates.get(name)
    }

    /// Register a template directly (without loading from file)
    pub fn register_template(&mut self, template: Scene) {
        self.templates.insert(template.name.clone(), template);
    }

    // --- Active scene management ---

    /// Register an active scene directly (bypassing templates)
    pub fn register_active_scene(&mut self, name: &str, scene: ActiveScene) {
        self.scenes.insert(name.to_string(), scene);
    }

    /// Instantiate a runtime scene from a loaded template
    ///
    /// Re-instantiating replaces the previous runtime scene, which is how a
    /// finished chase is restarted from scratch.
    pub fn instantiate(&mut self, template_name: &str) -> Result<(), SceneError> {
        let template = self
            .templates
            .get(template_name)
            .ok_or_else(|| SceneError::NotLoaded(template_name.to_string()))?;

        let active = ActiveScene::from_template(template);
        self.scenes.insert(template_name.to_string(), active);
        Ok(())
    }

    // --- Scene stack ---

    /// Push a scene onto the stack, making it the active scene
    ///
    /// The scene must already be instantiated or registered.
    pub fn push_scene(&mut self, name: &str) -> Result<(), SceneError> {
        if !self.scenes.contains_key(name) {
            return Err(SceneError::NotLoaded(name.to_string()));
        }
        self.active_stack.push(name.to_string());
        Ok(())
    }

    /// Pop the top scene from the stack
    ///
    /// The scene stays in storage; only the stack changes.
    pub fn pop_scene(&mut self) -> Option<String> {
        self.active_stack.pop()
    }

    /// Switch to a specific scene, replacing the current top of the stack
    ///
    /// If the stack is empty, this is equivalent to `push_scene`.
    pub fn switch_to(&mut self, name: &str) -> Result<(), SceneError> {
        if !self.scenes.contains_key(name) {
            return Err(SceneError::NotLoaded(name.to_string()));
        }
        self.active_stack.pop();
        self.active_stack.push(name.to_string());
        Ok(())
    }

    // --- Transitions ---

    /// Start a transition from the active scene to `name`
    ///
    /// The destination becomes active once the transition completes in
    /// [`update`](SceneManager::update). Instant transitions switch right away.
    pub fn transition_to(&mut self, name: &str, effect: TransitionEffect) -> Result<(), SceneError> {
        if self.transition.is_some() {
            return Err(SceneError::TransitionInProgress);
        }
        if !self.scenes.contains_key(name) {
            return Err(SceneError::NotLoaded(name.to_string()));
        }
        let from = self
            .active_scene_name()
            .ok_or(SceneError::NoActiveScene)?
            .to_string();

        log::info!(
            "Transition '{}' -> '{}' ({}, {:.2}s)",
            from,
            name,
            effect.name(),
            effect.duration().as_secs_f32()
        );

        if effect.duration().is_zero() {
            return self.switch_to(name);
        }
        self.transition = Some(SceneTransition::new(from, name.to_string(), effect));
        Ok(())
    }

    /// The transition currently running, if any
    pub fn transition(&self) -> Option<&SceneTransition> {
        self.transition.as_ref()
    }

    /// Check if a transition is running
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    // --- Active scene access ---

    /// Get a reference to the currently active scene (top of stack)
    pub fn active_scene(&self) -> Option<&ActiveScene> {
        self.active_stack.last().and_then(|name| self.scenes.get(name))
    }

    /// Get a mutable reference to the currently active scene (top of stack)
    pub fn active_scene_mut(&mut self) -> Option<&mut ActiveScene> {
        let name = self.active_stack.last()?;
        self.scenes.get_mut(name)
    }

    /// Get a reference to the active scene's graph
    pub fn active_graph(&self) -> Option<&SceneGraph> {
        self.active_scene().map(|scene| &scene.graph)
    }

    /// Get a mutable reference to the active scene's graph
    pub fn active_graph_mut(&mut self) -> Option<&mut SceneGraph> {
        self.active_scene_mut().map(|scene| &mut scene.graph)
    }

    /// Get a scene by name (whether active or not)
    pub fn get_scene(&self, name: &str) -> Option<&ActiveScene> {
        self.scenes.get(name)
    }

    /// Get a mutable reference to a scene by name
    pub fn get_scene_mut(&mut self, name: &str) -> Option<&mut ActiveScene> {
        self.scenes.get_mut(name)
    }

    /// Get the name of the currently active scene
    pub fn active_scene_name(&self) -> Option<&str> {
        self.active_stack.last().map(|s| s.as_str())
    }

    /// Get the number of scenes in the stack
    pub fn stack_depth(&self) -> usize {
        self.active_stack.len()
    }

    /// Check if a scene is currently active (on the stack)
    pub fn is_scene_active(&self, name: &str) -> bool {
        self.active_stack.iter().any(|s| s == name)
    }

    // --- Update ---

    /// Advance the running transition by `dt` seconds
    ///
    /// Returns the name of the newly active scene when a transition finishes.
    pub fn update(&mut self, dt: f32) -> Option<String> {
        let transition = self.transition.as_mut()?;
        if !transition.advance(dt) {
            return None;
        }

        let finished = self.transition.take()?;
        let to = finished.to_scene().to_string();
        match self.switch_to(&to) {
            Ok(()) => {
                log::debug!("Transition to '{}' complete", to);
                Some(to)
            }
            Err(e) => {
                log::warn!("Transition target vanished: {}", e);
                None
            }
        }
    }
}
