//! Scene validation
//!
//! Validates pre-authored scenes before they are handed to the chase
//! controller. The [`SceneValidator`] checks that the sprites the controller
//! looks up by name exist, that their physics bodies carry usable categories,
//! and that sizes and positions are sane.

use std::collections::HashSet;

use crate::scene::Scene;
use crate::{GOAL_NODE, PLAYER_NODE, ZOMBIE_NODE};

/// Nodes the controller expects to find exactly once
const SINGLETON_NAMES: [&str; 2] = [PLAYER_NODE, GOAL_NODE];

/// Largest coordinate magnitude accepted for a node position
const MAX_COORDINATE: f32 = 100_000.0;

/// Validation error found in a scene
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Scene has no nodes
    EmptyScene,
    /// No node named "player"
    MissingPlayer,
    /// A node that must be unique appears more than once
    DuplicateName(String),
    /// Sprite has a zero or negative width/height
    InvalidSize(String, [f32; 2]),
    /// Player, zombie or goal without a collision category
    MissingCategory(String),
    /// Zombies do not all share the first zombie's category
    MismatchedZombieCategory { expected: u32, found: u32 },
    /// Two different roles share a collision category
    SharedCategory(String, String),
    /// A zombie or the goal has a lower category than the player
    PlayerCategoryNotLowest { role: String, player: u32, found: u32 },
    /// Node is at extreme or non-finite coordinates
    ExtremePosition(String, [f32; 2]),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyScene => write!(f, "Scene has no nodes"),
            ValidationError::MissingPlayer => write!(f, "Scene has no '{}' node", PLAYER_NODE),
            ValidationError::DuplicateName(name) => {
                write!(f, "Duplicate node name: '{}'", name)
            }
            ValidationError::InvalidSize(name, size) => {
                write!(f, "Node '{}' has invalid size [{}, {}]", name, size[0], size[1])
            }
            ValidationError::MissingCategory(name) => {
                write!(f, "Node '{}' has no collision category", name)
            }
            ValidationError::MismatchedZombieCategory { expected, found } => {
                write!(
                    f,
                    "Zombie category {:#x} differs from first zombie's {:#x}",
                    found, expected
                )
            }
            ValidationError::SharedCategory(a, b) => {
                write!(f, "Nodes '{}' and '{}' share a collision category", a, b)
            }
            ValidationError::PlayerCategoryNotLowest { role, player, found } => {
                write!(
                    f,
                    "'{}' category {:#x} is below the player's {:#x}; its contacts will not register",
                    role, found, player
                )
            }
            ValidationError::ExtremePosition(name, pos) => {
                write!(
                    f,
                    "Node '{}' at extreme position [{}, {}] (component abs > {})",
                    name, pos[0], pos[1], MAX_COORDINATE
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Scene validator that checks for common errors
///
/// # Example
/// ```ignore
/// let errors = SceneValidator::validate(&scene);
/// for error in &errors {
///     log::error!("Validation error: {}", error);
/// }
/// ```
pub struct SceneValidator;

impl SceneValidator {
    /// Validate a scene, returning all errors found
    ///
    /// Returns an empty vector if no validation errors are detected.
    pub fn validate(scene: &Scene) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if scene.nodes.is_empty() {
            errors.push(ValidationError::EmptyScene);
            return errors;
        }

        // Singleton sprites
        let mut seen_names = HashSet::new();
        for node in &scene.nodes {
            if let Some(name) = node.name.as_deref() {
                if SINGLETON_NAMES.contains(&name) && !seen_names.insert(name) {
                    errors.push(ValidationError::DuplicateName(name.to_string()));
                }
            }
        }
        if !seen_names.contains(PLAYER_NODE) {
            errors.push(ValidationError::MissingPlayer);
        }

        // Per-node checks
        for (index, node) in scene.nodes.iter().enumerate() {
            let label = node
                .name
                .clone()
                .unwrap_or_else(|| format!("#{}", index));

            if node.size.x <= 0.0 || node.size.y <= 0.0 {
                errors.push(ValidationError::InvalidSize(label.clone(), node.size.to_array()));
            }

            let is_role = matches!(
                node.name.as_deref(),
                Some(PLAYER_NODE) | Some(ZOMBIE_NODE) | Some(GOAL_NODE)
            );
            if is_role && node.category == 0 {
                errors.push(ValidationError::MissingCategory(label.clone()));
            }

            let pos = node.position;
            if !pos.is_finite() || pos.x.abs() > MAX_COORDINATE || pos.y.abs() > MAX_COORDINATE {
                errors.push(ValidationError::ExtremePosition(label, pos.to_array()));
            }
        }

        // Zombies must share one category, or contacts with later zombies
        // would never classify
        let mut zombie_categories = scene
            .nodes
            .iter()
            .filter(|n| n.name.as_deref() == Some(ZOMBIE_NODE))
            .map(|n| n.category);
        if let Some(expected) = zombie_categories.next() {
            for found in zombie_categories {
                if found != expected {
                    errors.push(ValidationError::MismatchedZombieCategory { expected, found });
                }
            }
        }

        // Roles must be distinguishable by category
        let role_category = |role: &str| {
            scene
                .nodes
                .iter()
                .find(|n| n.name.as_deref() == Some(role))
                .map(|n| n.category)
                .filter(|c| *c != 0)
        };
        let roles = [PLAYER_NODE, ZOMBIE_NODE, GOAL_NODE];
        for (i, a) in roles.iter().enumerate() {
            for b in &roles[i + 1..] {
                if let (Some(ca), Some(cb)) = (role_category(a), role_category(b)) {
                    if ca == cb {
                        errors.push(ValidationError::SharedCategory(a.to_string(), b.to_string()));
                    }
                }
            }
        }

        // Contacts are resolved with the lower category first, which must be
        // the player's
        if let Some(player) = role_category(PLAYER_NODE) {
            for role in [ZOMBIE_NODE, GOAL_NODE] {
                if let Some(found) = role_category(role).filter(|c| *c < player) {
                    errors.push(ValidationError::PlayerCategoryNotLowest {
                        role: role.to_string(),
                        player,
                        found,
                    });
                }
            }
        }

        errors
    }

    /// Validate and return Result (Ok if no errors, Err with all errors)
    pub fn validate_or_error(scene: &Scene) -> Result<(), Vec<ValidationError>> {
        let errors = Self::validate(scene);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
