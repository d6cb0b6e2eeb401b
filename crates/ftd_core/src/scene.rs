//! Scene serialization
//!
//! Provides the Scene struct for loading/saving pre-authored scenes from RON
//! files, and ActiveScene for a scene instantiated into a live SceneGraph.

use ftd_math::Vec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::node::NodeTemplate;
use crate::scene_validator::ValidationError;
use crate::SceneGraph;

/// A serializable scene containing node templates
///
/// Scenes are authored ahead of time; the chase controller finds its sprites
/// in them by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name (used as the key in the scene manager)
    pub name: String,
    /// Node templates in this scene, in children order
    pub nodes: Vec<NodeTemplate>,
    /// Camera start position, None for a scene without a camera
    #[serde(default)]
    pub camera: Option<Vec2>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            camera: None,
        }
    }

    /// Load a scene from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneLoadError> {
        let contents = fs::read_to_string(path)?;
        let scene = ron::from_str(&contents)?;
        Ok(scene)
    }

    /// Save a scene to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneSaveError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Add a node template to this scene
    pub fn add_node(&mut self, node: NodeTemplate) {
        self.nodes.push(node);
    }

    /// Give the scene a camera starting at the given position
    pub fn with_camera(mut self, x: f32, y: f32) -> Self {
        self.camera = Some(Vec2::new(x, y));
        self
    }
}

/// Error loading a scene
#[derive(Debug)]
pub enum SceneLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for SceneLoadError {
    fn from(e: io::Error) -> Self {
        SceneLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneLoadError::Parse(e)
    }
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::Io(e) => write!(f, "IO error: {}", e),
            SceneLoadError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SceneLoadError {}

/// Error saving a scene
#[derive(Debug)]
pub enum SceneSaveError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for SceneSaveError {
    fn from(e: io::Error) -> Self {
        SceneSaveError::Io(e)
    }
}

impl From<ron::Error> for SceneSaveError {
    fn from(e: ron::Error) -> Self {
        SceneSaveError::Serialize(e)
    }
}

impl std::fmt::Display for SceneSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneSaveError::Io(e) => write!(f, "IO error: {}", e),
            SceneSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SceneSaveError {}

/// Unified error type for scene operations
///
/// Used by SceneManager for all scene-related errors: loading, validation
/// and runtime scene switching.
#[derive(Debug)]
pub enum SceneError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// Scene failed validation
    Invalid(Vec<ValidationError>),
    /// Scene not loaded (requested template or scene doesn't exist)
    NotLoaded(String),
    /// No active scene on the stack
    NoActiveScene,
    /// A transition is already running
    TransitionInProgress,
}

impl From<io::Error> for SceneError {
    fn from(e: io::Error) -> Self {
        SceneError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneError::Parse(e)
    }
}

impl From<SceneLoadError> for SceneError {
    fn from(e: SceneLoadError) -> Self {
        match e {
            SceneLoadError::Io(io_err) => SceneError::Io(io_err),
            SceneLoadError::Parse(parse_err) => SceneError::Parse(parse_err),
        }
    }
}

impl From<Vec<ValidationError>> for SceneError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SceneError::Invalid(errors)
    }
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::Io(e) => write!(f, "IO error: {}", e),
            SceneError::Parse(e) => write!(f, "Parse error: {}", e),
            SceneError::Invalid(errors) => {
                write!(f, "Invalid scene:")?;
                for error in errors {
                    write!(f, " {};", error)?;
                }
                Ok(())
            }
            SceneError::NotLoaded(name) => write!(f, "Scene not loaded: {}", name),
            SceneError::NoActiveScene => write!(f, "No active scene"),
            SceneError::TransitionInProgress => write!(f, "Scene transition already in progress"),
        }
    }
}

impl std::error::Error for SceneError {}

/// A runtime scene containing an instantiated SceneGraph
pub struct ActiveScene {
    /// Scene name (from template or custom)
    pub name: String,
    /// The live node graph
    pub graph: SceneGraph,
}

impl ActiveScene {
    /// Create an active scene from a Scene template
    ///
    /// Nodes are instantiated in file order so lookups by shared name
    /// (every zombie) see them in the authored order.
    pub fn from_template(template: &Scene) -> Self {
        let mut graph = SceneGraph::with_capacity(template.nodes.len());
        if let Some(camera) = template.camera {
            graph = graph.with_camera(camera);
        }

        for node_template in &template.nodes {
            graph.add_node(node_template.to_node());
        }

        log::debug!(
            "Instantiated scene '{}' with {} nodes",
            template.name,
            graph.node_count()
        );

        Self {
            name: template.name.clone(),
            graph,
        }
    }

    /// Create a new empty active scene with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            graph: SceneGraph::new(),
        }
    }
}
