//! Scene graph container for nodes
//!
//! The SceneGraph holds every sprite in a scene plus the two scene-level
//! references the chase controller drives: the camera position and the
//! audio listener node.

use ftd_math::Vec2;
use slotmap::{new_key_type, SlotMap};

use crate::Node;

new_key_type! {
    /// Key to a node in the scene graph
    ///
    /// Uses generational indexing so a key to a removed node returns None
    /// instead of pointing at whatever node reuses its slot.
    pub struct NodeKey;
}

/// The scene graph containing all nodes
pub struct SceneGraph {
    /// Node storage
    nodes: SlotMap<NodeKey, Node>,
    /// Keys in insertion order (children order of the scene file)
    order: Vec<NodeKey>,
    /// Camera centre, None when the scene has no camera
    camera: Option<Vec2>,
    /// Node the audio listener is attached to
    listener: Option<NodeKey>,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    /// Create a new empty graph without a camera
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            order: Vec::new(),
            camera: None,
            listener: None,
        }
    }

    /// Create a graph with pre-allocated capacity for nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
            order: Vec::with_capacity(capacity),
            camera: None,
            listener: None,
        }
    }

    /// Give the scene a camera centred on `position`
    pub fn with_camera(mut self, position: Vec2) -> Self {
        self.camera = Some(position);
        self
    }

    /// Add a node to the graph, returning its key
    pub fn add_node(&mut self, node: Node) -> NodeKey {
        let key = self.nodes.insert(node);
        self.order.push(key);
        key
    }

    /// Remove a node from the graph
    pub fn remove_node(&mut self, key: NodeKey) -> Option<Node> {
        let node = self.nodes.remove(key)?;
        self.order.retain(|k| *k != key);
        if self.listener == Some(key) {
            self.listener = None;
        }
        Some(node)
    }

    /// Get a reference to a node by key
    pub fn get(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Get a mutable reference to a node by key
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    /// Find the first node with the given name
    pub fn get_by_name(&self, name: &str) -> Option<(NodeKey, &Node)> {
        self.iter().find(|(_, node)| node.is_named(name))
    }

    /// Iterate over every node with the given name, in insertion order
    pub fn iter_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = (NodeKey, &'a Node)> + 'a {
        self.iter().filter(move |(_, node)| node.is_named(name))
    }

    /// Iterate over keys and nodes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (NodeKey, &Node)> {
        self.order
            .iter()
            .filter_map(move |key| self.nodes.get(*key).map(|node| (*key, node)))
    }

    /// Get the number of nodes
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the graph is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Camera centre (None if the scene has no camera)
    #[inline]
    pub fn camera_position(&self) -> Option<Vec2> {
        self.camera
    }

    /// Move the camera; does nothing if the scene has no camera
    pub fn set_camera_position(&mut self, position: Vec2) {
        if let Some(ref mut camera) = self.camera {
            *camera = position;
        }
    }

    /// Node carrying the audio listener
    #[inline]
    pub fn listener(&self) -> Option<NodeKey> {
        self.listener
    }

    /// Attach the audio listener to a node (None detaches it)
    pub fn set_listener(&mut self, key: Option<NodeKey>) {
        self.listener = key.filter(|k| self.nodes.contains_key(*k));
    }
}
