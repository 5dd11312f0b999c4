//! Scene graph arena with cached world transforms.
//!
//! Each node stores its local transform and lazily caches its world
//! transform. Editing a node's local transform or parent clears the cache
//! for the node and its whole subtree; reading a world transform recomputes
//! the stale part of the ancestor chain and stores the result. Reads take
//! `&self`, so a scene borrowed by a ray caster can still refresh its cache
//! while edits are locked out.

use std::cell::Cell;

use raypick_math::Transform;
use slotmap::{new_key_type, SlotMap};

use crate::error::{Result, SceneError};

new_key_type! {
    /// Stable handle to a node in a [`Scene`].
    pub struct NodeId;
}

/// A scene node.
#[derive(Debug, Clone)]
pub struct Node {
    /// Display name.
    pub name: String,
    active: bool,
    local: Transform,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    world: Cell<Option<Transform>>,
}

impl Node {
    fn new(name: String, local: Transform, parent: Option<NodeId>) -> Self {
        Self {
            name,
            active: true,
            local,
            parent,
            children: Vec::new(),
            world: Cell::new(None),
        }
    }

    /// Whether the node takes part in queries.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Transform relative to the parent.
    pub fn local_transform(&self) -> &Transform {
        &self.local
    }

    /// Parent node, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child nodes in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether the cached world transform is missing.
    pub fn is_world_stale(&self) -> bool {
        self.world.get().is_none()
    }
}

/// Arena of scene nodes.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: SlotMap<NodeId, Node>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the scene has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a root node.
    pub fn add_node(&mut self, name: impl Into<String>, local: Transform) -> NodeId {
        self.nodes.insert(Node::new(name.into(), local, None))
    }

    /// Add a node under `parent`.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        local: Transform,
    ) -> Result<NodeId> {
        if !self.nodes.contains_key(parent) {
            return Err(SceneError::UnknownNode(parent));
        }
        let id = self.nodes.insert(Node::new(name.into(), local, Some(parent)));
        self.nodes[parent].children.push(id);
        Ok(id)
    }

    /// Move `child` under `parent`, or to the root when `parent` is `None`.
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) -> Result<()> {
        let old_parent = self.node(child)?.parent;
        if let Some(parent) = parent {
            self.node(parent)?;
            let mut cursor = Some(parent);
            while let Some(id) = cursor {
                if id == child {
                    return Err(SceneError::CyclicParent { child, parent });
                }
                cursor = self.nodes[id].parent;
            }
        }
        if let Some(old) = old_parent {
            self.nodes[old].children.retain(|&c| c != child);
        }
        if let Some(parent) = parent {
            self.nodes[parent].children.push(child);
        }
        self.nodes[child].parent = parent;
        self.invalidate(child);
        Ok(())
    }

    /// Replace a node's local transform.
    pub fn set_local_transform(&mut self, id: NodeId, local: Transform) -> Result<()> {
        self.node_mut(id)?.local = local;
        self.invalidate(id);
        Ok(())
    }

    /// Enable or disable a node for queries.
    pub fn set_active(&mut self, id: NodeId, active: bool) -> Result<()> {
        self.node_mut(id)?.active = active;
        Ok(())
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id).ok_or(SceneError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id).ok_or(SceneError::UnknownNode(id))
    }

    /// Borrowed view of a node, suitable for registering with a ray caster.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.nodes.contains_key(id).then_some(NodeRef { scene: self, id })
    }

    /// First node with the given name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.name == name)
            .map(|(id, _)| id)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter()
    }

    /// World transform of a node: parent world times local.
    ///
    /// Recomputes any stale cache entries along the ancestor chain and
    /// stores them. Repeated calls without edits return the cached value.
    pub fn world_transform(&self, id: NodeId) -> Result<Transform> {
        let node = self.node(id)?;
        if let Some(world) = node.world.get() {
            return Ok(world);
        }
        let world = match node.parent {
            Some(parent) => self.world_transform(parent)?.then(&node.local),
            None => node.local,
        };
        node.world.set(Some(world));
        Ok(world)
    }

    /// Drop cached world transforms for `id` and its descendants.
    fn invalidate(&self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.get(id) {
                node.world.set(None);
                stack.extend_from_slice(&node.children);
            }
        }
    }
}

/// Borrowed handle to a live node.
///
/// Holding a `NodeRef` borrows the scene immutably, so the node cannot be
/// edited while the handle exists.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'s> {
    scene: &'s Scene,
    id: NodeId,
}

impl<'s> NodeRef<'s> {
    /// Node id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The scene this node lives in.
    pub fn scene(&self) -> &'s Scene {
        self.scene
    }

    /// Node name.
    pub fn name(&self) -> &'s str {
        self.scene.nodes.get(self.id).map_or("", |n| n.name.as_str())
    }

    /// Whether the node takes part in queries.
    pub fn is_active(&self) -> bool {
        self.scene.nodes.get(self.id).is_some_and(|n| n.active)
    }

    /// Refresh-then-read world transform.
    pub fn world_transform(&self) -> Transform {
        // The node outlives the handle; the lookup cannot miss.
        self.scene.world_transform(self.id).unwrap_or_default()
    }
}
