//! Scene graph storage and spatial queries.

use crate::error::{SceneError, SceneResult};
use crate::node::{Node, NodeId};
use indexmap::IndexMap;
use tactile_core::geometry::Rect;
use tactile_core::math::{Affine2, Vec2};

/// Scene graph owning every node and the parent/child links between them.
pub struct SceneGraph {
    nodes: IndexMap<NodeId, Node>,
    next_id: usize,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            next_id: 0,
        }
    }

    /// Add a detached node and return its id.
    pub fn add_node(&mut self, mut node: Node) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        node.parent = None;
        node.children.clear();
        self.nodes.insert(id, node);
        id
    }

    /// Add a node as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, node: Node) -> SceneResult<NodeId> {
        if !self.contains(parent) {
            return Err(SceneError::NodeNotFound { node: parent });
        }
        let id = self.add_node(node);
        self.set_parent(id, Some(parent))?;
        Ok(id)
    }

    /// Move `child` under `parent`, or detach it with `None`.
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) -> SceneResult<()> {
        if !self.contains(child) {
            return Err(SceneError::NodeNotFound { node: child });
        }
        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(SceneError::NodeNotFound { node: parent });
            }
            if self.ancestors(parent).any(|ancestor| ancestor == child) {
                return Err(SceneError::InvalidParent { child, parent });
            }
        }

        let previous = self.nodes[&child].parent;
        if let Some(old) = previous {
            if let Some(old_parent) = self.nodes.get_mut(&old) {
                old_parent.children.retain(|&c| c != child);
            }
        }

        self.nodes[&child].parent = parent;
        if let Some(parent) = parent {
            self.nodes[&parent].children.push(child);
        }
        Ok(())
    }

    /// Remove a node together with its whole subtree.
    ///
    /// Returns the removed ids, the requested node first.
    pub fn remove(&mut self, id: NodeId) -> SceneResult<Vec<NodeId>> {
        if !self.contains(id) {
            return Err(SceneError::NodeNotFound { node: id });
        }
        self.set_parent(id, None)?;

        let mut removed = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.shift_remove(&next) {
                stack.extend(node.children.iter().rev().copied());
                removed.push(next);
            }
        }
        Ok(removed)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    pub fn node(&self, id: NodeId) -> SceneResult<&Node> {
        self.nodes.get(&id).ok_or(SceneError::NodeNotFound { node: id })
    }

    pub fn node_mut(&mut self, id: NodeId) -> SceneResult<&mut Node> {
        self.nodes
            .get_mut(&id)
            .ok_or(SceneError::NodeNotFound { node: id })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|node| node.parent)
    }

    /// Walk from `id` up to its root, starting with `id` itself.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut current = self.contains(id).then_some(id);
        std::iter::from_fn(move || {
            let this = current?;
            current = self.parent(this);
            Some(this)
        })
    }

    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> SceneResult<()> {
        self.node_mut(id)?.visible = visible;
        Ok(())
    }

    /// True when the node and every ancestor are visible.
    ///
    /// Missing nodes are reported as not visible.
    pub fn is_visible_in_hierarchy(&self, id: NodeId) -> bool {
        self.contains(id)
            && self
                .ancestors(id)
                .all(|ancestor| self.nodes.get(&ancestor).is_some_and(|node| node.visible))
    }

    pub fn set_scale(&mut self, id: NodeId, scale: Vec2) -> SceneResult<()> {
        self.node_mut(id)?.scale = scale;
        Ok(())
    }

    pub fn set_position(&mut self, id: NodeId, position: Vec2) -> SceneResult<()> {
        self.node_mut(id)?.position = position;
        Ok(())
    }

    /// Transform from the node's content space to world space.
    pub fn world_transform(&self, id: NodeId) -> SceneResult<Affine2> {
        let mut transform = self.node(id)?.local_transform();
        let mut parent = self.parent(id);
        while let Some(p) = parent {
            let node = self.node(p)?;
            transform = node.local_transform() * transform;
            parent = node.parent;
        }
        Ok(transform)
    }

    /// World-space bounds of the node's content, grown to cover its visible
    /// descendants.
    pub fn world_bounding_box(&self, id: NodeId) -> SceneResult<Rect<f32>> {
        let transform = self.world_transform(id)?;
        self.subtree_bounds(id, &transform)
    }

    fn subtree_bounds(&self, id: NodeId, transform: &Affine2) -> SceneResult<Rect<f32>> {
        let node = self.node(id)?;
        let mut rect = Rect::from_size(node.content_size).transformed(transform);
        for &child_id in &node.children {
            let child = self.node(child_id)?;
            if !child.visible {
                continue;
            }
            let child_transform = *transform * child.local_transform();
            rect = rect.union(&self.subtree_bounds(child_id, &child_transform)?);
        }
        Ok(rect)
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactile_core::geometry::Size;

    #[test]
    fn test_add_child_links_both_ways() {
        let mut graph = SceneGraph::new();
        let root = graph.add_node(Node::new("root"));
        let child = graph.add_child(root, Node::new("child")).unwrap();

        assert_eq!(graph.parent(child), Some(root));
        assert_eq!(graph.node(root).unwrap().children(), &[child]);
    }

    #[test]
    fn test_reparent_into_own_subtree_is_rejected() {
        let mut graph = SceneGraph::new();
        let a = graph.add_node(Node::new("a"));
        let b = graph.add_child(a, Node::new("b")).unwrap();

        assert_eq!(
            graph.set_parent(a, Some(b)),
            Err(SceneError::InvalidParent {
                child: a,
                parent: b
            })
        );
        assert_eq!(
            graph.set_parent(a, Some(a)),
            Err(SceneError::InvalidParent {
                child: a,
                parent: a
            })
        );
    }

    #[test]
    fn test_remove_takes_subtree() {
        let mut graph = SceneGraph::new();
        let root = graph.add_node(Node::new("root"));
        let a = graph.add_child(root, Node::new("a")).unwrap();
        let b = graph.add_child(a, Node::new("b")).unwrap();

        assert_eq!(graph.remove(a).unwrap(), vec![a, b]);
        assert!(!graph.contains(b));
        assert!(graph.node(root).unwrap().children().is_empty());
        assert_eq!(
            graph.remove(a),
            Err(SceneError::NodeNotFound { node: a })
        );
    }

    #[test]
    fn test_visibility_chain() {
        let mut graph = SceneGraph::new();
        let root = graph.add_node(Node::new("root"));
        let panel = graph.add_child(root, Node::new("panel")).unwrap();
        let leaf = graph.add_child(panel, Node::new("leaf")).unwrap();

        assert!(graph.is_visible_in_hierarchy(leaf));
        graph.set_visible(panel, false).unwrap();
        assert!(!graph.is_visible_in_hierarchy(leaf));
        assert!(graph.is_visible_in_hierarchy(root));
        assert!(!graph.is_visible_in_hierarchy(NodeId(999)));
    }

    #[test]
    fn test_world_box_follows_parent_transform() {
        let mut graph = SceneGraph::new();
        let panel = graph.add_node(
            Node::new("panel")
                .with_anchor(Vec2::ZERO)
                .with_position(Vec2::new(100.0, 100.0))
                .with_scale(2.0),
        );
        let button = graph
            .add_child(
                panel,
                Node::new("button")
                    .with_position(Vec2::new(10.0, 10.0))
                    .with_size(Size::new(10.0, 10.0)),
            )
            .unwrap();

        assert_eq!(
            graph.world_bounding_box(button).unwrap(),
            Rect::new(110.0, 110.0, 20.0, 20.0)
        );
    }

    #[test]
    fn test_world_box_includes_visible_children_only() {
        let mut graph = SceneGraph::new();
        let parent = graph.add_node(
            Node::new("parent")
                .with_anchor(Vec2::ZERO)
                .with_size(Size::new(10.0, 10.0)),
        );
        let badge = graph
            .add_child(
                parent,
                Node::new("badge")
                    .with_anchor(Vec2::ZERO)
                    .with_position(Vec2::new(8.0, 8.0))
                    .with_size(Size::new(4.0, 4.0)),
            )
            .unwrap();

        assert_eq!(
            graph.world_bounding_box(parent).unwrap(),
            Rect::new(0.0, 0.0, 12.0, 12.0)
        );

        graph.set_visible(badge, false).unwrap();
        assert_eq!(
            graph.world_bounding_box(parent).unwrap(),
            Rect::new(0.0, 0.0, 10.0, 10.0)
        );
    }
}
