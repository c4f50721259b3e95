use crate::texture::TextureSource;
use tactile_core::geometry::{Rect, Size};
use tactile_core::math::{Affine2, Vec2};

/// Node identifier in the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A node in the scene graph.
///
/// Position is expressed in the parent's space. The anchor is a normalized
/// point inside the content rectangle that sits at `position` and that scaling
/// happens around.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub position: Vec2,
    pub anchor: Vec2,
    pub content_size: Size<f32>,
    pub scale: Vec2,
    pub visible: bool,
    pub texture: Option<TextureSource>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    /// Create an empty, visible node anchored at its center.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vec2::ZERO,
            anchor: Vec2::splat(0.5),
            content_size: Size::ZERO,
            scale: Vec2::ONE,
            visible: true,
            texture: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create a sprite node drawing `texture`.
    pub fn sprite(name: impl Into<String>, texture: TextureSource) -> Self {
        let mut node = Self::new(name);
        node.texture = Some(texture);
        node
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_anchor(mut self, anchor: Vec2) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_size(mut self, size: Size<f32>) -> Self {
        self.content_size = size;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec2::splat(scale);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Uniform scale factor, reported from the horizontal axis.
    pub fn uniform_scale(&self) -> f32 {
        self.scale.x
    }

    /// Transform from this node's content space into its parent's space.
    pub fn local_transform(&self) -> Affine2 {
        let anchor_offset = self.anchor * self.content_size.to_vec2();
        Affine2::from_translation(self.position)
            * Affine2::from_scale(self.scale)
            * Affine2::from_translation(-anchor_offset)
    }

    /// Content rectangle in the parent's space, ignoring children.
    pub fn bounding_box(&self) -> Rect<f32> {
        Rect::from_size(self.content_size).transformed(&self.local_transform())
    }
}
