//! Tactile Scene
//!
//! A small headless scene graph with the collaborators a sprite widget needs:
//! - [`SceneGraph`] of [`Node`]s with world bounding boxes and a visibility chain
//! - [`ActionManager`] running scale tweens, sequences and deferred calls per node
//! - [`Scheduler`] for periodic, self-cancelling timers keyed by node
//! - [`Scene`], the `&mut` context passed to every callback
//!
//! ```
//! use tactile_scene::{Action, Node, Scene};
//! use tactile_core::math::Vec2;
//! use tactile_core::geometry::Size;
//!
//! let mut scene = Scene::new();
//! let sprite = scene.graph.add_node(
//!     Node::new("sprite").with_position(Vec2::new(100.0, 100.0)).with_size(Size::new(40.0, 20.0)),
//! );
//! scene.actions.run(sprite, Action::scale_to(0.5, Vec2::splat(2.0)));
//! scene.update(0.5);
//! assert_eq!(scene.graph.node(sprite).unwrap().scale, Vec2::splat(2.0));
//! ```

pub mod action;
pub mod action_manager;
pub mod error;
pub mod graph;
pub mod node;
pub mod scene;
pub mod scheduler;
pub mod texture;
pub mod time;

pub use action::{Action, ActionTag, CallFunc, ScaleTo, SceneCall, Sequence};
pub use action_manager::ActionManager;
pub use error::{SceneError, SceneResult};
pub use graph::SceneGraph;
pub use node::{Node, NodeId};
pub use scene::Scene;
pub use scheduler::{Repeat, Scheduler, TimerCallback, TimerKey};
pub use texture::TextureSource;
pub use time::FrameTime;
