//! Tactile UI - touch-reactive sprite buttons
//!
//! A [`Button`] is a sprite node plus a touch state machine:
//! - hit testing against the node's world bounds, optional inclusion and
//!   exclusion regions, the visibility chain and a post-tap cooldown
//! - focus and lose-focus scale cues while a finger is down
//! - an optional periodic highlight pulse
//! - a tap callback queued on the owner node's action queue
//!
//! ## Quick Start
//!
//! ```
//! use tactile_core::geometry::Size;
//! use tactile_core::math::Vec2;
//! use tactile_input::{TouchDispatcher, TouchEvent, TouchId};
//! use tactile_scene::{Node, Scene};
//! use tactile_ui::Button;
//!
//! let mut scene = Scene::new();
//! let mut dispatcher = TouchDispatcher::new();
//! let menu = scene.graph.add_node(Node::new("menu"));
//!
//! let button = Button::builder("play.png")
//!     .size(Size::new(100.0, 40.0))
//!     .position(Vec2::new(200.0, 100.0))
//!     .callback(menu, |_scene, _owner, _button| println!("play!"))
//!     .build(&mut scene)
//!     .unwrap();
//! button.borrow_mut().on_enter(&mut scene, &mut dispatcher);
//!
//! let finger = TouchId(0);
//! dispatcher.dispatch(&TouchEvent::began(finger, Vec2::new(200.0, 100.0)), &mut scene);
//! dispatcher.dispatch(&TouchEvent::ended(finger, Vec2::new(200.0, 100.0)), &mut scene);
//! scene.update(1.0 / 60.0); // the callback runs here
//! ```

pub mod button;
pub mod event;
pub mod feedback;

pub use button::{Button, ButtonBuilder, ButtonCallback, EventHook};
pub use event::{ButtonEvent, RejectReason};
pub use feedback::{Cue, CuePolicy, FeedbackConfig, ScalePulse};
