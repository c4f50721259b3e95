//! Tactile - touch-reactive sprite buttons
//!
//! Tactile is a small, headless widget toolkit built around a scene graph,
//! an action runner, a frame scheduler and one-by-one touch dispatch:
//!
//! - **Scene**: nodes with position, anchor, size, scale and visibility
//! - **Actions**: scale tweens, sequences and deferred calls
//! - **Scheduler**: keyed periodic timers with delay and repeat count
//! - **Input**: a per-frame touch queue and a claim/swallow dispatcher
//! - **UI**: [`Button`](ui::Button), with focus cues, highlight pulse and cooldown
//!
//! # Quick Start
//!
//! ```
//! use tactile::prelude::*;
//!
//! let mut stage = Stage::new(Config::default());
//! let menu = stage.scene.graph.add_node(Node::new("menu"));
//!
//! let button = Button::builder("#play")
//!     .size(Size::new(120.0, 48.0))
//!     .position(Vec2::new(160.0, 240.0))
//!     .callback(menu, |_scene, _owner, _button| tracing::info!("play"))
//!     .build(&mut stage.scene)
//!     .unwrap();
//! stage.enter(&button);
//!
//! stage.touches.push_began(TouchId(0), Vec2::new(160.0, 240.0));
//! stage.touches.push_ended(TouchId(0), Vec2::new(160.0, 240.0));
//! stage.update(1.0 / 60.0); // dispatches the touches, then runs the callback
//! ```

pub mod stage;

pub use tactile_core as core;
pub use tactile_core::{config, logging, math, profiling};
pub use tactile_input as input;
pub use tactile_scene as scene;
pub use tactile_ui as ui;

pub use stage::Stage;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::stage::Stage;

    pub use tactile_core::config::{Config, ProfilingMode};
    pub use tactile_core::geometry::{Rect, Size};
    pub use tactile_core::math::Vec2;
    pub use tactile_core::profiling::ProfilingBackend;

    pub use tactile_input::{
        HandleStatus, ListenerOptions, Touch, TouchDispatcher, TouchEvent, TouchId, TouchListener,
        TouchQueue,
    };
    pub use tactile_scene::{Action, Node, NodeId, Repeat, Scene, SceneError, TextureSource, TimerKey};
    pub use tactile_ui::{
        Button, ButtonBuilder, ButtonCallback, ButtonEvent, Cue, CuePolicy, FeedbackConfig,
        RejectReason,
    };
}
