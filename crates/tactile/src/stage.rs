//! Per-frame driver tying the touch queue, dispatcher and scene together.

use std::cell::RefCell;
use std::rc::Rc;
use tactile_core::config::Config;
use tactile_core::profiling::{self, profile_function};
use tactile_input::{TouchDispatcher, TouchQueue};
use tactile_scene::Scene;
use tactile_ui::Button;

/// A scene plus the input plumbing that feeds it.
///
/// Platform code pushes raw touches into [`Stage::touches`] as they arrive;
/// [`Stage::update`] then dispatches them and advances the scene once per
/// frame.
pub struct Stage {
    pub scene: Scene,
    pub dispatcher: TouchDispatcher,
    pub touches: TouchQueue,
    config: Config,
}

impl Stage {
    pub fn new(config: Config) -> Self {
        let mut scene = Scene::new();
        scene.time_mut().set_max_delta(config.max_frame_delta);
        Self {
            scene,
            dispatcher: TouchDispatcher::new(),
            touches: TouchQueue::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Enter `button` into the scene and start routing touches to it.
    pub fn enter(&mut self, button: &Rc<RefCell<Button>>) {
        button
            .borrow_mut()
            .on_enter(&mut self.scene, &mut self.dispatcher);
    }

    pub fn exit(&mut self, button: &Rc<RefCell<Button>>) {
        button
            .borrow_mut()
            .on_exit(&mut self.scene, &mut self.dispatcher);
    }

    /// Dispatch queued touches, then advance the scene by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        profile_function!();
        let batch = self.touches.drain();
        if !batch.is_empty() {
            tracing::trace!(events = batch.len(), "dispatching touches");
        }
        self.dispatcher.dispatch_batch(batch, &mut self.scene);
        self.scene.update(dt);
        profiling::new_frame();
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
