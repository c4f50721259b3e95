//! The scene context shared by widgets, actions and timers.

use crate::action_manager::ActionManager;
use crate::error::SceneResult;
use crate::graph::SceneGraph;
use crate::node::NodeId;
use crate::scheduler::Scheduler;
use crate::time::FrameTime;
use tactile_core::profiling::profile_function;

/// Scene graph plus the action runner and scheduler that animate it.
///
/// Fields are public so callbacks holding `&mut Scene` can reach each part
/// independently.
pub struct Scene {
    pub graph: SceneGraph,
    pub actions: ActionManager,
    pub scheduler: Scheduler,
    time: FrameTime,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            graph: SceneGraph::new(),
            actions: ActionManager::new(),
            scheduler: Scheduler::new(),
            time: FrameTime::new(),
        }
    }

    pub fn time(&self) -> &FrameTime {
        &self.time
    }

    pub fn time_mut(&mut self) -> &mut FrameTime {
        &mut self.time
    }

    /// Advance the scene by `dt` seconds.
    ///
    /// Actions are stepped first, then the calls they queued run, then timers
    /// fire. A timer cancelled by an earlier callback in the same frame does
    /// not fire.
    pub fn update(&mut self, dt: f32) {
        profile_function!();
        let dt = self.time.advance(dt);

        let calls = self.actions.update(dt, &mut self.graph);
        for call in calls {
            call(self);
        }

        for due in self.scheduler.collect_due(dt) {
            if self.scheduler.is_live(&due) {
                (due.callback)(self);
            }
        }
    }

    /// Remove a node subtree along with its running actions and timers.
    pub fn remove_node(&mut self, id: NodeId) -> SceneResult<Vec<NodeId>> {
        let removed = self.graph.remove(id)?;
        for &node in &removed {
            self.actions.stop_all(node);
            self.scheduler.unschedule_all(node);
        }
        Ok(removed)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
