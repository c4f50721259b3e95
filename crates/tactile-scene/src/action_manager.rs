//! Per-node action bookkeeping.

use crate::action::{Action, ActionTag, SceneCall, StepContext};
use crate::graph::SceneGraph;
use crate::node::NodeId;
use indexmap::IndexMap;
use tactile_core::profiling::profile_function;

struct RunningAction {
    tag: Option<ActionTag>,
    action: Action,
}

/// Runs actions against nodes in the scene graph.
///
/// Actions on the same node run side by side in the order they were started;
/// when two of them write the same property, the later one wins each frame.
pub struct ActionManager {
    running: IndexMap<NodeId, Vec<RunningAction>>,
}

impl ActionManager {
    pub fn new() -> Self {
        Self {
            running: IndexMap::new(),
        }
    }

    /// Start an untagged action on `node`.
    pub fn run(&mut self, node: NodeId, action: Action) {
        self.push(node, None, action);
    }

    /// Start an action on `node` that can later be stopped by `tag`.
    pub fn run_tagged(&mut self, node: NodeId, tag: ActionTag, action: Action) {
        self.push(node, Some(tag), action);
    }

    fn push(&mut self, node: NodeId, tag: Option<ActionTag>, action: Action) {
        self.running
            .entry(node)
            .or_default()
            .push(RunningAction { tag, action });
    }

    /// Stop every action on `node`. Pending calls are dropped unexecuted.
    pub fn stop_all(&mut self, node: NodeId) -> usize {
        self.running
            .shift_remove(&node)
            .map_or(0, |actions| actions.len())
    }

    /// Stop the actions on `node` carrying `tag`.
    pub fn stop_by_tag(&mut self, node: NodeId, tag: ActionTag) -> usize {
        let Some(actions) = self.running.get_mut(&node) else {
            return 0;
        };
        let before = actions.len();
        actions.retain(|running| running.tag != Some(tag));
        let stopped = before - actions.len();
        if actions.is_empty() {
            self.running.shift_remove(&node);
        }
        stopped
    }

    /// Number of unfinished actions on `node`.
    pub fn running_count(&self, node: NodeId) -> usize {
        self.running.get(&node).map_or(0, Vec::len)
    }

    pub fn is_running(&self, node: NodeId) -> bool {
        self.running_count(node) > 0
    }

    /// Number of unfinished actions on `node` carrying `tag`.
    pub fn count_tagged(&self, node: NodeId, tag: ActionTag) -> usize {
        self.running.get(&node).map_or(0, |actions| {
            actions
                .iter()
                .filter(|running| running.tag == Some(tag))
                .count()
        })
    }

    /// Step every action by `dt` and drop finished ones.
    ///
    /// Actions whose node has left the graph are discarded. Calls queued by
    /// [`CallFunc`](crate::CallFunc) steps are returned in start order for
    /// the caller to run once the graph is no longer borrowed.
    pub fn update(&mut self, dt: f32, graph: &mut SceneGraph) -> Vec<SceneCall> {
        profile_function!();
        let mut calls = Vec::new();

        self.running.retain(|&id, actions| {
            let Some(node) = graph.get_mut(id) else {
                tracing::trace!(?id, dropped = actions.len(), "dropping actions of removed node");
                return false;
            };
            let mut cx = StepContext {
                node,
                calls: &mut calls,
            };
            actions.retain_mut(|running| {
                running.action.step(&mut cx, dt);
                !running.action.is_done()
            });
            !actions.is_empty()
        });

        calls
    }

    pub fn clear(&mut self) {
        self.running.clear();
    }
}

impl Default for ActionManager {
    fn default() -> Self {
        Self::new()
    }
}
