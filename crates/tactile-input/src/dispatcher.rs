//! One-by-one touch dispatch.
//!
//! Listeners are offered each touch-begin in dispatch order. A listener that
//! returns `true` claims the touch and receives the rest of that gesture; when
//! it was registered with `swallow`, listeners after it never see the touch.
//! Move, end and cancel events only reach claiming listeners.

use crate::queue::TouchBatch;
use crate::touch::{Touch, TouchEvent, TouchId, TouchPhase};
use std::cell::RefCell;
use std::rc::Weak;
use tactile_core::alloc::HashMap;
use tactile_core::profiling::profile_function;
use tactile_scene::Scene;

/// Receives touches from a [`TouchDispatcher`].
pub trait TouchListener {
    /// Offered a new touch. Return `true` to claim it.
    fn on_touch_began(&mut self, touch: &Touch, scene: &mut Scene) -> bool;

    fn on_touch_moved(&mut self, _touch: &Touch, _scene: &mut Scene) {}

    fn on_touch_ended(&mut self, _touch: &Touch, _scene: &mut Scene) {}

    fn on_touch_cancelled(&mut self, _touch: &Touch, _scene: &mut Scene) {}
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HandleStatus: u8 {
        const HANDLED = 0b00000001;
        const CONSUMED = 0b00000010;
    }
}

impl HandleStatus {
    pub const fn is_consumed(&self) -> bool {
        self.contains(Self::CONSUMED)
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn consumed() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::CONSUMED.bits())
    }

    pub const fn handled() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits())
    }

    pub const fn ignored() -> Self {
        Self::empty()
    }
}

/// Handle returned by [`TouchDispatcher::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Hide claimed touches from listeners later in dispatch order.
    pub swallow: bool,
    /// Lower values are offered touches first.
    pub priority: i32,
}

impl Default for ListenerOptions {
    fn default() -> Self {
        Self {
            swallow: true,
            priority: 0,
        }
    }
}

struct Registration {
    id: ListenerId,
    listener: Weak<RefCell<dyn TouchListener>>,
    options: ListenerOptions,
    enabled: bool,
}

/// Delivers touches to registered listeners.
///
/// Within one priority, the most recently registered listener goes first,
/// matching draw order for widgets added on top of each other.
pub struct TouchDispatcher {
    registrations: Vec<Registration>,
    claims: HashMap<TouchId, Vec<ListenerId>>,
    next_id: u64,
}

impl TouchDispatcher {
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
            claims: HashMap::new(),
            next_id: 0,
        }
    }

    /// Register a listener. The dispatcher only holds a weak reference;
    /// dropped listeners are pruned on the next dispatch.
    pub fn add_listener(
        &mut self,
        listener: Weak<RefCell<dyn TouchListener>>,
        options: ListenerOptions,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;

        let at = self
            .registrations
            .iter()
            .position(|r| r.options.priority >= options.priority)
            .unwrap_or(self.registrations.len());
        self.registrations.insert(
            at,
            Registration {
                id,
                listener,
                options,
                enabled: true,
            },
        );
        id
    }

    /// Remove a listener and forget any touches it claimed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.registrations.len();
        self.registrations.retain(|r| r.id != id);
        self.forget_claims_of(id);
        before != self.registrations.len()
    }

    /// Pause or resume a listener. Paused listeners are skipped entirely.
    pub fn set_enabled(&mut self, id: ListenerId, enabled: bool) {
        if let Some(registration) = self.registrations.iter_mut().find(|r| r.id == id) {
            registration.enabled = enabled;
        }
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.registrations.iter().any(|r| r.id == id)
    }

    pub fn listener_count(&self) -> usize {
        self.registrations.len()
    }

    /// Listeners currently holding `touch`.
    pub fn claimants(&self, touch: TouchId) -> &[ListenerId] {
        self.claims.get(&touch).map(Vec::as_slice).unwrap_or(&[])
    }

    fn forget_claims_of(&mut self, id: ListenerId) {
        self.claims.retain(|_, owners| {
            owners.retain(|&owner| owner != id);
            !owners.is_empty()
        });
    }

    /// Dispatch every event of a batch in order.
    pub fn dispatch_batch(&mut self, batch: TouchBatch, scene: &mut Scene) {
        for event in batch {
            self.dispatch(&event, scene);
        }
    }

    /// Dispatch a single event.
    pub fn dispatch(&mut self, event: &TouchEvent, scene: &mut Scene) -> HandleStatus {
        profile_function!();
        let status = match event.phase {
            TouchPhase::Began => self.dispatch_began(&event.touch, scene),
            TouchPhase::Moved => {
                self.dispatch_claimed(event.phase, &event.touch, scene, |l, t, s| {
                    l.on_touch_moved(t, s)
                })
            }
            TouchPhase::Ended => {
                self.dispatch_claimed(event.phase, &event.touch, scene, |l, t, s| {
                    l.on_touch_ended(t, s)
                })
            }
            TouchPhase::Cancelled => {
                self.dispatch_claimed(event.phase, &event.touch, scene, |l, t, s| {
                    l.on_touch_cancelled(t, s)
                })
            }
        };
        self.prune_dropped();
        status
    }

    fn dispatch_began(&mut self, touch: &Touch, scene: &mut Scene) -> HandleStatus {
        let mut status = HandleStatus::ignored();

        for registration in &self.registrations {
            if !registration.enabled {
                continue;
            }
            let Some(listener) = registration.listener.upgrade() else {
                continue;
            };
            let Ok(mut listener) = listener.try_borrow_mut() else {
                tracing::warn!(id = ?registration.id, "listener busy, skipping touch began");
                continue;
            };

            if listener.on_touch_began(touch, scene) {
                self.claims
                    .entry(touch.id)
                    .or_default()
                    .push(registration.id);
                status |= HandleStatus::HANDLED;
                if registration.options.swallow {
                    status |= HandleStatus::CONSUMED;
                    break;
                }
            }
        }

        status
    }

    fn dispatch_claimed(
        &mut self,
        phase: TouchPhase,
        touch: &Touch,
        scene: &mut Scene,
        deliver: fn(&mut (dyn TouchListener + 'static), &Touch, &mut Scene),
    ) -> HandleStatus {
        let owners = if matches!(phase, TouchPhase::Ended | TouchPhase::Cancelled) {
            self.claims.remove(&touch.id)
        } else {
            self.claims.get(&touch.id).cloned()
        };
        let Some(owners) = owners else {
            return HandleStatus::ignored();
        };

        let mut status = HandleStatus::ignored();
        for registration in &self.registrations {
            if !owners.contains(&registration.id) {
                continue;
            }
            let Some(listener) = registration.listener.upgrade() else {
                continue;
            };
            let Ok(mut listener) = listener.try_borrow_mut() else {
                tracing::warn!(id = ?registration.id, ?phase, "listener busy, skipping touch");
                continue;
            };

            deliver(&mut *listener, touch, scene);
            status |= HandleStatus::HANDLED;
            if registration.options.swallow {
                status |= HandleStatus::CONSUMED;
                break;
            }
        }

        status
    }

    fn prune_dropped(&mut self) {
        let dropped: Vec<ListenerId> = self
            .registrations
            .iter()
            .filter(|r| r.listener.strong_count() == 0)
            .map(|r| r.id)
            .collect();
        for id in dropped {
            tracing::debug!(?id, "pruning dropped touch listener");
            self.remove_listener(id);
        }
    }
}

impl Default for TouchDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
