//! Timer driver abstraction and a deterministic manual clock.
//!
//! UI animation is sequenced by scheduling actions on a [`TimerDriver`].
//! In the browser the driver wraps `setTimeout`/`setInterval`; on the host
//! [`ManualClock`] stands in, so timing behaviour can be stepped exactly.

use std::collections::BTreeMap;

/// Something that can run actions later and cancel them.
pub trait TimerDriver<A> {
    /// Owned handle to a scheduled timer.
    type Handle;

    /// Run `action` once after `delay_ms`.
    fn set_timeout(&mut self, delay_ms: u32, action: A) -> Self::Handle;

    /// Run `action` every `period_ms` until cleared.
    fn set_interval(&mut self, period_ms: u32, action: A) -> Self::Handle;

    /// Cancel a timer. Clearing a timeout that already fired is a no-op.
    fn clear(&mut self, handle: Self::Handle);
}

/// Handle to a timer registered with a [`ManualClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Pending<A> {
    due_ms: u64,
    period_ms: Option<u64>,
    action: A,
}

/// Virtual clock that fires timers only when advanced.
///
/// Timers due at the same instant fire in registration order.
#[derive(Debug)]
pub struct ManualClock<A> {
    now_ms: u64,
    next_id: u64,
    pending: BTreeMap<TimerId, Pending<A>>,
}

impl<A> Default for ManualClock<A> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            pending: BTreeMap::new(),
        }
    }
}

impl<A: Clone> ManualClock<A> {
    /// Create a clock at time zero with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of timers still scheduled.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether `id` is still scheduled.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.contains_key(&id)
    }

    /// Move time forward by `ms`, returning every action that fired with
    /// the time it fired at.
    pub fn advance(&mut self, ms: u64) -> Vec<(u64, A)> {
        let target = self.now_ms.saturating_add(ms);
        let mut fired = Vec::new();

        while let Some(id) = self.next_due(target) {
            let Some(timer) = self.pending.get_mut(&id) else {
                break;
            };

            let period_ms = timer.period_ms;
            self.now_ms = timer.due_ms;
            fired.push((timer.due_ms, timer.action.clone()));

            match period_ms {
                Some(period) => timer.due_ms += period,
                None => {
                    self.pending.remove(&id);
                }
            }
        }

        self.now_ms = target;
        fired
    }

    fn next_due(&self, target: u64) -> Option<TimerId> {
        self.pending
            .iter()
            .filter(|(_, timer)| timer.due_ms <= target)
            .min_by_key(|(id, timer)| (timer.due_ms, **id))
            .map(|(id, _)| *id)
    }

    fn schedule(&mut self, delay_ms: u32, period_ms: Option<u64>, action: A) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert(
            id,
            Pending {
                due_ms: self.now_ms + u64::from(delay_ms),
                period_ms,
                action,
            },
        );
        id
    }
}

impl<A: Clone> TimerDriver<A> for ManualClock<A> {
    type Handle = TimerId;

    fn set_timeout(&mut self, delay_ms: u32, action: A) -> TimerId {
        self.schedule(delay_ms, None, action)
    }

    fn set_interval(&mut self, period_ms: u32, action: A) -> TimerId {
        // A zero period would fire forever within a single advance
        let period = u64::from(period_ms.max(1));
        self.schedule(period_ms.max(1), Some(period), action)
    }

    fn clear(&mut self, handle: TimerId) {
        self.pending.remove(&handle);
    }
}
