//! Browser timers that dispatch into a reducer.

use fleet_types::TimerDriver;
use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

/// A live `setTimeout` or `setInterval`.
pub enum BrowserTimer {
    Once(Timeout),
    Every(Interval),
}

/// [`TimerDriver`] backed by gloo timers. Fired actions go to `dispatcher`.
pub struct BrowserTimers<R: Reducible + 'static> {
    dispatcher: UseReducerDispatcher<R>,
}

impl<R: Reducible + 'static> BrowserTimers<R> {
    pub fn new(dispatcher: UseReducerDispatcher<R>) -> Self {
        Self { dispatcher }
    }
}

impl<R> TimerDriver<R::Action> for BrowserTimers<R>
where
    R: Reducible + 'static,
    R::Action: Copy + 'static,
{
    type Handle = BrowserTimer;

    fn set_timeout(&mut self, delay_ms: u32, action: R::Action) -> BrowserTimer {
        let dispatcher = self.dispatcher.clone();
        BrowserTimer::Once(Timeout::new(delay_ms, move || dispatcher.dispatch(action)))
    }

    fn set_interval(&mut self, period_ms: u32, action: R::Action) -> BrowserTimer {
        let dispatcher = self.dispatcher.clone();
        BrowserTimer::Every(Interval::new(period_ms, move || {
            dispatcher.dispatch(action)
        }))
    }

    fn clear(&mut self, handle: BrowserTimer) {
        // Dropping a gloo timer clears it
        match handle {
            BrowserTimer::Once(timeout) => drop(timeout),
            BrowserTimer::Every(interval) => drop(interval),
        }
    }
}
