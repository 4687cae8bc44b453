//! Core types for the BusManager fleet administration UI.
//!
//! This crate holds everything that does not need a browser: the
//! navigation paths and state, the landing page carousel state machine,
//! the timer driver abstraction used to sequence it, and the static fleet
//! records shown by the list views.

pub mod carousel;
pub mod fleet;
pub mod nav;
pub mod timer;

pub use carousel::{
    CardEmphasis, CarouselAction, CarouselState, FEATURES, Feature, FeatureIcon, IntroTiming,
    IntroTimers,
};
pub use fleet::{
    Bus, BusFilter, BusRoute, BusStatus, FleetSnapshot, FleetSummary, ScheduleEntry, ServiceDays,
};
pub use nav::{AppPath, NavError, NavTransition, NavigationState, is_link_active};
pub use timer::{ManualClock, TimerDriver, TimerId};
