//! Landing page feature carousel.
//!
//! The landing page reveals itself in two stages and then cycles an
//! emphasis highlight over the feature cards. [`CarouselState`] is the
//! pure state; [`IntroTimers`] owns the timers that drive it.

use serde::{Deserialize, Serialize};

use crate::timer::TimerDriver;

/// Icon shown on a feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Bus,
    MapPin,
    Clock,
    BarChart,
}

/// A static showcase card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

/// Feature cards, in display and cycling order.
pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: FeatureIcon::Bus,
        title: "Fleet Management",
        description: "Track and manage your entire bus fleet with real-time updates and maintenance schedules.",
    },
    Feature {
        icon: FeatureIcon::MapPin,
        title: "Route Optimization",
        description: "Create and optimize routes for maximum efficiency and passenger convenience.",
    },
    Feature {
        icon: FeatureIcon::Clock,
        title: "Schedule Planning",
        description: "Plan and adjust schedules with an intuitive interface, ensuring timely service.",
    },
    Feature {
        icon: FeatureIcon::BarChart,
        title: "Analytics Dashboard",
        description: "Get insights with comprehensive analytics and reporting tools for better decision making.",
    },
];

/// Landing page timing, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroTiming {
    /// Delay before the entrance flag flips
    pub enter_delay_ms: u32,
    /// Length of the CSS entrance transition
    pub entrance_transition_ms: u32,
    /// Delay before the feature section is revealed
    pub reveal_delay_ms: u32,
    /// Period of the active-feature cycle
    pub cycle_period_ms: u32,
}

impl Default for IntroTiming {
    fn default() -> Self {
        Self {
            enter_delay_ms: 0,
            entrance_transition_ms: 1_000,
            reveal_delay_ms: 800,
            cycle_period_ms: 3_000,
        }
    }
}

/// Events that move the carousel forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    /// Start the entrance transition
    Enter,
    /// Show the feature section
    RevealFeatures,
    /// Emphasize the next feature card
    Advance,
}

/// Styling of a single feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEmphasis {
    Active,
    Neutral,
}

/// State of the landing page animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    visible: bool,
    features_shown: bool,
    active_index: usize,
    feature_count: usize,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(FEATURES.len())
    }
}

impl CarouselState {
    /// Create a hidden carousel over `feature_count` cards.
    pub fn new(feature_count: usize) -> Self {
        Self {
            visible: false,
            features_shown: false,
            active_index: 0,
            feature_count,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn features_shown(&self) -> bool {
        self.features_shown
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Apply an action. Returns whether anything changed.
    pub fn apply(&mut self, action: CarouselAction) -> bool {
        match action {
            CarouselAction::Enter => !std::mem::replace(&mut self.visible, true),
            CarouselAction::RevealFeatures => !std::mem::replace(&mut self.features_shown, true),
            CarouselAction::Advance => {
                if self.feature_count < 2 {
                    return false;
                }
                self.active_index = (self.active_index + 1) % self.feature_count;
                true
            }
        }
    }

    /// How the card at `index` should be styled.
    pub fn emphasis(&self, index: usize) -> CardEmphasis {
        if index == self.active_index {
            CardEmphasis::Active
        } else {
            CardEmphasis::Neutral
        }
    }
}

/// Timers owned by one mounted landing page.
///
/// Created by [`IntroTimers::start`]; [`IntroTimers::teardown`] must run
/// when the page goes away so no action lands on a dead component.
#[derive(Debug)]
pub struct IntroTimers<H> {
    enter: H,
    reveal: H,
    cycle: H,
}

impl<H> IntroTimers<H> {
    /// Arm the entrance flip, the delayed reveal and the cycle interval.
    pub fn start<D>(driver: &mut D, timing: &IntroTiming) -> Self
    where
        D: TimerDriver<CarouselAction, Handle = H>,
    {
        // The reveal never lands before the entrance; equal delays fire in
        // registration order, so Enter still goes first.
        let reveal_delay_ms = timing.reveal_delay_ms.max(timing.enter_delay_ms);
        let enter = driver.set_timeout(timing.enter_delay_ms, CarouselAction::Enter);
        let reveal = driver.set_timeout(reveal_delay_ms, CarouselAction::RevealFeatures);
        let cycle = driver.set_interval(timing.cycle_period_ms, CarouselAction::Advance);

        Self {
            enter,
            reveal,
            cycle,
        }
    }

    /// Cancel every timer, fired or not.
    pub fn teardown<D>(self, driver: &mut D)
    where
        D: TimerDriver<CarouselAction, Handle = H>,
    {
        driver.clear(self.enter);
        driver.clear(self.reveal);
        driver.clear(self.cycle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{ManualClock, TimerId};

    /// A mounted landing page driven by a manual clock.
    struct Mounted {
        clock: ManualClock<CarouselAction>,
        state: CarouselState,
        timers: Option<IntroTimers<TimerId>>,
    }

    impl Mounted {
        fn mount() -> Self {
            let mut clock = ManualClock::new();
            let timers = IntroTimers::start(&mut clock, &IntroTiming::default());
            Self {
                clock,
                state: CarouselState::default(),
                timers: Some(timers),
            }
        }

        fn advance(&mut self, ms: u64) {
            for (_, action) in self.clock.advance(ms) {
                self.state.apply(action);
            }
        }

        fn unmount(&mut self) {
            if let Some(timers) = self.timers.take() {
                timers.teardown(&mut self.clock);
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let state = CarouselState::default();

        assert!(!state.visible());
        assert!(!state.features_shown());
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_enter_and_reveal_are_one_way() {
        let mut state = CarouselState::default();

        assert!(state.apply(CarouselAction::Enter));
        assert!(!state.apply(CarouselAction::Enter));
        assert!(state.apply(CarouselAction::RevealFeatures));
        assert!(!state.apply(CarouselAction::RevealFeatures));
        assert!(state.visible());
        assert!(state.features_shown());
    }

    #[test]
    fn test_advance_wraps() {
        let mut state = CarouselState::new(4);
        let mut seen = Vec::new();

        for _ in 0..8 {
            state.apply(CarouselAction::Advance);
            seen.push(state.active_index());
        }

        assert_eq!(seen, vec![1, 2, 3, 0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_advance_single_card_is_noop() {
        let mut state = CarouselState::new(1);
        assert!(!state.apply(CarouselAction::Advance));
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_exactly_one_card_emphasized() {
        let mut state = CarouselState::default();

        for _ in 0..FEATURES.len() {
            let active: Vec<usize> = (0..FEATURES.len())
                .filter(|i| state.emphasis(*i) == CardEmphasis::Active)
                .collect();
            assert_eq!(active, vec![state.active_index()]);
            state.apply(CarouselAction::Advance);
        }
    }

    #[test]
    fn test_visible_after_mount_not_before() {
        let mut page = Mounted::mount();
        assert!(!page.state.visible());

        page.advance(0);
        assert!(page.state.visible());
        assert!(!page.state.features_shown());
    }

    #[test]
    fn test_visible_within_entrance_transition() {
        let timing = IntroTiming::default();
        let mut page = Mounted::mount();

        page.advance(u64::from(timing.entrance_transition_ms));

        assert!(page.state.visible());
    }

    #[test]
    fn test_features_revealed_after_delay() {
        let mut page = Mounted::mount();

        page.advance(799);
        assert!(!page.state.features_shown());

        page.advance(1);
        assert!(page.state.features_shown());
    }

    #[test]
    fn test_entrance_ordered_before_reveal() {
        let mut clock = ManualClock::new();
        IntroTimers::start(&mut clock, &IntroTiming::default());

        let fired = clock.advance(1_000);

        assert_eq!(
            fired,
            vec![
                (0, CarouselAction::Enter),
                (800, CarouselAction::RevealFeatures),
            ]
        );
    }

    #[test]
    fn test_late_entrance_still_precedes_reveal() {
        let timing: IntroTiming = serde_json::from_str(r#"{"enter_delay_ms": 1000}"#).unwrap();
        let mut clock = ManualClock::new();
        IntroTimers::start(&mut clock, &timing);
        let mut state = CarouselState::default();

        for (_, action) in clock.advance(900) {
            state.apply(action);
        }
        assert!(!state.visible());
        assert!(!state.features_shown());

        let fired = clock.advance(100);
        assert_eq!(
            fired,
            vec![
                (1_000, CarouselAction::Enter),
                (1_000, CarouselAction::RevealFeatures),
            ]
        );
    }

    #[test]
    fn test_cycle_advances_every_period() {
        let mut page = Mounted::mount();

        page.advance(2_999);
        assert_eq!(page.state.active_index(), 0);

        page.advance(1);
        assert_eq!(page.state.active_index(), 1);

        page.advance(6_000);
        assert_eq!(page.state.active_index(), 3);

        page.advance(3_000);
        assert_eq!(page.state.active_index(), 0);
    }

    #[test]
    fn test_cycle_visits_every_feature_in_order() {
        let mut page = Mounted::mount();
        let mut seen = vec![page.state.active_index()];

        for _ in 0..FEATURES.len() {
            page.advance(3_000);
            seen.push(page.state.active_index());
        }

        assert_eq!(seen, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_unmount_before_reveal_stops_all_mutation() {
        let mut page = Mounted::mount();
        page.advance(500);
        assert!(page.state.visible());

        page.unmount();
        let frozen = page.state.clone();
        page.advance(60_000);

        assert!(!page.state.features_shown());
        assert_eq!(page.state, frozen);
        assert_eq!(page.clock.pending_count(), 0);
    }

    #[test]
    fn test_unmount_after_reveal_stops_cycle() {
        let mut page = Mounted::mount();
        page.advance(3_500);
        assert_eq!(page.state.active_index(), 1);

        page.unmount();
        page.advance(30_000);

        assert_eq!(page.state.active_index(), 1);
        assert_eq!(page.clock.pending_count(), 0);
    }

    #[test]
    fn test_timing_deserializes_with_defaults() {
        let timing: IntroTiming = serde_json::from_str(r#"{"cycle_period_ms": 5000}"#).unwrap();

        assert_eq!(timing.cycle_period_ms, 5_000);
        assert_eq!(timing.reveal_delay_ms, 800);
        assert_eq!(timing.enter_delay_ms, 0);
    }

    #[test]
    fn test_feature_titles() {
        let titles: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec![
                "Fleet Management",
                "Route Optimization",
                "Schedule Planning",
                "Analytics Dashboard",
            ]
        );
    }
}
