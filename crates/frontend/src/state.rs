//! Reducer stores wrapping the state machines from `fleet_types`.

use std::rc::Rc;

use fleet_types::{AppPath, CarouselAction, CarouselState, NavigationState};
use yew::prelude::*;

/// Changes to the shell's navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Show `path`, from a link, a button or a history entry
    Navigate(AppPath),
    /// The location matches no page
    Unknown,
}

/// Shell navigation state.
///
/// `off_map` is set while the location matches no page, in which case no
/// link is highlighted. The last known path is kept underneath.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavStore {
    pub state: NavigationState,
    off_map: bool,
}

impl NavStore {
    pub fn new(active: AppPath) -> Self {
        Self {
            state: NavigationState::new(active),
            off_map: false,
        }
    }

    /// Store for a location path; unknown paths start off the map.
    pub fn from_location(path: &str) -> Self {
        match path.parse::<AppPath>() {
            Ok(active) => Self::new(active),
            Err(_) => Self {
                off_map: true,
                ..Self::default()
            },
        }
    }

    /// The page whose links are highlighted, if any.
    pub fn active_link(&self) -> Option<AppPath> {
        (!self.off_map).then(|| self.state.active())
    }
}

impl Reducible for NavStore {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        match action {
            NavAction::Navigate(path) => {
                let mut state = self.state;
                let transition = state.navigate_to(path);
                if let Some(transition) = transition {
                    log::debug!("navigate {} -> {}", transition.from, transition.to);
                }
                if transition.is_none() && !self.off_map {
                    return self;
                }
                Rc::new(Self {
                    state,
                    off_map: false,
                })
            }
            NavAction::Unknown if self.off_map => self,
            NavAction::Unknown => Rc::new(Self {
                state: self.state,
                off_map: true,
            }),
        }
    }
}

/// What the shell shares with pages: the highlighted path and a way to change it.
#[derive(Clone, PartialEq)]
pub struct NavContext {
    pub active: Option<AppPath>,
    pub navigate: Callback<AppPath>,
}

/// Landing page carousel state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarouselStore {
    pub state: CarouselState,
}

impl Reducible for CarouselStore {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        let mut state = self.state.clone();
        if state.apply(action) {
            Rc::new(Self { state })
        } else {
            self
        }
    }
}
