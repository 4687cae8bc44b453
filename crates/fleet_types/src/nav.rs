//! Navigation paths and the shell's navigation state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from resolving a location to a page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("unknown path: {0}")]
    UnknownPath(String),
}

/// Result type for navigation operations.
pub type Result<T> = std::result::Result<T, NavError>;

/// One of the five pages the shell can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppPath {
    /// Animated landing page at `/`
    #[default]
    Home,
    /// Fleet overview at `/dashboard`
    Dashboard,
    /// Bus list at `/buses`
    Buses,
    /// Route list at `/routes`
    Routes,
    /// Schedule list at `/schedules`
    Schedules,
}

impl AppPath {
    /// Every path, in nav order.
    pub const ALL: [AppPath; 5] = [
        AppPath::Home,
        AppPath::Dashboard,
        AppPath::Buses,
        AppPath::Routes,
        AppPath::Schedules,
    ];

    /// The links shown in both nav renderings. Home is reached through the brand link.
    pub const PRIMARY: [AppPath; 4] = [
        AppPath::Dashboard,
        AppPath::Buses,
        AppPath::Routes,
        AppPath::Schedules,
    ];

    /// URL path for this page.
    pub fn as_str(self) -> &'static str {
        match self {
            AppPath::Home => "/",
            AppPath::Dashboard => "/dashboard",
            AppPath::Buses => "/buses",
            AppPath::Routes => "/routes",
            AppPath::Schedules => "/schedules",
        }
    }

    /// Link label.
    pub fn label(self) -> &'static str {
        match self {
            AppPath::Home => "Home",
            AppPath::Dashboard => "Dashboard",
            AppPath::Buses => "Buses",
            AppPath::Routes => "Routes",
            AppPath::Schedules => "Schedules",
        }
    }
}

impl fmt::Display for AppPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppPath {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = match s.trim_end_matches('/') {
            "" => "/",
            rest => rest,
        };

        AppPath::ALL
            .into_iter()
            .find(|path| path.as_str() == trimmed)
            .ok_or_else(|| NavError::UnknownPath(s.to_string()))
    }
}

/// Whether the nav link pointing at `target` is highlighted.
///
/// Both the wide bar and the stacked menu call this, so they can never
/// disagree about which link is active.
pub fn is_link_active(active: AppPath, target: AppPath) -> bool {
    active == target
}

/// A change of page, reported by [`NavigationState::navigate_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTransition {
    pub from: AppPath,
    pub to: AppPath,
}

/// The shell's record of which page is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    active: AppPath,
}

impl NavigationState {
    /// Create a state showing `active`.
    pub fn new(active: AppPath) -> Self {
        Self { active }
    }

    /// The page currently displayed.
    pub fn active(&self) -> AppPath {
        self.active
    }

    /// Switch to `path`. Returns `None` when `path` is already active.
    pub fn navigate_to(&mut self, path: AppPath) -> Option<NavTransition> {
        if self.active == path {
            return None;
        }

        let transition = NavTransition {
            from: self.active,
            to: path,
        };
        self.active = path;
        Some(transition)
    }

    /// Whether the link for `target` should be highlighted.
    pub fn is_active(&self, target: AppPath) -> bool {
        is_link_active(self.active, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_home() {
        let state = NavigationState::default();
        assert_eq!(state.active(), AppPath::Home);
        assert_eq!(state.active().as_str(), "/");
    }

    #[test]
    fn test_navigate_to_changes_active_path() {
        let mut state = NavigationState::default();

        let transition = state.navigate_to(AppPath::Buses);

        assert_eq!(
            transition,
            Some(NavTransition {
                from: AppPath::Home,
                to: AppPath::Buses,
            })
        );
        assert_eq!(state.active(), AppPath::Buses);
    }

    #[test]
    fn test_navigate_to_active_path_is_idempotent() {
        let mut state = NavigationState::new(AppPath::Routes);

        assert_eq!(state.navigate_to(AppPath::Routes), None);
        assert_eq!(state.navigate_to(AppPath::Routes), None);
        assert_eq!(state.active(), AppPath::Routes);
    }

    #[test]
    fn test_every_link_click_reaches_its_target() {
        for start in AppPath::ALL {
            for target in AppPath::ALL {
                let mut state = NavigationState::new(start);
                state.navigate_to(target);
                assert_eq!(state.active(), target);
            }
        }
    }

    #[test]
    fn test_exactly_one_primary_link_active_per_page() {
        for active in AppPath::PRIMARY {
            let highlighted = AppPath::PRIMARY
                .iter()
                .filter(|target| is_link_active(active, **target))
                .count();
            assert_eq!(highlighted, 1, "{active} should highlight one link");
        }

        // Home has no primary link of its own
        let highlighted = AppPath::PRIMARY
            .iter()
            .filter(|target| is_link_active(AppPath::Home, **target))
            .count();
        assert_eq!(highlighted, 0);
    }

    #[test]
    fn test_parse_known_paths() {
        for path in AppPath::ALL {
            assert_eq!(path.as_str().parse::<AppPath>(), Ok(path));
        }
        assert_eq!("/buses/".parse::<AppPath>(), Ok(AppPath::Buses));
        assert_eq!("".parse::<AppPath>(), Ok(AppPath::Home));
    }

    #[test]
    fn test_parse_unknown_path() {
        let err = "/depots".parse::<AppPath>().unwrap_err();
        assert_eq!(err, NavError::UnknownPath("/depots".to_string()));
        assert_eq!(err.to_string(), "unknown path: /depots");
    }

    #[test]
    fn test_display_matches_path() {
        assert_eq!(AppPath::Schedules.to_string(), "/schedules");
        assert_eq!(AppPath::Dashboard.label(), "Dashboard");
    }
}
