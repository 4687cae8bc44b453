//! Glyph icons.

use fleet_types::{AppPath, FeatureIcon};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Bus,
    Dashboard,
    MapPin,
    Clock,
    BarChart,
    Settings,
    ChevronRight,
    Menu,
}

impl IconKind {
    fn glyph(self) -> &'static str {
        match self {
            IconKind::Bus => "\u{1F68C}",
            IconKind::Dashboard => "\u{25A6}",
            IconKind::MapPin => "\u{1F4CD}",
            IconKind::Clock => "\u{1F552}",
            IconKind::BarChart => "\u{1F4CA}",
            IconKind::Settings => "\u{2699}",
            IconKind::ChevronRight => "\u{203A}",
            IconKind::Menu => "\u{2630}",
        }
    }

    fn class_name(self) -> &'static str {
        match self {
            IconKind::Bus => "icon-bus",
            IconKind::Dashboard => "icon-dashboard",
            IconKind::MapPin => "icon-map-pin",
            IconKind::Clock => "icon-clock",
            IconKind::BarChart => "icon-bar-chart",
            IconKind::Settings => "icon-settings",
            IconKind::ChevronRight => "icon-chevron-right",
            IconKind::Menu => "icon-menu",
        }
    }

    /// Icon shown beside a nav link.
    pub fn for_path(path: AppPath) -> Self {
        match path {
            AppPath::Home | AppPath::Buses => IconKind::Bus,
            AppPath::Dashboard => IconKind::Dashboard,
            AppPath::Routes => IconKind::MapPin,
            AppPath::Schedules => IconKind::Clock,
        }
    }
}

impl From<FeatureIcon> for IconKind {
    fn from(icon: FeatureIcon) -> Self {
        match icon {
            FeatureIcon::Bus => IconKind::Bus,
            FeatureIcon::MapPin => IconKind::MapPin,
            FeatureIcon::Clock => IconKind::Clock,
            FeatureIcon::BarChart => IconKind::BarChart,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    /// Extra classes (size, color)
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <span
            class={classes!("icon", props.kind.class_name(), props.class.clone())}
            aria-hidden="true"
        >
            { props.kind.glyph() }
        </span>
    }
}
