//! Top navigation bar.
//!
//! The primary links are rendered twice: a horizontal bar for wide
//! viewports and a stacked, collapsible menu for narrow ones. CSS decides
//! which one is visible; both read the same `active` path.

use fleet_types::{AppPath, is_link_active};
use yew::prelude::*;

use crate::components::{Icon, IconKind};

fn wide_link_class(active: bool) -> &'static str {
    if active {
        "nav-link nav-link-active"
    } else {
        "nav-link"
    }
}

fn narrow_link_class(active: bool) -> &'static str {
    if active {
        "menu-link menu-link-active"
    } else {
        "menu-link"
    }
}

fn menu_class(open: bool) -> &'static str {
    if open { "nav-menu nav-menu-open" } else { "nav-menu" }
}

/// Properties for NavAnchor.
#[derive(Properties, PartialEq)]
struct NavAnchorProps {
    to: AppPath,
    class: &'static str,
    on_navigate: Callback<AppPath>,
    #[prop_or_default]
    active: bool,
    #[prop_or_default]
    children: Html,
}

/// Anchor that navigates in-app instead of reloading the page.
#[function_component(NavAnchor)]
fn nav_anchor(props: &NavAnchorProps) -> Html {
    let onclick = {
        let to = props.to;
        props.on_navigate.reform(move |e: MouseEvent| {
            e.prevent_default();
            to
        })
    };

    html! {
        <a
            href={props.to.as_str()}
            class={props.class}
            aria-current={props.active.then_some("page")}
            {onclick}
        >
            { props.children.clone() }
        </a>
    }
}

/// Properties for NavBar component.
#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    /// Page whose links are highlighted; `None` off the known pages
    pub active: Option<AppPath>,
    pub on_navigate: Callback<AppPath>,
}

/// Navigation bar component.
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let menu_open = use_state(|| false);

    // Picking a page closes the narrow menu
    let navigate = {
        let menu_open = menu_open.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |path: AppPath| {
            menu_open.set(false);
            on_navigate.emit(path);
        })
    };

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let wide_links = AppPath::PRIMARY.into_iter().map(|path| {
        let active = props.active.is_some_and(|a| is_link_active(a, path));
        html! {
            <NavAnchor
                to={path}
                class={wide_link_class(active)}
                {active}
                on_navigate={navigate.clone()}
            >
                <Icon kind={IconKind::for_path(path)} class="icon-sm" />
                { path.label() }
            </NavAnchor>
        }
    });

    let narrow_links = AppPath::PRIMARY.into_iter().map(|path| {
        let active = props.active.is_some_and(|a| is_link_active(a, path));
        html! {
            <NavAnchor
                to={path}
                class={narrow_link_class(active)}
                {active}
                on_navigate={navigate.clone()}
            >
                { path.label() }
            </NavAnchor>
        }
    });

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <div class="navbar-left">
                    <NavAnchor
                        to={AppPath::Home}
                        class="nav-brand"
                        on_navigate={navigate.clone()}
                    >
                        <Icon kind={IconKind::Bus} class="icon-lg" />
                        <span class="nav-brand-text">{"BusManager"}</span>
                    </NavAnchor>
                    <div class="nav-wide">
                        { for wide_links }
                    </div>
                </div>
                <div class="navbar-actions">
                    <button class="settings-button" aria-label="Settings">
                        <Icon kind={IconKind::Settings} />
                    </button>
                    <button
                        class="menu-toggle"
                        aria-label="Toggle navigation"
                        aria-expanded={(*menu_open).to_string()}
                        onclick={on_toggle_menu}
                    >
                        <Icon kind={IconKind::Menu} />
                    </button>
                </div>
            </div>
            <div class={menu_class(*menu_open)}>
                { for narrow_links }
            </div>
        </nav>
    }
}
