//! Main application component with routing.

use fleet_types::{AppPath, NavError};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::NavBar;
use crate::pages::{BusListPage, DashboardPage, IntroPage, RouteListPage, ScheduleListPage};
use crate::state::{NavAction, NavContext, NavStore};

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/buses")]
    Buses,
    #[at("/routes")]
    Routes,
    #[at("/schedules")]
    Schedules,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<AppPath> for Route {
    fn from(path: AppPath) -> Self {
        match path {
            AppPath::Home => Route::Home,
            AppPath::Dashboard => Route::Dashboard,
            AppPath::Buses => Route::Buses,
            AppPath::Routes => Route::Routes,
            AppPath::Schedules => Route::Schedules,
        }
    }
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <IntroPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Buses => html! { <BusListPage /> },
        Route::Routes => html! { <RouteListPage /> },
        Route::Schedules => html! { <ScheduleListPage /> },
        Route::NotFound => html! {
            <div class="card" data-page="not-found">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Shell />
        </BrowserRouter>
    }
}

/// Callback that moves the shell to a page: updates the navigation state
/// through `dispatch`, then pushes the matching route onto the history.
pub(crate) fn navigate_callback(
    dispatch: Callback<NavAction>,
    navigator: Option<Navigator>,
) -> Callback<AppPath> {
    Callback::from(move |path: AppPath| {
        dispatch.emit(NavAction::Navigate(path));
        if let Some(navigator) = &navigator {
            navigator.push(&Route::from(path));
        }
    })
}

/// Navigation shell: owns the active path, renders the nav bar and the
/// page for the current route.
#[function_component(Shell)]
pub(crate) fn shell() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let current_path = location
        .as_ref()
        .map(|l| l.path().to_string())
        .unwrap_or_else(|| AppPath::Home.as_str().to_string());

    let nav = {
        let initial = NavStore::from_location(&current_path);
        use_reducer_eq(move || initial)
    };

    // History navigation (back/forward, typed URLs) bypasses the links
    {
        let dispatcher = nav.dispatcher();
        use_effect_with(current_path, move |path| {
            match path.parse::<AppPath>() {
                Ok(app_path) => dispatcher.dispatch(NavAction::Navigate(app_path)),
                Err(NavError::UnknownPath(path)) => {
                    log::warn!("no page for {path}");
                    dispatcher.dispatch(NavAction::Unknown);
                }
            }
        });
    }

    let navigate = {
        let dispatcher = nav.dispatcher();
        navigate_callback(
            Callback::from(move |action| dispatcher.dispatch(action)),
            navigator,
        )
    };

    let context = NavContext {
        active: nav.active_link(),
        navigate,
    };

    html! {
        <ContextProvider<NavContext> context={context.clone()}>
            <div class="app-shell">
                <NavBar active={context.active} on_navigate={context.navigate.clone()} />
                <main class="main-content">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </ContextProvider<NavContext>>
    }
}
