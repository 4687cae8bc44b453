//! Animated landing page.
//!
//! The hero fades in right after mount, the feature section follows after
//! a short delay, and the emphasis moves to the next feature card on a
//! fixed interval. All three timers belong to this component and are
//! cleared when it unmounts.

use fleet_types::{AppPath, FEATURES, IntroTiming, IntroTimers};
use yew::prelude::*;

use crate::components::{FeatureCard, Icon, IconKind};
use crate::state::{CarouselStore, NavContext};
use crate::timers::BrowserTimers;

/// Properties for IntroPage.
#[derive(Properties, PartialEq, Default)]
pub struct IntroPageProps {
    #[prop_or_default]
    pub timing: IntroTiming,
}

/// Classes for a section that slides in once `shown` flips.
fn stage_class(shown: bool, base: &'static str) -> String {
    let state = if shown { "stage-shown" } else { "stage-hidden" };
    format!("{base} stage {state}")
}

/// Both call-to-action buttons lead to the dashboard.
fn dashboard_callback(nav: Option<NavContext>) -> Callback<()> {
    Callback::from(move |()| match &nav {
        Some(nav) => nav.navigate.emit(AppPath::Dashboard),
        None => log::warn!("no navigation context for the dashboard button"),
    })
}

/// Landing page component.
#[function_component(IntroPage)]
pub fn intro_page(props: &IntroPageProps) -> Html {
    let carousel = use_reducer(CarouselStore::default);
    let nav = use_context::<NavContext>();

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with(props.timing, move |timing| {
            let mut driver = BrowserTimers::new(dispatcher);
            let timers = IntroTimers::start(&mut driver, timing);
            log::debug!("intro timers armed");

            move || {
                timers.teardown(&mut driver);
                log::debug!("intro timers cleared");
            }
        });
    }

    let go_to_dashboard = dashboard_callback(nav).reform(|_: MouseEvent| ());

    let state = &carousel.state;
    let transition = format!(
        "transition-duration: {}ms;",
        props.timing.entrance_transition_ms
    );

    html! {
        <div class="intro" data-page="home">
            <section class="intro-hero">
                <div class={stage_class(state.visible(), "intro-heading")} style={transition.clone()}>
                    <Icon kind={IconKind::Bus} class="icon-hero pulse" />
                    <h1 class="intro-title">
                        {"Welcome to "}
                        <span class="accent">{"Bus Management System"}</span>
                    </h1>
                    <p class="intro-tagline">
                        {"Your complete solution for efficient bus fleet management, route planning, and schedule optimization."}
                    </p>
                </div>

                <div class={stage_class(state.visible(), "intro-cta delay-short")} style={transition.clone()}>
                    <button class="btn btn-primary btn-large" onclick={go_to_dashboard.clone()}>
                        {"Let's Start"}
                        <Icon kind={IconKind::ChevronRight} />
                    </button>
                </div>
            </section>

            <section class={stage_class(state.features_shown(), "intro-features")} style={transition.clone()}>
                <div class="section-header">
                    <h2 class="eyebrow">{"Comprehensive Tools"}</h2>
                    <p class="section-title">{"Everything you need to manage your fleet"}</p>
                </div>
                <div class="feature-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <FeatureCard feature={*feature} emphasis={state.emphasis(index)} />
                    })}
                </div>
            </section>

            <section class={stage_class(state.features_shown(), "intro-banner delay-medium")} style={transition}>
                <h2>{"Ready to streamline your operations?"}</h2>
                <p>{"Get started with BusManager today and experience the difference."}</p>
                <button class="btn btn-light btn-large" onclick={go_to_dashboard}>
                    {"Go to Dashboard"}
                    <Icon kind={IconKind::ChevronRight} />
                </button>
            </section>
        </div>
    }
}
