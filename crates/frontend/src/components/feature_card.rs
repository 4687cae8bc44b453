//! Landing page feature card.

use fleet_types::{CardEmphasis, Feature};
use yew::prelude::*;

use crate::components::{Icon, IconKind};

/// Properties for FeatureCard component.
#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
    pub emphasis: CardEmphasis,
}

fn card_class(emphasis: CardEmphasis) -> &'static str {
    match emphasis {
        CardEmphasis::Active => "feature-card feature-card-active",
        CardEmphasis::Neutral => "feature-card",
    }
}

/// Feature card component.
#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let feature = &props.feature;

    html! {
        <div class={card_class(props.emphasis)}>
            <div class="feature-icon">
                <Icon kind={IconKind::from(feature.icon)} class="icon-xl" />
            </div>
            <h3 class="feature-title">{ feature.title }</h3>
            <p class="feature-description">{ feature.description }</p>
        </div>
    }
}
