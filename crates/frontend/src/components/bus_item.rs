//! Bus list item component.

use fleet_types::{Bus, BusStatus};
use yew::prelude::*;

/// Properties for BusItem component.
#[derive(Properties, PartialEq)]
pub struct BusItemProps {
    pub bus: Bus,
}

fn status_class(status: BusStatus) -> &'static str {
    match status {
        BusStatus::Active => "bus-status active",
        BusStatus::Maintenance => "bus-status maintenance",
        BusStatus::Idle => "bus-status idle",
    }
}

/// Bus list item component.
#[function_component(BusItem)]
pub fn bus_item(props: &BusItemProps) -> Html {
    let bus = &props.bus;

    html! {
        <div class="bus-item">
            <div class={status_class(bus.status)} title={bus.status.label()}></div>
            <div class="bus-info">
                <div class="bus-id">{ &bus.id }</div>
                <div class="bus-description">
                    { format!("{} \u{00B7} {} \u{00B7} {} seats", bus.plate, bus.model, bus.capacity) }
                </div>
            </div>
            <div class="bus-badge">{ bus.status.label() }</div>
        </div>
    }
}
