//! Bus list page component.

use fleet_types::{BusFilter, BusStatus, FleetSnapshot};
use yew::prelude::*;

use crate::components::BusItem;

/// Bus list page component.
#[function_component(BusListPage)]
pub fn bus_list_page() -> Html {
    let fleet = use_memo((), |_| FleetSnapshot::sample());
    let search = use_state(String::new);
    let status_filter = use_state(|| None::<BusStatus>);

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_status_change = {
        let status_filter = status_filter.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            status_filter.set(BusStatus::from_key(&select.value()));
        })
    };

    let filter = BusFilter {
        search: (*search).clone(),
        status: *status_filter,
    };
    let buses: Vec<_> = fleet.filter_buses(&filter).cloned().collect();

    html! {
        <div data-page="buses">
            <h1>{"Buses"}</h1>

            <div class="filter-bar">
                <select class="filter-select" onchange={on_status_change}>
                    <option value="">{"All Statuses"}</option>
                    { for BusStatus::ALL.into_iter().map(|status| html! {
                        <option value={status.key()}>{ status.label() }</option>
                    })}
                </select>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by id, plate or model..."
                    oninput={on_search_input}
                />
            </div>

            if buses.is_empty() {
                <div class="card">
                    <p>{"No buses found."}</p>
                </div>
            } else {
                <div class="bus-list">
                    { for buses.into_iter().map(|bus| html! { <BusItem {bus} /> }) }
                </div>
            }
        </div>
    }
}
