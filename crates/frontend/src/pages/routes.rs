//! Route list page component.

use fleet_types::FleetSnapshot;
use yew::prelude::*;

/// Route list page component.
#[function_component(RouteListPage)]
pub fn route_list_page() -> Html {
    let fleet = use_memo((), |_| FleetSnapshot::sample());

    html! {
        <div data-page="routes">
            <h1>{"Routes"}</h1>

            <div class="card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"Name"}</th>
                            <th>{"From"}</th>
                            <th>{"To"}</th>
                            <th>{"Stops"}</th>
                            <th>{"Distance"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for fleet.routes.iter().map(|route| html! {
                            <tr>
                                <td class="mono">{ &route.id }</td>
                                <td>{ &route.name }</td>
                                <td>{ &route.origin }</td>
                                <td>{ &route.destination }</td>
                                <td>{ route.stops }</td>
                                <td>{ format!("{:.1} km", route.distance_km) }</td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
