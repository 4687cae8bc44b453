//! Schedule list page component.

use fleet_types::{FleetSnapshot, ScheduleEntry};
use yew::prelude::*;

fn format_duration(minutes: i64) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} h"),
        (h, m) => format!("{h} h {m} min"),
    }
}

/// Schedule list page component.
#[function_component(ScheduleListPage)]
pub fn schedule_list_page() -> Html {
    let fleet = use_memo((), |_| FleetSnapshot::sample());

    let row = |entry: &ScheduleEntry| {
        let route_name = fleet
            .route(&entry.route_id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| entry.route_id.clone());
        let plate = fleet
            .bus(&entry.bus_id)
            .map(|b| b.plate.clone())
            .unwrap_or_else(|| entry.bus_id.clone());

        html! {
            <tr>
                <td class="mono">{ entry.departure.format("%H:%M").to_string() }</td>
                <td class="mono">{ entry.arrival.format("%H:%M").to_string() }</td>
                <td>{ route_name }</td>
                <td class="mono">{ plate }</td>
                <td>{ entry.days.label() }</td>
                <td>{ format_duration(entry.duration_minutes()) }</td>
            </tr>
        }
    };

    html! {
        <div data-page="schedules">
            <h1>{"Schedules"}</h1>

            <div class="card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Departs"}</th>
                            <th>{"Arrives"}</th>
                            <th>{"Route"}</th>
                            <th>{"Bus"}</th>
                            <th>{"Runs"}</th>
                            <th>{"Duration"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for fleet.departures().into_iter().map(row) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
