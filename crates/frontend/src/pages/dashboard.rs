//! Dashboard page component with fleet overview.

use fleet_types::{AppPath, BusStatus, FleetSnapshot};
use yew::prelude::*;

use crate::components::StatCard;
use crate::state::NavContext;

/// Dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let fleet = use_memo((), |_| FleetSnapshot::sample());
    let nav = use_context::<NavContext>();
    let summary = fleet.summary();

    let go_to = |path: AppPath| {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(nav) = &nav {
                nav.navigate.emit(path);
            }
        })
    };

    html! {
        <div data-page="dashboard">
            <h1>{"Fleet Dashboard"}</h1>

            <div class="stats-grid">
                <StatCard
                    value={summary.total_buses.to_string()}
                    label={"Total Buses"}
                    hint={format!("{} seats", summary.total_seats)}
                />
                <StatCard
                    value={summary.active_buses.to_string()}
                    label={"In Service"}
                />
                <StatCard
                    value={summary.buses_in_maintenance.to_string()}
                    label={"In Maintenance"}
                />
                <StatCard
                    value={summary.total_routes.to_string()}
                    label={"Routes"}
                />
                <StatCard
                    value={summary.weekday_departures.to_string()}
                    label={"Weekday Departures"}
                />
            </div>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Fleet Status"}</h2>
                </div>

                <div class="status-breakdown">
                    { for BusStatus::ALL.into_iter().map(|status| {
                        let count = fleet.count_by_status(status);
                        let percentage = if summary.total_buses > 0 {
                            (count as f64 / summary.total_buses as f64) * 100.0
                        } else {
                            0.0
                        };

                        html! {
                            <div>
                                <div class="status-row">
                                    <span>{ status.label() }</span>
                                    <span class="text-secondary">
                                        { format!("{} ({:.0}%)", count, percentage) }
                                    </span>
                                </div>
                                <div class="progress-bar">
                                    <div
                                        class={format!("progress-bar-fill {}", status.key())}
                                        style={format!("width: {}%", percentage)}
                                    />
                                </div>
                            </div>
                        }
                    })}
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Quick Actions"}</h2>
                </div>
                <div class="quick-actions">
                    <button class="btn btn-primary" onclick={go_to(AppPath::Buses)}>
                        {"Manage Buses"}
                    </button>
                    <button class="btn btn-secondary" onclick={go_to(AppPath::Schedules)}>
                        {"View Schedules"}
                    </button>
                </div>
            </div>
        </div>
    }
}
