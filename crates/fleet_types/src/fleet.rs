//! Fleet records shown by the list views.
//!
//! The data is static sample content; nothing here is persisted.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Operational status of a bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusStatus {
    /// In service
    Active,
    /// Off the road for repairs or inspection
    Maintenance,
    /// Available but not assigned
    Idle,
}

impl BusStatus {
    pub const ALL: [BusStatus; 3] = [BusStatus::Active, BusStatus::Maintenance, BusStatus::Idle];

    pub fn label(self) -> &'static str {
        match self {
            BusStatus::Active => "Active",
            BusStatus::Maintenance => "Maintenance",
            BusStatus::Idle => "Idle",
        }
    }

    /// Stable lowercase key, used for form values and CSS classes.
    pub fn key(self) -> &'static str {
        match self {
            BusStatus::Active => "active",
            BusStatus::Maintenance => "maintenance",
            BusStatus::Idle => "idle",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        BusStatus::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// A vehicle in the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bus {
    pub id: String,
    pub plate: String,
    pub model: String,
    pub capacity: u32,
    pub status: BusStatus,
}

impl Bus {
    pub fn new(id: &str, plate: &str, model: &str, capacity: u32, status: BusStatus) -> Self {
        Self {
            id: id.to_string(),
            plate: plate.to_string(),
            model: model.to_string(),
            capacity,
            status,
        }
    }
}

/// A transit line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusRoute {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub stops: u32,
    pub distance_km: f32,
}

/// Days a scheduled departure runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceDays {
    Weekdays,
    Weekends,
    Daily,
}

impl ServiceDays {
    pub fn label(self) -> &'static str {
        match self {
            ServiceDays::Weekdays => "Mon-Fri",
            ServiceDays::Weekends => "Sat-Sun",
            ServiceDays::Daily => "Daily",
        }
    }

    /// Whether the departure runs on a typical weekday.
    pub fn runs_weekdays(self) -> bool {
        matches!(self, ServiceDays::Weekdays | ServiceDays::Daily)
    }
}

/// A single scheduled departure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: String,
    pub route_id: String,
    pub bus_id: String,
    pub departure: NaiveTime,
    pub arrival: NaiveTime,
    pub days: ServiceDays,
}

impl ScheduleEntry {
    /// Trip length in minutes. Trips past midnight wrap around.
    pub fn duration_minutes(&self) -> i64 {
        let minutes = (self.arrival - self.departure).num_minutes();
        if minutes < 0 { minutes + 24 * 60 } else { minutes }
    }
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FleetSummary {
    pub total_buses: usize,
    pub active_buses: usize,
    pub buses_in_maintenance: usize,
    pub total_routes: usize,
    pub weekday_departures: usize,
    pub total_seats: u32,
}

/// Bus list filter: free-text search plus optional status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusFilter {
    pub search: String,
    pub status: Option<BusStatus>,
}

impl BusFilter {
    pub fn matches(&self, bus: &Bus) -> bool {
        if self.status.is_some_and(|status| status != bus.status) {
            return false;
        }

        if self.search.is_empty() {
            return true;
        }

        let search_lower = self.search.to_lowercase();
        bus.id.to_lowercase().contains(&search_lower)
            || bus.plate.to_lowercase().contains(&search_lower)
            || bus.model.to_lowercase().contains(&search_lower)
    }
}

/// Everything the list views display.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FleetSnapshot {
    pub buses: Vec<Bus>,
    pub routes: Vec<BusRoute>,
    pub schedules: Vec<ScheduleEntry>,
}

impl FleetSnapshot {
    /// Built-in sample fleet.
    pub fn sample() -> Self {
        let buses = vec![
            Bus::new("BUS-101", "KA-01-F-1101", "Volvo 9400", 52, BusStatus::Active),
            Bus::new("BUS-102", "KA-01-F-1102", "Volvo 9400", 52, BusStatus::Active),
            Bus::new("BUS-103", "KA-01-F-1103", "Tata Starbus", 40, BusStatus::Maintenance),
            Bus::new("BUS-104", "KA-01-F-1104", "Ashok Leyland Viking", 45, BusStatus::Active),
            Bus::new("BUS-105", "KA-01-F-1105", "Eicher Skyline", 32, BusStatus::Idle),
            Bus::new("BUS-106", "KA-01-F-1106", "BYD K9 Electric", 36, BusStatus::Active),
        ];

        let routes = vec![
            route("R-1", "Airport Express", "Central Station", "International Airport", 6, 34.5),
            route("R-2", "Tech Park Loop", "Central Station", "Tech Park", 14, 18.2),
            route("R-3", "University Line", "Old Town", "University Campus", 11, 12.8),
            route("R-4", "Harbour Shuttle", "Market Square", "Harbour Terminal", 8, 9.4),
        ];

        let schedules = vec![
            departure("S-1", "R-1", "BUS-101", (6, 0), (6, 55), ServiceDays::Daily),
            departure("S-2", "R-2", "BUS-102", (7, 15), (8, 5), ServiceDays::Weekdays),
            departure("S-3", "R-3", "BUS-104", (7, 40), (8, 20), ServiceDays::Weekdays),
            departure("S-4", "R-1", "BUS-106", (9, 30), (10, 25), ServiceDays::Daily),
            departure("S-5", "R-4", "BUS-105", (10, 0), (10, 30), ServiceDays::Weekends),
            departure("S-6", "R-2", "BUS-102", (17, 45), (18, 40), ServiceDays::Weekdays),
            departure("S-7", "R-1", "BUS-101", (23, 30), (0, 25), ServiceDays::Daily),
        ];

        Self {
            buses,
            routes,
            schedules,
        }
    }

    pub fn bus(&self, id: &str) -> Option<&Bus> {
        self.buses.iter().find(|b| b.id == id)
    }

    pub fn route(&self, id: &str) -> Option<&BusRoute> {
        self.routes.iter().find(|r| r.id == id)
    }

    /// Buses matching `filter`, in fleet order.
    pub fn filter_buses<'a>(&'a self, filter: &'a BusFilter) -> impl Iterator<Item = &'a Bus> + 'a {
        self.buses.iter().filter(move |b| filter.matches(b))
    }

    /// Departures sorted by departure time.
    pub fn departures(&self) -> Vec<&ScheduleEntry> {
        let mut entries: Vec<&ScheduleEntry> = self.schedules.iter().collect();
        entries.sort_by_key(|e| (e.departure, e.id.clone()));
        entries
    }

    pub fn count_by_status(&self, status: BusStatus) -> usize {
        self.buses.iter().filter(|b| b.status == status).count()
    }

    pub fn summary(&self) -> FleetSummary {
        FleetSummary {
            total_buses: self.buses.len(),
            active_buses: self.count_by_status(BusStatus::Active),
            buses_in_maintenance: self.count_by_status(BusStatus::Maintenance),
            total_routes: self.routes.len(),
            weekday_departures: self
                .schedules
                .iter()
                .filter(|s| s.days.runs_weekdays())
                .count(),
            total_seats: self.buses.iter().map(|b| b.capacity).sum(),
        }
    }
}

fn route(
    id: &str,
    name: &str,
    origin: &str,
    destination: &str,
    stops: u32,
    distance_km: f32,
) -> BusRoute {
    BusRoute {
        id: id.to_string(),
        name: name.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        stops,
        distance_km,
    }
}

fn departure(
    id: &str,
    route_id: &str,
    bus_id: &str,
    departs: (u32, u32),
    arrives: (u32, u32),
    days: ServiceDays,
) -> ScheduleEntry {
    ScheduleEntry {
        id: id.to_string(),
        route_id: route_id.to_string(),
        bus_id: bus_id.to_string(),
        departure: NaiveTime::from_hms_opt(departs.0, departs.1, 0).unwrap_or_default(),
        arrival: NaiveTime::from_hms_opt(arrives.0, arrives.1, 0).unwrap_or_default(),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_references_are_consistent() {
        let fleet = FleetSnapshot::sample();

        for entry in &fleet.schedules {
            assert!(fleet.route(&entry.route_id).is_some(), "{}", entry.id);
            assert!(fleet.bus(&entry.bus_id).is_some(), "{}", entry.id);
        }
    }

    #[test]
    fn test_summary() {
        let summary = FleetSnapshot::sample().summary();

        assert_eq!(summary.total_buses, 6);
        assert_eq!(summary.active_buses, 4);
        assert_eq!(summary.buses_in_maintenance, 1);
        assert_eq!(summary.total_routes, 4);
        assert_eq!(summary.weekday_departures, 6);
        assert_eq!(summary.total_seats, 257);
    }

    #[test]
    fn test_weekday_departures_skip_weekend_only_runs() {
        let mut fleet = FleetSnapshot::sample();
        fleet.schedules.retain(|s| s.days == ServiceDays::Weekends);

        assert!(!fleet.schedules.is_empty());
        assert_eq!(fleet.summary().weekday_departures, 0);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(FleetSnapshot::default().summary(), FleetSummary::default());
    }

    #[test]
    fn test_filter_by_search_is_case_insensitive() {
        let fleet = FleetSnapshot::sample();
        let filter = BusFilter {
            search: "volvo".to_string(),
            status: None,
        };

        let ids: Vec<&str> = fleet.filter_buses(&filter).map(|b| b.id.as_str()).collect();

        assert_eq!(ids, vec!["BUS-101", "BUS-102"]);
    }

    #[test]
    fn test_filter_by_status() {
        let fleet = FleetSnapshot::sample();
        let filter = BusFilter {
            search: String::new(),
            status: Some(BusStatus::Maintenance),
        };

        let ids: Vec<&str> = fleet.filter_buses(&filter).map(|b| b.id.as_str()).collect();

        assert_eq!(ids, vec!["BUS-103"]);
    }

    #[test]
    fn test_filter_combines_search_and_status() {
        let fleet = FleetSnapshot::sample();
        let filter = BusFilter {
            search: "1104".to_string(),
            status: Some(BusStatus::Idle),
        };

        assert_eq!(fleet.filter_buses(&filter).count(), 0);
    }

    #[test]
    fn test_departures_sorted() {
        let fleet = FleetSnapshot::sample();
        let times: Vec<NaiveTime> = fleet.departures().iter().map(|e| e.departure).collect();

        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted);
    }

    #[test]
    fn test_duration_wraps_midnight() {
        let fleet = FleetSnapshot::sample();
        let late = fleet.schedules.iter().find(|s| s.id == "S-7").unwrap();

        assert_eq!(late.duration_minutes(), 55);
    }

    #[test]
    fn test_status_keys_round_trip() {
        for status in BusStatus::ALL {
            assert_eq!(BusStatus::from_key(status.key()), Some(status));
        }
        assert_eq!(BusStatus::from_key("scrapped"), None);
    }

    #[test]
    fn test_schedule_serialization() {
        let fleet = FleetSnapshot::sample();

        let json = serde_json::to_string(&fleet.schedules[0]).unwrap();
        let parsed: ScheduleEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, fleet.schedules[0]);
        assert!(json.contains("\"days\":\"daily\""));
    }
}
