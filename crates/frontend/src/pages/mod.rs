//! Page components.

mod buses;
mod dashboard;
mod intro;
mod routes;
mod schedules;

pub use buses::BusListPage;
pub use dashboard::DashboardPage;
pub use intro::IntroPage;
pub use routes::RouteListPage;
pub use schedules::ScheduleListPage;
