//! Reusable UI components.

mod bus_item;
mod feature_card;
mod icon;
mod nav_bar;
mod stat_card;

pub use bus_item::BusItem;
pub use feature_card::FeatureCard;
pub use icon::{Icon, IconKind};
pub use nav_bar::NavBar;
pub use stat_card::StatCard;
