pub mod card;
pub mod histogram;
pub mod recent;
pub mod reference;
pub mod sidebar;
pub mod trend;
pub mod value_box;

pub use histogram::PriceHistogramWidget;
pub use recent::RecentCostsWidget;
pub use reference::ReferenceWidget;
pub use sidebar::SidebarWidget;
pub use trend::TrendWidget;
pub use value_box::{CostWidget, TimestampWidget};
